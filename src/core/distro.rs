//! core::distro
//!
//! ROS 2 distribution identifiers.
//!
//! # Validation
//!
//! The set of distributions is closed. Anything outside it is rejected
//! with [`DistroError::Unknown`] before any URL is derived or fetched.
//!
//! # Example
//!
//! ```
//! use ros2_repos_compare::core::distro::Distro;
//!
//! let distro: Distro = "humble".parse().unwrap();
//! assert_eq!(distro, Distro::Humble);
//! assert_eq!(distro.to_string(), "humble");
//! assert!("kinetic".parse::<Distro>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing a distribution identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistroError {
    /// The tag is not one of the supported distributions.
    #[error("unknown distribution '{given}', must be one of: {}", Distro::names().join(", "))]
    Unknown {
        /// The rejected input
        given: String,
    },
}

/// A ROS 2 release line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distro {
    Dashing,
    Eloquent,
    Foxy,
    Galactic,
    Humble,
}

impl Distro {
    /// Every supported distribution, oldest first.
    pub const ALL: [Distro; 5] = [
        Distro::Dashing,
        Distro::Eloquent,
        Distro::Foxy,
        Distro::Galactic,
        Distro::Humble,
    ];

    /// The lowercase tag used in URLs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Distro::Dashing => "dashing",
            Distro::Eloquent => "eloquent",
            Distro::Foxy => "foxy",
            Distro::Galactic => "galactic",
            Distro::Humble => "humble",
        }
    }

    /// Tags of all supported distributions.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Distro::as_str).collect()
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Distro {
    type Err = DistroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| DistroError::Unknown {
                given: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_supported_tag() {
        for distro in Distro::ALL {
            assert_eq!(distro.as_str().parse::<Distro>(), Ok(distro));
        }
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = "rolling".parse::<Distro>().unwrap_err();
        assert_eq!(
            err,
            DistroError::Unknown {
                given: "rolling".to_string()
            }
        );
        let message = err.to_string();
        assert!(message.contains("'rolling'"));
        assert!(message.contains("dashing, eloquent, foxy, galactic, humble"));
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!("Humble".parse::<Distro>().is_err());
    }
}
