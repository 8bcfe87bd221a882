//! core::tables
//!
//! Skip list and name-remap table.
//!
//! # Design
//!
//! ros2.repos keys are `org/name` paths while rosdistro keys are package
//! names. The short name (the `name` part) usually matches the rosdistro key;
//! the remap table covers the cases where it does not. The skip list names
//! repositories that have no rosdistro release at all.
//!
//! The built-in entries are always present. Configuration can add to them
//! but never remove them.

use std::collections::{BTreeMap, BTreeSet};

/// Short names excluded from comparison.
pub const BUILTIN_SKIP: &[&str] = &["system_tests"];

/// ros2.repos short name to rosdistro key, where the two differ.
pub const BUILTIN_REMAP: &[(&str, &str)] = &[
    ("Fast-DDS", "fastrtps"),
    ("Fast-CDR", "fastcdr"),
    ("ros_tutorials", "turtlesim"),
];

/// The lookup tables used while diffing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTables {
    skip: BTreeSet<String>,
    remap: BTreeMap<String, String>,
}

impl Default for NameTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NameTables {
    /// Tables holding only the built-in entries.
    pub fn builtin() -> Self {
        Self {
            skip: BUILTIN_SKIP.iter().map(|s| s.to_string()).collect(),
            remap: BUILTIN_REMAP
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    /// Add skip entries and remap entries on top of the current tables.
    ///
    /// A remap entry for a short name already in the table replaces it.
    pub fn extend<S, R>(mut self, skip: S, remap: R) -> Self
    where
        S: IntoIterator<Item = String>,
        R: IntoIterator<Item = (String, String)>,
    {
        self.skip.extend(skip);
        self.remap.extend(remap);
        self
    }

    /// Whether a short name is excluded from comparison.
    pub fn is_skipped(&self, short_name: &str) -> bool {
        self.skip.contains(short_name)
    }

    /// The rosdistro key to look up for a short name.
    ///
    /// # Example
    ///
    /// ```
    /// use ros2_repos_compare::core::tables::NameTables;
    ///
    /// let tables = NameTables::builtin();
    /// assert_eq!(tables.rosdistro_key("Fast-DDS"), "fastrtps");
    /// assert_eq!(tables.rosdistro_key("rclcpp"), "rclcpp");
    /// ```
    pub fn rosdistro_key<'a>(&'a self, short_name: &'a str) -> &'a str {
        self.remap
            .get(short_name)
            .map(String::as_str)
            .unwrap_or(short_name)
    }
}

/// The short name of a ros2.repos key: the second `/`-separated segment.
///
/// Keys without a `/` are used whole.
pub fn short_name(repo_path: &str) -> &str {
    repo_path.split('/').nth(1).unwrap_or(repo_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_skips_system_tests() {
        let tables = NameTables::builtin();
        assert!(tables.is_skipped("system_tests"));
        assert!(!tables.is_skipped("rclcpp"));
    }

    #[test]
    fn builtin_remaps() {
        let tables = NameTables::builtin();
        assert_eq!(tables.rosdistro_key("Fast-CDR"), "fastcdr");
        assert_eq!(tables.rosdistro_key("ros_tutorials"), "turtlesim");
    }

    #[test]
    fn extend_adds_and_overrides() {
        let tables = NameTables::builtin().extend(
            vec!["ros2_tracing".to_string()],
            vec![
                ("ros_tutorials".to_string(), "ros_tutorials".to_string()),
                ("urdfdom".to_string(), "urdfdom_py".to_string()),
            ],
        );
        assert!(tables.is_skipped("system_tests"));
        assert!(tables.is_skipped("ros2_tracing"));
        assert_eq!(tables.rosdistro_key("ros_tutorials"), "ros_tutorials");
        assert_eq!(tables.rosdistro_key("urdfdom"), "urdfdom_py");
        assert_eq!(tables.rosdistro_key("Fast-DDS"), "fastrtps");
    }

    #[test]
    fn short_name_takes_second_segment() {
        assert_eq!(short_name("ros2/rclcpp"), "rclcpp");
        assert_eq!(short_name("eProsima/Fast-DDS"), "Fast-DDS");
        assert_eq!(short_name("a/b/c"), "b");
    }

    #[test]
    fn short_name_without_slash_is_whole_key() {
        assert_eq!(short_name("rclcpp"), "rclcpp");
    }
}
