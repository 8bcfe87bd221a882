//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `<DISTRO>`: Distribution to compare (usage is printed when omitted)
//! - `--ros2-repos-url` / `-r`: Replace the derived ros2.repos URL
//! - `--config` / `-c`: Explicit config file
//! - `--debug`: Enable debug logging
//! - `--help` / `-h`, `--version` / `-V`

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::core::distro::Distro;

/// Compare the versions of the ros2.repos file and the rosdistro.
#[derive(Parser, Debug)]
#[command(name = "ros2-repos-compare")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Compare humble against upstream
    ros2-repos-compare humble

    # Compare a ros2.repos from a fork or branch
    ros2-repos-compare humble -r https://raw.githubusercontent.com/me/ros2/my-branch/ros2.repos")]
pub struct Cli {
    /// Distribution to compare: dashing, eloquent, foxy, galactic, humble
    #[arg(value_parser = str::parse::<Distro>)]
    pub distro: Option<Distro>,

    /// The url to the ros2.repos file
    #[arg(short = 'r', long, value_name = "URL")]
    pub ros2_repos_url: Option<String>,

    /// Read configuration from this file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Render the usage text.
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn distro_is_optional() {
        let cli = Cli::try_parse_from(["ros2-repos-compare"]).unwrap();
        assert!(cli.distro.is_none());
    }

    #[test]
    fn parses_distro_and_override() {
        let cli = Cli::try_parse_from([
            "ros2-repos-compare",
            "galactic",
            "-r",
            "http://mirror/ros2.repos",
        ])
        .unwrap();
        assert_eq!(cli.distro, Some(Distro::Galactic));
        assert_eq!(cli.ros2_repos_url.as_deref(), Some("http://mirror/ros2.repos"));
        assert!(!cli.debug);
    }

    #[test]
    fn long_override_flag() {
        let cli =
            Cli::try_parse_from(["ros2-repos-compare", "--ros2-repos-url", "http://m/r", "foxy"])
                .unwrap();
        assert_eq!(cli.ros2_repos_url.as_deref(), Some("http://m/r"));
        assert_eq!(cli.distro, Some(Distro::Foxy));
    }

    #[test]
    fn unknown_distro_rejected() {
        let err = Cli::try_parse_from(["ros2-repos-compare", "rolling"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        let message = err.to_string();
        assert!(message.contains("unknown distribution 'rolling'"));
        assert!(message.contains("dashing, eloquent, foxy, galactic, humble"));
    }

    #[test]
    fn usage_lists_possible_values() {
        let usage = Cli::usage();
        assert!(usage.contains("humble"));
        assert!(usage.contains("--ros2-repos-url"));
    }
}
