//! engine::diff
//!
//! The comparison itself: a pure function from two validated manifests and
//! the name tables to a [`Comparison`].

use tracing::debug;

use crate::core::tables::{short_name, NameTables};
use crate::core::version::{normalize_ros2_repos, normalize_rosdistro};
use crate::manifest::{RosDistro, Ros2Repos};

/// A repository whose versions disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Short name of the repository
    pub name: String,
    /// Normalised rosdistro version
    pub rosdistro: String,
    /// Normalised ros2.repos version
    pub ros2_repos: String,
}

/// Outcome of comparing every ros2.repos entry, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    /// Entries whose normalised versions differ
    pub mismatches: Vec<Mismatch>,
    /// Short names excluded by the skip list
    pub skipped: Vec<String>,
    /// Short names with no resolvable rosdistro version
    pub unmatched: Vec<String>,
    /// Number of entries whose versions agree
    pub matched: usize,
}

/// Compare ros2.repos pins against rosdistro release versions.
///
/// # Example
///
/// ```
/// use ros2_repos_compare::core::tables::NameTables;
/// use ros2_repos_compare::engine::diff::compare;
/// use ros2_repos_compare::manifest::{parse_ros2_repos, parse_rosdistro};
///
/// let repos = parse_ros2_repos(
///     "repositories:\n  ros2/rcl:\n    type: git\n    url: https://github.com/ros2/rcl.git\n    version: v5.3.2\n",
///     "http://x/ros2.repos",
/// ).unwrap();
/// let distro = parse_rosdistro(
///     "repositories:\n  rcl:\n    release:\n      version: 5.3.2-1\n",
///     "http://x/distribution.yaml",
/// ).unwrap();
///
/// let result = compare(&repos, &distro, &NameTables::builtin());
/// assert!(result.mismatches.is_empty());
/// assert_eq!(result.matched, 1);
/// ```
pub fn compare(repos: &Ros2Repos, distro: &RosDistro, tables: &NameTables) -> Comparison {
    let mut result = Comparison::default();

    for repo in &repos.repositories {
        let name = short_name(&repo.path);
        if tables.is_skipped(name) {
            debug!(repo = %repo.path, "skipped");
            result.skipped.push(name.to_string());
            continue;
        }

        let key = tables.rosdistro_key(name);
        if key != name {
            debug!(repo = %repo.path, key, "remapped");
        }

        let ros2_repos_version = normalize_ros2_repos(&repo.version);
        let rosdistro_version = distro
            .release_version_of(key)
            .map(normalize_rosdistro)
            .filter(|v| !v.is_empty());

        match rosdistro_version {
            None => {
                debug!(repo = %repo.path, key, "no rosdistro release");
                result.unmatched.push(name.to_string());
            }
            Some(rosdistro_version) if rosdistro_version != ros2_repos_version => {
                result.mismatches.push(Mismatch {
                    name: name.to_string(),
                    rosdistro: rosdistro_version.to_string(),
                    ros2_repos: ros2_repos_version.to_string(),
                });
            }
            Some(_) => result.matched += 1,
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{parse_ros2_repos, parse_rosdistro};

    fn repos(entries: &[(&str, &str)]) -> Ros2Repos {
        let mut text = String::from("repositories:\n");
        for (path, version) in entries {
            text.push_str(&format!(
                "  {path}:\n    type: git\n    url: https://github.com/{path}.git\n    version: \"{version}\"\n"
            ));
        }
        parse_ros2_repos(&text, "http://x/ros2.repos").unwrap()
    }

    fn distro(entries: &[(&str, &str)]) -> RosDistro {
        if entries.is_empty() {
            return parse_rosdistro("repositories: {}\n", "http://x/distribution.yaml").unwrap();
        }
        let mut text = String::from("repositories:\n");
        for (key, version) in entries {
            text.push_str(&format!("  {key}:\n    release:\n      version: \"{version}\"\n"));
        }
        parse_rosdistro(&text, "http://x/distribution.yaml").unwrap()
    }

    #[test]
    fn v_prefix_and_revision_are_ignored() {
        let result = compare(
            &repos(&[("ros2/rclcpp", "v1.2.3")]),
            &distro(&[("rclcpp", "1.2.3-1")]),
            &NameTables::builtin(),
        );
        assert!(result.mismatches.is_empty());
        assert!(result.unmatched.is_empty());
        assert_eq!(result.matched, 1);
    }

    #[test]
    fn differing_versions_are_one_mismatch() {
        let result = compare(
            &repos(&[("ros2/rclcpp", "1.2.3")]),
            &distro(&[("rclcpp", "1.3.0-2")]),
            &NameTables::builtin(),
        );
        assert_eq!(
            result.mismatches,
            vec![Mismatch {
                name: "rclcpp".to_string(),
                rosdistro: "1.3.0".to_string(),
                ros2_repos: "1.2.3".to_string(),
            }]
        );
    }

    #[test]
    fn skipped_repo_never_compared() {
        let result = compare(
            &repos(&[("ros2/system_tests", "0.1.0")]),
            &distro(&[("system_tests", "9.9.9-1")]),
            &NameTables::builtin(),
        );
        assert_eq!(result.skipped, vec!["system_tests"]);
        assert!(result.mismatches.is_empty());
        assert!(result.unmatched.is_empty());
    }

    #[test]
    fn missing_key_is_unmatched_and_run_continues() {
        let result = compare(
            &repos(&[("ros2/unknown", "1.0.0"), ("ros2/rcl", "2.0.0")]),
            &distro(&[("rcl", "2.1.0-1")]),
            &NameTables::builtin(),
        );
        assert_eq!(result.unmatched, vec!["unknown"]);
        assert_eq!(result.mismatches.len(), 1);
        assert_eq!(result.mismatches[0].name, "rcl");
    }

    #[test]
    fn remap_uses_mapped_key() {
        let result = compare(
            &repos(&[("eProsima/Fast-DDS", "v2.6.2")]),
            &distro(&[("Fast-DDS", "1.0.0-1"), ("fastrtps", "2.6.2-1")]),
            &NameTables::builtin(),
        );
        assert!(result.mismatches.is_empty());
        assert_eq!(result.matched, 1);
    }

    #[test]
    fn remap_to_missing_key_is_unmatched_under_short_name() {
        let result = compare(
            &repos(&[("ros/ros_tutorials", "1.4.2")]),
            &distro(&[("ros_tutorials", "1.4.2-1")]),
            &NameTables::builtin(),
        );
        assert_eq!(result.unmatched, vec!["ros_tutorials"]);
    }

    #[test]
    fn unreleased_entry_is_unmatched() {
        let distro = parse_rosdistro(
            "repositories:\n  rcl:\n    source:\n      type: git\n",
            "http://x/distribution.yaml",
        )
        .unwrap();
        let result = compare(&repos(&[("ros2/rcl", "1.0.0")]), &distro, &NameTables::builtin());
        assert_eq!(result.unmatched, vec!["rcl"]);
    }

    #[test]
    fn empty_rosdistro_version_is_unmatched() {
        let result = compare(
            &repos(&[("ros2/rcl", "1.0.0")]),
            &distro(&[("rcl", "-1")]),
            &NameTables::builtin(),
        );
        assert_eq!(result.unmatched, vec!["rcl"]);
        assert!(result.mismatches.is_empty());
    }

    #[test]
    fn results_keep_document_order() {
        let result = compare(
            &repos(&[("a/zeta", "1"), ("a/alpha", "1"), ("a/mid", "1")]),
            &distro(&[]),
            &NameTables::builtin(),
        );
        assert_eq!(result.unmatched, vec!["zeta", "alpha", "mid"]);
    }
}
