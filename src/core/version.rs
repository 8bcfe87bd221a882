//! core::version
//!
//! Version string normalisation for the two manifest formats.
//!
//! ros2.repos pins are often git tags such as `v1.2.3`; rosdistro release
//! versions carry a packaging revision such as `1.2.3-1`. Both are reduced to
//! the bare upstream version before comparison. Comparison itself is plain
//! string equality.

/// Strip a single leading `v` from a ros2.repos version.
///
/// # Example
///
/// ```
/// use ros2_repos_compare::core::version::normalize_ros2_repos;
///
/// assert_eq!(normalize_ros2_repos("v1.2.3"), "1.2.3");
/// assert_eq!(normalize_ros2_repos("1.2.3"), "1.2.3");
/// assert_eq!(normalize_ros2_repos("vv1"), "v1");
/// ```
pub fn normalize_ros2_repos(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Keep the portion of a rosdistro version before the first `-`.
///
/// # Example
///
/// ```
/// use ros2_repos_compare::core::version::normalize_rosdistro;
///
/// assert_eq!(normalize_rosdistro("1.2.3-1"), "1.2.3");
/// assert_eq!(normalize_rosdistro("1.2.3"), "1.2.3");
/// ```
pub fn normalize_rosdistro(version: &str) -> &str {
    version.split('-').next().unwrap_or(version)
}
