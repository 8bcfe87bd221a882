//! core::urls
//!
//! Derivation of the two manifest URLs for a distribution.
//!
//! The rosdistro registry lives at
//! `{rosdistro_base}/{distro}/distribution.yaml` and the pinned repository
//! list at `{ros2_repos_base}/{distro}-release/ros2.repos`. Both bases default
//! to the upstream GitHub raw-content locations and can be moved by
//! configuration; the ros2.repos URL can also be replaced outright.

use super::distro::Distro;

/// Default base for the rosdistro registry.
pub const DEFAULT_ROSDISTRO_BASE: &str = "https://raw.githubusercontent.com/ros/rosdistro/master";

/// Default base for the ros2/ros2 repository list.
pub const DEFAULT_ROS2_REPOS_BASE: &str = "https://raw.githubusercontent.com/ros2/ros2";

/// The resolved pair of manifest URLs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestUrls {
    /// URL of the rosdistro `distribution.yaml`
    pub rosdistro: String,
    /// URL of the `ros2.repos` file
    pub ros2_repos: String,
}

impl ManifestUrls {
    /// Derive both URLs from the default upstream locations.
    ///
    /// # Example
    ///
    /// ```
    /// use ros2_repos_compare::core::distro::Distro;
    /// use ros2_repos_compare::core::urls::ManifestUrls;
    ///
    /// let urls = ManifestUrls::upstream(Distro::Humble);
    /// assert_eq!(
    ///     urls.ros2_repos,
    ///     "https://raw.githubusercontent.com/ros2/ros2/humble-release/ros2.repos"
    /// );
    /// ```
    pub fn upstream(distro: Distro) -> Self {
        Self::derive(distro, DEFAULT_ROSDISTRO_BASE, DEFAULT_ROS2_REPOS_BASE)
    }

    /// Derive both URLs from explicit bases.
    ///
    /// A trailing `/` on either base is ignored.
    pub fn derive(distro: Distro, rosdistro_base: &str, ros2_repos_base: &str) -> Self {
        Self {
            rosdistro: format!(
                "{}/{}/distribution.yaml",
                rosdistro_base.trim_end_matches('/'),
                distro
            ),
            ros2_repos: format!(
                "{}/{}-release/ros2.repos",
                ros2_repos_base.trim_end_matches('/'),
                distro
            ),
        }
    }

    /// Replace the ros2.repos URL if an override is given.
    pub fn with_ros2_repos_override(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url {
            self.ros2_repos = url.to_string();
        }
        self
    }
}
