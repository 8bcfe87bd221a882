//! engine
//!
//! Orchestrates a comparison run: Fetch -> Parse -> Validate -> Diff.
//!
//! # Architecture
//!
//! Input validation (the distribution tag) happens before the engine is
//! called, in [`crate::cli`]. The engine then:
//!
//! 1. **Fetch**: reads both manifests concurrently through a [`ManifestSource`]
//! 2. **Parse + Validate**: turns each document into a typed manifest,
//!    failing with a path-qualified error on the first schema violation
//! 3. **Diff**: runs [`diff::compare`] over the validated manifests
//!
//! The result is a [`ComparisonReport`]. Printing it is left to
//! [`crate::ui::output`], so nothing is printed unless every stage succeeded.
//!
//! # Invariants
//!
//! - The first fatal error ends the run; nothing is retried
//! - No report exists unless both manifests validated
//!
//! # Example
//!
//! ```
//! use ros2_repos_compare::core::distro::Distro;
//! use ros2_repos_compare::core::tables::NameTables;
//! use ros2_repos_compare::core::urls::ManifestUrls;
//! use ros2_repos_compare::engine;
//! use ros2_repos_compare::source::mock::MockSource;
//!
//! # tokio_test::block_on(async {
//! let urls = ManifestUrls::upstream(Distro::Humble);
//! let source = MockSource::new()
//!     .with_document(&urls.rosdistro, "repositories: {}")
//!     .with_document(&urls.ros2_repos, "repositories: {}");
//!
//! let report = engine::run(&source, Distro::Humble, urls, &NameTables::builtin())
//!     .await
//!     .unwrap();
//! assert!(report.comparison.mismatches.is_empty());
//! # });
//! ```

pub mod diff;

pub use diff::{compare, Comparison, Mismatch};

use thiserror::Error;
use tracing::{debug, info};

use crate::core::distro::Distro;
use crate::core::tables::NameTables;
use crate::core::urls::ManifestUrls;
use crate::manifest::{self, ManifestError};
use crate::source::{ManifestSource, SourceError};

/// Fatal errors from a comparison run.
#[derive(Debug, Error)]
pub enum CompareError {
    /// A manifest could not be fetched.
    #[error(transparent)]
    Fetch(#[from] SourceError),

    /// A manifest could not be parsed or failed schema validation.
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Everything needed to print the outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    /// Distribution that was compared
    pub distro: Distro,
    /// URLs both manifests were read from
    pub urls: ManifestUrls,
    /// Per-repository outcome
    pub comparison: Comparison,
}

/// Fetch, validate, and compare both manifests for a distribution.
///
/// # Errors
///
/// Returns [`CompareError::Fetch`] if either document cannot be fetched and
/// [`CompareError::Manifest`] if either fails to parse or validate.
pub async fn run<S>(
    source: &S,
    distro: Distro,
    urls: ManifestUrls,
    tables: &NameTables,
) -> Result<ComparisonReport, CompareError>
where
    S: ManifestSource + ?Sized,
{
    info!(%distro, rosdistro = %urls.rosdistro, ros2_repos = %urls.ros2_repos, "comparing");
    debug!(source = source.name(), "fetching manifests");

    let (rosdistro_text, ros2_repos_text) = tokio::try_join!(
        source.fetch_text(&urls.rosdistro),
        source.fetch_text(&urls.ros2_repos),
    )?;

    let rosdistro = manifest::parse_rosdistro(&rosdistro_text, &urls.rosdistro)?;
    let ros2_repos = manifest::parse_ros2_repos(&ros2_repos_text, &urls.ros2_repos)?;
    debug!(
        rosdistro_entries = rosdistro.len(),
        ros2_repos_entries = ros2_repos.repositories.len(),
        "manifests validated"
    );

    let comparison = diff::compare(&ros2_repos, &rosdistro, tables);
    info!(
        matched = comparison.matched,
        mismatched = comparison.mismatches.len(),
        skipped = comparison.skipped.len(),
        unmatched = comparison.unmatched.len(),
        "comparison finished"
    );

    Ok(ComparisonReport {
        distro,
        urls,
        comparison,
    })
}
