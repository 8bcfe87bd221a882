//! ros2-repos-compare - Compare ros2.repos pins against rosdistro releases
//!
//! For a ROS 2 distribution, fetches the pinned repository list
//! (`ros2.repos`) and the rosdistro registry (`distribution.yaml`), matches
//! repositories between the two naming schemes, and reports every repository
//! whose pinned version differs from its released version.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, runs the engine)
//! - [`engine`] - Fetch -> Parse -> Validate -> Diff pipeline
//! - [`core`] - Distributions, URLs, name tables, versions, configuration
//! - [`manifest`] - Typed manifests with path-qualified schema validation
//! - [`source`] - Abstraction over where documents are fetched from
//! - [`ui`] - Report rendering
//! - [`logging`] - Diagnostic logging setup
//!
//! # Guarantees
//!
//! 1. Unknown distributions are rejected before any network access
//! 2. No report is printed unless both manifests fetched and validated
//! 3. Repositories without a rosdistro counterpart are reported, not fatal

pub mod cli;
pub mod core;
pub mod engine;
pub mod logging;
pub mod manifest;
pub mod source;
pub mod ui;
