//! source
//!
//! Where manifest documents come from.
//!
//! # Architecture
//!
//! The [`ManifestSource`] trait is the only way the engine reads remote data.
//! The CLI passes an [`HttpSource`]; tests pass a [`mock::MockSource`].
//!
//! # Modules
//!
//! - `traits`: Core `ManifestSource` trait and `SourceError`
//! - [`http`]: reqwest-backed implementation
//! - [`mock`]: In-memory implementation for deterministic testing

pub mod http;
pub mod mock;
mod traits;

pub use http::HttpSource;
pub use traits::*;
