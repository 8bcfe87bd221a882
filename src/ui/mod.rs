//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Report rendering and error display

pub mod output;
