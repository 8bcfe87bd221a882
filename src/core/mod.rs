//! core
//!
//! Domain types and rules shared by every stage of the comparison.
//!
//! # Modules
//!
//! - [`distro`] - Supported distribution identifiers
//! - [`urls`] - Manifest URL derivation
//! - [`tables`] - Skip list and name-remap table
//! - [`version`] - Version normalisation
//! - [`config`] - Optional configuration file

pub mod config;
pub mod distro;
pub mod tables;
pub mod urls;
pub mod version;
