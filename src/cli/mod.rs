//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and reject unknown distributions
//! - Load configuration and derive the manifest URLs
//! - Run the engine on a tokio runtime and print the report
//!
//! # Architecture
//!
//! The CLI layer is thin. Parsing is done by clap; the comparison itself is
//! [`crate::engine::run`]. When no distribution is given, usage is printed
//! and nothing else happens.

pub mod args;

pub use args::Cli;

use std::io::{self, Write};

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::core::config::Config;
use crate::engine;
use crate::logging;
use crate::source::{HttpSource, ManifestSource};
use crate::ui::output;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.debug);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(cli, &HttpSource::new(), &mut out)
}

/// Run a parsed command line against a given source, writing to `out`.
///
/// Nothing is written to `out` unless the comparison completes.
pub fn run_with<S, W>(cli: Cli, source: &S, out: &mut W) -> Result<()>
where
    S: ManifestSource + ?Sized,
    W: Write,
{
    let Some(distro) = cli.distro else {
        write!(out, "{}", Cli::usage())?;
        return Ok(());
    };

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(path) = config.path() {
        debug!(path = %path.display(), "using config file");
    }

    let urls = config.manifest_urls(distro, cli.ros2_repos_url.as_deref());
    let tables = config.name_tables();

    let rt = tokio::runtime::Runtime::new()?;
    let report = rt.block_on(engine::run(source, distro, urls, &tables))?;

    output::write_report(out, &report).context("failed to write report")?;
    out.flush()?;
    Ok(())
}
