//! logging
//!
//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout carries only the report. `RUST_LOG` takes
//! precedence over the `--debug` flag when set.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "warn,ros2_repos_compare=debug"
    } else {
        "warn"
    }
}

/// Initialize the tracing subscriber. Later calls are no-ops.
pub fn init(debug: bool) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

        // Ignore the error if a global subscriber is already set (e.g. by a test harness)
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_idempotent() {
        init(false);
        init(true);
    }

    #[test]
    fn debug_filter_targets_crate() {
        assert!(default_filter(true).contains("ros2_repos_compare=debug"));
        assert_eq!(default_filter(false), "warn");
    }
}
