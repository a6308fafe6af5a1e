//! Logging setup for the strmatch binary.
//!
//! Library events from `strmatch_core` (ranking sizes, empty candidate sets)
//! and command events from this crate share one filter. stdout carries only
//! command output; logs go to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when `--log-level` is not a known level name
pub const DEFAULT_LEVEL: &str = "warn";

/// Filter directive for a `--log-level` value.
///
/// Unknown names fall back to [`DEFAULT_LEVEL`] rather than failing startup.
pub fn directive_for(log_level: &str) -> &'static str {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "error" => "error",
        "off" => "off",
        _ => DEFAULT_LEVEL,
    }
}

/// Initialize tracing from `--log-level`. `RUST_LOG` wins when set.
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive_for(log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_for_known_levels() {
        assert_eq!(directive_for("debug"), "debug");
        assert_eq!(directive_for(" INFO "), "info");
        assert_eq!(directive_for("off"), "off");
    }

    #[test]
    fn test_directive_for_unknown_level() {
        assert_eq!(directive_for("verbose"), DEFAULT_LEVEL);
        assert_eq!(directive_for(""), DEFAULT_LEVEL);
    }
}
