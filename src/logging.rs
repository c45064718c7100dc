// src/logging.rs
// =============================================================================
// Sets up `tracing` output for the whole program.
//
// Log lines go to stderr so stdout only carries command output (file names,
// README text, confirmations). RUST_LOG overrides the -v flag when set.
// =============================================================================

use tracing_subscriber::{fmt, EnvFilter};

/// Maps the number of -v flags to a default filter directive
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // try_init: a second call (e.g. from tests) is not an error worth dying over
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(7), "trace");
    }
}
