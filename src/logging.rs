//! Diagnostic logging to stderr
//!
//! stdout carries only the report, so every log line goes to stderr.
//! `RIPPLES_LOG` takes an `EnvFilter` directive and overrides `--verbose`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RIPPLES_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "ripples=debug" } else { "ripples=warn" }
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber; later calls are ignored
pub fn init(verbose: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "ripples=warn");
        assert_eq!(default_directive(true), "ripples=debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
