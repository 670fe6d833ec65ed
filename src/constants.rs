//! Configuration constants for ripples
//!
//! Built-in defaults used when neither the command line nor the configuration
//! file provides a value.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while dependency lookups are running
    pub const SPINNER_FRAMES: &[&str] = &["🌊 ", "🌊·", "🌊∘", "🌊○", "🌊◯", "🌊○", "🌊∘", "🌊·"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "json";
}

/// Detection defaults
pub mod detect {
    /// Ref that changed files are compared against
    pub const DEFAULT_BASE_REF: &str = "master";

    /// Configuration file looked up in the current directory
    pub const DEFAULT_CONFIG_FILE: &str = ".ripples.toml";

    /// Maximum number of dependency lookups running at once
    pub const DEFAULT_PARALLELISM: usize = 5;

    /// Root-level manifests and lockfiles (`package.json`, `yarn.lock`, ...)
    pub const DEFAULT_ALWAYS_DIRTY_PATTERN: &str = r"(?i)^[a-z0-9]+\.(json|lock)$";
}
