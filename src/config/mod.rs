//! # Configuration Module
//!
//! Settings for a detection run come from three layers, highest precedence
//! first: command-line flags (or their `RIPPLES_*` environment variables),
//! the optional `.ripples.toml` file, and the built-in defaults in
//! [`crate::constants`].
//!
//! - **FileConfig**: The parsed configuration file. A missing file is not an
//!   error; a broken one is reported as a warning and ignored.
//! - **DetectConfig**: The validated, typed configuration the executor runs
//!   with, built through `DetectConfigBuilder`.
//!
//! ## Example
//!
//! ```
//! use ripples::cli::DependencySource;
//! use ripples::config::DetectConfig;
//!
//! let config = DetectConfig::builder()
//!     .with_parallelism(8)
//!     .with_transitive(false)
//!     .with_dependency_source(DependencySource::Declared)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.parallelism, 8);
//! assert!(config.gate.check(&["yarn.lock".to_string()]));
//! ```

pub mod detect;
pub mod file;

pub use detect::{DetectConfig, DetectConfigBuilder};
pub use file::FileConfig;
