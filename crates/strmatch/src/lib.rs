//! # strmatch Command-Line Library
//!
//! Shared pieces of the `strmatch` binary:
//! - **commands**: one function per subcommand, returning the text to print
//! - **config**: environment overrides merged with command-line flags
//! - **error**: front-end error type
//! - **tracing**: logging setup
//!
//! ## Usage
//!
//! ```bash
//! strmatch closest hep length size help world
//! strmatch --json top hep -n 2 length size help world
//! strmatch case snake closestString
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod tracing;

// Re-export commonly used items at crate root
pub use commands::Format;
pub use config::Settings;
pub use error::{Error, Result};
