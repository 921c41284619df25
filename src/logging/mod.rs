//! # Logging Module
//!
//! This module provides logging utilities for the boilercheck tool,
//! including:
//! - Verbose logging that can be enabled/disabled
//! - Structured tracing output driven by the `-v`/`-q` flags
//!
//! Verbose and diagnostic output goes to stderr; stdout is reserved for the
//! failing-file listing so the tool stays scriptable.
//!
//! ## Example
//!
//! ```rust
//! use boilercheck::logging::{ColorMode, set_verbose};
//! use boilercheck::verbose_log;
//!
//! // Enable verbose logging
//! set_verbose();
//!
//! // Set color mode to Auto (uses owo-colors' automatic TTY detection)
//! ColorMode::Auto.apply();
//!
//! // Log a verbose message (goes to stderr)
//! verbose_log!("Checking file: {}", "example.go");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};

/// Logs a message to stderr if verbose mode is enabled.
///
/// This macro is used for detailed logging that is only shown when verbose
/// mode is enabled via [`set_verbose`]. It uses the same format string syntax
/// as the standard [`eprintln!`] macro.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}
