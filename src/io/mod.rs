//! Input/output, configuration and error handling

/// Command-line interface and console output
pub mod cli;
/// Algorithm constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Progress reporting for multi-creation runs
pub mod progress;
