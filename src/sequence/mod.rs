//! Deterministic digit supply derived from a high-precision series expansion

/// Reproducible digit buffer with a wrapping cursor
pub mod digits;
/// Fixed-point arctangent series and Machin-formula digit expansion
pub mod machin;

pub use digits::DigitSource;
