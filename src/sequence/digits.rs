//! Reproducible digit stream with a monotonic, self-resetting cursor

use std::time::{SystemTime, UNIX_EPOCH};

use crate::io::error::{Result, invalid_parameter};
use crate::sequence::machin::machin_digits;

/// Fixed buffer of decimal digits read through an advancing cursor
///
/// Two sources built with the same precision hold identical buffers. The
/// cursor is the only state that changes, and it always stays inside the
/// buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSource {
    buffer: Vec<u8>,
    position: usize,
}

impl DigitSource {
    /// Expand `precision` digits and start the cursor at a wall-clock offset
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is zero or the expansion fails
    pub fn new(precision: usize) -> Result<Self> {
        let buffer = machin_digits(precision)?;
        let position = volatile_position(buffer.len());
        Ok(Self { buffer, position })
    }

    /// Expand `precision` digits and start the cursor at a fixed position
    ///
    /// The position is reduced modulo the buffer length.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is zero or the expansion fails
    pub fn with_position(precision: usize, position: usize) -> Result<Self> {
        Self::from_digits(machin_digits(precision)?, position)
    }

    /// Wrap an explicit digit buffer
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the buffer is empty or holds a value
    /// above 9
    pub fn from_digits(buffer: Vec<u8>, position: usize) -> Result<Self> {
        if buffer.is_empty() {
            return Err(invalid_parameter("digits", &0, &"buffer must not be empty"));
        }
        if let Some(bad) = buffer.iter().find(|&&digit| digit > 9) {
            return Err(invalid_parameter("digits", bad, &"values must be 0-9"));
        }
        let position = position % buffer.len();
        Ok(Self { buffer, position })
    }

    /// Draw the next `count` digits
    ///
    /// When the run would pass the end of the buffer the cursor first resets
    /// to 0. A request longer than the whole buffer cycles through it.
    pub fn next(&mut self, count: usize) -> Vec<u8> {
        let len = self.buffer.len();
        if self.position + count > len {
            self.position = 0;
        }

        let start = self.position;
        let values = (0..count)
            .filter_map(|offset| self.buffer.get((start + offset) % len))
            .copied()
            .collect();

        self.position = (self.position + count) % len;
        values
    }

    /// Draw a single digit
    pub fn next_digit(&mut self) -> u8 {
        self.next(1).first().copied().unwrap_or_default()
    }

    /// Move the cursor, reducing modulo the buffer length
    pub fn seek(&mut self, position: usize) {
        self.position = position % self.buffer.len();
    }

    /// Current cursor position
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of digits in the buffer
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always false; construction rejects empty buffers
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The full digit buffer
    pub fn digits(&self) -> &[u8] {
        &self.buffer
    }
}

/// Wall-clock microseconds reduced to a cursor position
///
/// This is the one intentionally non-reproducible input in the crate.
fn volatile_position(len: usize) -> usize {
    let micros = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros();
    (micros % len.max(1) as u128) as usize
}
