use std::fmt;

use crate::errors::TimecodeError;

// @module: Timecode conversion

/// A zero-padded `HH:MM:SS.mmm` timecode with millisecond precision.
///
/// The hours field is uncapped, so recordings longer than 99 hours format
/// with three or more hour digits rather than wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timecode(String);

impl Timecode {
    /// The start-of-media timecode, `00:00:00.000`
    pub fn zero() -> Self {
        Self::from_millis(0)
    }

    /// Format an integer millisecond count as a timecode
    pub fn from_millis(ms: u64) -> Self {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        Timecode(format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis))
    }

    /// Convert elapsed seconds to a timecode.
    ///
    /// The fractional part is rounded to 3 decimal places using
    /// round-half-to-even; a fraction that rounds up to a full second carries
    /// into the seconds field (3600.9996 becomes `01:00:01.000`, never a
    /// 4-digit millisecond field).
    pub fn from_seconds(seconds: f64) -> Result<Self, TimecodeError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(TimecodeError::InvalidInput(seconds.to_string()));
        }

        // Scaling to milliseconds performs the 3-decimal rounding and the
        // carry in a single step.
        let total_ms = (seconds * 1000.0).round_ties_even() as u64;
        Ok(Self::from_millis(total_ms))
    }

    /// Convert a string-encoded seconds value (integer or float) to a timecode
    pub fn from_seconds_str(value: &str) -> Result<Self, TimecodeError> {
        let seconds: f64 = value
            .trim()
            .parse()
            .map_err(|_| TimecodeError::InvalidInput(value.to_string()))?;
        Self::from_seconds(seconds)
    }

    /// The timecode as a `HH:MM:SS.mmm` string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
