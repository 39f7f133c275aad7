/*!
 * Error types for the edlstrip application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when converting values to timecodes
#[derive(Error, Debug)]
pub enum TimecodeError {
    /// Error when a value cannot be interpreted as a non-negative number of seconds
    #[error("Invalid input value: {0}")]
    InvalidInput(String),
}

/// Errors that can occur while parsing an EDL file
#[derive(Error, Debug)]
pub enum EdlError {
    /// Error when a record does not have exactly three fields
    #[error("Malformed EDL line {line_number}: expected 3 fields, found {field_count}")]
    MalformedLine {
        /// 1-based line number of the offending record
        line_number: usize,
        /// Number of whitespace-separated fields found on the line
        field_count: usize,
    },

    /// Error converting a start/stop field into a timecode
    #[error("Timecode error: {0}")]
    Timecode(#[from] TimecodeError),

    /// Error reading the EDL file (missing or unreadable path)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when driving the external media tools
#[derive(Error, Debug)]
pub enum MediaToolError {
    /// Error launching the external tool
    #[error("Failed to launch {program}: {message}")]
    Launch {
        /// Program that could not be started
        program: String,
        /// OS-level failure description
        message: String,
    },

    /// Error when the external tool exits non-zero
    #[error("{program} exited with status {status}: {stderr}")]
    Failed {
        /// Program that failed
        program: String,
        /// Exit status (-1 when terminated by signal)
        status: i32,
        /// Filtered diagnostic output
        stderr: String,
    },

    /// Error when the external tool produced no usable output
    #[error("{program} returned unusable output: {message}")]
    UnusableOutput {
        /// Program that misbehaved
        program: String,
        /// What was expected of the output
        message: String,
    },

    /// Error when the external tool hangs past the configured ceiling
    #[error("{program} timed out after {seconds}s")]
    Timeout {
        /// Program that hung
        program: String,
        /// Ceiling that was exceeded
        seconds: u64,
    },

    /// Error preparing transient inputs for the tool (e.g. a concat manifest)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
