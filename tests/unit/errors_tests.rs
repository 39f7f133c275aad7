/*!
 * Tests for error type formatting and conversions
 */

use edlstrip::errors::{EdlError, MediaToolError, TimecodeError};

/// Test that a malformed line error names the line and field count
#[test]
fn test_display_withMalformedLine_shouldNameLineAndCount() {
    let error = EdlError::MalformedLine {
        line_number: 4,
        field_count: 2,
    };
    assert_eq!(
        error.to_string(),
        "Malformed EDL line 4: expected 3 fields, found 2"
    );
}

/// Test that invalid input errors carry the offending value
#[test]
fn test_display_withInvalidInput_shouldCarryValue() {
    let error = TimecodeError::InvalidInput("abc".to_string());
    assert_eq!(error.to_string(), "Invalid input value: abc");
}

/// Test that timecode errors convert into EDL errors
#[test]
fn test_from_withTimecodeError_shouldWrapInEdlError() {
    let error: EdlError = TimecodeError::InvalidInput("x".to_string()).into();
    assert!(matches!(error, EdlError::Timecode(_)));
    assert!(error.to_string().contains("Invalid input value"));
}

/// Test that tool failures name the program, status and diagnostics
#[test]
fn test_display_withFailedTool_shouldNameProgramAndStatus() {
    let error = MediaToolError::Failed {
        program: "ffmpeg".to_string(),
        status: 1,
        stderr: "invalid data".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "ffmpeg exited with status 1: invalid data"
    );
}

/// Test that timeouts name the program and ceiling
#[test]
fn test_display_withTimeout_shouldNameCeiling() {
    let error = MediaToolError::Timeout {
        program: "ffprobe".to_string(),
        seconds: 60,
    };
    assert_eq!(error.to_string(), "ffprobe timed out after 60s");
}
