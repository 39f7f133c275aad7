/*!
 * External media-tool invocation.
 *
 * This module defines the narrow capability the pipeline needs from the
 * outside world: run a media command to completion and hand back its output.
 * Keeping process spawning behind this trait lets tests drive the whole
 * pipeline with a scripted runner instead of a real ffmpeg install.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::MediaToolError;

/// Captured result of one external tool invocation
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Whether the process exited with status zero
    pub success: bool,
    /// Raw exit code, when the process exited normally
    pub status: Option<i32>,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

/// Capability to run an external media command
///
/// Implementations block until the process completes (or a hang ceiling
/// trips) and capture both output streams. A non-zero exit is reported in
/// the returned [`ToolOutput`], not as an `Err` — callers decide whether a
/// failed invocation is fatal or whether its output is still usable.
#[async_trait]
pub trait CommandRunner: Send + Sync + Debug {
    /// Run `program` with `args` to completion and capture its output
    async fn run(&self, program: &str, args: &[String]) -> Result<ToolOutput, MediaToolError>;
}

pub mod ffmpeg;

pub use ffmpeg::FfmpegRunner;
