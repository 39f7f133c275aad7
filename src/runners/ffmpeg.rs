use async_trait::async_trait;
use log::debug;
use std::time::Duration;
use tokio::process::Command;

use super::{CommandRunner, ToolOutput};
use crate::errors::MediaToolError;

/// Runs ffmpeg/ffprobe as child processes on the tokio runtime.
///
/// Each invocation is awaited to completion with both output streams
/// captured. A hang ceiling guards against problematic files wedging the
/// whole run; transcoding long recordings is slow, so the default is
/// generous.
#[derive(Debug, Clone)]
pub struct FfmpegRunner {
    timeout: Duration,
}

/// One hour. Stream-copy runs finish in seconds, transcodes can take most of this.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3600);

impl FfmpegRunner {
    /// Create a runner with the default hang ceiling
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a runner with a custom hang ceiling
    pub fn with_timeout(timeout: Duration) -> Self {
        FfmpegRunner { timeout }
    }
}

impl Default for FfmpegRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for FfmpegRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<ToolOutput, MediaToolError> {
        debug!("Running command: {} {}", program, args.join(" "));

        let output_future = Command::new(program).args(args).output();

        let output = tokio::select! {
            result = output_future => {
                result.map_err(|e| MediaToolError::Launch {
                    program: program.to_string(),
                    message: e.to_string(),
                })?
            },
            _ = tokio::time::sleep(self.timeout) => {
                return Err(MediaToolError::Timeout {
                    program: program.to_string(),
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        Ok(ToolOutput {
            success: output.status.success(),
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
