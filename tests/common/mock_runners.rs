/*!
 * Scripted CommandRunner implementations for testing the pipeline without a
 * real ffmpeg install.
 */

use async_trait::async_trait;
use std::fs;
use std::sync::Mutex;

use edlstrip::errors::MediaToolError;
use edlstrip::runners::{CommandRunner, ToolOutput};

/// One recorded invocation of the mock runner
#[derive(Debug, Clone)]
pub struct RecordedCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl RecordedCommand {
    /// The argument following the given flag, if present
    pub fn arg_after(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(|s| s.as_str())
    }

    pub fn has_arg(&self, value: &str) -> bool {
        self.args.iter().any(|a| a == value)
    }
}

/// CommandRunner that records every invocation and returns scripted output.
///
/// ffprobe invocations reply with the configured probe stdout; ffmpeg
/// invocations reply with empty successful output. When a concat invocation
/// comes through, the manifest it points at is read and captured before the
/// pipeline deletes it, so tests can assert on segment ordering.
#[derive(Debug)]
pub struct MockCommandRunner {
    commands: Mutex<Vec<RecordedCommand>>,
    probe_stdout: String,
    fail_at: Option<usize>,
    concat_manifest: Mutex<Option<String>>,
}

impl MockCommandRunner {
    /// Mock replying to ffprobe with the given stdout, succeeding everywhere
    pub fn new(probe_stdout: &str) -> Self {
        MockCommandRunner {
            commands: Mutex::new(Vec::new()),
            probe_stdout: probe_stdout.to_string(),
            fail_at: None,
            concat_manifest: Mutex::new(None),
        }
    }

    /// Mock replying to ffprobe with a duration of `seconds`
    pub fn with_duration(seconds: f64) -> Self {
        Self::new(&format!(
            "{{\"format\": {{\"duration\": \"{:.6}\"}}}}",
            seconds
        ))
    }

    /// Mock whose `call_index`-th invocation (0-based) exits non-zero
    pub fn failing_at(seconds: f64, call_index: usize) -> Self {
        let mut mock = Self::with_duration(seconds);
        mock.fail_at = Some(call_index);
        mock
    }

    /// All invocations recorded so far, in order
    pub fn recorded(&self) -> Vec<RecordedCommand> {
        self.commands.lock().unwrap().clone()
    }

    /// Content of the concat manifest captured at join time, if any
    pub fn manifest(&self) -> Option<String> {
        self.concat_manifest.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<ToolOutput, MediaToolError> {
        let command = RecordedCommand {
            program: program.to_string(),
            args: args.to_vec(),
        };

        // Capture the concat manifest before the pipeline deletes it
        if command.has_arg("concat") {
            if let Some(manifest_path) = command.arg_after("-i") {
                if let Ok(content) = fs::read_to_string(manifest_path) {
                    *self.concat_manifest.lock().unwrap() = Some(content);
                }
            }
        }

        let call_index = {
            let mut commands = self.commands.lock().unwrap();
            commands.push(command);
            commands.len() - 1
        };

        if self.fail_at == Some(call_index) {
            return Ok(ToolOutput {
                success: false,
                status: Some(1),
                stdout: String::new(),
                stderr: "mock failure".to_string(),
            });
        }

        let stdout = if program == "ffprobe" {
            self.probe_stdout.clone()
        } else {
            String::new()
        };

        Ok(ToolOutput {
            success: true,
            status: Some(0),
            stdout,
            stderr: String::new(),
        })
    }
}
