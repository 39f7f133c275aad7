use std::io::Write;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tempfile::NamedTempFile;

use crate::errors::MediaToolError;
use crate::file_utils::FileManager;
use crate::runners::{CommandRunner, ToolOutput};
use crate::timeline::KeepInterval;

// @module: ffmpeg-backed probing, splitting and joining

// @const: Decimal seconds fallback regex
static DECIMAL_SECONDS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\.\d+").unwrap()
});

/// `format` section of ffprobe JSON output
#[derive(Debug, Deserialize)]
struct ProbeOutput {
    format: Option<ProbeFormat>,
}

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    duration: Option<String>,
}

/// Probe the total duration of a media file, in floating-point seconds.
///
/// Asks ffprobe for JSON format metadata and reads `format.duration`. Some
/// ffprobe builds print the duration amid diagnostics instead; as a fallback
/// the first decimal value found anywhere in the combined output is used.
pub async fn probe_duration(runner: &dyn CommandRunner, video: &Path) -> Result<f64, MediaToolError> {
    let args = string_args(&[
        "-v", "error",
        "-print_format", "json",
        "-show_format",
        video.to_str().unwrap_or_default(),
    ]);

    let output = runner.run("ffprobe", &args).await?;

    if let Ok(probe) = serde_json::from_str::<ProbeOutput>(&output.stdout) {
        if let Some(duration) = probe.format.and_then(|f| f.duration) {
            if let Ok(seconds) = duration.parse::<f64>() {
                debug!("Length of {}: {}s", video.display(), seconds);
                return Ok(seconds);
            }
        }
    }

    // Scrape the first decimal value out of whatever ffprobe printed
    let combined = format!("{}\n{}", output.stdout, output.stderr);
    if let Some(found) = DECIMAL_SECONDS_REGEX.find(&combined) {
        if let Ok(seconds) = found.as_str().parse::<f64>() {
            debug!("Length of {} (scraped): {}s", video.display(), seconds);
            return Ok(seconds);
        }
    }

    if !output.success {
        return Err(tool_failure("ffprobe", &output));
    }
    Err(MediaToolError::UnusableOutput {
        program: "ffprobe".to_string(),
        message: format!("no duration found for {}", video.display()),
    })
}

/// Extract one segment file per keep interval into `split_dir`.
///
/// Segments are named `split1.ts`, `split2.ts`, ... in keep-interval order;
/// the returned list preserves that order, which becomes playback order after
/// joining. A single failed extraction aborts the whole operation.
pub async fn split_video(
    runner: &dyn CommandRunner,
    video: &Path,
    keep_list: &[KeepInterval],
    split_dir: &Path,
    vcodec: &str,
    acodec: &str,
) -> Result<Vec<PathBuf>, MediaToolError> {
    let progress = ProgressBar::new(keep_list.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} segments")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let mut split_list = Vec::with_capacity(keep_list.len());

    for (index, keep) in keep_list.iter().enumerate() {
        let split_name = format!("split{}.ts", index + 1);
        let split_file = split_dir.join(&split_name);
        info!("Splitting using start: {}, stop: {} to {}", keep.start, keep.stop, split_name);

        let args = string_args(&[
            "-hide_banner",
            "-loglevel", "error",
            "-y",
            "-i", video.to_str().unwrap_or_default(),
            "-acodec", acodec,
            "-vcodec", vcodec,
            "-ss", keep.start.as_str(),
            "-to", keep.stop.as_str(),
            "-reset_timestamps", "1",
            split_file.to_str().unwrap_or_default(),
        ]);

        let output = runner.run("ffmpeg", &args).await?;
        if !output.success {
            progress.abandon();
            return Err(tool_failure("ffmpeg", &output));
        }

        split_list.push(split_file);
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(split_list)
}

/// Losslessly join the split files, in order, into `out_file`.
///
/// Builds a concat-demuxer manifest listing each segment's absolute path and
/// stream-copies the result. The manifest is a named temporary file deleted
/// on every exit path, success or failure.
pub async fn join_video(
    runner: &dyn CommandRunner,
    split_list: &[PathBuf],
    out_file: &Path,
) -> Result<(), MediaToolError> {
    let mut manifest = NamedTempFile::new()?;
    for split_file in split_list {
        let absolute = FileManager::absolute_path(split_file)?;
        writeln!(manifest, "file '{}'", absolute.display())?;
    }
    manifest.flush()?;
    debug!("Created concat manifest: {}", manifest.path().display());

    info!("Joining {} files to {}", split_list.len(), out_file.display());

    let args = string_args(&[
        "-hide_banner",
        "-loglevel", "error",
        "-y",
        "-f", "concat",
        "-safe", "0",
        "-i", manifest.path().to_str().unwrap_or_default(),
        "-c", "copy",
        out_file.to_str().unwrap_or_default(),
    ]);

    let output = runner.run("ffmpeg", &args).await?;
    if !output.success {
        // Incompatible stream layouts between segments land here too
        return Err(tool_failure("ffmpeg", &output));
    }

    Ok(())
}

fn string_args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn tool_failure(program: &str, output: &ToolOutput) -> MediaToolError {
    MediaToolError::Failed {
        program: program.to_string(),
        status: output.status.unwrap_or(-1),
        stderr: filter_tool_stderr(&output.stderr),
    }
}

/// Filter tool stderr to only show meaningful error lines, stripping the
/// version banner, build configuration, and stream metadata noise.
fn filter_tool_stderr(stderr: &str) -> String {
    let dominated_prefixes = [
        "ffmpeg version",
        "ffprobe version",
        "  built with",
        "  configuration:",
        "  lib",
        "Input #",
        "  Metadata:",
        "  Duration:",
        "  Chapter",
        "    Chapter",
        "  Stream #",
        "      Metadata:",
        "Output #",
        "Stream mapping:",
        "Press [q]",
    ];

    let meaningful: Vec<&str> = stderr
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return false;
            }
            !dominated_prefixes.iter().any(|p| line.starts_with(p))
        })
        .collect();

    if meaningful.is_empty() {
        "unknown error (stderr was empty after filtering)".to_string()
    } else {
        meaningful.join("\n")
    }
}
