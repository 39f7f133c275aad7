use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::sync::Arc;
use tempfile::TempDir;

use crate::app_config::{CODEC_COPY, Config};
use crate::edl_parser;
use crate::runners::{CommandRunner, FfmpegRunner};
use crate::timecode::Timecode;
use crate::timeline;
use crate::video_processor;

// @module: Pipeline orchestration

/// Main application controller for commercial stripping
///
/// Sequences the pipeline: parse EDL, probe duration, invert the cut list,
/// extract the keep segments into a scoped temporary directory, join them
/// into the output file. Strictly sequential, no retries; any failure aborts
/// the run and the temporary directory is released on every exit path.
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: External media-tool capability
    runner: Arc<dyn CommandRunner>,
}

impl Controller {
    // @method: Create a controller driving the real ffmpeg install
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self::with_runner(config, Arc::new(FfmpegRunner::new())))
    }

    /// Create a controller with an injected runner (tests use a scripted one)
    pub fn with_runner(config: Config, runner: Arc<dyn CommandRunner>) -> Self {
        Controller { config, runner }
    }

    /// Run the stripping pipeline to completion
    pub async fn run(&self) -> Result<()> {
        let start_time = std::time::Instant::now();

        if self.config.vcodec.contains(CODEC_COPY) {
            // Stream-copy can only cut on keyframes, so the actual segment
            // boundaries may be off by up to one keyframe interval.
            warn!(
                "Copy vcodec was selected. This provides a faster split, but is not as accurate: \
                 cut points are snapped to the nearest keyframe."
            );
        }

        let cut_list = edl_parser::parse_edl(&self.config.edl)
            .with_context(|| format!("Failed to parse EDL file: {}", self.config.edl.display()))?;
        debug!("Parsed {} cut interval(s)", cut_list.len());

        let duration = video_processor::probe_duration(self.runner.as_ref(), &self.config.video)
            .await
            .with_context(|| format!("Failed to probe duration of {}", self.config.video.display()))?;
        let end_timecode = Timecode::from_seconds(duration)
            .context("Probed duration is not a valid timecode")?;

        let keep_list = timeline::invert_cut_list(&cut_list, end_timecode);
        info!("Keeping {} segment(s)", keep_list.len());

        let split_dir = TempDir::new().context("Failed to create temporary split directory")?;
        debug!("Created temporary directory '{}'", split_dir.path().display());

        let split_list = video_processor::split_video(
            self.runner.as_ref(),
            &self.config.video,
            &keep_list,
            split_dir.path(),
            &self.config.vcodec,
            &self.config.acodec,
        )
        .await
        .context("Segment extraction failed")?;

        video_processor::join_video(self.runner.as_ref(), &split_list, &self.config.out_file)
            .await
            .context("Joining segments failed")?;

        info!(
            "Wrote {} in {:.1}s",
            self.config.out_file.display(),
            start_time.elapsed().as_secs_f32()
        );

        Ok(())
        // split_dir drops here; the directory and its segments are removed
        // recursively on success and on each early return above
    }
}
