use anyhow::{Result, anyhow};
use std::path::PathBuf;

use crate::file_utils::FileManager;

/// Application configuration module
/// This module holds the resolved run parameters as a plain struct passed by
/// value into the pipeline. There is no process-global configuration state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Video file to strip
    pub video: PathBuf,

    /// EDL file controlling the stripping
    pub edl: PathBuf,

    /// Output file for the joined result
    pub out_file: PathBuf,

    /// Video codec used to transcode the splits
    pub vcodec: String,

    /// Audio codec used to transcode the splits
    pub acodec: String,

    /// Log level
    pub log_level: LogLevel,
}

/// Stream-copy passthrough codec selection
pub const CODEC_COPY: &str = "copy";

impl Config {
    /// Build a configuration for the given video with everything else
    /// defaulted: EDL beside the video with its extension swapped to `.edl`,
    /// output beside the video as `<stem>_comskipped.mkv`, both codecs set
    /// to stream-copy.
    pub fn new(video: PathBuf) -> Self {
        let edl = FileManager::default_edl_path(&video);
        let out_file = FileManager::default_out_path(&video);

        Config {
            video,
            edl,
            out_file,
            vcodec: CODEC_COPY.to_string(),
            acodec: CODEC_COPY.to_string(),
            log_level: LogLevel::default(),
        }
    }

    /// Validate the configuration after CLI overrides are applied
    pub fn validate(&self) -> Result<()> {
        if !FileManager::file_exists(&self.video) {
            return Err(anyhow!("Video file '{}' doesn't exist", self.video.display()));
        }

        if !FileManager::file_exists(&self.edl) {
            return Err(anyhow!("EDL file '{}' doesn't exist", self.edl.display()));
        }

        if self.vcodec.is_empty() || self.acodec.is_empty() {
            return Err(anyhow!("Codec selections must not be empty"));
        }

        Ok(())
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: log crate filter for this level
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
