use std::path::{Path, PathBuf};

// @module: File and path utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Resolve the output file name for a given input video.
    ///
    /// The extension is always normalized to `.mkv`; ffmpeg sorts out which
    /// codecs the container can hold.
    pub fn resolve_out_filename<P: AsRef<Path>>(video: P) -> String {
        let stem = video
            .as_ref()
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy();

        format!("{}_comskipped.mkv", stem)
    }

    /// Default output path: the resolved output filename beside the video
    pub fn default_out_path<P: AsRef<Path>>(video: P) -> PathBuf {
        let video = video.as_ref();
        video.with_file_name(Self::resolve_out_filename(video))
    }

    /// Default EDL path: the video path with its extension swapped to `.edl`
    pub fn default_edl_path<P: AsRef<Path>>(video: P) -> PathBuf {
        video.as_ref().with_extension("edl")
    }

    /// Absolutize a path without requiring it to exist yet
    pub fn absolute_path<P: AsRef<Path>>(path: P) -> std::io::Result<PathBuf> {
        std::path::absolute(path)
    }
}
