/*!
 * Tests for file and path utility functions
 */

use anyhow::Result;
use std::path::Path;

use edlstrip::file_utils::FileManager;

use crate::common;

/// Test that the output filename is always normalized to the MKV container
#[test]
fn test_resolve_out_filename_withAnyExtension_shouldNormalizeToMkv() {
    let cases = [
        ("vid.mp4", "vid_comskipped.mkv"),
        // Let ffmpeg worry about codecs and shove everything into MKV
        ("vid.asdf", "vid_comskipped.mkv"),
        ("stuff.mp4", "stuff_comskipped.mkv"),
        ("vid.avi", "vid_comskipped.mkv"),
        ("episode.mpg", "episode_comskipped.mkv"),
    ];

    for (input, expected) in cases {
        assert_eq!(FileManager::resolve_out_filename(input), expected);
    }
}

/// Test that the default output path lands beside the video
#[test]
fn test_default_out_path_withNestedVideo_shouldStayInSameDirectory() {
    let out = FileManager::default_out_path("/recordings/show.mpg");
    assert_eq!(out, Path::new("/recordings/show_comskipped.mkv"));
}

/// Test that the default EDL path swaps the video extension
#[test]
fn test_default_edl_path_withVideoPath_shouldSwapExtension() {
    let edl = FileManager::default_edl_path("/recordings/show.mpg");
    assert_eq!(edl, Path::new("/recordings/show.edl"));

    let edl = FileManager::default_edl_path("show.mkv");
    assert_eq!(edl, Path::new("show.edl"));
}

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file =
        common::create_test_file(&temp_dir.path().to_path_buf(), "exists.tmp", "content")?;

    assert!(FileManager::file_exists(&test_file));
    Ok(())
}

/// Test that file_exists returns false for non-existent files and directories
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() -> Result<()> {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));

    // Directories are not files
    let temp_dir = common::create_temp_dir()?;
    assert!(!FileManager::file_exists(temp_dir.path()));
    Ok(())
}

/// Test that absolute_path anchors relative paths without requiring existence
#[test]
fn test_absolute_path_withRelativePath_shouldReturnAbsolute() -> Result<()> {
    let absolute = FileManager::absolute_path("some/relative/split1.ts")?;
    assert!(absolute.is_absolute());
    assert!(absolute.ends_with("some/relative/split1.ts"));
    Ok(())
}
