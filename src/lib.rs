/*!
 * # edlstrip
 *
 * A Rust library for stripping commercials off DVR recordings using a
 * companion EDL (edit decision list) file.
 *
 * ## Features
 *
 * - Parse comskip-style EDL cut lists (type-code 3 = commercial region)
 * - Invert the cut list against the probed media duration into keep spans
 * - Extract each keep span losslessly (or transcoded) via ffmpeg
 * - Join the extracted segments into a single MKV output
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Run configuration passed by value into the pipeline
 * - `timecode`: Seconds to `HH:MM:SS.mmm` conversion
 * - `edl_parser`: EDL cut-list parsing
 * - `timeline`: Cut-list inversion into keep spans
 * - `runners`: External media-tool invocation:
 *   - `runners::ffmpeg`: the real ffmpeg/ffprobe runner
 * - `video_processor`: Duration probing, segment extraction, lossless join
 * - `file_utils`: Path resolution helpers
 * - `app_controller`: Pipeline orchestration
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod edl_parser;
pub mod errors;
pub mod file_utils;
pub mod runners;
pub mod timecode;
pub mod timeline;
pub mod video_processor;

// Re-export main types for easier usage
pub use app_config::{Config, LogLevel};
pub use app_controller::Controller;
pub use edl_parser::{CutInterval, parse_edl};
pub use errors::{EdlError, MediaToolError, TimecodeError};
pub use timecode::Timecode;
pub use timeline::{KeepInterval, invert_cut_list};
