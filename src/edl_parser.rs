use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::errors::EdlError;
use crate::timecode::Timecode;

// @module: EDL cut-list parsing

/// Type-code marking a commercial region in the EDL annotation convention.
/// Other codes (mute, scene marker) are skipped.
const COMMERCIAL_TYPE_CODE: &str = "3";

/// A span of media to be removed, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutInterval {
    /// Start of the span to remove
    pub start: Timecode,
    /// End of the span to remove
    pub stop: Timecode,
}

/// Parse an EDL file into the ordered list of commercial cut intervals.
///
/// Each non-empty line must hold exactly three whitespace-separated fields:
/// `<start-seconds> <stop-seconds> <type-code>`. Only lines with the
/// commercial type-code contribute an interval; file order is preserved and
/// no overlap validation is performed.
pub fn parse_edl<P: AsRef<Path>>(path: P) -> Result<Vec<CutInterval>, EdlError> {
    let path = path.as_ref();
    info!("Opening {}...", path.display());

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut cut_list = Vec::new();
    let mut line_count = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        line_count += 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(EdlError::MalformedLine {
                line_number: index + 1,
                field_count: fields.len(),
            });
        }

        let (start, stop, line_type) = (fields[0], fields[1], fields[2]);
        debug!("Split EDL line to {}-{} with line type: {}", start, stop, line_type);

        if line_type == COMMERCIAL_TYPE_CODE {
            let interval = CutInterval {
                start: Timecode::from_seconds_str(start)?,
                stop: Timecode::from_seconds_str(stop)?,
            };
            debug!("Created cut interval: {:?}", interval);
            cut_list.push(interval);
        }
    }

    info!("Read {} lines from {}", line_count, path.display());
    Ok(cut_list)
}
