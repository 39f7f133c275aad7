use log::debug;

use crate::edl_parser::CutInterval;
use crate::timecode::Timecode;

// @module: Cut-list inversion

/// A span of media to retain in the final output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepInterval {
    /// Start of the span to keep
    pub start: Timecode,
    /// End of the span to keep
    pub stop: Timecode,
}

/// Invert an ordered cut list into the complementary list of spans to keep.
///
/// The cut list is assumed sorted and non-overlapping. A cut starting exactly
/// at the cursor advances it without emitting a keep span, collapsing
/// back-to-back cuts into one contiguous skip.
pub fn invert_cut_list(cut_list: &[CutInterval], end_timecode: Timecode) -> Vec<KeepInterval> {
    let mut cursor = Timecode::zero();
    let mut inverted = Vec::with_capacity(cut_list.len() + 1);

    for cut in cut_list {
        if cut.start == cursor {
            // No good content between the previous keep span and this cut
            cursor = cut.stop.clone();
        } else {
            inverted.push(KeepInterval {
                start: cursor,
                stop: cut.start.clone(),
            });
            cursor = cut.stop.clone();
        }
    }

    // The trailing span is emitted unconditionally. When the last cut runs to
    // the end of the media this produces a zero-length interval.
    if cursor == end_timecode {
        debug!("Trailing keep interval is zero-length ({} to {})", cursor, end_timecode);
    }
    inverted.push(KeepInterval {
        start: cursor,
        stop: end_timecode,
    });

    inverted
}
