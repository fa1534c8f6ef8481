//! Preview – a bounded, non-paginated listing of formatted labels for
//! on-screen confirmation before committing to PDF generation.

use serde::{Deserialize, Serialize};

use crate::format::format_serial;
use crate::request::LabelRequest;

/// One preview table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRow {
    pub batch_code: String,
    pub serial: String,
    pub mfg_date: String,
}

/// Rows for the indices `[preview_start, min(range_end, preview_start +
/// preview_count − 1)]` inclusive, silently clamped at `range_end`. Empty
/// (not an error) when `preview_start` is past the end of the range.
pub fn preview(request: &LabelRequest, preview_start: u64, preview_count: u64) -> Vec<PreviewRow> {
    if preview_count == 0 || preview_start > request.range_end {
        return Vec::new();
    }
    let end = request
        .range_end
        .min(preview_start.saturating_add(preview_count - 1));

    (preview_start..=end)
        .map(|index| PreviewRow {
            batch_code: request.batch_code.clone(),
            serial: format_serial(&request.prefix, index),
            mfg_date: request.mfg_date.clone(),
        })
        .collect()
}
