//! Request parameters – the plain structs one generation call is built
//! from, plus their precondition checks.
//!
//! All three structs are owned by the caller for the duration of a single
//! generate/preview call; the paginator and renderer only borrow them.

use serde::{Deserialize, Serialize};

use crate::error::LabelError;

/// A4 portrait: 210 mm × 297 mm in PDF points.
pub const A4_WIDTH_PT: f32 = 595.28;
pub const A4_HEIGHT_PT: f32 = 841.89;

/// Default page margin in points.
pub const PAGE_MARGIN_PT: f32 = 40.0;

/// One batch of labels to print: an inclusive serial range plus the
/// strings every label carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelRequest {
    /// Prepended verbatim to each serial number (e.g. `"A296/"`).
    #[serde(default)]
    pub prefix: String,
    pub range_start: u64,
    /// Inclusive.
    pub range_end: u64,
    /// First line of every label, unchanged across the batch.
    #[serde(default)]
    pub batch_code: String,
    /// Third line of every label, an opaque date string.
    #[serde(default)]
    pub mfg_date: String,
}

impl LabelRequest {
    /// Number of labels in the range, widened so that even a full-u64
    /// range cannot overflow the `+ 1`. Call only on a validated request –
    /// an inverted range would underflow.
    pub fn total_serials(&self) -> u128 {
        (self.range_end - self.range_start) as u128 + 1
    }

    pub fn validate(&self) -> Result<(), LabelError> {
        if self.range_end < self.range_start {
            return Err(LabelError::InvalidRange {
                start: self.range_start,
                end: self.range_end,
            });
        }
        Ok(())
    }
}

/// Rows × columns arrangement of labels on one page, with page geometry
/// in points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
    pub margin_x: f32,
    pub margin_y: f32,
    pub page_width: f32,
    pub page_height: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: 7,
            cols: 3,
            margin_x: PAGE_MARGIN_PT,
            margin_y: PAGE_MARGIN_PT,
            page_width: A4_WIDTH_PT,
            page_height: A4_HEIGHT_PT,
        }
    }
}

impl GridLayout {
    pub fn usable_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin_x
    }

    pub fn usable_height(&self) -> f32 {
        self.page_height - 2.0 * self.margin_y
    }

    /// Labels per page.
    pub fn per_page(&self) -> u64 {
        self.rows as u64 * self.cols as u64
    }

    pub fn validate(&self) -> Result<(), LabelError> {
        if self.rows < 1 || self.cols < 1 {
            return Err(LabelError::DegenerateGrid(format!(
                "rows and cols must be at least 1 (got {}x{})",
                self.rows, self.cols
            )));
        }
        if self.margin_x < 0.0 || self.margin_y < 0.0 {
            return Err(LabelError::DegenerateGrid(format!(
                "margins must be non-negative (got {} and {})",
                self.margin_x, self.margin_y
            )));
        }
        if self.usable_width() <= 0.0 || self.usable_height() <= 0.0 {
            return Err(LabelError::DegenerateGrid(format!(
                "margins leave no usable page area ({} x {} pt)",
                self.usable_width(),
                self.usable_height()
            )));
        }
        Ok(())
    }
}

/// Which typeface to draw with, by catalog display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    pub name: String,
    pub size_pt: f32,
    /// Extra inter-character spacing in points, 0 = none.
    pub letter_spacing: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            name: "Helvetica".to_string(),
            size_pt: 10.0,
            letter_spacing: 0.0,
        }
    }
}

impl FontSpec {
    pub fn validate(&self) -> Result<(), LabelError> {
        if self.size_pt <= 0.0 {
            return Err(LabelError::InvalidFontSpec(format!(
                "font size must be positive (got {})",
                self.size_pt
            )));
        }
        if self.letter_spacing < 0.0 {
            return Err(LabelError::InvalidFontSpec(format!(
                "letter spacing must be non-negative (got {})",
                self.letter_spacing
            )));
        }
        Ok(())
    }
}
