//! Sheet plan – the intermediate representation between pagination and
//! PDF rendering. This is the "frozen" structure that encodes exactly
//! which label text lands where on each page.

use serde::{Deserialize, Serialize};

use crate::format::label_lines;
use crate::paginate::{paginate, LABEL_LINES};
use crate::request::{FontSpec, GridLayout, LabelRequest};

/// A complete label sheet ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetPlan {
    /// Document title embedded in the PDF metadata.
    #[serde(default = "SheetPlan::default_title")]
    pub title: String,
    /// Width of each page in PDF points (1 pt = 1/72 inch).
    pub page_width_pt: f32,
    /// Height of each page in PDF points.
    pub page_height_pt: f32,
    /// Catalog display name of the selected font.
    pub font_name: String,
    pub font_size_pt: f32,
    pub letter_spacing: f32,
    /// Ordered list of pages.
    pub pages: Vec<PagePlan>,
}

/// One page of placed labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagePlan {
    pub page_index: usize,
    pub labels: Vec<PlacedLabel>,
}

/// One label at its final draw position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedLabel {
    pub serial_index: u64,
    pub row: u32,
    pub col: u32,
    /// Left edge of the text block, in points.
    pub x: f32,
    /// Baseline of the first line, in points from the page bottom.
    pub y: f32,
    /// Text lines top to bottom: batch code, serial, date.
    pub lines: Vec<String>,
}

impl SheetPlan {
    fn default_title() -> String {
        "serial_numbers".to_string()
    }

    /// Serialise to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserialise from JSON.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn total_labels(&self) -> usize {
        self.pages.iter().map(|page| page.labels.len()).sum()
    }
}

/// Paginate the range and attach the formatted text to every cell.
/// Assumes validated inputs; does no drawing.
pub fn build_plan(request: &LabelRequest, layout: &GridLayout, font: &FontSpec) -> SheetPlan {
    let pages = paginate(request, layout, font.size_pt, LABEL_LINES)
        .into_iter()
        .enumerate()
        .map(|(page_index, cells)| PagePlan {
            page_index,
            labels: cells
                .into_iter()
                .map(|cell| PlacedLabel {
                    serial_index: cell.serial_index,
                    row: cell.row,
                    col: cell.col,
                    x: cell.x,
                    y: cell.y,
                    lines: label_lines(request, cell.serial_index),
                })
                .collect(),
        })
        .collect();

    SheetPlan {
        title: SheetPlan::default_title(),
        page_width_pt: layout.page_width,
        page_height_pt: layout.page_height,
        font_name: font.name.clone(),
        font_size_pt: font.size_pt,
        letter_spacing: font.letter_spacing,
        pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> SheetPlan {
        let request = LabelRequest {
            prefix: "A296/".to_string(),
            range_start: 1,
            range_end: 22,
            batch_code: "B1".to_string(),
            mfg_date: "2026-08".to_string(),
        };
        build_plan(&request, &GridLayout::default(), &FontSpec::default())
    }

    #[test]
    fn plan_carries_every_label() {
        let plan = sample_plan();
        assert_eq!(plan.pages.len(), 2);
        assert_eq!(plan.total_labels(), 22);
        assert_eq!(plan.pages[1].labels[0].lines[1], "A296/22");
    }

    #[test]
    fn page_indices_are_sequential() {
        let plan = sample_plan();
        for (i, page) in plan.pages.iter().enumerate() {
            assert_eq!(page.page_index, i);
            for label in &page.labels {
                assert_eq!(label.lines.len(), LABEL_LINES as usize);
            }
        }
    }

    #[test]
    fn json_roundtrip() {
        let plan = sample_plan();
        let json = plan.to_json();
        let parsed = SheetPlan::from_json(&json).unwrap();
        assert_eq!(parsed.pages.len(), plan.pages.len());
        assert_eq!(parsed.total_labels(), plan.total_labels());
        assert!((parsed.page_width_pt - plan.page_width_pt).abs() < 0.01);
    }
}
