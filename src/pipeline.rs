//! Pipeline – ties together validation, pagination, planning, and
//! rendering into a single function call.

use std::path::PathBuf;

use crate::error::LabelError;
use crate::fonts::FontCatalog;
use crate::paginate::total_pages;
use crate::plan::{build_plan, SheetPlan};
use crate::render::render_pdf;
use crate::request::{FontSpec, GridLayout, LabelRequest};

/// Fixed artifact name for the generated document.
pub const OUTPUT_FILENAME: &str = "serial_numbers.pdf";

/// Default cap on pages per job; a typo'd range fails fast instead of
/// grinding through thousands of pages.
pub const DEFAULT_MAX_PAGES: usize = 1000;

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Document title embedded in the PDF metadata.
    pub title: String,
    /// Jobs needing more pages than this are rejected up front.
    pub max_pages: usize,
    /// Optional folder of custom TTF/OTF files.
    pub font_dir: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            title: "serial_numbers".to_string(),
            max_pages: DEFAULT_MAX_PAGES,
            font_dir: None,
        }
    }
}

/// Everything one generation run produces.
pub struct SheetOutput {
    /// The finished PDF document.
    pub bytes: Vec<u8>,
    /// The frozen plan the bytes were rendered from.
    pub plan: SheetPlan,
    /// Non-fatal warnings (font fallback).
    pub warnings: Vec<String>,
}

/// Full pipeline with a caller-provided font catalog. Build the catalog
/// once per process and reuse it across requests.
pub fn generate_labels_with_catalog(
    request: &LabelRequest,
    layout: &GridLayout,
    font: &FontSpec,
    config: &PipelineConfig,
    catalog: &FontCatalog,
) -> Result<SheetOutput, LabelError> {
    // 1. Preconditions – rejected before any pagination runs.
    request.validate()?;
    layout.validate()?;
    font.validate()?;

    // 2. Page cap, from arithmetic alone.
    let pages = total_pages(request, layout);
    if pages > config.max_pages {
        return Err(LabelError::TooManyPages {
            pages,
            max: config.max_pages,
        });
    }
    log::debug!(
        "generating {} labels across {} page(s)",
        request.total_serials(),
        pages
    );

    // 3. Paginate + format into the frozen plan.
    let mut plan = build_plan(request, layout, font);
    plan.title = config.title.clone();

    // 4. Render PDF.
    let (bytes, warnings) = render_pdf(&plan, catalog);
    log::info!(
        "rendered '{}': {} page(s), {} bytes",
        plan.title,
        plan.pages.len(),
        bytes.len()
    );

    Ok(SheetOutput {
        bytes,
        plan,
        warnings,
    })
}

/// Convenience wrapper that resolves the font catalog itself, from
/// `config.font_dir` when set and the builtins otherwise.
pub fn generate_labels(
    request: &LabelRequest,
    layout: &GridLayout,
    font: &FontSpec,
    config: &PipelineConfig,
) -> Result<SheetOutput, LabelError> {
    let catalog = match &config.font_dir {
        Some(dir) => FontCatalog::resolve(dir),
        None => FontCatalog::builtin(),
    };
    generate_labels_with_catalog(request, layout, font, config, &catalog)
}
