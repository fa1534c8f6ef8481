//! # serial-labels – printable serial-number label sheets
//!
//! This crate renders printable PDF pages of sequentially numbered labels
//! (e.g. circuit-board serial numbers). The pipeline stages are:
//!
//! 1. **Validate** – check range, grid, and font preconditions ([`request`])
//! 2. **Paginate** – assign each serial to a grid cell, column-major
//!    within each page ([`paginate`])
//! 3. **Plan** – freeze the placed label text into a serialisable sheet
//!    plan ([`plan`])
//! 4. **Render** – emit PDF bytes via printpdf ([`render`])
//!
//! [`preview`] lists the first few formatted values without pagination,
//! and [`fonts`] resolves the selectable typefaces (three builtins plus an
//! optional custom-font folder).

pub mod error;
pub mod fonts;
pub mod format;
pub mod paginate;
pub mod pipeline;
pub mod plan;
pub mod preview;
pub mod render;
pub mod request;

// Re-exports for convenience
pub use error::LabelError;
pub use pipeline::{generate_labels, PipelineConfig, SheetOutput, OUTPUT_FILENAME};
pub use preview::preview;
pub use request::{FontSpec, GridLayout, LabelRequest};
