//! Crate-wide error type.
//!
//! Precondition violations (bad range, degenerate grid) are distinct
//! variants so callers can reject them before any pagination or drawing
//! happens; rendering and I/O failures are fatal for the single request
//! that raised them.

use std::fmt;

#[derive(Debug)]
pub enum LabelError {
    /// `range_end` is smaller than `range_start`.
    InvalidRange { start: u64, end: u64 },
    /// Zero rows/columns, or margins that leave no usable page area.
    DegenerateGrid(String),
    /// Non-positive font size or negative letter spacing.
    InvalidFontSpec(String),
    /// The requested range would exceed the configured page cap.
    TooManyPages { pages: usize, max: usize },
    /// Failure writing the finished artifact.
    Io(std::io::Error),
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelError::InvalidRange { start, end } => {
                write!(f, "invalid serial range: end {} is before start {}", end, start)
            }
            LabelError::DegenerateGrid(message) => {
                write!(f, "degenerate grid layout: {}", message)
            }
            LabelError::InvalidFontSpec(message) => {
                write!(f, "invalid font spec: {}", message)
            }
            LabelError::TooManyPages { pages, max } => {
                write!(f, "range needs {} pages, above the cap of {}", pages, max)
            }
            LabelError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for LabelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LabelError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LabelError {
    fn from(value: std::io::Error) -> Self {
        LabelError::Io(value)
    }
}
