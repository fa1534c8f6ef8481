//! Label text formatting – the fixed 3-line template.
//!
//! A label is: batch code, serial number, manufacturing date. The serial
//! line is plain concatenation of the prefix and the decimal index – no
//! padding, no locale formatting, no separators. Batch code and date pass
//! through verbatim; they carry no per-cell variation.

use crate::request::LabelRequest;

/// `format_serial("A296/", 12081)` → `"A296/12081"`.
pub fn format_serial(prefix: &str, index: u64) -> String {
    format!("{prefix}{index}")
}

/// The three lines of one label, top to bottom.
pub fn label_lines(request: &LabelRequest, serial_index: u64) -> Vec<String> {
    vec![
        request.batch_code.clone(),
        format_serial(&request.prefix, serial_index),
        request.mfg_date.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_is_plain_concatenation() {
        assert_eq!(format_serial("A296/", 12081), "A296/12081");
        assert_eq!(format_serial("", 7), "7");
        assert_eq!(format_serial("SN-", 0), "SN-0");
    }

    #[test]
    fn no_zero_padding() {
        assert_eq!(format_serial("X", 5), "X5");
        assert_ne!(format_serial("X", 5), "X05");
    }

    #[test]
    fn lines_follow_template_order() {
        let request = LabelRequest {
            prefix: "A296/".to_string(),
            range_start: 1,
            range_end: 10,
            batch_code: "BATCH-42".to_string(),
            mfg_date: "2026-08-24".to_string(),
        };
        assert_eq!(
            label_lines(&request, 3),
            vec!["BATCH-42", "A296/3", "2026-08-24"]
        );
    }
}
