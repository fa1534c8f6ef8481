//! PDF renderer – takes a [`SheetPlan`] and produces PDF bytes using
//! `printpdf` (v0.8 ops-based API).
//!
//! A selected font that is missing from the catalog, or whose bytes
//! printpdf cannot parse, does not abort generation: the renderer
//! substitutes the fixed fallback family, logs a warning, and reports it
//! to the caller in the returned warning list.

use printpdf::*;

use crate::fonts::{FontCatalog, FontSource, FALLBACK_FAMILY};
use crate::plan::SheetPlan;

/// Resolved per-document draw font.
enum DrawFont {
    Builtin(BuiltinFont),
    Custom(FontId),
}

/// Render a sheet plan into PDF bytes. Returns the bytes together with
/// any non-fatal warnings raised while resolving the font. Assembly is
/// all in-memory and cannot fail; writing the artifact is the caller's
/// concern.
pub fn render_pdf(plan: &SheetPlan, fonts: &FontCatalog) -> (Vec<u8>, Vec<String>) {
    let page_w = Mm(plan.page_width_pt * 0.352778); // pt → mm
    let page_h = Mm(plan.page_height_pt * 0.352778);

    let mut doc = PdfDocument::new(&plan.title);
    let mut warnings = Vec::new();
    let draw_font = select_font(&mut doc, fonts, &plan.font_name, &mut warnings);

    let mut pages = Vec::new();
    for page_plan in &plan.pages {
        let mut ops = Vec::new();

        if plan.letter_spacing > 0.0 {
            ops.push(Op::SetCharacterSpacing {
                multiplier: plan.letter_spacing,
            });
        }

        for label in &page_plan.labels {
            // Fixed template: line i sits one font-size below line i−1.
            for (i, line) in label.lines.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                let line_y = label.y - i as f32 * plan.font_size_pt;
                write_line(&mut ops, &draw_font, line, label.x, line_y, plan.font_size_pt);
            }
        }

        pages.push(PdfPage::new(page_w, page_h, ops));
    }

    // Ensure at least one page.
    if pages.is_empty() {
        pages.push(PdfPage::new(page_w, page_h, Vec::new()));
    }

    doc.with_pages(pages);
    let bytes = doc.save(&PdfSaveOptions::default(), &mut Vec::new());

    (bytes, warnings)
}

/// Resolve the plan's font name against the catalog, falling back to the
/// builtin fallback family on any failure.
fn select_font(
    doc: &mut PdfDocument,
    fonts: &FontCatalog,
    name: &str,
    warnings: &mut Vec<String>,
) -> DrawFont {
    match fonts.get(name) {
        Some(FontSource::Builtin(font)) => DrawFont::Builtin(*font),
        Some(FontSource::Custom(bytes)) => {
            let mut parse_warnings = Vec::new();
            match ParsedFont::from_bytes(bytes, 0, &mut parse_warnings) {
                Some(parsed) => DrawFont::Custom(doc.add_font(&parsed)),
                None => {
                    let message = format!(
                        "font '{name}' could not be embedded; falling back to {FALLBACK_FAMILY}"
                    );
                    log::warn!("{message}");
                    warnings.push(message);
                    DrawFont::Builtin(BuiltinFont::Helvetica)
                }
            }
        }
        None => {
            let message =
                format!("font '{name}' is not registered; falling back to {FALLBACK_FAMILY}");
            log::warn!("{message}");
            warnings.push(message);
            DrawFont::Builtin(BuiltinFont::Helvetica)
        }
    }
}

/// Emit the ops for one text line at an absolute position.
fn write_line(ops: &mut Vec<Op>, font: &DrawFont, text: &str, x: f32, y: f32, size: f32) {
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point { x: Pt(x), y: Pt(y) },
    });
    ops.push(Op::SetFillColor {
        col: Color::Rgb(Rgb {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            icc_profile: None,
        }),
    });
    match font {
        DrawFont::Builtin(builtin) => {
            ops.push(Op::SetFontSizeBuiltinFont {
                size: Pt(size),
                font: *builtin,
            });
            ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(to_winlatin(text))],
                font: *builtin,
            });
        }
        DrawFont::Custom(id) => {
            ops.push(Op::SetFontSize {
                size: Pt(size),
                font: id.clone(),
            });
            ops.push(Op::WriteText {
                items: vec![TextItem::Text(text.to_string())],
                font: id.clone(),
            });
        }
    }
    ops.push(Op::EndTextSection);
}

/// Convert a UTF-8 string to raw Windows-1252 bytes then wrap in a String
/// so printpdf writes the bytes unchanged into the PDF stream (builtin
/// fonts use WinAnsiEncoding, so each glyph is one byte 0x00–0xFF).
fn to_winlatin(s: &str) -> String {
    let bytes: Vec<u8> = s
        .chars()
        .map(|c| match c {
            '\u{2013}' => 0x96, // en-dash
            '\u{2014}' => 0x97, // em-dash
            '\u{2018}' => 0x91, // left single quote
            '\u{2019}' => 0x92, // right single quote
            '\u{00A0}' => 0x20, // non-breaking space -> space
            c if (c as u32) < 256 => c as u8,
            _ => b'?',
        })
        .collect();
    // SAFETY: intentionally non-UTF-8 for the 0x80-0x9F range; printpdf
    // passes these bytes straight to the PDF stream, decoded by
    // WinAnsiEncoding.
    #[allow(unsafe_code)]
    unsafe {
        String::from_utf8_unchecked(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::build_plan;
    use crate::request::{FontSpec, GridLayout, LabelRequest};

    fn sample_plan(font_name: &str) -> SheetPlan {
        let request = LabelRequest {
            prefix: "SN".to_string(),
            range_start: 1,
            range_end: 5,
            batch_code: "B1".to_string(),
            mfg_date: "2026-08".to_string(),
        };
        let font = FontSpec {
            name: font_name.to_string(),
            ..FontSpec::default()
        };
        build_plan(&request, &GridLayout::default(), &font)
    }

    #[test]
    fn renders_valid_pdf() {
        let plan = sample_plan("Helvetica");
        let (bytes, warnings) = render_pdf(&plan, &FontCatalog::builtin());
        assert!(bytes.len() > 100, "PDF should have content");
        assert_eq!(&bytes[0..5], b"%PDF-");
        assert!(warnings.is_empty());
    }

    #[test]
    fn unknown_font_falls_back_with_warning() {
        let plan = sample_plan("NoSuchFont");
        let (bytes, warnings) = render_pdf(&plan, &FontCatalog::builtin());
        assert_eq!(&bytes[0..5], b"%PDF-");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("NoSuchFont"));
        assert!(warnings[0].contains(FALLBACK_FAMILY));
    }

    #[test]
    fn unembeddable_custom_font_falls_back_with_warning() {
        // Bytes that sailed past catalog validation but that printpdf
        // cannot embed must still render, with the fallback family.
        let mut catalog = FontCatalog::builtin();
        catalog.insert("Stub", FontSource::Custom(vec![0u8; 16]));
        let plan = sample_plan("Stub");
        let (bytes, warnings) = render_pdf(&plan, &catalog);
        assert_eq!(&bytes[0..5], b"%PDF-");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Stub"));
        assert!(warnings[0].contains(FALLBACK_FAMILY));
    }

    #[test]
    fn empty_plan_still_emits_one_page() {
        let mut plan = sample_plan("Helvetica");
        plan.pages.clear();
        let (bytes, _) = render_pdf(&plan, &FontCatalog::builtin());
        assert_eq!(&bytes[0..5], b"%PDF-");
    }

    #[test]
    fn winlatin_maps_dashes() {
        let s = to_winlatin("a\u{2013}b");
        assert_eq!(s.as_bytes(), &[b'a', 0x96, b'b']);
    }
}
