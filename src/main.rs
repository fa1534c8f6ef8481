//! serial-labels – command-line label sheet generator.
//!
//! Usage:
//!   serial-labels <job.json> [output.pdf] [--fonts-dir DIR] [--preview N] [--title T]
//!
//! The job file holds the label request, grid layout, and font selection.
//! If `output.pdf` is omitted the document is written as
//! `serial_numbers.pdf` in the current directory. `--preview N` prints
//! the first N formatted labels as a table and skips PDF generation.

use std::{env, fs, path::PathBuf, process};

use serde::Deserialize;

use serial_labels::error::LabelError;
use serial_labels::pipeline::{generate_labels, PipelineConfig, OUTPUT_FILENAME};
use serial_labels::preview::preview;
use serial_labels::request::{FontSpec, GridLayout, LabelRequest};

/// Job file: the validated primitive inputs the form layer would collect.
#[derive(Debug, Deserialize)]
struct LabelJob {
    request: LabelRequest,
    #[serde(default)]
    layout: GridLayout,
    #[serde(default)]
    font: FontSpec,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut job_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut fonts_dir: Option<PathBuf> = None;
    let mut preview_count: Option<u64> = None;
    let mut title: Option<String> = None;
    let mut positional = 0usize;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--fonts-dir" | "-f" => match iter.next() {
                Some(v) => fonts_dir = Some(PathBuf::from(v)),
                None => {
                    eprintln!("--fonts-dir requires a path");
                    process::exit(1);
                }
            },
            "--preview" | "-p" => match iter.next().and_then(|v| v.parse::<u64>().ok()) {
                Some(n) => preview_count = Some(n),
                None => {
                    eprintln!("--preview requires a number");
                    process::exit(1);
                }
            },
            "--title" | "-t" => match iter.next() {
                Some(v) => title = Some(v.clone()),
                None => {
                    eprintln!("--title requires a value");
                    process::exit(1);
                }
            },
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown flag: {other}");
                print_usage(&args[0]);
                process::exit(1);
            }
            path => {
                if positional == 0 {
                    job_path = Some(PathBuf::from(path));
                } else if positional == 1 {
                    output_path = Some(PathBuf::from(path));
                } else {
                    eprintln!("Unexpected argument: {path}");
                    print_usage(&args[0]);
                    process::exit(1);
                }
                positional += 1;
            }
        }
    }

    let job_path = match job_path {
        Some(p) => p,
        None => {
            eprintln!("Error: no job file specified.");
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    let job_text = match fs::read_to_string(&job_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading '{}': {e}", job_path.display());
            process::exit(1);
        }
    };

    let job: LabelJob = match serde_json::from_str(&job_text) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error parsing '{}': {e}", job_path.display());
            process::exit(1);
        }
    };

    if let Some(count) = preview_count {
        if let Err(e) = job.request.validate() {
            eprintln!("Error: {e}");
            process::exit(1);
        }
        print_preview(&job.request, count);
        return;
    }

    let output = output_path.unwrap_or_else(|| PathBuf::from(OUTPUT_FILENAME));

    let config = PipelineConfig {
        title: title.unwrap_or_else(|| "serial_numbers".to_string()),
        font_dir: fonts_dir,
        ..PipelineConfig::default()
    };

    match generate_labels(&job.request, &job.layout, &job.font, &config) {
        Ok(sheet) => {
            if let Err(e) = fs::write(&output, &sheet.bytes).map_err(LabelError::from) {
                eprintln!("Error writing '{}': {e}", output.display());
                process::exit(1);
            }
            for warning in &sheet.warnings {
                eprintln!("Warning: {warning}");
            }
            let pages = sheet.plan.pages.len();
            eprintln!(
                "Wrote '{}' ({} bytes, {} page{}, {} labels)",
                output.display(),
                sheet.bytes.len(),
                pages,
                if pages == 1 { "" } else { "s" },
                sheet.plan.total_labels()
            );
        }
        Err(e) => {
            eprintln!("Error generating labels: {e}");
            process::exit(1);
        }
    }
}

/// Aligned three-column table of the first `count` labels.
fn print_preview(request: &LabelRequest, count: u64) {
    let rows = preview(request, request.range_start, count);
    if rows.is_empty() {
        println!("(no labels in range)");
        return;
    }

    let batch_w = rows
        .iter()
        .map(|r| r.batch_code.len())
        .chain(std::iter::once("BATCH".len()))
        .max()
        .unwrap_or(5);
    let serial_w = rows
        .iter()
        .map(|r| r.serial.len())
        .chain(std::iter::once("SERIAL".len()))
        .max()
        .unwrap_or(6);

    println!("{:batch_w$}  {:serial_w$}  DATE", "BATCH", "SERIAL");
    for row in &rows {
        println!(
            "{:batch_w$}  {:serial_w$}  {}",
            row.batch_code, row.serial, row.mfg_date
        );
    }
}

fn print_usage(prog: &str) {
    eprintln!("serial-labels – serial-number label sheet generator");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog} <job.json> [output.pdf] [--fonts-dir DIR] [--preview N] [--title T]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <job.json>     Job file with request, layout, and font sections");
    eprintln!("  [output.pdf]   Output path  (default: {OUTPUT_FILENAME})");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --fonts-dir, -f  Folder of custom TTF/OTF fonts to register");
    eprintln!("  --preview, -p    Print the first N labels as a table, skip the PDF");
    eprintln!("  --title, -t      Document title in PDF metadata");
    eprintln!("  --help           Print this message");
}
