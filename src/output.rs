//! CLI output formatting.
//!
//! Each piece of console feedback has a `format_*` function that returns
//! strings (pure, testable) and a `print_*` wrapper that writes to stdout.
//! Format functions never do I/O.
//!
//! ```text
//! imported city.jpg
//! width=1000
//! height=600
//! The image will be cut into 3(x) by 2(y) tiles, losing
//!   50 pixels on the left
//!   ...
//! created directory /photos/city.jpg_tiles
//! creating tile 1/1
//! ...
//! wrote 6 tiles to /photos/city.jpg_tiles
//! ```

use crate::cut::{CutEvent, CutReport};
use crate::layout::Dimensions;
use std::path::Path;

/// Header printed right after the source image is identified.
pub fn format_image_info(image_path: &Path, dims: Dimensions) -> Vec<String> {
    let name = image_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| image_path.display().to_string());
    vec![
        format!("imported {name}"),
        format!("width={}", dims.width),
        format!("height={}", dims.height),
    ]
}

pub fn print_image_info(image_path: &Path, dims: Dimensions) {
    for line in format_image_info(image_path, dims) {
        println!("{line}");
    }
}

/// One progress line per cutting event.
pub fn format_cut_event(event: &CutEvent) -> String {
    match event {
        CutEvent::DirCreated(dir) => format!("created directory {}", dir.display()),
        CutEvent::TileWritten { row, col } => format!("creating tile {row}/{col}"),
    }
}

pub fn format_report(report: &CutReport) -> String {
    format!(
        "wrote {} tiles to {}",
        report.tiles_written,
        report.target_dir.display()
    )
}

pub fn print_report(report: &CutReport) {
    println!("{}", format_report(report));
}
