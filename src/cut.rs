//! Tile cutting — the orchestration around the geometry core.
//!
//! One pass per image: identify dimensions, compute the [`TileLayout`],
//! create the target directory, then extract every tile through the codec
//! backend. Extraction is data-independent per tile and runs in parallel
//! with [rayon](https://docs.rs/rayon); file names depend only on
//! `(row, col)`, so the output set is identical regardless of scheduling.
//!
//! ## Output structure
//!
//! ```text
//! photos/
//! ├── city.jpg                 # source (1000x600, tile size 300)
//! └── city.jpg_tiles/
//!     ├── tile_1_1.jpg         # 300x300 crops, row-major
//!     ├── tile_1_2.jpg
//!     ├── tile_1_3.jpg
//!     ├── tile_2_1.jpg
//!     ├── tile_2_2.jpg
//!     └── tile_2_3.jpg
//! ```
//!
//! There is no retry and no partial-success mode: the run either writes all
//! tiles or stops at the first failure.

use crate::imaging::{BackendError, ExtractParams, ImageBackend, Quality, RustBackend};
use crate::layout::{LayoutError, Tile, TileLayout};
use crate::naming;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tile size: {0}")]
    Layout(#[from] LayoutError),
    #[error("image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("source image not found: {0}")]
    SourceNotFound(PathBuf),
}

/// Everything a cutting run needs, decoupled from how it was gathered
/// (CLI flags, interactive prompt, or a test).
#[derive(Debug, Clone)]
pub struct CutConfig {
    pub image_path: PathBuf,
    pub tile_size: u32,
    pub quality: Quality,
}

/// Progress events emitted while cutting, one per observable step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CutEvent {
    DirCreated(PathBuf),
    TileWritten { row: u32, col: u32 },
}

/// Result of a completed cutting run.
#[derive(Debug, Clone)]
pub struct CutReport {
    pub target_dir: PathBuf,
    pub tiles_written: usize,
}

/// Cut an image into tiles using the production codec backend.
pub fn cut(config: &CutConfig, events: Option<Sender<CutEvent>>) -> Result<CutReport, CutError> {
    let backend = RustBackend::new();
    cut_with_backend(&backend, config, events)
}

/// Cut using a specific backend (allows testing with a mock).
///
/// Zero-tile layouts (tile size larger than an axis) are not an error: the
/// target directory is still created and the report counts zero tiles.
pub fn cut_with_backend(
    backend: &impl ImageBackend,
    config: &CutConfig,
    events: Option<Sender<CutEvent>>,
) -> Result<CutReport, CutError> {
    if !config.image_path.exists() {
        return Err(CutError::SourceNotFound(config.image_path.clone()));
    }

    let dims = backend.identify(&config.image_path)?;
    let layout = TileLayout::new(dims, config.tile_size)?;

    let target_dir = naming::tiles_dir_for(&config.image_path);
    if !target_dir.exists() {
        std::fs::create_dir(&target_dir)?;
        if let Some(tx) = &events {
            tx.send(CutEvent::DirCreated(target_dir.clone())).ok();
        }
    }

    // Tile windows are in cropped space; shift them by the cropping window
    // origin to address the source image directly
    let crop = layout.cropping_window();
    let tiles: Vec<Tile> = layout.tiles().collect();

    tiles.par_iter().try_for_each(|tile| {
        let params = ExtractParams {
            source: config.image_path.clone(),
            output: target_dir.join(naming::tile_file_name(tile.row, tile.col)),
            window: tile.window.offset(crop.x1, crop.y1),
            quality: config.quality,
        };
        backend.extract(&params)?;
        if let Some(tx) = &events {
            tx.send(CutEvent::TileWritten {
                row: tile.row,
                col: tile.col,
            })
            .ok();
        }
        Ok::<(), CutError>(())
    })?;

    Ok(CutReport {
        target_dir,
        tiles_written: tiles.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use crate::layout::{Dimensions, PixelWindow};
    use std::collections::BTreeSet;
    use std::path::Path;

    /// A config pointing at a real (but not decodable) file, since the
    /// orchestration checks existence before calling the backend.
    fn config_in(dir: &Path, tile_size: u32) -> CutConfig {
        let image_path = dir.join("source.jpg");
        std::fs::write(&image_path, b"mock").unwrap();
        CutConfig {
            image_path,
            tile_size,
            quality: Quality::default(),
        }
    }

    fn extracts(ops: &[RecordedOp]) -> Vec<(String, PixelWindow)> {
        ops.iter()
            .filter_map(|op| match op {
                RecordedOp::Extract { output, window, .. } => {
                    Some((output.clone(), *window))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn missing_source_fails_before_identify() {
        let backend = MockBackend::new();
        let config = CutConfig {
            image_path: PathBuf::from("/no/such/image.jpg"),
            tile_size: 100,
            quality: Quality::default(),
        };

        let err = cut_with_backend(&backend, &config, None).unwrap_err();
        assert!(matches!(err, CutError::SourceNotFound(_)));
        assert!(backend.get_operations().is_empty());
    }

    #[test]
    fn zero_tile_size_is_invalid_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 100,
            height: 100,
        }]);

        let err = cut_with_backend(&backend, &config_in(dir.path(), 0), None).unwrap_err();
        assert!(matches!(err, CutError::Layout(LayoutError::ZeroTileSize)));
    }

    #[test]
    fn extracts_every_tile_with_source_space_windows() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 1000,
            height: 600,
        }]);

        let report =
            cut_with_backend(&backend, &config_in(dir.path(), 300), None).unwrap();
        assert_eq!(report.tiles_written, 6);
        assert_eq!(report.target_dir, dir.path().join("source.jpg_tiles"));
        assert!(report.target_dir.is_dir());

        let ops = backend.get_operations();
        let extracted = extracts(&ops);
        assert_eq!(extracted.len(), 6);

        // Cropping window starts at x=50; tile (1,1) covers source [50,350)x[0,300)
        let first = extracted
            .iter()
            .find(|(out, _)| out.ends_with("tile_1_1.jpg"))
            .unwrap();
        assert_eq!(
            first.1,
            PixelWindow {
                x1: 50,
                x2: 350,
                y1: 0,
                y2: 300
            }
        );

        // Tile (2,3) covers source [650,950)x[300,600)
        let last = extracted
            .iter()
            .find(|(out, _)| out.ends_with("tile_2_3.jpg"))
            .unwrap();
        assert_eq!(
            last.1,
            PixelWindow {
                x1: 650,
                x2: 950,
                y1: 300,
                y2: 600
            }
        );

        // All six names present, no duplicates
        let names: BTreeSet<&str> = extracted
            .iter()
            .map(|(out, _)| out.rsplit('/').next().unwrap())
            .collect();
        assert_eq!(names.len(), 6);
        for row in 1..=2 {
            for col in 1..=3 {
                assert!(names.contains(format!("tile_{row}_{col}.jpg").as_str()));
            }
        }
    }

    #[test]
    fn degenerate_layout_creates_dir_but_no_tiles() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 7,
            height: 7,
        }]);

        let report =
            cut_with_backend(&backend, &config_in(dir.path(), 10), None).unwrap();
        assert_eq!(report.tiles_written, 0);
        assert!(report.target_dir.is_dir());
        assert!(extracts(&backend.get_operations()).is_empty());
    }

    #[test]
    fn existing_target_dir_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), 100);
        std::fs::create_dir(dir.path().join("source.jpg_tiles")).unwrap();

        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 200,
            height: 100,
        }]);
        let (tx, rx) = std::sync::mpsc::channel();
        let report = cut_with_backend(&backend, &config, Some(tx)).unwrap();
        assert_eq!(report.tiles_written, 2);

        let events: Vec<CutEvent> = rx.iter().collect();
        assert!(!events.iter().any(|e| matches!(e, CutEvent::DirCreated(_))));
    }

    #[test]
    fn emits_one_event_per_tile() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 300,
            height: 300,
        }]);

        let (tx, rx) = std::sync::mpsc::channel();
        cut_with_backend(&backend, &config_in(dir.path(), 100), Some(tx)).unwrap();

        let written: BTreeSet<(u32, u32)> = rx
            .iter()
            .filter_map(|e| match e {
                CutEvent::TileWritten { row, col } => Some((row, col)),
                _ => None,
            })
            .collect();
        assert_eq!(written.len(), 9);
        assert!(written.contains(&(3, 3)));
    }
}
