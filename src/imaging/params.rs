//! Parameter types for image operations.
//!
//! These structs describe *what* to extract, not *how*. They are the
//! interface between the [`cut`](crate::cut) orchestration (which decides
//! which tiles exist and where they go) and the [`backend`](super::backend)
//! (which does the actual pixel work), so backends can be swapped — e.g. for
//! a recording mock in tests — without touching orchestration logic.

use crate::layout::PixelWindow;
use std::path::PathBuf;

/// Quality setting for lossy JPEG encoding (1-100).
///
/// Defaults to 95, matching the encoder settings the legacy tool relied on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(95)
    }
}

/// Full specification for extracting one tile: which source pixels, where
/// the JPEG goes, and at what quality.
///
/// `window` is in source-image coordinates (already offset by the cropping
/// window origin).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub window: PixelWindow,
    pub quality: Quality,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_95() {
        assert_eq!(Quality::default().value(), 95);
    }
}
