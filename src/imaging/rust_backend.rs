//! Pure Rust codec backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header-only, no full decode) |
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::backend::{BackendError, ImageBackend};
use super::params::ExtractParams;
use crate::layout::Dimensions;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, Mutex};

/// Extensions whose decoders may be compiled in. Filtered at runtime against
/// what the `image` crate was actually built with.
const PHOTO_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    PHOTO_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Image file extensions with a working decoder compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Pure Rust backend using the `image` crate.
///
/// Caches the last decoded source image so that cutting N tiles from one
/// image decodes it once, not N times. The cache holds a single entry —
/// tilecut processes one image per run.
pub struct RustBackend {
    cache: Mutex<Option<(PathBuf, Arc<DynamicImage>)>>,
}

impl RustBackend {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(None),
        }
    }

    /// Decode `path`, or return the cached decode if it is the same source.
    ///
    /// The lock is held across the decode so parallel workers cannot race
    /// into decoding the same source once each.
    fn load_cached(&self, path: &Path) -> Result<Arc<DynamicImage>, BackendError> {
        let mut cache = self.cache.lock().unwrap();
        if let Some((cached_path, img)) = cache.as_ref() {
            if cached_path == path {
                return Ok(Arc::clone(img));
            }
        }
        let img = Arc::new(load_image(path)?);
        *cache = Some((path.to_path_buf(), Arc::clone(&img)));
        Ok(img)
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| BackendError::Decode(format!("{}: {}", path.display(), e)))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| match e {
            ImageError::IoError(io) => BackendError::Io(io),
            other => BackendError::Decode(format!("{}: {}", path.display(), other)),
        })?;
        Ok(Dimensions { width, height })
    }

    fn extract(&self, params: &ExtractParams) -> Result<(), BackendError> {
        let img = self.load_cached(&params.source)?;
        let w = params.window;
        let crop = img.crop_imm(w.x1, w.y1, w.width(), w.height());

        let file = std::fs::File::create(&params.output)?;
        let mut writer = BufWriter::new(file);
        let encoder = JpegEncoder::new_with_quality(&mut writer, params.quality.value() as u8);
        // JPEG has no alpha channel; flatten to RGB before encoding
        crop.to_rgb8()
            .write_with_encoder(encoder)
            .map_err(|e| BackendError::Encode(format!("{}: {}", params.output.display(), e)))
    }
}
