//! Image codec backend trait and shared error type.
//!
//! The [`ImageBackend`] trait covers the only two pixel operations tilecut
//! needs: reading an image's dimensions and writing one rectangular crop as
//! a JPEG. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust via the
//! `image` crate, statically linked.

use super::params::ExtractParams;
use crate::layout::Dimensions;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(String),
    #[error("failed to encode tile: {0}")]
    Encode(String),
}

/// Trait for image codec backends.
///
/// Backends must be `Sync`: tile extraction runs under rayon and shares one
/// backend across worker threads.
pub trait ImageBackend: Sync {
    /// Read an image's pixel dimensions without necessarily decoding it.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Crop the source to `params.window` and write it as a JPEG.
    fn extract(&self, params: &ExtractParams) -> Result<(), BackendError>;
}
