//! Image codec collaborator — pure Rust, zero external dependencies.
//!
//! The tiling core only ever needs two pixel operations, and both live
//! behind the [`ImageBackend`] trait:
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Extract** (crop → JPEG) | `DynamicImage::crop_imm` + `JpegEncoder` |
//!
//! The module is split into:
//! - **Parameters**: data structures describing one extraction
//! - **Backend**: [`ImageBackend`] trait (+ a recording mock for tests)
//! - **Rust backend**: the production [`RustBackend`]

pub mod backend;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use params::{ExtractParams, Quality};
pub use rust_backend::{RustBackend, supported_input_extensions};
