//! # tilecut
//!
//! Slice a raster image into a grid of fixed-size square tiles, trimming the
//! minimal pixel margin needed to make the dimensions divisible by the tile
//! size, and write each tile as a JPEG file next to the source image.
//!
//! # Architecture
//!
//! The crate is one pure geometry core wrapped in thin I/O:
//!
//! ```text
//! identify    image file   →  Dimensions        (codec backend)
//! layout      Dimensions   →  TileLayout        (pure: counts, margins, windows)
//! cut         TileLayout   →  <name>_tiles/     (crop + JPEG encode per tile)
//! ```
//!
//! The separation exists so the part with real invariants — the tiling
//! geometry — is testable without touching the filesystem or decoding a
//! single pixel, and so the codec can be swapped for a recording mock in
//! orchestration tests.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | Pure tiling geometry: tile counts, margin splits, cropping window, per-tile pixel windows, loss summary |
//! | [`naming`] | Output naming convention: `tile_<row>_<col>.jpg` files in a `<filename>_tiles` sibling directory |
//! | [`imaging`] | Codec collaborator behind the [`imaging::ImageBackend`] trait; production backend is the pure-Rust `image` crate |
//! | [`cut`] | Orchestration: config → layout → parallel per-tile extraction with progress events |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Margins Split Symmetrically
//!
//! Pixels that cannot form a full tile are trimmed half from each opposing
//! edge (the odd pixel going to the far edge), so the tile grid stays
//! centered on the image rather than hugging the top-left corner.
//!
//! ## The Legacy Loss Formula
//!
//! The total-lost-pixels figure is `lost_x * height + lost_y * (width -
//! lost_x)` — the accounting used by every previous version of the tool. It
//! is not a geometric union of the margin strips, and
//! [`layout::TileLayout::lost_pixels_total`] deliberately reproduces it
//! rather than the "correct" `width*height - tiled_area`, so loss reports
//! stay comparable across versions.
//!
//! ## Degenerate Sizes Are Valid
//!
//! A tile size larger than an axis yields zero tiles on that axis and 100%
//! loss there. The tool reports the numbers and writes nothing rather than
//! rejecting the input.
//!
//! ## Pure-Rust Imaging
//!
//! Decoding and JPEG encoding use the `image` crate — no system codecs, no
//! external processes. The binary is fully self-contained.

pub mod cut;
pub mod imaging;
pub mod layout;
pub mod naming;
pub mod output;
