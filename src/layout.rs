//! Pure tiling geometry.
//!
//! Everything here is a pure function of `(Dimensions, tile_size)` — no I/O,
//! no images, fully unit testable. The [`TileLayout`] answers three questions:
//! how many whole tiles fit per axis, which edge pixels are lost as margin,
//! and the exact pixel window of every tile.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("tile size must be at least 1 pixel")]
    ZeroTileSize,
}

/// Pixel extents of a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Half-open pixel rectangle `[x1, x2) × [y1, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelWindow {
    pub x1: u32,
    pub x2: u32,
    pub y1: u32,
    pub y2: u32,
}

impl PixelWindow {
    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }

    /// Translate the window by `(dx, dy)`.
    ///
    /// Tile windows are expressed in the cropped (margin-removed) coordinate
    /// space; offsetting by the cropping window's origin maps them back into
    /// source-image coordinates.
    pub fn offset(&self, dx: u32, dy: u32) -> PixelWindow {
        PixelWindow {
            x1: self.x1 + dx,
            x2: self.x2 + dx,
            y1: self.y1 + dy,
            y2: self.y2 + dy,
        }
    }
}

/// One tile of the grid.
///
/// `row` and `col` are 1-based, matching the output file naming
/// (`tile_<row>_<col>.jpg`). The window lives in the cropped coordinate
/// space and is exactly `tile_size` pixels per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub row: u32,
    pub col: u32,
    pub window: PixelWindow,
}

/// Split the pixels of an axis that cannot form a full tile into a
/// symmetric left/right (or top/bottom) margin pair.
///
/// Returns `(a, b)` with `a + b == full_length % tile_size` and `b - a`
/// either 0 or 1 — the odd leftover pixel goes to the far edge.
///
/// `tile_size` must be non-zero.
///
/// # Examples
/// ```
/// # use tilecut::layout::margin_split;
/// assert_eq!(margin_split(1000, 300), (50, 50));
/// assert_eq!(margin_split(7, 10), (3, 4));
/// assert_eq!(margin_split(100, 100), (0, 0));
/// ```
pub fn margin_split(full_length: u32, tile_size: u32) -> (u32, u32) {
    let lost = full_length % tile_size;
    let near = lost / 2;
    (near, lost - near)
}

/// Tiling geometry for one image at one tile size.
///
/// Immutable after construction; every accessor derives its value on demand.
/// A `tile_size` larger than an axis is valid and yields zero tiles on that
/// axis, with the whole axis becoming margin.
#[derive(Debug, Clone, Copy)]
pub struct TileLayout {
    dims: Dimensions,
    tile_size: u32,
}

impl TileLayout {
    /// Build a layout. Fails only on a zero tile size.
    pub fn new(dims: Dimensions, tile_size: u32) -> Result<TileLayout, LayoutError> {
        if tile_size == 0 {
            return Err(LayoutError::ZeroTileSize);
        }
        Ok(TileLayout { dims, tile_size })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Number of whole tiles along the X axis (zero if the image is narrower
    /// than one tile).
    pub fn tile_count_x(&self) -> u32 {
        self.dims.width / self.tile_size
    }

    pub fn tile_count_y(&self) -> u32 {
        self.dims.height / self.tile_size
    }

    pub fn margin_left(&self) -> u32 {
        margin_split(self.dims.width, self.tile_size).0
    }

    pub fn margin_right(&self) -> u32 {
        margin_split(self.dims.width, self.tile_size).1
    }

    pub fn margin_top(&self) -> u32 {
        margin_split(self.dims.height, self.tile_size).0
    }

    pub fn margin_bottom(&self) -> u32 {
        margin_split(self.dims.height, self.tile_size).1
    }

    /// Pixels lost on the X axis (left + right margins).
    pub fn lost_px_x(&self) -> u32 {
        self.dims.width % self.tile_size
    }

    /// Pixels lost on the Y axis (top + bottom margins).
    pub fn lost_px_y(&self) -> u32 {
        self.dims.height % self.tile_size
    }

    /// Total pixels absent from every tile.
    ///
    /// This reproduces the legacy accounting exactly: the X margin strips
    /// counted across the full height plus the Y margin strips counted across
    /// the remaining width. It is not a union-of-rectangles area; keep it
    /// bit-for-bit for compatibility with existing loss reports.
    pub fn lost_pixels_total(&self) -> u64 {
        let lost_x = self.lost_px_x() as u64;
        let lost_y = self.lost_px_y() as u64;
        lost_x * self.dims.height as u64 + lost_y * (self.dims.width as u64 - lost_x)
    }

    /// Lost pixels as an integer percentage of the image area, rounded down.
    /// Always in `0..=100`.
    pub fn lost_pixel_percentage(&self) -> u32 {
        let total_px = self.dims.width as u64 * self.dims.height as u64;
        (100 * self.lost_pixels_total() / total_px) as u32
    }

    /// The source-image rectangle that survives margin removal.
    ///
    /// Its width is `tile_count_x * tile_size` and its height
    /// `tile_count_y * tile_size`, so it divides exactly into tiles.
    pub fn cropping_window(&self) -> PixelWindow {
        PixelWindow {
            x1: self.margin_left(),
            x2: self.dims.width - self.margin_right(),
            y1: self.margin_top(),
            y2: self.dims.height - self.margin_bottom(),
        }
    }

    /// Enumerate the tile grid in row-major order (row 1 first, columns
    /// ascending within each row). Calling this again yields an identical
    /// fresh sequence.
    pub fn tiles(&self) -> Tiles {
        Tiles {
            tile_size: self.tile_size,
            count_x: self.tile_count_x(),
            count_y: self.tile_count_y(),
            row: 1,
            col: 1,
        }
    }

    /// Human-readable report of the grid size and all loss figures.
    pub fn summary(&self) -> String {
        format!(
            "The image will be cut into {}(x) by {}(y) tiles, losing\n  \
             {} pixels on the left\n  \
             {} pixels on the right\n  \
             {} pixels on the top\n  \
             {} pixels on the bottom\n  \
             {} pixels in total ({}%)",
            self.tile_count_x(),
            self.tile_count_y(),
            self.margin_left(),
            self.margin_right(),
            self.margin_top(),
            self.margin_bottom(),
            self.lost_pixels_total(),
            self.lost_pixel_percentage(),
        )
    }
}

/// Row-major iterator over a layout's tile grid.
///
/// Produced by [`TileLayout::tiles`]. Holds only copied counts, so the
/// layout itself need not outlive it.
#[derive(Debug, Clone)]
pub struct Tiles {
    tile_size: u32,
    count_x: u32,
    count_y: u32,
    row: u32,
    col: u32,
}

impl Iterator for Tiles {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        if self.count_x == 0 || self.row > self.count_y {
            return None;
        }
        let tile = Tile {
            row: self.row,
            col: self.col,
            window: PixelWindow {
                x1: (self.col - 1) * self.tile_size,
                x2: self.col * self.tile_size,
                y1: (self.row - 1) * self.tile_size,
                y2: self.row * self.tile_size,
            },
        };
        self.col += 1;
        if self.col > self.count_x {
            self.col = 1;
            self.row += 1;
        }
        Some(tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.count_x == 0 || self.row > self.count_y {
            0
        } else {
            ((self.count_y - self.row) * self.count_x + (self.count_x - self.col + 1)) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Tiles {}
