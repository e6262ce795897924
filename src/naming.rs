//! Centralized output naming for tiles and the target directory.
//!
//! Both conventions are load-bearing: tile extraction runs in parallel and
//! relies on names being a pure function of `(row, col)`, and users locate
//! the output next to the source image by the `_tiles` suffix.
//!
//! - `tile_<row>_<col>.jpg` — one file per tile, `row`/`col` 1-based.
//! - `<image filename>_tiles/` — sibling directory of the source image,
//!   keeping the full filename (extension included) so tiling `map.png`
//!   and `map.tif` in the same directory cannot collide.

use std::path::{Path, PathBuf};

/// File name for the tile at 1-based `(row, col)`.
///
/// # Examples
/// ```
/// # use tilecut::naming::tile_file_name;
/// assert_eq!(tile_file_name(1, 1), "tile_1_1.jpg");
/// assert_eq!(tile_file_name(2, 13), "tile_2_13.jpg");
/// ```
pub fn tile_file_name(row: u32, col: u32) -> String {
    format!("tile_{row}_{col}.jpg")
}

/// Target directory for an image's tiles: `<dir>/<filename>_tiles`.
///
/// The directory sits next to the source image. A bare filename with no
/// parent component resolves relative to the current directory.
pub fn tiles_dir_for(image_path: &Path) -> PathBuf {
    let file_name = image_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    image_path.with_file_name(format!("{file_name}_tiles"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_names_are_row_then_col() {
        assert_eq!(tile_file_name(1, 1), "tile_1_1.jpg");
        assert_eq!(tile_file_name(3, 7), "tile_3_7.jpg");
        assert_eq!(tile_file_name(12, 104), "tile_12_104.jpg");
    }

    #[test]
    fn tiles_dir_keeps_full_filename() {
        assert_eq!(
            tiles_dir_for(Path::new("/photos/city.jpg")),
            PathBuf::from("/photos/city.jpg_tiles")
        );
    }

    #[test]
    fn tiles_dir_distinguishes_extensions() {
        let a = tiles_dir_for(Path::new("shots/map.png"));
        let b = tiles_dir_for(Path::new("shots/map.tif"));
        assert_ne!(a, b);
        assert_eq!(a, PathBuf::from("shots/map.png_tiles"));
    }

    #[test]
    fn tiles_dir_for_bare_filename() {
        assert_eq!(
            tiles_dir_for(Path::new("scan.jpeg")),
            PathBuf::from("scan.jpeg_tiles")
        );
    }
}
