use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tilecut::imaging::{ImageBackend, Quality, RustBackend, supported_input_extensions};
use tilecut::layout::TileLayout;
use tilecut::{cut, output};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

fn long_about() -> String {
    format!(
        "\
Slice a raster image into fixed-size square tiles

The image is trimmed to the largest tile-aligned sub-rectangle (margins are
split evenly between opposite edges, the odd pixel going to the far edge) and
each tile is written as a JPEG next to the source image:

  photos/city.jpg             # 1000x600, tile size 300
  photos/city.jpg_tiles/
  ├── tile_1_1.jpg            # 300x300 crops, named tile_<row>_<col>
  ├── ...
  └── tile_2_3.jpg

A tile size larger than an axis is allowed and yields zero tiles on that
axis. When --tile-size is omitted, the tile size is read interactively from
stdin after the image dimensions are shown.

Supported input formats: {}.",
        supported_input_extensions().join(", ")
    )
}

#[derive(Parser)]
#[command(name = "tilecut")]
#[command(about = "Slice a raster image into fixed-size square tiles")]
#[command(long_about = long_about())]
#[command(version = version_string())]
struct Cli {
    /// Path to the source image
    image: PathBuf,

    /// Tile edge length in pixels; prompted for on stdin when omitted
    #[arg(long)]
    tile_size: Option<u32>,

    /// JPEG quality for the tile files (1-100)
    #[arg(long, default_value_t = 95)]
    quality: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let backend = RustBackend::new();
    let dims = backend.identify(&cli.image)?;
    output::print_image_info(&cli.image, dims);

    let tile_size = match cli.tile_size {
        Some(size) => size,
        None => prompt_tile_size()?,
    };

    let layout = TileLayout::new(dims, tile_size)?;
    println!("{}", layout.summary());

    let config = cut::CutConfig {
        image_path: cli.image,
        tile_size,
        quality: Quality::new(cli.quality),
    };

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            println!("{}", output::format_cut_event(&event));
        }
    });
    let report = cut::cut_with_backend(&backend, &config, Some(tx))?;
    printer.join().unwrap();

    output::print_report(&report);
    Ok(())
}

/// Blocking stdin read for the tile size. Non-numeric input is a
/// configuration error, not a retry loop.
fn prompt_tile_size() -> Result<u32, Box<dyn std::error::Error>> {
    print!("Enter your desired tile size: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| format!("tile size must be a positive integer, got {trimmed:?}").into())
}
