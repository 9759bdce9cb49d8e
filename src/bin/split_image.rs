use asset_align::config::split::{self as cfg, SplitMode, SplitToolConfig};
use asset_align::image::io::{open_image, save_image};
use asset_align::raster::{crop_region, force_split, grid_tiles, smart_split};
use asset_align::types::Region;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = cfg::load_config(Path::new(&config_path))?;

    println!("Processing {}...", config.input.display());
    let img = open_image(&config.input)?;
    let (width, height) = (img.width(), img.height());
    println!("Image dimensions: {width}x{height}");

    let named: Vec<(String, Region)> = match &config.split {
        SplitMode::Half { trim } => {
            let (top, bottom) = force_split(width, height, *trim);
            vec![("top".to_string(), top), ("bottom".to_string(), bottom)]
        }
        SplitMode::Grid { cols, rows } => {
            let tiles = grid_tiles(width, height, *cols, *rows)?;
            if let Some(t) = tiles.first() {
                println!("Tile dimensions: {}x{}", t.width, t.height);
            }
            number(tiles)
        }
        SplitMode::Smart { options } => {
            let leaves = smart_split(&img.to_rgba8(), options);
            println!("Total detected regions: {}", leaves.len());
            number(
                leaves
                    .into_iter()
                    .filter(|r| r.is_at_least(options.min_region))
                    .collect(),
            )
        }
    };

    for (name, region) in &named {
        let path = output_path(&config, name);
        save_image(&crop_region(&img, *region), &path)?;
        println!("Saved {} ({}x{})", path.display(), region.width, region.height);
    }
    println!("Final total images: {}", named.len());
    Ok(())
}

fn number(regions: Vec<Region>) -> Vec<(String, Region)> {
    regions
        .into_iter()
        .enumerate()
        .map(|(i, r)| ((i + 1).to_string(), r))
        .collect()
}

fn output_path(config: &SplitToolConfig, name: &str) -> PathBuf {
    let prefix = config.prefix.clone().unwrap_or_else(|| {
        config
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string())
    });
    let dir = config
        .output_dir
        .clone()
        .or_else(|| config.input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{prefix}_{name}.png"))
}

fn usage() -> String {
    "Usage: split_image <config.json>".to_string()
}
