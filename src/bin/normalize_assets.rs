use asset_align::config::normalize as cfg;
use asset_align::image::io::{derived_path, open_image, save_image};
use asset_align::raster::{crop_center, crop_region};
use std::env;
use std::path::Path;

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
    let ratio = config.aspect.ratio();

    for input in &config.inputs {
        let img = open_image(input)?;
        let region = crop_center(img.width(), img.height(), ratio)
            .map_err(|e| format!("{}: {e}", input.display()))?;
        let out = derived_path(input, config.output_dir.as_deref(), &config.suffix, "png");
        save_image(&crop_region(&img, region), &out)?;
        println!("Saved {}: ({}, {})", out.display(), region.width, region.height);
    }
    Ok(())
}

fn usage() -> String {
    "Usage: normalize_assets <config.json>".to_string()
}
