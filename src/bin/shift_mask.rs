use asset_align::bitmap::RasterImage;
use asset_align::config::shift as cfg;
use asset_align::shift::shift;
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

    let mask = RasterImage::load(&config.input)?;
    println!(
        "File: {}, Width: {}, Height: {}, BPP: {}",
        config.input.display(),
        mask.width(),
        mask.height(),
        mask.bits_per_pixel()
    );
    let (dx, dy) = config.buffer_shift();
    log::debug!(
        "screen shift ({}, {}) -> buffer shift ({dx}, {dy}) for {} rows",
        config.dx,
        config.dy,
        config.row_order
    );

    shift(&mask, dx, dy).save(&config.output)?;
    println!("Saved {}", config.output.display());
    Ok(())
}

fn usage() -> String {
    "Usage: shift_mask <config.json>".to_string()
}
