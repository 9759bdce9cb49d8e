use asset_align::config::background as cfg;
use asset_align::image::io::{load_rgba_image, save_rgba_image};
use asset_align::raster::remove_white_background;
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

    let mut failures = 0usize;
    for input in &config.inputs {
        println!("Processing {}...", input.display());
        let out = match (&config.output_dir, input.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => input.clone(),
        };
        let result = load_rgba_image(input).and_then(|mut img| {
            let replaced = remove_white_background(&mut img, config.threshold);
            save_rgba_image(&img, &out).map(|()| replaced)
        });
        match result {
            Ok(replaced) => println!("Saved {} ({replaced} pixels cleared)", out.display()),
            Err(err) => {
                eprintln!("Error processing {}: {err}", input.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{failures} of {} files failed", config.inputs.len()));
    }
    Ok(())
}

fn usage() -> String {
    "Usage: remove_background <config.json>".to_string()
}
