use asset_align::config::align as cfg;
use asset_align::diagnostics::InputDescriptor;
use asset_align::image::io::write_json_file;
use asset_align::image::SourceImage;
use asset_align::shift::shift;
use asset_align::{align_sources, AlignmentReport};
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

    let image = SourceImage::open(&config.image)?;
    let mask = SourceImage::open(&config.mask)?;
    for (path, src) in [(&config.image, &image), (&config.mask, &mask)] {
        if src.row_order() != config.row_order {
            log::warn!(
                "{} stores {} rows, config says {}",
                path.display(),
                src.row_order(),
                config.row_order
            );
        }
    }

    let alignment = align_sources(&image, &mask, &config.thresholds)?;
    let report = AlignmentReport::new(
        InputDescriptor::new(&config.image, &image),
        InputDescriptor::new(&config.mask, &mask),
        config.thresholds,
        &alignment,
        config.row_order,
    );
    report.print_text_summary();

    if let Some(out) = &config.output.aligned_mask {
        let bitmap = mask
            .as_bitmap()
            .ok_or("aligned_mask output needs a .bmp mask input")?;
        let (dx, dy) = alignment.transform.pixel_shift();
        shift(bitmap, dx, dy).save(out)?;
        println!("Saved {} (shifted by {dx},{dy})", out.display());
    }
    if let Some(out) = &config.output.report_json {
        write_json_file(out, &report)?;
        println!("Wrote alignment report to {}", out.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: align_mask <config.json>".to_string()
}
