use asset_align::image::io::describe_image;
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
    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        return Err(usage());
    }
    for path in &paths {
        let desc = describe_image(Path::new(path))?;
        println!("Image: {}", desc.path.display());
        println!("  Format: {}", desc.format.as_deref().unwrap_or("unknown"));
        println!("  Size: {}x{}", desc.width, desc.height);
        println!("  Mode: {}", desc.color);
    }
    Ok(())
}

fn usage() -> String {
    "Usage: image_info <image>...".to_string()
}
