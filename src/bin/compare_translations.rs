use asset_align::translations::{diff_keys, load_translation_file};
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
    let mut args = env::args().skip(1);
    let (left, right) = match (args.next(), args.next()) {
        (Some(l), Some(r)) => (l, r),
        _ => return Err(usage()),
    };
    let left = Path::new(&left);
    let right = Path::new(&right);

    let diff = diff_keys(&load_translation_file(left)?, &load_translation_file(right)?);

    println!("Missing in {}:", file_label(left));
    for key in &diff.missing_in_left {
        println!("{key}");
    }
    println!("\nMissing in {}:", file_label(right));
    for key in &diff.missing_in_right {
        println!("{key}");
    }
    Ok(())
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn usage() -> String {
    "Usage: compare_translations <left.json> <right.json>".to_string()
}
