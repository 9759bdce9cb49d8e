use asset_align::translations::validate_json;
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

    let mut invalid = 0usize;
    for path in &paths {
        match validate_json(Path::new(path)) {
            Ok(()) => println!("OK      {path} is valid JSON"),
            Err(err) => {
                println!("INVALID {path}: {err}");
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        return Err(format!("{invalid} of {} files are not valid JSON", paths.len()));
    }
    Ok(())
}

fn usage() -> String {
    "Usage: validate_json <file.json>...".to_string()
}
