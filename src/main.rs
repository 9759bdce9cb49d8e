use asset_align::image::Bgr;
use asset_align::prelude::*;

fn main() {
    // Demo: a gray sprite on a dark background and a white mask drawn a few
    // pixels off and slightly too small.
    let (w, h) = (120usize, 90usize);
    let background = Bgr::from_rgb(16, 24, 32);
    let image = RasterImage::from_fn(w, h, 24, |x, y| {
        if (30..=80).contains(&x) && (20..=60).contains(&y) {
            Bgr::gray(128)
        } else {
            background
        }
    });
    let mask = RasterImage::from_fn(w, h, 24, |x, y| {
        if (34..=74).contains(&x) && (17..=57).contains(&y) {
            Bgr::WHITE
        } else {
            Bgr::BLACK
        }
    });
    let (image, mask) = match (image, mask) {
        (Ok(i), Ok(m)) => (i, m),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let outcome = match align_mask_to_image(&image, &mask, &ContentThresholds::default()) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let t = outcome.transform;
    println!("image box: {}", outcome.image_box);
    println!("mask box:  {}", outcome.mask_box);
    println!(
        "offset=({:.1}, {:.1}) scale=({:.3}, {:.3})",
        t.offset_x, t.offset_y, t.scale_x, t.scale_y
    );

    let (dx, dy) = t.pixel_shift();
    let shifted = shift(&mask, dx, dy);
    let rule = ContentRule::NearWhite {
        threshold: ContentThresholds::default().mask_brightness,
    };
    println!("shifted mask box: {}", compute_bbox(&shifted, &rule));
}
