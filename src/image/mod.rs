pub mod io;
pub mod source;
pub mod traits;

pub use self::source::SourceImage;
pub use self::traits::{Bgr, FlippedRows, PixelSource};
