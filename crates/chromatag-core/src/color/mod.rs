//! Color encodings — packed 24-bit RGB and its HSV view.

pub mod hsv;
pub mod rgb;

pub use hsv::Hsv;
pub use rgb::Rgb;
