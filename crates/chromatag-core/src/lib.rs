//! Chromatag Core — deterministic color taxonomy.
//!
//! Turns a 24-bit RGB color into a fixed, ordered set of descriptive labels
//! (hue, brightness, saturation, temperature, ...) used as item metadata by
//! a recommendation pipeline. Everything here is pure: no I/O, no clocks,
//! no global randomness.

pub mod catalog;
pub mod color;
pub mod error;
pub mod generate;
pub mod taxonomy;

// Re-exports for convenience.
pub use catalog::CatalogItem;
pub use color::{Hsv, Rgb};
pub use error::FormatError;
pub use taxonomy::{LabelSet, TAXONOMY_VERSION, classify, classify_rgb};
