//! Color taxonomy — the full label set for one color.
//!
//! [`classify`] parses a color string, derives HSV once and runs every
//! sub-classifier in [`rules`] in a fixed order. The result depends on the
//! RGB triple alone, so the classifier is safe to call from any thread.

pub mod labels;
pub mod rules;

use std::fmt;

use serde::Serialize;

use crate::color::{Hsv, Rgb};
use crate::error::FormatError;

pub use labels::{
    BrightnessLabel, ComplexityLabel, HueLabel, IntensityLabel, MoodLabel, PastelLabel,
    SaturationLabel, ShadeLabel, TemperatureLabel, ToneLabel, UndertoneLabel,
};

/// Revision of the breakpoint tables and tag vocabulary.
///
/// Labels produced under different versions are not comparable; bump this
/// whenever a breakpoint moves or a tag is renamed.
pub const TAXONOMY_VERSION: u32 = 1;

/// Number of labels in a [`LabelSet`].
pub const LABEL_COUNT: usize = 11;

/// Classifier names in output order.
pub const CLASSIFIERS: [&str; LABEL_COUNT] = [
    "hue",
    "brightness",
    "saturation",
    "temperature",
    "pastel",
    "shade",
    "tone",
    "intensity",
    "undertone",
    "complexity",
    "mood",
];

/// One label per classifier, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LabelSet {
    pub hue: HueLabel,
    pub brightness: BrightnessLabel,
    pub saturation: SaturationLabel,
    pub temperature: TemperatureLabel,
    pub pastel: PastelLabel,
    pub shade: ShadeLabel,
    pub tone: ToneLabel,
    pub intensity: IntensityLabel,
    pub undertone: UndertoneLabel,
    pub complexity: ComplexityLabel,
    pub mood: MoodLabel,
}

impl LabelSet {
    /// Tags in classifier order.
    pub fn as_array(&self) -> [&'static str; LABEL_COUNT] {
        [
            self.hue.as_str(),
            self.brightness.as_str(),
            self.saturation.as_str(),
            self.temperature.as_str(),
            self.pastel.as_str(),
            self.shade.as_str(),
            self.tone.as_str(),
            self.intensity.as_str(),
            self.undertone.as_str(),
            self.complexity.as_str(),
            self.mood.as_str(),
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.as_array().into_iter()
    }

    /// Owned tags, the shape catalog items carry.
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }

    /// `(classifier, tag)` pairs in output order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        CLASSIFIERS.into_iter().zip(self.as_array())
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(tag)?;
        }
        Ok(())
    }
}

/// Classify a color given as `#rrggbb` (the `#` is optional).
///
/// Fails only when the string is not exactly six hex digits.
pub fn classify(color: &str) -> Result<LabelSet, FormatError> {
    let rgb: Rgb = color.parse()?;
    Ok(classify_rgb(rgb))
}

/// Classify an already-decoded color. Every band is exhaustive, so this
/// cannot fail.
pub fn classify_rgb(rgb: Rgb) -> LabelSet {
    let hsv = Hsv::from(rgb);

    LabelSet {
        hue: rules::hue(&hsv),
        brightness: rules::brightness(rgb),
        saturation: rules::saturation(&hsv),
        temperature: rules::temperature(rgb),
        pastel: rules::pastel(&hsv),
        shade: rules::shade(&hsv),
        tone: rules::tone(&hsv),
        intensity: rules::intensity(rgb),
        undertone: rules::undertone(rgb),
        complexity: rules::complexity(rgb),
        mood: rules::mood(&hsv),
    }
}
