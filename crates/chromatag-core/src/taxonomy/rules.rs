//! Sub-classifiers and their breakpoint tables.
//!
//! Range classifiers are a floor label plus ascending `(lower bound, label)`
//! steps; a value takes the label of the last step whose bound it reaches,
//! so every boundary belongs to the higher range. Predicate classifiers
//! (pastel, tone, undertone, mood) are evaluated in order, first match wins.

use crate::color::{Hsv, Rgb};

use super::labels::{
    BrightnessLabel, ComplexityLabel, HueLabel, IntensityLabel, MoodLabel, PastelLabel,
    SaturationLabel, ShadeLabel, TemperatureLabel, ToneLabel, UndertoneLabel,
};

/// Contiguous, exhaustive partition of an ordered domain.
pub struct Bands<T: 'static, L: 'static> {
    /// Label for values below the first step.
    pub floor: L,
    /// Ascending lower bounds, each inclusive.
    pub steps: &'static [(T, L)],
}

impl<T: PartialOrd + Copy + 'static, L: Copy + 'static> Bands<T, L> {
    pub fn lookup(&self, x: T) -> L {
        let mut label = self.floor;
        for &(bound, step) in self.steps {
            if x < bound {
                break;
            }
            label = step;
        }
        label
    }
}

/// Hue in degrees. The red sector straddles 0°.
pub const HUE: Bands<f64, HueLabel> = Bands {
    floor: HueLabel::Red,
    steps: &[
        (15.0, HueLabel::Orange),
        (45.0, HueLabel::Yellow),
        (75.0, HueLabel::Green),
        (165.0, HueLabel::Cyan),
        (195.0, HueLabel::Blue),
        (255.0, HueLabel::Purple),
        (285.0, HueLabel::Magenta),
        (345.0, HueLabel::Red),
    ],
};

/// Perceptual luma, 0..=255.
pub const BRIGHTNESS: Bands<i32, BrightnessLabel> = Bands {
    floor: BrightnessLabel::VeryDark,
    steps: &[
        (64, BrightnessLabel::Dark),
        (128, BrightnessLabel::Medium),
        (192, BrightnessLabel::Light),
        (240, BrightnessLabel::VeryLight),
    ],
};

pub const SATURATION: Bands<f64, SaturationLabel> = Bands {
    floor: SaturationLabel::Grayscale,
    steps: &[
        (0.1, SaturationLabel::Muted),
        (0.3, SaturationLabel::Moderate),
        (0.6, SaturationLabel::Vibrant),
        (0.8, SaturationLabel::Vivid),
    ],
};

/// `(r − b) / 2`, −127..=127.
pub const TEMPERATURE: Bands<i32, TemperatureLabel> = Bands {
    floor: TemperatureLabel::VeryCool,
    steps: &[
        (-30, TemperatureLabel::Cool),
        (-10, TemperatureLabel::Neutral),
        (10, TemperatureLabel::Warm),
        (30, TemperatureLabel::VeryWarm),
    ],
};

pub const SHADE: Bands<f64, ShadeLabel> = Bands {
    floor: ShadeLabel::Shadow,
    steps: &[
        (0.2, ShadeLabel::Deep),
        (0.4, ShadeLabel::MidTone),
        (0.6, ShadeLabel::Light),
        (0.8, ShadeLabel::Pale),
    ],
};

/// Channel mean, 0..=255.
pub const INTENSITY: Bands<i32, IntensityLabel> = Bands {
    floor: IntensityLabel::Subdued,
    steps: &[
        (64, IntensityLabel::Moderate),
        (128, IntensityLabel::Bright),
        (192, IntensityLabel::Intense),
    ],
};

/// Channel spread, 0..=510.
pub const COMPLEXITY: Bands<i32, ComplexityLabel> = Bands {
    floor: ComplexityLabel::Pure,
    steps: &[(30, ComplexityLabel::Simple), (90, ComplexityLabel::Complex)],
};

/// Mood rules in priority order. Colors matching none are `Balanced`.
const MOOD_RULES: [(fn(&Hsv) -> bool, MoodLabel); 5] = [
    (is_dim, MoodLabel::Somber),
    (is_light_and_soft, MoodLabel::Airy),
    (is_light_and_saturated, MoodLabel::Energetic),
    (is_warm_hue, MoodLabel::Warm),
    (is_cool_hue, MoodLabel::Cool),
];

fn is_dim(c: &Hsv) -> bool {
    c.value < 0.3
}

fn is_light_and_soft(c: &Hsv) -> bool {
    c.value > 0.7 && c.saturation < 0.3
}

fn is_light_and_saturated(c: &Hsv) -> bool {
    c.saturation > 0.7 && c.value > 0.7
}

fn is_warm_hue(c: &Hsv) -> bool {
    (0.0..60.0).contains(&c.hue)
}

fn is_cool_hue(c: &Hsv) -> bool {
    (180.0..300.0).contains(&c.hue)
}

pub fn hue(hsv: &Hsv) -> HueLabel {
    HUE.lookup(hsv.hue)
}

pub fn brightness(rgb: Rgb) -> BrightnessLabel {
    BRIGHTNESS.lookup(rgb.luma())
}

pub fn saturation(hsv: &Hsv) -> SaturationLabel {
    SATURATION.lookup(hsv.saturation)
}

pub fn temperature(rgb: Rgb) -> TemperatureLabel {
    TEMPERATURE.lookup(rgb.temperature())
}

/// Light and washed out.
pub fn pastel(hsv: &Hsv) -> PastelLabel {
    if hsv.saturation < 0.5 && hsv.value > 0.7 {
        PastelLabel::Pastel
    } else {
        PastelLabel::NotPastel
    }
}

pub fn shade(hsv: &Hsv) -> ShadeLabel {
    SHADE.lookup(hsv.value)
}

pub fn tone(hsv: &Hsv) -> ToneLabel {
    match (hsv.saturation < 0.1, hsv.value < 0.5) {
        (true, true) => ToneLabel::Charcoal,
        (true, false) => ToneLabel::Silver,
        (false, _) => ToneLabel::Chromatic,
    }
}

pub fn intensity(rgb: Rgb) -> IntensityLabel {
    INTENSITY.lookup(rgb.mean())
}

pub fn undertone(rgb: Rgb) -> UndertoneLabel {
    use std::cmp::Ordering;

    match rgb.r.cmp(&rgb.b) {
        Ordering::Greater => UndertoneLabel::Warm,
        Ordering::Less => UndertoneLabel::Cool,
        Ordering::Equal => UndertoneLabel::Neutral,
    }
}

pub fn complexity(rgb: Rgb) -> ComplexityLabel {
    COMPLEXITY.lookup(rgb.spread())
}

pub fn mood(hsv: &Hsv) -> MoodLabel {
    MOOD_RULES
        .iter()
        .find(|(matches, _)| matches(hsv))
        .map_or(MoodLabel::Balanced, |&(_, label)| label)
}
