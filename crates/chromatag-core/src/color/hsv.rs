//! RGB → HSV conversion.
//!
//! Hue comes from the 60° sector of whichever channel is largest:
//! ```text
//! max = r:  h = 60 × ((g − b) / Δ)        (+360 when negative)
//! max = g:  h = 60 × ((b − r) / Δ + 2)
//! max = b:  h = 60 × ((r − g) / Δ + 4)
//! ```
//! with `Δ = max − min`, `s = Δ / max` and `v = max`, all on channels
//! normalized to [0, 1]. Achromatic colors (`Δ = 0`) get hue 0.

use serde::Serialize;

use super::Rgb;

/// Hue/saturation/value view of an [`Rgb`] color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsv {
    /// Hue in degrees, [0, 360).
    pub hue: f64,
    /// Saturation, [0, 1].
    pub saturation: f64,
    /// Value (brightest channel), [0, 1].
    pub value: f64,
}

impl Hsv {
    /// Whether the color has no hue at all (all channels equal).
    pub fn is_achromatic(&self) -> bool {
        self.saturation == 0.0
    }
}

impl From<Rgb> for Hsv {
    fn from(c: Rgb) -> Self {
        let r = c.r as f64 / 255.0;
        let g = c.g as f64 / 255.0;
        let b = c.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        if delta == 0.0 {
            return Self {
                hue: 0.0,
                saturation: 0.0,
                value: max,
            };
        }

        // Ties between channels resolve red, then green, then blue.
        let sector = if max == r {
            (g - b) / delta
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let mut hue = sector * 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        Self {
            hue,
            // max > 0 whenever delta > 0
            saturation: delta / max,
            value: max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_hsv(actual: Hsv, hue: f64, saturation: f64, value: f64) {
        assert!(
            (actual.hue - hue).abs() < EPSILON,
            "hue: {:.6} vs {:.6}",
            actual.hue,
            hue
        );
        assert!(
            (actual.saturation - saturation).abs() < EPSILON,
            "saturation: {:.6} vs {:.6}",
            actual.saturation,
            saturation
        );
        assert!(
            (actual.value - value).abs() < EPSILON,
            "value: {:.6} vs {:.6}",
            actual.value,
            value
        );
    }

    #[test]
    fn test_primaries_and_secondaries() {
        assert_hsv(Hsv::from(Rgb::new(255, 0, 0)), 0.0, 1.0, 1.0);
        assert_hsv(Hsv::from(Rgb::new(255, 255, 0)), 60.0, 1.0, 1.0);
        assert_hsv(Hsv::from(Rgb::new(0, 255, 0)), 120.0, 1.0, 1.0);
        assert_hsv(Hsv::from(Rgb::new(0, 255, 255)), 180.0, 1.0, 1.0);
        assert_hsv(Hsv::from(Rgb::new(0, 0, 255)), 240.0, 1.0, 1.0);
        assert_hsv(Hsv::from(Rgb::new(255, 0, 255)), 300.0, 1.0, 1.0);
    }

    #[test]
    fn test_negative_hue_wraps_into_range() {
        // Red max with blue above green lands just below 360.
        let hsv = Hsv::from(Rgb::new(255, 0, 1));
        assert!(hsv.hue > 359.0 && hsv.hue < 360.0, "hue {}", hsv.hue);
    }

    #[test]
    fn test_achromatic_has_zero_hue_and_saturation() {
        for level in [0_u8, 1, 64, 128, 254, 255] {
            let hsv = Hsv::from(Rgb::new(level, level, level));
            assert!(hsv.is_achromatic());
            assert_eq!(hsv.hue, 0.0);
            assert!((hsv.value - level as f64 / 255.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_black_does_not_divide_by_zero() {
        let hsv = Hsv::from(Rgb::BLACK);
        assert_eq!(hsv.saturation, 0.0);
        assert_eq!(hsv.value, 0.0);
        assert!(!hsv.hue.is_nan());
    }

    #[test]
    fn test_matches_palette_conversion() {
        use palette::hsv::Hsv as PaletteHsv;
        use palette::{FromColor, Srgb};

        // Deterministic walk over the cube, skipping grays.
        let mut value = 0x0f_1e2d_u32;
        for _ in 0..2000 {
            value = value.wrapping_mul(1_103_515_245).wrapping_add(12_345) & 0xff_ffff;
            let c = Rgb::from_u24(value);
            if c.r == c.g && c.g == c.b {
                continue;
            }

            let ours = Hsv::from(c);
            let srgb = Srgb::new(c.r as f64 / 255.0, c.g as f64 / 255.0, c.b as f64 / 255.0);
            let theirs: PaletteHsv<_, f64> = PaletteHsv::from_color(srgb);

            let their_hue = theirs.hue.into_positive_degrees();
            let diff = (ours.hue - their_hue).abs();
            let hue_diff = diff.min(360.0 - diff);
            assert!(hue_diff < 1e-6, "{c}: hue {} vs {}", ours.hue, their_hue);
            assert!((ours.saturation - theirs.saturation).abs() < 1e-9, "{c}: saturation");
            assert!((ours.value - theirs.value).abs() < 1e-9, "{c}: value");
        }
    }
}
