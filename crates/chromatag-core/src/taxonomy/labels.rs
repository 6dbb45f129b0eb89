//! Label vocabularies, one enum per classifier.
//!
//! The string tags are the wire format consumed by the recommendation
//! backend; `as_str`, `Display` and serde all yield the same tag.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! label_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl $name {
            /// Every label in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Tag attached to catalog items.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

label_enum! {
    /// Named hue sector.
    HueLabel {
        Red => "red",
        Orange => "orange",
        Yellow => "yellow",
        Green => "green",
        Cyan => "cyan",
        Blue => "blue",
        Purple => "purple",
        Magenta => "magenta",
    }
}

label_enum! {
    /// Perceptual luma bucket. Ordered darkest to lightest.
    BrightnessLabel {
        VeryDark => "very_dark",
        Dark => "dark",
        Medium => "medium",
        Light => "light",
        VeryLight => "very_light",
    }
}

label_enum! {
    SaturationLabel {
        Grayscale => "grayscale",
        Muted => "muted",
        Moderate => "moderate",
        Vibrant => "vibrant",
        Vivid => "vivid",
    }
}

label_enum! {
    /// Red/blue balance bucket.
    TemperatureLabel {
        VeryCool => "very_cool",
        Cool => "cool",
        Neutral => "neutral",
        Warm => "warm",
        VeryWarm => "very_warm",
    }
}

label_enum! {
    PastelLabel {
        Pastel => "pastel",
        NotPastel => "not_pastel",
    }
}

label_enum! {
    /// HSV value bucket.
    ShadeLabel {
        Shadow => "shadow",
        Deep => "deep",
        MidTone => "mid_tone",
        Light => "light",
        Pale => "pale",
    }
}

label_enum! {
    /// Achromatic grays split into dark and light; everything else is chromatic.
    ToneLabel {
        Charcoal => "charcoal",
        Silver => "silver",
        Chromatic => "chromatic",
    }
}

label_enum! {
    /// Channel mean bucket.
    IntensityLabel {
        Subdued => "subdued",
        Moderate => "moderate",
        Bright => "bright",
        Intense => "intense",
    }
}

label_enum! {
    UndertoneLabel {
        Warm => "warm_undertone",
        Cool => "cool_undertone",
        Neutral => "neutral_undertone",
    }
}

label_enum! {
    /// How far apart the channels are.
    ComplexityLabel {
        Pure => "pure",
        Simple => "simple",
        Complex => "complex",
    }
}

label_enum! {
    MoodLabel {
        Somber => "somber",
        Airy => "airy",
        Energetic => "energetic",
        Warm => "warm",
        Cool => "cool",
        Balanced => "balanced",
    }
}
