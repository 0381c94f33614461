//! Hue/saturation/lightness triples for the two color spaces.
//!
//! [`Hsl`] and [`Husl`] are distinct types so a standard triple can never be
//! combined with a perceptual one without an explicit conversion through RGB.

use carto_color_space::{perceptual, standard, Rgb};
use serde::{Deserialize, Serialize};

use super::DEFAULT_ALPHA;

/// Which space a color's components are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    /// Standard HSL.
    #[default]
    Standard,
    /// Perceptually uniform HUSL.
    Perceptual,
}

impl ColorSpace {
    pub fn from_perceptual(perceptual: bool) -> Self {
        if perceptual {
            ColorSpace::Perceptual
        } else {
            ColorSpace::Standard
        }
    }

    pub fn is_perceptual(self) -> bool {
        self == ColorSpace::Perceptual
    }
}

/// A standard HSL triple: hue in `[0, 360]`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    h: f64,
    s: f64,
    l: f64,
}

impl Hsl {
    /// Creates a triple, clamping each component into range.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: clamp_component(h, 360.0),
            s: clamp_component(s, 1.0),
            l: clamp_component(l, 1.0),
        }
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        let (h, s, l) = standard::rgb_to_hsl(rgb);
        Self::new(h, s, l)
    }

    pub fn h(self) -> f64 {
        self.h
    }

    pub fn s(self) -> f64 {
        self.s
    }

    pub fn l(self) -> f64 {
        self.l
    }

    pub fn to_rgb(self) -> Rgb {
        standard::hsl_to_rgb(self.h, self.s, self.l)
    }

    pub fn to_hex(self) -> String {
        standard::hsl_to_hex(self.h, self.s, self.l)
    }
}

/// A HUSL triple.
///
/// Hue is in `[0, 360]`. Saturation and lightness are stored as fractions
/// `[0, 1]` of HUSL's native `[0, 100]` scale and rescaled at the oracle
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Husl {
    h: f64,
    s: f64,
    l: f64,
}

impl Husl {
    /// Creates a triple from fractional saturation/lightness, clamping each
    /// component into range.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: clamp_component(h, 360.0),
            s: clamp_component(s, 1.0),
            l: clamp_component(l, 1.0),
        }
    }

    /// Converts normalized RGB channels into HUSL.
    ///
    /// The channels are handed to the HUSL oracle as they are, without any
    /// range check.
    pub fn from_normalized_rgb([r, g, b]: [f64; 3]) -> Self {
        let (h, s, l) = perceptual::rgb_to_husl(r, g, b);
        Self::new(h, s / 100.0, l / 100.0)
    }

    pub fn h(self) -> f64 {
        self.h
    }

    pub fn s(self) -> f64 {
        self.s
    }

    pub fn l(self) -> f64 {
        self.l
    }

    pub fn to_rgb(self) -> Rgb {
        perceptual::husl_to_rgb(self.h, self.s * 100.0, self.l * 100.0)
    }

    pub fn to_hex(self) -> String {
        perceptual::husl_to_hex(self.h, self.s * 100.0, self.l * 100.0)
    }
}

/// The components of a color, tagged with the space they belong to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Components {
    Hsl(Hsl),
    Husl(Husl),
}

impl Components {
    /// Builds clamped components for the given space.
    pub fn new(space: ColorSpace, [h, s, l]: [f64; 3]) -> Self {
        match space {
            ColorSpace::Standard => Components::Hsl(Hsl::new(h, s, l)),
            ColorSpace::Perceptual => Components::Husl(Husl::new(h, s, l)),
        }
    }

    pub fn space(self) -> ColorSpace {
        match self {
            Components::Hsl(_) => ColorSpace::Standard,
            Components::Husl(_) => ColorSpace::Perceptual,
        }
    }

    /// Returns the stored `[h, s, l]` values.
    pub fn to_array(self) -> [f64; 3] {
        match self {
            Components::Hsl(hsl) => [hsl.h, hsl.s, hsl.l],
            Components::Husl(husl) => [husl.h, husl.s, husl.l],
        }
    }

    pub fn to_rgb(self) -> Rgb {
        match self {
            Components::Hsl(hsl) => hsl.to_rgb(),
            Components::Husl(husl) => husl.to_rgb(),
        }
    }

    pub fn to_hex(self) -> String {
        match self {
            Components::Hsl(hsl) => hsl.to_hex(),
            Components::Husl(husl) => husl.to_hex(),
        }
    }
}

impl From<Hsl> for Components {
    fn from(hsl: Hsl) -> Self {
        Components::Hsl(hsl)
    }
}

impl From<Husl> for Components {
    fn from(husl: Husl) -> Self {
        Components::Husl(husl)
    }
}

/// Flat view of a color's components, as reported by
/// [`Color::get_components`](super::Color::get_components).
///
/// This is also the serialized form of a [`Color`](super::Color).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorComponents {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
    #[serde(default)]
    pub perceptual: bool,
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn clamp_component(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_clamps() {
        let hsl = Hsl::new(400.0, 2.0, -1.0);
        assert_eq!((hsl.h(), hsl.s(), hsl.l()), (360.0, 1.0, 0.0));
    }

    #[test]
    fn test_nan_components_become_zero() {
        let husl = Husl::new(f64::NAN, 0.5, f64::NAN);
        assert_eq!((husl.h(), husl.s(), husl.l()), (0.0, 0.5, 0.0));
    }

    #[test]
    fn test_components_space() {
        assert_eq!(
            Components::new(ColorSpace::Standard, [1.0, 0.5, 0.5]).space(),
            ColorSpace::Standard
        );
        assert_eq!(
            Components::new(ColorSpace::Perceptual, [1.0, 0.5, 0.5]).space(),
            ColorSpace::Perceptual
        );
    }

    #[test]
    fn test_husl_rescales_at_oracle_boundary() {
        let husl = Husl::new(0.0, 0.0, 1.0);
        assert_eq!(husl.to_hex(), "#ffffff");
        let black = Husl::from_normalized_rgb([0.0, 0.0, 0.0]);
        assert_eq!(black.l(), 0.0);
    }

    #[test]
    fn test_color_space_flag() {
        assert_eq!(ColorSpace::from_perceptual(true), ColorSpace::Perceptual);
        assert_eq!(ColorSpace::default(), ColorSpace::Standard);
        assert!(!ColorSpace::Standard.is_perceptual());
    }
}
