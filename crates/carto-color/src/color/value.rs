//! The color value type.

use std::fmt;

use carto_color_space::{parse_rgb, Rgb};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::components::{ColorComponents, ColorSpace, Components, Hsl, Husl};
use super::{ALPHA_DECIMALS, DEFAULT_ALPHA};
use crate::error::ColorError;
use crate::node::{ColorLike, ToColor, Value};
use crate::operate::Op;
use crate::util::round;

/// A single stylesheet color.
///
/// Colors are values: every conversion and operation returns a new `Color`
/// and leaves the receiver untouched. A color may be *colorless* (no
/// components), which renders as an empty string and cannot take part in
/// arithmetic.
///
/// # Example
///
/// ```rust
/// use carto_color::{Color, Op};
///
/// let blue = Color::hsl(240.0, 1.0, 0.5);
/// assert_eq!(blue.to_string(), "#0000ff");
/// assert_eq!(blue.with_alpha(0.5).to_string(), "rgba(0, 0, 255, 0.5)");
///
/// let red = Color::hsl(0.0, 1.0, 0.5);
/// let magenta = blue.operate(Op::Add, red).unwrap();
/// assert_eq!(magenta.to_string(), "#ff00ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<ColorComponents>", into = "Option<ColorComponents>")]
pub struct Color {
    components: Option<Components>,
    alpha: f64,
    space: ColorSpace,
}

impl Color {
    /// Creates a color from loosely-typed inputs.
    ///
    /// The first three numbers of `components` become the triple, clamped to
    /// `h ∈ [0, 360]`, `s, l ∈ [0, 1]`. Fewer than three numbers, or `None`,
    /// produce a colorless value. `alpha` defaults to `1` and `perceptual`
    /// to `false`. This never fails.
    pub fn new(components: Option<&[f64]>, alpha: Option<f64>, perceptual: Option<bool>) -> Self {
        let space = ColorSpace::from_perceptual(perceptual.unwrap_or(false));
        let components = match components {
            Some(&[h, s, l, ..]) => Some(Components::new(space, [h, s, l])),
            _ => None,
        };

        Self {
            components,
            alpha: alpha.unwrap_or(DEFAULT_ALPHA),
            space,
        }
    }

    /// Creates an opaque standard HSL color.
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::from_components(Hsl::new(h, s, l), DEFAULT_ALPHA)
    }

    /// Creates an opaque perceptual color; `s` and `l` are fractions.
    pub fn husl(h: f64, s: f64, l: f64) -> Self {
        Self::from_components(Husl::new(h, s, l), DEFAULT_ALPHA)
    }

    /// Creates an opaque standard color from RGB, clipping channels to 0–255.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::from_components(Hsl::from_rgb(rgb.clip()), DEFAULT_ALPHA)
    }

    /// A color with no components.
    pub fn colorless() -> Self {
        Self::new(None, None, None)
    }

    fn from_components(components: impl Into<Components>, alpha: f64) -> Self {
        let components = components.into();
        Self {
            space: components.space(),
            components: Some(components),
            alpha,
        }
    }

    /// Returns a copy with the given alpha.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// A color is already a terminal value; evaluating it yields itself.
    pub fn evaluate(&self) -> &Self {
        self
    }

    pub fn components(&self) -> Option<Components> {
        self.components
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn is_perceptual(&self) -> bool {
        self.space.is_perceptual()
    }

    pub fn is_colorless(&self) -> bool {
        self.components.is_none()
    }

    /// Returns the color as unrounded RGB, or `None` when colorless.
    pub fn to_rgb(&self) -> Option<Rgb> {
        self.components.map(Components::to_rgb)
    }

    /// Converts to the perceptual space.
    ///
    /// HSL has no direct mapping to HUSL, so the conversion goes through RGB.
    /// Perceptual colors are returned unchanged.
    pub fn to_perceptual(&self) -> Self {
        if self.is_perceptual() {
            return *self;
        }

        let components = self.components.map(|components| {
            let husl = Husl::from_normalized_rgb(components.to_rgb().normalized());
            Components::Husl(husl)
        });
        trace!(from = ?self.components, to = ?components, "to perceptual");

        Self {
            components,
            alpha: self.alpha,
            space: ColorSpace::Perceptual,
        }
    }

    /// Converts to the standard space through RGB. Standard colors are
    /// returned unchanged.
    pub fn to_standard(&self) -> Self {
        if !self.is_perceptual() {
            return *self;
        }

        let components = self
            .components
            .map(|components| Components::Hsl(Hsl::from_rgb(components.to_rgb())));
        trace!(from = ?self.components, to = ?components, "to standard");

        Self {
            components,
            alpha: self.alpha,
            space: ColorSpace::Standard,
        }
    }

    /// Combines this color with another, channel by channel in RGB.
    ///
    /// Both operands are rendered to text and read back as RGB, so each one
    /// is rounded to 8-bit channels first. The channels are normalized to
    /// `[0, 1]` before `op` is applied, and no channel affects another. The
    /// result stays in this color's space and keeps this color's alpha.
    ///
    /// # Errors
    ///
    /// [`ColorError::Colorless`] if either operand has no components.
    pub fn operate(&self, op: Op, other: impl Into<ColorLike>) -> Result<Color, ColorError> {
        let other = other.into().to_color();
        if self.is_colorless() || other.is_colorless() {
            debug!(%op, "rejecting operation on a colorless color");
            return Err(ColorError::Colorless);
        }

        let lhs = parse_rgb(&self.to_string())?.normalized();
        let rhs = parse_rgb(&other.to_string())?.normalized();

        let mut result = [0.0; 3];
        for (c, out) in result.iter_mut().enumerate() {
            *out = op.apply(lhs[c], rhs[c]);
        }
        trace!(%op, ?lhs, ?rhs, ?result, "channel-wise operation");

        // The perceptual branch feeds the raw channel results to the HUSL
        // oracle; only the standard branch rescales and clips them.
        let components = match self.space {
            ColorSpace::Perceptual => Components::Husl(Husl::from_normalized_rgb(result)),
            ColorSpace::Standard => {
                Components::Hsl(Hsl::from_rgb(Rgb::from_normalized(result).clip()))
            }
        };

        Ok(Self {
            components: Some(components),
            alpha: self.alpha,
            space: self.space,
        })
    }

    /// Like [`Color::operate`], for an arbitrary expression value.
    ///
    /// # Errors
    ///
    /// [`ColorError::NotColorCoercible`] if `other` has no color form, plus
    /// the errors of [`Color::operate`].
    pub fn operate_value(&self, op: Op, other: &Value) -> Result<Color, ColorError> {
        self.operate(op, other.to_color()?)
    }

    /// Returns the components with alpha and space, or `None` when colorless.
    pub fn get_components(&self) -> Option<ColorComponents> {
        self.components.map(|components| {
            let [h, s, l] = components.to_array();
            ColorComponents {
                h: if h.is_nan() { 0.0 } else { h },
                s,
                l,
                a: self.alpha,
                perceptual: self.is_perceptual(),
            }
        })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::colorless()
    }
}

impl ToColor for Color {
    fn to_color(&self) -> Color {
        *self
    }
}

// Translucent colors can only be expressed with rgba(); opaque ones use hex,
// which older renderers understand.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(components) = self.components else {
            return Ok(());
        };

        if self.alpha < 1.0 {
            let [r, g, b] = components.to_rgb().rounded();
            write!(
                f,
                "rgba({}, {}, {}, {})",
                r,
                g,
                b,
                round(self.alpha, ALPHA_DECIMALS)
            )
        } else {
            f.write_str(&components.to_hex())
        }
    }
}

impl From<ColorComponents> for Color {
    fn from(c: ColorComponents) -> Self {
        Self::new(Some(&[c.h, c.s, c.l]), Some(c.a), Some(c.perceptual))
    }
}

impl From<Option<ColorComponents>> for Color {
    fn from(components: Option<ColorComponents>) -> Self {
        components.map(Color::from).unwrap_or_default()
    }
}

impl From<Color> for Option<ColorComponents> {
    fn from(color: Color) -> Self {
        color.get_components()
    }
}
