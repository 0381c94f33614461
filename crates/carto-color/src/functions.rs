//! Stylesheet color functions.
//!
//! Percentages are taken as plain numbers (`lighten(c, 10.0)` lightens by 10%).
//! Adjusters work on the stored components of whichever space the color is
//! in, and the result stays in that space.

use carto_color_space::Rgb;

use crate::color::{Color, DEFAULT_ALPHA};
use crate::error::ColorError;

pub fn rgb(r: f64, g: f64, b: f64) -> Color {
    rgba(r, g, b, DEFAULT_ALPHA)
}

pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
    Color::from_rgb(Rgb::new(r, g, b)).with_alpha(a)
}

pub fn hsl(h: f64, s: f64, l: f64) -> Color {
    hsla(h, s, l, DEFAULT_ALPHA)
}

pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Color {
    from_percentages(h, s, l, a, false)
}

pub fn husl(h: f64, s: f64, l: f64) -> Color {
    husla(h, s, l, DEFAULT_ALPHA)
}

pub fn husla(h: f64, s: f64, l: f64, a: f64) -> Color {
    from_percentages(h, s, l, a, true)
}

fn from_percentages(h: f64, s: f64, l: f64, a: f64, perceptual: bool) -> Color {
    Color::new(
        Some(&[h.rem_euclid(360.0), s / 100.0, l / 100.0]),
        Some(a),
        Some(perceptual),
    )
}

pub fn hue(color: &Color) -> Result<f64, ColorError> {
    Ok(triple(color)?[0])
}

/// Saturation as a percentage.
pub fn saturation(color: &Color) -> Result<f64, ColorError> {
    Ok(triple(color)?[1] * 100.0)
}

/// Lightness as a percentage.
pub fn lightness(color: &Color) -> Result<f64, ColorError> {
    Ok(triple(color)?[2] * 100.0)
}

pub fn alpha(color: &Color) -> f64 {
    color.alpha()
}

pub fn lighten(color: &Color, amount: f64) -> Result<Color, ColorError> {
    adjust(color, |[h, s, l]| [h, s, l + amount / 100.0])
}

pub fn darken(color: &Color, amount: f64) -> Result<Color, ColorError> {
    adjust(color, |[h, s, l]| [h, s, l - amount / 100.0])
}

pub fn saturate(color: &Color, amount: f64) -> Result<Color, ColorError> {
    adjust(color, |[h, s, l]| [h, s + amount / 100.0, l])
}

pub fn desaturate(color: &Color, amount: f64) -> Result<Color, ColorError> {
    adjust(color, |[h, s, l]| [h, s - amount / 100.0, l])
}

pub fn greyscale(color: &Color) -> Result<Color, ColorError> {
    adjust(color, |[h, _, l]| [h, 0.0, l])
}

/// Rotates the hue by `degrees`, wrapping around the color wheel.
pub fn spin(color: &Color, degrees: f64) -> Result<Color, ColorError> {
    adjust(color, |[h, s, l]| [(h + degrees).rem_euclid(360.0), s, l])
}

pub fn fadein(color: &Color, amount: f64) -> Result<Color, ColorError> {
    fade(color, color.alpha() * 100.0 + amount)
}

pub fn fadeout(color: &Color, amount: f64) -> Result<Color, ColorError> {
    fade(color, color.alpha() * 100.0 - amount)
}

/// Sets the alpha to `amount` percent.
pub fn fade(color: &Color, amount: f64) -> Result<Color, ColorError> {
    triple(color)?;
    Ok(color.with_alpha((amount / 100.0).clamp(0.0, 1.0)))
}

/// Mixes two colors in RGB.
///
/// `weight` is the percentage of `a` in the result. The difference in alpha
/// between the two colors shifts the channel weights toward the more opaque
/// one. The result is in `a`'s color space.
pub fn mix(a: &Color, b: &Color, weight: f64) -> Result<Color, ColorError> {
    let (Some(rgb1), Some(rgb2)) = (a.to_rgb(), b.to_rgb()) else {
        return Err(ColorError::Colorless);
    };

    let p = weight / 100.0;
    let w = p * 2.0 - 1.0;
    let da = a.alpha() - b.alpha();
    let bias = if w * da == -1.0 {
        w
    } else {
        (w + da) / (1.0 + w * da)
    };
    let w1 = (bias + 1.0) / 2.0;
    let w2 = 1.0 - w1;

    let mixed = Rgb::new(
        rgb1.r * w1 + rgb2.r * w2,
        rgb1.g * w1 + rgb2.g * w2,
        rgb1.b * w1 + rgb2.b * w2,
    );
    let alpha = a.alpha() * p + b.alpha() * (1.0 - p);

    let result = Color::from_rgb(mixed).with_alpha(alpha);
    if a.is_perceptual() {
        Ok(result.to_perceptual())
    } else {
        Ok(result)
    }
}

fn triple(color: &Color) -> Result<[f64; 3], ColorError> {
    color
        .components()
        .map(|components| components.to_array())
        .ok_or(ColorError::Colorless)
}

fn adjust(color: &Color, f: impl FnOnce([f64; 3]) -> [f64; 3]) -> Result<Color, ColorError> {
    let adjusted = f(triple(color)?);
    Ok(Color::new(
        Some(&adjusted),
        Some(color.alpha()),
        Some(color.is_perceptual()),
    ))
}
