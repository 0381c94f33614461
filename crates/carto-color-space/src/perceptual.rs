//! Perceptual (HUSL) conversions backed by the `hsluv` crate.
//!
//! HUSL saturation and lightness use their native `[0, 100]` scale here.
//! Callers that store them as fractions must rescale on the way in and out.

use tracing::trace;

use crate::rgb::Rgb;

/// Converts a HUSL color to RGB on the 0–255 scale.
pub fn husl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let (r, g, b) = hsluv::hsluv_to_rgb(h, s, l);
    trace!(h, s, l, r, g, b, "husl -> rgb");
    Rgb::from_normalized([r, g, b])
}

/// Converts normalized RGB (`[0, 1]` channels) to HUSL.
///
/// Channels outside `[0, 1]` are passed through as-is; the result is then
/// whatever the HUSL math yields for them.
pub fn rgb_to_husl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (h, s, l) = hsluv::rgb_to_hsluv(r, g, b);
    trace!(r, g, b, h, s, l, "rgb -> husl");
    (h, s, l)
}

/// Formats a HUSL color as lowercase `#rrggbb`.
pub fn husl_to_hex(h: f64, s: f64, l: f64) -> String {
    husl_to_rgb(h, s, l).to_hex()
}
