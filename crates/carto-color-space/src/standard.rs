//! Standard HSL conversions.
//!
//! Hue is in degrees `[0, 360]`, saturation and lightness are fractions
//! `[0, 1]`. RGB values are on the 0–255 scale and left unrounded.

use crate::rgb::Rgb;

/// Converts HSL to RGB.
///
/// # Example
///
/// ```rust
/// use carto_color_space::standard::hsl_to_rgb;
///
/// assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5).rounded(), [255, 0, 0]);
/// ```
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    if s == 0.0 {
        let v = l * 255.0;
        return Rgb::new(v, v, v);
    }

    let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t1 = 2.0 * l - t2;
    let hue = h / 360.0;

    let channel = |offset: f64| -> f64 {
        let mut t3 = hue + offset;
        if t3 < 0.0 {
            t3 += 1.0;
        }
        if t3 > 1.0 {
            t3 -= 1.0;
        }

        let c = if 6.0 * t3 < 1.0 {
            t1 + (t2 - t1) * 6.0 * t3
        } else if 2.0 * t3 < 1.0 {
            t2
        } else if 3.0 * t3 < 2.0 {
            t1 + (t2 - t1) * (2.0 / 3.0 - t3) * 6.0
        } else {
            t1
        };
        c * 255.0
    };

    Rgb::new(channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0))
}

/// Converts RGB to HSL.
///
/// Achromatic colors have no defined hue; it is reported as `0`.
pub fn rgb_to_hsl(rgb: Rgb) -> (f64, f64, f64) {
    let [r, g, b] = rgb.normalized();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let delta = max - min;
    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let mut h = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    (h, s, l)
}

/// Formats an HSL color as lowercase `#rrggbb`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}
