//! RGB triplets shared by both color-space oracles.

/// An RGB color with channels on the 0–255 scale.
///
/// Channels are kept as unrounded floats so conversions can chain through
/// RGB without accumulating integer rounding. Use [`Rgb::rounded`] or
/// [`Rgb::to_hex`] when producing output.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Builds an RGB color from channels on the `[0, 1]` scale.
    pub fn from_normalized([r, g, b]: [f64; 3]) -> Self {
        Self::new(r * 255.0, g * 255.0, b * 255.0)
    }

    /// Returns the channels divided by 255.
    pub fn normalized(self) -> [f64; 3] {
        [self.r / 255.0, self.g / 255.0, self.b / 255.0]
    }

    pub fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Clips every channel into `[0, 255]`. NaN channels become `0`, so a
    /// channel's result never depends on the other channels.
    pub fn clip(self) -> Self {
        Self::new(clip_channel(self.r), clip_channel(self.g), clip_channel(self.b))
    }

    /// Rounds every channel half-up to the nearest integer in `0..=255`.
    pub fn rounded(self) -> [u8; 3] {
        [round_channel(self.r), round_channel(self.g), round_channel(self.b)]
    }

    /// Formats the color as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.rounded();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r as f64, g as f64, b as f64)
    }
}

fn clip_channel(c: f64) -> f64 {
    if c.is_nan() {
        0.0
    } else {
        c.clamp(0.0, 255.0)
    }
}

fn round_channel(c: f64) -> u8 {
    if c.is_nan() {
        return 0;
    }
    (c.clamp(0.0, 255.0) + 0.5).floor() as u8
}
