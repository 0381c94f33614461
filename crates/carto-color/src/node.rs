//! Expression values and their coercion to colors.
//!
//! Color arithmetic accepts any value that has a color form. The set of such
//! values is closed: [`ColorLike`] lists them, and everything else is
//! rejected when converting from a [`Value`].

use carto_color_space::Rgb;

use crate::color::Color;
use crate::error::ColorError;

/// Capability of values that can stand in for a color in arithmetic.
pub trait ToColor {
    fn to_color(&self) -> Color;
}

/// A stylesheet number with an optional unit.
///
/// The unit is carried for the surrounding expression engine; color
/// coercion only looks at `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub value: f64,
    pub unit: Option<String>,
}

impl Dimension {
    pub fn new(value: f64) -> Self {
        Self { value, unit: None }
    }

    pub fn with_unit(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: Some(unit.to_string()),
        }
    }
}

/// A number used as a color is the gray with that value in every RGB channel.
impl ToColor for Dimension {
    fn to_color(&self) -> Color {
        Color::from_rgb(Rgb::new(self.value, self.value, self.value))
    }
}

/// A value that can be coerced to a color.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorLike {
    Color(Color),
    Dimension(Dimension),
}

impl ToColor for ColorLike {
    fn to_color(&self) -> Color {
        match self {
            ColorLike::Color(color) => *color,
            ColorLike::Dimension(dimension) => dimension.to_color(),
        }
    }
}

impl From<Color> for ColorLike {
    fn from(color: Color) -> Self {
        ColorLike::Color(color)
    }
}

impl From<Dimension> for ColorLike {
    fn from(dimension: Dimension) -> Self {
        ColorLike::Dimension(dimension)
    }
}

impl TryFrom<Value> for ColorLike {
    type Error = ColorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Color(color) => Ok(ColorLike::Color(color)),
            Value::Dimension(dimension) => Ok(ColorLike::Dimension(dimension)),
            other => Err(ColorError::NotColorCoercible { kind: other.kind() }),
        }
    }
}

/// An evaluated expression value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Color(Color),
    Dimension(Dimension),
    Keyword(String),
    Quoted(String),
}

impl Value {
    /// Values are terminal; evaluating one yields itself.
    pub fn evaluate(&self) -> &Self {
        self
    }

    /// Name of the value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Color(_) => "color",
            Value::Dimension(_) => "dimension",
            Value::Keyword(_) => "keyword",
            Value::Quoted(_) => "quoted string",
        }
    }

    /// Coerces the value to a color.
    ///
    /// # Errors
    ///
    /// [`ColorError::NotColorCoercible`] for keywords and quoted strings.
    pub fn to_color(&self) -> Result<Color, ColorError> {
        ColorLike::try_from(self.clone()).map(|color_like| color_like.to_color())
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::Color(color)
    }
}

impl From<Dimension> for Value {
    fn from(dimension: Dimension) -> Self {
        Value::Dimension(dimension)
    }
}
