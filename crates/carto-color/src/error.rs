//! Errors raised by color operations.

use carto_color_space::ParseColorError;
use thiserror::Error;

/// Error returned when a color operation cannot be carried out.
///
/// Construction never fails; these only come from arithmetic, coercion and
/// operator parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// An operand has no components.
    #[error("cannot operate on a color with no components")]
    Colorless,
    /// The value has no color form.
    #[error("value is not color-coercible: {kind}")]
    NotColorCoercible { kind: &'static str },
    /// The operator symbol is not one of `+ - * / %`.
    #[error("unknown operator '{symbol}'")]
    UnknownOperator { symbol: String },
    /// A rendered color could not be read back as RGB.
    #[error(transparent)]
    Parse(#[from] ParseColorError),
}
