//! Parsing of rendered color text back into RGB.
//!
//! Only the forms a rendered color can take are accepted:
//!
//! - `#rgb` and `#rrggbb`
//! - `rgb(r, g, b)`
//! - `rgba(r, g, b, a)` (the alpha is read and dropped)

use cssparser::{ParseError, ParseErrorKind, Parser, ParserInput, Token};
use thiserror::Error;

use crate::rgb::Rgb;

/// Error returned when color text cannot be read back as RGB.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The text was empty or only whitespace.
    #[error("empty color text")]
    Empty,
    /// A `#` color with the wrong number of digits or non-hex digits.
    #[error("invalid hex color '{text}'")]
    InvalidHex { text: String },
    /// Anything other than a hex, `rgb()` or `rgba()` color.
    #[error("unrecognized color text '{text}'")]
    InvalidSyntax { text: String },
}

/// Parses hex, `rgb()` or `rgba()` color text into RGB on the 0–255 scale.
///
/// # Example
///
/// ```rust
/// use carto_color_space::{parse_rgb, Rgb};
///
/// assert_eq!(parse_rgb("#3366ff").unwrap(), Rgb::new(51.0, 102.0, 255.0));
/// assert_eq!(parse_rgb("rgba(51, 102, 255, 0.5)").unwrap(), Rgb::new(51.0, 102.0, 255.0));
/// ```
pub fn parse_rgb(text: &str) -> Result<Rgb, ParseColorError> {
    if text.trim().is_empty() {
        return Err(ParseColorError::Empty);
    }

    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parse_color_tokens(&mut parser).map_err(|err| match err.kind {
        ParseErrorKind::Custom(()) => ParseColorError::InvalidHex {
            text: text.to_string(),
        },
        _ => ParseColorError::InvalidSyntax {
            text: text.to_string(),
        },
    })
}

fn parse_color_tokens<'i>(parser: &mut Parser<'i, '_>) -> Result<Rgb, ParseError<'i, ()>> {
    let token = parser.next()?.clone();
    let rgb = match token {
        Token::Hash(value) | Token::IDHash(value) => match parse_hex_digits(&value) {
            Some(rgb) => rgb,
            None => return Err(parser.new_custom_error(())),
        },
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            parser.parse_nested_block(|args| parse_channels(args))?
        }
        token => return Err(parser.new_unexpected_token_error(token)),
    };
    parser.expect_exhausted()?;
    Ok(rgb)
}

fn parse_channels<'i>(args: &mut Parser<'i, '_>) -> Result<Rgb, ParseError<'i, ()>> {
    let r = args.expect_number()?;
    args.expect_comma()?;
    let g = args.expect_number()?;
    args.expect_comma()?;
    let b = args.expect_number()?;
    if args.try_parse(|args| args.expect_comma()).is_ok() {
        args.expect_number()?;
    }
    args.expect_exhausted()?;
    Ok(Rgb::new(r as f64, g as f64, b as f64))
}

fn parse_hex_digits(digits: &str) -> Option<Rgb> {
    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };

    let bytes = digits.as_bytes();
    let (r, g, b) = match bytes.len() {
        3 => (
            nibble(bytes[0])? * 17,
            nibble(bytes[1])? * 17,
            nibble(bytes[2])? * 17,
        ),
        6 => {
            let pair = |hi: u8, lo: u8| -> Option<u8> { Some(nibble(hi)? << 4 | nibble(lo)?) };
            (
                pair(bytes[0], bytes[1])?,
                pair(bytes[2], bytes[3])?,
                pair(bytes[4], bytes[5])?,
            )
        }
        _ => return None,
    };

    Some(Rgb::from((r, g, b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex6() {
        assert_eq!(parse_rgb("#3366ff"), Ok(Rgb::new(51.0, 102.0, 255.0)));
        assert_eq!(parse_rgb("#3366FF"), Ok(Rgb::new(51.0, 102.0, 255.0)));
    }

    #[test]
    fn test_parse_hex3() {
        assert_eq!(parse_rgb("#f0a"), Ok(Rgb::new(255.0, 0.0, 170.0)));
    }

    #[test]
    fn test_parse_hex_starting_with_digit() {
        assert_eq!(parse_rgb("#000a01"), Ok(Rgb::new(0.0, 10.0, 1.0)));
    }

    #[test]
    fn test_parse_rgba_drops_alpha() {
        assert_eq!(
            parse_rgb("rgba(0, 128, 255, 0.35)"),
            Ok(Rgb::new(0.0, 128.0, 255.0))
        );
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(parse_rgb("rgb(1, 2, 3)"), Ok(Rgb::new(1.0, 2.0, 3.0)));
        assert_eq!(parse_rgb("  RGB(1,2,3)  "), Ok(Rgb::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_rgb(""), Err(ParseColorError::Empty));
        assert_eq!(parse_rgb("   "), Err(ParseColorError::Empty));
    }

    #[test]
    fn test_parse_invalid_hex() {
        assert!(matches!(
            parse_rgb("#12345"),
            Err(ParseColorError::InvalidHex { .. })
        ));
        assert!(matches!(
            parse_rgb("#gggggg"),
            Err(ParseColorError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_syntax() {
        for text in ["red", "hsl(0, 1, 1)", "rgb(1, 2)", "rgb(1, 2, 3) extra"] {
            let err = parse_rgb(text).unwrap_err();
            assert!(
                matches!(err, ParseColorError::InvalidSyntax { .. }),
                "{}: {:?}",
                text,
                err
            );
            assert!(err.to_string().contains(text));
        }
    }
}
