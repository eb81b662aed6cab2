// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbaColor`].
//!
//! There are two grammars, see [`HexDialect`]. Both accept an optional leading `#`
//! marker, and case insensitive hex digits. No whitespace is trimmed.
//!
//! | Dialect                  | Digits | Meaning                                      |
//! | ------------------------ | ------ | -------------------------------------------- |
//! | [`HexDialect::Extended`] | 3      | `rgb`, each digit doubled, alpha is `ff`     |
//! | [`HexDialect::Extended`] | 4      | `rgba`, each digit doubled                   |
//! | both                     | 6      | `rrggbb`, alpha is `ff`                      |
//! | [`HexDialect::Extended`] | 8      | `rrggbbaa`                                   |
//!
//! A parse either succeeds for the whole input, or fails as a whole. Partial results are
//! never returned.

use std::fmt;

use miette::Diagnostic;
use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::tag,
          character::complete::anychar,
          combinator::{all_consuming, map, map_opt, opt}};
use strum_macros::{Display, EnumString};

use crate::RgbaColor;

/// Which hex grammar [`RgbaColor::from_hex_with_dialect`] accepts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum HexDialect {
    /// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`.
    #[default]
    Extended,
    /// `#rrggbb` only. Every other length is rejected.
    Minimal,
}

/// The only failure in this crate: the text is not a hex color in the given dialect.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("🎨 Could not parse '{input}' as a {dialect} hex color")]
pub struct HexColorParseError {
    pub input: String,
    pub dialect: HexDialect,
}

/// Help text varies with the [`HexDialect`].
impl Diagnostic for HexColorParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("rgba_color::hex_color_parse_error"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.dialect.help_str()))
    }
}

impl HexDialect {
    #[must_use]
    pub fn help_str(self) -> &'static str {
        match self {
            HexDialect::Extended => {
                "Use 3, 4, 6, or 8 hex digits, with an optional leading '#', eg: #f80, #f80c, #ff8800, #ff8800cc"
            }
            HexDialect::Minimal => {
                "Use exactly 6 hex digits, with an optional leading '#', eg: #ff8800"
            }
        }
    }
}

impl RgbaColor {
    /// Parse `text` using [`HexDialect::Extended`]. This never fails: on invalid input it
    /// returns [`RgbaColor::HEX_PARSE_FALLBACK`] (transparent black).
    ///
    /// ```
    /// use rgba_color::RgbaColor;
    ///
    /// assert_eq!(RgbaColor::from_hex("#abc"), RgbaColor::from_hex("aabbcc"));
    /// assert_eq!(RgbaColor::from_hex("12"), RgbaColor::HEX_PARSE_FALLBACK);
    /// ```
    #[must_use]
    pub fn from_hex(text: &str) -> RgbaColor {
        Self::from_hex_with_dialect(text, HexDialect::Extended)
    }

    /// Parse `text` using the given `dialect`. This never fails: on invalid input it
    /// returns [`RgbaColor::HEX_PARSE_FALLBACK`] (transparent black).
    #[must_use]
    pub fn from_hex_with_dialect(text: &str, dialect: HexDialect) -> RgbaColor {
        match Self::try_from_hex_with_dialect(text, dialect) {
            Ok(color) => color,
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "🎨 Using fallback color for unparsable hex",
                    input = ?text,
                    dialect = %dialect,
                    error = %error
                );
                Self::HEX_PARSE_FALLBACK
            }
        }
    }

    /// Parse `text` using [`HexDialect::Extended`].
    ///
    /// # Errors
    ///
    /// Returns [`HexColorParseError`] if `text` is not a valid hex color.
    pub fn try_from_hex(text: &str) -> Result<RgbaColor, HexColorParseError> {
        Self::try_from_hex_with_dialect(text, HexDialect::Extended)
    }

    /// Parse `text` using the given `dialect`.
    ///
    /// # Errors
    ///
    /// Returns [`HexColorParseError`] if `text` is not a valid hex color in `dialect`.
    pub fn try_from_hex_with_dialect(
        text: &str,
        dialect: HexDialect,
    ) -> Result<RgbaColor, HexColorParseError> {
        let res = match dialect {
            HexDialect::Extended => parse_extended_hex_color(text),
            HexDialect::Minimal => parse_minimal_hex_color(text),
        };
        match res {
            Ok((_, bytes)) => Ok(RgbaColor::from_bytes(bytes)),
            Err(_) => Err(HexColorParseError {
                input: text.to_string(),
                dialect,
            }),
        }
    }
}

/// Uses [`HexDialect::Extended`].
impl std::str::FromStr for RgbaColor {
    type Err = HexColorParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> { Self::try_from_hex(text) }
}

impl TryFrom<&str> for RgbaColor {
    type Error = HexColorParseError;

    fn try_from(text: &str) -> Result<Self, Self::Error> { Self::try_from_hex(text) }
}

/// Parse function that generates `[red, green, blue, alpha]` bytes from a complete
/// `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa` string.
pub fn parse_extended_hex_color(input: &str) -> IResult<&str, [u8; 4]> {
    use helper_fns::{parse_doubled_digit, parse_hex_pair, parse_optional_marker};

    let (input, _) = parse_optional_marker(input)?;
    alt((
        all_consuming(map(
            (parse_hex_pair, parse_hex_pair, parse_hex_pair, parse_hex_pair),
            |(r, g, b, a)| [r, g, b, a],
        )),
        all_consuming(map(
            (parse_hex_pair, parse_hex_pair, parse_hex_pair),
            |(r, g, b)| [r, g, b, u8::MAX],
        )),
        all_consuming(map(
            (
                parse_doubled_digit,
                parse_doubled_digit,
                parse_doubled_digit,
                parse_doubled_digit,
            ),
            |(r, g, b, a)| [r, g, b, a],
        )),
        all_consuming(map(
            (parse_doubled_digit, parse_doubled_digit, parse_doubled_digit),
            |(r, g, b)| [r, g, b, u8::MAX],
        )),
    ))
    .parse(input)
}

/// Parse function that generates `[red, green, blue, alpha]` bytes from a complete
/// `#rrggbb` string. Alpha is always `ff`.
pub fn parse_minimal_hex_color(input: &str) -> IResult<&str, [u8; 4]> {
    use helper_fns::{parse_hex_pair, parse_optional_marker};

    let (input, _) = parse_optional_marker(input)?;
    all_consuming(map(
        (parse_hex_pair, parse_hex_pair, parse_hex_pair),
        |(r, g, b)| [r, g, b, u8::MAX],
    ))
    .parse(input)
}

/// Single character lookup: `0`-`9` map to 0-9, `a`-`f` and `A`-`F` map to 10-15, and
/// anything else is rejected.
#[must_use]
pub fn hex_digit_value(ch: char) -> Option<u8> {
    let byte = u8::try_from(ch).ok()?;
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Small [Parser] implementations that are combined by [`parse_extended_hex_color`] and
/// [`parse_minimal_hex_color`].
mod helper_fns {
    use super::{IResult, Parser, anychar, hex_digit_value, map, map_opt, opt, tag};

    pub fn parse_optional_marker(input: &str) -> IResult<&str, Option<&str>> {
        opt(tag("#")).parse(input)
    }

    pub fn parse_hex_digit(input: &str) -> IResult<&str, u8> {
        map_opt(anychar, hex_digit_value).parse(input)
    }

    /// `hl` becomes `h * 16 + l`.
    pub fn parse_hex_pair(input: &str) -> IResult<&str, u8> {
        map((parse_hex_digit, parse_hex_digit), |(hi, lo)| hi * 16 + lo).parse(input)
    }

    /// `h` is read as `hh`, so it becomes `h * 16 + h`.
    pub fn parse_doubled_digit(input: &str) -> IResult<&str, u8> {
        map(parse_hex_digit, |it| it * 16 + it).parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RgbaComponents, assert_eq2};
    use test_case::test_case;

    #[test_case("#ff0000")]
    #[test_case("ff0000")]
    #[test_case("#FF0000" ; "uppercase with marker")]
    #[test_case("#f00")]
    #[test_case("F00" ; "uppercase short no marker")]
    #[test_case("#ff0000ff")]
    #[test_case("#f00f")]
    fn test_parse_red(input: &str) {
        assert_eq2!(
            RgbaColor::from_hex(input).to_components(),
            RgbaComponents {
                red: 1.0,
                green: 0.0,
                blue: 0.0,
                alpha: 1.0
            }
        );
    }

    #[test]
    fn test_parse_valid_color_bytes() {
        assert_eq2!(parse_extended_hex_color("#2F14DF"), Ok(("", [47, 20, 223, 255])));
        assert_eq2!(parse_extended_hex_color("2f14df80"), Ok(("", [47, 20, 223, 128])));
        assert_eq2!(parse_extended_hex_color("#abc"), Ok(("", [170, 187, 204, 255])));
        assert_eq2!(parse_extended_hex_color("#abcd"), Ok(("", [170, 187, 204, 221])));
        assert_eq2!(parse_minimal_hex_color("#2F14DF"), Ok(("", [47, 20, 223, 255])));
    }

    #[test_case("#abc", "#aabbcc")]
    #[test_case("#abcd", "#aabbccdd")]
    #[test_case("123", "112233")]
    #[test_case("#0000", "#00000000" ; "transparent black")]
    fn test_short_forms_expand(short: &str, long: &str) {
        assert_eq2!(RgbaColor::from_hex(short), RgbaColor::from_hex(long));
        // Transparent black is a valid parse that equals the fallback value, so success
        // is checked on the fallible parse.
        assert!(RgbaColor::try_from_hex(short).is_ok());
        assert!(RgbaColor::try_from_hex(long).is_ok());
    }

    #[test_case("" ; "empty")]
    #[test_case("#" ; "marker only")]
    #[test_case("#ff000" ; "five digits")]
    fn test_parsers_report_error_not_incomplete(input: &str) {
        assert!(matches!(parse_extended_hex_color(input), Err(nom::Err::Error(_))));
        assert!(matches!(parse_minimal_hex_color(input), Err(nom::Err::Error(_))));
    }

    #[test]
    fn test_parse_alpha() {
        let it = RgbaColor::from_hex("#00000080").to_components();
        assert_eq2!(it.alpha, 128.0 / 255.0);
        let it = RgbaColor::from_hex("#0000").to_components();
        assert_eq2!(it.alpha, 0.0);
    }

    #[test_case("" ; "empty")]
    #[test_case("#" ; "marker only")]
    #[test_case("zzz" ; "not hex")]
    #[test_case("12" ; "too short")]
    #[test_case("#12345" ; "five digits")]
    #[test_case("#1234567" ; "seven digits")]
    #[test_case("#123456789" ; "nine digits")]
    #[test_case("##ff0000" ; "two markers")]
    #[test_case("ff0000#" ; "trailing marker")]
    #[test_case(" #ff0000" ; "leading space")]
    #[test_case("#ff0000 " ; "trailing space")]
    #[test_case("#ff00g0" ; "bad digit in last pair")]
    #[test_case("#ff0000fg" ; "bad digit in alpha pair")]
    #[test_case("#f🎨0" ; "emoji")]
    #[test_case("0xff0000" ; "rust style prefix")]
    fn test_extended_invalid_falls_back(input: &str) {
        assert_eq2!(RgbaColor::from_hex(input), RgbaColor::HEX_PARSE_FALLBACK);
        assert_eq2!(
            RgbaColor::try_from_hex(input),
            Err(HexColorParseError {
                input: input.to_string(),
                dialect: HexDialect::Extended,
            })
        );
    }

    #[test_case("#ff8800", Some([255, 136, 0, 255]))]
    #[test_case("FF8800", Some([255, 136, 0, 255]) ; "uppercase no marker")]
    #[test_case("#f80", None ; "three digits rejected")]
    #[test_case("#f80c", None ; "four digits rejected")]
    #[test_case("#ff8800cc", None ; "eight digits rejected")]
    #[test_case("", None ; "empty rejected")]
    fn test_minimal_dialect(input: &str, expected: Option<[u8; 4]>) {
        let color = RgbaColor::from_hex_with_dialect(input, HexDialect::Minimal);
        match expected {
            Some(bytes) => assert_eq2!(color, RgbaColor::from_bytes(bytes)),
            None => {
                assert_eq2!(color, RgbaColor::HEX_PARSE_FALLBACK);
                assert!(
                    RgbaColor::try_from_hex_with_dialect(input, HexDialect::Minimal)
                        .is_err()
                );
            }
        }
    }

    #[test]
    fn test_from_str_and_try_from() {
        let it: RgbaColor = "#123456".parse().unwrap();
        assert_eq2!(it, RgbaColor::rgb255(18, 52, 86));
        assert_eq2!(RgbaColor::try_from("#123456"), Ok(it));
        assert!("#12".parse::<RgbaColor>().is_err());
    }

    #[test]
    fn test_hex_digit_value() {
        assert_eq2!(hex_digit_value('0'), Some(0));
        assert_eq2!(hex_digit_value('9'), Some(9));
        assert_eq2!(hex_digit_value('a'), Some(10));
        assert_eq2!(hex_digit_value('F'), Some(15));
        assert_eq2!(hex_digit_value('g'), None);
        assert_eq2!(hex_digit_value('#'), None);
        assert_eq2!(hex_digit_value('٣'), None);
    }

    #[test]
    fn test_error_message_and_help() {
        let error = RgbaColor::try_from_hex_with_dialect("#f80", HexDialect::Minimal)
            .unwrap_err();
        assert_eq2!(
            error.to_string(),
            "🎨 Could not parse '#f80' as a minimal hex color"
        );
        let help = error.help().map(|it| it.to_string());
        assert_eq2!(help.as_deref(), Some(HexDialect::Minimal.help_str()));
        let code = error.code().map(|it| it.to_string());
        assert_eq2!(code.as_deref(), Some("rgba_color::hex_color_parse_error"));
    }

    #[test]
    fn test_dialect_names() {
        assert_eq2!(HexDialect::Extended.to_string(), "extended");
        assert_eq2!("minimal".parse::<HexDialect>(), Ok(HexDialect::Minimal));
        assert_eq2!(HexDialect::default(), HexDialect::Extended);
    }
}
