// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Encode a [`RgbaColor`] into a hex string.
//!
//! Each of red, green, blue (never alpha) is turned into a hex byte like so:
//! 1. Multiply the channel by 255.
//! 2. Round to the nearest integer, half away from zero ([`f64::round`]).
//! 3. Clamp to `0..=255`. Negative values become `00`, values over 255 become `ff`, and
//!    NaN becomes `00`. This is the only place where channels are clamped.
//! 4. Write the byte as two lowercase base-16 digits, high digit first. A clamped byte
//!    always has exactly two digits in `0-9a-f`, so there is no out-of-table case.

use std::fmt::{Display, Formatter, Result, Write as _};

use serde::{Deserialize, Serialize};

use crate::{HEX_STRING_LEN, HexString, RgbaColor};

/// The `rrggbb` encoding of a color, with its opacity split out rather than encoded in
/// the string. Returned by [`RgbaColor::to_hex_with_alpha`].
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HexAndAlpha {
    /// 6 lowercase hex characters, no `#` marker.
    pub hex: HexString,
    /// The stored alpha channel, verbatim.
    pub alpha: f64,
}

impl RgbaColor {
    /// Renders red, green, blue as 6 lowercase hex characters, eg: `ff8000`. There is no
    /// `#` marker, and alpha is not encoded. See the [module docs](self) for how each
    /// channel is rounded and clamped.
    #[must_use]
    pub fn to_hex(self) -> HexString {
        let components = self.to_components();
        let r = channel_to_byte(components.red);
        let g = channel_to_byte(components.green);
        let b = channel_to_byte(components.blue);

        let mut acc = HexString::with_capacity(HEX_STRING_LEN);
        _ = write!(acc, "{r:02x}{g:02x}{b:02x}");
        acc
    }

    /// Same as [`RgbaColor::to_hex`], but also returns the alpha channel. Callers that
    /// need the `#` marker prepend it themselves.
    #[must_use]
    pub fn to_hex_with_alpha(self) -> HexAndAlpha {
        HexAndAlpha {
            hex: self.to_hex(),
            alpha: self.to_components().alpha,
        }
    }
}

/// Renders `#rrggbb`. Alpha is not rendered.
impl Display for RgbaColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "#{}", self.to_hex()) }
}

/// Steps 1 to 3 of the encoding: scale, round, clamp.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_byte(channel: f64) -> u8 {
    let rounded = (channel * 255.0).round();
    if rounded < 0.0 {
        u8::MIN
    } else if rounded > 255.0 {
        u8::MAX
    } else {
        // NaN saturates to 0.
        rounded as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(255, 0, 0, "ff0000")]
    #[test_case(0, 0, 0, "000000")]
    #[test_case(255, 255, 255, "ffffff")]
    #[test_case(18, 52, 86, "123456")]
    #[test_case(171, 205, 239, "abcdef")]
    #[test_case(15, 16, 240, "0f10f0")]
    fn test_to_hex_rgb255(r: i32, g: i32, b: i32, expected: &str) {
        assert_eq2!(RgbaColor::rgb255(r, g, b).to_hex().as_str(), expected);
    }

    #[test]
    fn test_to_hex_every_byte() {
        for byte in 0..=255_u8 {
            let it = RgbaColor::rgb255(i32::from(byte), 0, 255 - i32::from(byte));
            let expected = format!("{byte:02x}00{:02x}", 255 - byte);
            assert_eq2!(it.to_hex().as_str(), expected.as_str());
        }
    }

    #[test_case(-1.0, "00" ; "negative clamps to 00")]
    #[test_case(2.0, "ff" ; "over one clamps to ff")]
    #[test_case(f64::NAN, "00" ; "nan encodes as 00")]
    #[test_case(f64::INFINITY, "ff" ; "infinity encodes as ff")]
    #[test_case(f64::NEG_INFINITY, "00" ; "negative infinity encodes as 00")]
    #[test_case(-0.001, "00" ; "tiny negative rounds to 00")]
    fn test_to_hex_clamps_at_encode(red: f64, expected_red: &str) {
        let hex = RgbaColor::rgb(red, 0.0, 0.0).to_hex();
        assert_eq2!(&hex.as_str()[..2], expected_red);
        assert_eq2!(&hex.as_str()[2..], "0000");
    }

    #[test]
    fn test_to_hex_rounds_half_away_from_zero() {
        // 0.5 * 255 = 127.5
        assert_eq2!(RgbaColor::rgb(0.5, 0.0, 0.0).to_hex().as_str(), "800000");
        // 0.499 * 255 = 127.245
        assert_eq2!(RgbaColor::rgb(0.499, 0.0, 0.0).to_hex().as_str(), "7f0000");
    }

    #[test]
    fn test_to_hex_ignores_alpha() {
        let opaque = RgbaColor::rgba(0.2, 0.4, 0.6, 1.0);
        let transparent = RgbaColor::rgba(0.2, 0.4, 0.6, 0.0);
        assert_eq2!(opaque.to_hex(), transparent.to_hex());
        assert_eq2!(opaque.to_hex().as_str(), "336699");
    }

    #[test]
    fn test_to_hex_with_alpha() {
        let it = RgbaColor::rgba(1.0, 0.0, 0.0, 0.25).to_hex_with_alpha();
        assert_eq2!(it.hex.as_str(), "ff0000");
        assert_eq2!(it.alpha, 0.25);

        // Alpha is returned verbatim, not clamped.
        let it = RgbaColor::rgba(0.0, 0.0, 0.0, 7.5).to_hex_with_alpha();
        assert_eq2!(it.alpha, 7.5);
    }

    #[test]
    fn test_display() {
        assert_eq2!(format!("{}", RgbaColor::rgb255(18, 52, 86)), "#123456");
    }

    #[test_case(f64::MAX, f64::MIN, f64::NAN ; "extremes")]
    #[test_case(1e-300, 0.999_999, 256.0 ; "near edges")]
    fn test_to_hex_is_always_six_lowercase_digits(r: f64, g: f64, b: f64) {
        let hex = RgbaColor::rgb(r, g, b).to_hex();
        assert_eq2!(hex.len(), HEX_STRING_LEN);
        assert!(hex.chars().all(|it| matches!(it, '0'..='9' | 'a'..='f')));
    }

    #[test_case(0.0, 0 ; "zero")]
    #[test_case(1.0, 255 ; "one")]
    #[test_case(0.5, 128 ; "half")]
    #[test_case(-3.0, 0 ; "below range")]
    #[test_case(3.0, 255 ; "above range")]
    fn test_channel_to_byte(channel: f64, expected: u8) {
        assert_eq2!(channel_to_byte(channel), expected);
    }
}
