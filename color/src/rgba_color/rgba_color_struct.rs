// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGBA color representation, with normalized `f64` channels.

use serde::{Deserialize, Serialize};

/// Represents a color as four normalized channels: red, green, blue, alpha.
///
/// Each channel is conceptually in `[0.0, 1.0]` (alpha `1.0` is fully opaque), but values
/// are stored exactly as given. Negative, greater than `1.0`, and NaN values are kept
/// verbatim. There is no construction time clamping. The only clamping happens at
/// encode time in [`RgbaColor::to_hex`].
///
/// This type is immutable. To "change" a color, extract its
/// [`RgbaColor::to_components`], and build a new one.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct RgbaColor {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

/// The decomposed channels of a [`RgbaColor`], returned by
/// [`RgbaColor::to_components`].
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct RgbaComponents {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl RgbaColor {
    /// Produced by [`RgbaColor::from_hex`] when the input can't be parsed: transparent
    /// black.
    pub const HEX_PARSE_FALLBACK: RgbaColor = RgbaColor::rgba(0.0, 0.0, 0.0, 0.0);

    /// Stores the four channels unmodified.
    #[must_use]
    pub const fn from_components(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Positional equivalent of [`RgbaColor::from_components`].
    #[must_use]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::from_components(r, g, b, a)
    }

    /// Fully opaque color, same as `rgba(r, g, b, 1.0)`.
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self { Self::rgba(r, g, b, 1.0) }

    /// Fully opaque color from 8-bit style integer channels. Each channel is divided by
    /// 255 (real division, not truncating). Out of range input is not clamped, eg: `510`
    /// becomes `2.0`.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn rgb255(r: i32, g: i32, b: i32) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Color from four 8-bit channels (red, green, blue, alpha), each divided by 255.
    #[must_use]
    pub fn from_bytes([red, green, blue, alpha]: [u8; 4]) -> Self {
        let it = |byte: u8| f64::from(byte) / 255.0;
        Self::from_components(it(red), it(green), it(blue), it(alpha))
    }

    /// Returns the four stored channels verbatim.
    #[must_use]
    pub const fn to_components(self) -> RgbaComponents {
        RgbaComponents {
            red: self.red,
            green: self.green,
            blue: self.blue,
            alpha: self.alpha,
        }
    }
}

impl From<RgbaComponents> for RgbaColor {
    fn from(it: RgbaComponents) -> Self {
        Self::from_components(it.red, it.green, it.blue, it.alpha)
    }
}

impl From<RgbaColor> for RgbaComponents {
    fn from(it: RgbaColor) -> Self { it.to_components() }
}

impl From<[u8; 4]> for RgbaColor {
    fn from(bytes: [u8; 4]) -> Self { Self::from_bytes(bytes) }
}

impl From<(f64, f64, f64, f64)> for RgbaColor {
    fn from((red, green, blue, alpha): (f64, f64, f64, f64)) -> Self {
        Self::from_components(red, green, blue, alpha)
    }
}

/// Opaque black.
impl Default for RgbaColor {
    fn default() -> Self { Self::rgb(0.0, 0.0, 0.0) }
}
