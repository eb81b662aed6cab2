// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # rgba_color
//!
//! An immutable [`RgbaColor`] value type, and pure conversions between:
//! 1. Normalized floating point channels (red, green, blue, alpha), see
//!    [`RgbaColor::from_components`] and [`RgbaColor::to_components`].
//! 2. 8-bit integer channels, see [`RgbaColor::rgb255`].
//! 3. Hex strings: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (the `#` marker is optional),
//!    see [`RgbaColor::from_hex`] and [`RgbaColor::to_hex`].
//!
//! It also provides the [Tango](http://tango.freedesktop.org/Tango_Icon_Theme_Guidelines)
//! named color [`palette`].
//!
//! # Channel values are stored verbatim
//!
//! Every channel is conceptually in the range `[0.0, 1.0]`, but none of the
//! constructors clamp. The only clamping happens when a color is encoded to hex, see
//! [`RgbaColor::to_hex`].
//!
//! ```
//! use rgba_color::RgbaColor;
//!
//! let it = RgbaColor::from_components(2.0, -1.0, 0.5, 1.0);
//! assert_eq!(it.to_components().red, 2.0);
//! assert_eq!(it.to_hex().as_str(), "ff0080");
//! ```
//!
//! # Parsing never fails
//!
//! [`RgbaColor::from_hex`] returns [`RgbaColor::HEX_PARSE_FALLBACK`] (transparent black)
//! when the input can't be parsed. Use [`RgbaColor::try_from_hex`] if you need to know
//! that parsing failed.
//!
//! ```
//! use rgba_color::{RgbaColor, palette};
//!
//! assert_eq!(RgbaColor::from_hex("#cc0000"), palette::RED);
//! assert_eq!(RgbaColor::from_hex("#zzz"), RgbaColor::HEX_PARSE_FALLBACK);
//! assert!(RgbaColor::try_from_hex("#zzz").is_err());
//! ```

// https://github.com/rust-lang/rust-clippy/blob/master/clippy_lints/src/methods/unwrap_in_result.rs
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod cli;
pub mod common;
pub mod decl_macros;
pub mod log;
pub mod rgba_color;

// Re-export.
pub use common::*;
pub use rgba_color::*;
