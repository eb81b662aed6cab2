// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core color type and conversions.
//!
//! This module provides:
//! - **Value type**: [`RgbaColor`], four `f64` channels stored verbatim.
//! - **Decoding**: [`hex_color_parser`] turns `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//!   strings into colors, for each [`HexDialect`].
//! - **Encoding**: [`hex_encoder`] turns colors into `rrggbb` strings.
//! - **Named colors**: the Tango [`palette`].
//!
//! [`RgbaColor`]: crate::RgbaColor
//! [`HexDialect`]: crate::HexDialect

// Attach.
pub mod hex_color_parser;
pub mod hex_encoder;
pub mod palette;
mod rgba_color_struct;

// Re-export.
pub use hex_color_parser::{HexColorParseError, HexDialect};
pub use hex_encoder::HexAndAlpha;
pub use rgba_color_struct::*;
