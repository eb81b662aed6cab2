// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Named colors from the [Tango](http://tango.freedesktop.org/Tango_Icon_Theme_Guidelines)
//! palette. Every constant is fully opaque.
//!
//! - A light, base, and dark tone for red, orange, yellow, green, blue, purple, and
//!   brown.
//! - An 8 step greyscale, from [`WHITE`] to [`BLACK`]. The three grey constants are also
//!   available with the `GRAY` spelling, with identical values.
//!
//! [`NamedColor`] enumerates the canonical entries, so the palette can be listed.

use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};

use crate::RgbaColor;

pub const LIGHT_RED: RgbaColor = RgbaColor::rgb255(239, 41, 41);
pub const RED: RgbaColor = RgbaColor::rgb255(204, 0, 0);
pub const DARK_RED: RgbaColor = RgbaColor::rgb255(164, 0, 0);

pub const LIGHT_ORANGE: RgbaColor = RgbaColor::rgb255(252, 175, 62);
pub const ORANGE: RgbaColor = RgbaColor::rgb255(245, 121, 0);
pub const DARK_ORANGE: RgbaColor = RgbaColor::rgb255(206, 92, 0);

pub const LIGHT_YELLOW: RgbaColor = RgbaColor::rgb255(255, 233, 79);
pub const YELLOW: RgbaColor = RgbaColor::rgb255(237, 212, 0);
pub const DARK_YELLOW: RgbaColor = RgbaColor::rgb255(196, 160, 0);

pub const LIGHT_GREEN: RgbaColor = RgbaColor::rgb255(138, 226, 52);
pub const GREEN: RgbaColor = RgbaColor::rgb255(115, 210, 22);
pub const DARK_GREEN: RgbaColor = RgbaColor::rgb255(78, 154, 6);

pub const LIGHT_BLUE: RgbaColor = RgbaColor::rgb255(114, 159, 207);
pub const BLUE: RgbaColor = RgbaColor::rgb255(52, 101, 164);
pub const DARK_BLUE: RgbaColor = RgbaColor::rgb255(32, 74, 135);

pub const LIGHT_PURPLE: RgbaColor = RgbaColor::rgb255(173, 127, 168);
pub const PURPLE: RgbaColor = RgbaColor::rgb255(117, 80, 123);
pub const DARK_PURPLE: RgbaColor = RgbaColor::rgb255(92, 53, 102);

pub const LIGHT_BROWN: RgbaColor = RgbaColor::rgb255(233, 185, 110);
pub const BROWN: RgbaColor = RgbaColor::rgb255(193, 125, 17);
pub const DARK_BROWN: RgbaColor = RgbaColor::rgb255(143, 89, 2);

pub const WHITE: RgbaColor = RgbaColor::rgb255(255, 255, 255);
pub const LIGHT_GREY: RgbaColor = RgbaColor::rgb255(238, 238, 236);
pub const GREY: RgbaColor = RgbaColor::rgb255(211, 215, 207);
pub const DARK_GREY: RgbaColor = RgbaColor::rgb255(186, 189, 182);
pub const LIGHT_CHARCOAL: RgbaColor = RgbaColor::rgb255(136, 138, 133);
pub const CHARCOAL: RgbaColor = RgbaColor::rgb255(85, 87, 83);
pub const DARK_CHARCOAL: RgbaColor = RgbaColor::rgb255(46, 52, 54);
pub const BLACK: RgbaColor = RgbaColor::rgb255(0, 0, 0);

pub const LIGHT_GRAY: RgbaColor = LIGHT_GREY;
pub const GRAY: RgbaColor = GREY;
pub const DARK_GRAY: RgbaColor = DARK_GREY;

/// One entry per canonical palette constant, in palette order. The `GRAY` aliases don't
/// have their own entries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumCount, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NamedColor {
    LightRed,
    Red,
    DarkRed,
    LightOrange,
    Orange,
    DarkOrange,
    LightYellow,
    Yellow,
    DarkYellow,
    LightGreen,
    Green,
    DarkGreen,
    LightBlue,
    Blue,
    DarkBlue,
    LightPurple,
    Purple,
    DarkPurple,
    LightBrown,
    Brown,
    DarkBrown,
    White,
    LightGrey,
    Grey,
    DarkGrey,
    LightCharcoal,
    Charcoal,
    DarkCharcoal,
    Black,
}

impl NamedColor {
    #[must_use]
    pub const fn color(self) -> RgbaColor {
        match self {
            NamedColor::LightRed => LIGHT_RED,
            NamedColor::Red => RED,
            NamedColor::DarkRed => DARK_RED,
            NamedColor::LightOrange => LIGHT_ORANGE,
            NamedColor::Orange => ORANGE,
            NamedColor::DarkOrange => DARK_ORANGE,
            NamedColor::LightYellow => LIGHT_YELLOW,
            NamedColor::Yellow => YELLOW,
            NamedColor::DarkYellow => DARK_YELLOW,
            NamedColor::LightGreen => LIGHT_GREEN,
            NamedColor::Green => GREEN,
            NamedColor::DarkGreen => DARK_GREEN,
            NamedColor::LightBlue => LIGHT_BLUE,
            NamedColor::Blue => BLUE,
            NamedColor::DarkBlue => DARK_BLUE,
            NamedColor::LightPurple => LIGHT_PURPLE,
            NamedColor::Purple => PURPLE,
            NamedColor::DarkPurple => DARK_PURPLE,
            NamedColor::LightBrown => LIGHT_BROWN,
            NamedColor::Brown => BROWN,
            NamedColor::DarkBrown => DARK_BROWN,
            NamedColor::White => WHITE,
            NamedColor::LightGrey => LIGHT_GREY,
            NamedColor::Grey => GREY,
            NamedColor::DarkGrey => DARK_GREY,
            NamedColor::LightCharcoal => LIGHT_CHARCOAL,
            NamedColor::Charcoal => CHARCOAL,
            NamedColor::DarkCharcoal => DARK_CHARCOAL,
            NamedColor::Black => BLACK,
        }
    }
}

impl From<NamedColor> for RgbaColor {
    fn from(it: NamedColor) -> Self { it.color() }
}
