// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallstr::SmallString;

/// Number of characters in an encoded `rrggbb` string (no `#` marker).
pub const HEX_STRING_LEN: usize = 6;

/// Stack allocated storage for an encoded hex color. It has room for the `#` marker and
/// the alpha pair (`#rrggbbaa`), so callers can push onto it without spilling to the
/// heap.
pub type HexString = SmallString<[u8; HEX_STRING_STORAGE_SIZE]>;

pub const HEX_STRING_STORAGE_SIZE: usize = 9;
