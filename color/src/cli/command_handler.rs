// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum::IntoEnumIterator;

use super::CLICommand;
use crate::{CommonResult, HexDialect, RgbaColor, ok, palette::NamedColor};

/// Run a single [`CLICommand`], and return the text to print to stdout.
///
/// # Errors
///
/// Returns an error only for `parse --strict` when the text is not a valid hex color in
/// the chosen dialect. Every other command always succeeds.
#[tracing::instrument]
pub fn handle_command(command: CLICommand) -> CommonResult<String> {
    let output = match command {
        CLICommand::Parse {
            text,
            dialect,
            strict,
        } => handle_parse(&text, dialect, strict)?,
        CLICommand::Encode {
            red,
            green,
            blue,
            alpha,
        } => format_hex_and_alpha(RgbaColor::rgba(red, green, blue, alpha)),
        CLICommand::Encode255 { red, green, blue } => {
            RgbaColor::rgb255(red, green, blue).to_string()
        }
        CLICommand::Palette => format_palette(),
    };

    ok!(output)
}

fn handle_parse(text: &str, dialect: HexDialect, strict: bool) -> CommonResult<String> {
    let color = if strict {
        RgbaColor::try_from_hex_with_dialect(text, dialect)?
    } else {
        RgbaColor::from_hex_with_dialect(text, dialect)
    };
    ok!(format_components(color))
}

/// One `name: value` line per channel, preceded by the `#rrggbb` encoding.
#[must_use]
pub fn format_components(color: RgbaColor) -> String {
    let it = color.to_components();
    format!(
        "hex:   {color}\nred:   {}\ngreen: {}\nblue:  {}\nalpha: {}",
        it.red, it.green, it.blue, it.alpha
    )
}

#[must_use]
pub fn format_hex_and_alpha(color: RgbaColor) -> String {
    let it = color.to_hex_with_alpha();
    format!("hex:   #{}\nalpha: {}", it.hex, it.alpha)
}

/// One line per [`NamedColor`], eg: `dark_charcoal   #2e3436`.
#[must_use]
pub fn format_palette() -> String {
    NamedColor::iter()
        .map(|named| {
            let name: &'static str = named.into();
            format!("{name:<16}{}", named.color())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
