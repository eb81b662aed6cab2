// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand};

use crate::HexDialect;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "rgba")]
#[command(about = "🎨 Convert colors between hex strings and RGBA components")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log debug output to stderr, eg: when a hex string falls back to transparent black"
    )]
    pub enable_logging: bool,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    /// Parse a hex color, eg: `#f80`, `ff8800cc`, and print its components.
    Parse {
        /// The hex color text. Quote it, since `#` starts a comment in most shells.
        text: String,

        #[arg(
            long,
            short = 'd',
            default_value_t = HexDialect::Extended,
            help = "Which grammar to accept: `extended` (3, 4, 6, 8 digits) or `minimal` (6 digits)"
        )]
        dialect: HexDialect,

        #[arg(
            long,
            short = 's',
            help = "Exit with an error instead of printing the transparent black fallback"
        )]
        strict: bool,
    },

    /// Encode normalized float channels into `#rrggbb`.
    Encode {
        #[arg(allow_negative_numbers = true)]
        red: f64,
        #[arg(allow_negative_numbers = true)]
        green: f64,
        #[arg(allow_negative_numbers = true)]
        blue: f64,
        #[arg(allow_negative_numbers = true, default_value_t = 1.0)]
        alpha: f64,
    },

    /// Encode 8-bit integer channels into `#rrggbb`.
    Encode255 {
        #[arg(allow_negative_numbers = true)]
        red: i32,
        #[arg(allow_negative_numbers = true)]
        green: i32,
        #[arg(allow_negative_numbers = true)]
        blue: i32,
    },

    /// List every named color in the palette.
    Palette,
}
