// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// It is basically `miette::Result<T, miette::Report>`, and works hand in hand w/
/// [`crate::HexColorParseError`] and any other type of error.
///
/// # Example
///
/// ```
/// use rgba_color::{CommonResult, HexDialect, RgbaColor};
///
/// fn parse_strict(text: &str) -> CommonResult<RgbaColor> {
///     let it = RgbaColor::try_from_hex_with_dialect(text, HexDialect::Minimal)?;
///     Ok(it)
/// }
///
/// assert!(parse_strict("#ff0000").is_ok());
/// assert!(parse_strict("#f00").is_err());
/// ```
pub type CommonResult<T> = miette::Result<T>;
