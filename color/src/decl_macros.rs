// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq!`] macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Unwrap the `$value`, wrapping it in [Ok]. This is useful in functions that return
/// [`crate::CommonResult`].
///
/// ```
/// use rgba_color::{CommonResult, ok};
///
/// fn it_works() -> CommonResult<()> { ok!() }
/// fn it_also_works() -> CommonResult<u8> { ok!(42) }
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
