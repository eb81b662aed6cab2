// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The library itself only emits [tracing] events. Binaries call
//! [`try_initialize_logging_global`] to actually see them.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_target(false)
    };
}

/// This erases the concrete type of the writer, and returns a boxed layer that writes to
/// stderr, so that it does not get mixed up w/ the output of the `rgba` binary.
#[must_use]
pub fn create_stderr_layer(level_filter: LevelFilter) -> Box<DynLayer<Registry>> {
    Box::new(
        create_fmt!()
            .with_writer(std::io::stderr)
            .with_filter(level_filter),
    )
}

/// Install a global subscriber that writes events at `level_filter` or above to stderr.
/// [`LevelFilter::OFF`] is a no-op.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn try_initialize_logging_global(level_filter: LevelFilter) -> miette::Result<()> {
    if level_filter == LevelFilter::OFF {
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(create_stderr_layer(level_filter))
        .try_init()
        .into_diagnostic()?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "📝 Logging initialized", level_filter = %level_filter);

    Ok(())
}
