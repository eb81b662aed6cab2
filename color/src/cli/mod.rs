// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything the `rgba` binary needs, minus `main`. Commands return their output as a
//! [String], so they can be tested without spawning a process.

// Attach.
pub mod clap_config;
pub mod command_handler;

// Re-export.
pub use clap_config::*;
pub use command_handler::*;
