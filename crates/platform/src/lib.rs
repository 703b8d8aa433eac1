//! Platform detection and terminal abstractions for tsbuild
//!
//! This crate provides cross-platform abstractions for:
//! - OS detection
//! - The platform-native terminal-clear invocation

mod platform;
mod term;

pub use platform::Os;
pub use term::{clear_command, clear_screen};
