//! tsbuild-core: Build phases for tsbuild
//!
//! This crate provides the two phases of the build sequence:
//! - Compile: invoke the external TypeScript compiler
//! - Asset copy: refresh the documentation file in the build output
//!
//! plus the progress ticker that accompanies a blocking phase.

mod assets;
mod compile;
mod error;
mod progress;

pub use assets::copy_assets;
pub use compile::{DEFAULT_COMPILER, run_compiler};
pub use error::CoreError;
pub use progress::Ticker;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
