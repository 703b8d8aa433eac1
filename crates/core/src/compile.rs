//! Compile phase: external TypeScript compiler invocation

use std::process::Command;

use console::style;
use tracing::{debug, info};

/// Default compiler program, resolved through PATH.
pub const DEFAULT_COMPILER: &str = "tsc";

/// Run the external TypeScript compiler.
///
/// The compiler is invoked with no arguments in the current working
/// directory and reads its own `tsconfig.json` for inputs and outputs;
/// stdio is inherited so its diagnostics reach the user directly.
///
/// The exit status is recorded but never propagated, and a compiler that
/// cannot be spawned at all is treated the same way. The asset copy phase
/// is the one that surfaces a build directory the compiler failed to
/// produce.
pub fn run_compiler(program: &str) {
    println!("{}\n", style("Creating an optimised production build").bold());

    info!(compiler = %program, "invoking compiler");

    match Command::new(program).status() {
        Ok(status) if status.success() => {
            debug!(compiler = %program, "compiler finished");
        }
        Ok(status) => {
            debug!(compiler = %program, code = ?status.code(), "compiler exited non-zero");
        }
        Err(e) => {
            debug!(compiler = %program, error = %e, "compiler could not be spawned");
        }
    }
}
