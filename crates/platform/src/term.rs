//! Terminal screen clearing via the platform-native command

use std::process::Command;

use tracing::debug;

use crate::platform::Os;

/// Returns the terminal-clear program and arguments for the given OS.
///
/// Windows clears through the shell builtin (`cmd /C cls`); everything
/// else uses the standalone `clear` command.
pub fn clear_command(os: Os) -> (&'static str, &'static [&'static str]) {
    if os.is_windows() {
        ("cmd", &["/C", "cls"])
    } else {
        ("clear", &[])
    }
}

/// Clear the terminal screen, blocking until the command exits.
///
/// Purely cosmetic: a non-zero exit status is ignored, as is a failure to
/// spawn the command at all.
pub fn clear_screen() {
    let (program, args) = clear_command(Os::current());

    match Command::new(program).args(args).status() {
        Ok(status) if !status.success() => {
            debug!(program = %program, code = ?status.code(), "screen clear exited non-zero");
        }
        Ok(_) => {}
        Err(e) => {
            debug!(program = %program, error = %e, "screen clear could not be spawned");
        }
    }
}
