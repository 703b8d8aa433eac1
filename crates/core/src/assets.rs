//! Asset copy phase: refresh the documentation file in the build output

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::CoreError;

/// Fallback name for the copied file when the source path has none.
const README_NAME: &str = "README.md";

/// Copy the documentation file into the build directory.
///
/// A stale copy under the same name is removed first; every failure of
/// that removal is suppressed, whatever the cause. The copy itself is
/// unconditional: a missing source file or missing build directory
/// surfaces as [`CoreError::CopyFailed`].
pub fn copy_assets(readme: &Path, build_dir: &Path) -> crate::Result<()> {
    let name = readme.file_name().unwrap_or_else(|| OsStr::new(README_NAME));
    let dest = build_dir.join(name);

    if let Err(e) = fs::remove_file(&dest) {
        debug!(path = %dest.display(), error = %e, "stale copy not removed");
    }

    info!(from = %readme.display(), to = %dest.display(), "copying documentation file");

    fs::copy(readme, &dest).map_err(|e| CoreError::CopyFailed {
        from: readme.display().to_string(),
        to: dest.display().to_string(),
        source: e,
    })?;

    Ok(())
}
