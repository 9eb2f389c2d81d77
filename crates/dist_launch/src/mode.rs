//! Launch mode selection.
//!
//! `torchrun` is preferred when present on the search path; otherwise the
//! distributed launcher is invoked as a library module through `python`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub const TORCHRUN: &str = "torchrun";
pub const PYTHON: &str = "python";
pub const LEGACY_LAUNCH_MODULE: &str = "torch.distributed.launch";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// `torchrun` found on the search path.
    Torchrun,
    /// Fallback: `python -m torch.distributed.launch`.
    LegacyLaunch,
}

impl LaunchMode {
    /// Pick the mode from the current process PATH.
    pub fn detect() -> Self {
        Self::from_search_path(std::env::var_os("PATH").as_deref())
    }

    /// Deterministic given the PATH contents passed in.
    pub fn from_search_path(path: Option<&OsStr>) -> Self {
        if find_executable(TORCHRUN, path).is_some() {
            LaunchMode::Torchrun
        } else {
            LaunchMode::LegacyLaunch
        }
    }
}

/// Scan a PATH-style value for an executable with the given name.
fn find_executable(name: &str, path: Option<&OsStr>) -> Option<PathBuf> {
    let path = path?;
    std::env::split_paths(path)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
