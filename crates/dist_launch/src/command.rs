//! Command assembly - argv and child environment for either launch mode.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::mode::{LaunchMode, LEGACY_LAUNCH_MODULE, PYTHON, TORCHRUN};
use crate::params::LaunchParams;

/// Fixed launcher backend flag handed to the entrypoint.
pub const LAUNCHER_BACKEND: &str = "pytorch";

/// Everything needed to start the external launcher. Assembled up front so
/// it can be logged, rendered by `--dry-run`, and asserted on in tests
/// before anything is spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: String,
    pub args: Vec<String>,
    /// Environment overrides for the child process tree only.
    pub env: Vec<(String, String)>,
}

impl LaunchPlan {
    /// Assemble the argument vector both modes share: topology flags, the
    /// per-node process count, the resolved entrypoint and config, the
    /// fixed backend flag, the strategy flag, then pass-through args.
    pub fn build(
        mode: LaunchMode,
        params: &LaunchParams,
        entrypoint: &str,
        config: &str,
        gpus: &str,
        extra: &[String],
    ) -> Self {
        let (program, mut args) = match mode {
            LaunchMode::Torchrun => (TORCHRUN.to_string(), Vec::new()),
            LaunchMode::LegacyLaunch => (
                PYTHON.to_string(),
                vec!["-m".to_string(), LEGACY_LAUNCH_MODULE.to_string()],
            ),
        };

        args.push(format!("--nnodes={}", params.nnodes));
        args.push(format!("--node_rank={}", params.node_rank));
        args.push(format!("--master_addr={}", params.master_addr));
        args.push(format!("--master_port={}", params.port));
        args.push(format!("--nproc_per_node={}", gpus));
        args.push(entrypoint.to_string());
        args.push(config.to_string());
        args.push("--launcher".to_string());
        args.push(LAUNCHER_BACKEND.to_string());
        args.push("--deepspeed".to_string());
        args.push(params.deepspeed.clone());
        args.extend(extra.iter().cloned());

        Self {
            program,
            args,
            env: child_env(),
        }
    }

    /// Single-line rendering for logs and `--dry-run`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.env {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push(' ');
        }
        out.push_str(&self.program);
        for arg in &self.args {
            out.push(' ');
            out.push_str(arg);
        }
        out
    }
}

/// Child-only environment: pin the math-library thread pools to one thread
/// per worker (many GPU-bound processes share the host) and extend
/// PYTHONPATH so the entrypoint can import sibling packages next to this
/// launcher.
fn child_env() -> Vec<(String, String)> {
    let root = launcher_root().unwrap_or_else(|| PathBuf::from("."));
    vec![
        ("OMP_NUM_THREADS".to_string(), "1".to_string()),
        ("MKL_NUM_THREADS".to_string(), "1".to_string()),
        (
            "PYTHONPATH".to_string(),
            extend_python_path(&root, env::var_os("PYTHONPATH").as_deref()),
        ),
    ]
}

/// Prepend `root` to an existing PYTHONPATH value, keeping the old entries.
fn extend_python_path(root: &Path, existing: Option<&OsStr>) -> String {
    let mut entries = vec![root.to_path_buf()];
    if let Some(existing) = existing {
        entries.extend(env::split_paths(existing));
    }
    match env::join_paths(entries) {
        Ok(joined) => joined.to_string_lossy().into_owned(),
        // join_paths refuses entries containing the separator; keep at
        // least our own entry in that case.
        Err(_) => root.display().to_string(),
    }
}

/// Directory two levels above the launcher binary (the bin dir's parent),
/// where sibling packages live relative to this tool. Falls back to the
/// invocation directory when the executable path cannot be determined.
fn launcher_root() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    Some(exe.parent()?.parent()?.to_path_buf())
}
