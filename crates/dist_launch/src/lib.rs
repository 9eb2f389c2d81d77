//! dist_launch - resolve-and-dispatch shim for distributed training jobs.
//!
//! Resolves a training entrypoint from a bare name or `.py` path, applies
//! environment defaults for the node topology, picks between `torchrun` and
//! the legacy `python -m torch.distributed.launch` module, and hands off to
//! whichever is available. All coordination, rendezvous and failure handling
//! belong to the external launcher, not to this crate.

pub mod cli;
pub mod command;
pub mod entrypoint;
pub mod launch;
pub mod mode;
pub mod params;

pub use cli::Cli;
pub use command::LaunchPlan;
pub use mode::LaunchMode;
pub use params::LaunchParams;
