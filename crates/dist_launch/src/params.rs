//! Launch parameters - node topology and strategy from the environment.

use rand::Rng;

pub const DEFAULT_NNODES: &str = "1";
pub const DEFAULT_NODE_RANK: &str = "0";
pub const DEFAULT_MASTER_ADDR: &str = "127.0.0.1";
pub const DEFAULT_DEEPSPEED: &str = "deepspeed_zero2";

/// Default port range, half-open. One draw per process.
pub const PORT_RANGE: std::ops::Range<u16> = 18500..20500;

/// Node topology and strategy for one launch, read once per invocation.
///
/// Values stay strings and are forwarded verbatim: a malformed override
/// (say `NNODES=two`) is the external launcher's diagnostic to produce,
/// not ours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchParams {
    pub nnodes: String,
    pub node_rank: String,
    pub master_addr: String,
    pub port: String,
    pub deepspeed: String,
}

impl LaunchParams {
    /// Read parameters from the process environment, defaulting the rest.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same defaulting over an injected lookup, so tests never have to
    /// mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            nnodes: lookup("NNODES").unwrap_or_else(|| DEFAULT_NNODES.to_string()),
            node_rank: lookup("NODE_RANK").unwrap_or_else(|| DEFAULT_NODE_RANK.to_string()),
            master_addr: lookup("MASTER_ADDR").unwrap_or_else(|| DEFAULT_MASTER_ADDR.to_string()),
            port: lookup("PORT").unwrap_or_else(|| random_port().to_string()),
            deepspeed: lookup("DEEPSPEED").unwrap_or_else(|| DEFAULT_DEEPSPEED.to_string()),
        }
    }
}

/// Pseudo-random port from [`PORT_RANGE`]. Collision avoidance between
/// independent launches sharing a host is probabilistic, not guaranteed.
fn random_port() -> u16 {
    rand::thread_rng().gen_range(PORT_RANGE)
}
