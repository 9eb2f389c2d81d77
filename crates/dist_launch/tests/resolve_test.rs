//! End-to-end resolution: CLI input through to the assembled launch plan.

use dist_launch::{entrypoint, LaunchMode, LaunchParams, LaunchPlan};

/// `(file="train", config="cfg.yaml", gpus=4)` with no environment
/// overrides: tools/train.py, single node, rank 0, loopback master, a port
/// in [18500, 20500), and the default strategy identifier.
#[test]
fn test_default_resolution_example() {
    let entry = entrypoint::resolve("train");
    assert_eq!(entry, "tools/train.py");

    let params = LaunchParams::from_lookup(|_| None);
    assert_eq!(params.nnodes, "1");
    assert_eq!(params.node_rank, "0");
    assert_eq!(params.master_addr, "127.0.0.1");
    assert_eq!(params.deepspeed, "deepspeed_zero2");
    let port: u16 = params.port.parse().unwrap();
    assert!((18500..20500).contains(&port));

    let plan = LaunchPlan::build(LaunchMode::Torchrun, &params, &entry, "cfg.yaml", "4", &[]);
    assert_eq!(plan.program, "torchrun");
    assert_eq!(plan.args[0], "--nnodes=1");
    assert_eq!(plan.args[1], "--node_rank=0");
    assert_eq!(plan.args[2], "--master_addr=127.0.0.1");
    assert_eq!(plan.args[3], format!("--master_port={}", params.port));
    assert_eq!(plan.args[4], "--nproc_per_node=4");
    assert_eq!(plan.args[5], "tools/train.py");
    assert_eq!(plan.args[6], "cfg.yaml");
    assert_eq!(plan.args[7..9], ["--launcher", "pytorch"]);
    assert_eq!(plan.args[9..11], ["--deepspeed", "deepspeed_zero2"]);
}

/// Both modes carry an equivalent argument set; legacy mode only prefixes
/// the module invocation.
#[test]
fn test_modes_share_the_argument_set() {
    let params = LaunchParams::from_lookup(|key| match key {
        "PORT" => Some("19999".to_string()),
        _ => None,
    });
    let extra = vec!["--seed".to_string(), "42".to_string()];

    let torchrun = LaunchPlan::build(
        LaunchMode::Torchrun,
        &params,
        "tools/test.py",
        "cfg.py",
        "2",
        &extra,
    );
    let legacy = LaunchPlan::build(
        LaunchMode::LegacyLaunch,
        &params,
        "tools/test.py",
        "cfg.py",
        "2",
        &extra,
    );

    assert_eq!(legacy.args[..2], ["-m", "torch.distributed.launch"]);
    assert_eq!(torchrun.args[..], legacy.args[2..]);
}

/// Cluster-style overrides flow through to the argv verbatim.
#[test]
fn test_multi_node_overrides() {
    let params = LaunchParams::from_lookup(|key| match key {
        "NNODES" => Some("4".to_string()),
        "NODE_RANK" => Some("3".to_string()),
        "MASTER_ADDR" => Some("node-0.cluster.local".to_string()),
        "PORT" => Some("29500".to_string()),
        "DEEPSPEED" => Some("deepspeed_zero3".to_string()),
        _ => None,
    });

    let plan = LaunchPlan::build(
        LaunchMode::Torchrun,
        &params,
        &entrypoint::resolve("projects/demo/train.py"),
        "cfg.yaml",
        "8",
        &[],
    );
    assert_eq!(plan.args[0], "--nnodes=4");
    assert_eq!(plan.args[1], "--node_rank=3");
    assert_eq!(plan.args[2], "--master_addr=node-0.cluster.local");
    assert_eq!(plan.args[3], "--master_port=29500");
    assert_eq!(plan.args[4], "--nproc_per_node=8");
    assert_eq!(plan.args[5], "projects/demo/train.py");
    assert!(plan.args.contains(&"deepspeed_zero3".to_string()));
}
