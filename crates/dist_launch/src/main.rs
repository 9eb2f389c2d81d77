//! dist-launch binary - resolve arguments, pick a launch mode, dispatch.

use anyhow::Result;
use clap::Parser;
use dist_launch::cli::Cli;
use dist_launch::command::LaunchPlan;
use dist_launch::mode::LaunchMode;
use dist_launch::params::LaunchParams;
use dist_launch::{entrypoint, launch};

fn main() -> Result<()> {
    // 1. Console logging (RUST_LOG overrides, INFO otherwise)
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // 2. Resolve everything before touching any process state
    let entry = entrypoint::resolve(&cli.file);
    let params = LaunchParams::from_env();
    let mode = LaunchMode::detect();
    tracing::info!(?mode, entrypoint = %entry, config = %cli.config, "Resolved launch target");

    let plan = LaunchPlan::build(mode, &params, &entry, &cli.config, &cli.gpus, &cli.extra);

    if cli.dry_run {
        println!("{}", plan.render());
        return Ok(());
    }

    // 3. Hand off and propagate the launcher's exit code
    std::process::exit(launch::run(&plan)?);
}
