use clap::Parser;

/// Command-line surface: three positionals plus verbatim pass-through.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Distributed training launch shim", long_about = None)]
pub struct Cli {
    /// Entrypoint: a bare name resolved under tools/, or a .py path used as-is
    pub file: String,

    /// Training configuration file, forwarded verbatim to the entrypoint
    pub config: String,

    /// Processes to start per node (one per GPU), forwarded verbatim
    pub gpus: String,

    /// Print the resolved command line instead of executing it
    #[arg(long, action)]
    pub dry_run: bool,

    /// Extra arguments appended verbatim after the launcher's own flags
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}
