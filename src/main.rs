//! kokkai-mcp binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kokkai_mcp::cli::{Cli, execute};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise verbosity flags decide
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    // stdout is reserved for MCP protocol messages
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = execute(&cli)?;
    if !output.is_empty() {
        #[allow(clippy::print_stdout)]
        {
            println!("{output}");
        }
    }
    Ok(())
}
