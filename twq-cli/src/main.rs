//! TWQ CLI - Command line tool for Texas coastal water-quality payloads.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "twq-cli",
    version,
    about = "Texas coastal water quality monitoring toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: twq_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    twq_cmd::run(cli.command)
}
