use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Classify { .. } | Commands::Gates { .. } | Commands::Lens { .. } => {
            commands::handle_admin_commands(&cli)
        }
        _ => {
            let config = services::config::load_config()?;
            commands::handle_runtime_commands(&cli, &config)
        }
    }
}
