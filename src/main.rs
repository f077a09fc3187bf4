use clap::Parser;

mod cli;
mod commands;
mod domain;
mod profile;
mod services;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Validate => commands::validate::handle_validate(),
        Commands::Deploy { token } => commands::deploy::handle_deploy(token),
    }
}
