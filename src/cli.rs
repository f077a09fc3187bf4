use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Portfolio site validation and GitHub Pages deployment"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the profile record, referenced files, and workflow presence
    Validate,
    /// Publish the working tree to the owner's GitHub Pages repository
    Deploy {
        #[arg(long, help = "GitHub access token (overrides GITHUB_TOKEN)")]
        token: Option<String>,
    },
}
