pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use client::ApiClient;

#[derive(Parser)]
#[command(name = "backoffice")]
#[command(about = "Back-office CLI - review vendor deactivation and reactivation requests")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "BACKOFFICE_URL",
        default_value = "http://localhost:5000",
        help = "Back-office API base URL"
    )]
    pub server: String,

    #[arg(
        long,
        global = true,
        env = "BACKOFFICE_TOKEN",
        hide_env_values = true,
        help = "Bearer token issued by the admin login service"
    )]
    pub token: Option<String>,

    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Vendor deactivation and reactivation requests")]
    Vendor {
        #[command(subcommand)]
        cmd: commands::vendor::VendorCommands,
    },

    #[command(about = "Check server health status from API /health endpoint")]
    Health,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = ApiClient::new(&cli.server, cli.token.clone())?;

    match cli.command {
        Commands::Vendor { cmd } => commands::vendor::handle(cmd, &client, output_format).await,
        Commands::Health => commands::health::handle(&client, output_format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "backoffice",
            "vendor",
            "approve-deactivation",
            "7",
            "--server",
            "http://backoffice.internal",
            "--token",
            "abc",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.server, "http://backoffice.internal");
        assert_eq!(cli.token.as_deref(), Some("abc"));
        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Commands::Vendor {
                cmd: commands::vendor::VendorCommands::ApproveDeactivation { id: 7 }
            }
        ));
    }

    #[test]
    fn text_is_the_default_output() {
        let cli = Cli::try_parse_from(["backoffice", "--server", "http://x", "health"]).unwrap();
        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Text));
    }
}
