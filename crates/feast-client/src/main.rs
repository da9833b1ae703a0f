/*!
 * Gorilla Feast Client
 *
 * 1. Watch failed logins as they happen over the WebSocket stream
 * 2. Log in with account id and password to obtain a session token
 *
 * Usage:
 *   cargo run -p feast-client -- watch
 *   cargo run -p feast-client -- login --acct alice --pwd password1
 */

mod commands;
mod types;

use anyhow::Result;
use clap::{Parser, Subcommand};

// CLI structure
#[derive(Parser)]
#[command(name = "feast-client")]
#[command(about = "Client for the gorilla-feast account service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Server base URL (http:// or https://)
    #[arg(short, long, global = true, default_value = "http://127.0.0.1:8080")]
    server: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print failed logins as they are reported; Ctrl-C to stop
    Watch,
    /// Log in and print the session token
    Login {
        /// Account id
        #[arg(short, long)]
        acct: String,

        /// Password
        #[arg(short, long)]
        pwd: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Watch => commands::watch::watch(&cli.server).await?,

        Commands::Login { acct, pwd } => commands::login::login(&cli.server, &acct, &pwd).await?,
    }

    Ok(())
}
