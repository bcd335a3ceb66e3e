// Copyright 2026 Contour Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use contour::cli;
use contour::config::Config;

#[derive(Parser)]
#[command(
    name = "contour",
    about = "Contour — Markdown outlines of Wikipedia country pages",
    version,
    after_help = "Run 'contour <command> --help' for details on each command.\nRun 'contour' with no command to start the HTTP server."
)]
struct Cli {
    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP outline server
    Serve {
        /// Port to listen on (loopback only)
        #[arg(long)]
        port: Option<u16>,
        /// Base URL the country name is appended to
        #[arg(long)]
        base_url: Option<String>,
        /// Outbound request timeout in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Print the Markdown outline for one country
    Outline {
        /// Country name, used as the page title
        country: String,
        /// Base URL the country name is appended to
        #[arg(long)]
        base_url: Option<String>,
        /// Outbound request timeout in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        // No subcommand → serve with resolved defaults
        None => cli::serve::run(Config::resolve(None, None, None), cli.verbose).await,

        Some(Commands::Serve {
            port,
            base_url,
            timeout_ms,
        }) => cli::serve::run(Config::resolve(port, base_url, timeout_ms), cli.verbose).await,

        Some(Commands::Outline {
            country,
            base_url,
            timeout_ms,
        }) => cli::outline_cmd::run(&country, Config::resolve(None, base_url, timeout_ms)).await,

        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "contour", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        eprintln!("  Error: {e:#}");
        std::process::exit(1);
    }

    result
}
