mod commands;
mod config;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use real_world_validator::Lang;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rwv")]
#[command(
    version,
    about = "Validate and sanitize form input at a trust boundary",
    long_about = None
)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Language for built-in messages (fi, sv, en)
    #[arg(short, long, global = true)]
    lang: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON array of rules and print the outcomes
    Validate {
        /// Rules file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Exit with status 1 when any outcome is not ok
        #[arg(long)]
        fail_on_invalid: bool,

        /// Fill absent messages from the built-in tables
        #[arg(long)]
        localized: bool,
    },

    /// Sanitize text with the configured options
    Sanitize {
        /// Text to sanitize (reads stdin when omitted)
        text: Option<String>,

        /// Escape HTML instead of sanitizing
        #[arg(long)]
        html: bool,

        /// Override the maximum length (0 disables truncation)
        #[arg(long)]
        max_len: Option<usize>,
    },

    /// List registered field kinds and their failure codes
    Kinds,
}

/// Invalid outcomes only fail the process when asked to
fn fails_run(all_ok: bool, fail_on_invalid: bool) -> bool {
    fail_on_invalid && !all_ok
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let mut config = config::load(&cli.config)?;
    if let Some(code) = cli.lang.as_deref() {
        config.lang = code
            .parse::<Lang>()
            .with_context(|| format!("Invalid --lang value: {}", code))?;
    }

    // Execute command
    match cli.command {
        Commands::Validate {
            file,
            pretty,
            fail_on_invalid,
            localized,
        } => {
            if localized {
                config.localized_defaults = true;
            }
            let all_ok = commands::validate::execute(file.as_deref(), config, pretty)?;
            if fails_run(all_ok, fail_on_invalid) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Sanitize {
            text,
            html,
            max_len,
        } => {
            if let Some(max_len) = max_len {
                config.sanitize.max_len = max_len;
            }
            commands::sanitize::execute(text, html, &config)?;
        }
        Commands::Kinds => {
            commands::kinds::execute();
        }
    }

    Ok(ExitCode::SUCCESS)
}
