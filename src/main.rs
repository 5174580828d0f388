//! tokensmith - edit design tokens and export design-system artifacts
//!
//! The CLI drives the token store: reading and writing individual token
//! values, resetting to defaults, validating the persisted file, and
//! exporting the Markdown, CSS, or Tailwind artifact.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use tokensmith::clipboard::{ClipboardBackend, SystemClipboard};
use tokensmith::config::{self, TokenLoader, TOKEN_PATHS};
use tokensmith::export::{self, ExportDelivery};
use tokensmith::store::TokenStore;

/// tokensmith - edit design tokens and export design-system artifacts
#[derive(Parser, Debug)]
#[command(name = "tokensmith")]
#[command(about = "Edit design tokens and export design-system artifacts", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Get a token value, or the full configuration as JSON
    Get {
        /// Token path (e.g., "colors.primary.400", "ui.spacing")
        path: Option<String>,
    },
    /// Set a token value
    Set {
        /// Token path (e.g., "colors.primary.400", "ui.spacing")
        path: String,
        /// New value
        value: String,
    },
    /// List every editable token path with its current value
    Paths,
    /// Restore the default configuration
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Export a design-system artifact
    Export {
        /// Artifact format
        #[arg(long, value_enum, default_value_t = ExportFormat::Markdown)]
        format: ExportFormat,
        /// Do not copy the Markdown document to the clipboard
        #[arg(long)]
        no_copy: bool,
    },
    /// Show the token file path
    Path,
    /// Validate the token file
    Validate,
}

/// Export artifact formats
#[derive(ValueEnum, Clone, Copy, Debug)]
enum ExportFormat {
    Markdown,
    Css,
    Tailwind,
}

/// Initialize logging based on debug flag
///
/// Logs go to stderr so command output on stdout stays clean.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug);
    if args.debug {
        tracing::debug!("Debug logging enabled");
    }

    handle_command(args.command)
}

/// Handle a CLI command
fn handle_command(cmd: Command) -> Result<()> {
    match cmd {
        Command::Get { path } => {
            let store = TokenStore::load();
            let config = store.current();

            if let Some(path) = path {
                let value = config::get_token_value(&config, &path)?;
                println!("{}", value);
            } else {
                let json = serde_json::to_string_pretty(&config)
                    .context("Failed to serialize configuration")?;
                println!("{}", json);
            }
        }
        Command::Set { path, value } => {
            let store = TokenStore::load();
            store
                .set(&path, &value)
                .with_context(|| format!("Failed to set {} = {}", path, value))?;
            println!("Configuration saved");
        }
        Command::Paths => {
            let store = TokenStore::load();
            let config = store.current();
            for path in TOKEN_PATHS {
                let value = config::get_token_value(&config, path)?;
                println!("{} = {}", path, value);
            }
        }
        Command::Reset { yes } => {
            if !yes && !confirm_reset()? {
                println!("Aborted");
                return Ok(());
            }
            let store = TokenStore::load();
            store.reset();
            println!("Tokens reset to defaults");
        }
        Command::Export { format, no_copy } => {
            let store = TokenStore::load();
            let config = store.current();

            match format {
                ExportFormat::Css => println!("{}", export::css::render(&config)),
                ExportFormat::Tailwind => println!("{}", export::tailwind::render(&config)),
                ExportFormat::Markdown => {
                    let clipboard = SystemClipboard;
                    // The document carries its own trailing newline
                    if no_copy || !clipboard.is_available() {
                        if !no_copy {
                            tracing::warn!(
                                "No clipboard tool found (tried wl-copy, xclip, pbcopy)"
                            );
                        }
                        print!("{}", export::markdown::render(&config, chrono::Utc::now()));
                    } else {
                        let mut delivery = ExportDelivery::new(clipboard);
                        let document = delivery.deliver_markdown(&config);
                        print!("{}", document);
                        if delivery.indicator.is_copied() {
                            eprintln!("Copied to clipboard");
                        }
                    }
                }
            }
        }
        Command::Path => {
            println!("{}", config::paths::tokens_file_path().display());
        }
        Command::Validate => {
            let path = config::paths::tokens_file_path();
            match TokenLoader::validate(&path) {
                Ok(warnings) => {
                    println!("Configuration is valid");
                    for warning in warnings {
                        println!("  warning: {}", warning);
                    }
                }
                Err(e) => {
                    eprintln!("Configuration validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Prompt for reset confirmation on stdin
fn confirm_reset() -> Result<bool> {
    print!("Reset all design tokens to defaults? [y/N] ");
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
