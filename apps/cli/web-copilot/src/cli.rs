//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ask questions about a web page using a chat-completion model.
#[derive(Debug, Parser)]
#[command(name = "web-copilot")]
#[command(author, version)]
#[command(about = "Ask questions about a web page using a chat-completion model")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  web-copilot set-key sk-...
  curl -s https://example.com | web-copilot ask --url https://example.com --title Example \"What is this page about?\"
  web-copilot config --init")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding copilot.toml, settings.json and the log file
    #[arg(long, global = true, env = "WEB_COPILOT_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask a question about a page
    Ask {
        /// Page URL
        #[arg(long)]
        url: String,

        /// Page title
        #[arg(long, default_value = "")]
        title: String,

        /// File holding the page's visible text; `-` reads stdin
        #[arg(long, default_value = "-")]
        page: String,

        /// Override the configured model
        #[arg(long)]
        model: Option<String>,

        /// Override the configured context bound
        #[arg(long)]
        max_context_chars: Option<usize>,

        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Store the API key in the settings file
    SetKey {
        /// The key; read from stdin when omitted
        key: Option<String>,
    },

    /// Print the effective configuration
    Config {
        /// Write the defaults to copilot.toml
        #[arg(long)]
        init: bool,
    },
}
