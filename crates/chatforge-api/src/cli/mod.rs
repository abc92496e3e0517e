//! CLI command definitions and dispatch for the `chatforge` binary.
//!
//! Uses clap derive macros for argument parsing. The CLI follows a verb-noun
//! pattern (e.g., `chatforge create bot`, `chatforge list bots`).

pub mod bot;
pub mod embed;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Manage your chatbot fleet and serve the widget API.
#[derive(Parser)]
#[command(name = "chatforge", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new resource.
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// List resources.
    #[command(alias = "ls")]
    List {
        #[command(subcommand)]
        resource: ListResource,
    },

    /// Show details of a bot.
    Show {
        /// Bot id to display.
        id: String,
    },

    /// Delete a resource.
    #[command(alias = "rm")]
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },

    /// Print the embed snippet for a bot.
    Embed {
        /// Bot id.
        id: String,

        /// Widget corner (bottom-right, bottom-left, top-right, top-left).
        #[arg(long, default_value = "bottom-right")]
        position: String,

        /// Widget size (small, medium, large).
        #[arg(long, default_value = "medium")]
        size: String,
    },

    /// Start the REST API server.
    Serve {
        /// Port to listen on (defaults to config.toml, then 3000).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to config.toml, then 127.0.0.1).
        #[arg(long)]
        host: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum CreateResource {
    /// Create a new bot.
    Bot {
        /// Bot name (prompted if omitted).
        #[arg(long)]
        name: Option<String>,

        /// Owning account id (prompted if omitted).
        #[arg(long)]
        owner: Option<String>,

        /// Model provider API key (prompted securely if omitted).
        #[arg(long)]
        api_key: Option<String>,

        /// Welcome message shown by the widget.
        #[arg(long)]
        welcome: Option<String>,

        /// Persona description (tone, voice).
        #[arg(long)]
        persona: Option<String>,

        /// Language-model backend identifier.
        #[arg(long)]
        model: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ListResource {
    /// List all bots for an owner.
    Bots {
        /// Owning account id.
        #[arg(long)]
        owner: String,
    },
}

#[derive(Subcommand)]
pub enum DeleteResource {
    /// Delete a bot permanently.
    Bot {
        /// Bot id to delete.
        id: String,

        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },
}
