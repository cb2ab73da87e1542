//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, Context};
use taskboard::config::GlobalConfig;
use taskboard::output::OutputMode;

/// taskboard - A three-column task board
#[derive(Parser, Debug)]
#[command(
    name = "taskboard",
    version,
    about = "A three-column task board",
    long_about = "Track tasks across three columns: todo, in progress and archived.\n\n\
                  Tasks are saved as a single JSON array after every change.\n\
                  Run 'taskboard ui' for the drag-and-drop board in a browser."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding tasks.json (overrides the config file)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the board
    Board,

    /// Add a task
    Add {
        /// Task name
        name: String,

        /// Task description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Starting column: todo, in-progress, archived
        #[arg(short, long, default_value = "todo")]
        status: String,
    },

    /// Move a task to another column
    Move {
        /// Task ID
        id: String,

        /// Target column: todo, in-progress, archived
        status: String,
    },

    /// Edit a task's name and/or description
    Edit {
        /// Task ID
        id: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New description (may be empty)
        #[arg(short, long)]
        description: Option<String>,

        /// Prompt for both fields
        #[arg(short, long, conflicts_with_all = ["name", "description"])]
        interactive: bool,
    },

    /// Remove a task
    Remove {
        /// Task ID
        id: String,
    },

    /// Serve the drag-and-drop board in a browser
    #[cfg(feature = "ui")]
    Ui {
        /// Port to listen on (default from config, else 7420)
        #[arg(short, long)]
        port: Option<u16>,

        /// Open a browser once the server is up
        #[arg(long)]
        open: bool,

        /// Keep tasks in memory only, starting from the stored list
        #[arg(long)]
        ephemeral: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = GlobalConfig::load();
    let ctx = Context {
        mode,
        data_dir: config.data_dir(cli.data_dir.as_deref()),
        config,
    };

    match cli.command {
        Some(Command::Board) => commands::board(&ctx),
        Some(Command::Add {
            name,
            description,
            status,
        }) => commands::add(&ctx, &name, &description, &status),
        Some(Command::Move { id, status }) => commands::move_task(&ctx, &id, &status),
        Some(Command::Edit {
            id,
            name,
            description,
            interactive,
        }) => commands::edit(&ctx, &id, name, description, interactive),
        Some(Command::Remove { id }) => commands::remove(&ctx, &id),
        #[cfg(feature = "ui")]
        Some(Command::Ui {
            port,
            open,
            ephemeral,
        }) => commands::ui(&ctx, port, open, ephemeral),
        Some(Command::Version) => {
            if mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "version": taskboard::VERSION }));
            } else {
                println!("taskboard v{}", taskboard::VERSION);
            }
            Ok(())
        },
        None => commands::board(&ctx),
    }
}
