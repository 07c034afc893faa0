mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventdesk_core::EventId;
use eventdesk_core::config::EventDeskConfig;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::FieldArgs;

#[derive(Parser)]
#[command(name = "eventdesk")]
#[command(about = "Browse and edit events stored in a remote JSON collection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events as a sortable grid
    List {
        /// Sort keys, first wins (e.g. "company:asc,name:desc")
        #[arg(short, long, value_delimiter = ',')]
        sort: Vec<String>,

        /// Columns to show, in order (e.g. "name,company,email")
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Move a column from one position to another, 1-based (e.g. "3:1");
        /// repeatable
        #[arg(short, long = "move-column", value_name = "FROM:TO")]
        move_column: Vec<String>,
    },
    /// Show every field of one event
    Show { id: EventId },
    /// Add a new event (prompts for missing required fields)
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Change fields of an existing event
    Edit {
        id: EventId,

        #[command(flatten)]
        fields: FieldArgs,

        /// Mark the event active or inactive
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete an event
    Delete {
        id: EventId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the config file location and effective settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let config = EventDeskConfig::load()?;

    match cli.command {
        Commands::List {
            sort,
            columns,
            move_column,
        } => commands::list::run(&config, &sort, &columns, &move_column).await,
        Commands::Show { id } => commands::show::run(&config, id).await,
        Commands::Add { fields } => commands::add::run(&config, fields).await,
        Commands::Edit { id, fields, active } => {
            commands::edit::run(&config, id, fields, active).await
        }
        Commands::Delete { id, yes } => commands::delete::run(&config, id, yes).await,
        Commands::Config => commands::config::run(&config),
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warnings and errors only).
fn init_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {e}"))?;

    Ok(())
}
