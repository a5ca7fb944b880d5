//! notekeeper: command-line front end for a notekeeper server.
//!
//! Each invocation loads the note list, applies one action through the
//! note manager, and prints the rendered page.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use notekeeper_client::{HttpNotesApi, NoteManager};
use notekeeper_core::defaults::API_BASE_URL;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "notekeeper")]
#[command(author, version, about = "Create, list, view, and delete notes")]
#[command(propagate_version = true)]
struct Cli {
    /// Base URL of the notekeeper server
    #[arg(long, env = "NOTEKEEPER_URL", default_value = API_BASE_URL, global = true)]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List saved notes
    List,

    /// Show one note read-only
    Show {
        /// Note id
        id: String,
    },

    /// Save a new note
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short = 'x', long)]
        text: String,
    },

    /// Delete a note by id
    Delete {
        /// Note id
        id: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api = match HttpNotesApi::new(&cli.url) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut manager = NoteManager::new(api);

    let ok = match cli.command {
        Commands::List => manager.load().await,
        Commands::Show { id } => {
            if !manager.load().await {
                false
            } else if manager.view_note(&id) {
                true
            } else {
                eprintln!("Error: no note with id {}", id);
                false
            }
        }
        Commands::Add { title, text } => {
            manager.type_title(title);
            manager.type_text(text);
            if manager.page().show_save {
                manager.save().await
            } else {
                eprintln!("Error: a note needs both a title and text");
                false
            }
        }
        Commands::Delete { id } => manager.delete(&id).await,
    };

    print!("{}", manager.page());

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
