use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use atria::{cli, config};

#[derive(Parser)]
#[command(name = "atria", version, about = "Spatial social matching engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Embed a profile and place it in the lobby
    Add {
        /// Display name for the profile
        name: String,
        /// Path to a CV document (.txt or .json export)
        #[arg(long)]
        cv: Option<PathBuf>,
        /// Inline CV text (ignored if --cv is set)
        #[arg(long)]
        cv_text: Option<String>,
        /// Voice transcript used to seed trait derivation
        #[arg(long)]
        transcript: Option<String>,
        /// Voice identifier, used as trait seed when no transcript is given
        #[arg(long)]
        voice_id: Option<String>,
        /// Comma-separated interest tags
        #[arg(long, value_delimiter = ',')]
        interests: Vec<String>,
    },
    /// Rank stored profiles by distance to a named profile
    Neighbors {
        name: String,
        /// How many neighbors to return
        #[arg(short)]
        k: Option<usize>,
    },
    /// List rooms and their occupants
    Rooms,
    /// Print a profile's full embedding record as JSON
    Show { name: String },
    /// Batch-import demo profiles from a JSON file
    Seed { path: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = config::AtriaConfig::load()?;

    // Initialize tracing with the configured log level, to stderr so stdout
    // stays clean for command output.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Add {
            name,
            cv,
            cv_text,
            transcript,
            voice_id,
            interests,
        } => {
            cli::add::add(&config, &name, cv, cv_text, transcript, voice_id, interests)?;
        }
        Command::Neighbors { name, k } => {
            cli::neighbors::neighbors(&config, &name, k)?;
        }
        Command::Rooms => {
            cli::rooms::rooms(&config)?;
        }
        Command::Show { name } => {
            cli::show::show(&config, &name)?;
        }
        Command::Seed { path } => {
            cli::seed::seed(&config, &path)?;
        }
    }

    Ok(())
}
