//! CLI frontend for Crawl room maps.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use crawl_map::RenderConfig;
use crawl_play::SessionConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "crawl",
    about = "Crawl - explore, map and check text adventure worlds",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a world file and report what is in it
    Check {
        /// World file to load
        file: PathBuf,
    },

    /// List rooms with their coordinates, exits and contents
    Rooms {
        /// World file to load
        file: PathBuf,
    },

    /// Draw the world as an ASCII grid
    Map {
        /// World file to load
        file: PathBuf,

        /// Print the inferred layout as JSON instead
        #[arg(long)]
        json: bool,

        /// Characters per grid column
        #[arg(long, default_value = "6")]
        cell_width: usize,

        /// Lines per grid row
        #[arg(long, default_value = "2")]
        cell_height: usize,
    },

    /// Play a world, reading commands from stdin
    Play {
        /// World file to load
        file: PathBuf,

        /// Name of the explorer created when the world has no player
        #[arg(long, default_value = "explorer")]
        name: String,

        /// Describe the room after every move
        #[arg(long)]
        echo: bool,
    },

    /// Write a small sample world
    Demo {
        /// Destination file
        file: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "crawl=debug" } else { "crawl=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check { file } => commands::check::run(&file),
        Commands::Rooms { file } => commands::rooms::run(&file),
        Commands::Map {
            file,
            json,
            cell_width,
            cell_height,
        } => {
            let config = RenderConfig::default()
                .with_cell_width(cell_width)
                .with_cell_height(cell_height);
            commands::map::run(&file, json, &config)
        }
        Commands::Play { file, name, echo } => {
            let config = SessionConfig::new()
                .with_fallback_player(&name, "an intrepid explorer")
                .with_echo_room(echo);
            commands::play::run(&file, config)
        }
        Commands::Demo { file, force } => commands::demo::run(&file, force),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
