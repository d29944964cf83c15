mod commands;
mod http;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use photogallery_core::config::{GalleryConfig, DEFAULT_BASE};
use photogallery_core::domain::Layout;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or does not parse.
const DEFAULT_LOG_FILTER: &str = "photogallery_core=info";

/// Photo gallery: browse an images.json manifest from the terminal
#[derive(Parser)]
#[command(name = "gallery", version, about)]
struct Cli {
    /// Directory or http(s) URL holding images.json and the images
    #[arg(long, env = "GALLERY_BASE", default_value = DEFAULT_BASE)]
    base: String,

    /// Read an event-grouped manifest (`{"events": [...]}`)
    #[arg(long, env = "GALLERY_EVENTS")]
    events: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the tag filter bar
    Tags {
        /// Event index (event galleries only)
        #[arg(long)]
        event: Option<usize>,
    },
    /// List the visible images, optionally filtered by tags
    Ls {
        /// Keep images carrying any of these tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Event index (event galleries only)
        #[arg(long)]
        event: Option<usize>,
        /// Print the grid as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the events of an event gallery
    Events {
        /// Print the event cards as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one image in the lightbox
    Show {
        /// Position in the visible images (0-based)
        index: usize,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        event: Option<usize>,
    },
    /// Interactive session: one command per line on stdin
    Browse {
        /// Start inside this event
        #[arg(long)]
        event: Option<usize>,
    },
}

fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let cli = Cli::parse();
    let layout = if cli.events { Layout::Events } else { Layout::Flat };
    let config = GalleryConfig::new(cli.base, layout);
    let mut gallery = commands::load_gallery(&config);

    match cli.command {
        Commands::Tags { event } => commands::tags::run(&mut gallery, event)?,
        Commands::Ls { tags, event, json } => commands::ls::run(&mut gallery, &tags, event, json)?,
        Commands::Events { json } => commands::events::run(&gallery, json)?,
        Commands::Show { index, tags, event } => {
            commands::show::run(&mut gallery, index, &tags, event)?
        }
        Commands::Browse { event } => commands::browse::run(gallery, event)?,
    }

    Ok(())
}
