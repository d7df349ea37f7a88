use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jiosaavn_api::{Config, JioSaavnClient, Payload, ResponseMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jiosaavn", version, about = "JioSaavn metadata CLI")]
struct Cli {
    /// Response mode: `json` (normalized) or `raw` (backend payload)
    #[arg(short, long, global = true, default_value = "json")]
    response: ResponseMode,
    /// Config file (default: ~/.config/jiosaavn/config.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for songs
    SearchSong {
        /// Search query
        query: String,
        /// Page number (starts at 1)
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Results per page (1-29)
        #[arg(short, long, default_value = "10")]
        limit: u32,
    },
    /// Search for albums
    SearchAlbum {
        /// Search query
        query: String,
    },
    /// Show song details
    Song {
        #[command(flatten)]
        target: Target,
        /// Include lyrics
        #[arg(long)]
        lyrics: bool,
    },
    /// Show album details and songs
    Album {
        #[command(flatten)]
        target: Target,
        /// Include lyrics for every song
        #[arg(long)]
        lyrics: bool,
    },
    /// Show playlist details and songs
    Playlist {
        #[command(flatten)]
        target: Target,
        /// Include lyrics for every song
        #[arg(long)]
        lyrics: bool,
    },
    /// Get song lyrics
    Lyrics {
        #[command(flatten)]
        target: Target,
    },
}

#[derive(Args)]
struct Target {
    /// jiosaavn.com page URL
    #[arg(short, long)]
    url: Option<String>,
    /// Resource id
    #[arg(short, long)]
    id: Option<String>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load()?,
    };
    let client = JioSaavnClient::with_config(&config)?;
    let mode = cli.response;

    match cli.command {
        Command::SearchSong { query, page, limit } => {
            print(&client.search_song(&query, page, limit, mode)?)
        }
        Command::SearchAlbum { query } => print(&client.search_album(&query, mode)?),
        Command::Song { target, lyrics } => {
            print(&client.song(target.url(), target.id(), lyrics, mode)?)
        }
        Command::Album { target, lyrics } => {
            print(&client.album(target.url(), target.id(), lyrics, mode)?)
        }
        Command::Playlist { target, lyrics } => {
            print(&client.playlist(target.url(), target.id(), lyrics, mode)?)
        }
        Command::Lyrics { target } => print(&client.lyrics(target.url(), target.id(), mode)?),
    }
}

impl Target {
    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

fn print<T: serde::Serialize>(payload: &Payload<T>) -> Result<()> {
    let out = serde_json::to_string_pretty(payload).context("failed to encode output")?;
    println!("{out}");
    Ok(())
}
