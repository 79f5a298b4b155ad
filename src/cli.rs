// src/cli.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "logview - a web front-end for browsing archived chat-channel logs",
    long_about = "logview serves an archive of chat-channel logs over HTTP: a channel listing, one page per archived day with month navigation, and saved bookmarks that resolve to line anchors. Log ingestion is handled by an external update_logs utility; logview only reads the archive."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initializes the logview database.
    /// The default database file is "~/.config/logview/logview.db".
    Init {
        #[arg(long, help = "Path to the SQLite database file")]
        db: Option<PathBuf>,
    },

    /// Serves the log browser over HTTP.
    Serve {
        #[arg(short, long, help = "Address to bind, host:port")]
        bind: Option<String>,

        #[arg(long, help = "Path to the SQLite database file")]
        db: Option<PathBuf>,

        #[arg(long, help = "Cache timeout handed to the page renderer, in seconds")]
        cache_timeout: Option<u64>,

        #[arg(long, help = "Seconds a log must stay quiet before its page may be cached")]
        fresh_threshold: Option<u64>,

        #[arg(long, help = "OpenID entry point that /login redirects to")]
        openid_url: Option<String>,

        #[arg(long, help = "Command spawned before each request to refresh the logs")]
        update_logs: Option<String>,
    },
}
