// src/main.rs

use clap::Parser;
use logview::cli::{Cli, Commands};
use logview::config::Config;
use logview::error::Result;
use logview::{app, db};
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { db: db_path } => {
            let path = match db_path {
                Some(path) => path,
                None => db::default_db_path()?,
            };
            db::initialize(&path)?;
            println!("✓ Database initialized at: {}", path.display());
        }
        Commands::Serve {
            bind,
            db: db_path,
            cache_timeout,
            fresh_threshold,
            openid_url,
            update_logs,
        } => {
            let path = match db_path {
                Some(path) => path,
                None => db::default_db_path()?,
            };
            let mut config = Config::new(path);
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            if let Some(secs) = cache_timeout {
                config.cache_timeout_secs = secs;
            }
            if let Some(secs) = fresh_threshold {
                config.fresh_threshold_secs = secs;
            }
            if let Some(url) = openid_url {
                config.openid_url = url;
            }
            config.update_logs_cmd = update_logs;

            db::initialize(&config.db_path)?;
            let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
            info!(addr = %config.bind_addr, db = %config.db_path.display(), "logview ready");
            axum::serve(listener, app::router(config)).await?;
        }
    }
    Ok(())
}
