use std::sync::Arc;

use clap::Parser;
use guestbook_api::{router, MessageService};
use guestbook_core::AppConfig;
use guestbook_persistence::JsonMessageStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "guestbook-api")]
#[command(about = "HTTP API for the guestbook message board", long_about = None)]
#[command(version)]
struct Args {
    /// Address to listen on (or set GUESTBOOK_BIND)
    #[arg(long, env = "GUESTBOOK_BIND")]
    bind: Option<String>,

    /// Path to the message store file (or set GUESTBOOK_FILE)
    #[arg(long, value_name = "FILE", env = "GUESTBOOK_FILE")]
    file: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = AppConfig::load();

    let bind = args
        .bind
        .unwrap_or_else(|| config.effective_bind_address().to_string());
    let file = args
        .file
        .unwrap_or_else(|| config.effective_data_file().to_string());

    let store = Arc::new(JsonMessageStore::new(&file));
    let service = Arc::new(MessageService::new(store, config.effective_page_size()));

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!("Guestbook API listening on {bind}, store at {file}");

    axum::serve(listener, router(service)).await?;

    Ok(())
}
