use clap::Parser;
use guestbook_bot::{BotRouter, ChatEvent, HttpApiClient};
use guestbook_core::AppConfig;
use guestbook_domain::SessionId;
use guestbook_persistence::MemorySessionStore;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "guestbook-bot")]
#[command(about = "Chat client for the guestbook message board", long_about = None)]
#[command(version)]
struct Args {
    /// Base URL of the guestbook API (or set GUESTBOOK_API_URL)
    #[arg(long, env = "GUESTBOOK_API_URL")]
    api_url: Option<String>,

    /// Name to sign submitted messages with
    #[arg(long, default_value = "anonymous")]
    name: String,
}

fn init_tracing() {
    if let Ok(log_path) = std::env::var("GUESTBOOK_DEBUG_LOG") {
        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            tracing_subscriber::fmt()
                .with_writer(log_file)
                .with_max_level(tracing::Level::DEBUG)
                .with_target(true)
                .with_ansi(false)
                .init();
            return;
        }
    }
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();
}

fn print_reply(reply: &guestbook_bot::BotReply) {
    println!("{}", reply.text);
    if let Some(keyboard) = &reply.keyboard {
        let labels: Vec<&str> = keyboard
            .rows
            .iter()
            .flatten()
            .map(|button| button.label.as_str())
            .collect();
        println!("[{}]", labels.join(" | "));
    }
}

/// Console stand-in for a chat transport: one session, line-based events.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = AppConfig::load();
    let api_url = args
        .api_url
        .unwrap_or_else(|| config.effective_api_url().to_string());

    let router = BotRouter::new(HttpApiClient::new(api_url), MemorySessionStore::new());
    let session: SessionId = "console".to_string();

    println!("Guestbook. /prev and /next turn pages, anything else posts a message, /quit exits.");
    print_reply(&router.handle(&session, ChatEvent::Start).await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let event = match line {
            "" => continue,
            "/quit" => break,
            "/start" => ChatEvent::Start,
            "/prev" => ChatEvent::Callback("prev".to_string()),
            "/next" => ChatEvent::Callback("next".to_string()),
            text => ChatEvent::Text {
                author: args.name.clone(),
                text: text.to_string(),
            },
        };
        print_reply(&router.handle(&session, event).await);
    }

    Ok(())
}
