use tokio::io::BufReader;
use tracing::info;

use travel_assistant::ui::renderer::TranscriptRenderer;
use travel_assistant::ui::run_session;
use travel_assistant::{Config, ConversationStore, HttpChatTransport};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing on stderr; stdout carries the transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travel_assistant=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let config = Config::from_env()?;
    let transport = HttpChatTransport::new(&config);
    info!("Using chat service at {}", transport.chat_url());
    let store = ConversationStore::new(transport);

    // ── Session ───────────────────────────────────────────────────────────────
    let stdin = BufReader::new(tokio::io::stdin());
    let mut renderer = TranscriptRenderer::new(std::io::stdout());
    run_session(&store, stdin, &mut renderer).await?;
    Ok(())
}
