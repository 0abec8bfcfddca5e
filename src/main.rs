use anyhow::Result;
use deck_store::create_store;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    // Pick up DECKSTORE_* settings from a local .env, if present
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber to log to stdout
    tracing_subscriber::fmt::init();
    info!("Starting deck store v{}...", env!("CARGO_PKG_VERSION"));

    let store = create_store()?;
    store.initialize().await?;

    let decks = store.get_decks().await?;
    let cards: usize = decks.iter().map(|d| d.flashcards.len()).sum();
    info!("{} decks, {} flashcards", decks.len(), cards);

    for deck in &decks {
        info!(
            "[{}] {} ({}, {}) - {} cards",
            deck.id,
            deck.title,
            deck.language,
            deck.level,
            deck.flashcards.len()
        );
    }

    match store.session_token().await? {
        Some(_) => info!("A session is active"),
        None => info!("No active session"),
    }

    let metrics = store.metrics_snapshot();
    if !metrics.is_empty() {
        info!("Metrics:\n{}", metrics);
    }

    Ok(())
}
