pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod stats;
pub mod store;

use anyhow::Context;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load()?;

    let phrases_path = store::locate_or_create(&config.phrases_file, &config.search_root)
        .context("locating phrase file")?;
    let stats_path = store::locate_or_create(&config.stats_file, &config.search_root)
        .context("locating statistics file")?;

    let book = store::load_phrases(&phrases_path)?;
    if book.is_empty() {
        println!("No phrases found in {}", phrases_path.display());
        return Ok(());
    }

    let mut stats = store::load_stats(&stats_path)?;
    stats.sync_with(&book);

    tracing::info!(phrases = book.len(), "starting session");
    let outcome = session::run(
        &book,
        &mut stats,
        &config.session,
        io::stdin().lock(),
        io::stdout().lock(),
    );

    // Save even when the session failed part way through.
    store::save_stats(&stats_path, &stats)?;
    let summary = outcome.context("running drill session")?;
    tracing::info!(answered = summary.answered, "session finished");

    Ok(())
}
