use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use discipline_journal::config::Config;
use discipline_journal::{FileStore, JournalStore, Rollup};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let store = FileStore::from_config(&cfg);
    let journal = store
        .load_or_default()
        .await
        .with_context(|| format!("failed to load journal {}", store.path().display()))?;

    info!(
        "Journal: {} day(s), {} rule(s)",
        journal.day_count(),
        journal.rules().count()
    );

    let unknown = journal.unknown_rule_ids();
    if !unknown.is_empty() {
        warn!("Trades reference rules missing from the rule book: {:?}", unknown);
    }

    let rollup = Rollup::new(journal.days());
    if rollup.is_empty() {
        warn!("No trading days recorded in {}", store.path().display());
    }
    let report = rollup.by_period(cfg.period);
    info!("Discipline gap by {} ({} group(s))", cfg.period, report.len());
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
