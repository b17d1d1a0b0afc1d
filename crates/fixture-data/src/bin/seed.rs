//! Default seed script - populates one account with fixture data
//!
//! Run with:
//! ```
//! cargo run -p fixture-data --bin seed
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use contacts::ContactStore;
use fixture_data::builders::ScenarioBuilder;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Reproducible data; override with SEED=<n>.
    let seed = std::env::var("SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(12345);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut store = ContactStore::default();
    let result = ScenarioBuilder::new().build(&mut store, &mut rng)?;

    tracing::info!("Seed completed for account {}!", result.account);
    tracing::info!("  Contacts: {}", result.report.contacts);
    tracing::info!("  Placeholders: {}", result.report.placeholder_contacts);
    tracing::info!("  Special dates: {}", result.report.special_dates);
    tracing::info!("  Reminders: {}", result.report.reminders);
    tracing::info!("  Relationships: {}", result.report.relationships);
    tracing::info!("  Notes: {}", result.report.notes);
    tracing::info!("  Conversations: {}", result.report.conversations);
    tracing::info!("  Life events: {}", result.report.life_events);
    tracing::info!("  Contact fields: {}", result.report.contact_fields);
    tracing::info!("  Activities: {}", result.report.activities);
    tracing::info!("  Entries: {}", result.report.entries);
    tracing::info!("  Day ratings: {}", result.report.day_ratings);
    tracing::info!("  Journal rows: {}", result.report.journal_rows());

    Ok(())
}
