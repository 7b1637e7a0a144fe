//! Seeds the notifications collection with the fixture records.
//!
//! Run with:
//! ```
//! MONGODB_URI=mongodb://localhost:27017 cargo run -p notification-seed --bin seed
//! ```

use anyhow::Context;
use notification_seed::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();
    let database = config
        .connect()
        .await
        .context("failed to open MongoDB client")?;

    let seeder = Seeder::new(database).with_collection_name(config.collection.as_str());

    let report = seeder
        .seed()
        .await
        .with_context(|| format!("failed to seed {}.{}", config.database, config.collection))?;
    seeder
        .verify()
        .await
        .context("seed verification failed")?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Collection created: {}", report.collection_created);
    tracing::info!("  Inserted: {}", report.inserted);
    tracing::info!("  Already present: {}", report.skipped);

    Ok(())
}
