// src/admin.rs
use crate::domain::sample::seed_bundle;
use crate::errors::StoreError;
use crate::portfolio::Portfolio;
use tracing::info;

/// Writes the sample bundle across states, replacing any existing records at
/// those paths. Stops at the first failed write.
pub async fn seed_sample_data(portfolio: &Portfolio) -> Result<usize, StoreError> {
    let bundle = seed_bundle();
    let total = bundle.len();

    for (i, seed) in bundle.iter().enumerate() {
        portfolio
            .save_property_data(seed.state, seed.slug, &seed.record)
            .await?;
        info!(state = seed.state, slug = seed.slug, "seeded {}/{}", i + 1, total);
    }

    info!("✅ Seeded {total} sample properties");
    Ok(total)
}
