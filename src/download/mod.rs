pub mod cache;
pub mod client;

pub use cache::*;
pub use client::*;

use anyhow::Result;
use std::path::PathBuf;

/// Fetch both source CSVs (or reuse cached copies) and return their bodies
/// as `(fci, akc)`.
///
/// A failed fetch aborts the whole run; there is no partial-success mode.
pub fn ensure_sources_downloaded(
    cache_dir: Option<PathBuf>,
    force: bool,
) -> Result<(String, String)> {
    let cache = CacheManager::new(cache_dir)?;

    if !force && cache.is_cached() {
        println!("Using cached sources from {:?}", cache.cache_dir());
        return Ok((cache.load(&cache.fci_path())?, cache.load(&cache.akc_path())?));
    }

    let client = SourceClient::new()?;

    println!("Fetching FCI CSV...");
    let fci = client.fetch_csv(FCI_CSV_URL)?;
    cache.store(&cache.fci_path(), &fci)?;

    println!("Fetching AKC CSV...");
    let akc = client.fetch_csv(AKC_CSV_URL)?;
    cache.store(&cache.akc_path(), &akc)?;

    Ok((fci, akc))
}
