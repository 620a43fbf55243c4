//! Breed catalog generation
//!
//! Turns the two upstream CSV breed lists into the single merged catalog
//! that [`crate::writer`] serializes. Pure data transformation: the only
//! I/O in a generation run lives in [`crate::download`] and the writer.

pub mod aliases;
pub mod merge;
pub mod normalize;
pub mod record;
pub mod sources;

pub use merge::*;
pub use normalize::*;
pub use record::*;
pub use sources::*;

use anyhow::Result;

/// Build the full ordered catalog from the raw CSV bodies of both sources.
pub fn generate_catalog(fci_csv: &str, akc_csv: &str) -> Result<Vec<CatalogRecord>> {
    let fci_rows = extract_fci(fci_csv)?;
    println!("FCI rows: {}", fci_rows.len());

    let akc_rows = extract_akc(akc_csv)?;
    println!("AKC rows: {}", akc_rows.len());

    Ok(merge_catalog(fci_rows, akc_rows))
}
