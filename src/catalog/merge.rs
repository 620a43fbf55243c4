use std::collections::HashMap;

use super::aliases::aliases_for;
use super::normalize::{matching_key, slugify};
use super::record::CatalogRecord;
use super::sources::{AkcRow, FciRow};
use crate::breeds::{BreedType, SourceTag};

/// Merge the two source datasets into the final ordered catalog.
///
/// The catalog is seeded from the FCI rows, then the AKC rows are folded in:
/// a row whose matching key already exists gains the AKC tag and metadata
/// (FCI metadata is kept as-is), a new key inserts a fresh AKC-only record.
/// The three hand-authored entries are prepended and win exact-label ties
/// against sourced records.
pub fn merge_catalog(fci_rows: Vec<FciRow>, akc_rows: Vec<AkcRow>) -> Vec<CatalogRecord> {
    let mut by_key: HashMap<String, CatalogRecord> = HashMap::new();

    for row in fci_rows {
        let key = matching_key(&row.label);
        by_key.insert(
            key,
            CatalogRecord {
                key: slugify(&row.label),
                label: row.label.clone(),
                breed_type: BreedType::Purebred,
                aliases: aliases_for(&row.label),
                sources: vec![SourceTag::Fci],
                fci: Some(row.fci),
                akc: None,
            },
        );
    }

    for row in akc_rows {
        let key = matching_key(&row.label);
        match by_key.get_mut(&key) {
            Some(existing) => {
                if !existing.sources.contains(&SourceTag::Akc) {
                    existing.sources.push(SourceTag::Akc);
                }
                existing.akc = Some(row.akc);
            }
            None => {
                by_key.insert(
                    key,
                    CatalogRecord {
                        key: slugify(&row.label),
                        label: row.label.clone(),
                        breed_type: BreedType::Purebred,
                        aliases: aliases_for(&row.label),
                        sources: vec![SourceTag::Akc],
                        fci: None,
                        akc: Some(row.akc),
                    },
                );
            }
        }
    }

    let mut merged: Vec<CatalogRecord> = by_key.into_values().collect();
    merged.sort_by(|a, b| {
        a.label
            .to_lowercase()
            .cmp(&b.label.to_lowercase())
            .then_with(|| a.label.cmp(&b.label))
    });

    let synthetic = synthetic_entries();
    let taken: Vec<&str> = synthetic.iter().map(|r| r.label.as_str()).collect();

    let mut catalog = synthetic.clone();
    catalog.extend(merged.into_iter().filter(|r| !taken.contains(&r.label.as_str())));
    catalog
}

/// The three entries that exist in every catalog regardless of source data.
pub fn synthetic_entries() -> Vec<CatalogRecord> {
    ["Indie (Indian Pariah)", "Mix-breed", "Cross-breed"]
        .iter()
        .map(|label| CatalogRecord {
            key: slugify(label),
            label: label.to_string(),
            breed_type: match *label {
                "Mix-breed" => BreedType::MixBreed,
                "Cross-breed" => BreedType::CrossBreed,
                _ => BreedType::Purebred,
            },
            aliases: aliases_for(label),
            sources: vec![],
            fci: None,
            akc: None,
        })
        .collect()
}
