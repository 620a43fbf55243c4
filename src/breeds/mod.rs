//! Runtime breed catalog
//!
//! The static table in [`generated`] is produced by `bitb-tools sync` and
//! consumed read-only; nothing at runtime mutates it. Lookups go through
//! [`find_breed_by_label`] rather than handing out the table for callers to
//! index into.

pub mod generated;

use serde::Serialize;

pub use generated::BREEDS;

/// Labels that exist independently of the source datasets. They are always
/// the first three entries of the generated table.
pub const SPECIAL_BREEDS: &[&str] = &["Indie (Indian Pariah)", "Mix-breed", "Cross-breed"];

/// Breed classification shown on pet-intake forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BreedType {
    #[serde(rename = "Purebred")]
    Purebred,
    #[serde(rename = "Mix-breed")]
    MixBreed,
    #[serde(rename = "Cross-breed")]
    CrossBreed,
}

impl std::fmt::Display for BreedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreedType::Purebred => write!(f, "Purebred"),
            BreedType::MixBreed => write!(f, "Mix-breed"),
            BreedType::CrossBreed => write!(f, "Cross-breed"),
        }
    }
}

/// Which upstream dataset contributed to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SourceTag {
    #[serde(rename = "FCI")]
    Fci,
    #[serde(rename = "AKC")]
    Akc,
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceTag::Fci => write!(f, "FCI"),
            SourceTag::Akc => write!(f, "AKC"),
        }
    }
}

/// FCI nomenclature metadata, present when the breed appears in the
/// federation dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FciGroup {
    pub breed_no: Option<u32>,
    pub group_no: Option<u32>,
    pub group_name: Option<&'static str>,
    pub section_no: Option<u32>,
    pub section_name: Option<&'static str>,
}

/// AKC metadata, present when the breed appears in the kennel-club dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AkcGroup {
    pub group_name: Option<&'static str>,
}

/// One entry in the static breed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreedEntry {
    /// Stable slug identifier, unique within the catalog.
    pub key: &'static str,
    /// Display name, exactly as sourced.
    pub label: &'static str,
    pub breed_type: BreedType,
    /// Alternate spellings accepted by label lookup.
    pub aliases: &'static [&'static str],
    /// Origin datasets; empty for the hand-authored entries.
    pub sources: &'static [SourceTag],
    pub fci: Option<FciGroup>,
    pub akc: Option<AkcGroup>,
}

/// Find the catalog record for a free-typed breed label, if any.
///
/// Matches case-insensitively against display labels and aliases. Custom
/// breeds typed into a form simply come back as `None`; there is no
/// placeholder record.
pub fn find_breed_by_label(label: &str) -> Option<&'static BreedEntry> {
    let q = label.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }

    BREEDS.iter().find(|b| {
        b.label.to_lowercase() == q || b.aliases.iter().any(|a| a.to_lowercase() == q)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_label() {
        let entry = find_breed_by_label("Golden Retriever").unwrap();
        assert_eq!(entry.key, "golden-retriever");
        assert_eq!(entry.sources, &[SourceTag::Fci, SourceTag::Akc]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let entry = find_breed_by_label("  gOLDEN retriever ").unwrap();
        assert_eq!(entry.label, "Golden Retriever");
    }

    #[test]
    fn test_lookup_by_alias() {
        let entry = find_breed_by_label("alsatian").unwrap();
        assert_eq!(entry.label, "German Shepherd Dog");
    }

    #[test]
    fn test_lookup_unknown_label() {
        assert!(find_breed_by_label("Totally Made Up Breed").is_none());
        assert!(find_breed_by_label("").is_none());
        assert!(find_breed_by_label("   ").is_none());
    }

    #[test]
    fn test_special_breeds_lead_the_table() {
        let head: Vec<&str> = BREEDS.iter().take(3).map(|b| b.label).collect();
        assert_eq!(head, SPECIAL_BREEDS);
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = BREEDS.iter().map(|b| b.key).collect();
        keys.sort_unstable();
        let before = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), before);
    }
}
