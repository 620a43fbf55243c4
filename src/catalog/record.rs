use serde::Serialize;

use crate::breeds::{BreedType, SourceTag};

/// FCI nomenclature metadata as extracted from the federation CSV.
///
/// Serialized field names match the federation column spellings so the JSON
/// export lines up with the dashboard's record shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FciMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed_no: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_no: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_no: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_name: Option<String>,
}

/// AKC metadata as extracted from the kennel-club CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AkcMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

/// One merged catalog record, as produced by a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRecord {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub breed_type: BreedType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub sources: Vec<SourceTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fci: Option<FciMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub akc: Option<AkcMeta>,
}
