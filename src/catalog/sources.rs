use anyhow::{bail, Context, Result};

use super::record::{AkcMeta, FciMeta};
use crate::parser::CsvDocument;

/// One breed row extracted from the federation (FCI) CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FciRow {
    pub label: String,
    pub fci: FciMeta,
}

/// One breed row extracted from the kennel-club (AKC) CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AkcRow {
    pub label: String,
    pub akc: AkcMeta,
}

/// Extract breed rows from the FCI nomenclature CSV.
///
/// The breed-name column is required; every metadata column is optional and
/// resolved against a short candidate list. Rows with an empty name are
/// skipped.
pub fn extract_fci(text: &str) -> Result<Vec<FciRow>> {
    let doc = CsvDocument::parse(text).context("FCI CSV is empty or invalid")?;

    let name_idx = match doc.find_column(&["name", "breed", "breedname", "breed_name"]) {
        Some(idx) => idx,
        None => bail!(
            "FCI CSV: could not find breed name column. Header: {}",
            doc.header_display()
        ),
    };

    let breed_no_idx = doc.find_column(&["breedno", "breed_no", "no", "number", "id"]);
    let group_no_idx = doc.find_column(&["groupno", "group_no", "group number", "groupnumber"]);
    let group_name_idx = doc.find_column(&["groupname", "group_name", "group"]);
    let section_no_idx =
        doc.find_column(&["sectionno", "section_no", "section number", "sectionnumber"]);
    let section_name_idx = doc.find_column(&["sectionname", "section_name", "section"]);

    let mut out = Vec::new();
    for row in doc.rows() {
        let label = match doc.field(row, Some(name_idx)) {
            Some(label) => label.to_string(),
            None => continue,
        };

        out.push(FciRow {
            label,
            fci: FciMeta {
                breed_no: doc.int_field(row, breed_no_idx),
                group_no: doc.int_field(row, group_no_idx),
                group_name: doc.field(row, group_name_idx).map(str::to_string),
                section_no: doc.int_field(row, section_no_idx),
                section_name: doc.field(row, section_name_idx).map(str::to_string),
            },
        });
    }

    Ok(out)
}

/// Extract breed rows from the AKC CSV.
///
/// The published dataset has a quirk: the header's first cell is blank and
/// the breed name lives in column 0, so when no name header resolves we fall
/// back to column 0 rather than failing. A missing `group` header is still
/// fatal.
pub fn extract_akc(text: &str) -> Result<Vec<AkcRow>> {
    let doc = CsvDocument::parse(text).context("AKC CSV is empty or invalid")?;

    let name_idx = doc.find_column(&["breed", "name"]).unwrap_or(0);

    let group_idx = match doc.find_column(&["group"]) {
        Some(idx) => idx,
        None => bail!(
            "AKC CSV: missing 'group' header. Header: {}",
            doc.header_display()
        ),
    };

    let mut out = Vec::new();
    for row in doc.rows() {
        let label = match doc.field(row, Some(name_idx)) {
            Some(label) => label.to_string(),
            None => continue,
        };

        out.push(AkcRow {
            label,
            akc: AkcMeta {
                group_name: doc.field(row, Some(group_idx)).map(str::to_string),
            },
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FCI_FIXTURE: &str = "\
id,name,group_no,group,section_no,section\n\
111,Golden Retriever,8,Retrievers - Flushing Dogs - Water Dogs,1,Retrievers\n\
166,German Shepherd Dog,1,Sheepdogs and Cattledogs (except Swiss Cattledogs),1,Sheepdogs\n\
,Nameless Row,1,,,\n\
999,,1,,,\n";

    #[test]
    fn test_fci_extraction() {
        let rows = extract_fci(FCI_FIXTURE).unwrap();
        // the empty-name row is skipped, the empty-id row is kept
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].label, "Golden Retriever");
        assert_eq!(rows[0].fci.breed_no, Some(111));
        assert_eq!(rows[0].fci.group_no, Some(8));
        assert_eq!(rows[0].fci.section_name.as_deref(), Some("Retrievers"));
        assert_eq!(rows[2].label, "Nameless Row");
        assert_eq!(rows[2].fci.breed_no, None);
        assert_eq!(rows[2].fci.group_name, None);
    }

    #[test]
    fn test_fci_missing_name_column_is_fatal() {
        let err = extract_fci("id,group\n1,Herding\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("breed name column"), "{msg}");
        assert!(msg.contains("id, group"), "{msg}");
    }

    #[test]
    fn test_fci_empty_document_is_fatal() {
        assert!(extract_fci("").is_err());
        assert!(extract_fci("id,name,group\n").is_err());
    }

    #[test]
    fn test_akc_blank_first_header_falls_back_to_column_zero() {
        let rows = extract_akc(",description,group\nBeagle,A merry hound,Hound\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "Beagle");
        assert_eq!(rows[0].akc.group_name.as_deref(), Some("Hound"));
    }

    #[test]
    fn test_akc_named_breed_column() {
        let rows = extract_akc("group,breed\nToy,Pug\n").unwrap();
        assert_eq!(rows[0].label, "Pug");
        assert_eq!(rows[0].akc.group_name.as_deref(), Some("Toy"));
    }

    #[test]
    fn test_akc_missing_group_header_is_fatal() {
        let err = extract_akc(",description\nBeagle,A merry hound\n").unwrap_err();
        assert!(err.to_string().contains("'group' header"), "{err}");
    }

    #[test]
    fn test_akc_empty_group_cell_is_absent() {
        let rows = extract_akc(",group\nBeagle,\n").unwrap();
        assert_eq!(rows[0].akc.group_name, None);
    }
}
