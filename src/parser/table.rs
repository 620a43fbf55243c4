use anyhow::{bail, Result};

use super::csv::{parse_csv, strip_bom};

/// A parsed tabular document: one header row plus zero or more data rows.
///
/// Column positions are resolved once against the header (not per row), and
/// field access is lenient: missing, empty-after-trim, or unparsable values
/// come back as `None`, never as zero or an error.
pub struct CsvDocument {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvDocument {
    /// Parse a document and split off the header row.
    ///
    /// A structurally empty or header-only document is an error: the builder
    /// has nothing to generate from and must abort the run.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = parse_csv(text);
        if rows.len() < 2 {
            bail!("document is empty or has no data rows");
        }

        let header: Vec<String> = rows
            .remove(0)
            .iter()
            .map(|h| strip_bom(h).trim().to_string())
            .collect();

        Ok(Self { header, rows })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// The header row joined for diagnostics, e.g. in "column not found" errors.
    pub fn header_display(&self) -> String {
        self.header.join(", ")
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Resolve a column index from an ordered list of acceptable header names.
    ///
    /// Matching is case-insensitive. Candidates are tried in priority order
    /// with exact whole-cell equality first; only if no candidate matches
    /// exactly is a second, substring-containment pass made.
    pub fn find_column(&self, candidates: &[&str]) -> Option<usize> {
        let lower: Vec<String> = self.header.iter().map(|h| h.to_lowercase()).collect();

        for cand in candidates {
            if let Some(idx) = lower.iter().position(|h| h == cand) {
                return Some(idx);
            }
        }
        for cand in candidates {
            if let Some(idx) = lower.iter().position(|h| h.contains(cand)) {
                return Some(idx);
            }
        }
        None
    }

    /// A trimmed string field; empty-after-trim yields `None`.
    pub fn field<'a>(&'a self, row: &'a [String], idx: Option<usize>) -> Option<&'a str> {
        let raw = row.get(idx?)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    /// A base-10 integer field; anything unparsable yields `None`.
    pub fn int_field(&self, row: &[String], idx: Option<usize>) -> Option<u32> {
        self.field(row, idx)?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> CsvDocument {
        CsvDocument::parse(text).unwrap()
    }

    #[test]
    fn test_rejects_header_only() {
        assert!(CsvDocument::parse("a,b,c\n").is_err());
        assert!(CsvDocument::parse("").is_err());
    }

    #[test]
    fn test_find_column_priority_order() {
        let d = doc("id,no,name\nx,y,z\n");
        // "no" ranks ahead of "id" in the candidate list, so it wins even
        // though "id" also matches.
        assert_eq!(d.find_column(&["no", "id"]), Some(1));
        assert_eq!(d.find_column(&["id", "no"]), Some(0));
    }

    #[test]
    fn test_find_column_case_insensitive() {
        let d = doc("Breed,Group\nx,y\n");
        assert_eq!(d.find_column(&["group"]), Some(1));
    }

    #[test]
    fn test_find_column_substring_fallback() {
        let d = doc("breed name,group\nx,y\n");
        assert_eq!(d.find_column(&["breedname", "breed"]), Some(0));
    }

    #[test]
    fn test_exact_match_beats_substring() {
        // "group" exactly matches column 1; the substring hit on
        // "group number" at column 0 must not shadow it.
        let d = doc("group number,group\nx,y\n");
        assert_eq!(d.find_column(&["group"]), Some(1));
    }

    #[test]
    fn test_find_column_missing() {
        let d = doc("a,b\nx,y\n");
        assert_eq!(d.find_column(&["name", "breed"]), None);
    }

    #[test]
    fn test_header_bom_stripped() {
        let d = doc("\u{feff}name,group\nx,y\n");
        assert_eq!(d.find_column(&["name"]), Some(0));
    }

    #[test]
    fn test_field_trims_and_blanks_to_none() {
        let d = doc("a,b\n  hi  ,   \n");
        let row = &d.rows()[0];
        assert_eq!(d.field(row, Some(0)), Some("hi"));
        assert_eq!(d.field(row, Some(1)), None);
        assert_eq!(d.field(row, Some(9)), None);
        assert_eq!(d.field(row, None), None);
    }

    #[test]
    fn test_int_field_lenient() {
        let d = doc("a,b,c\n 7 ,x,\n");
        let row = &d.rows()[0];
        assert_eq!(d.int_field(row, Some(0)), Some(7));
        assert_eq!(d.int_field(row, Some(1)), None);
        assert_eq!(d.int_field(row, Some(2)), None);
    }
}
