pub mod codegen;

pub use codegen::*;

use anyhow::{Context, Result};
use std::path::Path;

use crate::catalog::CatalogRecord;

/// Artifact formats the builder can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rust static-table module (the artifact `crate::breeds` compiles in)
    #[default]
    Rust,
    /// JSON array with the dashboard's record field names
    Json,
}

/// Serialize the catalog and write the artifact, replacing any previous one.
///
/// Either the whole file is written or nothing is; serialization happens
/// before the output path is touched.
pub fn write_catalog(
    records: &[CatalogRecord],
    output: &Path,
    format: OutputFormat,
) -> Result<()> {
    let body = match format {
        OutputFormat::Rust => render_rust_module(records),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(records)
                .context("Failed to serialize catalog to JSON")?;
            json.push('\n');
            json
        }
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
        }
    }

    std::fs::write(output, body)
        .with_context(|| format!("Failed to write catalog artifact: {:?}", output))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::synthetic_entries;

    #[test]
    fn test_write_rust_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.rs");

        write_catalog(&synthetic_entries(), &path, OutputFormat::Rust).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.contains("AUTO-GENERATED"));
        assert!(body.contains("label: \"Cross-breed\","));
    }

    #[test]
    fn test_write_json_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("breeds.json");

        write_catalog(&synthetic_entries(), &path, OutputFormat::Json).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed[0]["key"], "indie-indian-pariah");
        assert_eq!(parsed[1]["type"], "Mix-breed");
        assert_eq!(parsed[2]["sources"], serde_json::json!([]));
    }

    #[test]
    fn test_overwrites_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.rs");
        std::fs::write(&path, "stale contents").unwrap();

        write_catalog(&synthetic_entries(), &path, OutputFormat::Rust).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        assert!(!body.contains("stale contents"));
    }
}
