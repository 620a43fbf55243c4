use crate::breeds::{BreedType, SourceTag};
use crate::catalog::{AkcMeta, CatalogRecord, FciMeta};

/// Render the catalog as the generated Rust static-table module consumed by
/// `crate::breeds`. Field order is stable so regeneration diffs cleanly.
pub fn render_rust_module(records: &[CatalogRecord]) -> String {
    let mut out = String::new();

    out.push_str("// AUTO-GENERATED FILE. DO NOT EDIT BY HAND.\n");
    out.push_str(&format!(
        "// Generated by bitb-tools v{} (`bitb-tools sync`).\n\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("use super::{AkcGroup, BreedEntry, BreedType, FciGroup, SourceTag};\n\n");
    out.push_str("pub static BREEDS: &[BreedEntry] = &[\n");

    for record in records {
        render_entry(&mut out, record);
    }

    out.push_str("];\n");
    out
}

fn render_entry(out: &mut String, record: &CatalogRecord) {
    out.push_str("    BreedEntry {\n");
    out.push_str(&format!("        key: {},\n", quote(&record.key)));
    out.push_str(&format!("        label: {},\n", quote(&record.label)));
    out.push_str(&format!(
        "        breed_type: BreedType::{},\n",
        variant_name(record.breed_type)
    ));

    if record.aliases.is_empty() {
        out.push_str("        aliases: &[],\n");
    } else {
        let aliases: Vec<String> = record.aliases.iter().map(|a| quote(a)).collect();
        out.push_str(&format!("        aliases: &[{}],\n", aliases.join(", ")));
    }

    if record.sources.is_empty() {
        out.push_str("        sources: &[],\n");
    } else {
        let sources: Vec<String> = record
            .sources
            .iter()
            .map(|s| format!("SourceTag::{}", source_name(*s)))
            .collect();
        out.push_str(&format!("        sources: &[{}],\n", sources.join(", ")));
    }

    match &record.fci {
        Some(fci) => render_fci(out, fci),
        None => out.push_str("        fci: None,\n"),
    }
    match &record.akc {
        Some(akc) => render_akc(out, akc),
        None => out.push_str("        akc: None,\n"),
    }

    out.push_str("    },\n");
}

fn render_fci(out: &mut String, fci: &FciMeta) {
    out.push_str("        fci: Some(FciGroup {\n");
    out.push_str(&format!("            breed_no: {},\n", opt_int(fci.breed_no)));
    out.push_str(&format!("            group_no: {},\n", opt_int(fci.group_no)));
    out.push_str(&format!(
        "            group_name: {},\n",
        opt_str(fci.group_name.as_deref())
    ));
    out.push_str(&format!("            section_no: {},\n", opt_int(fci.section_no)));
    out.push_str(&format!(
        "            section_name: {},\n",
        opt_str(fci.section_name.as_deref())
    ));
    out.push_str("        }),\n");
}

fn render_akc(out: &mut String, akc: &AkcMeta) {
    out.push_str("        akc: Some(AkcGroup {\n");
    out.push_str(&format!(
        "            group_name: {},\n",
        opt_str(akc.group_name.as_deref())
    ));
    out.push_str("        }),\n");
}

fn variant_name(breed_type: BreedType) -> &'static str {
    match breed_type {
        BreedType::Purebred => "Purebred",
        BreedType::MixBreed => "MixBreed",
        BreedType::CrossBreed => "CrossBreed",
    }
}

fn source_name(tag: SourceTag) -> &'static str {
    match tag {
        SourceTag::Fci => "Fci",
        SourceTag::Akc => "Akc",
    }
}

fn opt_int(v: Option<u32>) -> String {
    match v {
        Some(n) => format!("Some({n})"),
        None => "None".to_string(),
    }
}

fn opt_str(v: Option<&str>) -> String {
    match v {
        Some(s) => format!("Some({})", quote(s)),
        None => "None".to_string(),
    }
}

/// A Rust string literal for `s`, escaping quotes and backslashes.
fn quote(s: &str) -> String {
    let mut lit = String::with_capacity(s.len() + 2);
    lit.push('"');
    for ch in s.chars() {
        match ch {
            '"' => lit.push_str("\\\""),
            '\\' => lit.push_str("\\\\"),
            '\n' => lit.push_str("\\n"),
            '\r' => lit.push_str("\\r"),
            '\t' => lit.push_str("\\t"),
            c => lit.push(c),
        }
    }
    lit.push('"');
    lit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::synthetic_entries;

    #[test]
    fn test_module_header_and_table() {
        let module = render_rust_module(&synthetic_entries());
        assert!(module.starts_with("// AUTO-GENERATED FILE. DO NOT EDIT BY HAND.\n"));
        assert!(module.contains("pub static BREEDS: &[BreedEntry] = &["));
        assert!(module.contains("key: \"indie-indian-pariah\","));
        assert!(module.contains("breed_type: BreedType::MixBreed,"));
        assert!(module.ends_with("];\n"));
    }

    #[test]
    fn test_sourced_entry_rendering() {
        let record = CatalogRecord {
            key: "golden-retriever".into(),
            label: "Golden Retriever".into(),
            breed_type: BreedType::Purebred,
            aliases: vec![],
            sources: vec![SourceTag::Fci, SourceTag::Akc],
            fci: Some(FciMeta {
                breed_no: Some(111),
                group_no: Some(8),
                group_name: Some("Retrievers - Flushing Dogs - Water Dogs".into()),
                section_no: Some(1),
                section_name: Some("Retrievers".into()),
            }),
            akc: Some(AkcMeta {
                group_name: Some("Sporting".into()),
            }),
        };

        let module = render_rust_module(&[record]);
        assert!(module.contains("sources: &[SourceTag::Fci, SourceTag::Akc],"));
        assert!(module.contains("breed_no: Some(111),"));
        assert!(module.contains("group_name: Some(\"Sporting\"),"));
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("a \"b\" c"), "\"a \\\"b\\\" c\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
    }
}
