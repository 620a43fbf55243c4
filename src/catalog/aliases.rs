/// Alternate spellings folded into the catalog at build time, keyed by the
/// exact display label they attach to. Kept here rather than in the generated
/// artifact so a regeneration run does not lose them.
pub static ALIAS_OVERLAY: &[(&str, &[&str])] = &[
    ("Indie (Indian Pariah)", &["Indian Pariah Dog", "Desi Dog"]),
    ("German Shepherd Dog", &["German Shepherd", "Alsatian"]),
    ("Dachshund", &["Teckel"]),
    ("Poodle", &["Caniche"]),
];

/// Aliases registered for a display label, if any.
pub fn aliases_for(label: &str) -> Vec<String> {
    ALIAS_OVERLAY
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, aliases)| aliases.iter().map(|a| a.to_string()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_hit_and_miss() {
        assert_eq!(aliases_for("Dachshund"), vec!["Teckel".to_string()]);
        assert!(aliases_for("Beagle").is_empty());
    }
}
