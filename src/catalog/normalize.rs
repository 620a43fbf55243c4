use crate::parser::strip_bom;

/// Derive the matching key used to decide whether two differently-formatted
/// labels name the same breed.
///
/// Lowercases, rewrites `&` to `and`, drops parentheses, apostrophes,
/// periods, commas and slashes, and collapses whitespace. Display labels are
/// never run through this; it exists only for merge comparisons and slugs.
pub fn matching_key(label: &str) -> String {
    let mut out = String::with_capacity(label.len());

    for ch in strip_bom(label).chars() {
        match ch {
            '&' => out.push_str("and"),
            '(' | ')' | '\'' | '\u{2019}' | '.' | ',' | '/' => out.push(' '),
            c => {
                for lc in c.to_lowercase() {
                    out.push(lc);
                }
            }
        }
    }

    let mut collapsed = String::with_capacity(out.len());
    let mut last_was_space = true;
    for ch in out.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                collapsed.push(' ');
            }
            last_was_space = true;
        } else {
            collapsed.push(ch);
            last_was_space = false;
        }
    }
    while collapsed.ends_with(' ') {
        collapsed.pop();
    }

    collapsed
}

/// Derive a record's stable slug key from its display label.
pub fn slugify(label: &str) -> String {
    matching_key(label).replace(' ', "-")
}
