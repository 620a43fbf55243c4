/// Strip a leading UTF-8 byte-order-mark, if present.
pub fn strip_bom(s: &str) -> &str {
    s.strip_prefix('\u{feff}').unwrap_or(s)
}

/// Parse a delimited text document into rows of raw fields.
///
/// Handles double-quoted fields (which may contain commas and newlines),
/// doubled quotes as an escaped literal quote, and both `\n` and `\r\n`
/// line terminators. Rows whose fields are all empty after trimming are
/// dropped.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                cur.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
            continue;
        }

        if ch == ',' && !in_quotes {
            row.push(std::mem::take(&mut cur));
            continue;
        }

        if (ch == '\n' || ch == '\r') && !in_quotes {
            if ch == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            row.push(std::mem::take(&mut cur));
            rows.push(std::mem::take(&mut row));
            continue;
        }

        cur.push(ch);
    }

    row.push(cur);
    rows.push(row);

    rows.retain(|r| r.iter().any(|f| !f.trim().is_empty()));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_rows() {
        let rows = parse_csv("a,b,c\n1,2,3\n");
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]);
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let rows = parse_csv("name,group\n\"Retriever, Golden\",Sporting\n");
        assert_eq!(rows[1], vec!["Retriever, Golden", "Sporting"]);
    }

    #[test]
    fn test_escaped_quote() {
        let rows = parse_csv("a\n\"say \"\"hi\"\"\"\n");
        assert_eq!(rows[1], vec!["say \"hi\""]);
    }

    #[test]
    fn test_embedded_newline_inside_quotes() {
        let rows = parse_csv("a,b\n\"line1\nline2\",x\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["line1\nline2", "x"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let rows = parse_csv("a,b\r\n1,2\r\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn test_blank_rows_dropped() {
        let rows = parse_csv("a,b\n,\n  , \n1,2\n\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn test_trailing_field_without_newline() {
        let rows = parse_csv("a,b\n1,2");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}Breed"), "Breed");
        assert_eq!(strip_bom("Breed"), "Breed");
    }
}
