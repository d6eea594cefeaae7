//! CSV rendering for exports.
//!
//! Every field is quoted and embedded quotes are doubled (RFC 4180), so
//! free-text columns such as lead notes survive a round trip through
//! spreadsheet tools.

/// Quotes a single CSV field, doubling any embedded quote characters.
pub fn quote_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 2);
    out.push('"');
    for ch in field.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

/// Renders a header row plus one row per record, in input order.
///
/// Rows are joined with `\n` and every field is quoted. Rows shorter or
/// longer than the header are rendered as given; callers are expected to
/// supply uniform rows.
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| quote_field(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            row.iter()
                .map(|f| quote_field(f))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain_field() {
        assert_eq!(quote_field("Acme"), "\"Acme\"");
    }

    #[test]
    fn test_quote_field_with_comma() {
        assert_eq!(quote_field("Acme, Ltd"), "\"Acme, Ltd\"");
    }

    #[test]
    fn test_quote_field_doubles_embedded_quotes() {
        // The upstream export wrapped fields without escaping; a note like
        // `said "call back"` corrupted the file. Doubling is the fix.
        assert_eq!(
            quote_field("said \"call back\""),
            "\"said \"\"call back\"\"\""
        );
    }

    #[test]
    fn test_render_header_and_rows_in_order() {
        let rows = vec![
            vec!["Acme".to_string(), "Jo".to_string()],
            vec!["Globex".to_string(), "Sam".to_string()],
        ];
        let csv = render(&["Company", "Contact"], &rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "\"Company\",\"Contact\"");
        assert_eq!(lines[1], "\"Acme\",\"Jo\"");
        assert_eq!(lines[2], "\"Globex\",\"Sam\"");
    }

    #[test]
    fn test_render_empty_rows_is_header_only() {
        let csv = render(&["Company", "Contact"], &[]);
        assert_eq!(csv, "\"Company\",\"Contact\"");
    }
}
