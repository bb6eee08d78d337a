// ============================================================
// LINE TOKENIZER
// ============================================================
// Quote-aware splitting of a single CSV line

use crate::domain::csv::Separator;

/// Tokenizer for one physical line of smart CSV input
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTokenizer {
    separator: Separator,
}

impl LineTokenizer {
    pub fn new(separator: Separator) -> Self {
        Self { separator }
    }

    /// Split a line into trimmed field values.
    ///
    /// - double quotes toggle quoted mode and are not kept
    /// - `""` inside a quoted field is a literal quote
    /// - the separator inside quotes does not split
    /// - one stray leading and trailing quote is stripped from each value
    pub fn parse_line(&self, line: &str) -> Vec<String> {
        let separator = self.separator.as_char();
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '"' {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            } else if c == separator && !in_quotes {
                fields.push(current.trim().to_string());
                current.clear();
            } else {
                current.push(c);
            }
        }
        fields.push(current.trim().to_string());

        fields.into_iter().map(strip_outer_quotes).collect()
    }

    /// Number of fields the line splits into
    pub fn count_fields(&self, line: &str) -> usize {
        self.parse_line(line).len()
    }
}

fn strip_outer_quotes(value: String) -> String {
    let start = usize::from(value.starts_with('"'));
    let mut end = value.len();
    if end > start && value.ends_with('"') {
        end -= 1;
    }
    if start == 0 && end == value.len() {
        value
    } else {
        value[start..end].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comma() -> LineTokenizer {
        LineTokenizer::new(Separator::Comma)
    }

    #[test]
    fn test_plain_fields_are_trimmed() {
        assert_eq!(comma().parse_line(" a , b,c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_separator_does_not_split() {
        assert_eq!(
            comma().parse_line(r#""Hello, world",second"#),
            vec!["Hello, world", "second"]
        );
    }

    #[test]
    fn test_doubled_quote_is_literal() {
        assert_eq!(
            comma().parse_line(r#""a ""b"" c",x"#),
            vec![r#"a "b" c"#, "x"]
        );
        // An escaped quote at either end of the value is stripped with the outer quotes
        assert_eq!(
            comma().parse_line(r#""She said ""hi""",x"#),
            vec![r#"She said "hi"#, "x"]
        );
    }

    #[test]
    fn test_trailing_carriage_return_is_trimmed() {
        assert_eq!(comma().parse_line("a,\"b\"\r"), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_line_is_one_empty_field() {
        assert_eq!(comma().parse_line(""), vec![""]);
        assert_eq!(comma().parse_line("a,,"), vec!["a", "", ""]);
    }

    #[test]
    fn test_other_separators() {
        let tab = LineTokenizer::new(Separator::Tab);
        assert_eq!(tab.parse_line("a\tb, c\td"), vec!["a", "b, c", "d"]);

        let pipe = LineTokenizer::new(Separator::Pipe);
        assert_eq!(pipe.count_fields("x|y|\"z|w\""), 3);
    }

    #[test]
    fn test_stray_outer_quotes_are_stripped() {
        assert_eq!(strip_outer_quotes("\"abc\"".to_string()), "abc");
        assert_eq!(strip_outer_quotes("\"".to_string()), "");
        assert_eq!(strip_outer_quotes("plain".to_string()), "plain");
    }
}
