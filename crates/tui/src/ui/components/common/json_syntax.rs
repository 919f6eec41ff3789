//! Syntax highlighting for pretty-printed JSON in the workflow viewer.
//!
//! Works line by line on text produced by `serde_json::to_string_pretty`, so
//! a token never spans lines. Object keys are told apart from string values by
//! the `:` that follows them.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::ui::theme::roles::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Whitespace,
    Key,
    String,
    Number,
    Keyword,
    Null,
    Punctuation,
    Other,
}

/// Builds one highlighted `Line` per line of `pretty_json`.
pub fn highlight_json<'text>(pretty_json: &'text str, theme: &dyn Theme) -> Vec<Line<'text>> {
    pretty_json
        .lines()
        .map(|line| {
            let spans: Vec<Span<'text>> = tokenize_line(line)
                .into_iter()
                .map(|(kind, text)| Span::styled(text, style_for(kind, theme)))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn style_for(kind: TokenKind, theme: &dyn Theme) -> Style {
    match kind {
        TokenKind::Key => theme.text_secondary_style(),
        TokenKind::String => theme.syntax_string_style(),
        TokenKind::Number => theme.syntax_number_style(),
        TokenKind::Keyword => theme.syntax_keyword_style(),
        TokenKind::Null => theme.text_muted_style(),
        TokenKind::Punctuation => theme.syntax_punctuation_style(),
        TokenKind::Whitespace | TokenKind::Other => theme.text_primary_style(),
    }
}

fn tokenize_line(line: &str) -> Vec<(TokenKind, &str)> {
    let mut tokens = Vec::new();
    let mut rest = line;
    while let Some(first) = rest.chars().next() {
        let (kind, length) = match first {
            c if c.is_whitespace() => (
                TokenKind::Whitespace,
                rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len()),
            ),
            '"' => {
                let length = quoted_length(rest);
                let is_key = rest[length..].trim_start().starts_with(':');
                (if is_key { TokenKind::Key } else { TokenKind::String }, length)
            }
            '{' | '}' | '[' | ']' | ':' | ',' => (TokenKind::Punctuation, 1),
            '-' | '0'..='9' => (TokenKind::Number, number_length(rest)),
            _ => match keyword_at(rest) {
                Some("null") => (TokenKind::Null, 4),
                Some(keyword) => (TokenKind::Keyword, keyword.len()),
                None => (TokenKind::Other, first.len_utf8()),
            },
        };
        let (token, remaining) = rest.split_at(length.max(first.len_utf8()));
        tokens.push((kind, token));
        rest = remaining;
    }
    tokens
}

/// Length of the string literal at the start of `input`, closing quote included.
/// Unterminated literals run to the end of the line.
fn quoted_length(input: &str) -> usize {
    let mut escaped = false;
    for (index, byte) in input.bytes().enumerate().skip(1) {
        match byte {
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'"' => return index + 1,
            _ => {}
        }
    }
    input.len()
}

fn number_length(input: &str) -> usize {
    input
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')))
        .unwrap_or(input.len())
}

fn keyword_at(input: &str) -> Option<&'static str> {
    ["true", "false", "null"].into_iter().find(|keyword| {
        input.strip_prefix(keyword).is_some_and(|after| {
            after
                .chars()
                .next()
                .is_none_or(|c| !c.is_ascii_alphanumeric() && c != '_')
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<(TokenKind, &str)> {
        tokenize_line(line)
            .into_iter()
            .filter(|(kind, _)| *kind != TokenKind::Whitespace)
            .collect()
    }

    #[test]
    fn keys_and_string_values_are_distinguished() {
        assert_eq!(
            kinds(r#"    "name": "YouTube Search","#),
            vec![
                (TokenKind::Key, r#""name""#),
                (TokenKind::Punctuation, ":"),
                (TokenKind::String, r#""YouTube Search""#),
                (TokenKind::Punctuation, ","),
            ]
        );
    }

    #[test]
    fn escaped_quotes_stay_inside_the_literal() {
        let line = r#""note": "say \"hi\" now""#;
        let tokens = kinds(line);
        assert_eq!(tokens[2], (TokenKind::String, r#""say \"hi\" now""#));
    }

    #[test]
    fn numbers_and_keywords_are_recognised() {
        assert_eq!(
            kinds(r#""maxResults": -12.5e+3, true, null"#)[2..],
            [
                (TokenKind::Number, "-12.5e+3"),
                (TokenKind::Punctuation, ","),
                (TokenKind::Keyword, "true"),
                (TokenKind::Punctuation, ","),
                (TokenKind::Null, "null"),
            ]
        );
    }

    #[test]
    fn identifier_prefixed_keywords_are_not_keywords() {
        assert_eq!(keyword_at("trueValue"), None);
        assert_eq!(keyword_at("false]"), Some("false"));
    }

    #[test]
    fn tokens_cover_the_whole_line() {
        let line = r#"  "body": "Video: {{step4.title}}\nCaption: ✓", 10"#;
        let rebuilt: String = tokenize_line(line).into_iter().map(|(_, text)| text).collect();
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn highlight_produces_one_line_per_input_line() {
        let theme = crate::ui::theme::OrchidTheme::new();
        let lines = highlight_json("{\n  \"a\": 1\n}", &theme);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].spans[1].style, theme.text_secondary_style());
    }
}
