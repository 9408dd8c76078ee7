//! Compiled layouts.
//!
//! Compiling a layout runs the [`Scanner`] once to find which catalog tokens
//! occur, then splits the layout text into literal and token segments. Every
//! occurrence of a found token's exact text is a token segment, whether or not
//! the scanner reported that particular occurrence. Candidates that are not in
//! the catalog stay literal text.
//!
//! Rendering evaluates each distinct token once and never rescans the output,
//! so a rendered value that happens to look like a token stays as it is.

pub mod scanner;

use log::debug;

use crate::token::Token;
pub use scanner::{Candidate, Scanner};

/// A piece of a compiled layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output unchanged
    Literal(String),
    /// A catalog token replaced by its rendered value
    Token(Token),
}

/// A layout split into literal text and tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    segments: Vec<Segment>,
    /// Distinct tokens, in order of first appearance
    tokens: Vec<Token>,
}

impl Layout {
    /// Compile a layout string.
    pub fn parse(layout: &str) -> Layout {
        let mut tokens: Vec<Token> = Vec::new();
        for candidate in Scanner::new(layout) {
            if let Some(token) = Token::from_literal(candidate.text) {
                if !tokens.contains(&token) {
                    tokens.push(token);
                }
            }
        }

        let mut segments = Vec::new();
        let mut literal_start = 0;
        let mut position = 0;
        let bytes = layout.as_bytes();

        while position < bytes.len() {
            if bytes[position] == b'$' {
                let rest = &layout[position..];
                // No catalog literal is a prefix of another, so at most one matches.
                if let Some(token) = tokens.iter().find(|t| rest.starts_with(t.as_str())) {
                    if literal_start < position {
                        segments.push(Segment::Literal(
                            layout[literal_start..position].to_string(),
                        ));
                    }
                    segments.push(Segment::Token(*token));
                    position += token.as_str().len();
                    literal_start = position;
                    continue;
                }
            }
            position += 1;
        }

        if literal_start < layout.len() {
            segments.push(Segment::Literal(layout[literal_start..].to_string()));
        }

        debug!(
            "compiled layout {:?}: {} segments, {} distinct tokens",
            layout,
            segments.len(),
            tokens.len()
        );

        Layout { segments, tokens }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Distinct tokens in order of first appearance.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Render the layout, calling `value` once per distinct token.
    pub fn render_with<F>(&self, mut value: F) -> String
    where
        F: FnMut(Token) -> String,
    {
        let values: Vec<String> = self.tokens.iter().map(|t| value(*t)).collect();

        let mut result = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => result.push_str(s),
                Segment::Token(token) => {
                    if let Some(i) = self.tokens.iter().position(|t| t == token) {
                        result.push_str(&values[i]);
                    }
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Segment {
        Segment::Literal(s.to_string())
    }

    #[test]
    fn test_parse_segments() {
        let layout = Layout::parse("$D$.$MM$.$YYYY$");
        assert_eq!(
            layout.segments(),
            &[
                Segment::Token(Token::Day),
                lit("."),
                Segment::Token(Token::Month2),
                lit("."),
                Segment::Token(Token::Year4),
            ]
        );
        assert_eq!(layout.tokens(), &[Token::Day, Token::Month2, Token::Year4]);
    }

    #[test]
    fn test_parse_literal_only() {
        let layout = Layout::parse("no tokens here");
        assert_eq!(layout.segments(), &[lit("no tokens here")]);
        assert!(layout.tokens().is_empty());

        assert!(Layout::parse("").segments().is_empty());
    }

    #[test]
    fn test_unknown_candidates_stay_literal() {
        let layout = Layout::parse("$NOTATOKEN$ $D$");
        assert_eq!(
            layout.segments(),
            &[lit("$NOTATOKEN$ "), Segment::Token(Token::Day)]
        );
    }

    #[test]
    fn test_repeated_tokens_evaluated_once() {
        let layout = Layout::parse("$D$:$MMMM$:$YYYY$, $D$");
        assert_eq!(
            layout.tokens(),
            &[Token::Day, Token::MonthFull, Token::Year4]
        );

        let mut calls = Vec::new();
        let out = layout.render_with(|t| {
            calls.push(t);
            t.as_str().trim_matches('$').to_lowercase()
        });
        assert_eq!(out, "d:mmmm:yyyy, d");
        assert_eq!(calls, vec![Token::Day, Token::MonthFull, Token::Year4]);
    }

    #[test]
    fn test_every_occurrence_replaced() {
        // The scanner sees "$a $D$" as one unknown candidate, but "$D$" was
        // found on its own elsewhere, so both occurrences are replaced.
        let layout = Layout::parse("$a $D$ / $D$");
        let out = layout.render_with(|_| "5".to_string());
        assert_eq!(out, "$a 5 / 5");
    }

    #[test]
    fn test_values_not_rescanned() {
        let layout = Layout::parse("$D$ $M$");
        let out = layout.render_with(|t| match t {
            Token::Day => "$M$".to_string(),
            _ => "3".to_string(),
        });
        assert_eq!(out, "$M$ 3");
    }
}
