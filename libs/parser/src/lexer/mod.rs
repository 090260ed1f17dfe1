//! # Pattern Tokenizer
//!
//! Turns one row of shorthand into tokens. Input is lower-cased first, so
//! spans refer to the lower-cased line.
//!
//! ## Scanning Order
//!
//! whitespace → `( ) [ ]` → `*`/`×` → `,`/`;` → `+` → digit runs → words.
//! Any other character is dropped.
//!
//! ## Example
//!
//! ```rust
//! use stitch_parser::lexer::{tokenize_line, TokenKind};
//!
//! let tokens = tokenize_line("(2x, v)*6");
//! assert_eq!(tokens[0].kind, TokenKind::LParen);
//! assert_eq!(tokens.len(), 8);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::dictionary;
use crate::span::Span;
use crate::stitch::LoopModifier;

// =============================================================================
// WORD CLASSIFICATION
// =============================================================================

const CONNECTORS: &[&str] = &["into", "in", "on", "from", "around", "through"];
const ORDINAL_SUFFIXES: &[&str] = &["nd", "rd", "th", "st"];
const ROW_WORDS: &[&str] = &["row", "round", "rnd", "r"];

/// What an alphabetic run turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Modifier(LoopModifier),
    /// `into`, `in`, `on`, `from`, `around`, `through`
    Connector,
    /// `nd`, `rd`, `th`, `st`
    Ordinal,
    /// `row`, `round`, `rnd`, `r`
    RowIndicator,
    Stitch,
    Unknown,
}

/// Classify a lower-cased word.
///
/// Modifiers win over connector and row words, which win over the dictionary.
pub fn classify_word(word: &str) -> WordClass {
    if let Some(modifier) = LoopModifier::from_keyword(word) {
        WordClass::Modifier(modifier)
    } else if CONNECTORS.contains(&word) {
        WordClass::Connector
    } else if ORDINAL_SUFFIXES.contains(&word) {
        WordClass::Ordinal
    } else if ROW_WORDS.contains(&word) {
        WordClass::RowIndicator
    } else if dictionary::lookup(word).is_some() {
        WordClass::Stitch
    } else {
        WordClass::Unknown
    }
}

// =============================================================================
// LEXER
// =============================================================================

/// Tokenizer for a single lower-cased line.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
    /// Set after a row word; the next digit run is its label.
    row_label_pending: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over an already lower-cased line.
    pub fn new(line: &'a str) -> Self {
        Self {
            cursor: Cursor::new(line),
            tokens: Vec::new(),
            row_label_pending: false,
        }
    }

    /// Tokenize the whole line.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.cursor.is_eof() {
            self.scan_token();
        }
        self.tokens
    }

    /// Scan a single token.
    fn scan_token(&mut self) {
        let start = self.cursor.offset();
        let c = match self.cursor.advance() {
            Some(c) => c,
            None => return,
        };

        let kind = match c {
            c if c.is_whitespace() => return,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '*' | '×' => TokenKind::Multiply,
            ',' | ';' => TokenKind::Comma,
            '+' => TokenKind::Stitch,
            '0'..='9' => return self.scan_number(start),
            c if c.is_alphabetic() => return self.scan_word(start),
            other => {
                tracing::trace!(character = %other, "dropping unknown character");
                return;
            }
        };

        self.push(kind, start);
    }

    /// Scan a digit run.
    fn scan_number(&mut self, start: usize) {
        self.cursor.advance_while(|c| c.is_ascii_digit());
        if std::mem::take(&mut self.row_label_pending) {
            return;
        }
        self.push(TokenKind::Number, start);
    }

    /// Scan an alphabetic run and classify it.
    fn scan_word(&mut self, start: usize) {
        self.cursor.advance_while(char::is_alphabetic);
        let word = self.cursor.slice_from(start);

        match classify_word(word) {
            WordClass::Modifier(_) => self.push(TokenKind::Modifier, start),
            WordClass::Stitch => self.push(TokenKind::Stitch, start),
            WordClass::RowIndicator => self.row_label_pending = true,
            WordClass::Connector | WordClass::Ordinal => self.row_label_pending = false,
            WordClass::Unknown => {
                self.row_label_pending = false;
                tracing::trace!(word, "dropping unknown word");
            }
        }
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.row_label_pending = false;
        let end = self.cursor.offset();
        let text = self.cursor.slice_from(start).to_string();
        self.tokens.push(Token::new(kind, Span::new(start, end), text));
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Tokenize one line, lower-casing it first.
pub fn tokenize_line(line: &str) -> Vec<Token> {
    let lowered = line.to_lowercase();
    Lexer::new(&lowered).tokenize()
}

/// Tokenize a whole pattern: one token list per non-blank line.
pub fn tokenize(text: &str) -> Vec<Vec<Token>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let tokens = tokenize_line(line);
            tracing::trace!(count = tokens.len(), "tokenized line");
            tokens
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<TokenKind> {
        tokenize_line(line).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_counted_stitch() {
        let tokens = tokenize_line("6x");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "6");
        assert_eq!(tokens[1].kind, TokenKind::Stitch);
        assert_eq!(tokens[1].text, "x");
        assert_eq!(tokens[1].span, Span::new(1, 2));
    }

    #[test]
    fn test_tokenize_group() {
        use TokenKind::*;
        assert_eq!(
            kinds("(2x, v)*6"),
            vec![LParen, Number, Stitch, Comma, Stitch, RParen, Multiply, Number]
        );
    }

    #[test]
    fn test_tokenize_brackets_and_unicode_multiply() {
        use TokenKind::*;
        assert_eq!(kinds("[sc; inc] × 3"), vec![LBracket, Stitch, Comma, Stitch, RBracket, Multiply, Number]);
    }

    #[test]
    fn test_tokenize_plus_is_stitch() {
        let tokens = tokenize_line("+");
        assert_eq!(tokens[0].kind, TokenKind::Stitch);
        assert_eq!(tokens[0].text, "+");
    }

    #[test]
    fn test_tokenize_lowercases() {
        let tokens = tokenize_line("6 SC");
        assert_eq!(tokens[1].text, "sc");
    }

    #[test]
    fn test_modifier_keywords() {
        use TokenKind::*;
        assert_eq!(kinds("blo 6sc flo dc"), vec![Modifier, Number, Stitch, Modifier, Stitch]);
    }

    #[test]
    fn test_connectors_and_ordinals_dropped() {
        use TokenKind::*;
        // "sc in 2nd ch from hook"
        assert_eq!(kinds("sc in 2nd ch from hook"), vec![Stitch, Number, Stitch]);
    }

    #[test]
    fn test_row_label_dropped() {
        use TokenKind::*;
        assert_eq!(kinds("Row 3: 6x"), vec![Number, Stitch]);
        assert_eq!(kinds("rnd 12 (x, v)"), vec![LParen, Stitch, Comma, Stitch, RParen]);
    }

    #[test]
    fn test_unknown_words_and_symbols_dropped() {
        use TokenKind::*;
        assert_eq!(kinds("6x -- total: !"), vec![Number, Stitch]);
        assert!(kinds("hello world").is_empty());
    }

    #[test]
    fn test_classify_word() {
        assert_eq!(classify_word("blo"), WordClass::Modifier(LoopModifier::BackLoopOnly));
        assert_eq!(classify_word("through"), WordClass::Connector);
        assert_eq!(classify_word("th"), WordClass::Ordinal);
        assert_eq!(classify_word("rnd"), WordClass::RowIndicator);
        assert_eq!(classify_word("dc"), WordClass::Stitch);
        assert_eq!(classify_word("hook"), WordClass::Unknown);
    }

    #[test]
    fn test_tokenize_skips_blank_lines() {
        let lines = tokenize("6x\n\n   \n(x, v)*6\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1][0].kind, TokenKind::LParen);
    }
}
