//! Varlet lexer - a single left-to-right scan from source text to tokens.
//!
//! At each cursor position the classifiers are tried in a fixed priority
//! order: punctuator, whitespace, digit run, letter run. The punctuator check
//! comes first so symbols are never absorbed into an identifier or number
//! run. A character matching no classifier fails the whole scan.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostics::{to_error_source, CompileError, ErrorContext};
use crate::syntax::token::{Token, TokenKind};

// Classifier sets. Module-scoped and immutable; nothing is compiled per
// call. The punctuator class covers both the ASCII symbols and their
// full-width counterparts.
static PUNCTUATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[`~!@#$%^&*()_+=<>?:"{}|,./;'\\\[\]·！￥…（）—《》？：“”【】、；‘’，。-]"#)
        .unwrap()
});
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s").unwrap());
static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());
static LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]").unwrap());
// Anchored: a word merely containing a keyword is an identifier.
static KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(function|var|return|let|const|if|for)$").unwrap());

fn matches_class(classifier: &Regex, ch: char) -> bool {
    let mut buf = [0u8; 4];
    classifier.is_match(ch.encode_utf8(&mut buf))
}

/// Converts source text into an ordered token sequence.
///
/// Fails with a spanned [`CompileError::UnknownCharacter`] when a character
/// matches none of the classifier sets.
pub fn tokenize(input: &str) -> Result<Vec<Token>, CompileError> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while cursor < chars.len() {
        let (offset, ch) = chars[cursor];

        if matches_class(&PUNCTUATOR, ch) {
            let mut value = String::from(ch);
            // `=` followed by `>` is the one two-character punctuator: the
            // arrow-function marker.
            if ch == '=' && matches!(chars.get(cursor + 1), Some((_, '>'))) {
                value.push('>');
                cursor += 1;
            }
            cursor += 1;
            tokens.push(Token::new(TokenKind::Punctuator, value));
            continue;
        }

        if matches_class(&WHITESPACE, ch) {
            cursor += 1;
            continue;
        }

        if matches_class(&NUMERIC, ch) {
            let mut value = String::new();
            while let Some(&(_, c)) = chars.get(cursor) {
                if !matches_class(&NUMERIC, c) {
                    break;
                }
                value.push(c);
                cursor += 1;
            }
            tokens.push(Token::new(TokenKind::Numeric, value));
            continue;
        }

        if matches_class(&LETTER, ch) {
            let mut value = String::new();
            while let Some(&(_, c)) = chars.get(cursor) {
                if !matches_class(&LETTER, c) {
                    break;
                }
                value.push(c);
                cursor += 1;
            }
            let kind = if KEYWORD.is_match(&value) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            tokens.push(Token::new(kind, value));
            continue;
        }

        return Err(CompileError::UnknownCharacter {
            character: ch,
            ctx: ErrorContext::with_all(
                to_error_source(input),
                (offset, ch.len_utf8()).into(),
                "only punctuation, whitespace, digits, and ASCII letters are recognized",
            ),
        });
    }

    Ok(tokens)
}
