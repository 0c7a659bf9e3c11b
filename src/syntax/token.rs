//! Token types shared by the lexer and the parser.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Punctuator,
    Numeric,
    Identifier,
    Keyword,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Punctuator => "Punctuator",
            TokenKind::Numeric => "Numeric",
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified lexical unit. Tokens are produced in source order and are
/// immutable once built; positions are not tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn punctuator(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Punctuator, value)
    }

    pub fn numeric(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Numeric, value)
    }

    pub fn identifier(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, value)
    }

    pub fn keyword(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Keyword, value)
    }
}
