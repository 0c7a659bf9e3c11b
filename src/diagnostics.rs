//! Varlet diagnostics - the unified, `miette`-based error type.
//!
//! Every failure raised by any stage of the pipeline (lexing, parsing,
//! traversal, code generation) is a variant of [`CompileError`]. The pipeline
//! is strictly fail-fast: the first error unwinds to the caller with no
//! retry, no partial output, and no resynchronization.
//!
//! Lex errors carry the offending source text and a span pointing at the
//! unrecognized character. Later stages operate on tokens and nodes, which
//! deliberately track no positions, so their errors carry a help message but
//! no span.

use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode, SourceSpan};
use thiserror::Error;

use crate::syntax::token::TokenKind;

// Type alias for clarity and brevity
pub type SourceArc = Arc<NamedSource<String>>;

/// Type-safe error classification corresponding to the pipeline stage that
/// raised the error. Replaces fragile string matching in test code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// An input character matched none of the lexer's classifier sets.
    Lex,
    /// The grammar could not account for a token.
    Parse,
    /// Traversal reached a node kind it cannot descend into.
    Traverse,
    /// Code generation reached a node it cannot render.
    CodeGen,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Lex => "Lex",
            ErrorType::Parse => "Parse",
            ErrorType::Traverse => "Traverse",
            ErrorType::CodeGen => "CodeGen",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimal, composable error context for diagnostics.
#[derive(Debug, Default)]
pub struct ErrorContext {
    /// The source text the error points into (if any).
    pub source: Option<SourceArc>,
    /// The primary span for this error (if any).
    pub span: Option<SourceSpan>,
    /// An optional help message.
    pub help: Option<String>,
}

impl ErrorContext {
    /// Returns an empty error context (no source, span, or help).
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a context with only a help message.
    pub fn with_help(help: impl Into<String>) -> Self {
        Self {
            source: None,
            span: None,
            help: Some(help.into()),
        }
    }

    /// Creates a context with both source and span.
    pub fn with_source_and_span(source: SourceArc, span: SourceSpan) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            help: None,
        }
    }

    /// Creates a context with source, span, and help message.
    pub fn with_all(source: SourceArc, span: SourceSpan, help: impl Into<String>) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            help: Some(help.into()),
        }
    }
}

/// Unified error type for all Varlet pipeline failure modes.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Lex error: unrecognized character '{character}'")]
    UnknownCharacter { character: char, ctx: ErrorContext },

    #[error("Parse error: invalid numeric literal '{value}'")]
    InvalidNumeric { value: String, ctx: ErrorContext },

    #[error("Parse error: unhandled {kind} token '{value}'")]
    UnhandledToken {
        kind: TokenKind,
        value: String,
        ctx: ErrorContext,
    },

    #[error("Parse error: unsupported keyword '{value}'")]
    UnsupportedKeyword { value: String, ctx: ErrorContext },

    #[error("Parse error: expected an identifier in declaration, found {found}")]
    ExpectedIdentifier {
        found: &'static str,
        ctx: ErrorContext,
    },

    #[error("Parse error: unexpected end of input")]
    UnexpectedEndOfInput { ctx: ErrorContext },

    #[error("Traverse error: cannot traverse {node_type} node")]
    UntraversableNode {
        node_type: &'static str,
        ctx: ErrorContext,
    },

    #[error("Code generation error: cannot render {node_type} node")]
    UnrenderableNode {
        node_type: &'static str,
        ctx: ErrorContext,
    },

    #[error("Code generation error: declarator '{name}' has no initializer")]
    MissingInitializer { name: String, ctx: ErrorContext },

    #[error("Code generation error: declaration has no declarators")]
    EmptyDeclaration { ctx: ErrorContext },
}

impl CompileError {
    fn get_ctx(&self) -> &ErrorContext {
        match self {
            CompileError::UnknownCharacter { ctx, .. } => ctx,
            CompileError::InvalidNumeric { ctx, .. } => ctx,
            CompileError::UnhandledToken { ctx, .. } => ctx,
            CompileError::UnsupportedKeyword { ctx, .. } => ctx,
            CompileError::ExpectedIdentifier { ctx, .. } => ctx,
            CompileError::UnexpectedEndOfInput { ctx, .. } => ctx,
            CompileError::UntraversableNode { ctx, .. } => ctx,
            CompileError::UnrenderableNode { ctx, .. } => ctx,
            CompileError::MissingInitializer { ctx, .. } => ctx,
            CompileError::EmptyDeclaration { ctx, .. } => ctx,
        }
    }

    /// Returns the stage classification for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            CompileError::UnknownCharacter { .. } => ErrorType::Lex,
            CompileError::InvalidNumeric { .. }
            | CompileError::UnhandledToken { .. }
            | CompileError::UnsupportedKeyword { .. }
            | CompileError::ExpectedIdentifier { .. }
            | CompileError::UnexpectedEndOfInput { .. } => ErrorType::Parse,
            CompileError::UntraversableNode { .. } => ErrorType::Traverse,
            CompileError::UnrenderableNode { .. }
            | CompileError::MissingInitializer { .. }
            | CompileError::EmptyDeclaration { .. } => ErrorType::CodeGen,
        }
    }

    fn primary_label(&self) -> &'static str {
        match self {
            CompileError::UnknownCharacter { .. } => "unrecognized character",
            CompileError::InvalidNumeric { .. } => "invalid literal",
            CompileError::UnhandledToken { .. } => "unhandled token",
            CompileError::UnsupportedKeyword { .. } => "unsupported keyword",
            CompileError::ExpectedIdentifier { .. } => "expected identifier",
            CompileError::UnexpectedEndOfInput { .. } => "input ended here",
            CompileError::UntraversableNode { .. } => "untraversable node",
            CompileError::UnrenderableNode { .. } => "unrenderable node",
            CompileError::MissingInitializer { .. } => "missing initializer",
            CompileError::EmptyDeclaration { .. } => "empty declaration",
        }
    }
}

impl Diagnostic for CompileError {
    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.get_ctx()
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.get_ctx()
            .source
            .as_ref()
            .map(|s| s.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.get_ctx().span?;
        let label = LabeledSpan::new_with_span(Some(self.primary_label().to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Converts a source string into an `Arc<NamedSource<String>>` for use in
/// error contexts.
pub fn to_error_source<S: AsRef<str>>(source: S) -> SourceArc {
    Arc::new(NamedSource::new("source", source.as_ref().to_string()))
}
