//! Varlet: a single-pass source-to-source compiler for a tiny subset of a
//! C-like scripting language.
//!
//! The pipeline has four stages: [`tokenize`] turns source text into
//! tokens, [`parse`] builds an AST by recursive descent, [`transform`]
//! rewrites the tree so every declaration is spelled `var`, and
//! [`generate`] prints the rewritten tree back to text. [`compile`] is
//! their composition:
//!
//! ```rust
//! assert_eq!(varlet::compile("let x = 1").unwrap(), "var x = 1");
//! ```
//!
//! The whole crate is a pure, synchronous, in-memory library: no I/O, no
//! CLI, no state between calls.

pub use crate::diagnostics::{CompileError, ErrorContext, ErrorType};

pub mod ast;
pub mod codegen;
pub mod diagnostics;
pub mod engine;
pub mod syntax;
pub mod transform;
pub mod traverse;

pub use crate::codegen::generate;
pub use crate::engine::compile;
pub use crate::syntax::{parse, tokenize, Token, TokenKind};
pub use crate::transform::transform;
pub use crate::traverse::{traverse, Parent, Visitor};
