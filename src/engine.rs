//! The compile pipeline: tokenize, parse, transform, generate.
//!
//! Each call is independent and reentrant; no stage retains state between
//! calls, so concurrent callers need no coordination. The first error from
//! any stage propagates unchanged.

use crate::ast::Node;
use crate::codegen::generate;
use crate::diagnostics::CompileError;
use crate::syntax::{parse, tokenize};
use crate::transform::transform;

/// Compiles source text into normalized source text.
pub fn compile(input: &str) -> Result<String, CompileError> {
    let tokens = tokenize(input)?;
    let ast = parse(&tokens)?;
    let rewritten = transform(&ast)?;
    generate(&Node::Program(rewritten))
}
