//! The AST-to-AST rewrite: every declaration kind is normalized to `var`.
//!
//! The transformer never mutates its input. It runs the traverser with a
//! single visitor whose only interest is `VariableDeclaration`; the visitor
//! owns the body of the rewritten program, so each replacement is appended
//! into exactly one destination container. Statements with no registered
//! rewrite (a stray identifier or literal at top level) simply do not appear
//! in the new program.

use crate::ast::{DeclarationKind, Node, Program, VariableDeclaration};
use crate::diagnostics::CompileError;
use crate::traverse::{traverse, Parent, Visitor};

/// Visitor that collects normalized declarations into the new program body.
struct DeclarationNormalizer {
    rewritten: Vec<Node>,
}

impl Visitor for DeclarationNormalizer {
    fn visit_variable_declaration(&mut self, node: &VariableDeclaration, _parent: Parent<'_>) {
        self.rewritten
            .push(Node::VariableDeclaration(VariableDeclaration {
                declarations: node.declarations.clone(),
                kind: DeclarationKind::Var,
            }));
    }
}

/// Builds a new program in which every declaration is spelled `var`.
///
/// Fails only if the underlying traversal fails (an operator shell in the
/// statement list); the rewrite itself has no failure mode.
pub fn transform(program: &Program) -> Result<Program, CompileError> {
    let mut normalizer = DeclarationNormalizer {
        rewritten: Vec::new(),
    };
    traverse(program, &mut normalizer)?;
    Ok(Program::new(normalizer.rewritten))
}

#[cfg(test)]
mod transform_tests {
    use super::*;
    use crate::syntax::{parse, tokenize};

    fn program_of(source: &str) -> Program {
        parse(&tokenize(source).unwrap()).unwrap()
    }

    #[test]
    fn test_kind_is_forced_to_var() {
        for source in ["var x = 1", "let x = 1", "const x = 1"] {
            let rewritten = transform(&program_of(source)).unwrap();
            assert_eq!(rewritten.body.len(), 1, "{source}");
            let Node::VariableDeclaration(declaration) = &rewritten.body[0] else {
                panic!("expected a declaration for {source}");
            };
            assert_eq!(declaration.kind, DeclarationKind::Var, "{source}");
        }
    }

    #[test]
    fn test_declarations_are_carried_over_unchanged() {
        let original = program_of("let x = 1");
        let rewritten = transform(&original).unwrap();

        let Node::VariableDeclaration(before) = &original.body[0] else {
            panic!("expected a declaration");
        };
        let Node::VariableDeclaration(after) = &rewritten.body[0] else {
            panic!("expected a declaration");
        };
        assert_eq!(before.declarations, after.declarations);
    }

    #[test]
    fn test_rewrite_is_deterministic() {
        let original = program_of("let a = 1 const b = 2");
        let first = transform(&original).unwrap();
        let second = transform(&original).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unregistered_statements_are_dropped() {
        // A lone identifier parses but has no rewrite; the new program is
        // empty.
        let rewritten = transform(&program_of("x")).unwrap();
        assert!(rewritten.body.is_empty());
    }
}
