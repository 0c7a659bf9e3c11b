//! Depth-first, visitor-driven traversal over the AST.
//!
//! A [`Visitor`] is the typed rendering of a node-type-to-callback map:
//! one default-no-op method per node kind. Dispatch is parent-first - the
//! callback for a node runs before the walker descends into its children.
//!
//! The walker knows how to descend into every node kind except
//! [`BinaryExpression`]: its shell captures no operands, so reaching one
//! mid-tree is a fatal [`CompileError::UntraversableNode`]. The callback
//! still fires first, preserving the dispatch-then-descend order.

use crate::ast::{
    AssignmentExpression, BinaryExpression, Identifier, Literal, Node, Program,
    VariableDeclaration, VariableDeclarator,
};
use crate::diagnostics::{CompileError, ErrorContext};

/// Reference to the node that owns the one currently being visited. Only
/// three node kinds can own children in this grammar.
#[derive(Debug, Clone, Copy)]
pub enum Parent<'a> {
    Program(&'a Program),
    Declaration(&'a VariableDeclaration),
    Declarator(&'a VariableDeclarator),
}

/// Callbacks invoked as the walker reaches each node, parent-first. All
/// methods default to no-ops; implement only the kinds of interest.
pub trait Visitor {
    /// The root program has no parent; a nested program node reports the
    /// node that contains it.
    fn visit_program(&mut self, _node: &Program, _parent: Option<Parent<'_>>) {}
    fn visit_variable_declaration(&mut self, _node: &VariableDeclaration, _parent: Parent<'_>) {}
    fn visit_variable_declarator(&mut self, _node: &VariableDeclarator, _parent: Parent<'_>) {}
    fn visit_identifier(&mut self, _node: &Identifier, _parent: Parent<'_>) {}
    fn visit_literal(&mut self, _node: &Literal, _parent: Parent<'_>) {}
    fn visit_binary_expression(&mut self, _node: &BinaryExpression, _parent: Parent<'_>) {}
    fn visit_assignment_expression(&mut self, _node: &AssignmentExpression, _parent: Parent<'_>) {}
}

/// Walks the program depth-first, dispatching to `visitor` before each
/// descent.
pub fn traverse<V: Visitor>(program: &Program, visitor: &mut V) -> Result<(), CompileError> {
    visitor.visit_program(program, None);
    for statement in &program.body {
        traverse_node(statement, Parent::Program(program), visitor)?;
    }
    Ok(())
}

fn traverse_node<'a, V: Visitor>(
    node: &'a Node,
    parent: Parent<'a>,
    visitor: &mut V,
) -> Result<(), CompileError> {
    match node {
        Node::Program(program) => {
            visitor.visit_program(program, Some(parent));
            for statement in &program.body {
                traverse_node(statement, Parent::Program(program), visitor)?;
            }
            Ok(())
        }

        Node::VariableDeclaration(declaration) => {
            visitor.visit_variable_declaration(declaration, parent);
            for declarator in &declaration.declarations {
                traverse_declarator(declarator, Parent::Declaration(declaration), visitor)?;
            }
            Ok(())
        }

        Node::VariableDeclarator(declarator) => traverse_declarator(declarator, parent, visitor),

        Node::Identifier(identifier) => {
            visitor.visit_identifier(identifier, parent);
            Ok(())
        }

        Node::Literal(literal) => {
            visitor.visit_literal(literal, parent);
            Ok(())
        }

        // The assignment shell captures no right-hand operand, so there is
        // nothing to descend into.
        Node::AssignmentExpression(assignment) => {
            visitor.visit_assignment_expression(assignment, parent);
            Ok(())
        }

        Node::BinaryExpression(binary) => {
            visitor.visit_binary_expression(binary, parent);
            Err(CompileError::UntraversableNode {
                node_type: node.type_name(),
                ctx: ErrorContext::with_help(
                    "binary expression shells carry no operands and cannot appear in a traversable tree",
                ),
            })
        }
    }
}

fn traverse_declarator<'a, V: Visitor>(
    declarator: &'a VariableDeclarator,
    parent: Parent<'a>,
    visitor: &mut V,
) -> Result<(), CompileError> {
    visitor.visit_variable_declarator(declarator, parent);
    if let Some(init) = &declarator.init {
        traverse_node(init, Parent::Declarator(declarator), visitor)?;
    }
    Ok(())
}
