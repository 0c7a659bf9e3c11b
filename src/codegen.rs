//! Code generation: renders an AST node back into source text.
//!
//! Pure structural recursion with no state. Statements join with a newline;
//! a declaration renders its kind and its single declarator; a declarator
//! renders `id = init`. The operator shells are not renderable, and a
//! declarator without an initializer fails with a clear error instead of
//! emitting a malformed fragment.

use crate::ast::{Node, VariableDeclarator};
use crate::diagnostics::{CompileError, ErrorContext};

/// Renders `node` as source text.
pub fn generate(node: &Node) -> Result<String, CompileError> {
    match node {
        Node::Program(program) => {
            let statements = program
                .body
                .iter()
                .map(generate)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(statements.join("\n"))
        }

        Node::VariableDeclaration(declaration) => {
            let declarator = declaration.declarations.first().ok_or_else(|| {
                CompileError::EmptyDeclaration {
                    ctx: ErrorContext::with_help(
                        "a declaration must carry exactly one declarator to be printable",
                    ),
                }
            })?;
            Ok(format!(
                "{} {}",
                declaration.kind,
                generate_declarator(declarator)?
            ))
        }

        Node::VariableDeclarator(declarator) => generate_declarator(declarator),

        Node::Identifier(identifier) => Ok(identifier.name.clone()),

        Node::Literal(literal) => Ok(literal.value.to_string()),

        Node::BinaryExpression(_) | Node::AssignmentExpression(_) => {
            Err(CompileError::UnrenderableNode {
                node_type: node.type_name(),
                ctx: ErrorContext::with_help(
                    "operator shells carry no operands and have no source form",
                ),
            })
        }
    }
}

fn generate_declarator(declarator: &VariableDeclarator) -> Result<String, CompileError> {
    let init = declarator.init.as_deref().ok_or_else(|| {
        CompileError::MissingInitializer {
            name: declarator.id.name.clone(),
            ctx: ErrorContext::with_help(
                "initializer-less declarations parse but cannot be printed; give the declarator a right-hand side",
            ),
        }
    })?;
    Ok(format!("{} = {}", declarator.id.name, generate(init)?))
}
