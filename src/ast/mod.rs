//! AST module for the Varlet pipeline.
//!
//! The node set is closed: every tree the parser builds, the transformer
//! rewrites, or the code generator renders is made of exactly these variants.
//! Adding a variant breaks every consumer at compile time, which is the
//! point - the stages match exhaustively instead of checking type tags at
//! runtime.
//!
//! The serde form is internally tagged with `type`, so a serialized program
//! reads like the ESTree-style objects this grammar is modeled on:
//! `{"type":"Program","body":[...],"sourceType":"script"}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in the abstract syntax tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Program(Program),
    VariableDeclaration(VariableDeclaration),
    VariableDeclarator(VariableDeclarator),
    Identifier(Identifier),
    Literal(Literal),
    BinaryExpression(BinaryExpression),
    AssignmentExpression(AssignmentExpression),
}

impl Node {
    /// Returns the ESTree-style tag for this node, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Program(_) => "Program",
            Node::VariableDeclaration(_) => "VariableDeclaration",
            Node::VariableDeclarator(_) => "VariableDeclarator",
            Node::Identifier(_) => "Identifier",
            Node::Literal(_) => "Literal",
            Node::BinaryExpression(_) => "BinaryExpression",
            Node::AssignmentExpression(_) => "AssignmentExpression",
        }
    }
}

/// The root of a parsed or rewritten tree. `body` preserves statement order
/// as encountered in the token stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub body: Vec<Node>,
    pub source_type: SourceType,
}

impl Program {
    pub fn new(body: Vec<Node>) -> Self {
        Self {
            body,
            source_type: SourceType::Script,
        }
    }
}

/// Constant tag carried by every program root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Script,
}

/// A `var`/`let`/`const` statement. The grammar never produces more than one
/// declarator per declaration; multi-declarator statements are not
/// representable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub declarations: Vec<VariableDeclarator>,
    pub kind: DeclarationKind,
}

/// The keyword a declaration was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
}

impl DeclarationKind {
    /// Maps an exact keyword spelling to its kind. Spellings are
    /// case-sensitive here even though the lexer classifies keywords
    /// case-insensitively: `VAR` is a keyword token, but not a declaration.
    pub fn from_keyword(value: &str) -> Option<Self> {
        match value {
            "var" => Some(DeclarationKind::Var),
            "let" => Some(DeclarationKind::Let),
            "const" => Some(DeclarationKind::Const),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Var => "var",
            DeclarationKind::Let => "let",
            DeclarationKind::Const => "const",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One `id = init` binding. In well-formed programs `init` is a `Literal` or
/// `Identifier`; the parser attaches whatever its initializer walk returned,
/// and `None` when the declaration carries no initializer at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub id: Identifier,
    pub init: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

/// A numeric literal. `row` is the original spelling from the source text;
/// `value` is what it parses to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub value: f64,
    pub row: String,
}

/// Operator shell produced when an arithmetic punctuator appears at
/// statement position. Deliberately incomplete - no operands are captured -
/// and never consumed by the downstream stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
}

impl BinaryOperator {
    pub fn from_symbol(value: &str) -> Option<Self> {
        match value {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Sub),
            "*" => Some(BinaryOperator::Mul),
            "/" => Some(BinaryOperator::Div),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operator shell used only as a lookahead signal inside declaration
/// parsing; never attached to a tree the parser returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentExpression {
    pub operator: AssignmentOperator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentOperator {
    #[serde(rename = "=")]
    Assign,
}

#[cfg(test)]
mod ast_tests {
    use super::*;

    #[test]
    fn test_declaration_kind_round_trip() {
        for (word, kind) in [
            ("var", DeclarationKind::Var),
            ("let", DeclarationKind::Let),
            ("const", DeclarationKind::Const),
        ] {
            assert_eq!(DeclarationKind::from_keyword(word), Some(kind));
            assert_eq!(kind.as_str(), word);
        }
        assert_eq!(DeclarationKind::from_keyword("VAR"), None);
        assert_eq!(DeclarationKind::from_keyword("if"), None);
    }

    #[test]
    fn test_type_name_matches_estree_tags() {
        let node = Node::Program(Program::new(vec![]));
        assert_eq!(node.type_name(), "Program");
        let node = Node::BinaryExpression(BinaryExpression {
            operator: BinaryOperator::Add,
        });
        assert_eq!(node.type_name(), "BinaryExpression");
    }
}
