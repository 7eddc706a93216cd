use serde::Serialize;

use crate::diagnostics::Position;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceFile {
    pub statements: Vec<Statement>,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
    FunctionDeclaration(FunctionDeclaration),
    Expression(Expression),
}

impl Statement {
    pub fn pos(&self) -> Position {
        match self {
            Statement::VariableDeclaration(decl) => decl.pos,
            Statement::FunctionDeclaration(decl) => decl.pos,
            Statement::Expression(expr) => expr.pos,
        }
    }
}

/// Marks the root of an expression tree, as opposed to the bare sub-nodes inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expression {
    pub body: Box<Expr>,
    pub pos: Position,
}

impl Expression {
    pub fn new(body: Expr) -> Self {
        let pos = body.pos();
        Self {
            body: Box::new(body),
            pos,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableModifier {
    Var,
    Let,
    Const,
}

impl VariableModifier {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "var" => Some(VariableModifier::Var),
            "let" => Some(VariableModifier::Let),
            "const" => Some(VariableModifier::Const),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VariableModifier::Var => "var",
            VariableModifier::Let => "let",
            VariableModifier::Const => "const",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclaration {
    pub modifier: VariableModifier,
    pub name: Identifier,
    pub initializer: Option<Expression>,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDeclaration {
    pub name: Identifier,
    pub parameters: Vec<Identifier>,
    pub body: Vec<Statement>,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Expr {
    Identifier(Identifier),
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
    FieldAccess(FieldAccess),
    IndexedAccess(IndexedAccess),
    Call(Call),
    Sequential(Sequential),
    ObjectLiteral(ObjectLiteral),
    Assign(Assign),
    ArrowFunction(ArrowFunction),
}

impl Expr {
    pub fn pos(&self) -> Position {
        match self {
            Expr::Identifier(node) => node.pos,
            Expr::StringLiteral(node) => node.pos,
            Expr::NumberLiteral(node) => node.pos,
            Expr::FieldAccess(node) => node.pos,
            Expr::IndexedAccess(node) => node.pos,
            Expr::Call(node) => node.pos,
            Expr::Sequential(node) => node.pos,
            Expr::ObjectLiteral(node) => node.pos,
            Expr::Assign(node) => node.pos,
            Expr::ArrowFunction(node) => node.pos,
        }
    }

    /// Flattens a right-associated `Sequential` chain into its elements, in source order. Any
    /// other node is a sequence of one.
    pub fn into_sequence(self) -> Vec<Expr> {
        let mut items = Vec::new();
        let mut current = self;
        loop {
            match current {
                Expr::Sequential(Sequential { left, right, .. }) => {
                    items.push(*left);
                    current = *right;
                }
                other => {
                    items.push(other);
                    return items;
                }
            }
        }
    }

    pub fn sequence(&self) -> Vec<&Expr> {
        let mut items = Vec::new();
        let mut current = self;
        while let Expr::Sequential(Sequential { left, right, .. }) = current {
            items.push(left.as_ref());
            current = right.as_ref();
        }
        items.push(current);
        items
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub name: String,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringLiteral {
    pub value: String,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberLiteral {
    /// Literal text, with the leading-dot form normalized (`.5` is stored as `0.5`).
    pub value: String,
    pub pos: Position,
}

impl NumberLiteral {
    pub fn as_f64(&self) -> f64 {
        // The scanner only produces `\d+(\.\d+)?`, which always parses.
        self.value.parse().unwrap_or(f64::NAN)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldAccess {
    pub host: Box<Expr>,
    pub field: String,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedAccess {
    pub host: Box<Expr>,
    pub index: Expression,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Call {
    pub host: Box<Expr>,
    pub arguments: Vec<Expression>,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sequential {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectLiteral {
    pub fields: Vec<ObjectField>,
    pub pos: Position,
}

/// One `key: value` entry. Shorthand `{ a }` entries carry an identifier reference as value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectField {
    pub key: ObjectKey,
    pub value: Expression,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectKey {
    Identifier(Identifier),
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
    Computed(Expression),
}

impl ObjectKey {
    pub fn pos(&self) -> Position {
        match self {
            ObjectKey::Identifier(node) => node.pos,
            ObjectKey::StringLiteral(node) => node.pos,
            ObjectKey::NumberLiteral(node) => node.pos,
            ObjectKey::Computed(node) => node.pos,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectDestructuringPattern {
    pub fields: Vec<PatternField>,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternField {
    pub source: Identifier,
    pub destination: Binding,
    pub pos: Position,
}

/// Something a value can be bound to: a plain name or a destructuring pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Binding {
    Identifier(Identifier),
    ObjectDestructuringPattern(ObjectDestructuringPattern),
}

impl Binding {
    pub fn pos(&self) -> Position {
        match self {
            Binding::Identifier(node) => node.pos,
            Binding::ObjectDestructuringPattern(node) => node.pos,
        }
    }
}

/// A default-value binding (`target = source`) in parameter and destructuring position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assign {
    pub target: Binding,
    pub source: Expression,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgumentsList {
    pub arguments: Vec<Argument>,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    pub binding: Binding,
    pub default: Option<Expression>,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrowFunction {
    pub arguments: ArgumentsList,
    pub body: ArrowBody,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArrowBody {
    Expression(Expression),
    Block(Block),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub pos: Position,
}
