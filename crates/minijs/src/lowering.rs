//! One-way reinterpretation of already-parsed expression shapes.
//!
//! Both conversions either succeed completely or fail; no partially lowered node is ever
//! returned.

use crate::ast::*;
use crate::diagnostics::Position;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LoweringError {
    pub pos: Position,
    pub message: String,
}

impl LoweringError {
    fn new(pos: Position, message: impl Into<String>) -> Self {
        Self {
            pos,
            message: message.into(),
        }
    }
}

impl TryFrom<ObjectLiteral> for ObjectDestructuringPattern {
    type Error = LoweringError;

    fn try_from(literal: ObjectLiteral) -> Result<Self, Self::Error> {
        let mut fields = Vec::with_capacity(literal.fields.len());
        for field in literal.fields {
            let source = match field.key {
                ObjectKey::Identifier(name) => name,
                other => {
                    return Err(LoweringError::new(
                        other.pos(),
                        "destructuring keys must be plain identifiers",
                    ))
                }
            };
            let destination = lower_binding(*field.value.body)?;
            fields.push(PatternField {
                source,
                destination,
                pos: field.pos,
            });
        }
        Ok(ObjectDestructuringPattern {
            fields,
            pos: literal.pos,
        })
    }
}

impl ArgumentsList {
    /// Reinterprets the contents of a parenthesized group as a parameter list. `pos` spans the
    /// group including its parentheses.
    pub fn try_from_group(group: Expr, pos: Position) -> Result<Self, LoweringError> {
        let arguments = group
            .into_sequence()
            .into_iter()
            .map(lower_argument)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ArgumentsList { arguments, pos })
    }
}

fn lower_argument(item: Expr) -> Result<Argument, LoweringError> {
    match item {
        Expr::Assign(assign) => Ok(Argument {
            binding: assign.target,
            default: Some(assign.source),
            pos: assign.pos,
        }),
        other => {
            let pos = other.pos();
            let binding = lower_binding(other)?;
            Ok(Argument {
                binding,
                default: None,
                pos,
            })
        }
    }
}

fn lower_binding(value: Expr) -> Result<Binding, LoweringError> {
    match value {
        Expr::Identifier(name) => Ok(Binding::Identifier(name)),
        Expr::ObjectLiteral(literal) => Ok(Binding::ObjectDestructuringPattern(
            ObjectDestructuringPattern::try_from(literal)?,
        )),
        other => Err(LoweringError::new(
            other.pos(),
            "expected an identifier or an object pattern",
        )),
    }
}
