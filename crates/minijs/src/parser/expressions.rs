use crate::ast::*;
use crate::diagnostics::Position;
use crate::error::ParseResult;
use crate::lexer::{Token, TokenKind};

use super::Parser;

/// How an expression relates to the list it sits in.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct ExprMode {
    /// Leave a `,` for the caller instead of building a `Sequential` node. Set for call
    /// arguments and object literal values.
    pub stop_on_list: bool,
    /// Accept `name = value` as a default-value binding. Only set directly inside a
    /// parenthesized group, which may turn out to be a parameter list.
    pub allow_default: bool,
}

impl ExprMode {
    const LIST_ITEM: ExprMode = ExprMode {
        stop_on_list: true,
        allow_default: false,
    };

    const GROUP: ExprMode = ExprMode {
        stop_on_list: false,
        allow_default: true,
    };

    fn value(self) -> ExprMode {
        ExprMode {
            allow_default: false,
            ..self
        }
    }
}

impl Parser {
    /// Parses an expression whose span covers everything consumed for it, including the
    /// parentheses around a bare group.
    pub(super) fn parse_expression(&mut self, mode: ExprMode) -> ParseResult<Expression> {
        let start = self.cursor;
        let body = self.parse_expr(mode)?;
        Ok(Expression {
            body: Box::new(body),
            pos: self.span_from(start),
        })
    }

    fn parse_expr(&mut self, mode: ExprMode) -> ParseResult<Expr> {
        self.enter_nesting()?;
        let expr = self.parse_primary(mode);
        self.leave_nesting();
        expr
    }

    fn parse_primary(&mut self, mode: ExprMode) -> ParseResult<Expr> {
        let token = self.lookahead()?;
        let start = token.pos.offset;
        match token.kind {
            TokenKind::StringLiteral => {
                self.advance(&token);
                let node = Expr::StringLiteral(StringLiteral {
                    value: token.text,
                    pos: token.pos,
                });
                self.parse_next(node, start, mode)
            }
            TokenKind::NumberLiteral => {
                self.advance(&token);
                let node = Expr::NumberLiteral(NumberLiteral {
                    value: token.text,
                    pos: token.pos,
                });
                self.parse_next(node, start, mode)
            }
            TokenKind::Identifier => {
                self.advance(&token);
                let node = Expr::Identifier(Identifier {
                    name: token.text,
                    pos: token.pos,
                });
                self.parse_next(node, start, mode)
            }
            TokenKind::CurlyBracketLeft => {
                let node = self.parse_object_literal()?;
                self.parse_next(node, start, mode)
            }
            TokenKind::RoundBracketLeft => self.parse_group(mode),
            _ => Err(self.unexpected(&token, "expected an expression")),
        }
    }

    /// Extends `node` with field accesses, index accesses, calls and sequence commas until a
    /// statement delimiter or closing bracket, which is left for the caller. Every node built
    /// here spans from `start`, the first character of the chain, which lies before `node`
    /// when the chain opened with a parenthesized group.
    fn parse_next(&mut self, node: Expr, start: usize, mode: ExprMode) -> ParseResult<Expr> {
        let mut node = node;
        loop {
            let Some(token) = self.peek()? else {
                return Ok(node);
            };
            node = match token.kind {
                kind if kind == TokenKind::StatementDelimiter || kind.is_closing_bracket() => {
                    return Ok(node);
                }
                TokenKind::ListDelimiter => {
                    if mode.stop_on_list {
                        return Ok(node);
                    }
                    self.advance(&token);
                    let right = self.parse_expr(mode)?;
                    return Ok(Expr::Sequential(Sequential {
                        left: Box::new(node),
                        right: Box::new(right),
                        pos: self.span_from(start),
                    }));
                }
                TokenKind::FieldAccess => {
                    self.advance(&token);
                    Expr::FieldAccess(FieldAccess {
                        host: Box::new(node),
                        field: token.text,
                        pos: self.span_from(start),
                    })
                }
                TokenKind::SquareBracketLeft => {
                    self.advance(&token);
                    let index = self.parse_expression(ExprMode::default())?;
                    self.expect(TokenKind::SquareBracketRight, "expected `]` after index")?;
                    Expr::IndexedAccess(IndexedAccess {
                        host: Box::new(node),
                        index,
                        pos: self.span_from(start),
                    })
                }
                TokenKind::RoundBracketLeft => {
                    self.advance(&token);
                    let arguments = self.parse_call_arguments()?;
                    Expr::Call(Call {
                        host: Box::new(node),
                        arguments,
                        pos: self.span_from(start),
                    })
                }
                TokenKind::Assign if mode.allow_default => match node {
                    Expr::Identifier(name) => {
                        self.advance(&token);
                        let source = self.parse_expression(ExprMode::LIST_ITEM)?;
                        Expr::Assign(Assign {
                            target: Binding::Identifier(name),
                            source,
                            pos: self.span_from(start),
                        })
                    }
                    _ => {
                        return Err(
                            self.unexpected(&token, "only a plain name can take a default value")
                        )
                    }
                },
                _ => {
                    return Err(self.unexpected(
                        &token,
                        "expected `;`, `,` or a closing bracket",
                    ))
                }
            };
        }
    }

    /// Arguments after a call's `(`, through the closing `)`.
    fn parse_call_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        let mut arguments = Vec::new();
        if self.consume_if(TokenKind::RoundBracketRight)?.is_some() {
            return Ok(arguments);
        }
        loop {
            arguments.push(self.parse_expression(ExprMode::LIST_ITEM)?);
            let token = self.next()?;
            match token.kind {
                TokenKind::ListDelimiter => continue,
                TokenKind::RoundBracketRight => return Ok(arguments),
                _ => return Err(self.unexpected(&token, "expected `,` or `)` in call arguments")),
            }
        }
    }

    /// `{ field, ... }`, lowered into `pattern = source` when the literal is followed by `=`.
    fn parse_object_literal(&mut self) -> ParseResult<Expr> {
        let open = self.expect(TokenKind::CurlyBracketLeft, "expected `{`")?;
        let start = open.pos.offset;
        let mut fields = Vec::new();
        while self.consume_if(TokenKind::CurlyBracketRight)?.is_none() {
            fields.push(self.parse_object_field()?);
            let token = self.lookahead()?;
            match token.kind {
                TokenKind::ListDelimiter => self.advance(&token),
                TokenKind::CurlyBracketRight => {}
                _ => return Err(self.unexpected(&token, "expected `,` or `}` in object literal")),
            }
        }
        let literal = ObjectLiteral {
            fields,
            pos: self.span_from(start),
        };

        if self.consume_if(TokenKind::Assign)?.is_none() {
            return Ok(Expr::ObjectLiteral(literal));
        }
        let pattern = ObjectDestructuringPattern::try_from(literal)
            .map_err(|err| self.lowering_failed(err))?;
        let source = self.parse_expression(ExprMode::LIST_ITEM)?;
        Ok(Expr::Assign(Assign {
            target: Binding::ObjectDestructuringPattern(pattern),
            source,
            pos: self.span_from(start),
        }))
    }

    fn parse_object_field(&mut self) -> ParseResult<ObjectField> {
        let token = self.next()?;
        let start = token.pos.offset;
        let key = match token.kind {
            TokenKind::SquareBracketLeft => {
                let key = self.parse_expression(ExprMode::default())?;
                self.expect(TokenKind::SquareBracketRight, "expected `]` after computed key")?;
                ObjectKey::Computed(key)
            }
            TokenKind::Identifier => ObjectKey::Identifier(Identifier {
                name: token.text,
                pos: token.pos,
            }),
            TokenKind::StringLiteral => ObjectKey::StringLiteral(StringLiteral {
                value: token.text,
                pos: token.pos,
            }),
            TokenKind::NumberLiteral => ObjectKey::NumberLiteral(NumberLiteral {
                value: token.text,
                pos: token.pos,
            }),
            _ => return Err(self.unexpected(&token, "expected a property key")),
        };

        if let ObjectKey::Identifier(name) = &key {
            let next = self.lookahead()?;
            if matches!(
                next.kind,
                TokenKind::ListDelimiter | TokenKind::CurlyBracketRight
            ) {
                let value = Expression::new(Expr::Identifier(name.clone()));
                return Ok(ObjectField {
                    key,
                    value,
                    pos: self.span_from(start),
                });
            }
        }

        self.expect(TokenKind::Colon, "expected `:` after property key")?;
        let value = self.parse_expression(ExprMode::LIST_ITEM)?;
        Ok(ObjectField {
            key,
            value,
            pos: self.span_from(start),
        })
    }

    /// `( expr )`, or an arrow function when the group is followed by `=>`.
    fn parse_group(&mut self, mode: ExprMode) -> ParseResult<Expr> {
        let open = self.expect(TokenKind::RoundBracketLeft, "expected `(`")?;
        let start = open.pos.offset;

        if let Some(close) = self.consume_if(TokenKind::RoundBracketRight)? {
            let arrow = self.lookahead()?;
            if arrow.kind != TokenKind::Arrow {
                return Err(self.unexpected(&arrow, "expected `=>` after empty parameter list"));
            }
            let arguments = ArgumentsList {
                arguments: Vec::new(),
                pos: Position::between(start, close.pos.end()),
            };
            return self.parse_arrow_function(arguments, arrow, mode);
        }

        let inner = self.parse_expr(ExprMode::GROUP)?;
        let close = self.expect(TokenKind::RoundBracketRight, "expected `)`")?;

        match self.peek()? {
            Some(arrow) if arrow.kind == TokenKind::Arrow => {
                let arguments =
                    ArgumentsList::try_from_group(inner, Position::between(start, close.pos.end()))
                        .map_err(|err| self.lowering_failed(err))?;
                self.parse_arrow_function(arguments, arrow, mode)
            }
            _ => self.parse_next(inner, start, mode),
        }
    }

    fn parse_arrow_function(
        &mut self,
        arguments: ArgumentsList,
        arrow: Token,
        mode: ExprMode,
    ) -> ParseResult<Expr> {
        self.advance(&arrow);
        let start = arguments.pos.offset;
        if self.check(TokenKind::CurlyBracketLeft)? {
            let block = self.parse_block()?;
            let node = Expr::ArrowFunction(ArrowFunction {
                arguments,
                body: ArrowBody::Block(block),
                pos: self.span_from(start),
            });
            return self.parse_next(node, start, mode.value());
        }
        let body = self.parse_expression(mode.value())?;
        Ok(Expr::ArrowFunction(ArrowFunction {
            arguments,
            body: ArrowBody::Expression(body),
            pos: self.span_from(start),
        }))
    }
}
