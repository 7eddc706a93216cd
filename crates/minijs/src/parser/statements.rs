use crate::ast::*;
use crate::error::{ParseErrorKind, ParseResult};
use crate::lexer::{Token, TokenKind};
use crate::syntax;

use super::expressions::ExprMode;
use super::Parser;

impl Parser {
    pub(super) fn parse_statement(&mut self) -> ParseResult<Statement> {
        let start = self.cursor;
        self.enter_nesting().map_err(|err| err.in_statement(start))?;
        let statement = self.parse_statement_inner();
        self.leave_nesting();
        let statement = statement.map_err(|err| err.in_statement(start))?;
        while self.consume_if(TokenKind::StatementDelimiter)?.is_some() {}
        Ok(statement)
    }

    fn parse_statement_inner(&mut self) -> ParseResult<Statement> {
        let token = self.lookahead()?;
        if token.kind == TokenKind::Identifier {
            match token.text.as_str() {
                keyword if syntax::KEYWORDS_DECLARATION.contains(&keyword) => {
                    return Ok(Statement::VariableDeclaration(
                        self.parse_variable_declaration()?,
                    ))
                }
                "function" => {
                    return Ok(Statement::FunctionDeclaration(
                        self.parse_function_declaration()?,
                    ))
                }
                keyword if syntax::KEYWORDS_UNSUPPORTED.contains(&keyword) => {
                    return Err(self.error_at(
                        ParseErrorKind::UnsupportedConstruct,
                        token.pos.offset,
                        format!("`{keyword}` statements are not supported"),
                    ));
                }
                _ => {}
            }
        }
        let expr = self.parse_expression(ExprMode::default())?;
        self.expect(TokenKind::StatementDelimiter, "expected `;` after expression")?;
        Ok(Statement::Expression(expr))
    }

    fn parse_variable_declaration(&mut self) -> ParseResult<VariableDeclaration> {
        let keyword = self.next()?;
        let Some(modifier) = VariableModifier::from_keyword(&keyword.text) else {
            return Err(self.unexpected(&keyword, "expected `var`, `let` or `const`"));
        };
        let name = self.parse_binding_name("expected a variable name")?;

        let token = self.next()?;
        let initializer = match token.kind {
            TokenKind::Assign => {
                let init = self.parse_expression(ExprMode::default())?;
                self.expect(
                    TokenKind::StatementDelimiter,
                    "expected `;` after variable initializer",
                )?;
                Some(init)
            }
            _ if modifier == VariableModifier::Const => {
                return Err(self.unexpected(&token, "`const` declarations require `=`"));
            }
            TokenKind::StatementDelimiter => None,
            _ => return Err(self.unexpected(&token, "expected `=` or `;`")),
        };

        if self.trace.parse {
            eprintln!(
                "[MINIJS_TRACE_PARSE] {} {} (initialized: {})",
                modifier.as_str(),
                name.name,
                initializer.is_some()
            );
        }

        Ok(VariableDeclaration {
            modifier,
            name,
            initializer,
            pos: self.span_from(keyword.pos.offset),
        })
    }

    // Declaration parameters are plain names only; defaults and patterns are arrow-only.
    fn parse_function_declaration(&mut self) -> ParseResult<FunctionDeclaration> {
        let keyword = self.next()?;
        let name = self.parse_binding_name("expected a function name")?;
        self.expect(TokenKind::RoundBracketLeft, "expected `(` after function name")?;

        let mut parameters = Vec::new();
        if self.consume_if(TokenKind::RoundBracketRight)?.is_none() {
            loop {
                parameters.push(self.parse_binding_name("expected a parameter name")?);
                let token = self.next()?;
                match token.kind {
                    TokenKind::ListDelimiter => continue,
                    TokenKind::RoundBracketRight => break,
                    _ => return Err(self.unexpected(&token, "expected `,` or `)`")),
                }
            }
        }

        let body = self.parse_block()?;

        if self.trace.parse {
            eprintln!(
                "[MINIJS_TRACE_PARSE] function {} ({} parameters, {} statements)",
                name.name,
                parameters.len(),
                body.statements.len()
            );
        }

        Ok(FunctionDeclaration {
            name,
            parameters,
            body: body.statements,
            pos: self.span_from(keyword.pos.offset),
        })
    }

    /// `{ statement* }`
    pub(super) fn parse_block(&mut self) -> ParseResult<Block> {
        let open = self.expect(TokenKind::CurlyBracketLeft, "expected `{`")?;
        let mut statements = Vec::new();
        while self.consume_if(TokenKind::CurlyBracketRight)?.is_none() {
            statements.push(self.parse_statement()?);
        }
        Ok(Block {
            statements,
            pos: self.span_from(open.pos.offset),
        })
    }

    fn parse_binding_name(&mut self, expected: &str) -> ParseResult<Identifier> {
        let token = self.next()?;
        self.binding_name(token, expected)
    }

    fn binding_name(&self, token: Token, expected: &str) -> ParseResult<Identifier> {
        if token.kind != TokenKind::Identifier {
            return Err(self.unexpected(&token, expected));
        }
        if syntax::is_keyword(&token.text) {
            return Err(self.error_at(
                ParseErrorKind::ReservedIdentifier,
                token.pos.offset,
                format!("`{}` is a reserved word", token.text),
            ));
        }
        Ok(Identifier {
            name: token.text,
            pos: token.pos,
        })
    }
}
