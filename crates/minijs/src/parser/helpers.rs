use crate::diagnostics::{surrounding_excerpt, Position};
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::lexer::{next_token, skip_whitespace, Token, TokenKind};
use crate::lowering::LoweringError;

use super::Parser;

/// How deeply expressions and statements may nest. Deeper input is rejected rather than
/// recursed into, which keeps both the parser's stack and the resulting tree shallow.
pub(crate) const MAX_NESTING: usize = 256;

impl Parser {
    /// The token at the cursor, without consuming it. `None` at end of input.
    pub(super) fn peek(&self) -> ParseResult<Option<Token>> {
        next_token(&self.chars, self.cursor)
    }

    pub(super) fn lookahead(&self) -> ParseResult<Token> {
        self.peek()?.ok_or_else(|| self.end_of_input())
    }

    pub(super) fn check(&self, kind: TokenKind) -> ParseResult<bool> {
        Ok(self.peek()?.is_some_and(|token| token.kind == kind))
    }

    /// Commits past `token` and moves the cursor over any following whitespace.
    pub(super) fn advance(&mut self, token: &Token) {
        if self.trace.lex {
            eprintln!(
                "[MINIJS_TRACE_LEX] {:?} `{}` at {}",
                token.kind, token.text, token.pos.offset
            );
        }
        self.last_end = token.pos.end();
        self.cursor = skip_whitespace(&self.chars, self.last_end);
    }

    pub(super) fn next(&mut self) -> ParseResult<Token> {
        let token = self.lookahead()?;
        self.advance(&token);
        Ok(token)
    }

    pub(super) fn expect(&mut self, kind: TokenKind, expected: &str) -> ParseResult<Token> {
        let token = self.lookahead()?;
        if token.kind != kind {
            return Err(self.unexpected(&token, expected));
        }
        self.advance(&token);
        Ok(token)
    }

    pub(super) fn consume_if(&mut self, kind: TokenKind) -> ParseResult<Option<Token>> {
        match self.peek()? {
            Some(token) if token.kind == kind => {
                self.advance(&token);
                Ok(Some(token))
            }
            _ => Ok(None),
        }
    }

    pub(super) fn enter_nesting(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(self.error_at(
                ParseErrorKind::UnsupportedConstruct,
                self.cursor,
                format!("nesting deeper than {MAX_NESTING} levels is not supported"),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn leave_nesting(&mut self) {
        self.depth -= 1;
    }

    /// Span from `start` to the end of the last consumed token.
    pub(super) fn span_from(&self, start: usize) -> Position {
        Position::between(start, self.last_end)
    }

    pub(super) fn error_at(
        &self,
        kind: ParseErrorKind,
        offset: usize,
        message: impl Into<String>,
    ) -> ParseError {
        ParseError::new(
            kind,
            message,
            offset,
            surrounding_excerpt(&self.chars, offset),
        )
    }

    pub(super) fn unexpected(&self, token: &Token, expected: &str) -> ParseError {
        self.error_at(
            ParseErrorKind::UnexpectedToken,
            token.pos.offset,
            format!("{expected}, found `{}`", describe(token)),
        )
    }

    pub(super) fn end_of_input(&self) -> ParseError {
        self.error_at(
            ParseErrorKind::UnexpectedEndOfInput,
            self.chars.len(),
            "unexpected end of code",
        )
    }

    pub(super) fn lowering_failed(&self, err: LoweringError) -> ParseError {
        self.error_at(
            ParseErrorKind::InvalidLoweringTarget,
            err.pos.offset,
            err.message,
        )
    }
}

fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::StringLiteral => format!("'{}'", token.text),
        TokenKind::FieldAccess => format!(".{}", token.text),
        _ => token.text.clone(),
    }
}
