use crate::ast::SourceFile;
use crate::diagnostics::Position;
use crate::error::ParseResult;
use crate::lexer::skip_whitespace;
use crate::trace::TraceConfig;

mod expressions;
mod helpers;
mod statements;


/// Parses a complete source buffer. The first error aborts the parse; no partial tree is
/// returned.
pub fn parse_source(text: &str) -> ParseResult<SourceFile> {
    Parser::new(text, TraceConfig::from_env()).parse_source_file()
}

/// Recursive-descent parser with one token of lookahead. Tokens are scanned on demand from
/// `cursor`, which always rests on a non-whitespace character (or the end of input) between
/// calls.
pub struct Parser {
    chars: Vec<char>,
    cursor: usize,
    /// End offset of the most recently consumed token.
    last_end: usize,
    /// Expressions and statements currently being parsed, bounded by `MAX_NESTING`.
    depth: usize,
    trace: TraceConfig,
}

impl Parser {
    pub fn new(text: &str, trace: TraceConfig) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = skip_whitespace(&chars, 0);
        Self {
            chars,
            cursor,
            last_end: 0,
            depth: 0,
            trace,
        }
    }

    pub fn parse_source_file(mut self) -> ParseResult<SourceFile> {
        let mut statements = Vec::new();
        while self.cursor < self.chars.len() {
            statements.push(self.parse_statement()?);
        }
        Ok(SourceFile {
            statements,
            pos: Position::new(0, self.chars.len()),
        })
    }
}
