pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod lowering;
pub mod parser;
pub mod syntax;
pub mod trace;

use std::fs;
use std::path::Path;

pub use ast::*;
pub use diagnostics::{render_diagnostic, Diagnostic, DiagnosticLabel, LineColumn, Position};
pub use error::{MinijsError, ParseError, ParseErrorKind, ParseResult};
pub use lexer::{next_token, skip_whitespace, tokenize, Token, TokenKind};
pub use lowering::LoweringError;
pub use parser::{parse_source, Parser};
pub use trace::TraceConfig;

/// Reads `path` as UTF-8 and parses it. IO failures and parse errors both surface as
/// [`MinijsError`].
pub fn parse_file(path: &Path) -> Result<SourceFile, MinijsError> {
    let content = fs::read_to_string(path)?;
    Ok(parse_source(&content)?)
}

/// Renders a parse error against the source it came from, in the `error[CODE] path:line:col`
/// form the CLI prints.
pub fn render_parse_error(path: &str, source: &str, err: &ParseError) -> String {
    render_diagnostic(path, &err.to_diagnostic(source))
}
