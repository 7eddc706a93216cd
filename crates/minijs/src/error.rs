use std::fmt;

use crate::diagnostics::{Diagnostic, DiagnosticLabel, LineColumn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    LexicalError,
    UnexpectedEndOfInput,
    UnexpectedToken,
    UnsupportedConstruct,
    InvalidLoweringTarget,
    ReservedIdentifier,
}

impl ParseErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ParseErrorKind::LexicalError => "E1000",
            ParseErrorKind::UnexpectedEndOfInput => "E1001",
            ParseErrorKind::UnexpectedToken => "E1500",
            ParseErrorKind::UnsupportedConstruct => "E1501",
            ParseErrorKind::InvalidLoweringTarget => "E1502",
            ParseErrorKind::ReservedIdentifier => "E1503",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseErrorKind::LexicalError => "lexical error",
            ParseErrorKind::UnexpectedEndOfInput => "unexpected end of input",
            ParseErrorKind::UnexpectedToken => "unexpected token",
            ParseErrorKind::UnsupportedConstruct => "unsupported construct",
            ParseErrorKind::InvalidLoweringTarget => "invalid lowering target",
            ParseErrorKind::ReservedIdentifier => "reserved identifier",
        };
        f.write_str(name)
    }
}

/// The single fatal error a parse can produce. Nothing is recovered: the first error aborts the
/// whole parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}: {message} (near `{excerpt}`)")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub offset: usize,
    pub excerpt: String,
    /// Offset of the innermost statement that was being parsed when the error was raised.
    pub statement_offset: Option<usize>,
}

impl ParseError {
    pub fn new(
        kind: ParseErrorKind,
        message: impl Into<String>,
        offset: usize,
        excerpt: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            offset,
            excerpt: excerpt.into(),
            statement_offset: None,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub(crate) fn in_statement(mut self, offset: usize) -> Self {
        if self.statement_offset.is_none() {
            self.statement_offset = Some(offset);
        }
        self
    }

    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let chars: Vec<char> = source.chars().collect();
        let labels = self
            .statement_offset
            .filter(|offset| *offset != self.offset)
            .map(|offset| DiagnosticLabel {
                message: "in the statement starting here".to_string(),
                at: LineColumn::locate(&chars, offset),
            })
            .into_iter()
            .collect();
        Diagnostic {
            code: self.code().to_string(),
            message: format!("{}: {}", self.kind, self.message),
            offset: self.offset,
            at: LineColumn::locate(&chars, self.offset),
            excerpt: self.excerpt.clone(),
            labels,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, thiserror::Error)]
pub enum MinijsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}
