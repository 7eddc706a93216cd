use crate::lexer::TokenKind;

pub const PUNCTUATION: &[(char, TokenKind)] = &[
    ('(', TokenKind::RoundBracketLeft),
    (')', TokenKind::RoundBracketRight),
    ('[', TokenKind::SquareBracketLeft),
    (']', TokenKind::SquareBracketRight),
    ('{', TokenKind::CurlyBracketLeft),
    ('}', TokenKind::CurlyBracketRight),
    (';', TokenKind::StatementDelimiter),
];

/// Characters that form operator runs. A run is matched as a whole against [`OPERATORS`].
pub const OPERATOR_ALPHABET: &[char] = &['<', '>', '+', '-', '*', '/', '=', ':', ','];

pub const OPERATORS: &[(&str, TokenKind)] = &[
    ("=", TokenKind::Assign),
    ("==", TokenKind::Equals),
    ("===", TokenKind::StrictEquals),
    ("<", TokenKind::Less),
    (">", TokenKind::More),
    ("<=", TokenKind::LessEquals),
    (">=", TokenKind::MoreEquals),
    ("+=", TokenKind::PlusAssign),
    ("-=", TokenKind::MinusAssign),
    ("*=", TokenKind::MulAssign),
    ("/=", TokenKind::DivAssign),
    ("++", TokenKind::Increment),
    ("--", TokenKind::Decrement),
    ("=>", TokenKind::Arrow),
    (":", TokenKind::Colon),
    (",", TokenKind::ListDelimiter),
];

pub const KEYWORDS_DECLARATION: &[&str] = &["var", "let", "const"];

pub const KEYWORDS_UNSUPPORTED: &[&str] = &[
    "class", "for", "while", "if", "switch", "case", "import", "export",
];

pub const KEYWORDS_ALL: &[&str] = &[
    "for", "while", "if", "switch", "case", "const", "let", "var", "function", "class", "import",
    "export",
];

pub fn punctuation_kind(ch: char) -> Option<TokenKind> {
    PUNCTUATION
        .iter()
        .find(|(needle, _)| *needle == ch)
        .map(|(_, kind)| *kind)
}

pub fn operator_kind(text: &str) -> Option<TokenKind> {
    OPERATORS
        .iter()
        .find(|(spelling, _)| *spelling == text)
        .map(|(_, kind)| *kind)
}

pub fn is_operator_char(ch: char) -> bool {
    OPERATOR_ALPHABET.contains(&ch)
}

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS_ALL.contains(&name)
}
