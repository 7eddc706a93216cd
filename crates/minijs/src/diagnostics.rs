use serde::Serialize;

/// A half-open `[offset, offset + length)` range measured in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    pub offset: usize,
    pub length: usize,
}

impl Position {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    pub fn between(start: usize, end: usize) -> Self {
        Self {
            offset: start,
            length: end.saturating_sub(start),
        }
    }

    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl LineColumn {
    /// 1-based line and column of a character offset.
    pub fn locate(chars: &[char], offset: usize) -> Self {
        let mut line = 1usize;
        let mut column = 1usize;
        for ch in chars.iter().take(offset) {
            if *ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self { line, column }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticLabel {
    pub message: String,
    pub at: LineColumn,
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub offset: usize,
    pub at: LineColumn,
    pub excerpt: String,
    pub labels: Vec<DiagnosticLabel>,
}

pub fn render_diagnostic(path: &str, diagnostic: &Diagnostic) -> String {
    let mut output = String::new();
    let start = &diagnostic.at;
    output.push_str(&format!(
        "error[{}] {}:{}:{} {}\n",
        diagnostic.code, path, start.line, start.column, diagnostic.message
    ));
    if !diagnostic.excerpt.is_empty() {
        output.push_str(&format!("  near: `{}`\n", diagnostic.excerpt));
    }
    for label in &diagnostic.labels {
        let pos = &label.at;
        output.push_str(&format!(
            "  note: {} at {}:{}:{}\n",
            label.message, path, pos.line, pos.column
        ));
    }
    output.trim_end().to_string()
}

/// Text surrounding `offset` on a single line: a few characters of leading context and a longer
/// tail, with newlines flattened to spaces.
pub(crate) fn surrounding_excerpt(chars: &[char], offset: usize) -> String {
    let start = offset.saturating_sub(8).min(chars.len());
    let end = offset.saturating_add(16).min(chars.len());
    chars[start..end]
        .iter()
        .map(|ch| if *ch == '\n' { ' ' } else { *ch })
        .collect()
}

/// The offending line from `offset` onwards, bounded to 20 characters.
pub(crate) fn line_excerpt(chars: &[char], offset: usize) -> String {
    chars
        .iter()
        .skip(offset)
        .take_while(|ch| **ch != '\n')
        .take(20)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn locate_counts_lines_and_columns_from_one() {
        let src = chars("let a;\nlet b;");
        assert_eq!(LineColumn::locate(&src, 0), LineColumn { line: 1, column: 1 });
        assert_eq!(LineColumn::locate(&src, 4), LineColumn { line: 1, column: 5 });
        assert_eq!(LineColumn::locate(&src, 7), LineColumn { line: 2, column: 1 });
        assert_eq!(LineColumn::locate(&src, 11), LineColumn { line: 2, column: 5 });
    }

    #[test]
    fn excerpts_stay_bounded_and_single_line() {
        let src = chars("const value = first;\nsecond();");
        let around = surrounding_excerpt(&src, 14);
        assert_eq!(around, "value = first; second();");
        assert!(!around.contains('\n'));

        assert_eq!(line_excerpt(&src, 14), "first;");
        assert_eq!(line_excerpt(&src, 500), "");
        assert_eq!(surrounding_excerpt(&src, 500), "");
    }

    #[test]
    fn render_includes_code_location_and_excerpt() {
        let diagnostic = Diagnostic {
            code: "E1500".to_string(),
            message: "expected `;`".to_string(),
            offset: 9,
            at: LineColumn { line: 2, column: 3 },
            excerpt: "x y".to_string(),
            labels: vec![DiagnosticLabel {
                message: "statement started here".to_string(),
                at: LineColumn { line: 2, column: 1 },
            }],
        };
        let rendered = render_diagnostic("main.js", &diagnostic);
        assert_eq!(
            rendered,
            "error[E1500] main.js:2:3 expected `;`\n  near: `x y`\n  note: statement started here at main.js:2:1"
        );
    }
}
