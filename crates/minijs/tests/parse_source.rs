use minijs::{
    parse_source, render_parse_error, tokenize, ArrowBody, Binding, Expr, ParseErrorKind,
    Statement, VariableModifier,
};

#[test]
fn program_with_every_statement_form() {
    let src = r#"
var pending;
let total = 0;
const greet = (name, { prefix } = defaults) => console.log(prefix, name);
function report(result) {
  console.log('done', result.value);
}
greet('world');
"#;
    let file = parse_source(src).expect("parse");
    assert_eq!(file.statements.len(), 5);

    let modifiers: Vec<VariableModifier> = file
        .statements
        .iter()
        .filter_map(|statement| match statement {
            Statement::VariableDeclaration(decl) => Some(decl.modifier),
            _ => None,
        })
        .collect();
    assert_eq!(
        modifiers,
        vec![
            VariableModifier::Var,
            VariableModifier::Let,
            VariableModifier::Const
        ]
    );

    let Statement::VariableDeclaration(greet) = &file.statements[2] else {
        panic!("expected declaration");
    };
    let init = greet.initializer.as_ref().expect("initializer");
    let Expr::ArrowFunction(arrow) = init.body.as_ref() else {
        panic!("expected arrow function");
    };
    assert!(matches!(
        arrow.arguments.arguments[1].binding,
        Binding::ObjectDestructuringPattern(_)
    ));
    let ArrowBody::Expression(body) = &arrow.body else {
        panic!("expected expression body");
    };
    assert!(matches!(*body.body, Expr::Call(ref call) if call.arguments.len() == 2));

    assert!(matches!(file.statements[3], Statement::FunctionDeclaration(_)));
    assert!(matches!(file.statements[4], Statement::Expression(_)));
}

#[test]
fn statement_spans_are_ordered_and_within_the_buffer() {
    let src = "let a = 1;\nfunction f(x) { g(x); }\na.b[c](d).e;\n";
    let file = parse_source(src).expect("parse");
    let len = src.chars().count();
    let mut last_end = 0;
    for statement in &file.statements {
        let pos = statement.pos();
        assert!(pos.offset >= last_end, "overlapping statement {pos:?}");
        last_end = pos.end();
    }
    assert!(last_end <= len);
}

#[test]
fn token_spans_never_overlap() {
    let src = "const o = {a, b: 2};\nconst f = (a, {b}, c = 1) => c;\nx.y .z[0](1, 'two');";
    let tokens = tokenize(src).expect("tokenize");
    let len = src.chars().count();
    for pair in tokens.windows(2) {
        assert!(
            pair[0].pos.end() <= pair[1].pos.offset,
            "{:?} overlaps {:?}",
            pair[0],
            pair[1]
        );
    }
    let last = tokens.last().expect("tokens");
    assert!(last.pos.end() <= len);
}

#[test]
fn offsets_count_characters_not_bytes() {
    let src = "let s = 'héllo wörld';\nlet t = ';";
    let err = parse_source(src).expect_err("unterminated string");
    assert_eq!(err.kind, ParseErrorKind::LexicalError);
    assert_eq!(err.offset, 31);
}

#[test]
fn rendered_errors_point_at_line_and_column() {
    let src = "let a = 1;\nlet b = a c;\n";
    let err = parse_source(src).expect_err("missing delimiter");
    assert_eq!(err.code(), "E1500");
    let rendered = render_parse_error("main.js", src, &err);
    let first_line = rendered.lines().next().expect("rendered line");
    assert!(
        first_line.starts_with("error[E1500] main.js:2:11 unexpected token:"),
        "{rendered}"
    );
    assert!(rendered.contains("note: in the statement starting here at main.js:2:1"));
}

#[test]
fn unsupported_constructs_are_never_skipped() {
    for keyword in ["class", "for", "if", "while", "switch", "import", "export"] {
        let src = format!("let before = 1;\n{keyword} x;\nlet after = 2;");
        let err = parse_source(&src).expect_err(keyword);
        assert_eq!(err.kind, ParseErrorKind::UnsupportedConstruct, "{keyword}");
        assert_eq!(err.offset, 16, "{keyword}");
        assert_eq!(err.code(), "E1501");
    }
}
