use minijs::{parse_source, render_parse_error, tokenize, MinijsError};
use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when a source file failed to parse and its diagnostic was already
/// printed.
fn run() -> Result<bool, MinijsError> {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        print_help();
        return Ok(true);
    };
    let rest: Vec<String> = args.collect();

    match command.as_str() {
        "-h" | "--help" => {
            print_help();
            Ok(true)
        }
        "parse" => cmd_parse(&rest),
        "lex" => cmd_lex(&rest),
        "check" => cmd_check(&rest),
        other => Err(MinijsError::Usage(format!(
            "unknown command `{other}` (see `minijs --help`)"
        ))),
    }
}

fn cmd_parse(args: &[String]) -> Result<bool, MinijsError> {
    let mut target = None;
    let mut out = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--out" | "-o" => {
                let Some(path) = iter.next() else {
                    return Err(MinijsError::Usage("--out requires a path".to_string()));
                };
                out = Some(path.clone());
            }
            _ if target.is_none() => target = Some(arg.clone()),
            _ => {
                return Err(MinijsError::Usage(format!(
                    "unexpected argument `{arg}`"
                )))
            }
        }
    }
    let Some(target) = target else {
        return Err(MinijsError::Usage("usage: minijs parse <file> [--out <path>]".to_string()));
    };

    let source = fs::read_to_string(&target)?;
    let file = match parse_source(&source) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("{}", render_parse_error(&target, &source, &err));
            return Ok(false);
        }
    };
    let output = serde_json::to_string_pretty(&file)?;
    match out {
        Some(path) => fs::write(Path::new(&path), output + "\n")?,
        None => println!("{output}"),
    }
    Ok(true)
}

fn cmd_lex(args: &[String]) -> Result<bool, MinijsError> {
    let [target] = args else {
        return Err(MinijsError::Usage("usage: minijs lex <file>".to_string()));
    };
    let source = fs::read_to_string(target)?;
    match tokenize(&source) {
        Ok(tokens) => {
            println!("{}", serde_json::to_string_pretty(&tokens)?);
            Ok(true)
        }
        Err(err) => {
            eprintln!("{}", render_parse_error(target, &source, &err));
            Ok(false)
        }
    }
}

fn cmd_check(args: &[String]) -> Result<bool, MinijsError> {
    if args.is_empty() {
        return Err(MinijsError::Usage("usage: minijs check <file>...".to_string()));
    }
    let mut all_ok = true;
    for target in args {
        let source = fs::read_to_string(target)?;
        match parse_source(&source) {
            Ok(_) => println!("ok {target}"),
            Err(err) => {
                all_ok = false;
                eprintln!("{}", render_parse_error(target, &source, &err));
            }
        }
    }
    Ok(all_ok)
}

fn print_help() {
    println!(
        "minijs\n\nUSAGE:\n  minijs <COMMAND>\n\nCOMMANDS:\n  parse <file> [--out <path>]  Print the syntax tree as JSON\n  lex <file>                   Print the token list as JSON\n  check <file>...              Parse files and report the first error in each\n  -h, --help                   Show this help\n\nENVIRONMENT:\n  MINIJS_TRACE_LEX=1           Trace consumed tokens to stderr\n  MINIJS_TRACE_PARSE=1         Trace completed declarations to stderr"
    );
}
