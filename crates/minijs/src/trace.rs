/// Environment-controlled stderr tracing.
///
/// `MINIJS_TRACE_LEX=1` prints every token the parser consumes and `MINIJS_TRACE_PARSE=1` prints
/// each completed declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceConfig {
    pub lex: bool,
    pub parse: bool,
}

impl TraceConfig {
    pub fn from_env() -> Self {
        Self {
            lex: env_flag("MINIJS_TRACE_LEX"),
            parse: env_flag("MINIJS_TRACE_PARSE"),
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}
