//! Render built-in calls from command-line tokens

use rust_decimal::Decimal;

use super::CliError;
use crate::{Arg, ArgPrinter, Context, Math, Molang, Namespace, Prefixes, Query, Temp, Variable};

/// Options for the call command
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Namespace handle (`q`, `c`, `v`, `t`, `math`) or its long name
    pub namespace: String,
    /// Built-in or variable name
    pub builtin: String,
    /// Raw argument tokens
    pub args: Vec<String>,
    /// Extra prefixes treated as Molang rather than string literals
    pub prefixes: Vec<String>,
}

impl CallOptions {
    fn printer(&self) -> ArgPrinter {
        let prefixes = self
            .prefixes
            .iter()
            .fold(Prefixes::new(), |acc, p| acc.with(p.as_str()));
        ArgPrinter::new(prefixes)
    }
}

/// Interpret one command-line token as a call argument.
///
/// Integers and decimals become numbers, `true`/`false` booleans, and
/// everything else a plain string (quoted unless it carries a Molang
/// prefix).
pub fn parse_arg(token: &str) -> Arg {
    if let Ok(i) = token.parse::<i64>() {
        return Arg::from(i);
    }
    if let Ok(d) = token.parse::<Decimal>() {
        return Arg::from(d);
    }
    if let Ok(f) = token.parse::<f64>()
        && f.is_finite()
    {
        return Arg::from(f);
    }
    match token {
        "true" => Arg::from(true),
        "false" => Arg::from(false),
        _ => Arg::from(token),
    }
}

/// Render a single call
pub fn execute_call(options: &CallOptions) -> Result<Molang, CliError> {
    if options.builtin.is_empty() {
        return Err(CliError::NoInput);
    }
    let args: Vec<Arg> = options.args.iter().map(|t| parse_arg(t)).collect();
    dispatch(&options.printer(), &options.namespace, &options.builtin, args)
}

/// Render one call per non-empty line: `<namespace> <builtin> [args...]`.
/// Lines starting with `#` are skipped.
pub fn execute_lines(input: &str, prefixes: &[String]) -> Result<Vec<Molang>, CliError> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|line| {
            let mut tokens = line.split_whitespace();
            let options = CallOptions {
                namespace: tokens.next().unwrap_or_default().to_string(),
                builtin: tokens.next().unwrap_or_default().to_string(),
                args: tokens.map(str::to_string).collect(),
                prefixes: prefixes.to_vec(),
            };
            execute_call(&options)
        })
        .collect()
}

fn dispatch(
    printer: &ArgPrinter,
    namespace: &str,
    name: &str,
    args: Vec<Arg>,
) -> Result<Molang, CliError> {
    tracing::debug!(namespace, name, args = args.len(), "rendering call");
    let result = match namespace {
        "q" | "query" => Query::call_with(printer, name, args),
        "c" | "context" => Context::call_with(printer, name, args),
        "math" => Math::call_with(printer, name, args),
        "v" | "variable" if Variable::builtin(name).is_none() && args.is_empty() => {
            Variable::named(name)
        }
        "v" | "variable" => Variable::call_with(printer, name, args),
        "t" | "temp" if args.is_empty() => Temp::named(name),
        "t" | "temp" => Err(crate::MolangError::Arity {
            name: format!("{}.{}", Temp::HANDLE, name),
            expected: "0".to_string(),
            got: args.len(),
        }),
        other => Err(crate::MolangError::UnknownNamespace(other.to_string())),
    };
    Ok(result?)
}
