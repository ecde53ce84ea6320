//! Argument rendering for namespace calls.
//!
//! Every built-in call goes through [`ArgPrinter`], which decides for each
//! argument whether it is embedded raw, quoted as a string literal, or printed
//! as a number. Getting this wrong does not fail anywhere at load time; the
//! game simply reads a different value, so the rules live here and only here.
//!
//! # Rules
//!
//! - [`Arg::Omitted`] is dropped (optional trailing parameters)
//! - [`Arg::Expr`] is embedded unchanged
//! - [`Arg::Literal`] is always single-quoted
//! - [`Arg::Text`] is embedded raw when it starts with a recognized namespace
//!   prefix (`q.`, `v.`, ...), otherwise single-quoted
//! - numbers and booleans print literally
//!
//! Zero remaining arguments render no parentheses at all:
//!
//! ```
//! use molang_builder::{Arg, render::ArgPrinter};
//!
//! let printer = ArgPrinter::default();
//! assert_eq!(printer.print_call("q", "is_baby", &[]), "q.is_baby");
//! assert_eq!(
//!     printer.print_call("q", "has_tag", &[Arg::from("poison")]),
//!     "q.has_tag('poison')"
//! );
//! assert_eq!(
//!     printer.print_call("q", "has_tag", &[Arg::from("v.tag")]),
//!     "q.has_tag(v.tag)"
//! );
//! ```

use crate::expr::{Arg, Number};

/// Prefixes that mark a plain string as an already-valid Molang fragment.
pub const DEFAULT_PREFIXES: &[&str] = &[
    "q.",
    "c.",
    "v.",
    "t.",
    "query.",
    "context.",
    "variable.",
    "temp.",
    "math.",
];

/// The set of prefixes the compatibility shim recognizes.
///
/// The built-in handles are always recognized; [`Prefixes::with`] adds more
/// (for example `array.` when content defines Molang arrays).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prefixes {
    extra: Vec<String>,
}

impl Prefixes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a prefix. A trailing `.` is appended when missing.
    pub fn with(mut self, prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        if !prefix.ends_with('.') {
            prefix.push('.');
        }
        if !self.extra.contains(&prefix) {
            self.extra.push(prefix);
        }
        self
    }

    pub fn matches(&self, text: &str) -> bool {
        DEFAULT_PREFIXES.iter().any(|p| text.starts_with(p))
            || self.extra.iter().any(|p| text.starts_with(p.as_str()))
    }

    /// All recognized prefixes, built-ins first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        DEFAULT_PREFIXES
            .iter()
            .copied()
            .chain(self.extra.iter().map(String::as_str))
    }
}

/// Renders argument lists and calls.
#[derive(Debug, Clone, Default)]
pub struct ArgPrinter {
    prefixes: Prefixes,
}

impl ArgPrinter {
    pub fn new(prefixes: Prefixes) -> Self {
        ArgPrinter { prefixes }
    }

    pub fn prefixes(&self) -> &Prefixes {
        &self.prefixes
    }

    /// `<handle>.<name>(<args>)`, or `<handle>.<name>` with no arguments left.
    pub fn print_call(&self, handle: &str, name: &str, args: &[Arg]) -> String {
        let list = self.print_args(args);
        if list.is_empty() {
            format!("{handle}.{name}")
        } else {
            format!("{handle}.{name}({list})")
        }
    }

    /// Comma-joined argument tokens without the surrounding parentheses.
    pub fn print_args(&self, args: &[Arg]) -> String {
        let items: Vec<String> = args.iter().filter_map(|a| self.print_arg(a)).collect();
        items.join(", ")
    }

    /// One argument token, or `None` for an omitted argument.
    pub fn print_arg(&self, arg: &Arg) -> Option<String> {
        match arg {
            Arg::Omitted => None,
            Arg::Expr(expr) => Some(expr.as_str().to_string()),
            Arg::Literal(text) => Some(quote(text)),
            Arg::Text(text) if self.prefixes.matches(text) => Some(text.clone()),
            Arg::Text(text) => Some(quote(text)),
            Arg::Number(n) => Some(print_number(n)),
            Arg::Bool(b) => Some(b.to_string()),
        }
    }
}

/// Single-quotes a string literal.
///
/// Molang string literals have no escape sequences, so embedded single
/// quotes are removed.
pub fn quote(text: &str) -> String {
    if text.contains('\'') {
        tracing::warn!(literal = text, "removing single quotes from Molang string literal");
        format!("'{}'", text.replace('\'', ""))
    } else {
        format!("'{text}'")
    }
}

/// Literal text for a number. Non-finite floats have no Molang spelling and
/// print as `0`.
pub fn print_number(n: &Number) -> String {
    match n {
        Number::Int(i) => i.to_string(),
        Number::Float(f) if f.is_finite() => f.to_string(),
        Number::Float(f) => {
            tracing::warn!(value = %f, "non-finite number rendered as 0");
            "0".to_string()
        }
        Number::Decimal(d) => d.normalize().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Molang;
    use rust_decimal::Decimal;

    #[test]
    fn omitted_arguments_are_dropped() {
        let printer = ArgPrinter::default();
        let args = [Arg::from(1), Arg::Omitted];
        assert_eq!(printer.print_call("q", "cooldown_time", &args), "q.cooldown_time(1)");
        assert_eq!(printer.print_call("q", "cooldown_time", &[Arg::Omitted]), "q.cooldown_time");
    }

    #[test]
    fn expressions_are_never_requoted() {
        let printer = ArgPrinter::default();
        let arg = Arg::from(Molang::raw("c.owning_entity"));
        assert_eq!(printer.print_arg(&arg).as_deref(), Some("c.owning_entity"));
    }

    #[test]
    fn explicit_literals_ignore_prefixes() {
        let printer = ArgPrinter::default();
        assert_eq!(printer.print_arg(&Arg::lit("q.is_baby")).as_deref(), Some("'q.is_baby'"));
        assert_eq!(printer.print_arg(&Arg::raw("health")).as_deref(), Some("health"));
    }

    #[test]
    fn custom_prefixes_extend_the_shim() {
        let printer = ArgPrinter::new(Prefixes::new().with("array"));
        assert_eq!(
            printer.print_arg(&Arg::from("array.skins[0]")).as_deref(),
            Some("array.skins[0]")
        );
        let plain = ArgPrinter::default();
        assert_eq!(
            plain.print_arg(&Arg::from("array.skins[0]")).as_deref(),
            Some("'array.skins[0]'")
        );
    }

    #[test]
    fn prefix_is_normalized_once() {
        let prefixes = Prefixes::new().with("array").with("array.");
        assert_eq!(prefixes.iter().filter(|p| *p == "array.").count(), 1);
    }

    #[test]
    fn numbers_print_literally() {
        assert_eq!(print_number(&Number::Int(-3)), "-3");
        assert_eq!(print_number(&Number::Float(0.5)), "0.5");
        assert_eq!(print_number(&Number::Float(10.0)), "10");
        assert_eq!(print_number(&Number::Float(f64::NAN)), "0");
        assert_eq!(print_number(&Number::Decimal(Decimal::new(2500, 3))), "2.5");
    }

    #[test]
    fn booleans_are_lowercase() {
        let printer = ArgPrinter::default();
        assert_eq!(printer.print_arg(&Arg::from(true)).as_deref(), Some("true"));
    }

    #[test]
    fn quote_strips_embedded_quotes() {
        assert_eq!(quote("it's"), "'its'");
        assert_eq!(quote("poison"), "'poison'");
    }
}
