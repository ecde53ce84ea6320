use rust_decimal::Decimal;

use crate::error::{MolangError, Result};
use crate::render::ArgPrinter;
use crate::value::Molang;

/// A numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
    /// Exact decimal, printed normalized (`2.500` prints `2.5`)
    Decimal(Decimal),
}

macro_rules! number_from {
    ($variant:ident as $inner:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n as $inner)
                }
            }

            impl From<$ty> for Arg {
                fn from(n: $ty) -> Self {
                    Arg::Number(Number::from(n))
                }
            }

            impl From<$ty> for Operand {
                fn from(n: $ty) -> Self {
                    Operand(Arg::from(n))
                }
            }
        )*
    };
}

number_from!(Int as i64: i8, i16, i32, i64, u8, u16, u32);
number_from!(Float as f64: f32, f64);

impl From<Decimal> for Number {
    fn from(d: Decimal) -> Self {
        Number::Decimal(d)
    }
}

/// One argument of a namespace call.
///
/// Strings come in two flavors. [`Arg::lit`] is always a quoted string
/// literal and [`Arg::raw`] is always embedded as Molang. A plain `&str` or
/// `String` converts to [`Arg::Text`], which the renderer classifies by
/// prefix: `"q.is_baby"` is embedded raw, `"poison"` becomes `'poison'`.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Already-rendered Molang, embedded unchanged
    Expr(Molang),
    /// String literal, always quoted
    Literal(String),
    /// Plain string of unknown intent, classified by prefix at render time
    Text(String),
    Number(Number),
    Bool(bool),
    /// Optional parameter left out; dropped from the argument list
    Omitted,
}

impl Arg {
    /// A string literal, quoted even if it looks like Molang.
    pub fn lit(text: impl Into<String>) -> Self {
        Arg::Literal(text.into())
    }

    /// Strict literal: rejects text containing `'`, which Molang cannot
    /// represent inside a string literal.
    pub fn try_literal(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.contains('\'') {
            return Err(MolangError::EmbeddedQuote(text));
        }
        Ok(Arg::Literal(text))
    }

    /// Trusted Molang text, never quoted.
    pub fn raw(text: impl Into<String>) -> Self {
        Arg::Expr(Molang::raw(text))
    }

    /// Resolves a plain string against the default prefix set right away.
    pub fn compat(text: &str) -> Self {
        if ArgPrinter::default().prefixes().matches(text) {
            Arg::raw(text)
        } else {
            Arg::lit(text)
        }
    }

    pub fn is_omitted(&self) -> bool {
        matches!(self, Arg::Omitted)
    }
}

impl From<Molang> for Arg {
    fn from(m: Molang) -> Self {
        Arg::Expr(m)
    }
}

impl From<&Molang> for Arg {
    fn from(m: &Molang) -> Self {
        Arg::Expr(m.clone())
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Text(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Text(s)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<Number> for Arg {
    fn from(n: Number) -> Self {
        Arg::Number(n)
    }
}

impl From<Decimal> for Arg {
    fn from(d: Decimal) -> Self {
        Arg::Number(Number::Decimal(d))
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Omitted, Into::into)
    }
}

impl From<Operand> for Arg {
    fn from(op: Operand) -> Self {
        op.0
    }
}

/// Right-hand side of an operator.
///
/// Unlike [`Arg`], a native string here is always a quoted literal: in
/// `q.get_name == "q.x"` the string is data, not code. Slot, hand and
/// graphics mode constants are quoted too, since Molang compares them as
/// strings: `q.equipped_item_slot == 'slot.weapon.offhand'`.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand(pub(crate) Arg);

impl Operand {
    pub fn render(&self) -> String {
        ArgPrinter::default().print_arg(&self.0).unwrap_or_default()
    }

    /// Like [`Operand::render`], parenthesizing ternaries, arrows and
    /// assignments so they keep their grouping inside an operator.
    pub fn render_grouped(&self) -> String {
        match &self.0 {
            Arg::Expr(m) => m.grouped().into_owned(),
            _ => self.render(),
        }
    }
}

impl From<Molang> for Operand {
    fn from(m: Molang) -> Self {
        Operand(Arg::Expr(m))
    }
}

impl From<&Molang> for Operand {
    fn from(m: &Molang) -> Self {
        Operand(Arg::Expr(m.clone()))
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand(Arg::lit(s))
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand(Arg::Literal(s))
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand(Arg::Bool(b))
    }
}

impl From<Number> for Operand {
    fn from(n: Number) -> Self {
        Operand(Arg::Number(n))
    }
}

impl From<Decimal> for Operand {
    fn from(d: Decimal) -> Self {
        Operand(Arg::from(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_strings_defer_classification() {
        assert_eq!(Arg::from("poison"), Arg::Text("poison".into()));
        assert_eq!(Arg::compat("poison"), Arg::Literal("poison".into()));
        assert_eq!(Arg::compat("q.is_baby"), Arg::raw("q.is_baby"));
    }

    #[test]
    fn none_is_omitted() {
        assert!(Arg::from(None::<i32>).is_omitted());
        assert_eq!(Arg::from(Some(2)), Arg::Number(Number::Int(2)));
    }

    #[test]
    fn try_literal_rejects_quotes() {
        assert_eq!(
            Arg::try_literal("it's"),
            Err(MolangError::EmbeddedQuote("it's".into()))
        );
        assert!(Arg::try_literal("fine").is_ok());
    }

    #[test]
    fn operand_strings_are_always_literals() {
        assert_eq!(Operand::from("q.is_baby").render(), "'q.is_baby'");
        assert_eq!(Operand::from(Molang::raw("q.is_baby")).render(), "q.is_baby");
        assert_eq!(Operand::from(1.5).render(), "1.5");
    }
}
