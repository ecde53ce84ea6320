use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::expr::{BinOp, Number, Operand, UnaryOp};
use crate::namespace::Math;
use crate::render;

/// One rendered Molang sub-expression.
///
/// A `Molang` is always syntactically complete: every operator application
/// wraps its result in parentheses, and ternaries, arrows and assignments are
/// parenthesized when they become an operand, so the value can be used as an
/// operand of any other operator without changing its grouping. Values are
/// immutable; every operation returns a new one. Nothing is ever evaluated,
/// the rendered text is the only output.
///
/// # Examples
///
/// ```
/// use molang_builder::{Molang, Query};
///
/// let speed = Query::modified_move_speed() * 2;
/// assert_eq!(speed.to_string(), "(q.modified_move_speed * 2)");
///
/// let grounded = Query::is_on_ground() & !Query::is_jumping();
/// assert_eq!(grounded.to_string(), "(q.is_on_ground && !(q.is_jumping))");
///
/// let raw = Molang::raw("v.attack_time");
/// assert_eq!(raw.gt(0).to_string(), "(v.attack_time > 0)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Molang {
    text: String,
    precedence: Precedence,
}

/// How tightly a rendered expression binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Precedence {
    /// Members, calls, literals and parenthesized operator results
    Atom,
    /// Ternary, arrow and assignment forms, which need parentheses as operands
    Loose,
}

impl Molang {
    /// Wraps text that is already valid Molang. The text is trusted as-is.
    pub fn raw(text: impl Into<String>) -> Self {
        Molang {
            text: text.into(),
            precedence: Precedence::Atom,
        }
    }

    pub(crate) fn loose(text: impl Into<String>) -> Self {
        Molang {
            text: text.into(),
            precedence: Precedence::Loose,
        }
    }

    /// A single-quoted string literal, e.g. `'minecraft:stick'`.
    pub fn literal(text: &str) -> Self {
        Molang::raw(render::quote(text))
    }

    /// A numeric literal.
    pub fn number(n: impl Into<Number>) -> Self {
        Molang::raw(render::print_number(&n.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Text for use inside a larger expression.
    pub(crate) fn grouped(&self) -> Cow<'_, str> {
        match self.precedence {
            Precedence::Atom => Cow::Borrowed(&self.text),
            Precedence::Loose => Cow::Owned(format!("({})", self.text)),
        }
    }

    pub(crate) fn binary(&self, op: BinOp, rhs: impl Into<Operand>) -> Molang {
        Molang::raw(format!(
            "({} {} {})",
            self.grouped(),
            op.symbol(),
            rhs.into().render_grouped()
        ))
    }

    pub(crate) fn unary(&self, op: UnaryOp) -> Molang {
        match op {
            // `--x` is not a valid Molang negation
            UnaryOp::Negate if self.text.starts_with('-') => {
                Molang::raw(format!("-({})", self.text))
            }
            UnaryOp::Negate => Molang::raw(format!("-{}", self.grouped())),
            UnaryOp::Not => Molang::raw(format!("!({})", self.text)),
        }
    }

    /// `(self == rhs)`
    pub fn equals(&self, rhs: impl Into<Operand>) -> Molang {
        self.binary(BinOp::Equal, rhs)
    }

    /// `(self != rhs)`
    pub fn not_equals(&self, rhs: impl Into<Operand>) -> Molang {
        self.binary(BinOp::NotEqual, rhs)
    }

    pub fn lt(&self, rhs: impl Into<Operand>) -> Molang {
        self.binary(BinOp::LessThan, rhs)
    }

    pub fn gt(&self, rhs: impl Into<Operand>) -> Molang {
        self.binary(BinOp::GreaterThan, rhs)
    }

    pub fn le(&self, rhs: impl Into<Operand>) -> Molang {
        self.binary(BinOp::LessEqual, rhs)
    }

    pub fn ge(&self, rhs: impl Into<Operand>) -> Molang {
        self.binary(BinOp::GreaterEqual, rhs)
    }

    /// `(self && rhs)`, same as `&`.
    pub fn and(&self, rhs: impl Into<Operand>) -> Molang {
        self.binary(BinOp::And, rhs)
    }

    /// `(self || rhs)`, same as `|`.
    pub fn or(&self, rhs: impl Into<Operand>) -> Molang {
        self.binary(BinOp::Or, rhs)
    }

    /// `(self ?? rhs)`: `rhs` when `self` is an unset variable.
    pub fn coalesce(&self, rhs: impl Into<Operand>) -> Molang {
        self.binary(BinOp::NullCoalesce, rhs)
    }

    /// `math.floor((self / rhs))`
    pub fn floor_div(&self, rhs: impl Into<Operand>) -> Molang {
        Math::floor(self.binary(BinOp::Divide, rhs))
    }

    /// `math.pow(self, rhs)`
    pub fn pow(&self, rhs: impl Into<Operand>) -> Molang {
        let rhs: Operand = rhs.into();
        Math::pow(self.clone(), rhs)
    }

    /// Assignment statement `self = value;`, for variables set in
    /// pre-animation and initialize scripts.
    ///
    /// ```
    /// use molang_builder::{Query, Variables};
    ///
    /// let mut vars = Variables::new();
    /// let timer = vars.set_var("timer").unwrap();
    /// let stmt = timer.assign(Query::life_time());
    /// assert_eq!(stmt.to_string(), "v.timer = q.life_time;");
    /// ```
    pub fn assign(&self, value: impl Into<Operand>) -> Molang {
        Molang::loose(format!("{} = {};", self.text, value.into().render()))
    }

    /// `self -> rhs`, evaluating `rhs` in the entity `self` refers to.
    pub fn arrow(&self, rhs: impl Into<Operand>) -> Molang {
        crate::expr::arrow(self.clone(), rhs)
    }
}

impl fmt::Display for Molang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Molang {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Molang> for String {
    fn from(m: Molang) -> Self {
        m.text
    }
}

/// Content builders embed expressions as JSON string values.
impl From<Molang> for serde_json::Value {
    fn from(m: Molang) -> Self {
        serde_json::Value::String(m.text)
    }
}

impl Serialize for Molang {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparisons_quote_native_strings() {
        let name = Molang::raw("q.get_name");
        assert_eq!(name.equals("Steve").to_string(), "(q.get_name == 'Steve')");
        assert_eq!(name.not_equals("q.x").to_string(), "(q.get_name != 'q.x')");
    }

    #[test]
    fn comparisons_embed_expressions() {
        let a = Molang::raw("v.a");
        let b = Molang::raw("v.b");
        assert_eq!(a.le(&b).to_string(), "(v.a <= v.b)");
        assert_eq!(a.ge(b).to_string(), "(v.a >= v.b)");
    }

    #[test]
    fn floor_div_and_pow_route_through_math() {
        let a = Molang::raw("v.a");
        assert_eq!(a.floor_div(2).to_string(), "math.floor((v.a / 2))");
        assert_eq!(a.pow(3).to_string(), "math.pow(v.a, 3)");
    }

    #[test]
    fn coalesce_renders_double_question_mark() {
        let a = Molang::raw("v.maybe");
        assert_eq!(a.coalesce(0).to_string(), "(v.maybe ?? 0)");
    }

    #[test]
    fn serializes_as_json_string() {
        let m = Molang::raw("q.is_baby");
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"q.is_baby\"");
        assert_eq!(serde_json::Value::from(m), serde_json::json!("q.is_baby"));
    }

    #[test]
    fn literal_and_number_constructors() {
        assert_eq!(Molang::literal("minecraft:stick").as_str(), "'minecraft:stick'");
        assert_eq!(Molang::number(1.25).as_str(), "1.25");
    }
}
