use super::Operand;
use crate::value::Molang;

/// Ternary `<condition> ? <a> : (<b>)`.
///
/// Only the else branch is parenthesized; content built against older
/// packs compares these strings byte for byte.
///
/// ```
/// use molang_builder::{conditional, Query};
///
/// let scale = conditional(Query::is_baby(), 0.5, 1);
/// assert_eq!(scale.to_string(), "q.is_baby ? 0.5 : (1)");
/// ```
pub fn conditional(
    condition: impl Into<Operand>,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Molang {
    Molang::loose(format!(
        "{} ? {} : ({})",
        condition.into().render_grouped(),
        a.into().render(),
        b.into().render()
    ))
}

/// Scope arrow `<left> -> <right>`: evaluates `right` on the entity `left`
/// refers to.
pub fn arrow(left: impl Into<Operand>, right: impl Into<Operand>) -> Molang {
    Molang::loose(format!(
        "{} -> {}",
        left.into().render_grouped(),
        right.into().render()
    ))
}
