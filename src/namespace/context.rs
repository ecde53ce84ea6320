use super::Handle;
use super::query::{Context, Scope};
use crate::catalog::Builtin;
use crate::expr::Operand;
use crate::value::Molang;

/// Handle for `c.`
#[derive(Debug, Clone, Copy)]
pub struct ContextHandle;

impl Handle for ContextHandle {
    const PREFIX: &'static str = "c";
    const EXTRA: &'static [Builtin] = Context::CONTEXT_BUILTINS;
}

impl Scope<ContextHandle> {
    builtins! {
        table = CONTEXT_BUILTINS;
        handle = ContextHandle::PREFIX;

        /// The entity that owns the current item, block or effect.
        owning_entity = "owning_entity" () -> Molang;
        /// The other entity in a two-entity filter.
        other = "other" () -> Molang;
        item_slot = "item_slot" () -> Molang;
        player_offhand_arm_height = "player_offhand_arm_height" () -> Molang;
    }

    /// Evaluates `nested` on the owning entity:
    /// `(context.owning_entity -> <nested>)`.
    ///
    /// ```
    /// use molang_builder::{Context, Query};
    ///
    /// let m = Context::owning_entity_then(Query::is_sneaking());
    /// assert_eq!(m.to_string(), "(context.owning_entity -> q.is_sneaking)");
    /// ```
    pub fn owning_entity_then(nested: impl Into<Operand>) -> Molang {
        Molang::raw(format!("(context.owning_entity -> {})", nested.into().render()))
    }
}
