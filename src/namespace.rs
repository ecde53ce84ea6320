//! Namespace factories: `q.`, `c.`, `v.`, `t.` and `math.`.
//!
//! Built-ins are declared with the `builtins!` macro, which generates one
//! typed function per built-in plus the matching [`Builtin`] table:
//!
//! ```text
//! builtins! {
//!     table = BUILTINS;
//!     handle = "math";
//!
//!     /// Linear interpolation
//!     lerp = "lerp" (start, end, t) clamp { 2 => UNIT } -> Molang;
//! }
//! ```
//!
//! Parameter lists are `(required [optional]; ..variadic)`. Every parameter
//! takes `impl Into<Arg>`; a variadic tail takes any iterable of them.

use crate::catalog::{self, Builtin};
use crate::error::{MolangError, Result};
use crate::expr::Arg;
use crate::render::ArgPrinter;
use crate::value::Molang;

macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

macro_rules! builtin_entry {
    ($name:literal; $($req:ident)*; $($opt:ident)*; $($rest:ident)?; $($idx:literal => $bound:ident),*) => {
        $crate::catalog::Builtin {
            name: $name,
            required: count!($($req)*),
            optional: count!($($opt)*),
            variadic: count!($($rest)?) > 0,
            bounds: &[$($crate::catalog::ArgBound::new($idx, $crate::catalog::Bound::$bound)),*],
        }
    };
}

macro_rules! builtins {
    (
        table = $table:ident;
        handle = $handle:expr;
        $(
            $(#[$meta:meta])*
            $fn_name:ident = $name:literal
                ( $($req:ident),* $([$($opt:ident),*])? $(; ..$rest:ident)? )
                $(clamp { $($idx:literal => $bound:ident),* })?
                -> $ret:ident;
        )*
    ) => {
        pub const $table: &'static [$crate::catalog::Builtin] = &[
            $(
                builtin_entry!(
                    $name; $($req)*; $($($opt)*)?; $($rest)?; $($($idx => $bound),*)?
                ),
            )*
        ];

        $(
            $(#[$meta])*
            pub fn $fn_name(
                $($req: impl Into<$crate::expr::Arg>,)*
                $($($opt: impl Into<$crate::expr::Arg>,)*)?
                $($rest: impl IntoIterator<Item = impl Into<$crate::expr::Arg>>)?
            ) -> $ret {
                const ENTRY: $crate::catalog::Builtin = builtin_entry!(
                    $name; $($req)*; $($($opt)*)?; $($rest)?; $($($idx => $bound),*)?
                );
                #[allow(unused_mut)]
                let mut args: Vec<$crate::expr::Arg> = vec![$($req.into(),)* $($($opt.into(),)*)?];
                $(args.extend($rest.into_iter().map(Into::into));)?
                $ret::from($crate::namespace::render_builtin(
                    &$crate::render::ArgPrinter::default(),
                    $handle,
                    &ENTRY,
                    args,
                ))
            }
        )*
    };
}

pub mod context;
pub mod math;
pub mod query;
pub mod variable;

pub use context::ContextHandle;
pub use math::Math;
pub use query::{Context, Query, QueryHandle, Scope};
pub use variable::{Temp, Variable, Variables};

/// Compile-time tag for an entity-scoped namespace sharing the query
/// catalog.
pub trait Handle {
    /// Short prefix used when rendering (`q`, `c`)
    const PREFIX: &'static str;
    /// Built-ins only this namespace has
    const EXTRA: &'static [Builtin] = &[];
}

/// By-name access to a namespace's catalog.
///
/// The typed functions (`Query::is_baby()`) cover known call sites; this
/// trait serves call sites that pick the built-in at runtime.
pub trait Namespace {
    const HANDLE: &'static str;

    fn builtins() -> &'static [Builtin];

    fn builtin(name: &str) -> Option<&'static Builtin> {
        catalog::find(Self::builtins(), name)
    }

    /// Renders a call to `name`, checking it exists and gets a valid number
    /// of arguments. Omitted arguments do not count.
    fn call<I, A>(name: &str, args: I) -> Result<Molang>
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        Self::call_with(&ArgPrinter::default(), name, args)
    }

    /// Like [`Namespace::call`], rendering with a custom printer.
    fn call_with<I, A>(printer: &ArgPrinter, name: &str, args: I) -> Result<Molang>
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        let builtin = Self::builtin(name).ok_or_else(|| MolangError::UnknownBuiltin {
            namespace: Self::HANDLE,
            name: name.to_string(),
        })?;
        let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
        let supplied = args.iter().filter(|a| !a.is_omitted()).count();
        builtin.check_arity(&format!("{}.{}", Self::HANDLE, name), supplied)?;
        Ok(render_builtin(printer, Self::HANDLE, builtin, args))
    }
}

/// Clamps bounded literal arguments, then renders the call.
///
/// Only numeric literals are clamped. An expression argument's runtime value
/// is unknown here and passes through untouched.
pub fn render_builtin(
    printer: &ArgPrinter,
    handle: &str,
    builtin: &Builtin,
    mut args: Vec<Arg>,
) -> Molang {
    for rule in builtin.bounds {
        if let Some(Arg::Number(n)) = args.get_mut(rule.index) {
            let clamped = rule.bound.apply(*n);
            if clamped != *n {
                tracing::debug!(
                    builtin = builtin.name,
                    index = rule.index,
                    from = ?*n,
                    to = ?clamped,
                    "clamped argument"
                );
                *n = clamped;
            }
        }
    }
    Molang::raw(printer.print_call(handle, builtin.name, &args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_checks_existence() {
        let err = Query::call("is_wizard", Vec::<Arg>::new()).unwrap_err();
        assert_eq!(
            err,
            MolangError::UnknownBuiltin {
                namespace: "q",
                name: "is_wizard".into()
            }
        );
    }

    #[test]
    fn call_checks_arity() {
        let err = Math::call("lerp", [1, 2]).unwrap_err();
        assert!(matches!(err, MolangError::Arity { got: 2, .. }));
    }

    #[test]
    fn call_renders_with_clamping() {
        let m = Query::call("position", [5]).unwrap();
        assert_eq!(m.as_str(), "q.position(2)");
    }

    #[test]
    fn omitted_arguments_do_not_count() {
        let m = Query::call("cooldown_time", [Arg::Omitted]).unwrap();
        assert_eq!(m.as_str(), "q.cooldown_time");
    }

    #[test]
    fn custom_printer_applies_to_by_name_calls() {
        let printer = ArgPrinter::new(crate::render::Prefixes::new().with("array"));
        let m = Query::call_with(&printer, "has_tag", ["array.tags[0]"]).unwrap();
        assert_eq!(m.as_str(), "q.has_tag(array.tags[0])");
    }
}
