//! # Molang expression construction
//!
//! Building blocks shared by every namespace:
//!
//! - **[args]** - call arguments ([`Arg`]), operator operands ([`Operand`]) and
//!   numeric literals ([`Number`])
//! - **[operators]** - infix and prefix operator tables
//! - **[overloads]** - `std::ops` implementations on [`Molang`](crate::Molang)
//! - **[structs]** - member accessors for struct-valued queries
//! - **[conditions]** - ternary and scope-arrow forms
//!
//! ## Parenthesization
//!
//! Every binary operator result is wrapped in parentheses, so a rendered
//! value keeps its grouping wherever it is embedded:
//!
//! ```text
//! (v.a + v.b) * v.c   =>  ((v.a + v.b) * v.c)
//! v.a + v.b * v.c     =>  (v.a + (v.b * v.c))
//! ```
//!
//! ## Quoting
//!
//! ```text
//! q.has_tag("poison")            =>  q.has_tag('poison')
//! q.has_tag("q.is_baby")         =>  q.has_tag(q.is_baby)
//! q.has_tag(Arg::lit("q.x"))     =>  q.has_tag('q.x')
//! q.get_name.equals("q.x")       =>  (q.get_name == 'q.x')
//! ```
pub mod args;
pub mod conditions;
pub mod operators;
pub mod overloads;
pub mod structs;

pub use args::{Arg, Number, Operand};
pub use conditions::{arrow, conditional};
pub use operators::{BinOp, UnaryOp};
pub use structs::{Rgba, Trs, Vec3};
