pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod constants;
pub mod error;
pub mod expr;
pub mod namespace;
pub mod render;
pub mod value;

pub use catalog::{ArgBound, Bound, Builtin};
pub use constants::{GraphicsMode, Hand, Slot};
pub use error::{MolangError, Result};
pub use expr::{Arg, Number, Operand, Rgba, Trs, Vec3, arrow, conditional};
pub use namespace::{Context, Math, Namespace, Query, Temp, Variable, Variables};
pub use render::{ArgPrinter, Prefixes};
pub use value::Molang;
