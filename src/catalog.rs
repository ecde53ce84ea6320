//! Built-in tables.
//!
//! Each namespace declares its built-ins once (see the `builtins!` macro in
//! [`namespace`](crate::namespace)); the declaration produces both the typed
//! factory functions and a [`Builtin`] table. The table drives clamping,
//! by-name calls and the `molang catalog` listing.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::Serialize;

use crate::error::{MolangError, Result};
use crate::expr::Number;

/// Inclusive numeric range for one argument.
///
/// Clamping is silent. Integral bounds also truncate fractional input toward
/// zero, so an axis of `1.7` becomes `1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bound {
    pub min: f64,
    pub max: f64,
    pub integral: bool,
}

impl Bound {
    /// World axis index: 0 = x, 1 = y, 2 = z
    pub const AXIS: Bound = Bound::integral(0.0, 2.0);
    /// Camera axis index: 0 = x, 1 = y
    pub const CAMERA_AXIS: Bound = Bound::integral(0.0, 1.0);
    /// Block light level
    pub const LIGHT_LEVEL: Bound = Bound::integral(0.0, 16.0);
    /// Number of past frames a frame-time query may look back
    pub const FRAME_LOOKBACK: Bound = Bound::integral(0.0, 30.0);
    /// Blend factor
    pub const UNIT: Bound = Bound::real(0.0, 1.0);

    pub const fn integral(min: f64, max: f64) -> Self {
        Bound {
            min,
            max,
            integral: true,
        }
    }

    pub const fn real(min: f64, max: f64) -> Self {
        Bound {
            min,
            max,
            integral: false,
        }
    }

    /// Clamps a literal into this bound.
    pub fn apply(&self, n: Number) -> Number {
        match n {
            Number::Int(i) => Number::Int(i.clamp(self.min.ceil() as i64, self.max.floor() as i64)),
            Number::Float(f) if self.integral => {
                Number::Int(f.trunc().clamp(self.min, self.max) as i64)
            }
            Number::Float(f) => Number::Float(f.clamp(self.min, self.max)),
            Number::Decimal(d) => self.apply_decimal(d),
        }
    }

    fn apply_decimal(&self, d: Decimal) -> Number {
        let (Some(lo), Some(hi)) = (Decimal::from_f64(self.min), Decimal::from_f64(self.max))
        else {
            return Number::Decimal(d);
        };
        let d = if self.integral { d.trunc() } else { d };
        let clamped = d.clamp(lo, hi);
        match clamped.to_i64() {
            Some(i) if self.integral => Number::Int(i),
            _ => Number::Decimal(clamped),
        }
    }

    pub fn contains(&self, n: Number) -> bool {
        let value = match n {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
            Number::Decimal(d) => match d.to_f64() {
                Some(f) => f,
                None => return false,
            },
        };
        value >= self.min && value <= self.max
    }
}

/// Clamp rule for the argument at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArgBound {
    pub index: usize,
    pub bound: Bound,
}

impl ArgBound {
    pub const fn new(index: usize, bound: Bound) -> Self {
        ArgBound { index, bound }
    }
}

/// One built-in function or property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Builtin {
    pub name: &'static str,
    /// Arguments that must be present
    pub required: usize,
    /// Trailing arguments that may be omitted
    pub optional: usize,
    /// Accepts any number of further arguments
    pub variadic: bool,
    pub bounds: &'static [ArgBound],
}

impl Builtin {
    /// Maximum argument count, `None` when variadic.
    pub fn max_args(&self) -> Option<usize> {
        (!self.variadic).then_some(self.required + self.optional)
    }

    /// Human-readable arity: `0`, `2`, `0..=1`, `1+`.
    pub fn arity(&self) -> String {
        match self.max_args() {
            None => format!("{}+", self.required),
            Some(max) if max == self.required => self.required.to_string(),
            Some(max) => format!("{}..={}", self.required, max),
        }
    }

    /// Errors unless `got` arguments fit this built-in.
    pub fn check_arity(&self, qualified: &str, got: usize) -> Result<()> {
        let too_many = self.max_args().is_some_and(|max| got > max);
        if got < self.required || too_many {
            return Err(MolangError::Arity {
                name: qualified.to_string(),
                expected: self.arity(),
                got,
            });
        }
        Ok(())
    }

    pub fn bound_for(&self, index: usize) -> Option<Bound> {
        self.bounds.iter().find(|b| b.index == index).map(|b| b.bound)
    }
}

/// Looks a built-in up by name.
pub fn find(table: &'static [Builtin], name: &str) -> Option<&'static Builtin> {
    table.iter().find(|b| b.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_bounds_truncate_and_clamp() {
        assert_eq!(Bound::AXIS.apply(Number::Int(7)), Number::Int(2));
        assert_eq!(Bound::AXIS.apply(Number::Int(-1)), Number::Int(0));
        assert_eq!(Bound::AXIS.apply(Number::Float(1.7)), Number::Int(1));
        assert_eq!(Bound::FRAME_LOOKBACK.apply(Number::Float(99.0)), Number::Int(30));
        assert_eq!(Bound::LIGHT_LEVEL.apply(Number::Int(20)), Number::Int(16));
    }

    #[test]
    fn real_bounds_keep_fractions() {
        assert_eq!(Bound::UNIT.apply(Number::Float(0.25)), Number::Float(0.25));
        assert_eq!(Bound::UNIT.apply(Number::Float(1.5)), Number::Float(1.0));
        assert_eq!(Bound::UNIT.apply(Number::Int(3)), Number::Int(1));
    }

    #[test]
    fn decimal_bounds() {
        let d = Decimal::new(175, 2);
        assert_eq!(Bound::UNIT.apply(Number::Decimal(d)), Number::Decimal(Decimal::ONE));
        assert_eq!(Bound::AXIS.apply(Number::Decimal(d)), Number::Int(1));
    }

    #[test]
    fn nan_integral_clamps_to_zero() {
        assert!(Bound::AXIS.contains(Bound::AXIS.apply(Number::Float(f64::NAN))));
    }

    #[test]
    fn arity_strings() {
        let fixed = Builtin { name: "a", required: 2, optional: 0, variadic: false, bounds: &[] };
        let opt = Builtin { name: "b", required: 0, optional: 1, variadic: false, bounds: &[] };
        let var = Builtin { name: "c", required: 1, optional: 0, variadic: true, bounds: &[] };
        assert_eq!(fixed.arity(), "2");
        assert_eq!(opt.arity(), "0..=1");
        assert_eq!(var.arity(), "1+");
        assert!(var.check_arity("q.c", 9).is_ok());
        assert!(fixed.check_arity("q.a", 3).is_err());
        assert!(opt.check_arity("q.b", 0).is_ok());
    }
}
