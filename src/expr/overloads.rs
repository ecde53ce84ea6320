//! `std::ops` implementations for [`Molang`].
//!
//! These build text; they never compute anything. `a + b` on two `Molang`
//! values yields the expression `(a + b)`.

use std::ops::{Add, BitAnd, BitOr, Div, Mul, Neg, Not, Rem, Sub};

use super::{BinOp, Operand, UnaryOp};
use crate::namespace::Math;
use crate::value::Molang;

macro_rules! binary_ops {
    ($($trait:ident :: $method:ident => $op:ident),* $(,)?) => {
        $(
            impl<T: Into<Operand>> $trait<T> for Molang {
                type Output = Molang;

                fn $method(self, rhs: T) -> Molang {
                    self.binary(BinOp::$op, rhs)
                }
            }

            impl<T: Into<Operand>> $trait<T> for &Molang {
                type Output = Molang;

                fn $method(self, rhs: T) -> Molang {
                    self.binary(BinOp::$op, rhs)
                }
            }
        )*
    };
}

binary_ops! {
    Add::add => Add,
    Sub::sub => Subtract,
    Mul::mul => Multiply,
    Div::div => Divide,
    BitAnd::bitand => And,
    BitOr::bitor => Or,
}

// Numbers on the left: `2 * q.health`.
macro_rules! scalar_lhs_ops {
    ($($scalar:ty),*) => {
        $(
            impl Add<Molang> for $scalar {
                type Output = Molang;

                fn add(self, rhs: Molang) -> Molang {
                    Molang::number(self).binary(BinOp::Add, rhs)
                }
            }

            impl Sub<Molang> for $scalar {
                type Output = Molang;

                fn sub(self, rhs: Molang) -> Molang {
                    Molang::number(self).binary(BinOp::Subtract, rhs)
                }
            }

            impl Mul<Molang> for $scalar {
                type Output = Molang;

                fn mul(self, rhs: Molang) -> Molang {
                    Molang::number(self).binary(BinOp::Multiply, rhs)
                }
            }

            impl Div<Molang> for $scalar {
                type Output = Molang;

                fn div(self, rhs: Molang) -> Molang {
                    Molang::number(self).binary(BinOp::Divide, rhs)
                }
            }
        )*
    };
}

scalar_lhs_ops!(i32, i64, f32, f64);

impl<T: Into<Operand>> Rem<T> for Molang {
    type Output = Molang;

    fn rem(self, rhs: T) -> Molang {
        let rhs: Operand = rhs.into();
        Math::modulo(self, rhs)
    }
}

impl<T: Into<Operand>> Rem<T> for &Molang {
    type Output = Molang;

    fn rem(self, rhs: T) -> Molang {
        let rhs: Operand = rhs.into();
        Math::modulo(self.clone(), rhs)
    }
}

impl Neg for Molang {
    type Output = Molang;

    fn neg(self) -> Molang {
        self.unary(UnaryOp::Negate)
    }
}

impl Neg for &Molang {
    type Output = Molang;

    fn neg(self) -> Molang {
        self.unary(UnaryOp::Negate)
    }
}

impl Not for Molang {
    type Output = Molang;

    fn not(self) -> Molang {
        self.unary(UnaryOp::Not)
    }
}

impl Not for &Molang {
    type Output = Molang;

    fn not(self) -> Molang {
        self.unary(UnaryOp::Not)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(name: &str) -> Molang {
        Molang::raw(format!("v.{name}"))
    }

    #[test]
    fn arithmetic_is_parenthesized() {
        assert_eq!((v("a") + v("b")).to_string(), "(v.a + v.b)");
        assert_eq!((v("a") - 1).to_string(), "(v.a - 1)");
        assert_eq!((v("a") * 0.5).to_string(), "(v.a * 0.5)");
        assert_eq!((v("a") / v("b")).to_string(), "(v.a / v.b)");
    }

    #[test]
    fn grouping_survives_nesting() {
        let grouped = (v("a") + v("b")) * v("c");
        let natural = v("a") + v("b") * v("c");
        assert_eq!(grouped.to_string(), "((v.a + v.b) * v.c)");
        assert_eq!(natural.to_string(), "(v.a + (v.b * v.c))");
        assert_ne!(grouped, natural);
    }

    #[test]
    fn logical_operators_use_molang_symbols() {
        assert_eq!((v("a") & v("b")).to_string(), "(v.a && v.b)");
        assert_eq!((v("a") | v("b")).to_string(), "(v.a || v.b)");
        assert_eq!((!v("a")).to_string(), "!(v.a)");
    }

    #[test]
    fn negate_prefixes_minus() {
        assert_eq!((-v("a")).to_string(), "-v.a");
        assert_eq!((-(v("a") + 1)).to_string(), "-(v.a + 1)");
    }

    #[test]
    fn modulo_routes_through_math() {
        assert_eq!((v("a") % 3).to_string(), "math.mod(v.a, 3)");
        assert_eq!((&v("a") % v("b")).to_string(), "math.mod(v.a, v.b)");
    }

    #[test]
    fn scalars_on_the_left() {
        assert_eq!((2i32 * v("a")).to_string(), "(2 * v.a)");
        assert_eq!((1.0f64 - v("a")).to_string(), "(1 - v.a)");
    }

    #[test]
    fn references_do_not_consume() {
        let a = v("a");
        let sum = &a + 1;
        assert_eq!(sum.to_string(), "(v.a + 1)");
        assert_eq!(a.to_string(), "v.a");
    }
}
