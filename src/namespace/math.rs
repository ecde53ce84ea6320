use super::Namespace;
use crate::catalog::Builtin;
use crate::value::Molang;

/// `math.` built-ins.
///
/// Math functions accept any numeric domain and never clamp, except the blend
/// factor of [`Math::lerp`] and [`Math::lerprotate`], which is clamped into
/// `[0, 1]` when it is a numeric literal. An expression factor is left alone.
///
/// ```
/// use molang_builder::{Math, Query};
///
/// assert_eq!(Math::lerp(0, 10, 0.5).to_string(), "math.lerp(0, 10, 0.5)");
/// assert_eq!(Math::lerp(0, 10, 4).to_string(), "math.lerp(0, 10, 1)");
/// assert_eq!(
///     Math::lerp(0, 10, Query::anim_time()).to_string(),
///     "math.lerp(0, 10, q.anim_time)"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Math;

impl Namespace for Math {
    const HANDLE: &'static str = "math";

    fn builtins() -> &'static [Builtin] {
        Self::BUILTINS
    }
}

impl Math {
    builtins! {
        table = BUILTINS;
        handle = "math";

        abs = "abs" (value) -> Molang;
        acos = "acos" (value) -> Molang;
        asin = "asin" (value) -> Molang;
        atan = "atan" (value) -> Molang;
        atan2 = "atan2" (y, x) -> Molang;
        ceil = "ceil" (value) -> Molang;
        clamp = "clamp" (value, min, max) -> Molang;
        copy_sign = "copy_sign" (a, b) -> Molang;
        cos = "cos" (degrees) -> Molang;
        /// Sum of `num` random values in `[low, high)`.
        die_roll = "die_roll" (num, low, high) -> Molang;
        die_roll_integer = "die_roll_integer" (num, low, high) -> Molang;
        exp = "exp" (value) -> Molang;
        floor = "floor" (value) -> Molang;
        /// `3t^2 - 2t^3`
        hermite_blend = "hermite_blend" (t) -> Molang;
        inverse_lerp = "inverse_lerp" (start, end, value) -> Molang;
        lerp = "lerp" (start, end, t) clamp { 2 => UNIT } -> Molang;
        /// Like `lerp`, taking the shortest path around the circle.
        lerprotate = "lerprotate" (start, end, t) clamp { 2 => UNIT } -> Molang;
        ln = "ln" (value) -> Molang;
        max = "max" (a, b) -> Molang;
        min = "min" (a, b) -> Molang;
        min_angle = "min_angle" (degrees) -> Molang;
        /// `math.mod`
        modulo = "mod" (value, denominator) -> Molang;
        pi = "pi" () -> Molang;
        pow = "pow" (base, exponent) -> Molang;
        random = "random" (low, high) -> Molang;
        random_integer = "random_integer" (low, high) -> Molang;
        round = "round" (value) -> Molang;
        sign = "sign" (value) -> Molang;
        sin = "sin" (degrees) -> Molang;
        sqrt = "sqrt" (value) -> Molang;
        trunc = "trunc" (value) -> Molang;

        // Easing curves: (start, end, t)
        ease_in_quad = "ease_in_quad" (start, end, t) -> Molang;
        ease_out_quad = "ease_out_quad" (start, end, t) -> Molang;
        ease_in_out_quad = "ease_in_out_quad" (start, end, t) -> Molang;
        ease_in_cubic = "ease_in_cubic" (start, end, t) -> Molang;
        ease_out_cubic = "ease_out_cubic" (start, end, t) -> Molang;
        ease_in_out_cubic = "ease_in_out_cubic" (start, end, t) -> Molang;
        ease_in_quart = "ease_in_quart" (start, end, t) -> Molang;
        ease_out_quart = "ease_out_quart" (start, end, t) -> Molang;
        ease_in_out_quart = "ease_in_out_quart" (start, end, t) -> Molang;
        ease_in_quint = "ease_in_quint" (start, end, t) -> Molang;
        ease_out_quint = "ease_out_quint" (start, end, t) -> Molang;
        ease_in_out_quint = "ease_in_out_quint" (start, end, t) -> Molang;
        ease_in_sine = "ease_in_sine" (start, end, t) -> Molang;
        ease_out_sine = "ease_out_sine" (start, end, t) -> Molang;
        ease_in_out_sine = "ease_in_out_sine" (start, end, t) -> Molang;
        ease_in_expo = "ease_in_expo" (start, end, t) -> Molang;
        ease_out_expo = "ease_out_expo" (start, end, t) -> Molang;
        ease_in_out_expo = "ease_in_out_expo" (start, end, t) -> Molang;
        ease_in_circ = "ease_in_circ" (start, end, t) -> Molang;
        ease_out_circ = "ease_out_circ" (start, end, t) -> Molang;
        ease_in_out_circ = "ease_in_out_circ" (start, end, t) -> Molang;
        ease_in_back = "ease_in_back" (start, end, t) -> Molang;
        ease_out_back = "ease_out_back" (start, end, t) -> Molang;
        ease_in_out_back = "ease_in_out_back" (start, end, t) -> Molang;
        ease_in_elastic = "ease_in_elastic" (start, end, t) -> Molang;
        ease_out_elastic = "ease_out_elastic" (start, end, t) -> Molang;
        ease_in_out_elastic = "ease_in_out_elastic" (start, end, t) -> Molang;
        ease_in_bounce = "ease_in_bounce" (start, end, t) -> Molang;
        ease_out_bounce = "ease_out_bounce" (start, end, t) -> Molang;
        ease_in_out_bounce = "ease_in_out_bounce" (start, end, t) -> Molang;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Molang;

    #[test]
    fn only_lerp_factors_are_bounded() {
        for b in Math::BUILTINS {
            let bounded = !b.bounds.is_empty();
            assert_eq!(bounded, b.name == "lerp" || b.name == "lerprotate", "{}", b.name);
        }
    }

    #[test]
    fn lerprotate_clamps_literals_only() {
        assert_eq!(Math::lerprotate(0, 90, -1).as_str(), "math.lerprotate(0, 90, 0)");
        let t = Molang::raw("v.t") * 2;
        assert_eq!(Math::lerprotate(0, 90, t).as_str(), "math.lerprotate(0, 90, (v.t * 2))");
    }

    #[test]
    fn pi_is_a_property() {
        assert_eq!(Math::pi().as_str(), "math.pi");
    }

    #[test]
    fn other_functions_pass_values_through() {
        assert_eq!(Math::clamp(15, 0, 10).as_str(), "math.clamp(15, 0, 10)");
        assert_eq!(Math::modulo(7, 3).as_str(), "math.mod(7, 3)");
    }
}
