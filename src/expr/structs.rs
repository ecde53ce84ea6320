use std::fmt;

use crate::value::Molang;

/// Member access on an expression that evaluates to a 3-component vector,
/// such as `q.bone_rotation('head')`.
///
/// ```
/// use molang_builder::Query;
///
/// let rot = Query::bone_rotation("head");
/// assert_eq!(rot.y().to_string(), "q.bone_rotation('head').y");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vec3 {
    base: Molang,
}

impl Vec3 {
    pub fn new(base: Molang) -> Self {
        Vec3 { base }
    }

    pub fn x(&self) -> Molang {
        member(&self.base, "x")
    }

    pub fn y(&self) -> Molang {
        member(&self.base, "y")
    }

    pub fn z(&self) -> Molang {
        member(&self.base, "z")
    }

    pub fn as_molang(&self) -> &Molang {
        &self.base
    }
}

/// Translation/rotation/scale bundle, as returned by
/// `q.bone_orientation_trs`. Each part is itself a [`Vec3`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trs {
    base: Molang,
}

impl Trs {
    pub fn new(base: Molang) -> Self {
        Trs { base }
    }

    /// `<base>.t`
    pub fn translation(&self) -> Vec3 {
        Vec3::new(member(&self.base, "t"))
    }

    /// `<base>.r`
    pub fn rotation(&self) -> Vec3 {
        Vec3::new(member(&self.base, "r"))
    }

    /// `<base>.s`
    pub fn scale(&self) -> Vec3 {
        Vec3::new(member(&self.base, "s"))
    }

    pub fn as_molang(&self) -> &Molang {
        &self.base
    }
}

/// Color struct with `r`, `g`, `b` and `a` members (`q.spellcolor`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rgba {
    base: Molang,
}

impl Rgba {
    pub fn new(base: Molang) -> Self {
        Rgba { base }
    }

    pub fn r(&self) -> Molang {
        member(&self.base, "r")
    }

    pub fn g(&self) -> Molang {
        member(&self.base, "g")
    }

    pub fn b(&self) -> Molang {
        member(&self.base, "b")
    }

    pub fn a(&self) -> Molang {
        member(&self.base, "a")
    }

    pub fn as_molang(&self) -> &Molang {
        &self.base
    }
}

fn member(base: &Molang, name: &str) -> Molang {
    Molang::raw(format!("{base}.{name}"))
}

macro_rules! struct_conversions {
    ($($ty:ident),*) => {
        $(
            impl From<Molang> for $ty {
                fn from(base: Molang) -> Self {
                    $ty::new(base)
                }
            }

            impl From<$ty> for Molang {
                fn from(s: $ty) -> Self {
                    s.base
                }
            }

            impl From<$ty> for super::Arg {
                fn from(s: $ty) -> Self {
                    super::Arg::Expr(s.base)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&self.base, f)
                }
            }
        )*
    };
}

struct_conversions!(Vec3, Trs, Rgba);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trs_parts_chain_into_vec3() {
        let trs = Trs::new(Molang::raw("q.bone_orientation_trs('arm')"));
        assert_eq!(trs.rotation().x().as_str(), "q.bone_orientation_trs('arm').r.x");
        assert_eq!(trs.translation().z().as_str(), "q.bone_orientation_trs('arm').t.z");
        assert_eq!(trs.scale().y().as_str(), "q.bone_orientation_trs('arm').s.y");
    }

    #[test]
    fn rgba_members() {
        let color = Rgba::new(Molang::raw("q.spellcolor"));
        assert_eq!(color.a().as_str(), "q.spellcolor.a");
        assert_eq!(color.to_string(), "q.spellcolor");
    }

    #[test]
    fn vec3_unwraps_to_base() {
        let v = Vec3::new(Molang::raw("v.dir"));
        assert_eq!(Molang::from(v.clone()).as_str(), "v.dir");
        assert_eq!(v.as_molang().as_str(), "v.dir");
    }
}
