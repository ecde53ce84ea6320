//! String-valued constants accepted by equipment and graphics queries.
//!
//! As call arguments they behave like any plain string (quoted); as operator
//! operands they are quoted literals.

use crate::expr::{Arg, Operand};

macro_rules! string_constants {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),*
                }
            }

            pub fn from_name(s: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|c| c.as_str() == s)
            }
        }

        impl From<$name> for Arg {
            fn from(c: $name) -> Self {
                Arg::Text(c.as_str().to_string())
            }
        }

        impl From<$name> for Operand {
            fn from(c: $name) -> Self {
                Operand(Arg::lit(c.as_str()))
            }
        }
    };
}

string_constants! {
    /// Inventory and equipment slot names.
    pub enum Slot {
        MainHand => "slot.weapon.mainhand",
        OffHand => "slot.weapon.offhand",
        Head => "slot.armor.head",
        Chest => "slot.armor.chest",
        Legs => "slot.armor.legs",
        Feet => "slot.armor.feet",
        /// Horse and llama body armor
        Body => "slot.armor.body",
        Hotbar => "slot.hotbar",
        Inventory => "slot.inventory",
        EnderChest => "slot.enderchest",
        Saddle => "slot.saddle",
        Armor => "slot.armor",
        Container => "slot.chest",
        Equippable => "slot.equippable",
    }
}

string_constants! {
    /// Hand selector for `get_equipped_item_name` and friends.
    pub enum Hand {
        MainHand => "main_hand",
        OffHand => "off_hand",
    }
}

string_constants! {
    /// Graphics modes tested by `q.graphics_mode_is_any`.
    pub enum GraphicsMode {
        Simple => "simple",
        Fancy => "fancy",
        Deferred => "deferred",
        Raytraced => "raytraced",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ArgPrinter;

    #[test]
    fn constants_quote_as_arguments() {
        let printer = ArgPrinter::default();
        assert_eq!(
            printer.print_arg(&Arg::from(Slot::MainHand)).as_deref(),
            Some("'slot.weapon.mainhand'")
        );
        assert_eq!(Operand::from(GraphicsMode::Fancy).render(), "'fancy'");
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Hand::from_name("off_hand"), Some(Hand::OffHand));
        assert_eq!(Slot::from_name("slot.nowhere"), None);
    }
}
