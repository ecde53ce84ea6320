use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::Namespace;
use crate::catalog::Builtin;
use crate::error::{MolangError, Result};
use crate::value::Molang;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern"));

fn check_identifier(name: &str) -> Result<()> {
    if IDENTIFIER.is_match(name) {
        Ok(())
    } else {
        Err(MolangError::InvalidIdentifier(name.to_string()))
    }
}

/// `v.` variables.
///
/// The catalog lists variables the engine itself sets on players and
/// attachables. Variables a pack declares for itself go through
/// [`Variable::named`] or a [`Variables`] registry.
#[derive(Debug, Clone, Copy)]
pub struct Variable;

impl Namespace for Variable {
    const HANDLE: &'static str = "v";

    fn builtins() -> &'static [Builtin] {
        Self::BUILTINS
    }
}

impl Variable {
    builtins! {
        table = BUILTINS;
        handle = "v";

        attack_time = "attack_time" () -> Molang;
        is_first_person = "is_first_person" () -> Molang;
        is_paperdoll = "is_paperdoll" () -> Molang;
        is_using_vr = "is_using_vr" () -> Molang;
        is_blinking = "is_blinking" () -> Molang;
        is_holding_left = "is_holding_left" () -> Molang;
        is_holding_right = "is_holding_right" () -> Molang;
        is_brandishing_spear = "is_brandishing_spear" () -> Molang;
        is_horse_eating = "is_horse_eating" () -> Molang;
        is_sleeping = "is_sleeping" () -> Molang;
        player_x_rotation = "player_x_rotation" () -> Molang;
        player_arm_height = "player_arm_height" () -> Molang;
        gliding_speed_value = "gliding_speed_value" () -> Molang;
        bob_animation = "bob_animation" () -> Molang;
        hand_bob = "hand_bob" () -> Molang;
        map_angle = "map_angle" () -> Molang;
        item_use_normalized = "item_use_normalized" () -> Molang;
        charge_amount = "charge_amount" () -> Molang;
    }

    /// `v.<name>` for any valid identifier, without registering it.
    pub fn named(name: &str) -> Result<Molang> {
        check_identifier(name)?;
        Ok(Molang::raw(format!("v.{name}")))
    }
}

/// `t.` scratch variables, scoped to one expression.
#[derive(Debug, Clone, Copy)]
pub struct Temp;

impl Temp {
    pub const HANDLE: &'static str = "t";

    pub fn named(name: &str) -> Result<Molang> {
        check_identifier(name)?;
        Ok(Molang::raw(format!("t.{name}")))
    }
}

/// Append-only registry of variables declared by content.
///
/// Owned by whoever is authoring a pack, so no global state is involved.
/// Registering the same name twice returns the same accessor.
///
/// ```
/// use molang_builder::Variables;
///
/// let mut vars = Variables::new();
/// let charge = vars.set_var("charge").unwrap();
/// assert_eq!(charge.to_string(), "v.charge");
/// assert_eq!(vars.get("charge"), Some(charge));
/// assert!(vars.set_var("2fast").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Variables {
    order: Vec<String>,
    accessors: HashMap<String, Molang>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` and returns `v.<name>`.
    pub fn set_var(&mut self, name: &str) -> Result<Molang> {
        if let Some(existing) = self.accessors.get(name) {
            return Ok(existing.clone());
        }
        let accessor = Variable::named(name)?;
        tracing::debug!(name, "registered variable");
        self.order.push(name.to_string());
        self.accessors.insert(name.to_string(), accessor.clone());
        Ok(accessor)
    }

    pub fn get(&self, name: &str) -> Option<Molang> {
        self.accessors.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.accessors.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
