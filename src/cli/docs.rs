//! Documentation content for the molang CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Namespaces,
    Operators,
    Quoting,
    Structs,
    Conditions,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "namespaces" | "namespace" | "ns" => Some(Self::Namespaces),
            "operators" | "ops" => Some(Self::Operators),
            "quoting" | "quotes" | "strings" => Some(Self::Quoting),
            "structs" | "struct" => Some(Self::Structs),
            "conditions" | "ternary" | "arrow" => Some(Self::Conditions),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"MOLANG BUILDER DOCUMENTATION

molang renders Molang expressions: the small language Bedrock evaluates for
animation bindings, render controllers and component conditions. It builds the
text only; nothing is evaluated.

DOCUMENTATION CATEGORIES

  namespaces        q, c, v, t and math, and how calls render
  operators         Arithmetic, comparison, logical and routed operators
  quoting           When an argument becomes 'quoted' and when it stays raw
  structs           Member access on vector, TRS and color results
  conditions        Ternary and scope-arrow forms

QUICK REFERENCE

  molang call q is_baby               q.is_baby
  molang call q has_tag poison        q.has_tag('poison')
  molang call q position 7            q.position(2)
  molang call math lerp 0 10 0.5      math.lerp(0, 10, 0.5)
  molang catalog math                 list math built-ins

Run 'molang doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Namespaces) => Ok(NAMESPACES_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Quoting) => Ok(QUOTING_DOC),
        Some(DocCategory::Structs) => Ok(STRUCTS_DOC),
        Some(DocCategory::Conditions) => Ok(CONDITIONS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const NAMESPACES_DOC: &str = r#"NAMESPACES

  q.      query       Entity and world state (is_baby, position, bone_rotation)
  c.      context     Same catalog as q, plus owning_entity, other, item_slot
  v.      variable    Engine variables (attack_time) and pack-declared ones
  t.      temp        Scratch variables inside one expression
  math.   math        Math functions (lerp, clamp, sin, die_roll)

CALL SHAPE

  With arguments:     q.has_tag('poison')
  Without arguments:  q.is_baby            (no parentheses)
  Omitted optional:   q.cooldown_time      (trailing optional dropped)

CLAMPING

Some arguments are clamped silently to the range the engine accepts:

  axis                0..=2     q.position, q.movement_direction
  camera axis         0..=1     q.camera_rotation, q.rotation_to_camera
  light level         0..=16    q.light_level
  frame lookback      0..=30    q.last_frame_time and friends
  blend factor        0..=1     math.lerp, math.lerprotate

Only literal numbers are clamped. An expression argument passes through.

  molang call q position 5            q.position(2)
  molang call math lerp 0 1 2         math.lerp(0, 1, 1)
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

Every binary result is parenthesized, so grouping survives nesting.
Ternary, arrow and assignment results are parenthesized when used as an
operand: (q.is_baby ? 1 : (0)) * 2

ARITHMETIC
  a + b       (a + b)
  a - b       (a - b)
  a * b       (a * b)
  a / b       (a / b)
  a % b       math.mod(a, b)
  floor_div   math.floor((a / b))
  pow         math.pow(a, b)
  -a          -a       (-(-a) when a is already negative)

COMPARISON
  equals      (a == b)
  not_equals  (a != b)
  lt gt       (a < b)  (a > b)
  le ge       (a <= b) (a >= b)

LOGICAL
  a & b       (a && b)
  a | b       (a || b)
  !a          !(a)
  coalesce    (a ?? b)

A string on the right of an operator is always a quoted literal:
  q.get_name equals "Steve"     (q.get_name == 'Steve')
"#;

const QUOTING_DOC: &str = r#"QUOTING

Call arguments are rendered as follows:

  expression          embedded unchanged      q.has_tag(c.owning_entity)
  Arg::lit("x")       always quoted           q.has_tag('x')
  Arg::raw("x")       never quoted            q.has_tag(x)
  plain string        quoted, unless it starts with a namespace prefix
                      "poison"     ->  'poison'
                      "q.is_baby"  ->  q.is_baby
  number / boolean    printed literally       math.abs(-3)  q.all(true)
  omitted             dropped

Recognized prefixes: q. c. v. t. query. context. variable. temp. math.
Add more with --prefix (for example --prefix array).

Molang strings have no escapes; single quotes inside a literal are removed.
"#;

const STRUCTS_DOC: &str = r#"STRUCTS

Some queries return structs. Their members are dotted paths:

  q.bone_rotation('head').y           vector: x y z
  q.bone_orientation_trs('arm').r.x   TRS: t (translation) r (rotation) s (scale)
  q.spellcolor.a                      color: r g b a

Member access is purely textual; nothing checks that the base is a struct.
"#;

const CONDITIONS_DOC: &str = r#"CONDITIONS

TERNARY
  conditional(cond, a, b)     cond ? a : (b)

  conditional(q.is_baby, 0.5, 1)
  => q.is_baby ? 0.5 : (1)

Only the else branch is parenthesized.

ARROW
  arrow(left, right)          left -> right

Evaluates the right side on the entity the left side refers to.

  (context.owning_entity -> q.is_sneaking)
"#;
