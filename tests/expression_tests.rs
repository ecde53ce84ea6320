use molang_builder::{Math, Molang, Query, Slot, Variable, arrow, conditional};

fn v(name: &str) -> Molang {
    Variable::named(name).unwrap()
}

#[test]
fn test_arithmetic_is_parenthesized() {
    assert_eq!((v("a") + 1).to_string(), "(v.a + 1)");
    assert_eq!((v("a") - v("b")).to_string(), "(v.a - v.b)");
    assert_eq!((v("a") * 2.5).to_string(), "(v.a * 2.5)");
    assert_eq!((v("a") / 4).to_string(), "(v.a / 4)");
}

#[test]
fn test_grouping_is_preserved() {
    let left = (v("a") + v("b")) * v("c");
    let right = v("a") + v("b") * v("c");
    assert_eq!(left.to_string(), "((v.a + v.b) * v.c)");
    assert_eq!(right.to_string(), "(v.a + (v.b * v.c))");
    assert_ne!(left, right);
}

#[test]
fn test_scalar_on_the_left() {
    assert_eq!((1i32 - v("a")).to_string(), "(1 - v.a)");
    assert_eq!((2.0f64 * Query::is_baby()).to_string(), "(2 * q.is_baby)");
}

#[test]
fn test_borrowed_operands_do_not_consume() {
    let a = v("a");
    let sum = &a + &a;
    assert_eq!(sum.to_string(), "(v.a + v.a)");
    assert_eq!(a.to_string(), "v.a");
}

#[test]
fn test_routed_operators() {
    assert_eq!((v("a") % 3).to_string(), "math.mod(v.a, 3)");
    assert_eq!(v("a").floor_div(2).to_string(), "math.floor((v.a / 2))");
    assert_eq!(v("a").pow(2).to_string(), "math.pow(v.a, 2)");
    assert_eq!((-v("a")).to_string(), "-v.a");
}

#[test]
fn test_comparisons_and_logic() {
    assert_eq!(v("a").equals(1).to_string(), "(v.a == 1)");
    assert_eq!(v("a").not_equals(1).to_string(), "(v.a != 1)");
    assert_eq!(v("a").lt(1).to_string(), "(v.a < 1)");
    assert_eq!(v("a").ge(1).to_string(), "(v.a >= 1)");
    assert_eq!((Query::is_baby() & Query::is_alive()).to_string(), "(q.is_baby && q.is_alive)");
    assert_eq!((Query::is_baby() | Query::is_alive()).to_string(), "(q.is_baby || q.is_alive)");
    assert_eq!((!Query::is_baby()).to_string(), "!(q.is_baby)");
    assert_eq!(v("a").coalesce(0).to_string(), "(v.a ?? 0)");
}

#[test]
fn test_string_operands_are_literals() {
    let m = Query::has_tag("x").equals("q.not_a_prefix_here");
    assert_eq!(m.to_string(), "(q.has_tag('x') == 'q.not_a_prefix_here')");
}

#[test]
fn test_conditional_wraps_else_branch() {
    let m = conditional(Query::is_baby(), 1, 0);
    assert_eq!(m.to_string(), "q.is_baby ? 1 : (0)");
    let nested = conditional(v("a"), v("b"), conditional(v("c"), 1, 2));
    assert_eq!(nested.to_string(), "v.a ? v.b : (v.c ? 1 : (2))");
}

#[test]
fn test_arrow_and_assignment() {
    assert_eq!(arrow(v("target"), Query::is_baby()).to_string(), "v.target -> q.is_baby");
    assert_eq!(v("a").assign(Math::pi()).to_string(), "v.a = math.pi;");
}

#[test]
fn test_serializes_as_plain_string() {
    let m = Query::position(1) * 16;
    assert_eq!(serde_json::to_string(&m).unwrap(), "\"(q.position(1) * 16)\"");
    let value: serde_json::Value = m.into();
    assert_eq!(value, serde_json::Value::String("(q.position(1) * 16)".into()));
}

#[test]
fn test_ternary_operand_keeps_its_grouping() {
    let scale = conditional(Query::is_baby(), 1, 0);
    assert_eq!((scale.clone() * 2).to_string(), "((q.is_baby ? 1 : (0)) * 2)");
    assert_eq!((2i32 * scale.clone()).to_string(), "(2 * (q.is_baby ? 1 : (0)))");
    assert_eq!(scale.equals(1).to_string(), "((q.is_baby ? 1 : (0)) == 1)");
    assert_eq!((-scale.clone()).to_string(), "-(q.is_baby ? 1 : (0))");
    assert_eq!(scale.to_string(), "q.is_baby ? 1 : (0)");
}

#[test]
fn test_arrow_and_assignment_operands_keep_their_grouping() {
    let health = arrow(v("target"), Query::health());
    assert_eq!((health + 1).to_string(), "((v.target -> q.health) + 1)");
    let stmt = v("a").assign(1);
    assert_eq!((v("b") + stmt).to_string(), "(v.b + (v.a = 1;))");
}

#[test]
fn test_ternary_as_condition_is_grouped() {
    let inner = conditional(v("a"), 1, 0);
    assert_eq!(conditional(inner, 2, 3).to_string(), "(v.a ? 1 : (0)) ? 2 : (3)");
}

#[test]
fn test_double_negation_stays_valid() {
    assert_eq!((-Molang::number(-1)).to_string(), "-(-1)");
    assert_eq!((-(-v("a"))).to_string(), "-(-v.a)");
}

#[test]
fn test_constant_operands_compare_as_strings() {
    let m = v("slot").equals(Slot::OffHand);
    assert_eq!(m.to_string(), "(v.slot == 'slot.weapon.offhand')");
}
