//! Property-based tests using proptest
//!
//! Generated enums with arbitrary case shapes are expanded, and the
//! generated accessors are run through the interpreter to check their
//! behavior.

use prismatic::engine::registry::{expand, AttachmentKind};
use prismatic::eval::{get, set, Value};
use prismatic::syntax::builder::{ty, EnumBuilder};
use prismatic::syntax::generated::all_members;
use prismatic::syntax::{
    Attribute, ComputedProperty, Decl, GeneratedDecl, MarkerName, Parameter, SourcePrinter,
};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Labels of one case's associated values; `None` is positional
fn case_shape() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(proptest::option::of("p[a-z]{0,4}"), 0..4).prop_map(|labels| {
        labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| label.map(|l| format!("{}{}", l, i)))
            .collect()
    })
}

fn enum_shape() -> impl Strategy<Value = Vec<Vec<Option<String>>>> {
    prop::collection::vec(case_shape(), 1..6)
}

fn case_name(index: usize) -> String {
    format!("case{}", index)
}

fn build_enum(shape: &[Vec<Option<String>>]) -> Decl {
    shape
        .iter()
        .enumerate()
        .fold(EnumBuilder::new("Shape"), |builder, (i, labels)| {
            let parameters = labels
                .iter()
                .map(|label| Parameter {
                    label: label.clone(),
                    ty: ty("Int"),
                })
                .collect();
            builder.case_with(&case_name(i), parameters)
        })
        .into_decl()
}

fn expand_prisms(decl: &Decl) -> Vec<GeneratedDecl> {
    expand(&Attribute::marker(MarkerName::Prism), AttachmentKind::Member, decl).unwrap()
}

fn properties(generated: &[GeneratedDecl]) -> Vec<ComputedProperty> {
    all_members(generated)
        .into_iter()
        .filter_map(|member| member.as_property().cloned())
        .collect()
}

/// A value of case `index` whose payload is `seed`, `seed + 1`, ...
fn case_value(index: usize, labels: &[Option<String>], seed: i64) -> Value {
    let payload = labels
        .iter()
        .enumerate()
        .map(|(k, label)| (label.as_deref(), Value::Int(seed + k as i64)))
        .collect();
    Value::case(&case_name(index), payload)
}

/// What the prism of a case returns for `case_value(index, labels, seed)`
fn prism_value(labels: &[Option<String>], seed: i64) -> Value {
    match labels.len() {
        0 => Value::Unit,
        1 => Value::Int(seed),
        _ => Value::tuple(
            labels
                .iter()
                .enumerate()
                .map(|(k, label)| (label.as_deref(), Value::Int(seed + k as i64)))
                .collect(),
        ),
    }
}

// =============================================================================
// Exhaustiveness
// =============================================================================

proptest! {
    /// Every case gets exactly one prism and one predicate, prisms first
    #[test]
    fn test_every_case_has_accessor_pair(shape in enum_shape()) {
        let generated = expand_prisms(&build_enum(&shape));
        let names: Vec<String> = properties(&generated).into_iter().map(|p| p.name).collect();

        let mut expected: Vec<String> = (0..shape.len()).map(case_name).collect();
        expected.extend((0..shape.len()).map(|i| format!("isCase{}", i)));
        prop_assert_eq!(names, expected);
    }

    /// Prisms of cases with associated values are settable, others are not
    #[test]
    fn test_settable_iff_payload(shape in enum_shape()) {
        let generated = expand_prisms(&build_enum(&shape));
        let props = properties(&generated);
        for (i, labels) in shape.iter().enumerate() {
            prop_assert_eq!(props[i].is_settable(), !labels.is_empty());
        }
    }
}

// =============================================================================
// Mutual Exclusion
// =============================================================================

proptest! {
    /// Exactly one predicate holds and exactly one prism is non-nil
    #[test]
    fn test_exactly_one_case_matches(shape in enum_shape(), pick in any::<prop::sample::Index>(), seed in -1000i64..1000) {
        let generated = expand_prisms(&build_enum(&shape));
        let props = properties(&generated);
        let (prisms, predicates) = props.split_at(shape.len());

        let active = pick.index(shape.len());
        let value = case_value(active, &shape[active], seed);

        for (j, predicate) in predicates.iter().enumerate() {
            prop_assert_eq!(get(predicate, &value).unwrap(), Value::Bool(j == active));
        }
        for (j, prism) in prisms.iter().enumerate() {
            let read = get(prism, &value).unwrap();
            if j == active {
                prop_assert_eq!(read, prism_value(&shape[active], seed));
            } else {
                prop_assert_eq!(read, Value::Nil);
            }
        }
    }
}

// =============================================================================
// Round Trip
// =============================================================================

proptest! {
    /// Writing back what was read leaves the value unchanged
    #[test]
    fn test_set_get_round_trip(shape in enum_shape(), seed in -1000i64..1000) {
        let generated = expand_prisms(&build_enum(&shape));
        let props = properties(&generated);

        for (i, labels) in shape.iter().enumerate() {
            if labels.is_empty() {
                continue;
            }
            let original = case_value(i, labels, seed);
            let mut value = original.clone();
            let read = get(&props[i], &value).unwrap();
            set(&props[i], &mut value, read).unwrap();
            prop_assert_eq!(&value, &original);

            let replacement = prism_value(labels, seed + 100);
            set(&props[i], &mut value, replacement.clone()).unwrap();
            prop_assert_eq!(get(&props[i], &value).unwrap(), replacement);
            prop_assert_eq!(value, case_value(i, labels, seed + 100));
        }
    }

    /// Setting through the prism of another case, or setting nil, is a no-op
    #[test]
    fn test_set_other_case_is_noop(shape in enum_shape(), seed in -1000i64..1000) {
        prop_assume!(shape.len() >= 2);
        let generated = expand_prisms(&build_enum(&shape));
        let props = properties(&generated);

        let original = case_value(0, &shape[0], seed);
        for (j, labels) in shape.iter().enumerate().skip(1) {
            if labels.is_empty() {
                continue;
            }
            let mut value = original.clone();
            set(&props[j], &mut value, prism_value(labels, seed)).unwrap();
            prop_assert_eq!(&value, &original);
        }

        if !shape[0].is_empty() {
            let mut value = original.clone();
            set(&props[0], &mut value, Value::Nil).unwrap();
            prop_assert_eq!(&value, &original);
        }
    }
}

// =============================================================================
// Deterministic Formatting
// =============================================================================

proptest! {
    /// Expansion and printing are deterministic and survive serialization
    #[test]
    fn test_formatting_is_deterministic(shape in enum_shape()) {
        let decl = build_enum(&shape);
        let first = expand_prisms(&decl);
        let second = expand_prisms(&decl);
        prop_assert_eq!(&first, &second);

        let printer = SourcePrinter::new();
        let source = printer.print(&first);
        prop_assert_eq!(&source, &printer.print(&second));

        let json = serde_json::to_string(&first).unwrap();
        let decoded: Vec<GeneratedDecl> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(printer.print(&decoded), source);
    }

    /// Changing the indent string only changes leading whitespace
    #[test]
    fn test_indent_only_changes_whitespace(shape in enum_shape()) {
        let generated = expand_prisms(&build_enum(&shape));
        let spaces = SourcePrinter::new().print(&generated);
        let tabs = SourcePrinter::new().indent("\t").print(&generated);

        let strip = |s: &str| s.lines().map(|line| line.trim_start().to_string()).collect::<Vec<_>>();
        prop_assert_eq!(strip(&spaces), strip(&tabs));
    }
}
