//! Integration tests for the prism rules
//!
//! Each test expands an annotated enum and compares the printed source of
//! the generated declarations.

use prismatic::engine::registry::{expand, AttachmentKind};
use prismatic::engine::ExpandError;
use prismatic::syntax::builder::{element, element_with, labeled, other, positional, ty};
use prismatic::syntax::builder::{CaseBuilder, EnumBuilder, StructBuilder};
use prismatic::syntax::{Attribute, Decl, GeneratedDecl, MarkerName, SourcePrinter, Visibility};

fn prism_source(attribute: Attribute, decl: &Decl) -> String {
    let generated = expand(&attribute, AttachmentKind::Member, decl).unwrap();
    SourcePrinter::new().print(&generated)
}

fn prism(decl: &Decl) -> String {
    prism_source(Attribute::marker(MarkerName::Prism), decl)
}

// ============================================================================
// Whole-enum rule
// ============================================================================

#[test]
fn test_empty_enum_generates_nothing() {
    let color = EnumBuilder::new("Color").into_decl();
    let generated = expand(&Attribute::marker(MarkerName::Prism), AttachmentKind::Member, &color);
    assert_eq!(generated, Ok(vec![]));
}

#[test]
fn test_single_case_without_payload() {
    let color = EnumBuilder::new("Color").case("red").into_decl();
    assert_eq!(
        prism(&color),
        "\
var red: Void? {
    if case .red = self {
        ()
    } else {
        nil
    }
}

var isRed: Bool {
    if case .red = self {
        true
    } else {
        false
    }
}"
    );
}

#[test]
fn test_single_unnamed_value() {
    let color = EnumBuilder::new("Color")
        .case_with("red", vec![positional(ty("Double"))])
        .into_decl();
    assert_eq!(
        prism(&color),
        "\
var red: Double? {
    get {
        guard case let .red(value) = self else {
            return nil
        }
        return value
    }
    set {
        guard case .red = self, let newValue = newValue else {
            return
        }
        self = .red(newValue)
    }
}

var isRed: Bool {
    if case .red = self {
        true
    } else {
        false
    }
}"
    );
}

#[test]
fn test_dual_named_values() {
    let color = EnumBuilder::new("Color")
        .case_with(
            "red",
            vec![labeled("brightness", ty("Double")), labeled("opacity", ty("Double"))],
        )
        .into_decl();
    let source = prism(&color);
    assert!(source.starts_with(
        "\
var red: (brightness: Double, opacity: Double)? {
    get {
        guard case let .red(brightness, opacity) = self else {
            return nil
        }
        return (brightness: brightness, opacity: opacity)
    }
    set {
        guard case .red = self, let newValue = newValue else {
            return
        }
        self = .red(brightness: newValue.brightness, opacity: newValue.opacity)
    }
}"
    ));
}

#[test]
fn test_dual_values_only_first_named() {
    let color = EnumBuilder::new("Color")
        .case_with("red", vec![labeled("brightness", ty("Double")), positional(ty("Double"))])
        .into_decl();
    let source = prism(&color);
    assert!(source.contains("var red: (brightness: Double, Double)? {"));
    assert!(source.contains("guard case let .red(brightness, associatedValue1) = self else {"));
    assert!(source.contains("return (brightness: brightness, associatedValue1)"));
    assert!(source.contains("self = .red(brightness: newValue.brightness, newValue.1)"));
}

#[test]
fn test_dual_unnamed_values() {
    let color = EnumBuilder::new("Color")
        .case_with("red", vec![positional(ty("Double")), positional(ty("Double"))])
        .into_decl();
    let source = prism(&color);
    assert!(source.contains("var red: (Double, Double)? {"));
    assert!(source.contains("return (associatedValue0, associatedValue1)"));
    assert!(source.contains("self = .red(newValue.0, newValue.1)"));
}

#[test]
fn test_visibility_prefixes_every_member() {
    let color = EnumBuilder::new("Color").case("red").into_decl();
    for (visibility, keyword) in [
        (Visibility::Public, "public"),
        (Visibility::Internal, "internal"),
        (Visibility::FilePrivate, "fileprivate"),
        (Visibility::Private, "private"),
    ] {
        let source = prism_source(
            Attribute::marker(MarkerName::Prism).with_visibility(visibility),
            &color,
        );
        assert!(source.contains(&format!("{} var red: Void? {{", keyword)));
        assert!(source.contains(&format!("{} var isRed: Bool {{", keyword)));
    }
}

#[test]
fn test_prisms_precede_predicates() {
    let color = EnumBuilder::new("Color")
        .group(
            CaseBuilder::new()
                .element(element("red"))
                .element(element("green"))
                .element(element("blue")),
        )
        .into_decl();
    let generated = expand(&Attribute::marker(MarkerName::Prism), AttachmentKind::Member, &color)
        .unwrap();
    let names: Vec<&str> = generated
        .iter()
        .map(|decl| match decl {
            GeneratedDecl::Member(member) => member.name(),
            GeneratedDecl::Extension(_) => panic!("expected members"),
        })
        .collect();
    assert_eq!(names, vec!["red", "green", "blue", "isRed", "isGreen", "isBlue"]);
}

#[test]
fn test_non_ascii_case_names_keep_their_accessors() {
    let drink = EnumBuilder::new("Drink")
        .case("café")
        .case("tea")
        .case("über")
        .into_decl();
    let generated = expand(&Attribute::marker(MarkerName::Prism), AttachmentKind::Member, &drink)
        .unwrap();
    assert_eq!(generated.len(), 6);

    let source = prism(&drink);
    assert!(source.contains("var café: Void? {"));
    assert!(source.contains("var isCafé: Bool {"));
    assert!(source.contains("var isÜber: Bool {"));
}

#[test]
fn test_no_prism_lines_are_skipped() {
    let color = EnumBuilder::new("Color")
        .case("red")
        .group(
            CaseBuilder::new()
                .marker(MarkerName::NoPrism)
                .element(element("green"))
                .element(element("blue")),
        )
        .into_decl();
    let source = prism(&color);
    assert!(source.contains("var red: Void?"));
    assert!(!source.contains("green"));
    assert!(!source.contains("blue"));
}

#[test]
fn test_non_case_members_are_ignored() {
    let color = EnumBuilder::new("Color")
        .case("red")
        .member(other("var", "blablabla"))
        .member(other("func", "blebleble"))
        .into_decl();
    let generated = expand(&Attribute::marker(MarkerName::Prism), AttachmentKind::Member, &color)
        .unwrap();
    assert_eq!(generated.len(), 2);
}

#[test]
fn test_mixed_enum() {
    let bla = EnumBuilder::new("Bla")
        .attribute(Attribute::marker(MarkerName::Prism).with_visibility(Visibility::Public))
        .group(
            CaseBuilder::new()
                .element(element("x"))
                .element(element("y"))
                .element(element("z")),
        )
        .group(CaseBuilder::new().element(element("zzzz")).element(element("xxxx")))
        .group(
            CaseBuilder::new()
                .attribute(
                    Attribute::marker(MarkerName::PrismCase).with_visibility(Visibility::Private),
                )
                .element(element_with("a", vec![positional(ty("String"))])),
        )
        .case("b")
        .case_with("c", vec![positional(ty("Int")), labeled("other", ty("Date"))])
        .case_with("d", vec![labeled("first", ty("Int")), labeled("other", ty("Date"))])
        .case_with("e", vec![positional(ty("Int")), positional(ty("Date"))])
        .case("someLongName")
        .group(CaseBuilder::new().marker(MarkerName::NoPrism).element(element("toBeIgnored")))
        .group(
            CaseBuilder::new()
                .marker(MarkerName::NoPrism)
                .element(element("both"))
                .element(element("are")),
        )
        .member(other("var", "blablabla"))
        .into_decl();

    let generated = expand(
        &Attribute::marker(MarkerName::Prism).with_visibility(Visibility::Public),
        AttachmentKind::Member,
        &bla,
    )
    .unwrap();
    let names: Vec<&str> = generated
        .iter()
        .flat_map(GeneratedDecl::members)
        .map(|member| member.name())
        .collect();
    assert_eq!(
        names,
        vec![
            "x", "y", "z", "zzzz", "xxxx", "b", "c", "d", "e", "someLongName", "isX", "isY",
            "isZ", "isZzzz", "isXxxx", "isB", "isC", "isD", "isE", "isSomeLongName",
        ]
    );

    let source = SourcePrinter::new().print(&generated);
    assert!(source.contains(
        "\
public var d: (first: Int, other: Date)? {
    get {
        guard case let .d(first, other) = self else {
            return nil
        }
        return (first: first, other: other)
    }
    set {
        guard case .d = self, let newValue = newValue else {
            return
        }
        self = .d(first: newValue.first, other: newValue.other)
    }
}"
    ));

    // The opted-in line is expanded by its own marker, with its own visibility
    let Decl::Enum(decl) = &bla else { unreachable!() };
    let line_a = decl.case_groups().nth(2).unwrap();
    let peer = expand(
        &line_a.attributes[0],
        AttachmentKind::Peer,
        &Decl::EnumCase(line_a.clone()),
    )
    .unwrap();
    let peer_source = SourcePrinter::new().print(&peer);
    assert!(peer_source.starts_with("private var a: String? {"));
    assert!(peer_source.contains("private var isA: Bool {"));
}

// ============================================================================
// Extension form
// ============================================================================

#[test]
fn test_extension_form_splits_prisms_and_predicates() {
    let color = EnumBuilder::new("Color").case("red").into_decl();
    let generated = expand(&Attribute::marker(MarkerName::Prism), AttachmentKind::Extension, &color)
        .unwrap();
    assert_eq!(generated.len(), 2);
    assert_eq!(
        SourcePrinter::new().print(&generated),
        "\
extension Color {
    var red: Void? {
        if case .red = self {
            ()
        } else {
            nil
        }
    }
}

extension Color {
    var isRed: Bool {
        if case .red = self {
            true
        } else {
            false
        }
    }
}"
    );
}

#[test]
fn test_extension_form_omits_empty_extensions() {
    let color = EnumBuilder::new("Color").into_decl();
    let generated = expand(&Attribute::marker(MarkerName::Prism), AttachmentKind::Extension, &color)
        .unwrap();
    assert!(generated.is_empty());
}

// ============================================================================
// Single-case rules
// ============================================================================

#[test]
fn test_prism_case_inline_group() {
    let group = CaseBuilder::new()
        .marker(MarkerName::PrismCase)
        .element(element("green"))
        .element(element("blue"))
        .into_decl();
    let generated = expand(&Attribute::marker(MarkerName::PrismCase), AttachmentKind::Peer, &group)
        .unwrap();
    let names: Vec<&str> = generated
        .iter()
        .flat_map(GeneratedDecl::members)
        .map(|member| member.name())
        .collect();
    assert_eq!(names, vec!["green", "blue", "isGreen", "isBlue"]);
}

#[test]
fn test_no_prism_generates_nothing() {
    let group = CaseBuilder::new().element(element("green")).into_decl();
    let generated = expand(&Attribute::marker(MarkerName::NoPrism), AttachmentKind::Peer, &group);
    assert_eq!(generated, Ok(vec![]));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_prism_on_struct_fails() {
    let card = StructBuilder::new("Color").into_decl();
    let result = expand(&Attribute::marker(MarkerName::Prism), AttachmentKind::Member, &card);
    assert_eq!(result, Err(ExpandError::NotAnEnum));
    assert_eq!(
        result.unwrap_err().to_string(),
        "This macro has to be attached to an Enum declaration"
    );
}

#[test]
fn test_case_markers_on_enum_fail() {
    let color = EnumBuilder::new("Color").case("red").into_decl();
    for marker in [MarkerName::PrismCase, MarkerName::NoPrism] {
        let result = expand(&Attribute::marker(marker), AttachmentKind::Peer, &color);
        assert_eq!(result, Err(ExpandError::NotAnEnumCase));
    }
}

#[test]
fn test_prism_case_as_extension_is_unsupported() {
    let group = CaseBuilder::new().element(element("red")).into_decl();
    let result = expand(&Attribute::marker(MarkerName::PrismCase), AttachmentKind::Extension, &group);
    assert_eq!(
        result,
        Err(ExpandError::UnsupportedAttachment {
            marker: MarkerName::PrismCase,
            kind: AttachmentKind::Extension,
        })
    );
}

#[test]
fn test_attribute_spellings_resolve() {
    let color = EnumBuilder::new("Color").case("red").into_decl();
    for name in ["Prism", "@Prism", "MyMacros.Prism", " @Prism "] {
        let result = expand(&Attribute::new(name), AttachmentKind::Member, &color);
        assert!(result.is_ok(), "{} should resolve", name);
    }
}
