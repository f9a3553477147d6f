//! Accessor-pair generation
//!
//! For one enum case this builds the prism (`var red: Payload?`) and the
//! predicate (`var isRed: Bool`). The payload type and the payload
//! projection in the accessor bodies are derived from the same
//! [`PayloadSlot`] list, which is what keeps `get` and `set` inverse to each
//! other:
//!
//! | parameters        | payload type        | get returns                        | set passes              |
//! |-------------------|---------------------|------------------------------------|-------------------------|
//! | none              | `Void`              | `()`                               | (no setter)             |
//! | `(x: T)` / `(T)`  | `T`                 | `value`                            | `x: newValue` / `newValue` |
//! | `(T, other: U)`   | `(T, other: U)`     | `(associatedValue0, other: other)` | `newValue.0, other: newValue.other` |

use crate::syntax::attribute::Visibility;
use crate::syntax::decl::{CaseElement, Parameter};
use crate::syntax::expr::{Expr, LabeledExpr};
use crate::syntax::generated::{AccessorBody, ComputedProperty, Member};
use crate::syntax::ident::predicate_name;
use crate::syntax::stmt::{CasePattern, Condition, Stmt};
use crate::syntax::types::{TupleTypeElement, TypeSyntax};

/// Name bound to the single associated value in a getter
const VALUE: &str = "value";
/// The implicit setter argument
const NEW_VALUE: &str = "newValue";

/// How one associated value is addressed inside the generated bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadSlot {
    /// The parameter label, if any
    pub label: Option<String>,
    /// Name bound by the getter's case pattern: the label, or `associatedValue<i>`
    pub binding: String,
    /// Member of the payload tuple the setter reads: the label, or the index
    pub accessor: String,
}

/// Address every associated value of a case
pub fn payload_slots(parameters: &[Parameter]) -> Vec<PayloadSlot> {
    parameters
        .iter()
        .enumerate()
        .map(|(index, parameter)| match &parameter.label {
            Some(label) => PayloadSlot {
                label: Some(label.clone()),
                binding: label.clone(),
                accessor: label.clone(),
            },
            None => PayloadSlot {
                label: None,
                binding: format!("associatedValue{}", index),
                accessor: index.to_string(),
            },
        })
        .collect()
}

/// The type wrapped by a case's prism
///
/// Zero parameters give `Void`, one gives its type verbatim (labels do not
/// affect the type), more give a tuple keeping labels and order.
pub fn payload_type(parameters: &[Parameter]) -> TypeSyntax {
    match parameters {
        [] => TypeSyntax::void(),
        [single] => single.ty.clone(),
        many => TypeSyntax::Tuple(
            many.iter()
                .map(|parameter| TupleTypeElement {
                    label: parameter.label.clone(),
                    ty: parameter.ty.clone(),
                })
                .collect(),
        ),
    }
}

/// Both generated members for a case
pub fn accessor_pair(element: &CaseElement, visibility: Option<Visibility>) -> (Member, Member) {
    (prism(element, visibility), predicate(element, visibility))
}

/// `var <case>: <Payload>? { ... }`
pub fn prism(element: &CaseElement, visibility: Option<Visibility>) -> Member {
    let parameters = element.parameters();
    let accessors = if parameters.is_empty() {
        AccessorBody::Getter(vec![if_case(
            &element.name,
            Stmt::Expr(Expr::unit()),
            Stmt::Expr(Expr::Nil),
        )])
    } else {
        let slots = payload_slots(parameters);
        AccessorBody::GetSet {
            get: getter(&element.name, &slots),
            set: setter(&element.name, &slots),
        }
    };

    Member::Property(ComputedProperty {
        visibility,
        name: element.name.clone(),
        ty: payload_type(parameters).optional(),
        accessors,
    })
}

/// `var is<Case>: Bool { ... }`
pub fn predicate(element: &CaseElement, visibility: Option<Visibility>) -> Member {
    Member::Property(ComputedProperty {
        visibility,
        name: predicate_name(&element.name),
        ty: TypeSyntax::bool(),
        accessors: AccessorBody::Getter(vec![if_case(
            &element.name,
            Stmt::Expr(Expr::BooleanLiteral(true)),
            Stmt::Expr(Expr::BooleanLiteral(false)),
        )]),
    })
}

fn if_case(case_name: &str, matched: Stmt, otherwise: Stmt) -> Stmt {
    Stmt::If {
        conditions: vec![Condition::Case(CasePattern::new(case_name, Expr::self_ref()))],
        then_body: vec![matched],
        else_body: Some(vec![otherwise]),
    }
}

fn getter(case_name: &str, slots: &[PayloadSlot]) -> Vec<Stmt> {
    let (bindings, result) = match slots {
        [_] => (vec![VALUE.to_string()], Expr::ident(VALUE)),
        _ => (
            slots.iter().map(|slot| slot.binding.clone()).collect(),
            Expr::Tuple(
                slots
                    .iter()
                    .map(|slot| LabeledExpr {
                        label: slot.label.clone(),
                        expr: Expr::ident(slot.binding.clone()),
                    })
                    .collect(),
            ),
        ),
    };

    vec![
        Stmt::Guard {
            conditions: vec![Condition::Case(
                CasePattern::new(case_name, Expr::self_ref()).binding(bindings),
            )],
            else_body: vec![Stmt::Return(Some(Expr::Nil))],
        },
        Stmt::Return(Some(result)),
    ]
}

fn setter(case_name: &str, slots: &[PayloadSlot]) -> Vec<Stmt> {
    let arguments = match slots {
        [slot] => vec![LabeledExpr {
            label: slot.label.clone(),
            expr: Expr::ident(NEW_VALUE),
        }],
        _ => slots
            .iter()
            .map(|slot| LabeledExpr {
                label: slot.label.clone(),
                expr: Expr::member(Expr::ident(NEW_VALUE), slot.accessor.clone()),
            })
            .collect(),
    };

    vec![
        Stmt::Guard {
            conditions: vec![
                Condition::Case(CasePattern::new(case_name, Expr::self_ref())),
                Condition::OptionalBinding {
                    name: NEW_VALUE.to_string(),
                    value: Expr::ident(NEW_VALUE),
                },
            ],
            else_body: vec![Stmt::Return(None)],
        },
        Stmt::Assign {
            target: Expr::self_ref(),
            value: Expr::call(Expr::implicit_member(case_name), arguments),
        },
    ]
}
