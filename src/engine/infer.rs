//! Type inference for initializer parameters
//!
//! Runs on syntax only: there is no type checker behind it, so it recognizes
//! shapes whose type is evident from the spelling and gives up on the rest.
//! Giving up is not an error; the caller drops the property.
//!
//! Rules, first match wins:
//!
//! 1. literals: `"a"` `String`, `3` `Int`, `3.3` `Double`, `true` `Bool`
//! 2. tuples: one element unwraps, none is `()`, more build a labeled tuple
//! 3. `Base.member` with a plain base gives `Base`; `Base?.member` gives `Base?`;
//!    any other base gives its text
//! 4. calls: `Base.factory()` `Base`, `[T]()` `[T]`, `[K: V]()` `[K: V]`,
//!    `T()` `T`, anything else the callee text
//! 5. casts, collection literals and operators with literal operands
//!
//! Declared annotations bypass inference and only go through
//! [`normalize_declared`].

use crate::syntax::expr::{CastKind, Expr};
use crate::syntax::types::{TupleTypeElement, TypeSyntax};

const COMPARISON_OPERATORS: [&str; 8] = ["==", "!=", "<", "<=", ">", ">=", "&&", "||"];
const ARITHMETIC_OPERATORS: [&str; 5] = ["+", "-", "*", "/", "%"];
const BITWISE_OPERATORS: [&str; 5] = ["&", "|", "^", "<<", ">>"];

/// Normalize a declared property type for use as a parameter type
///
/// Redundant parentheses collapse (`((String))` is `String`,
/// `((String, Int))` is `(String, Int)`). A function type that is the
/// declared type itself is stored, so it becomes `@escaping`; one nested in
/// an explicit optional is left as written.
pub fn normalize_declared(ty: &TypeSyntax) -> TypeSyntax {
    match ty {
        TypeSyntax::Tuple(elements) if elements.len() == 1 => normalize_declared(&elements[0].ty),
        TypeSyntax::Function(_) => ty.clone().attributed("escaping"),
        _ => ty.clone(),
    }
}

/// Infer the type of a property from its initializer expression
pub fn infer_initializer(expr: &Expr) -> Option<TypeSyntax> {
    infer(expr)
}

/// Infer the type of an expression
pub fn infer(expr: &Expr) -> Option<TypeSyntax> {
    match expr {
        Expr::StringLiteral(_) => Some(TypeSyntax::named("String")),
        Expr::IntegerLiteral(_) => Some(TypeSyntax::named("Int")),
        Expr::FloatLiteral(_) => Some(TypeSyntax::named("Double")),
        Expr::BooleanLiteral(_) => Some(TypeSyntax::bool()),
        Expr::Tuple(elements) => match elements.as_slice() {
            [single] => infer(&single.expr),
            _ => elements
                .iter()
                .map(|element| {
                    infer(&element.expr).map(|ty| TupleTypeElement {
                        label: element.label.clone(),
                        ty,
                    })
                })
                .collect::<Option<Vec<_>>>()
                .map(TypeSyntax::Tuple),
        },
        Expr::MemberAccess {
            base: Some(base), ..
        } => infer_member_base(base),
        Expr::Call { callee, .. } => Some(infer_call(callee)),
        Expr::Cast { kind, ty, .. } => Some(match kind {
            CastKind::Conditional => ty.clone().optional(),
            CastKind::Plain | CastKind::Forced => ty.clone(),
        }),
        Expr::ArrayLiteral(elements) => {
            let element = unify(elements.iter().map(infer))?;
            Some(element.array_of())
        }
        Expr::DictionaryLiteral(pairs) => {
            let key = unify(pairs.iter().map(|(key, _)| infer(key)))?;
            let value = unify(pairs.iter().map(|(_, value)| infer(value)))?;
            Some(TypeSyntax::dictionary(key, value))
        }
        Expr::Infix { lhs, operator, rhs } => infer_infix(lhs, operator, rhs),
        Expr::Nil
        | Expr::DeclRef(_)
        | Expr::MemberAccess { base: None, .. }
        | Expr::OptionalChain(_)
        | Expr::GenericSpecialization { .. }
        | Expr::Raw(_) => None,
    }
}

fn infer_member_base(base: &Expr) -> Option<TypeSyntax> {
    match base {
        Expr::DeclRef(name) => Some(TypeSyntax::named(name.clone())),
        Expr::OptionalChain(inner) => match inner.as_ref() {
            Expr::DeclRef(name) => Some(TypeSyntax::named(name.clone()).optional()),
            other => Some(TypeSyntax::Raw(format!("{}?", other))),
        },
        other => Some(TypeSyntax::Raw(other.to_string())),
    }
}

fn infer_call(callee: &Expr) -> TypeSyntax {
    if let Expr::MemberAccess {
        base: Some(base), ..
    } = callee
    {
        if let Expr::DeclRef(name) = base.as_ref() {
            return TypeSyntax::named(name.clone());
        }
    }
    type_from_type_expr(callee).unwrap_or_else(|| TypeSyntax::Raw(callee.to_string()))
}

/// Read an expression written in type position, such as the callee of `[Int]()`
fn type_from_type_expr(expr: &Expr) -> Option<TypeSyntax> {
    match expr {
        Expr::DeclRef(name) => Some(TypeSyntax::named(name.clone())),
        Expr::ArrayLiteral(elements) => match elements.as_slice() {
            [element] => type_from_type_expr(element).map(TypeSyntax::array_of),
            _ => None,
        },
        Expr::DictionaryLiteral(pairs) => match pairs.as_slice() {
            [(key, value)] => Some(TypeSyntax::dictionary(
                type_from_type_expr(key)?,
                type_from_type_expr(value)?,
            )),
            _ => None,
        },
        Expr::OptionalChain(inner) => type_from_type_expr(inner).map(TypeSyntax::optional),
        _ => None,
    }
}

fn infer_infix(lhs: &Expr, operator: &str, rhs: &Expr) -> Option<TypeSyntax> {
    if COMPARISON_OPERATORS.contains(&operator) {
        return Some(TypeSyntax::bool());
    }

    let left = infer(lhs)?;
    let right = infer(rhs)?;

    match operator {
        "..." => unify([Some(left), Some(right)])
            .map(|bound| TypeSyntax::generic("ClosedRange", vec![bound])),
        "..<" => {
            unify([Some(left), Some(right)]).map(|bound| TypeSyntax::generic("Range", vec![bound]))
        }
        "+" if left.is_named("String") && right.is_named("String") => Some(left),
        "%" if left.is_named("Int") && right.is_named("Int") => Some(left),
        "%" => None,
        op if ARITHMETIC_OPERATORS.contains(&op) => {
            if is_numeric(&left) && is_numeric(&right) {
                unify([Some(left), Some(right)])
            } else {
                None
            }
        }
        op if BITWISE_OPERATORS.contains(&op) => {
            if left.is_named("Int") && right.is_named("Int") {
                Some(left)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn is_numeric(ty: &TypeSyntax) -> bool {
    ty.is_named("Int") || ty.is_named("Double")
}

/// The common type of a non-empty sequence, promoting `Int` to `Double`
fn unify(types: impl IntoIterator<Item = Option<TypeSyntax>>) -> Option<TypeSyntax> {
    let mut common: Option<TypeSyntax> = None;
    for ty in types {
        let ty = ty?;
        common = Some(match common {
            None => ty,
            Some(current) if current == ty => current,
            Some(current) if is_numeric(&current) && is_numeric(&ty) => TypeSyntax::named("Double"),
            Some(_) => return None,
        });
    }
    common
}
