//! Interpreter for generated members
//!
//! Runs generated accessor and initializer bodies over a small runtime
//! [`Value`] model, so their behavior can be checked without a host
//! compiler: reading a prism, writing it back, evaluating predicates,
//! constructing a struct through a memberwise initializer.
//!
//! Only the statement and expression forms the generators emit are
//! supported; anything else is an [`EvalError::Unsupported`].
//!
//! # Example
//!
//! ```
//! use prismatic::eval::{get, Value};
//! use prismatic::engine::accessor::prism;
//! use prismatic::syntax::builder::{element_with, labeled, ty};
//!
//! let red = prism(&element_with("red", vec![labeled("brightness", ty("Double"))]), None);
//! let property = red.as_property().unwrap();
//!
//! let color = Value::case("red", vec![(Some("brightness"), Value::Double(0.5))]);
//! assert_eq!(get(property, &color).unwrap(), Value::Double(0.5));
//! assert_eq!(get(property, &Value::case("green", vec![])).unwrap(), Value::Nil);
//! ```

use crate::syntax::expr::{Expr, LabeledExpr};
use crate::syntax::generated::{ComputedProperty, InitializerDecl};
use crate::syntax::stmt::{CasePattern, Condition, Stmt};
use hashbrown::HashMap;
use std::fmt;

const SELF: &str = "self";
const NEW_VALUE: &str = "newValue";

/// A labeled slot of a tuple or case payload
pub type Slot = (Option<String>, Value);

/// A runtime value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// `nil`
    #[default]
    Nil,
    /// `()`
    Unit,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating-point value
    Double(f64),
    /// String value
    String(String),
    /// A tuple with optionally labeled elements
    Tuple(Vec<Slot>),
    /// An enum value: case name plus associated values
    Case {
        /// The case name
        name: String,
        /// Associated values in order
        payload: Vec<Slot>,
    },
    /// A struct value: stored properties in assignment order
    Struct(Vec<(String, Value)>),
}

impl Value {
    /// Create an enum value
    pub fn case(name: &str, payload: Vec<(Option<&str>, Value)>) -> Self {
        Value::Case {
            name: name.to_string(),
            payload: labeled_slots(payload),
        }
    }

    /// Create a tuple value
    pub fn tuple(elements: Vec<(Option<&str>, Value)>) -> Self {
        Value::Tuple(labeled_slots(elements))
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Check if this is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Look up a stored property of a struct value
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Struct(fields) => fields
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Unit => "unit",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Tuple(_) => "tuple",
            Value::Case { .. } => "case",
            Value::Struct(_) => "struct",
        }
    }
}

fn labeled_slots(slots: Vec<(Option<&str>, Value)>) -> Vec<Slot> {
    slots
        .into_iter()
        .map(|(label, value)| (label.map(str::to_string), value))
        .collect()
}

/// Errors raised while running a generated body
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A name with no binding in scope
    UnboundName(String),
    /// Member access on a value that has no such member
    NoSuchMember {
        /// The accessed member
        member: String,
        /// Type name of the base value
        base: &'static str,
    },
    /// A case pattern bound a different number of values than the payload has
    ArityMismatch {
        /// The matched case
        case_name: String,
        /// Bindings in the pattern
        expected: usize,
        /// Values in the payload
        found: usize,
    },
    /// A required initializer argument was not supplied
    MissingArgument(String),
    /// The property has no setter
    ReadOnly(String),
    /// A getter finished without producing a value
    MissingValue(String),
    /// A literal that does not parse
    InvalidLiteral(String),
    /// A syntax form the interpreter does not run
    Unsupported(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnboundName(name) => write!(f, "Unbound name: {}", name),
            EvalError::NoSuchMember { member, base } => {
                write!(f, "No member '{}' on {} value", member, base)
            }
            EvalError::ArityMismatch {
                case_name,
                expected,
                found,
            } => write!(
                f,
                "Pattern for .{} binds {} value(s), payload has {}",
                case_name, expected, found
            ),
            EvalError::MissingArgument(name) => write!(f, "Missing argument: {}", name),
            EvalError::ReadOnly(name) => write!(f, "Property is read-only: {}", name),
            EvalError::MissingValue(name) => write!(f, "Getter produced no value: {}", name),
            EvalError::InvalidLiteral(text) => write!(f, "Invalid literal: {}", text),
            EvalError::Unsupported(what) => write!(f, "Unsupported syntax: {}", what),
        }
    }
}

impl std::error::Error for EvalError {}

/// Variable bindings of one body execution
type Scope = HashMap<String, Value>;

/// How a block finished
enum Flow {
    /// Ran to the end; carries the last expression statement's value
    Normal(Option<Value>),
    /// Left through `return`
    Return(Option<Value>),
}

/// Read `property` on `receiver`
pub fn get(property: &ComputedProperty, receiver: &Value) -> Result<Value, EvalError> {
    let mut scope = Scope::new();
    scope.insert(SELF.to_string(), receiver.clone());
    match run_block(property.getter(), &mut scope)? {
        Flow::Normal(Some(value)) | Flow::Return(Some(value)) => Ok(value),
        Flow::Normal(None) | Flow::Return(None) => Err(EvalError::MissingValue(property.name.clone())),
    }
}

/// Write `new_value` through `property` on `receiver`
pub fn set(property: &ComputedProperty, receiver: &mut Value, new_value: Value) -> Result<(), EvalError> {
    let body = property
        .setter()
        .ok_or_else(|| EvalError::ReadOnly(property.name.clone()))?;

    let mut scope = Scope::new();
    scope.insert(SELF.to_string(), receiver.clone());
    scope.insert(NEW_VALUE.to_string(), new_value);
    run_block(body, &mut scope)?;

    if let Some(updated) = scope.remove(SELF) {
        *receiver = updated;
    }
    Ok(())
}

/// Call `init` with named arguments; omitted arguments take their defaults
pub fn construct(init: &InitializerDecl, arguments: Vec<(&str, Value)>) -> Result<Value, EvalError> {
    let mut supplied: Scope = arguments
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

    let mut scope = Scope::new();
    for parameter in &init.parameters {
        let value = match supplied.remove(&parameter.name) {
            Some(value) => value,
            None => match &parameter.default_value {
                Some(default) => eval_expr(default, &scope)?,
                None => return Err(EvalError::MissingArgument(parameter.name.clone())),
            },
        };
        scope.insert(parameter.name.clone(), value);
    }
    scope.insert(SELF.to_string(), Value::Struct(Vec::new()));

    run_block(&init.body, &mut scope)?;
    scope
        .remove(SELF)
        .ok_or_else(|| EvalError::UnboundName(SELF.to_string()))
}

fn run_block(stmts: &[Stmt], scope: &mut Scope) -> Result<Flow, EvalError> {
    let mut last = None;
    for stmt in stmts {
        match stmt {
            Stmt::Expr(expr) => last = Some(eval_expr(expr, scope)?),
            Stmt::Return(value) => {
                let value = value.as_ref().map(|expr| eval_expr(expr, scope)).transpose()?;
                return Ok(Flow::Return(value));
            }
            Stmt::Guard {
                conditions,
                else_body,
            } => {
                if !check_conditions(conditions, scope)? {
                    let mut inner = scope.clone();
                    return match run_block(else_body, &mut inner)? {
                        Flow::Return(value) => Ok(Flow::Return(value)),
                        Flow::Normal(_) => Err(EvalError::Unsupported(
                            "guard body that does not exit".to_string(),
                        )),
                    };
                }
            }
            Stmt::If {
                conditions,
                then_body,
                else_body,
            } => {
                let mut inner = scope.clone();
                let flow = if check_conditions(conditions, &mut inner)? {
                    run_block(then_body, &mut inner)?
                } else {
                    inner = scope.clone();
                    match else_body {
                        Some(body) => run_block(body, &mut inner)?,
                        None => Flow::Normal(None),
                    }
                };
                write_back(scope, inner);
                match flow {
                    Flow::Return(value) => return Ok(Flow::Return(value)),
                    Flow::Normal(value) => last = value,
                }
            }
            Stmt::Assign { target, value } => {
                let value = eval_expr(value, scope)?;
                assign(target, value, scope)?;
                last = None;
            }
        }
    }
    Ok(Flow::Normal(last))
}

/// Copy assignments made in a nested scope to names visible outside it
fn write_back(scope: &mut Scope, inner: Scope) {
    for (name, value) in inner {
        if let Some(slot) = scope.get_mut(&name) {
            *slot = value;
        }
    }
}

/// Check conditions in order, binding names into `scope` as they match
fn check_conditions(conditions: &[Condition], scope: &mut Scope) -> Result<bool, EvalError> {
    for condition in conditions {
        let holds = match condition {
            Condition::Case(pattern) => match_case(pattern, scope)?,
            Condition::OptionalBinding { name, value } => {
                let value = eval_expr(value, scope)?;
                if value.is_nil() {
                    false
                } else {
                    scope.insert(name.clone(), value);
                    true
                }
            }
        };
        if !holds {
            return Ok(false);
        }
    }
    Ok(true)
}

fn match_case(pattern: &CasePattern, scope: &mut Scope) -> Result<bool, EvalError> {
    let subject = eval_expr(&pattern.subject, scope)?;
    let Value::Case { name, payload } = subject else {
        return Ok(false);
    };
    if name != pattern.case_name {
        return Ok(false);
    }
    if pattern.bindings.is_empty() {
        return Ok(true);
    }
    if pattern.bindings.len() != payload.len() {
        return Err(EvalError::ArityMismatch {
            case_name: name,
            expected: pattern.bindings.len(),
            found: payload.len(),
        });
    }
    for (binding, (_, value)) in pattern.bindings.iter().zip(payload) {
        scope.insert(binding.clone(), value);
    }
    Ok(true)
}

fn assign(target: &Expr, value: Value, scope: &mut Scope) -> Result<(), EvalError> {
    match target {
        Expr::DeclRef(name) => {
            scope.insert(name.clone(), value);
            Ok(())
        }
        Expr::MemberAccess {
            base: Some(base),
            name: field_name,
        } => {
            let Expr::DeclRef(owner) = base.as_ref() else {
                return Err(EvalError::Unsupported(target.to_string()));
            };
            let owner_value = scope
                .get_mut(owner)
                .ok_or_else(|| EvalError::UnboundName(owner.clone()))?;
            let base_type = owner_value.type_name();
            let Value::Struct(fields) = owner_value else {
                return Err(EvalError::NoSuchMember {
                    member: field_name.clone(),
                    base: base_type,
                });
            };
            match fields.iter_mut().find(|(field, _)| field == field_name) {
                Some((_, slot)) => *slot = value,
                None => fields.push((field_name.clone(), value)),
            }
            Ok(())
        }
        _ => Err(EvalError::Unsupported(target.to_string())),
    }
}

fn eval_expr(expr: &Expr, scope: &Scope) -> Result<Value, EvalError> {
    match expr {
        Expr::StringLiteral(text) => Ok(Value::String(text.clone())),
        Expr::IntegerLiteral(text) => text
            .replace('_', "")
            .parse()
            .map(Value::Int)
            .map_err(|_| EvalError::InvalidLiteral(text.clone())),
        Expr::FloatLiteral(text) => text
            .replace('_', "")
            .parse()
            .map(Value::Double)
            .map_err(|_| EvalError::InvalidLiteral(text.clone())),
        Expr::BooleanLiteral(b) => Ok(Value::Bool(*b)),
        Expr::Nil => Ok(Value::Nil),
        Expr::DeclRef(name) => scope
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::UnboundName(name.clone())),
        Expr::Tuple(elements) if elements.is_empty() => Ok(Value::Unit),
        Expr::Tuple(elements) => Ok(Value::Tuple(eval_arguments(elements, scope)?)),
        Expr::MemberAccess { base: None, name } => Ok(Value::Case {
            name: name.clone(),
            payload: Vec::new(),
        }),
        Expr::MemberAccess {
            base: Some(base),
            name,
        } => member(eval_expr(base, scope)?, name),
        Expr::Call { callee, arguments } => match callee.as_ref() {
            Expr::MemberAccess { base: None, name } => Ok(Value::Case {
                name: name.clone(),
                payload: eval_arguments(arguments, scope)?,
            }),
            _ => Err(EvalError::Unsupported(expr.to_string())),
        },
        _ => Err(EvalError::Unsupported(expr.to_string())),
    }
}

fn eval_arguments(arguments: &[LabeledExpr], scope: &Scope) -> Result<Vec<Slot>, EvalError> {
    arguments
        .iter()
        .map(|argument| Ok((argument.label.clone(), eval_expr(&argument.expr, scope)?)))
        .collect()
}

/// `base.name`: a tuple element by label or index, or a struct field
fn member(base: Value, name: &str) -> Result<Value, EvalError> {
    let base_type = base.type_name();
    let found = match base {
        Value::Tuple(elements) => match name.parse::<usize>() {
            Ok(index) => elements.into_iter().nth(index).map(|(_, value)| value),
            Err(_) => elements
                .into_iter()
                .find(|(label, _)| label.as_deref() == Some(name))
                .map(|(_, value)| value),
        },
        Value::Struct(fields) => fields
            .into_iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value),
        _ => None,
    };
    found.ok_or_else(|| EvalError::NoSuchMember {
        member: name.to_string(),
        base: base_type,
    })
}
