//! Case prisms
//!
//! - [`PrismRule`] (`@Prism` on an enum): accessors and predicates for every
//!   eligible case.
//! - [`PrismCaseRule`] (`@PrismCase` on a case line): the same members for
//!   just that line, whether or not the enum is annotated.
//! - [`NoPrismRule`] (`@NoPrism` on a case line): generates nothing, only
//!   validates where it was attached.
//!
//! Output order is all accessors (case order) followed by all predicates
//! (case order).

use super::accessor::{predicate, prism};
use super::error::ExpandError;
use super::registry::{log_debug, AttachmentKind, Invocation, MacroRule};
use crate::syntax::attribute::{MarkerName, Visibility};
use crate::syntax::decl::{CaseElement, CaseGroup, Decl, EnumDecl};
use crate::syntax::generated::{ExtensionDecl, GeneratedDecl, Member};
use crate::syntax::ident::is_identifier;
use crate::syntax::types::TypeSyntax;

/// Markers that take a case line out of the whole-enum rule
const WHOLE_ENUM_OPT_OUTS: [MarkerName; 2] = [MarkerName::NoPrism, MarkerName::PrismCase];

/// Eligible cases of an enum, in declaration order
pub fn eligible_cases(decl: &EnumDecl) -> Vec<&CaseElement> {
    decl.case_groups()
        .filter(|group| {
            let opted_out = group.has_marker(&WHOLE_ENUM_OPT_OUTS);
            if opted_out {
                log_debug!("skipping opted-out case line in {}", decl.name);
            }
            !opted_out
        })
        .flat_map(named_elements)
        .collect()
}

/// Elements of one case line that have a usable name
pub fn named_elements(group: &CaseGroup) -> Vec<&CaseElement> {
    group
        .elements
        .iter()
        .filter(|element| {
            let usable = is_identifier(&element.name);
            if !usable {
                log_debug!("dropping case with unusable name {:?}", element.name);
            }
            usable
        })
        .collect()
}

/// Accessors then predicates for `cases`
pub fn accessor_members(
    cases: &[&CaseElement],
    visibility: Option<Visibility>,
) -> (Vec<Member>, Vec<Member>) {
    let prisms = cases.iter().map(|case| prism(case, visibility)).collect();
    let predicates = cases.iter().map(|case| predicate(case, visibility)).collect();
    (prisms, predicates)
}

fn as_members(prisms: Vec<Member>, predicates: Vec<Member>) -> Vec<GeneratedDecl> {
    prisms
        .into_iter()
        .chain(predicates)
        .map(GeneratedDecl::Member)
        .collect()
}

/// `@Prism`
pub struct PrismRule;

impl MacroRule for PrismRule {
    fn marker(&self) -> MarkerName {
        MarkerName::Prism
    }

    fn attachment_kinds(&self) -> &'static [AttachmentKind] {
        &[AttachmentKind::Member, AttachmentKind::Extension]
    }

    fn expand(
        &self,
        invocation: &Invocation<'_>,
        declaration: &Decl,
    ) -> Result<Vec<GeneratedDecl>, ExpandError> {
        let Decl::Enum(decl) = declaration else {
            return Err(ExpandError::NotAnEnum);
        };

        let cases = eligible_cases(decl);
        let (prisms, predicates) = accessor_members(&cases, invocation.attribute.visibility());

        match invocation.kind {
            AttachmentKind::Extension => {
                let extended_type = TypeSyntax::named(decl.name.clone());
                Ok([prisms, predicates]
                    .into_iter()
                    .filter(|members| !members.is_empty())
                    .map(|members| {
                        GeneratedDecl::Extension(ExtensionDecl {
                            extended_type: extended_type.clone(),
                            members,
                        })
                    })
                    .collect())
            }
            _ => Ok(as_members(prisms, predicates)),
        }
    }
}

/// `@PrismCase`
pub struct PrismCaseRule;

impl MacroRule for PrismCaseRule {
    fn marker(&self) -> MarkerName {
        MarkerName::PrismCase
    }

    fn attachment_kinds(&self) -> &'static [AttachmentKind] {
        &[AttachmentKind::Peer]
    }

    fn expand(
        &self,
        invocation: &Invocation<'_>,
        declaration: &Decl,
    ) -> Result<Vec<GeneratedDecl>, ExpandError> {
        let Decl::EnumCase(group) = declaration else {
            return Err(ExpandError::NotAnEnumCase);
        };

        let cases = named_elements(group);
        let (prisms, predicates) = accessor_members(&cases, invocation.attribute.visibility());
        Ok(as_members(prisms, predicates))
    }
}

/// `@NoPrism`
pub struct NoPrismRule;

impl MacroRule for NoPrismRule {
    fn marker(&self) -> MarkerName {
        MarkerName::NoPrism
    }

    fn attachment_kinds(&self) -> &'static [AttachmentKind] {
        &[AttachmentKind::Peer]
    }

    fn expand(
        &self,
        _invocation: &Invocation<'_>,
        declaration: &Decl,
    ) -> Result<Vec<GeneratedDecl>, ExpandError> {
        match declaration {
            Decl::EnumCase(_) => Ok(Vec::new()),
            _ => Err(ExpandError::NotAnEnumCase),
        }
    }
}
