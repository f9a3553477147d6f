//! Identifier helpers
//!
//! Compiled patterns live in a thread-local cache so the classifiers can
//! validate names without recompiling on every expansion.

use hashbrown::HashMap;
use regex::Regex;
use std::cell::RefCell;

/// A Unicode identifier, optionally backtick-escaped (`` `default` ``)
const IDENTIFIER: &str =
    r"^(?:[_\p{XID_Start}]\p{XID_Continue}*|`[_\p{XID_Start}]\p{XID_Continue}*`)$";

/// An attribute name: optional `@`, optional module path, final identifier
const ATTRIBUTE_NAME: &str = r"^@?(?:[A-Za-z_][A-Za-z0-9_]*\.)*([A-Za-z_][A-Za-z0-9_]*)$";

thread_local! {
    static PATTERNS: RefCell<HashMap<&'static str, Regex>> = RefCell::new(HashMap::new());
}

fn with_pattern<R>(pattern: &'static str, f: impl FnOnce(&Regex) -> R) -> Option<R> {
    PATTERNS.with(|cache| {
        if let Some(regex) = cache.borrow().get(pattern) {
            return Some(f(regex));
        }
        let regex = Regex::new(pattern).ok()?;
        let result = f(&regex);
        cache.borrow_mut().insert(pattern, regex);
        Some(result)
    })
}

/// Check whether `name` is a usable identifier
pub fn is_identifier(name: &str) -> bool {
    with_pattern(IDENTIFIER, |regex| regex.is_match(name)).unwrap_or(false)
}

/// Resolve an attribute's written name to its bare identifier
///
/// `@Prism`, `Prism` and `MyModule.Prism` all resolve to `Prism`;
/// surrounding whitespace is ignored.
pub fn resolve_attribute_name(written: &str) -> Option<String> {
    with_pattern(ATTRIBUTE_NAME, |regex| {
        regex
            .captures(written.trim())
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
    })
    .flatten()
}

/// Upper-case the first character, leaving the rest untouched
pub fn uppercase_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The predicate name for a case: `red` becomes `isRed`
pub fn predicate_name(case_name: &str) -> String {
    format!("is{}", uppercase_first(case_name.trim_matches('`')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("red"));
        assert!(is_identifier("_private2"));
        assert!(is_identifier("`default`"));
        assert!(is_identifier("café"));
        assert!(is_identifier("über"));
        assert!(is_identifier("`naïve`"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("a b"));
        assert!(!is_identifier("a-b"));
    }

    #[test]
    fn test_resolve_attribute_name() {
        assert_eq!(resolve_attribute_name("@Prism").as_deref(), Some("Prism"));
        assert_eq!(resolve_attribute_name(" NoPrism ").as_deref(), Some("NoPrism"));
        assert_eq!(
            resolve_attribute_name("@Macros.MemberwiseInit").as_deref(),
            Some("MemberwiseInit")
        );
        assert_eq!(resolve_attribute_name("@Prism(visibility: .public)"), None);
        assert_eq!(resolve_attribute_name("@"), None);
    }

    #[test]
    fn test_uppercase_first() {
        assert_eq!(uppercase_first("red"), "Red");
        assert_eq!(uppercase_first("lightBlue"), "LightBlue");
        assert_eq!(uppercase_first(""), "");
    }

    #[test]
    fn test_predicate_name() {
        assert_eq!(predicate_name("red"), "isRed");
        assert_eq!(predicate_name("`default`"), "isDefault");
    }
}
