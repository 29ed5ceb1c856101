//! The transformation pipeline: registry rules folded over the text.
//!
//! Each rule performs two whole-string substitutions, open marker then
//! close marker, all occurrences, leftmost-first. Rules run in registry
//! order and never re-scan earlier rules' output; the registry invariants
//! (no replacement contains a marker) make the result order-independent.

use std::borrow::Cow;

use crate::registry::{Registry, TagRule};

/// Apply every registry rule to `input`, in order.
///
/// This is a flat text rewrite, not a tree transform: repeated markers of
/// the same tag are each converted independently, an unmatched opener is
/// still converted, and unknown tags pass through untouched. Total over
/// all inputs; never fails.
#[must_use]
pub fn apply(registry: &Registry, input: &str) -> String {
    registry
        .rules()
        .iter()
        .fold(Cow::Borrowed(input), apply_rule)
        .into_owned()
}

/// Substitute one rule's marker pair across the whole string.
fn apply_rule<'a>(text: Cow<'a, str>, rule: &TagRule) -> Cow<'a, str> {
    let text = substitute(text, &rule.open_marker, &rule.open_replacement);
    substitute(text, &rule.close_marker, &rule.close_replacement)
}

/// Replace all occurrences of `from` with `to`, borrowing when absent.
fn substitute<'a>(text: Cow<'a, str>, from: &str, to: &str) -> Cow<'a, str> {
    if text.contains(from) {
        Cow::Owned(text.replace(from, to))
    } else {
        text
    }
}
