//! Cleanup pass applied before tag substitution.
//!
//! Upstream description text arrives with redundant and noisy markup:
//! empty tag pairs, `<font>` tags carrying presentation attributes, stray
//! list-item markers, and placeholder fragments left by the content
//! pipeline. This module normalizes all of that so the registry rules can
//! match uniformly.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Matches an attributed font tag, e.g. `<font color='#FFFFFF'>`.
static FONT_ATTRS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<font\s+[^>]*>").unwrap());

/// One cleanup step: a global replacement over the whole string.
enum Cleanup {
    /// Replace every occurrence of a literal substring.
    Literal { from: &'static str, to: &'static str },
    /// Replace every match of a compiled pattern.
    Pattern {
        re: &'static LazyLock<Regex>,
        to: &'static str,
    },
}

/// Cleanup steps in application order.
///
/// Empty pairs go first so they never survive as bare markers, the font
/// collapse runs before the font rule in the main pipeline can see the
/// text, and the noise fragments are deleted last.
static CLEANUPS: [Cleanup; 6] = [
    Cleanup::Literal {
        from: "<br></br>",
        to: "",
    },
    Cleanup::Literal {
        from: "<stats></stats>",
        to: "",
    },
    Cleanup::Pattern {
        re: &FONT_ATTRS_RE,
        to: "<font>",
    },
    Cleanup::Literal { from: "<li>", to: "" },
    Cleanup::Literal { from: "(0s)", to: "" },
    Cleanup::Literal { from: "()", to: "" },
];

/// Apply all cleanup steps to `input`, in order.
///
/// Only matched spans are touched; surrounding text is preserved
/// byte-for-byte. Returns a borrowed string when nothing matched.
#[must_use]
pub fn clean(input: &str) -> Cow<'_, str> {
    CLEANUPS.iter().fold(Cow::Borrowed(input), apply)
}

fn apply<'a>(text: Cow<'a, str>, step: &Cleanup) -> Cow<'a, str> {
    match step {
        Cleanup::Literal { from, to } => {
            if text.contains(from) {
                Cow::Owned(text.replace(from, to))
            } else {
                text
            }
        }
        Cleanup::Pattern { re, to } => {
            if re.is_match(&text) {
                Cow::Owned(re.replace_all(&text, *to).into_owned())
            } else {
                text
            }
        }
    }
}
