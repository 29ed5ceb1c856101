//! The rule registry: the fixed vocabulary of semantic tags.
//!
//! Each [`TagRule`] maps one semantic tag (`<healing>…</healing>`) to the
//! styled markup it renders as. The table is built once at process start,
//! validated, and shared read-only from then on.

use std::sync::LazyLock;

use crate::error::RegistryError;

/// One entry of the registry: a marker pair and its replacement pair.
///
/// All five fields are plain text. Markers are matched exactly (case
/// sensitive, no whitespace tolerance); replacements are inserted verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagRule {
    /// Semantic tag name, e.g. `physicalDamage`.
    pub name: String,
    /// Literal text opening the tagged region, e.g. `<physicalDamage>`.
    pub open_marker: String,
    /// Literal text closing the tagged region, e.g. `</physicalDamage>`.
    pub close_marker: String,
    /// Text substituted for every occurrence of the open marker.
    pub open_replacement: String,
    /// Text substituted for every occurrence of the close marker.
    pub close_replacement: String,
}

impl TagRule {
    /// Create a rule with explicit markers and replacements.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        open_marker: impl Into<String>,
        close_marker: impl Into<String>,
        open_replacement: impl Into<String>,
        close_replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            open_marker: open_marker.into(),
            close_marker: close_marker.into(),
            open_replacement: open_replacement.into(),
            close_replacement: close_replacement.into(),
        }
    }

    /// Rule for a tag rendered as bold text: `<name>` → `<strong>`.
    #[must_use]
    pub fn bold(name: &str) -> Self {
        Self::new(
            name,
            format!("<{name}>"),
            format!("</{name}>"),
            "<strong>",
            "</strong>",
        )
    }

    /// Rule for a tag rendered as bold text in a color:
    /// `<name>` → `<span style="color: {color}"><strong>`.
    #[must_use]
    pub fn colored(name: &str, color: &str) -> Self {
        Self::new(
            name,
            format!("<{name}>"),
            format!("</{name}>"),
            format!(r#"<span style="color: {color}"><strong>"#),
            "</strong></span>",
        )
    }

    /// Rule for a tag rendered as italic text in a color, used for flavor
    /// and rules text.
    #[must_use]
    pub fn italic(name: &str, color: &str) -> Self {
        Self::new(
            name,
            format!("<{name}>"),
            format!("</{name}>"),
            format!(r#"<span style="color: {color}"><em>"#),
            "</em></span>",
        )
    }

    /// Rule whose markers are removed and whose content is kept as-is.
    #[must_use]
    pub fn stripped(name: &str) -> Self {
        Self::new(name, format!("<{name}>"), format!("</{name}>"), "", "")
    }
}

/// Immutable, ordered table of tag rules.
///
/// Constructed once via [`Registry::new`], which enforces the marker
/// invariants the pipeline depends on (see [`RegistryError`]). The
/// built-in table is available process-wide through [`Registry::standard`].
#[derive(Clone, Debug)]
pub struct Registry {
    rules: Vec<TagRule>,
}

impl Registry {
    /// Build a registry from an ordered rule list, validating invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if any marker is empty, two rules share a
    /// marker, or any rule's replacement text contains a registered marker.
    pub fn new(rules: Vec<TagRule>) -> Result<Self, RegistryError> {
        validate(&rules)?;
        Ok(Self { rules })
    }

    /// The built-in rule table covering the full tag vocabulary.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[TagRule] {
        &self.rules
    }

    /// Look up a rule by tag name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TagRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Number of rules in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Check the marker invariants for a rule list.
fn validate(rules: &[TagRule]) -> Result<(), RegistryError> {
    // Collect every marker with its owning rule for the cross checks.
    let mut markers: Vec<(&str, &str)> = Vec::with_capacity(rules.len() * 2);

    for rule in rules {
        for marker in [rule.open_marker.as_str(), rule.close_marker.as_str()] {
            if marker.is_empty() {
                return Err(RegistryError::EmptyMarker {
                    rule: rule.name.clone(),
                });
            }
            if let Some((_, first)) = markers.iter().find(|(m, _)| *m == marker) {
                return Err(RegistryError::DuplicateMarker {
                    marker: marker.to_owned(),
                    first: (*first).to_owned(),
                    second: rule.name.clone(),
                });
            }
            markers.push((marker, rule.name.as_str()));
        }
    }

    for rule in rules {
        for replacement in [&rule.open_replacement, &rule.close_replacement] {
            if let Some((marker, owner)) =
                markers.iter().find(|(m, _)| replacement.contains(m))
            {
                return Err(RegistryError::MarkerInReplacement {
                    rule: rule.name.clone(),
                    marker: (*marker).to_owned(),
                    owner: (*owner).to_owned(),
                });
            }
        }
    }

    Ok(())
}

static STANDARD: LazyLock<Registry> = LazyLock::new(|| {
    Registry::new(standard_rules()).expect("built-in rule table violates marker invariants")
});

/// The built-in rule list, in application order.
fn standard_rules() -> Vec<TagRule> {
    vec![
        // Emphasis-only tags
        TagRule::bold("attention"),
        TagRule::bold("active"),
        TagRule::bold("passive"),
        TagRule::bold("unique"),
        TagRule::bold("keywordMajor"),
        // Damage types
        TagRule::colored("physicalDamage", "red"),
        TagRule::colored("magicDamage", "blue"),
        TagRule::colored("trueDamage", "darkorange"),
        // Sustain and defenses
        TagRule::colored("healing", "green"),
        TagRule::colored("lifeSteal", "green"),
        TagRule::colored("shield", "gray"),
        TagRule::colored("status", "gray"),
        // Combat stats
        TagRule::colored("onHit", "orangered"),
        TagRule::colored("attackSpeed", "gold"),
        TagRule::colored("speed", "deepskyblue"),
        TagRule::colored("keywordStealth", "mediumpurple"),
        // Stat scalings
        TagRule::colored("scaleAD", "orange"),
        TagRule::colored("scaleAP", "purple"),
        TagRule::colored("scaleMana", "blue"),
        TagRule::colored("scaleArmor", "goldenrod"),
        TagRule::colored("scaleMR", "teal"),
        TagRule::colored("scaleHealth", "limegreen"),
        TagRule::colored("scaleLevel", "gold"),
        // Flavor and rules text
        TagRule::italic("flavorText", "gray"),
        TagRule::italic("rules", "gray"),
        // Structural tags whose markers are dropped
        TagRule::stripped("mainText"),
        TagRule::stripped("stats"),
        TagRule::stripped("font"),
        // Line breaks
        TagRule::new("br", "<br>", "</br>", "<br />", ""),
    ]
}
