//! Error types for registry construction.

/// Error raised when a rule table violates the marker invariants.
///
/// Rendering itself is total and never fails; only [`Registry::new`]
/// (and therefore process startup, for the built-in table) can produce
/// these errors.
///
/// [`Registry::new`]: crate::Registry::new
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A rule declares an empty open or close marker.
    ///
    /// An empty marker would match everywhere and turn substitution into
    /// an infinite insertion, so it is rejected up front.
    #[error("rule `{rule}` has an empty marker")]
    EmptyMarker { rule: String },

    /// Two rules share a marker string.
    #[error("marker `{marker}` is declared by both `{first}` and `{second}`")]
    DuplicateMarker {
        marker: String,
        first: String,
        second: String,
    },

    /// A rule's replacement text contains another rule's marker.
    ///
    /// If this were allowed, a later pass over the pipeline would pick the
    /// marker up again and output would depend on registry order.
    #[error("replacement text of `{rule}` contains marker `{marker}` of `{owner}`")]
    MarkerInReplacement {
        rule: String,
        marker: String,
        owner: String,
    },
}
