//! Public rendering entry point.

use crate::registry::Registry;
use crate::{pipeline, preprocess};

/// Renders item-description text into styled markup.
///
/// A renderer is a cheap, stateless handle over an immutable [`Registry`];
/// it is safe to share and call concurrently from any number of callers.
/// Output is handed back for direct injection as page markup: no escaping
/// or validation is performed, and the caller is expected to treat the
/// source text as trusted.
///
/// # Example
///
/// ```
/// use tooltip_renderer::DescriptionRenderer;
///
/// let renderer = DescriptionRenderer::new();
/// let html = renderer.render("Deals <physicalDamage>50</physicalDamage> damage.");
/// assert_eq!(
///     html,
///     r#"Deals <span style="color: red"><strong>50</strong></span> damage."#
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DescriptionRenderer<'r> {
    registry: &'r Registry,
}

impl DescriptionRenderer<'static> {
    /// Create a renderer over the built-in rule table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Registry::standard(),
        }
    }
}

impl Default for DescriptionRenderer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> DescriptionRenderer<'r> {
    /// Create a renderer over a custom rule table.
    #[must_use]
    pub fn with_registry(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// The registry this renderer applies.
    #[must_use]
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Render one description into styled markup.
    ///
    /// Runs the cleanup pass, then folds the registry rules over the text.
    /// Total over all inputs: unbalanced and unknown markers never cause
    /// an error, and the same input always yields the same output.
    #[must_use]
    pub fn render(&self, description: &str) -> String {
        let cleaned = preprocess::clean(description);
        let rendered = pipeline::apply(self.registry, &cleaned);
        tracing::trace!(
            input_len = description.len(),
            output_len = rendered.len(),
            "rendered item description"
        );
        rendered
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::registry::TagRule;

    #[test]
    fn test_end_to_end_scenario() {
        let renderer = DescriptionRenderer::new();
        assert_eq!(
            renderer.render("Deals <physicalDamage>50</physicalDamage> damage.<br></br>"),
            r#"Deals <span style="color: red"><strong>50</strong></span> damage."#
        );
    }

    #[test]
    fn test_attributed_font_normalization() {
        let renderer = DescriptionRenderer::new();
        assert_eq!(
            renderer.render("<font color=red>Text</font>"),
            renderer.render("<font>Text</font>")
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(DescriptionRenderer::new().render(""), "");
    }

    #[test]
    fn test_passthrough_modulo_preprocessing() {
        let renderer = DescriptionRenderer::new();
        // No registered markers: only the fixed cleanup removals apply.
        assert_eq!(
            renderer.render("Slow (0s) decays<li>over () time.<br></br>"),
            "Slow  decaysover  time."
        );
    }

    #[test]
    fn test_determinism() {
        let renderer = DescriptionRenderer::new();
        let input = "<mainText><stats><scaleAD>+40</scaleAD></stats>Cleave.</mainText>";
        assert_eq!(renderer.render(input), renderer.render(input));
    }

    #[test]
    fn test_idempotent_over_full_pipeline() {
        let renderer = DescriptionRenderer::new();
        let once = renderer.render(
            "<mainText><stats>+25 <scaleAP>Ability Power</scaleAP></stats>\
             <active>Active:</active> Deals <magicDamage>100</magicDamage>.<br></br></mainText>",
        );
        assert_eq!(renderer.render(&once), once);
    }

    #[test]
    fn test_custom_registry() {
        let registry =
            Registry::new(vec![TagRule::colored("glow", "cyan")]).unwrap();
        let renderer = DescriptionRenderer::with_registry(&registry);
        assert_eq!(
            renderer.render("<glow>shiny</glow>"),
            r#"<span style="color: cyan"><strong>shiny</strong></span>"#
        );
        // Tags outside the custom table pass through.
        assert_eq!(renderer.render("<healing>5</healing>"), "<healing>5</healing>");
    }

    #[test]
    fn test_realistic_item_description() {
        let renderer = DescriptionRenderer::new();
        let input = "<mainText><stats>+55 Attack Damage<br>+20% Life Steal</stats><br>\
                     <passive>Passive:</passive> Attacks deal \
                     <physicalDamage>20</physicalDamage> bonus physical damage and restore \
                     <healing>10 Health</healing>.<br></br></mainText>";
        let output = renderer.render(input);
        assert_eq!(
            output,
            "+55 Attack Damage<br />+20% Life Steal<br />\
             <strong>Passive:</strong> Attacks deal \
             <span style=\"color: red\"><strong>20</strong></span> bonus physical damage and restore \
             <span style=\"color: green\"><strong>10 Health</strong></span>."
        );
    }

    #[test]
    fn test_flavor_text_italicized() {
        let renderer = DescriptionRenderer::new();
        assert_eq!(
            renderer.render("<flavorText>Forged in fire.</flavorText>"),
            r#"<span style="color: gray"><em>Forged in fire.</em></span>"#
        );
    }
}
