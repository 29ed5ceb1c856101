//! Tag-substitution renderer for item description tooltips.
//!
//! Item descriptions arrive from the catalog provider as text carrying a
//! fixed vocabulary of semantic markup tags (`<physicalDamage>`,
//! `<healing>`, `<scaleAP>`, …). This crate rewrites them into styled
//! markup ready for direct injection into a page.
//!
//! # Architecture
//!
//! Rendering is a pure, single-pass pipeline over the input string:
//! - [`preprocess`]: ordered cleanup of empty tag pairs, attributed font
//!   tags, list-item markers, and known noise fragments
//! - [`Registry`]: the immutable table of [`TagRule`] entries, validated
//!   at construction so no replacement can reintroduce a marker
//! - [`pipeline`]: the registry folded left-to-right over the text, each
//!   rule substituting its marker pair globally
//! - [`DescriptionRenderer`]: the public entry point tying it together
//!
//! The output is trusted markup; the engine performs no escaping and the
//! injection boundary belongs to the caller.
//!
//! # Example
//!
//! ```
//! use tooltip_renderer::DescriptionRenderer;
//!
//! let renderer = DescriptionRenderer::new();
//! let html = renderer.render("Restores <healing>120 Health</healing>.<br></br>");
//! assert_eq!(
//!     html,
//!     r#"Restores <span style="color: green"><strong>120 Health</strong></span>."#
//! );
//! ```

mod error;
pub mod pipeline;
pub mod preprocess;
mod registry;
mod renderer;

pub use error::RegistryError;
pub use registry::{Registry, TagRule};
pub use renderer::DescriptionRenderer;
