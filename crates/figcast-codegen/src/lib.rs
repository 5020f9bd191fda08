//! figcast code generator
//!
//! Turns a classified design tree into two text artifacts: an HTML
//! fragment approximating the screen and a stylesheet with one class
//! rule per node plus a static theme layer.
//!
//! ```text
//! &[DesignNode] + ImageUrlMap → generate() → GeneratedPage { html, css }
//! ```
//!
//! Nothing in this path is fatal: missing structure degrades to the
//! default tables in [`defaults`], and an unresolved image is simply
//! omitted. The generator always produces renderable output.

pub mod css;
pub mod defaults;
pub mod forms;
pub mod html;
pub mod style;
pub mod theme;

use figcast_classify::detect_archetype;
use figcast_node::{DesignNode, ImageUrlMap, NodeIndex};

/// The generated output for one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    pub html: String,
    pub css: String,
}

/// Generate HTML and CSS for the given root nodes.
///
/// Builds the tree index, detects the screen archetype, assembles the
/// markup fragment, and emits per-node CSS rules followed by the
/// archetype's theme layer.
pub fn generate(roots: &[DesignNode], images: &ImageUrlMap) -> GeneratedPage {
    let index = NodeIndex::build(roots);
    let archetype = detect_archetype(index.flat());
    log::debug!(
        "generating {} nodes as archetype {:?}",
        index.flat().len(),
        archetype
    );

    let html = html::generate(&index, images, archetype);
    let mut css = css::generate(roots);
    css.push_str(&theme::stylesheet(archetype));

    GeneratedPage { html, css }
}

/// CSS class for a node: `type-id`, with id characters that are unsafe
/// in a CSS identifier (colons, semicolons, anything non-alphanumeric)
/// replaced by dashes.
pub fn class_name(node: &DesignNode) -> String {
    let id: String = node
        .id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{}-{}", node.node_type.slug(), id)
}

/// Escape text content for HTML element bodies.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text for double-quoted HTML attribute values.
pub fn escape_attr(text: &str) -> String {
    escape_html(text).replace('"', "&quot;")
}
