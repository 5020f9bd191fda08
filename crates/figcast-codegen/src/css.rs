//! Per-node CSS assembler.
//!
//! Walks the tree recursively and emits one class rule per node, keyed
//! by the sanitized `type-id` class. Children's rules append after the
//! parent's; each node owns exactly one class, so later rules never
//! need to override earlier ones.

use crate::style::{fmt_px, paint_color, typography_block};
use crate::{class_name, style};
use figcast_node::{DesignNode, EffectType, NodeType};

/// Generate the per-node stylesheet for the given roots.
pub fn generate(roots: &[DesignNode]) -> String {
    let mut out = String::new();
    for root in roots {
        emit_rules(root, &mut out);
    }
    out
}

/// Declaration order within a rule: size, fill color, border, corner
/// radius, typography, padding, effects.
fn emit_rules(node: &DesignNode, out: &mut String) {
    let mut rule = String::new();

    if let Some(bounds) = node.bounds() {
        rule.push_str(&format!("  width: {}px;\n", fmt_px(bounds.width)));
        rule.push_str(&format!("  height: {}px;\n", fmt_px(bounds.height)));
    }

    if let Some(paint) = node.solid_fill() {
        if let Some(color) = paint_color(paint) {
            if node.node_type == NodeType::Text {
                rule.push_str(&format!("  color: {color};\n"));
            } else {
                rule.push_str(&format!("  background-color: {color};\n"));
            }
        }
    }

    // first stroke only, and only when a weight is set
    if let (Some(weight), Some(stroke)) = (node.stroke_weight, node.first_stroke()) {
        if let Some(color) = paint_color(stroke) {
            rule.push_str(&format!("  border: {}px solid {color};\n", fmt_px(weight)));
        }
    }

    if let Some(radius) = node.corner_radius {
        rule.push_str(&format!("  border-radius: {}px;\n", fmt_px(radius)));
    }

    if node.node_type == NodeType::Text {
        if let Some(ts) = &node.style {
            rule.push_str(&typography_block(ts));
        }
    }

    let padding = [
        node.padding_top,
        node.padding_right,
        node.padding_bottom,
        node.padding_left,
    ];
    if padding.iter().any(|p| p.is_some()) {
        let [top, right, bottom, left] = padding.map(|p| p.unwrap_or(0.0));
        rule.push_str(&format!(
            "  padding: {}px {}px {}px {}px;\n",
            fmt_px(top),
            fmt_px(right),
            fmt_px(bottom),
            fmt_px(left)
        ));
    }

    for effect in node.effects.iter().filter(|e| e.is_visible()) {
        match effect.effect_type {
            EffectType::DropShadow | EffectType::InnerShadow => {
                let color = effect
                    .color
                    .as_ref()
                    .map(|c| style::css_color(c, None))
                    .unwrap_or_else(|| "rgba(0, 0, 0, 0.25)".to_string());
                let (x, y) = effect.offset.map(|o| (o.x, o.y)).unwrap_or((0.0, 0.0));
                let radius = effect.radius.unwrap_or(0.0);
                let inset = if effect.effect_type == EffectType::InnerShadow {
                    "inset "
                } else {
                    ""
                };
                rule.push_str(&format!(
                    "  box-shadow: {inset}{}px {}px {}px {color};\n",
                    fmt_px(x),
                    fmt_px(y),
                    fmt_px(radius)
                ));
            }
            EffectType::LayerBlur => {
                rule.push_str(&format!(
                    "  filter: blur({}px);\n",
                    fmt_px(effect.radius.unwrap_or(0.0))
                ));
            }
            _ => {}
        }
    }

    out.push_str(&format!(".{} {{\n{rule}}}\n\n", class_name(node)));

    for child in &node.children {
        emit_rules(child, out);
    }
}
