//! Geometry and paint to CSS fragment conversion.
//!
//! Pure helpers shared by the CSS assembler: color conversion from
//! normalized channels, pixel formatting, and the typography block.

use figcast_node::{Color, Paint, TypeStyle};

/// Format a pixel quantity, dropping the `.0` for whole numbers.
pub fn fmt_px(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

fn channel(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a normalized color to `rgba(R, G, B, A)`. Channels scale
/// to 0–255 and round; the effective alpha is the color's own alpha
/// if present, else the paint's opacity, else 1. Alpha always prints
/// with two decimals.
pub fn css_color(color: &Color, paint_opacity: Option<f64>) -> String {
    let alpha = color.a.or(paint_opacity).unwrap_or(1.0);
    format!(
        "rgba({}, {}, {}, {:.2})",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        alpha
    )
}

/// CSS color of a paint, when it carries one.
pub fn paint_color(paint: &Paint) -> Option<String> {
    paint.color.as_ref().map(|c| css_color(c, paint.opacity))
}

/// Typography declarations for a TEXT node's style descriptor.
/// Vertical centering is approximated by switching the box to a flex
/// container.
pub fn typography_block(style: &TypeStyle) -> String {
    let mut out = String::new();

    if let Some(family) = &style.font_family {
        out.push_str(&format!("  font-family: '{family}', sans-serif;\n"));
    }
    if let Some(size) = style.font_size {
        out.push_str(&format!("  font-size: {}px;\n", fmt_px(size)));
    }
    if let Some(weight) = style.font_weight {
        out.push_str(&format!("  font-weight: {weight};\n"));
    }
    if style.italic == Some(true) {
        out.push_str("  font-style: italic;\n");
    }
    if let Some(px) = style.line_height_px {
        out.push_str(&format!("  line-height: {}px;\n", fmt_px(px)));
    } else if let Some(pct) = style.line_height_percent {
        out.push_str(&format!("  line-height: {}%;\n", fmt_px(pct)));
    }
    if let Some(spacing) = style.letter_spacing {
        if spacing != 0.0 {
            out.push_str(&format!("  letter-spacing: {}px;\n", fmt_px(spacing)));
        }
    }
    if let Some(align) = &style.text_align_horizontal {
        out.push_str(&format!("  text-align: {};\n", align.to_lowercase()));
    }
    if let Some(decoration) = &style.text_decoration {
        match decoration.as_str() {
            "UNDERLINE" => out.push_str("  text-decoration: underline;\n"),
            "STRIKETHROUGH" => out.push_str("  text-decoration: line-through;\n"),
            _ => {}
        }
    }
    if let Some(case) = &style.text_case {
        match case.as_str() {
            "UPPER" => out.push_str("  text-transform: uppercase;\n"),
            "LOWER" => out.push_str("  text-transform: lowercase;\n"),
            "TITLE" => out.push_str("  text-transform: capitalize;\n"),
            _ => {}
        }
    }
    if style
        .text_align_vertical
        .as_deref()
        .is_some_and(|v| v.eq_ignore_ascii_case("CENTER"))
    {
        out.push_str("  display: flex;\n  align-items: center;\n");
        if style
            .text_align_horizontal
            .as_deref()
            .is_some_and(|h| h.eq_ignore_ascii_case("CENTER"))
        {
            out.push_str("  justify-content: center;\n");
        }
    }

    out
}
