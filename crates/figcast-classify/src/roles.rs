//! Single-node role classifiers.
//!
//! Each classifier is a pure predicate over one node (or a finder
//! returning the best match from a list). Signals are the author-given
//! `name`, text content keywords, geometry, and fill types. None of
//! these is guaranteed meaningful, so every predicate fails closed
//! when a capability is absent.

use figcast_node::{DesignNode, NodeType};

/// Keywords marking informal placeholder copy ("Enter your email").
const PLACEHOLDER_HINTS: &[&str] = &["enter", "type", "your", "e.g."];

/// Field-name vocabulary for required labels ("Email*").
const LABEL_VOCAB: &[&str] = &[
    "email", "password", "confirm", "name", "username", "subject", "message", "phone",
];

/// Action verbs a submit button caption must exactly match, after
/// trimming, lowercasing, and dropping internal spaces/hyphens.
const ACTION_VOCAB: &[&str] = &[
    "login", "signin", "signup", "submit", "register", "send", "continue", "save", "update",
];

const CHECKBOX_HINTS: &[&str] = &["remember", "agree", "accept", "subscribe", "keep me"];

const LINK_HINTS: &[&str] = &["forgot", "sign up", "back to", "terms", "privacy"];

/// True iff the node is placeholder copy for an input: informal
/// phrasing, and no trailing asterisk. The asterisk is reserved as the
/// required-label signal, which keeps this predicate mutually
/// exclusive with [`is_label`] for any given text node.
pub fn is_input_placeholder(node: &DesignNode) -> bool {
    let Some(text) = node.text() else {
        return false;
    };
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.ends_with('*') {
        return false;
    }
    let lower = trimmed.to_lowercase();
    PLACEHOLDER_HINTS.iter().any(|hint| lower.contains(hint))
}

/// True iff the node is a required-field label: known field vocabulary
/// with a trailing asterisk.
pub fn is_label(node: &DesignNode) -> bool {
    let Some(text) = node.text() else {
        return false;
    };
    let Some(stem) = text.trim().strip_suffix('*') else {
        return false;
    };
    let lower = stem.trim().to_lowercase();
    LABEL_VOCAB.iter().any(|word| lower.contains(word))
}

/// Normalize a candidate caption: trim, lowercase, and drop internal
/// whitespace and hyphens, so "Log In" and "Sign-up" hit the closed
/// vocabulary.
fn normalize_caption(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

fn is_action_caption(text: &str) -> bool {
    let normalized = normalize_caption(text);
    ACTION_VOCAB.iter().any(|verb| normalized == *verb)
}

/// True iff the node functions as a submit button: either a
/// FRAME/RECTANGLE with exactly one TEXT child carrying an action
/// caption, or a TEXT node with such a caption and a SOLID fill (a
/// colored label standing in for a button).
pub fn is_submit_button(node: &DesignNode) -> bool {
    match node.node_type {
        NodeType::Frame | NodeType::Rectangle => {
            let mut texts = node
                .children
                .iter()
                .filter(|c| c.node_type == NodeType::Text);
            match (texts.next(), texts.next()) {
                (Some(only), None) => only.text().is_some_and(is_action_caption),
                _ => false,
            }
        }
        NodeType::Text => {
            node.text().is_some_and(is_action_caption) && node.solid_fill().is_some()
        }
        _ => false,
    }
}

/// The visible caption of the first submit button in the list, if any.
pub fn find_submit_caption(nodes: &[&DesignNode]) -> Option<String> {
    nodes.iter().find(|n| is_submit_button(n)).map(|button| {
        match button.node_type {
            NodeType::Text => button.text().unwrap_or_default().trim().to_string(),
            _ => button
                .children
                .iter()
                .find_map(|c| c.text())
                .unwrap_or_default()
                .trim()
                .to_string(),
        }
    })
}

/// True iff the node reads like a checkbox caption ("Remember me").
pub fn is_checkbox_label(node: &DesignNode) -> bool {
    let Some(text) = node.text() else {
        return false;
    };
    let lower = text.trim().to_lowercase();
    CHECKBOX_HINTS.iter().any(|hint| lower.contains(hint))
}

/// True iff the node reads like an inline link: link phrasing, or an
/// underlined text run.
pub fn is_link(node: &DesignNode) -> bool {
    let Some(text) = node.text() else {
        return false;
    };
    let underlined = node
        .style
        .as_ref()
        .and_then(|s| s.text_decoration.as_deref())
        .is_some_and(|d| d.eq_ignore_ascii_case("UNDERLINE"));
    if underlined {
        return true;
    }
    let lower = text.trim().to_lowercase();
    LINK_HINTS.iter().any(|hint| lower.contains(hint))
}

/// True iff the node is a screen title: short prominent text that does
/// not independently match the submit vocabulary (so a "Login" button
/// caption is never also the title).
pub fn is_title(node: &DesignNode) -> bool {
    let Some(text) = node.text() else {
        return false;
    };
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.len() > 60 || is_action_caption(trimmed) {
        return false;
    }
    let large = node
        .style
        .as_ref()
        .and_then(|s| s.font_size)
        .is_some_and(|size| size >= 18.0);
    let top = node.bounds().is_some_and(|b| b.y < 200.0);
    large || top
}

/// Find the node to render as the logo. Search order: (1) any node
/// named like a logo that bears an image, (2) fallback: any
/// image-bearing shape in the top band. First match in list order.
pub fn find_logo_node<'a>(nodes: &[&'a DesignNode]) -> Option<&'a DesignNode> {
    let named = nodes
        .iter()
        .find(|n| {
            let lower = n.name.to_lowercase();
            let logo_named =
                lower.contains("logo") || lower.contains("brand") || lower.contains("icon");
            logo_named && n.bears_image()
        })
        .copied();
    if named.is_some() {
        return named;
    }
    nodes
        .iter()
        .find(|n| n.bears_image() && n.bounds().is_some_and(|b| b.y < 200.0))
        .copied()
}

/// Containers that plausibly render as text inputs: they contain a
/// placeholder-classified child, or a label-classified node sits
/// within 50px vertically. Proximity substitutes for grouping, since
/// the tree carries no semantic "form field" node.
pub fn find_input_candidates<'a>(nodes: &[&'a DesignNode]) -> Vec<&'a DesignNode> {
    nodes
        .iter()
        .filter(|n| matches!(n.node_type, NodeType::Rectangle | NodeType::Frame))
        .filter(|n| {
            n.children.iter().any(is_input_placeholder) || has_nearby_label(n, nodes)
        })
        .copied()
        .collect()
}

fn has_nearby_label(node: &DesignNode, nodes: &[&DesignNode]) -> bool {
    let Some(bounds) = node.bounds() else {
        return false;
    };
    nodes.iter().any(|other| {
        is_label(other)
            && other
                .bounds()
                .is_some_and(|ob| (ob.y - bounds.y).abs() <= 50.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use figcast_node::{Color, Paint, PaintType, Rect, TypeStyle};

    fn text(chars: &str) -> DesignNode {
        DesignNode {
            id: "t".into(),
            node_type: NodeType::Text,
            characters: Some(chars.into()),
            ..Default::default()
        }
    }

    fn text_at(chars: &str, x: f64, y: f64) -> DesignNode {
        DesignNode {
            absolute_bounding_box: Some(Rect {
                x,
                y,
                width: 80.0,
                height: 20.0,
            }),
            ..text(chars)
        }
    }

    fn solid_paint() -> Paint {
        Paint {
            paint_type: PaintType::Solid,
            visible: None,
            opacity: None,
            color: Some(Color {
                r: 0.2,
                g: 0.4,
                b: 0.9,
                a: None,
            }),
            image_ref: None,
        }
    }

    fn image_paint() -> Paint {
        Paint {
            paint_type: PaintType::Image,
            visible: None,
            opacity: None,
            color: None,
            image_ref: Some("ref".into()),
        }
    }

    // =========================================================================
    // Placeholder vs label: the asterisk tie-break
    // =========================================================================

    #[test]
    fn test_placeholder_matches_informal_copy() {
        assert!(is_input_placeholder(&text("Enter your email")));
        assert!(is_input_placeholder(&text("Type a message")));
        assert!(is_input_placeholder(&text("e.g. jane@doe.com")));
    }

    #[test]
    fn test_placeholder_rejects_asterisk() {
        assert!(!is_input_placeholder(&text("Enter your email*")));
    }

    #[test]
    fn test_placeholder_rejects_non_text() {
        let mut node = text("Enter your email");
        node.node_type = NodeType::Rectangle;
        assert!(!is_input_placeholder(&node));
    }

    #[test]
    fn test_label_requires_asterisk_and_vocab() {
        assert!(is_label(&text("Email*")));
        assert!(is_label(&text("Confirm Password*")));
        assert!(!is_label(&text("Email")));
        assert!(!is_label(&text("Favourite color*")));
    }

    #[test]
    fn test_placeholder_and_label_mutually_exclusive() {
        // "your" hits the placeholder hints, "name" hits the label
        // vocabulary; only the asterisk decides.
        for sample in ["Enter your name", "Enter your name*", "Email*", "Email"] {
            let node = text(sample);
            assert!(
                !(is_input_placeholder(&node) && is_label(&node)),
                "both matched for {sample:?}"
            );
        }
    }

    // =========================================================================
    // Submit buttons
    // =========================================================================

    #[test]
    fn test_submit_button_frame_with_text_child() {
        let button = DesignNode {
            id: "b".into(),
            node_type: NodeType::Frame,
            children: vec![text("Login")],
            ..Default::default()
        };
        assert!(is_submit_button(&button));
    }

    #[test]
    fn test_submit_button_caption_normalized() {
        let button = DesignNode {
            id: "b".into(),
            node_type: NodeType::Rectangle,
            children: vec![text("  Sign In ")],
            ..Default::default()
        };
        assert!(is_submit_button(&button));
    }

    #[test]
    fn test_submit_button_rejects_two_text_children() {
        let button = DesignNode {
            id: "b".into(),
            node_type: NodeType::Frame,
            children: vec![text("Login"), text("or")],
            ..Default::default()
        };
        assert!(!is_submit_button(&button));
    }

    #[test]
    fn test_submit_button_rejects_open_vocabulary() {
        let button = DesignNode {
            id: "b".into(),
            node_type: NodeType::Frame,
            children: vec![text("Learn more")],
            ..Default::default()
        };
        assert!(!is_submit_button(&button));
    }

    #[test]
    fn test_submit_button_text_needs_solid_fill() {
        let plain = text("Submit");
        assert!(!is_submit_button(&plain));

        let filled = DesignNode {
            fills: vec![solid_paint()],
            ..text("Submit")
        };
        assert!(is_submit_button(&filled));
    }

    #[test]
    fn test_find_submit_caption() {
        let button = DesignNode {
            id: "b".into(),
            node_type: NodeType::Frame,
            children: vec![text("Login")],
            ..Default::default()
        };
        let other = text("Welcome back");
        let nodes: Vec<&DesignNode> = vec![&other, &button];
        assert_eq!(find_submit_caption(&nodes).as_deref(), Some("Login"));
    }

    // =========================================================================
    // Checkbox, link, title
    // =========================================================================

    #[test]
    fn test_checkbox_label() {
        assert!(is_checkbox_label(&text("Remember me")));
        assert!(is_checkbox_label(&text("I agree to the rules")));
        assert!(!is_checkbox_label(&text("Email*")));
    }

    #[test]
    fn test_link_by_phrasing() {
        assert!(is_link(&text("Forgot password?")));
        assert!(is_link(&text("Back to login")));
        assert!(!is_link(&text("Welcome")));
    }

    #[test]
    fn test_link_by_underline() {
        let node = DesignNode {
            style: Some(TypeStyle {
                text_decoration: Some("UNDERLINE".into()),
                ..Default::default()
            }),
            ..text("Help center")
        };
        assert!(is_link(&node));
    }

    #[test]
    fn test_title_by_font_size() {
        let node = DesignNode {
            style: Some(TypeStyle {
                font_size: Some(24.0),
                ..Default::default()
            }),
            ..text("Welcome back")
        };
        assert!(is_title(&node));
    }

    #[test]
    fn test_title_excludes_action_captions() {
        let node = DesignNode {
            style: Some(TypeStyle {
                font_size: Some(24.0),
                ..Default::default()
            }),
            ..text("Login")
        };
        assert!(!is_title(&node));
    }

    // =========================================================================
    // Logo search order
    // =========================================================================

    #[test]
    fn test_logo_name_match_beats_position_fallback() {
        let positioned = DesignNode {
            id: "p".into(),
            node_type: NodeType::Rectangle,
            fills: vec![image_paint()],
            absolute_bounding_box: Some(Rect {
                x: 0.0,
                y: 10.0,
                width: 40.0,
                height: 40.0,
            }),
            ..Default::default()
        };
        let named = DesignNode {
            id: "n".into(),
            name: "Logo".into(),
            node_type: NodeType::Rectangle,
            fills: vec![image_paint()],
            ..Default::default()
        };
        // position-fallback candidate listed first; the name match
        // must still win because it is searched first
        let nodes: Vec<&DesignNode> = vec![&positioned, &named];
        assert_eq!(find_logo_node(&nodes).map(|n| n.id.as_str()), Some("n"));
    }

    #[test]
    fn test_logo_position_fallback() {
        let top_image = DesignNode {
            id: "img".into(),
            node_type: NodeType::Rectangle,
            fills: vec![image_paint()],
            absolute_bounding_box: Some(Rect {
                x: 0.0,
                y: 50.0,
                width: 40.0,
                height: 40.0,
            }),
            ..Default::default()
        };
        let low_image = DesignNode {
            id: "low".into(),
            absolute_bounding_box: Some(Rect {
                x: 0.0,
                y: 600.0,
                width: 40.0,
                height: 40.0,
            }),
            ..top_image.clone()
        };
        let nodes: Vec<&DesignNode> = vec![&low_image, &top_image];
        assert_eq!(find_logo_node(&nodes).map(|n| n.id.as_str()), Some("img"));
    }

    #[test]
    fn test_logo_none_when_no_image() {
        let named = DesignNode {
            name: "Logo".into(),
            node_type: NodeType::Rectangle,
            ..Default::default()
        };
        let nodes: Vec<&DesignNode> = vec![&named];
        assert!(find_logo_node(&nodes).is_none());
    }

    // =========================================================================
    // Input candidates
    // =========================================================================

    #[test]
    fn test_input_candidate_via_placeholder_child() {
        let input = DesignNode {
            id: "in".into(),
            node_type: NodeType::Rectangle,
            children: vec![text("Enter your email")],
            ..Default::default()
        };
        let nodes: Vec<&DesignNode> = vec![&input];
        assert_eq!(find_input_candidates(&nodes).len(), 1);
    }

    #[test]
    fn test_input_candidate_via_label_proximity() {
        let label = text_at("Email*", 40.0, 100.0);
        let input = DesignNode {
            id: "in".into(),
            node_type: NodeType::Rectangle,
            absolute_bounding_box: Some(Rect {
                x: 40.0,
                y: 130.0,
                width: 320.0,
                height: 44.0,
            }),
            ..Default::default()
        };
        let nodes: Vec<&DesignNode> = vec![&label, &input];
        let candidates = find_input_candidates(&nodes);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, "in");
    }

    #[test]
    fn test_input_candidate_rejects_distant_label() {
        let label = text_at("Email*", 40.0, 100.0);
        let input = DesignNode {
            id: "in".into(),
            node_type: NodeType::Rectangle,
            absolute_bounding_box: Some(Rect {
                x: 40.0,
                y: 400.0,
                width: 320.0,
                height: 44.0,
            }),
            ..Default::default()
        };
        let nodes: Vec<&DesignNode> = vec![&label, &input];
        assert!(find_input_candidates(&nodes).is_empty());
    }
}
