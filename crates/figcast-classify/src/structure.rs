//! Structural detectors.
//!
//! These scan the flattened node list rather than the tree, because
//! layout patterns (a label above an input, a row of tabs) are not
//! necessarily parent/child in the original structure. Geometry
//! comparisons use absolute coordinates directly, since bounding
//! boxes are in document space.

use figcast_node::{DesignNode, NodeType};

/// Vocabulary of column headers that mark a data table.
const TABLE_HEADER_VOCAB: &[&str] = &[
    "no.",
    "profile",
    "photo",
    "name",
    "email",
    "registered",
    "action",
];

/// Short text nodes hugging the left edge read as sidebar menu items.
fn is_sidebar_item(node: &DesignNode) -> bool {
    let Some(text) = node.text() else {
        return false;
    };
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.len() >= 15 {
        return false;
    }
    node.bounds()
        .is_some_and(|b| b.x < 200.0 && b.width < 200.0)
}

/// True if the screen carries a sidebar: a cluster of at least two
/// narrow, left-positioned short text nodes.
pub fn detect_sidebar(nodes: &[&DesignNode]) -> bool {
    nodes.iter().filter(|n| is_sidebar_item(n)).count() >= 2
}

/// The sidebar's menu item nodes, sorted top to bottom.
pub fn sidebar_items<'a>(nodes: &[&'a DesignNode]) -> Vec<&'a DesignNode> {
    let mut items: Vec<&DesignNode> = nodes
        .iter()
        .filter(|n| is_sidebar_item(n))
        .copied()
        .collect();
    items.sort_by(|a, b| {
        let ay = a.bounds().map(|r| r.y).unwrap_or(f64::MAX);
        let by = b.bounds().map(|r| r.y).unwrap_or(f64::MAX);
        ay.total_cmp(&by)
    });
    items
}

/// Detect a tab strip: short text nodes in the top band whose y
/// coordinates all fall within a 40px window. Returned in original
/// order; the first tab becomes the default-active one. Empty when
/// fewer than two candidates exist or the band check fails.
pub fn detect_tabs<'a>(nodes: &[&'a DesignNode]) -> Vec<&'a DesignNode> {
    let candidates: Vec<&DesignNode> = nodes
        .iter()
        .filter(|n| {
            n.text()
                .is_some_and(|t| !t.trim().is_empty() && t.trim().len() < 15)
                && n.bounds().is_some_and(|b| b.y < 200.0)
        })
        .copied()
        .collect();

    if candidates.len() < 2 {
        return Vec::new();
    }

    let ys: Vec<f64> = candidates
        .iter()
        .filter_map(|n| n.bounds().map(|b| b.y))
        .collect();
    let min = ys.iter().copied().fold(f64::MAX, f64::min);
    let max = ys.iter().copied().fold(f64::MIN, f64::max);
    if max - min > 40.0 {
        return Vec::new();
    }

    candidates
}

/// True if the screen carries a search input: a wide input-shaped box
/// near the top, or anything named/worded "search".
pub fn detect_search_input(nodes: &[&DesignNode]) -> bool {
    nodes.iter().any(|n| {
        if n.name.to_lowercase().contains("search")
            || n.text().is_some_and(|t| t.to_lowercase().contains("search"))
        {
            return true;
        }
        matches!(n.node_type, NodeType::Rectangle | NodeType::Frame)
            && n.bounds()
                .is_some_and(|b| b.width > 200.0 && b.y < 250.0 && b.height <= 60.0)
    })
}

/// A recognized data table: header captions plus data cells chunked
/// into rows of header-count size. The chunking is a positional
/// assumption: when the data does not divide evenly the final row
/// simply comes up short.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel<'a> {
    pub container: &'a DesignNode,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn is_header_text(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    TABLE_HEADER_VOCAB.iter().any(|word| lower == *word)
}

/// Detect a data table: a FRAME/GROUP with more than five children
/// where at least one child's text matches the header vocabulary.
/// Among multiple candidates the one with the most children wins
/// (more children, more likely the full table body).
pub fn detect_table<'a>(nodes: &[&'a DesignNode]) -> Option<TableModel<'a>> {
    let mut best: Option<&'a DesignNode> = None;
    for node in nodes.iter().copied() {
        if !matches!(node.node_type, NodeType::Frame | NodeType::Group) {
            continue;
        }
        if node.children.len() <= 5 {
            continue;
        }
        let has_header = node
            .children
            .iter()
            .any(|c| c.text().is_some_and(is_header_text));
        if !has_header {
            continue;
        }
        if best.is_none_or(|b| node.children.len() > b.children.len()) {
            best = Some(node);
        }
    }
    let container = best?;

    let headers: Vec<String> = container
        .children
        .iter()
        .filter_map(|c| c.text())
        .filter(|t| is_header_text(t))
        .map(|t| t.trim().to_string())
        .collect();
    let cells: Vec<String> = container
        .children
        .iter()
        .filter_map(|c| c.text())
        .filter(|t| !is_header_text(t))
        .map(|t| t.trim().to_string())
        .collect();
    let rows: Vec<Vec<String>> = cells
        .chunks(headers.len().max(1))
        .map(|chunk| chunk.to_vec())
        .collect();

    Some(TableModel {
        container,
        headers,
        rows,
    })
}

/// An input-shaped box paired with the label found above it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCandidate<'a> {
    pub input: &'a DesignNode,
    pub label: &'a DesignNode,
}

/// Generic field detector: any RECTANGLE/FRAME with input-like
/// proportions is a text-input box; its label is the nearest text node
/// directly above within a 50px vertical window and under 100px of
/// horizontal offset. Boxes with no label are skipped; there is no
/// orphan-field fallback.
pub fn detect_form_fields<'a>(nodes: &[&'a DesignNode]) -> Vec<FieldCandidate<'a>> {
    let mut fields = Vec::new();
    for node in nodes.iter().copied() {
        if !matches!(node.node_type, NodeType::Rectangle | NodeType::Frame) {
            continue;
        }
        let Some(bounds) = node.bounds() else {
            continue;
        };
        if bounds.width <= 100.0 || !(30.0..=60.0).contains(&bounds.height) {
            continue;
        }

        let label = nodes
            .iter()
            .filter(|t| t.node_type == NodeType::Text)
            .filter_map(|t| t.bounds().map(|tb| (*t, tb)))
            .filter(|(_, tb)| {
                let dy = bounds.y - tb.y;
                dy > 0.0 && dy <= 50.0 && (tb.x - bounds.x).abs() < 100.0
            })
            .min_by(|(_, a), (_, b)| (bounds.y - a.y).total_cmp(&(bounds.y - b.y)))
            .map(|(t, _)| t);

        if let Some(label) = label {
            fields.push(FieldCandidate { input: node, label });
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use figcast_node::Rect;
    use pretty_assertions::assert_eq;

    fn text_at(id: &str, chars: &str, x: f64, y: f64) -> DesignNode {
        DesignNode {
            id: id.into(),
            node_type: NodeType::Text,
            characters: Some(chars.into()),
            absolute_bounding_box: Some(Rect {
                x,
                y,
                width: 100.0,
                height: 20.0,
            }),
            ..Default::default()
        }
    }

    fn boxed(id: &str, x: f64, y: f64, width: f64, height: f64) -> DesignNode {
        DesignNode {
            id: id.into(),
            node_type: NodeType::Rectangle,
            absolute_bounding_box: Some(Rect {
                x,
                y,
                width,
                height,
            }),
            ..Default::default()
        }
    }

    fn text_child(chars: &str) -> DesignNode {
        DesignNode {
            id: format!("t-{chars}"),
            node_type: NodeType::Text,
            characters: Some(chars.into()),
            ..Default::default()
        }
    }

    // =========================================================================
    // Sidebar
    // =========================================================================

    #[test]
    fn test_sidebar_detected_from_left_cluster() {
        let a = text_at("a", "Dashboard", 24.0, 120.0);
        let b = text_at("b", "Users", 24.0, 160.0);
        let nodes: Vec<&DesignNode> = vec![&a, &b];
        assert!(detect_sidebar(&nodes));
    }

    #[test]
    fn test_sidebar_needs_two_items() {
        let a = text_at("a", "Dashboard", 24.0, 120.0);
        let nodes: Vec<&DesignNode> = vec![&a];
        assert!(!detect_sidebar(&nodes));
    }

    #[test]
    fn test_sidebar_ignores_right_side_text() {
        let a = text_at("a", "Dashboard", 600.0, 120.0);
        let b = text_at("b", "Users", 600.0, 160.0);
        let nodes: Vec<&DesignNode> = vec![&a, &b];
        assert!(!detect_sidebar(&nodes));
    }

    #[test]
    fn test_sidebar_items_sorted_by_y() {
        let a = text_at("a", "Settings", 24.0, 300.0);
        let b = text_at("b", "Dashboard", 24.0, 100.0);
        let c = text_at("c", "Users", 24.0, 200.0);
        let nodes: Vec<&DesignNode> = vec![&a, &b, &c];
        let ids: Vec<&str> = sidebar_items(&nodes).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    // =========================================================================
    // Tabs
    // =========================================================================

    #[test]
    fn test_tabs_within_band() {
        let a = text_at("a", "All", 100.0, 80.0);
        let b = text_at("b", "Active", 180.0, 90.0);
        let c = text_at("c", "Archived", 260.0, 85.0);
        let nodes: Vec<&DesignNode> = vec![&a, &b, &c];
        let tabs = detect_tabs(&nodes);
        let ids: Vec<&str> = tabs.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tabs_rejects_wide_band() {
        let a = text_at("a", "All", 100.0, 20.0);
        let b = text_at("b", "Active", 180.0, 190.0);
        let nodes: Vec<&DesignNode> = vec![&a, &b];
        assert!(detect_tabs(&nodes).is_empty());
    }

    #[test]
    fn test_tabs_rejects_single_candidate() {
        let a = text_at("a", "All", 100.0, 80.0);
        let nodes: Vec<&DesignNode> = vec![&a];
        assert!(detect_tabs(&nodes).is_empty());
    }

    #[test]
    fn test_tabs_ignores_long_text() {
        let a = text_at("a", "All", 100.0, 80.0);
        let b = text_at("b", "A rather long heading", 180.0, 80.0);
        let nodes: Vec<&DesignNode> = vec![&a, &b];
        assert!(detect_tabs(&nodes).is_empty());
    }

    // =========================================================================
    // Search
    // =========================================================================

    #[test]
    fn test_search_by_name() {
        let node = DesignNode {
            id: "s".into(),
            name: "Search bar".into(),
            node_type: NodeType::Frame,
            ..Default::default()
        };
        let nodes: Vec<&DesignNode> = vec![&node];
        assert!(detect_search_input(&nodes));
    }

    #[test]
    fn test_search_by_geometry() {
        let node = boxed("s", 300.0, 40.0, 420.0, 44.0);
        let nodes: Vec<&DesignNode> = vec![&node];
        assert!(detect_search_input(&nodes));
    }

    #[test]
    fn test_search_rejects_tall_wide_frame() {
        // a top-level screen frame is wide and at the top, but not
        // input-shaped
        let node = boxed("screen", 0.0, 0.0, 1440.0, 900.0);
        let nodes: Vec<&DesignNode> = vec![&node];
        assert!(!detect_search_input(&nodes));
    }

    // =========================================================================
    // Table
    // =========================================================================

    fn table_frame(id: &str, children: Vec<DesignNode>) -> DesignNode {
        DesignNode {
            id: id.into(),
            node_type: NodeType::Frame,
            children,
            ..Default::default()
        }
    }

    #[test]
    fn test_table_detected_above_threshold() {
        let frame = table_frame(
            "tbl",
            vec![
                text_child("No."),
                text_child("Name"),
                text_child("Email"),
                text_child("Action"),
                text_child("1"),
                text_child("Jane"),
            ],
        );
        let nodes: Vec<&DesignNode> = vec![&frame];
        let table = detect_table(&nodes).unwrap();
        assert_eq!(table.container.id, "tbl");
        assert_eq!(table.headers, vec!["No.", "Name", "Email", "Action"]);
    }

    #[test]
    fn test_table_rejected_below_threshold() {
        let frame = table_frame(
            "tbl",
            vec![
                text_child("No."),
                text_child("Name"),
                text_child("1"),
                text_child("Jane"),
            ],
        );
        let nodes: Vec<&DesignNode> = vec![&frame];
        assert!(detect_table(&nodes).is_none());
    }

    #[test]
    fn test_table_prefers_most_children() {
        let small = table_frame(
            "small",
            vec![
                text_child("Name"),
                text_child("a"),
                text_child("b"),
                text_child("c"),
                text_child("d"),
                text_child("e"),
            ],
        );
        let big = table_frame(
            "big",
            vec![
                text_child("Name"),
                text_child("Email"),
                text_child("a"),
                text_child("b"),
                text_child("c"),
                text_child("d"),
                text_child("e"),
                text_child("f"),
            ],
        );
        let nodes: Vec<&DesignNode> = vec![&small, &big];
        let table = detect_table(&nodes).unwrap();
        assert_eq!(table.container.id, "big");
    }

    #[test]
    fn test_table_rows_chunked_by_header_count() {
        let frame = table_frame(
            "tbl",
            vec![
                text_child("Name"),
                text_child("Email"),
                text_child("Jane"),
                text_child("jane@x.io"),
                text_child("Ines"),
                text_child("ines@x.io"),
            ],
        );
        let nodes: Vec<&DesignNode> = vec![&frame];
        let table = detect_table(&nodes).unwrap();
        assert_eq!(
            table.rows,
            vec![
                vec!["Jane".to_string(), "jane@x.io".to_string()],
                vec!["Ines".to_string(), "ines@x.io".to_string()],
            ]
        );
    }

    #[test]
    fn test_table_uneven_remainder_yields_short_row() {
        let frame = table_frame(
            "tbl",
            vec![
                text_child("Name"),
                text_child("Email"),
                text_child("Jane"),
                text_child("jane@x.io"),
                text_child("Ines"),
            ],
        );
        let nodes: Vec<&DesignNode> = vec![&frame];
        let table = detect_table(&nodes).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["Ines".to_string()]);
    }

    // =========================================================================
    // Generic fields
    // =========================================================================

    #[test]
    fn test_field_paired_with_label_above() {
        let label = text_at("lbl", "Full name", 40.0, 100.0);
        let input = boxed("in", 40.0, 130.0, 320.0, 44.0);
        let nodes: Vec<&DesignNode> = vec![&label, &input];
        let fields = detect_form_fields(&nodes);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].label.id, "lbl");
        assert_eq!(fields[0].input.id, "in");
    }

    #[test]
    fn test_field_nearest_label_wins() {
        let far = text_at("far", "Section", 40.0, 85.0);
        let near = text_at("near", "Full name", 40.0, 105.0);
        let input = boxed("in", 40.0, 130.0, 320.0, 44.0);
        let nodes: Vec<&DesignNode> = vec![&far, &near, &input];
        let fields = detect_form_fields(&nodes);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].label.id, "near");
    }

    #[test]
    fn test_field_skipped_without_label() {
        let input = boxed("in", 40.0, 130.0, 320.0, 44.0);
        let nodes: Vec<&DesignNode> = vec![&input];
        assert!(detect_form_fields(&nodes).is_empty());
    }

    #[test]
    fn test_field_rejects_label_too_far_horizontally() {
        let label = text_at("lbl", "Full name", 400.0, 100.0);
        let input = boxed("in", 40.0, 130.0, 320.0, 44.0);
        let nodes: Vec<&DesignNode> = vec![&label, &input];
        assert!(detect_form_fields(&nodes).is_empty());
    }

    #[test]
    fn test_field_rejects_non_input_proportions() {
        let label = text_at("lbl", "Full name", 40.0, 100.0);
        let tall = boxed("in", 40.0, 130.0, 320.0, 200.0);
        let nodes: Vec<&DesignNode> = vec![&label, &tall];
        assert!(detect_form_fields(&nodes).is_empty());
    }
}
