//! Wire model for Figma design nodes.
//!
//! Mirrors the subset of the files-endpoint payload the generator
//! consumes. Every field beyond `id` and `type` is optional on the
//! wire, so everything carries a serde default. Unrecognized node and
//! paint types deserialize to `Unknown` instead of failing the whole
//! tree; an `Unknown` node acts as a pass-through container.

use serde::{Deserialize, Serialize};

/// Node classification from the Figma file payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Component,
    ComponentSet,
    Instance,
    Rectangle,
    Ellipse,
    Line,
    Vector,
    BooleanOperation,
    Text,
    Image,
    #[default]
    #[serde(other)]
    Unknown,
}

impl NodeType {
    /// Lowercase slug used in generated CSS class names.
    pub fn slug(&self) -> &'static str {
        match self {
            NodeType::Document => "document",
            NodeType::Canvas => "canvas",
            NodeType::Frame => "frame",
            NodeType::Group => "group",
            NodeType::Component => "component",
            NodeType::ComponentSet => "component-set",
            NodeType::Instance => "instance",
            NodeType::Rectangle => "rectangle",
            NodeType::Ellipse => "ellipse",
            NodeType::Line => "line",
            NodeType::Vector => "vector",
            NodeType::BooleanOperation => "boolean-operation",
            NodeType::Text => "text",
            NodeType::Image => "image",
            NodeType::Unknown => "node",
        }
    }
}

/// Normalized-unit color. Channels are 0–1; `a` is the color's own
/// alpha and is independent of the owning paint's `opacity`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default)]
    pub a: Option<f64>,
}

/// Paint classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    Solid,
    Image,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    #[serde(other)]
    Unknown,
}

/// One entry of a node's `fills` or `strokes` sequence.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: PaintType,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub image_ref: Option<String>,
}

impl Paint {
    /// A paint is visible unless the payload says otherwise.
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

/// Absolute bounding box in design-space pixels. Coordinates are in
/// the space of the whole document, not the parent.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// 2D offset, used by shadow effects.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

/// Typography descriptor, present on TEXT nodes.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub font_weight: Option<u32>,
    #[serde(default)]
    pub italic: Option<bool>,
    #[serde(default)]
    pub text_align_horizontal: Option<String>,
    #[serde(default)]
    pub text_align_vertical: Option<String>,
    #[serde(default)]
    pub line_height_px: Option<f64>,
    #[serde(default)]
    pub line_height_percent: Option<f64>,
    #[serde(default)]
    pub letter_spacing: Option<f64>,
    #[serde(default)]
    pub text_decoration: Option<String>,
    #[serde(default)]
    pub text_case: Option<String>,
}

/// Effect classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Unknown,
}

/// A shadow or blur effect on a node.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub offset: Option<Vector2>,
    #[serde(default)]
    pub radius: Option<f64>,
}

impl Effect {
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

/// One element of the design tree.
///
/// Ownership is exclusive: no node is shared by two parents, and the
/// tree may be arbitrarily deep. `name` is author-supplied and only a
/// heuristic signal. `characters` is meaningful only on TEXT nodes;
/// use the capability accessors below rather than reading fields
/// directly so that absent capabilities fail closed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub characters: Option<String>,
    #[serde(default)]
    pub style: Option<TypeStyle>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    #[serde(default)]
    pub absolute_bounding_box: Option<Rect>,
    #[serde(default)]
    pub corner_radius: Option<f64>,
    #[serde(default)]
    pub stroke_weight: Option<f64>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub padding_left: Option<f64>,
    #[serde(default)]
    pub padding_right: Option<f64>,
    #[serde(default)]
    pub padding_top: Option<f64>,
    #[serde(default)]
    pub padding_bottom: Option<f64>,
    #[serde(default)]
    pub children: Vec<DesignNode>,
}

impl Default for DesignNode {
    fn default() -> Self {
        Self {
            id: String::new(),
            node_type: NodeType::Unknown,
            name: String::new(),
            characters: None,
            style: None,
            fills: Vec::new(),
            strokes: Vec::new(),
            absolute_bounding_box: None,
            corner_radius: None,
            stroke_weight: None,
            effects: Vec::new(),
            padding_left: None,
            padding_right: None,
            padding_top: None,
            padding_bottom: None,
            children: Vec::new(),
        }
    }
}

impl DesignNode {
    /// Absolute bounding box, when the payload carries one.
    pub fn bounds(&self) -> Option<&Rect> {
        self.absolute_bounding_box.as_ref()
    }

    /// Text content. Defined only for TEXT nodes; any other type
    /// returns None even if `characters` happens to be set.
    pub fn text(&self) -> Option<&str> {
        if self.node_type == NodeType::Text {
            self.characters.as_deref()
        } else {
            None
        }
    }

    /// First visible SOLID fill.
    pub fn solid_fill(&self) -> Option<&Paint> {
        self.fills
            .iter()
            .find(|p| p.paint_type == PaintType::Solid && p.is_visible())
    }

    /// First visible IMAGE fill.
    pub fn image_fill(&self) -> Option<&Paint> {
        self.fills
            .iter()
            .find(|p| p.paint_type == PaintType::Image && p.is_visible())
    }

    /// Whether this node renders an image: a bare IMAGE node or any
    /// shape carrying an image fill.
    pub fn bears_image(&self) -> bool {
        self.node_type == NodeType::Image || self.image_fill().is_some()
    }

    /// First visible stroke paint.
    pub fn first_stroke(&self) -> Option<&Paint> {
        self.strokes.iter().find(|p| p.is_visible())
    }

    /// Whether this node may hold children worth descending into.
    /// Unknown types count as containers so unrecognized wire values
    /// pass through rather than truncating the walk.
    pub fn is_container(&self) -> bool {
        matches!(
            self.node_type,
            NodeType::Document
                | NodeType::Canvas
                | NodeType::Frame
                | NodeType::Group
                | NodeType::Component
                | NodeType::ComponentSet
                | NodeType::Instance
                | NodeType::Unknown
        )
    }

    /// The id component the image endpoints address. Instance-path ids
    /// are composite (`I12:3;45:6`); the endpoint wants the part
    /// before the first `;`.
    pub fn export_id(&self) -> &str {
        self.id.split(';').next().unwrap_or(&self.id)
    }
}
