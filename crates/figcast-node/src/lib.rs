//! Figma design node model
//!
//! Deserialized view of the node tree returned by the Figma files
//! endpoint, plus the tree index the classifiers and generators work
//! from. The tree is read-only input: one generation pass builds a
//! `NodeIndex` over it, scans the flattened list, and discards
//! everything afterward.
//!
//! # Example
//!
//! ```
//! use figcast_node::{DesignNode, NodeIndex};
//!
//! let roots: Vec<DesignNode> = Vec::new();
//! let index = NodeIndex::build(&roots);
//! assert!(index.flat().is_empty());
//! ```

pub mod model;
pub mod tree;

pub use model::{
    Color, DesignNode, Effect, EffectType, NodeType, Paint, PaintType, Rect, TypeStyle, Vector2,
};
pub use tree::{flatten, NodeIndex};

use std::collections::HashMap;

/// Resolved image URLs keyed by export id (the pre-`;` component of a
/// node id). Built once per generation pass, consulted read-only.
pub type ImageUrlMap = HashMap<String, String>;
