//! Node classification heuristics
//!
//! Two layers of pattern matching over the design tree:
//!
//! - [`roles`]: pure predicates labeling a single node with a
//!   semantic role (label, placeholder, button, link, title, logo).
//! - [`structure`]: detectors recognizing composite UI patterns
//!   (sidebar, tabs, search bar, data table, form-field groups) from
//!   the flattened node list.
//! - [`archetype`]: picks which screen pattern drives generation.
//!
//! Everything here is fallible only in the "no match" sense: a
//! classifier that cannot establish its signals returns false/None and
//! the generators substitute defaults downstream. Nothing in this
//! crate returns an error.

pub mod archetype;
pub mod roles;
pub mod structure;

pub use archetype::{detect_archetype, Archetype};
pub use roles::{
    find_input_candidates, find_logo_node, find_submit_caption, is_checkbox_label,
    is_input_placeholder, is_label, is_link, is_submit_button, is_title,
};
pub use structure::{
    detect_form_fields, detect_search_input, detect_sidebar, detect_table, detect_tabs,
    sidebar_items, FieldCandidate, TableModel,
};
