//! HTML assembler.
//!
//! Flattens the tree, runs the structural detectors, and concatenates
//! the recognized fragments (sidebar, tab strip, search bar, data
//! table, and the archetype's form) into one document fragment.
//! Anything undetected is simply absent; nothing here errors.

use crate::{class_name, defaults, escape_html, forms};
use figcast_classify::{
    detect_form_fields, detect_search_input, detect_sidebar, detect_table, detect_tabs, Archetype,
    FieldCandidate, TableModel,
};
use figcast_node::{DesignNode, ImageUrlMap, NodeIndex};

const SEARCH_FRAGMENT: &str =
    "<div class=\"search\">\n  <input type=\"search\" name=\"search\" placeholder=\"Search\">\n</div>\n";

/// Assemble the markup fragment for one screen.
pub fn generate(index: &NodeIndex, images: &ImageUrlMap, archetype: Archetype) -> String {
    let nodes = index.flat();
    let mut out = String::new();

    let with_sidebar = detect_sidebar(nodes);
    if with_sidebar {
        out.push_str("<div class=\"layout\">\n");
        out.push_str(&forms::sidebar(nodes, archetype, images, &defaults::SIDEBAR));
        out.push_str("<main class=\"content\">\n");
    }

    let tabs = detect_tabs(nodes);
    if !tabs.is_empty() {
        log::debug!("tab strip with {} tabs", tabs.len());
        out.push_str(&tabs_fragment(&tabs));
    }

    if detect_search_input(nodes) {
        out.push_str(SEARCH_FRAGMENT);
    }

    let table = detect_table(nodes);
    if let Some(table) = &table {
        log::debug!(
            "table with {} headers and {} rows",
            table.headers.len(),
            table.rows.len()
        );
        out.push_str(&table_fragment(table));
    }

    let form = match archetype {
        Archetype::Login => forms::login_form(nodes, &defaults::LOGIN),
        Archetype::ForgotPassword => {
            forms::forgot_password_form(nodes, &defaults::FORGOT_PASSWORD)
        }
        Archetype::ChangePassword => forms::change_password_form(&defaults::CHANGE_PASSWORD),
        Archetype::Notification => forms::notification_form(&defaults::NOTIFICATION),
        Archetype::Generic => {
            let fields = detect_form_fields(nodes);
            if !fields.is_empty() {
                fields_fragment(&fields)
            } else if table.is_some() {
                // a table screen needs no fallback form
                String::new()
            } else {
                forms::event_form(nodes, &defaults::EVENT)
            }
        }
    };
    out.push_str(&form);

    if with_sidebar {
        out.push_str("</main>\n</div>\n");
    }

    out
}

/// Tab strip in original order; the first tab is default-active.
fn tabs_fragment(tabs: &[&DesignNode]) -> String {
    let mut out = String::from("<nav class=\"tabs\">\n");
    for (i, tab) in tabs.iter().enumerate() {
        let caption = tab.text().unwrap_or_default().trim();
        let active = if i == 0 { " active" } else { "" };
        out.push_str(&format!(
            "  <button type=\"button\" class=\"tab{active}\">{}</button>\n",
            escape_html(caption)
        ));
    }
    out.push_str("</nav>\n");
    out
}

fn table_fragment(table: &TableModel) -> String {
    let mut out = String::from("<table class=\"data-table\">\n  <thead>\n    <tr>\n");
    for header in &table.headers {
        out.push_str(&format!("      <th>{}</th>\n", escape_html(header)));
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");
    for row in &table.rows {
        out.push_str("    <tr>\n");
        for cell in row {
            out.push_str(&format!("      <td>{}</td>\n", escape_html(cell)));
        }
        out.push_str("    </tr>\n");
    }
    out.push_str("  </tbody>\n</table>\n");
    out
}

/// Geometry-derived fields for screens with no recognized archetype.
fn fields_fragment(fields: &[FieldCandidate]) -> String {
    let mut out = String::from("<form class=\"form form-generic\" method=\"post\">\n");
    for field in fields {
        let label = field.label.text().unwrap_or_default().trim();
        let id = class_name(field.input);
        out.push_str(&format!(
            "  <div class=\"form-field\">\n    <label for=\"{id}\">{}</label>\n    <input type=\"text\" id=\"{id}\" name=\"{id}\">\n  </div>\n",
            escape_html(label)
        ));
    }
    out.push_str(&format!(
        "  <button type=\"submit\" class=\"form-submit\">{}</button>\n",
        escape_html(defaults::EVENT.submit_caption)
    ));
    out.push_str("</form>\n");
    out
}
