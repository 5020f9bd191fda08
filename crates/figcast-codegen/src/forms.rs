//! Per-archetype form generators.
//!
//! Each generator consumes the flattened node list plus its defaults
//! table and returns one HTML fragment. Field-finding is uniform:
//! search by keyword in classified label/placeholder text, first match
//! in list order wins. A missing node never fails the generator; the
//! defaults table fills the gap, so every archetype renders a complete
//! form even from an empty list.

use crate::defaults::{
    icon_for, ChangePasswordDefaults, EventDefaults, ForgotPasswordDefaults, LoginDefaults,
    NotificationDefaults, SidebarDefaults,
};
use crate::{escape_attr, escape_html};
use figcast_classify::{
    find_logo_node, find_submit_caption, is_checkbox_label, is_input_placeholder, is_label,
    is_link, is_title, sidebar_items, Archetype,
};
use figcast_node::{DesignNode, ImageUrlMap};

/// Client-side password visibility toggle, emitted after any form
/// carrying a `.toggle-visibility` button.
const PASSWORD_TOGGLE_SCRIPT: &str = r#"document.querySelectorAll('.toggle-visibility').forEach((btn) => {
  btn.addEventListener('click', () => {
    const input = document.getElementById(btn.dataset.target);
    if (!input) return;
    const hidden = input.type === 'password';
    input.type = hidden ? 'text' : 'password';
    btn.textContent = hidden ? 'Hide' : 'Show';
  });
});"#;

// ---------------------------------------------------------------------------
// Field finders: first match in list order, None when nothing matches
// ---------------------------------------------------------------------------

fn find_title_text(nodes: &[&DesignNode]) -> Option<String> {
    nodes
        .iter()
        .find(|n| is_title(n))
        .and_then(|n| n.text())
        .map(|t| t.trim().to_string())
}

fn find_label_text(nodes: &[&DesignNode], keyword: &str) -> Option<String> {
    nodes.iter().find_map(|n| {
        if !is_label(n) {
            return None;
        }
        let text = n.text()?.trim();
        text.to_lowercase()
            .contains(keyword)
            .then(|| text.to_string())
    })
}

fn find_placeholder_text(nodes: &[&DesignNode], keyword: &str) -> Option<String> {
    nodes.iter().find_map(|n| {
        if !is_input_placeholder(n) {
            return None;
        }
        let text = n.text()?.trim();
        text.to_lowercase()
            .contains(keyword)
            .then(|| text.to_string())
    })
}

fn find_link_text(nodes: &[&DesignNode], keyword: &str) -> Option<String> {
    nodes.iter().find_map(|n| {
        if !is_link(n) {
            return None;
        }
        let text = n.text()?.trim();
        text.to_lowercase()
            .contains(keyword)
            .then(|| text.to_string())
    })
}

fn find_checkbox_text(nodes: &[&DesignNode]) -> Option<String> {
    nodes
        .iter()
        .find(|n| is_checkbox_label(n))
        .and_then(|n| n.text())
        .map(|t| t.trim().to_string())
}

/// Longer prose near a form reads as its description. Labels and
/// placeholders are excluded so a wordy placeholder is not promoted.
fn find_description_text(nodes: &[&DesignNode]) -> Option<String> {
    nodes.iter().find_map(|n| {
        if is_label(n) || is_input_placeholder(n) || is_title(n) {
            return None;
        }
        let text = n.text()?.trim();
        (text.len() >= 30).then(|| text.to_string())
    })
}

// ---------------------------------------------------------------------------
// Shared fragments
// ---------------------------------------------------------------------------

fn text_field(id: &str, input_type: &str, label: &str, placeholder: &str) -> String {
    format!(
        "  <div class=\"form-field\">\n    <label for=\"{id}\">{}</label>\n    <input type=\"{input_type}\" id=\"{id}\" name=\"{id}\" placeholder=\"{}\">\n  </div>\n",
        escape_html(label),
        escape_attr(placeholder),
    )
}

fn password_field(id: &str, label: &str, placeholder: &str) -> String {
    format!(
        "  <div class=\"form-field password-field\">\n    <label for=\"{id}\">{}</label>\n    <input type=\"password\" id=\"{id}\" name=\"{id}\" placeholder=\"{}\">\n    <button type=\"button\" class=\"toggle-visibility\" data-target=\"{id}\">Show</button>\n  </div>\n",
        escape_html(label),
        escape_attr(placeholder),
    )
}

fn submit_button(caption: &str) -> String {
    format!(
        "  <button type=\"submit\" class=\"form-submit\">{}</button>\n",
        escape_html(caption),
    )
}

fn toggle_script() -> String {
    format!("<script>\n{PASSWORD_TOGGLE_SCRIPT}\n</script>\n")
}

fn select_field(id: &str, label: &str, options: &[&str]) -> String {
    let mut out = format!(
        "  <div class=\"form-field\">\n    <label for=\"{id}\">{}</label>\n    <select id=\"{id}\" name=\"{id}\">\n",
        escape_html(label),
    );
    for option in options {
        out.push_str(&format!(
            "      <option>{}</option>\n",
            escape_html(option)
        ));
    }
    out.push_str("    </select>\n  </div>\n");
    out
}

// ---------------------------------------------------------------------------
// Archetype generators
// ---------------------------------------------------------------------------

/// Login: email + password + optional remember-me + submit + forgot
/// link, with the password visibility toggle script.
pub fn login_form(nodes: &[&DesignNode], d: &LoginDefaults) -> String {
    let title = find_title_text(nodes).unwrap_or_else(|| d.title.to_string());
    let email_label =
        find_label_text(nodes, "email").unwrap_or_else(|| d.email_label.to_string());
    let email_placeholder =
        find_placeholder_text(nodes, "email").unwrap_or_else(|| d.email_placeholder.to_string());
    let password_label =
        find_label_text(nodes, "password").unwrap_or_else(|| d.password_label.to_string());
    let password_placeholder = find_placeholder_text(nodes, "password")
        .unwrap_or_else(|| d.password_placeholder.to_string());
    let submit = find_submit_caption(nodes).unwrap_or_else(|| d.submit_caption.to_string());
    let forgot = find_link_text(nodes, "forgot").unwrap_or_else(|| d.forgot_link.to_string());
    let remember = find_checkbox_text(nodes);

    let mut out = String::from("<form class=\"form form-login\" method=\"post\">\n");
    out.push_str(&format!(
        "  <h1 class=\"form-title\">{}</h1>\n",
        escape_html(&title)
    ));
    out.push_str(&text_field("email", "email", &email_label, &email_placeholder));
    out.push_str(&password_field(
        "password",
        &password_label,
        &password_placeholder,
    ));
    out.push_str("  <div class=\"form-row\">\n");
    if let Some(remember) = remember {
        out.push_str(&format!(
            "    <label class=\"checkbox\"><input type=\"checkbox\" name=\"remember\"> {}</label>\n",
            escape_html(&remember)
        ));
    }
    out.push_str(&format!(
        "    <a class=\"form-link\" href=\"#\">{}</a>\n",
        escape_html(&forgot)
    ));
    out.push_str("  </div>\n");
    out.push_str(&submit_button(&submit));
    out.push_str("</form>\n");
    out.push_str(&toggle_script());
    out
}

/// Forgot password: description + email + submit + back link.
pub fn forgot_password_form(nodes: &[&DesignNode], d: &ForgotPasswordDefaults) -> String {
    let title = find_title_text(nodes).unwrap_or_else(|| d.title.to_string());
    let description =
        find_description_text(nodes).unwrap_or_else(|| d.description.to_string());
    let email_label =
        find_label_text(nodes, "email").unwrap_or_else(|| d.email_label.to_string());
    let email_placeholder =
        find_placeholder_text(nodes, "email").unwrap_or_else(|| d.email_placeholder.to_string());
    let submit = find_submit_caption(nodes).unwrap_or_else(|| d.submit_caption.to_string());
    let back = find_link_text(nodes, "back").unwrap_or_else(|| d.back_link.to_string());

    let mut out = String::from("<form class=\"form form-forgot-password\" method=\"post\">\n");
    out.push_str(&format!(
        "  <h1 class=\"form-title\">{}</h1>\n",
        escape_html(&title)
    ));
    out.push_str(&format!(
        "  <p class=\"form-description\">{}</p>\n",
        escape_html(&description)
    ));
    out.push_str(&text_field("email", "email", &email_label, &email_placeholder));
    out.push_str(&submit_button(&submit));
    out.push_str(&format!(
        "  <a class=\"form-link\" href=\"#\">{}</a>\n",
        escape_html(&back)
    ));
    out.push_str("</form>\n");
    out
}

/// Change password: current/new/confirm triple, each with a visibility
/// toggle. Purely templated, no geometry lookup.
pub fn change_password_form(d: &ChangePasswordDefaults) -> String {
    let mut out = String::from("<form class=\"form form-change-password\" method=\"post\">\n");
    out.push_str(&format!(
        "  <h1 class=\"form-title\">{}</h1>\n",
        escape_html(d.title)
    ));
    out.push_str(&password_field(
        "current-password",
        d.current_label,
        d.placeholder,
    ));
    out.push_str(&password_field("new-password", d.new_label, d.placeholder));
    out.push_str(&password_field(
        "confirm-password",
        d.confirm_label,
        d.placeholder,
    ));
    out.push_str(&submit_button(d.submit_caption));
    out.push_str("</form>\n");
    out.push_str(&toggle_script());
    out
}

/// Notification: type select + free text + recipient select. Fully
/// static.
pub fn notification_form(d: &NotificationDefaults) -> String {
    let mut out = String::from("<form class=\"form form-notification\" method=\"post\">\n");
    out.push_str(&format!(
        "  <h1 class=\"form-title\">{}</h1>\n",
        escape_html(d.title)
    ));
    out.push_str(&select_field("notification-type", d.type_label, d.type_options));
    out.push_str(&format!(
        "  <div class=\"form-field\">\n    <label for=\"notification-message\">{}</label>\n    <textarea id=\"notification-message\" name=\"message\" rows=\"4\" placeholder=\"{}\"></textarea>\n  </div>\n",
        escape_html(d.message_label),
        escape_attr(d.message_placeholder),
    ));
    out.push_str(&select_field(
        "notification-recipient",
        d.recipient_label,
        d.recipient_options,
    ));
    out.push_str(&submit_button(d.submit_caption));
    out.push_str("</form>\n");
    out
}

/// Generic event form: name/date/description. Minimal; no further
/// fields are wired.
pub fn event_form(nodes: &[&DesignNode], d: &EventDefaults) -> String {
    let title = find_title_text(nodes).unwrap_or_else(|| d.title.to_string());
    let name_label = find_label_text(nodes, "name").unwrap_or_else(|| d.name_label.to_string());
    let name_placeholder =
        find_placeholder_text(nodes, "name").unwrap_or_else(|| d.name_placeholder.to_string());
    let submit = find_submit_caption(nodes).unwrap_or_else(|| d.submit_caption.to_string());

    let mut out = String::from("<form class=\"form form-generic\" method=\"post\">\n");
    out.push_str(&format!(
        "  <h1 class=\"form-title\">{}</h1>\n",
        escape_html(&title)
    ));
    out.push_str(&text_field("event-name", "text", &name_label, &name_placeholder));
    out.push_str(&text_field("event-date", "date", d.date_label, ""));
    out.push_str(&format!(
        "  <div class=\"form-field\">\n    <label for=\"event-description\">{}</label>\n    <textarea id=\"event-description\" name=\"description\" rows=\"3\" placeholder=\"{}\"></textarea>\n  </div>\n",
        escape_html(d.description_label),
        escape_attr(d.description_placeholder),
    ));
    out.push_str(&submit_button(&submit));
    out.push_str("</form>\n");
    out
}

// ---------------------------------------------------------------------------
// Sidebar, shared across archetypes
// ---------------------------------------------------------------------------

fn is_active_item(caption: &str, archetype: Archetype) -> bool {
    let lower = caption.to_lowercase();
    match archetype {
        Archetype::Notification => lower.contains("notif"),
        Archetype::ChangePassword => lower.contains("setting"),
        _ => lower.contains("dash") || lower.contains("home"),
    }
}

/// The sidebar fragment: a logo slot plus a vertically sorted menu.
/// Fewer than two derived items falls back to the default menu rather
/// than rendering a near-empty sidebar. An unresolved logo image
/// degrades to the brand text, never an error.
pub fn sidebar(
    nodes: &[&DesignNode],
    archetype: Archetype,
    images: &ImageUrlMap,
    d: &SidebarDefaults,
) -> String {
    let mut out = String::from("<aside class=\"sidebar\">\n");

    let logo_img = find_logo_node(nodes)
        .and_then(|logo| images.get(logo.export_id()).map(|url| (logo, url)));
    match logo_img {
        Some((logo, url)) => out.push_str(&format!(
            "  <div class=\"sidebar-brand\"><img src=\"{}\" alt=\"{}\"></div>\n",
            escape_attr(url),
            escape_attr(&logo.name)
        )),
        None => out.push_str(&format!(
            "  <div class=\"sidebar-brand\">{}</div>\n",
            escape_html(d.brand)
        )),
    }

    let derived = sidebar_items(nodes);
    let captions: Vec<String> = if derived.len() < 2 {
        d.menu.iter().map(|s| s.to_string()).collect()
    } else {
        derived
            .iter()
            .filter_map(|n| n.text())
            .map(|t| t.trim().to_string())
            .collect()
    };

    out.push_str("  <nav class=\"sidebar-menu\">\n");
    for caption in &captions {
        let icon = icon_for(caption);
        let active = if is_active_item(caption, archetype) {
            " active"
        } else {
            ""
        };
        out.push_str(&format!(
            "    <a class=\"menu-item{active}\" href=\"#\"><span class=\"icon icon-{icon}\"></span>{}</a>\n",
            escape_html(caption)
        ));
    }
    out.push_str("  </nav>\n");
    out.push_str("</aside>\n");
    out
}
