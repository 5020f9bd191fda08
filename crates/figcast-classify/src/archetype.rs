//! Screen archetype detection.
//!
//! The archetype picks which form generator and which static theme
//! layer apply. Detection scans all text content and node names for
//! keyword families; when several families match, precedence is
//! forgot-password > change-password > notification > login, falling
//! back to the generic event form.

use figcast_node::DesignNode;

/// The recognized screen patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Archetype {
    Login,
    ForgotPassword,
    ChangePassword,
    Notification,
    Generic,
}

impl Archetype {
    /// Key selecting the static theme stylesheet.
    pub fn theme_key(&self) -> &'static str {
        match self {
            Archetype::Login => "login",
            Archetype::ForgotPassword => "forgot_password",
            Archetype::ChangePassword => "change_password",
            Archetype::Notification | Archetype::Generic => "other",
        }
    }
}

/// Pick the archetype for a flattened node list.
pub fn detect_archetype(nodes: &[&DesignNode]) -> Archetype {
    let mut corpus = String::new();
    for node in nodes {
        corpus.push_str(&node.name.to_lowercase());
        corpus.push(' ');
        if let Some(text) = node.text() {
            corpus.push_str(&text.to_lowercase());
            corpus.push(' ');
        }
    }

    if corpus.contains("forgot") {
        Archetype::ForgotPassword
    } else if corpus.contains("change password")
        || corpus.contains("reset password")
        || corpus.contains("new password")
    {
        Archetype::ChangePassword
    } else if corpus.contains("notification") {
        Archetype::Notification
    } else if corpus.contains("login") || corpus.contains("log in") || corpus.contains("sign in") {
        Archetype::Login
    } else {
        Archetype::Generic
    }
}
