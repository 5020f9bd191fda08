//! Default-value tables, one per archetype.
//!
//! Every generator must produce a complete, renderable form even from
//! an empty node list, so each archetype carries a table of fallback
//! strings. They are injected into the generators rather than
//! hardcoded inline, which keeps the tables independently testable and
//! the generators honest about what they derive from the tree.

/// Fallbacks for the login form.
#[derive(Debug, Clone, Copy)]
pub struct LoginDefaults {
    pub title: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub password_label: &'static str,
    pub password_placeholder: &'static str,
    pub submit_caption: &'static str,
    pub forgot_link: &'static str,
}

pub const LOGIN: LoginDefaults = LoginDefaults {
    title: "Welcome Back",
    email_label: "Email*",
    email_placeholder: "Enter your email",
    password_label: "Password*",
    password_placeholder: "Enter your password",
    submit_caption: "Login",
    forgot_link: "Forgot password?",
};

/// Fallbacks for the forgot-password form.
#[derive(Debug, Clone, Copy)]
pub struct ForgotPasswordDefaults {
    pub title: &'static str,
    pub description: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub submit_caption: &'static str,
    pub back_link: &'static str,
}

pub const FORGOT_PASSWORD: ForgotPasswordDefaults = ForgotPasswordDefaults {
    title: "Forgot Password",
    description: "Enter the email linked to your account and we will send a reset link.",
    email_label: "Email*",
    email_placeholder: "Enter your email",
    submit_caption: "Send",
    back_link: "Back to login",
};

/// Fallbacks for the change-password form.
#[derive(Debug, Clone, Copy)]
pub struct ChangePasswordDefaults {
    pub title: &'static str,
    pub current_label: &'static str,
    pub new_label: &'static str,
    pub confirm_label: &'static str,
    pub placeholder: &'static str,
    pub submit_caption: &'static str,
}

pub const CHANGE_PASSWORD: ChangePasswordDefaults = ChangePasswordDefaults {
    title: "Change Password",
    current_label: "Current Password*",
    new_label: "New Password*",
    confirm_label: "Confirm Password*",
    placeholder: "Enter password",
    submit_caption: "Update",
};

/// Fallbacks for the notification form.
#[derive(Debug, Clone, Copy)]
pub struct NotificationDefaults {
    pub title: &'static str,
    pub type_label: &'static str,
    pub type_options: &'static [&'static str],
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub recipient_label: &'static str,
    pub recipient_options: &'static [&'static str],
    pub submit_caption: &'static str,
}

pub const NOTIFICATION: NotificationDefaults = NotificationDefaults {
    title: "Send Notification",
    type_label: "Notification Type",
    type_options: &["Announcement", "Reminder", "Alert"],
    message_label: "Message",
    message_placeholder: "Type your message",
    recipient_label: "Recipient",
    recipient_options: &["All users", "Admins", "Selected users"],
    submit_caption: "Send",
};

/// Fallbacks for the generic event form.
#[derive(Debug, Clone, Copy)]
pub struct EventDefaults {
    pub title: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub date_label: &'static str,
    pub description_label: &'static str,
    pub description_placeholder: &'static str,
    pub submit_caption: &'static str,
}

pub const EVENT: EventDefaults = EventDefaults {
    title: "Create Event",
    name_label: "Event Name*",
    name_placeholder: "Enter event name",
    date_label: "Date*",
    description_label: "Description",
    description_placeholder: "Describe the event",
    submit_caption: "Save",
};

/// Fallbacks for the shared sidebar.
#[derive(Debug, Clone, Copy)]
pub struct SidebarDefaults {
    pub brand: &'static str,
    pub menu: &'static [&'static str],
}

pub const SIDEBAR: SidebarDefaults = SidebarDefaults {
    brand: "Admin",
    menu: &["Dashboard", "Users", "Notifications", "Settings"],
};

/// Keyword → icon table for sidebar menu items. First substring match
/// wins; [`FALLBACK_ICON`] applies when nothing matches.
pub const MENU_ICONS: &[(&str, &str)] = &[
    ("dash", "grid"),
    ("home", "grid"),
    ("user", "users"),
    ("member", "users"),
    ("notif", "bell"),
    ("alert", "bell"),
    ("setting", "gear"),
    ("profile", "person"),
    ("event", "calendar"),
    ("report", "chart"),
    ("logout", "exit"),
];

pub const FALLBACK_ICON: &str = "dot";

/// Icon slug for a menu caption.
pub fn icon_for(caption: &str) -> &'static str {
    let lower = caption.to_lowercase();
    MENU_ICONS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK_ICON)
}
