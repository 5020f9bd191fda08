//! Static theme layer.
//!
//! A fixed stylesheet per archetype, appended after the per-node
//! rules. These are constant strings, not derived from the node tree;
//! they give the generated markup (forms, sidebar, table) a coherent
//! look that the per-node rules alone cannot provide.

use figcast_classify::Archetype;

const SHARED: &str = r#"
* { box-sizing: border-box; }
body {
  margin: 0;
  font-family: 'Inter', 'Segoe UI', sans-serif;
  background: #f4f5f7;
  color: #1f2430;
}
.layout { display: flex; min-height: 100vh; }
.content { flex: 1; padding: 32px; }
.sidebar {
  width: 240px;
  background: #1f2430;
  color: #e8eaf0;
  padding: 24px 0;
}
.sidebar-brand { padding: 0 24px 24px; font-weight: 700; font-size: 18px; }
.sidebar-brand img { max-width: 160px; }
.sidebar-menu { display: flex; flex-direction: column; }
.menu-item {
  display: flex;
  align-items: center;
  gap: 10px;
  padding: 12px 24px;
  color: #aab1c2;
  text-decoration: none;
}
.menu-item.active, .menu-item:hover { background: #2a3042; color: #ffffff; }
.icon { width: 16px; height: 16px; display: inline-block; border-radius: 3px; background: currentColor; opacity: 0.7; }
.tabs { display: flex; gap: 8px; margin-bottom: 24px; }
.tab {
  border: none;
  background: transparent;
  padding: 10px 16px;
  cursor: pointer;
  border-bottom: 2px solid transparent;
}
.tab.active { border-bottom-color: #4361ee; color: #4361ee; }
.search { margin-bottom: 24px; }
.search input {
  width: 320px;
  padding: 10px 14px;
  border: 1px solid #d4d8e2;
  border-radius: 6px;
}
.data-table { width: 100%; border-collapse: collapse; background: #ffffff; }
.data-table th, .data-table td {
  padding: 12px 16px;
  text-align: left;
  border-bottom: 1px solid #edeff4;
}
.data-table th { font-weight: 600; color: #5b6372; }
.form { background: #ffffff; border-radius: 10px; padding: 32px; max-width: 420px; }
.form-title { margin: 0 0 8px; font-size: 24px; }
.form-description { margin: 0 0 24px; color: #5b6372; }
.form-field { margin-bottom: 18px; display: flex; flex-direction: column; gap: 6px; }
.form-field label { font-size: 13px; font-weight: 600; color: #3a4150; }
.form-field input, .form-field select, .form-field textarea {
  padding: 10px 12px;
  border: 1px solid #d4d8e2;
  border-radius: 6px;
  font-size: 14px;
}
.password-field { position: relative; }
.toggle-visibility {
  position: absolute;
  right: 10px;
  bottom: 8px;
  border: none;
  background: transparent;
  color: #4361ee;
  cursor: pointer;
  font-size: 12px;
}
.form-row { display: flex; justify-content: space-between; align-items: center; margin-bottom: 18px; }
.checkbox { display: flex; align-items: center; gap: 8px; font-size: 13px; }
.form-link { font-size: 13px; color: #4361ee; text-decoration: none; }
.form-submit {
  width: 100%;
  padding: 12px;
  border: none;
  border-radius: 6px;
  background: #4361ee;
  color: #ffffff;
  font-size: 15px;
  cursor: pointer;
}
.form-submit:hover { background: #3a53cc; }
"#;

const LOGIN_THEME: &str = r#"
body { display: flex; align-items: center; justify-content: center; }
.form-login { box-shadow: 0 12px 32px rgba(31, 36, 48, 0.12); }
"#;

const FORGOT_PASSWORD_THEME: &str = r#"
body { display: flex; align-items: center; justify-content: center; }
.form-forgot-password { text-align: center; }
.form-forgot-password .form-field { text-align: left; }
"#;

const CHANGE_PASSWORD_THEME: &str = r#"
.form-change-password { margin: 48px auto; }
"#;

const OTHER_THEME: &str = r#"
.form { margin-top: 24px; }
"#;

/// The theme stylesheet for an archetype.
pub fn stylesheet(archetype: Archetype) -> String {
    let layer = match archetype.theme_key() {
        "login" => LOGIN_THEME,
        "forgot_password" => FORGOT_PASSWORD_THEME,
        "change_password" => CHANGE_PASSWORD_THEME,
        _ => OTHER_THEME,
    };
    format!("{SHARED}{layer}")
}
