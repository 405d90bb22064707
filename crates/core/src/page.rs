//! Host page the backend serves for the login and redirect views

use crate::config::{CONFIG_ELEMENT_ID, MOUNT_ELEMENT_ID, RuntimeConfig};
use crate::error::Result;

/// Render the HTML document hosting one of the views.
///
/// The config is embedded as a JSON script block the views read at startup.
/// `script` is inlined as the page's module script.
pub fn render_page(config: &RuntimeConfig, title: &str, script: &str) -> Result<String> {
    // "</" inside the JSON would end the script element early
    let config_json = config.to_json()?.replace("</", "<\\/");

    Ok(format!(
        r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    <div id="{MOUNT_ELEMENT_ID}"></div>
    <script id="{CONFIG_ELEMENT_ID}" type="application/json">
{config_json}
    </script>
    <script type="module">{script}</script>
</body>
</html>
"#,
        title = escape_text(title),
    ))
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
