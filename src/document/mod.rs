//! Document assembly.
//!
//! # Responsibilities
//! - Wrap rendered markup in a complete HTML document
//! - Link stylesheets and inline the styles captured during render
//! - Embed the serialized state for client bootstrap
//! - Emit script tags in manifest order
//!
//! # Design Decisions
//! - Pure function of its inputs: no timestamps, no random ids
//! - Fixed tag order: meta, title, description, icon, stylesheet links,
//!   inline styles; then markup, state, scripts
//! - State JSON is escaped so it can never close its `<script>` element

use crate::render::node::{escape_attr, escape_text};

/// Global the client reads the embedded state from.
pub const STATE_GLOBAL: &str = "__PRELOADED_STATE__";

/// Id of the inline `<style>` element holding server-captured styles.
pub const SERVER_STYLES_ID: &str = "jss-server-side";

/// Id of the element the markup is mounted in.
pub const ROOT_ID: &str = "app";

/// Inputs to [`assemble`].
#[derive(Debug, Clone, Copy)]
pub struct DocumentParts<'a> {
    pub fragment: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    /// Empty means no icon link.
    pub favicon: &'a str,
    pub stylesheets: &'a [&'a str],
    pub scripts: &'a [&'a str],
    /// Serialized state container (JSON).
    pub state_json: &'a str,
    pub style_text: &'a str,
}

/// Build the full HTML document.
pub fn assemble(parts: &DocumentParts<'_>) -> String {
    let mut html = String::with_capacity(
        parts.fragment.len() + parts.state_json.len() + parts.style_text.len() + 512,
    );

    html.push_str("<!doctype html><html lang=\"en\"><head>");
    html.push_str("<meta charset=\"utf-8\">");
    html.push_str("<meta http-equiv=\"x-ua-compatible\" content=\"ie=edge\">");
    html.push_str("<title>");
    html.push_str(&escape_text(parts.title));
    html.push_str("</title>");
    html.push_str("<meta name=\"description\" content=\"");
    html.push_str(&escape_attr(parts.description));
    html.push_str("\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");

    if !parts.favicon.is_empty() {
        html.push_str("<link rel=\"icon\" href=\"");
        html.push_str(&escape_attr(parts.favicon));
        html.push_str("\">");
    }

    for href in parts.stylesheets {
        html.push_str("<link rel=\"stylesheet\" href=\"");
        html.push_str(&escape_attr(href));
        html.push_str("\">");
    }

    html.push_str("<style id=\"");
    html.push_str(SERVER_STYLES_ID);
    html.push_str("\">");
    html.push_str(&escape_style(parts.style_text));
    html.push_str("</style></head><body>");

    html.push_str("<div id=\"");
    html.push_str(ROOT_ID);
    html.push_str("\">");
    html.push_str(parts.fragment);
    html.push_str("</div>");

    html.push_str("<script>window.");
    html.push_str(STATE_GLOBAL);
    html.push('=');
    html.push_str(&escape_json_for_script(parts.state_json));
    html.push_str("</script>");

    for src in parts.scripts {
        html.push_str("<script src=\"");
        html.push_str(&escape_attr(src));
        html.push_str("\"></script>");
    }

    html.push_str("</body></html>");
    html
}

/// The state JSON embedded by [`assemble`], if present.
pub fn embedded_state(document: &str) -> Option<&str> {
    let marker = format!("<script>window.{}=", STATE_GLOBAL);
    let start = document.find(&marker)? + marker.len();
    let end = start + document[start..].find("</script>")?;
    Some(&document[start..end])
}

/// Escape characters that could end the script element or break JS
/// parsing. The result is still valid JSON with the same value.
fn escape_json_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

/// Keep captured CSS from closing the style element.
fn escape_style(css: &str) -> String {
    css.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts<'a>(state_json: &'a str) -> DocumentParts<'a> {
        DocumentParts {
            fragment: "<main>hi</main>",
            title: "Notes & Posts",
            description: "A \"quoted\" description",
            favicon: "",
            stylesheets: &["/assets/client.css"],
            scripts: &["/assets/vendor.js", "/assets/client.js"],
            state_json,
            style_text: ".a {\n  color: red;\n}",
        }
    }

    #[test]
    fn test_document_structure() {
        let doc = assemble(&parts("{}"));

        assert!(doc.starts_with("<!doctype html><html lang=\"en\"><head>"));
        assert!(doc.ends_with("</body></html>"));
        assert!(doc.contains("<title>Notes &amp; Posts</title>"));
        assert!(doc.contains("content=\"A &quot;quoted&quot; description\""));
        assert!(!doc.contains("rel=\"icon\""));
        assert!(doc.contains("<style id=\"jss-server-side\">.a {\n  color: red;\n}</style>"));
        assert!(doc.contains("<div id=\"app\"><main>hi</main></div>"));
    }

    #[test]
    fn test_asset_order() {
        let doc = assemble(&parts("{}"));
        let css_link = doc.find("/assets/client.css").unwrap();
        let inline = doc.find("<style id=").unwrap();
        let state = doc.find("__PRELOADED_STATE__").unwrap();
        let vendor = doc.find("/assets/vendor.js").unwrap();
        let client = doc.find("/assets/client.js").unwrap();

        assert!(css_link < inline);
        assert!(state < vendor);
        assert!(vendor < client);
    }

    #[test]
    fn test_favicon_link() {
        let mut p = parts("{}");
        p.favicon = "/favicon.ico";
        assert!(assemble(&p).contains("<link rel=\"icon\" href=\"/favicon.ico\">"));
    }

    #[test]
    fn test_state_cannot_break_out() {
        let json = r#"{"title":"</script><script>alert(1)</script>"}"#;
        let doc = assemble(&parts(json));

        assert_eq!(doc.matches("</script>").count(), 3);
        let embedded = embedded_state(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(embedded).unwrap();
        assert_eq!(value["title"], "</script><script>alert(1)</script>");
    }

    #[test]
    fn test_style_cannot_break_out() {
        let mut p = parts("{}");
        p.style_text = ".a::after { content: \"</style>\"; }";
        let doc = assemble(&p);
        assert_eq!(doc.matches("</style>").count(), 1);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(assemble(&parts("{\"a\":1}")), assemble(&parts("{\"a\":1}")));
    }

    #[test]
    fn test_embedded_state_missing() {
        assert_eq!(embedded_state("<html></html>"), None);
    }
}
