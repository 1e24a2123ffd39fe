//! Markup rendering for alert cards

use std::fmt::Write;

use crate::record::AlertRecord;

/// Id of the element that receives the rendered alert list
pub const DEFAULT_CONTAINER_ID: &str = "spListContainer";

/// Presentation options applied while rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Normalized CSS font size for record titles
    pub title_font_size: Option<String>,
}

/// Static shell written into the widget root on activation
pub fn shell_markup(container_id: &str) -> String {
    format!(r#"<section><div id="{}"></div></section>"#, escape_html(container_id))
}

/// Render records, in iteration order, into the card list markup.
pub fn render_markup(records: &[AlertRecord], options: &RenderOptions) -> String {
    let title_style = options
        .title_font_size
        .as_deref()
        .map(|size| format!(r#" style="font-size: {}""#, escape_html(size)))
        .unwrap_or_default();

    let mut html = String::from(r#"<div class="card_parent">"#);
    for record in records {
        // Writing to a String cannot fail
        let _ = write!(
            html,
            r#"<div class="image_item"><p class="alert_title"{}>{}</p><p>{}</p><p>{}</p><p>{}</p></div>"#,
            title_style,
            escape_html(&record.title),
            escape_html(&record.description),
            escape_html(&record.alert_type_text()),
            record.active,
        );
    }
    html.push_str("</div>");
    html
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_renders_wrapper() {
        let html = render_markup(&[], &RenderOptions::default());
        assert_eq!(html, r#"<div class="card_parent"></div>"#);
    }

    #[test]
    fn test_renders_fields_in_order() {
        let records = vec![
            AlertRecord::new("B", 1.0, true)
                .with_description("second body")
                .with_alert_type("Warning"),
            AlertRecord::new("A", 2.0, true).with_description("first body"),
        ];

        let html = render_markup(&records, &RenderOptions::default());

        assert_eq!(html.matches(r#"<div class="image_item">"#).count(), 2);
        let b = html.find(">B</p>").unwrap();
        let a = html.find(">A</p>").unwrap();
        assert!(b < a);
        assert!(html.contains("<p>second body</p><p>Warning</p><p>true</p>"));
        assert!(html.contains("<p>first body</p><p></p><p>true</p>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let records = vec![AlertRecord::new("Same", 1.0, true).with_alert_type("Info")];
        let options = RenderOptions::default();
        assert_eq!(render_markup(&records, &options), render_markup(&records, &options));
    }

    #[test]
    fn test_escapes_field_text() {
        let records = vec![AlertRecord::new("<script>alert('x')</script>", 1.0, true)
            .with_description("Fish & Chips \"today\"")];

        let html = render_markup(&records, &RenderOptions::default());

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("Fish &amp; Chips &quot;today&quot;"));
    }

    #[test]
    fn test_title_font_size_applied() {
        let records = vec![AlertRecord::new("Big", 1.0, true)];
        let options = RenderOptions {
            title_font_size: Some("24px".to_string()),
        };

        let html = render_markup(&records, &options);
        assert!(html.contains(r#"<p class="alert_title" style="font-size: 24px">Big</p>"#));
    }

    #[test]
    fn test_shell_markup() {
        assert_eq!(
            shell_markup(DEFAULT_CONTAINER_ID),
            r#"<section><div id="spListContainer"></div></section>"#
        );
    }
}
