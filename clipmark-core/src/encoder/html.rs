//! Interactive HTML encoder
//!
//! Renders one collapsible section per book. The markup carries each
//! section's [`SectionState`] so a host can render a view whose sections it
//! has already toggled; the embedded script only flips the same attributes
//! in the browser.

use crate::error::ConversionError;
use crate::types::{BookGroup, Highlight, Library};
use crate::view::{InteractiveView, SectionState};
use std::io::Write;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
.book-container { border: 1px solid #ddd; border-radius: 6px; margin-bottom: 0.75rem; }
.book-header { cursor: pointer; padding: 0.75rem 1rem; display: flex; justify-content: space-between; align-items: center; }
.book-header::after { content: "\25B8"; transition: transform 0.2s; }
.book-header.active::after { transform: rotate(90deg); }
.book-title { margin: 0; }
.book-author { margin: 0.25rem 0 0; font-weight: normal; color: #555; }
.clippings-list { padding: 0 1rem 0.5rem; }
.clipping-quote { border-left: 3px solid #aaa; margin: 0.75rem 0; padding-left: 0.75rem; }
.clipping-quote small { color: #777; }
"#;

const SCRIPT: &str = r#"
document.querySelectorAll('.book-header').forEach(function (header) {
  header.addEventListener('click', function () {
    var container = header.parentElement;
    var list = container.querySelector('.clippings-list');
    var expanded = container.getAttribute('data-state') === 'expanded';
    container.setAttribute('data-state', expanded ? 'collapsed' : 'expanded');
    header.classList.toggle('active', !expanded);
    list.hidden = expanded;
  });
});
"#;

const PAGE_TITLE: &str = "My Kindle Highlights";

/// Encoder for the expandable HTML view
#[derive(Debug, Clone, Copy)]
pub struct HtmlEncoder;

impl HtmlEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Render a complete HTML document for a view
    pub fn render_document(&self, view: &InteractiveView) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", PAGE_TITLE));
        html.push_str(&format!("<style>{}</style>\n", STYLE));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("<h1>{}</h1>\n", PAGE_TITLE));
        html.push_str(&self.render_fragment(view));
        html.push_str(&format!("<script>{}</script>\n", SCRIPT));
        html.push_str("</body>\n</html>\n");
        html
    }

    /// Stylesheet shared by every rendering of the view
    pub fn stylesheet(&self) -> &'static str {
        STYLE
    }

    /// Render only the container holding the sections
    pub fn render_fragment(&self, view: &InteractiveView) -> String {
        let mut html = String::from("<div id=\"html-output\">\n");
        for (index, (group, state)) in view.sections().enumerate() {
            html.push_str(&self.section_to_html(index, group, state));
        }
        html.push_str("</div>\n");
        html
    }

    fn section_to_html(&self, index: usize, group: &BookGroup, state: SectionState) -> String {
        let active = if state.is_expanded() { " active" } else { "" };
        let hidden = if state.is_expanded() { "" } else { " hidden" };

        let quotes: String = group
            .highlights
            .iter()
            .map(|h| self.highlight_to_html(h))
            .collect();

        format!(
            "<div class=\"book-container\" data-section=\"{index}\" data-state=\"{state}\">\n\
             <div class=\"book-header{active}\">\n\
             <div>\n\
             <h3 class=\"book-title\">{title}</h3>\n\
             <h4 class=\"book-author\">by {author}</h4>\n\
             </div>\n\
             </div>\n\
             <div class=\"clippings-list\"{hidden}>\n\
             {quotes}\
             </div>\n\
             </div>\n",
            state = state.as_str(),
            title = escape_html(&group.title),
            author = escape_html(&group.author),
        )
    }

    fn highlight_to_html(&self, highlight: &Highlight) -> String {
        let content = highlight
            .content
            .split('\n')
            .map(escape_html)
            .collect::<Vec<_>>()
            .join("<br>");
        format!(
            "<blockquote class=\"clipping-quote\"><p>{}</p><small>({})</small></blockquote>\n",
            content,
            escape_html(&highlight.meta_line)
        )
    }
}

impl Default for HtmlEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Encoder for HtmlEncoder {
    /// Encodes a fresh view, so every section starts collapsed
    fn encode(&self, library: &Library, writer: &mut dyn Write) -> Result<(), ConversionError> {
        let view = InteractiveView::new(library.clone());
        writer.write_all(self.render_document(&view).as_bytes())?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "HTML"
    }

    fn file_extension(&self) -> &str {
        "html"
    }

    fn mime_type(&self) -> &str {
        "text/html"
    }
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
