//! Markdown encoder

use crate::error::ConversionError;
use crate::types::{BookGroup, Highlight, Library};
use std::io::Write;

/// Heading at the top of every rendered document
pub const DOCUMENT_HEADING: &str = "# My Kindle Highlights";

/// Encoder for the grouped Markdown document
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownEncoder;

impl MarkdownEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole library
    pub fn render(&self, library: &Library) -> String {
        let mut out = format!("{}\n\n", DOCUMENT_HEADING);
        for group in library.groups() {
            self.push_group(&mut out, group);
        }
        out
    }

    fn push_group(&self, out: &mut String, group: &BookGroup) {
        out.push_str(&format!("## {}\n", group.title));
        out.push_str(&format!("### by {}\n\n", group.author));
        for highlight in &group.highlights {
            self.push_highlight(out, highlight);
        }
        // Every group is closed, the last one included
        out.push_str("----\n\n");
    }

    fn push_highlight(&self, out: &mut String, highlight: &Highlight) {
        out.push_str(&format!("> {}\n", highlight.content.replace('\n', "\n> ")));
        out.push_str(&format!("> ({})\n\n", highlight.meta_line));
    }
}

impl super::Encoder for MarkdownEncoder {
    fn encode(&self, library: &Library, writer: &mut dyn Write) -> Result<(), ConversionError> {
        writer.write_all(self.render(library).as_bytes())?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "Markdown"
    }

    fn file_extension(&self) -> &str {
        "md"
    }

    fn mime_type(&self) -> &str {
        "text/markdown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_library() {
        let md = MarkdownEncoder::new().render(&Library::new());
        assert_eq!(md, "# My Kindle Highlights\n\n");
    }

    #[test]
    fn test_render_group() {
        let library = Library::from_highlights(vec![Highlight::new("Dune", "1-2", "Fear is\nthe mind-killer")
            .with_author("Frank Herbert")
            .with_meta_line("Your Highlight at location 1-2")]);

        let md = MarkdownEncoder::new().render(&library);

        assert_eq!(
            md,
            "# My Kindle Highlights\n\n\
             ## Dune\n\
             ### by Frank Herbert\n\n\
             > Fear is\n\
             > the mind-killer\n\
             > (Your Highlight at location 1-2)\n\n\
             ----\n\n"
        );
    }

    #[test]
    fn test_separator_after_every_group() {
        let library = Library::from_highlights(vec![
            Highlight::new("A", "1-2", "x"),
            Highlight::new("B", "1-2", "y"),
        ]);
        let md = MarkdownEncoder::new().render(&library);
        assert_eq!(md.matches("----\n").count(), 2);
        assert!(md.ends_with("----\n\n"));
    }
}
