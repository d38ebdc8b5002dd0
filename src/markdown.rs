//! Markdown body rendering for the detail modals.

use pulldown_cmark::{Options, Parser, html};

/// Convert a Markdown body to an HTML string. Tables and strikethrough are
/// enabled since the content files use them.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_paragraphs() {
        let html = to_html("# Title\n\nBody text.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Body text.</p>"));
    }

    #[test]
    fn renders_lists_and_emphasis() {
        let html = to_html("- one\n- *two*\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<em>two</em>"));
    }

    #[test]
    fn renders_tables() {
        let html = to_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(to_html(""), "");
    }
}
