//! Markdown to HTML rendering.
//!
//! Uses `pulldown-cmark` with the GitHub-flavored extensions content authors
//! rely on: tables, footnotes, strikethrough and task lists. Inline HTML in
//! the source is passed through as-is.

use pulldown_cmark::{html, Options, Parser};

/// Parser options for document bodies.
pub fn gfm_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Render a markdown body to an HTML fragment.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, gfm_options());
    let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_headings_and_paragraphs() {
        let html = render_html("# Sacred Title\n\nA paragraph.\n");
        assert!(html.contains("<h1>Sacred Title</h1>"));
        assert!(html.contains("<p>A paragraph.</p>"));
    }

    #[test]
    fn test_render_lists() {
        let html = render_html("- one\n- two\n\n1. first\n2. second\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<ol>"));
    }

    #[test]
    fn test_render_code_fence() {
        let html = render_html("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre><code class=\"language-rust\">"));
        assert!(html.contains("fn main() {}"));
    }

    #[test]
    fn test_render_table() {
        let html = render_html("| Role | Aura |\n|------|------|\n| Fate Master | purple |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>Role</th>"));
        assert!(html.contains("<td>Fate Master</td>"));
    }

    #[test]
    fn test_render_strikethrough_and_tasks() {
        let html = render_html("~~waterfall~~\n\n- [x] burn sage\n- [ ] deploy\n");
        assert!(html.contains("<del>waterfall</del>"));
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn test_render_passes_inline_html() {
        let html = render_html("<div class=\"aura\">glow</div>\n");
        assert!(html.contains("<div class=\"aura\">glow</div>"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_html(""), "");
    }
}
