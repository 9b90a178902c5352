//! Markdown Rendering
//!
//! pulldown-cmark for task notes and project descriptions. Raw HTML from
//! user content is escaped rather than passed through.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(CowStr::from(raw.into_string())),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = parse_markdown("# Notes\n\n- [x] done\n- ~~old~~");
        assert!(html.contains("<h1>Notes</h1>"));
        assert!(html.contains("checkbox"));
        assert!(html.contains("<del>old</del>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
