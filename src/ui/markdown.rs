//! Markdown rendering for AI-written text (forecasts, pricing strategies,
//! insights, stylist replies).
//!
//! Uses pulldown-cmark and emits HTML with `md-*` classes. Raw HTML coming from
//! the model is escaped, never passed through.

use leptos::prelude::*;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Render markdown content as HTML
#[component]
pub fn Markdown(
    /// The markdown content to render
    #[prop(into)]
    content: String,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let html = parse_markdown(&content);

    view! { <div class=format!("markdown {}", class) inner_html=html/> }
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    // Model output often starts at `#`; shift everything down two levels so
    // it never competes with page headings.
    match level {
        HeadingLevel::H1 => "h3",
        HeadingLevel::H2 => "h4",
        HeadingLevel::H3 => "h5",
        _ => "h6",
    }
}

/// Parse markdown string to HTML
pub fn parse_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let mut html = String::with_capacity(content.len() * 3 / 2);
    let mut in_code_block = false;
    let mut code = String::new();

    for event in Parser::new_ext(content, options) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => html.push_str("<p class=\"md-p\">"),
                Tag::Heading { level, .. } => {
                    html.push_str(&format!("<{} class=\"md-heading\">", heading_tag(level)));
                }
                Tag::BlockQuote(_) => html.push_str("<blockquote class=\"md-quote\">"),
                Tag::CodeBlock(_) => {
                    in_code_block = true;
                    code.clear();
                }
                Tag::List(Some(start)) if start != 1 => {
                    html.push_str(&format!("<ol class=\"md-list\" start=\"{}\">", start));
                }
                Tag::List(Some(_)) => html.push_str("<ol class=\"md-list\">"),
                Tag::List(None) => html.push_str("<ul class=\"md-list\">"),
                Tag::Item => html.push_str("<li>"),
                Tag::Emphasis => html.push_str("<em>"),
                Tag::Strong => html.push_str("<strong>"),
                Tag::Strikethrough => html.push_str("<del>"),
                Tag::Link { dest_url, .. } => {
                    html.push_str(&format!(
                        "<a href=\"{}\" class=\"md-link\" target=\"_blank\" rel=\"noopener noreferrer\">",
                        escape_html(&dest_url)
                    ));
                }
                Tag::Image { dest_url, .. } => {
                    html.push_str(&format!(
                        "<img class=\"md-img\" src=\"{}\" alt=\"",
                        escape_html(&dest_url)
                    ));
                }
                Tag::Table(_) => html.push_str("<div class=\"md-table-wrap\"><table class=\"md-table\">"),
                Tag::TableHead => html.push_str("<thead>"),
                Tag::TableRow => html.push_str("<tr>"),
                Tag::TableCell => html.push_str("<td>"),
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph => html.push_str("</p>"),
                TagEnd::Heading(level) => {
                    html.push_str(&format!("</{}>", heading_tag(level)));
                }
                TagEnd::BlockQuote(_) => html.push_str("</blockquote>"),
                TagEnd::CodeBlock => {
                    in_code_block = false;
                    html.push_str(&format!(
                        "<pre class=\"md-pre\"><code>{}</code></pre>",
                        escape_html(&code)
                    ));
                }
                TagEnd::List(true) => html.push_str("</ol>"),
                TagEnd::List(false) => html.push_str("</ul>"),
                TagEnd::Item => html.push_str("</li>"),
                TagEnd::Emphasis => html.push_str("</em>"),
                TagEnd::Strong => html.push_str("</strong>"),
                TagEnd::Strikethrough => html.push_str("</del>"),
                TagEnd::Link => html.push_str("</a>"),
                TagEnd::Image => html.push_str("\" />"),
                TagEnd::Table => html.push_str("</tbody></table></div>"),
                TagEnd::TableHead => html.push_str("</thead><tbody>"),
                TagEnd::TableRow => html.push_str("</tr>"),
                TagEnd::TableCell => html.push_str("</td>"),
                _ => {}
            },
            Event::Text(text) => {
                if in_code_block {
                    code.push_str(&text);
                } else {
                    html.push_str(&escape_html(&text));
                }
            }
            Event::Code(inline) => {
                html.push_str(&format!(
                    "<code class=\"md-code\">{}</code>",
                    escape_html(&inline)
                ));
            }
            Event::Html(raw) | Event::InlineHtml(raw) => html.push_str(&escape_html(&raw)),
            Event::SoftBreak => html.push(' '),
            Event::HardBreak => html.push_str("<br />"),
            Event::Rule => html.push_str("<hr class=\"md-rule\" />"),
            _ => {}
        }
    }

    html
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_and_emphasis() {
        let html = parse_markdown("Pair **linen** with *jute* sandals");
        assert!(html.starts_with("<p class=\"md-p\">"));
        assert!(html.contains("<strong>linen</strong>"));
        assert!(html.contains("<em>jute</em>"));
    }

    #[test]
    fn test_headings_are_demoted() {
        let html = parse_markdown("# Forecast\n\n## Colors");
        assert!(html.contains("<h3 class=\"md-heading\">Forecast</h3>"));
        assert!(html.contains("<h4 class=\"md-heading\">Colors</h4>"));
        assert!(!html.contains("<h1"));
    }

    #[test]
    fn test_lists() {
        let html = parse_markdown("- Cargo pants\n- Bucket hats");
        assert!(html.contains("<ul class=\"md-list\"><li>Cargo pants</li>"));

        let html = parse_markdown("3. Third\n4. Fourth");
        assert!(html.contains("start=\"3\""));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("Nice <script>alert('x')</script> palette");
        assert!(!html.contains("<script"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_link_opens_new_tab() {
        let html = parse_markdown("[Lookbook](https://example.com/a?b=1&c=2)");
        assert!(html.contains("href=\"https://example.com/a?b=1&amp;c=2\""));
        assert!(html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_table() {
        let html = parse_markdown("| Tier | Price |\n|---|---|\n| Budget | ₹499 |");
        assert!(html.contains("<table class=\"md-table\"><thead>"));
        assert!(html.contains("<td>₹499</td>"));
        assert!(html.ends_with("</tbody></table></div>"));
    }

    #[test]
    fn test_code_block_is_escaped() {
        let html = parse_markdown("```\n<b>x</b>\n```");
        assert!(html.contains("<pre class=\"md-pre\"><code>&lt;b&gt;x&lt;/b&gt;"));
    }
}
