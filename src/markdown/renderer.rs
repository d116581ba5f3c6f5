//! Markdown to HTML Rendering
//!
//! This module converts markdown text into an HTML fragment using a fixed,
//! ordered pipeline of global pattern rewrites over the whole string. There is
//! no tokenizer and no document tree: each pass sees the output of the
//! previous one.
//!
//! # Pass Order
//! 1. Fenced code blocks
//! 2. Headings (`###`, `##`, `#`)
//! 3. Bold, 4. Italic, 5. Strikethrough
//! 6. Links, 7. Images, 8. Inline code
//! 9. Blockquotes, 10. Unordered list items, 11. Ordered list items
//! 12. Horizontal rules, 13. Paragraphs and line breaks
//!
//! The output keeps the structural quirks of this approach: every quoted line
//! is its own `<blockquote>`, ordered items stay bare `<li>` elements, only the
//! first run of unordered items is wrapped in `<ul>`, and everything ends up
//! inside one outer `<p>`.
//!
//! # Usage
//! ```ignore
//! use crate::markdown::render;
//!
//! assert_eq!(render("**a**"), "<p><strong>a</strong></p>");
//! ```

use log::debug;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

// ─────────────────────────────────────────────────────────────────────────────
// Pass Table
// ─────────────────────────────────────────────────────────────────────────────

/// Compiled patterns for every rewrite pass.
struct Passes {
    code_block: Regex,
    h3: Regex,
    h2: Regex,
    h1: Regex,
    bold_stars: Regex,
    bold_underscores: Regex,
    italic_star: Regex,
    italic_underscore: Regex,
    strikethrough: Regex,
    link: Regex,
    image: Regex,
    inline_code: Regex,
    blockquote: Regex,
    unordered_item: Regex,
    unordered_run: Regex,
    ordered_item: Regex,
    horizontal_rule: Regex,
}

impl Passes {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            code_block: Regex::new(r"(?s)```([0-9A-Za-z_]+)?\n(.*?)```")?,
            h3: Regex::new(r"(?mR)^### (.*)$")?,
            h2: Regex::new(r"(?mR)^## (.*)$")?,
            h1: Regex::new(r"(?mR)^# (.*)$")?,
            bold_stars: Regex::new(r"(?R)\*\*(.*?)\*\*")?,
            bold_underscores: Regex::new(r"(?R)__(.*?)__")?,
            italic_star: Regex::new(r"(?R)\*(.*?)\*")?,
            italic_underscore: Regex::new(r"(?R)_(.*?)_")?,
            strikethrough: Regex::new(r"(?R)~~(.*?)~~")?,
            link: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)")?,
            image: Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)")?,
            inline_code: Regex::new(r"`([^`]+)`")?,
            blockquote: Regex::new(r"(?mR)^> (.*)$")?,
            unordered_item: Regex::new(r"(?mR)^- (.*)$")?,
            unordered_run: Regex::new(r"(?mR)^<li>.*</li>$(?:\r?\n<li>.*</li>$)*")?,
            ordered_item: Regex::new(r"(?mR)^[0-9]+\. (.*)$")?,
            horizontal_rule: Regex::new(r"(?mR)^---$")?,
        })
    }
}

/// Get the shared pass table, compiling it on first use.
///
/// Returns `None` only if a built-in pattern fails to compile, which the
/// tests rule out; `render` then degrades to a plain paragraph wrap.
fn passes() -> Option<&'static Passes> {
    static PASSES: OnceLock<Option<Passes>> = OnceLock::new();
    PASSES
        .get_or_init(|| match Passes::new() {
            Ok(passes) => Some(passes),
            Err(e) => {
                log::error!("Failed to compile markdown passes: {}", e);
                None
            }
        })
        .as_ref()
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Render markdown text to an HTML fragment.
///
/// Total for every input: text that no pass matches is carried through
/// unchanged. The result always starts with `<p>` and ends with `</p>`.
/// Rendering the output a second time is not meaningful.
pub fn render(markdown: &str) -> String {
    let Some(p) = passes() else {
        return wrap_paragraphs(markdown);
    };

    let mut html = markdown.to_string();

    // Code blocks: language tag is captured and dropped
    html = replace(&p.code_block, &html, |caps: &Captures| {
        format!("<pre><code>{}</code></pre>", escape_code(&caps[2]))
    });

    // Headers, longest marker first
    html = replace(&p.h3, &html, "<h3>${1}</h3>");
    html = replace(&p.h2, &html, "<h2>${1}</h2>");
    html = replace(&p.h1, &html, "<h1>${1}</h1>");

    // Bold before italic so `**` pairs are gone when `*` is matched
    html = replace(&p.bold_stars, &html, "<strong>${1}</strong>");
    html = replace(&p.bold_underscores, &html, "<strong>${1}</strong>");

    // An empty pair such as a stray `**` stays literal and the scan moves past it
    html = replace(&p.italic_star, &html, non_empty("em"));
    html = replace(&p.italic_underscore, &html, non_empty("em"));

    html = replace(&p.strikethrough, &html, "<del>${1}</del>");

    // Links skip `![..](..)` so the image pass still sees it
    let source = html;
    html = replace(&p.link, &source, |caps: &Captures| {
        let whole = caps.get(0).map_or("", |m| m.as_str());
        let start = caps.get(0).map_or(0, |m| m.start());
        if source[..start].ends_with('!') {
            whole.to_string()
        } else {
            format!("<a href=\"{}\" target=\"_blank\">{}</a>", &caps[2], &caps[1])
        }
    });

    html = replace(&p.image, &html, "<img src=\"${2}\" alt=\"${1}\">");

    html = replace(&p.inline_code, &html, "<code>${1}</code>");

    // One blockquote per line, never merged
    html = replace(&p.blockquote, &html, "<blockquote>${1}</blockquote>");

    html = replace(&p.unordered_item, &html, "<li>${1}</li>");
    html = p
        .unordered_run
        .replace(&html, "<ul>${0}</ul>")
        .into_owned();

    // Ordered items get no container
    html = replace(&p.ordered_item, &html, "<li>${1}</li>");

    html = replace(&p.horizontal_rule, &html, "<hr>");

    let rendered = wrap_paragraphs(&html);
    debug!(
        "Rendered {} bytes of markdown into {} bytes of HTML",
        markdown.len(),
        rendered.len()
    );
    rendered
}

/// Apply a pass globally and take ownership of the result.
fn replace<R: regex::Replacer>(re: &Regex, text: &str, rep: R) -> String {
    match re.replace_all(text, rep) {
        Cow::Borrowed(unchanged) => unchanged.to_string(),
        Cow::Owned(changed) => changed,
    }
}

/// Wrap the first capture in `tag`, leaving the match as-is when it is empty.
fn non_empty(tag: &'static str) -> impl FnMut(&Captures) -> String {
    move |caps: &Captures| {
        if caps[1].is_empty() {
            caps[0].to_string()
        } else {
            format!("<{tag}>{}</{tag}>", &caps[1])
        }
    }
}

/// Turn blank lines into paragraph boundaries, remaining newlines into
/// `<br>`, and wrap everything in a single paragraph.
fn wrap_paragraphs(html: &str) -> String {
    let html = html.replace("\n\n", "</p><p>").replace('\n', "<br>");
    format!("<p>{}</p>", html)
}

/// Escape the characters that would let code block content inject markup.
fn escape_code(code: &str) -> String {
    code.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_compile() {
        assert!(Passes::new().is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "<p></p>");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(render("just text"), "<p>just text</p>");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Block Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_heading_nested_in_paragraph() {
        assert_eq!(render("# Title"), "<p><h1>Title</h1></p>");
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            render("### Three\n## Two\n# One"),
            "<p><h3>Three</h3><br><h2>Two</h2><br><h1>One</h1></p>"
        );
    }

    #[test]
    fn test_heading_requires_space() {
        assert_eq!(render("#NoSpace"), "<p>#NoSpace</p>");
    }

    #[test]
    fn test_four_hashes_not_a_heading_level() {
        // `###` needs a space after it, so `####` is not matched as h3
        assert_eq!(render("#### Deep"), "<p>#### Deep</p>");
    }

    #[test]
    fn test_code_block_drops_language_and_escapes() {
        let html = render("```rust\nlet a = 1 < 2 && b;\n```");
        assert_eq!(
            html,
            "<p><pre><code>let a = 1 &lt; 2 &amp;&amp; b;<br></code></pre></p>"
        );
    }

    #[test]
    fn test_code_block_without_language() {
        let html = render("```\n<b>\n```");
        assert!(html.contains("<pre><code>&lt;b&gt;<br></code></pre>"));
    }

    #[test]
    fn test_unterminated_fence_degrades() {
        let html = render("```\nopen");
        assert!(!html.contains("<pre>"));
        assert!(html.starts_with("<p>") && html.ends_with("</p>"));
    }

    #[test]
    fn test_consecutive_quotes_stay_separate() {
        assert_eq!(
            render("> one\n> two"),
            "<p><blockquote>one</blockquote><br><blockquote>two</blockquote></p>"
        );
    }

    #[test]
    fn test_unordered_list_wrapped() {
        assert_eq!(
            render("- a\n- b"),
            "<p><ul><li>a</li><br><li>b</li></ul></p>"
        );
    }

    #[test]
    fn test_only_first_unordered_run_wrapped() {
        let html = render("- a\n- b\n\ntext\n\n- c");
        assert_eq!(
            html,
            "<p><ul><li>a</li><br><li>b</li></ul></p><p>text</p><p><li>c</li></p>"
        );
        assert_eq!(html.matches("<ul>").count(), 1);
    }

    #[test]
    fn test_ordered_items_not_wrapped() {
        let html = render("1. first\n2. second");
        assert_eq!(html, "<p><li>first</li><br><li>second</li></p>");
        assert!(!html.contains("<ol>"));
    }

    #[test]
    fn test_ordered_items_after_unordered_run_stay_outside() {
        let html = render("- a\n\n1. b");
        assert_eq!(html, "<p><ul><li>a</li></ul></p><p><li>b</li></p>");
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(render("a\n\n---\n\nb"), "<p>a</p><p><hr></p><p>b</p>");
    }

    #[test]
    fn test_horizontal_rule_must_be_whole_line() {
        assert_eq!(render("--- x"), "<p>--- x</p>");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inline Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_bold() {
        assert_eq!(render("**a**"), "<p><strong>a</strong></p>");
        assert_eq!(render("__a__"), "<p><strong>a</strong></p>");
    }

    #[test]
    fn test_italic() {
        assert_eq!(render("*a*"), "<p><em>a</em></p>");
        assert_eq!(render("_a_"), "<p><em>a</em></p>");
    }

    #[test]
    fn test_bold_consumed_before_italic() {
        assert_eq!(
            render("**b** and *i*"),
            "<p><strong>b</strong> and <em>i</em></p>"
        );
    }

    #[test]
    fn test_shortest_pairs_consumed_left_to_right() {
        assert_eq!(
            render("**a** x **b**"),
            "<p><strong>a</strong> x <strong>b</strong></p>"
        );
        assert_eq!(render("*a*b*c*"), "<p><em>a</em>b<em>c</em></p>");
    }

    #[test]
    fn test_lone_delimiters_left_literal() {
        assert_eq!(render("a ** b"), "<p>a ** b</p>");
        assert_eq!(render("~~x"), "<p>~~x</p>");
    }

    #[test]
    fn test_lone_delimiters_before_later_emphasis() {
        assert_eq!(render("a ** b *c*"), "<p>a ** b <em>c</em></p>");
        assert_eq!(
            render("snake__case and _x_"),
            "<p>snake__case and <em>x</em></p>"
        );
    }

    #[test]
    fn test_emphasis_does_not_cross_lines() {
        assert_eq!(render("*a\nb*"), "<p>*a<br>b*</p>");
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(render("~~gone~~"), "<p><del>gone</del></p>");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            render("[site](https://example.com)"),
            "<p><a href=\"https://example.com\" target=\"_blank\">site</a></p>"
        );
    }

    #[test]
    fn test_image_not_swallowed_by_link() {
        assert_eq!(
            render("![logo](logo.png)"),
            "<p><img src=\"logo.png\" alt=\"logo\"></p>"
        );
    }

    #[test]
    fn test_image_with_empty_alt() {
        assert_eq!(render("![](a.png)"), "<p><img src=\"a.png\" alt=\"\"></p>");
    }

    #[test]
    fn test_link_and_image_on_one_line() {
        assert_eq!(
            render("[a](x) ![b](y)"),
            "<p><a href=\"x\" target=\"_blank\">a</a> <img src=\"y\" alt=\"b\"></p>"
        );
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(render("use `cargo`"), "<p>use <code>cargo</code></p>");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Paragraph Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_paragraphs_and_breaks() {
        assert_eq!(render("a\nb\n\nc"), "<p>a<br>b</p><p>c</p>");
    }

    #[test]
    fn test_crlf_line_endings_stay_outside_elements() {
        assert_eq!(render("# Title\r\nbody"), "<p><h1>Title</h1>\r<br>body</p>");
        assert_eq!(
            render("> quote\r\n- item"),
            "<p><blockquote>quote</blockquote>\r<br><ul><li>item</li></ul></p>"
        );
    }

    #[test]
    fn test_crlf_unordered_run_wrapped_once() {
        assert_eq!(
            render("- a\r\n- b"),
            "<p><ul><li>a</li>\r<br><li>b</li></ul></p>"
        );
    }

    #[test]
    fn test_emphasis_does_not_cross_carriage_return() {
        assert_eq!(render("*a\rb*"), "<p>*a\rb*</p>");
    }

    #[test]
    fn test_three_newlines() {
        assert_eq!(render("a\n\n\nb"), "<p>a</p><p><br>b</p>");
    }

    #[test]
    fn test_dollar_signs_kept_literal() {
        assert_eq!(render("# $1 cost"), "<p><h1>$1 cost</h1></p>");
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(render("**æøå** 中文"), "<p><strong>æøå</strong> 中文</p>");
    }

    mod properties {
        use super::super::render;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn render_always_wrapped_in_paragraph(input in ".{0,200}") {
                let html = render(&input);
                prop_assert!(html.starts_with("<p>"));
                prop_assert!(html.ends_with("</p>"));
            }

            #[test]
            fn render_markdown_alphabet_is_wrapped(input in "[-#*_~`>\\[\\]()!0-9. a\n]{0,120}") {
                let html = render(&input);
                prop_assert!(html.starts_with("<p>"));
                prop_assert!(html.ends_with("</p>"));
                prop_assert!(!html.contains('\n'));
            }
        }
    }
}
