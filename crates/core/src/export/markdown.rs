use std::sync::LazyLock;

use regex::Regex;

use super::rules::{apply_rules, decode_entities, Rule};

/// Tag rewrites for Markdown output, applied before tag stripping.
static MARKDOWN_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Headings
        Rule::new(r"(?i)<h1[^>]*>(.*?)</h1>", "# ${1}\n\n"),
        Rule::new(r"(?i)<h2[^>]*>(.*?)</h2>", "## ${1}\n\n"),
        Rule::new(r"(?i)<h3[^>]*>(.*?)</h3>", "### ${1}\n\n"),
        Rule::new(r"(?i)<h4[^>]*>(.*?)</h4>", "#### ${1}\n\n"),
        Rule::new(r"(?i)<h5[^>]*>(.*?)</h5>", "##### ${1}\n\n"),
        Rule::new(r"(?i)<h6[^>]*>(.*?)</h6>", "###### ${1}\n\n"),
        // Bold
        Rule::new(r"(?i)<strong[^>]*>(.*?)</strong>", "**${1}**"),
        Rule::new(r"(?i)<b[^>]*>(.*?)</b>", "**${1}**"),
        // Italic
        Rule::new(r"(?i)<em[^>]*>(.*?)</em>", "*${1}*"),
        Rule::new(r"(?i)<i[^>]*>(.*?)</i>", "*${1}*"),
        // Markdown has no underline
        Rule::new(r"(?i)<u[^>]*>(.*?)</u>", "${1}"),
        Rule::new(
            r#"(?i)<a[^>]*href=["']([^"']*)["'][^>]*>(.*?)</a>"#,
            "[${2}](${1})",
        ),
        // Lists
        Rule::new(r"(?i)<ul[^>]*>", "\n"),
        Rule::new(r"(?i)</ul>", "\n"),
        Rule::new(r"(?i)<ol[^>]*>", "\n"),
        Rule::new(r"(?i)</ol>", "\n"),
        Rule::new(r"(?i)<li[^>]*>(.*?)</li>", "- ${1}\n"),
        // Blocks
        Rule::new(r"(?i)<p[^>]*>(.*?)</p>", "${1}\n\n"),
        Rule::new(r"(?i)<div[^>]*>(.*?)</div>", "${1}\n"),
        Rule::new(r"(?i)<br[^>]*>", "\n"),
        // Whatever is left
        Rule::new(r"<[^>]*>", ""),
    ]
});

static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static NAMED_ENTITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)&[a-z]+;").unwrap());

/// Converts rich-text HTML into Markdown.
///
/// Handles headings, bold, italic, underline, links, lists, paragraphs, and
/// line breaks. Any other tag is dropped, common entities are decoded, and
/// runs of three or more newlines collapse to a single blank line.
///
/// # Examples
///
/// ```
/// use noteboard_core::export::html_to_markdown;
///
/// let md = html_to_markdown("<h1>Title</h1><p>Hello <strong>world</strong></p>");
/// assert_eq!(md, "# Title\n\nHello **world**");
/// ```
pub fn html_to_markdown(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let text = apply_rules(html, &MARKDOWN_RULES);
    let text = decode_entities(&text);
    EXCESS_NEWLINES
        .replace_all(&text, "\n\n")
        .trim()
        .to_string()
}

/// Plain-text preview of note HTML, at most `max_chars` characters before the `...` suffix.
pub fn html_preview(html: &str, max_chars: usize) -> String {
    let text = ANY_TAG.replace_all(html, "");
    let text = text.replace("&nbsp;", " ");
    let text = NAMED_ENTITY.replace_all(&text, "");
    let text = text.trim();

    if text.chars().count() > max_chars {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_then_paragraph() {
        let md = html_to_markdown("<h1>Title</h1><p>Hello <strong>world</strong></p>");
        assert!(md.starts_with("# Title\n\n"));
        assert_eq!(md, "# Title\n\nHello **world**");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(html_to_markdown(""), "");
    }

    #[test]
    fn test_all_heading_levels() {
        let md = html_to_markdown("<h2>B</h2><h3>C</h3><h6 class=\"x\">F</h6>");
        assert_eq!(md, "## B\n\n### C\n\n###### F");
    }

    #[test]
    fn test_inline_styles() {
        let md = html_to_markdown("<p><b>bold</b> <em>em</em> <i>it</i> <u>under</u></p>");
        assert_eq!(md, "**bold** *em* *it* under");
    }

    #[test]
    fn test_tags_are_case_insensitive() {
        assert_eq!(html_to_markdown("<STRONG>loud</STRONG>"), "**loud**");
    }

    #[test]
    fn test_links() {
        let md = html_to_markdown(r#"<p>See <a href="https://example.com" target="_blank">docs</a></p>"#);
        assert_eq!(md, "See [docs](https://example.com)");

        let single_quoted = html_to_markdown("<a href='/x'>x</a>");
        assert_eq!(single_quoted, "[x](/x)");
    }

    #[test]
    fn test_lists() {
        let md = html_to_markdown("<ul><li>one</li><li>two</li></ul><ol><li>three</li></ol>");
        assert_eq!(md, "- one\n- two\n\n- three");
    }

    #[test]
    fn test_line_breaks_and_divs() {
        let md = html_to_markdown("<div>first</div><div>second<br>third</div>");
        assert_eq!(md, "first\nsecond\nthird");
    }

    #[test]
    fn test_unknown_tags_are_stripped() {
        let md = html_to_markdown("<p><span style=\"color: red\">red</span> text</p>");
        assert_eq!(md, "red text");
    }

    #[test]
    fn test_entities_decoded_after_stripping() {
        // An escaped tag survives stripping and is decoded into literal text.
        let md = html_to_markdown("<p>a &lt;b&gt; &amp; &quot;c&quot; it&#39;s&nbsp;ok</p>");
        assert_eq!(md, "a <b> & \"c\" it's ok");
    }

    #[test]
    fn test_newline_runs_collapse() {
        let md = html_to_markdown("<p>a</p><p></p><p></p><p>b</p>");
        assert_eq!(md, "a\n\nb");
    }

    #[test]
    fn test_output_is_trimmed() {
        assert_eq!(html_to_markdown("<p>  padded  </p>"), "padded");
    }

    #[test]
    fn test_deterministic() {
        let html = "<h2>Plan</h2><ul><li><strong>ship</strong></li></ul>";
        assert_eq!(html_to_markdown(html), html_to_markdown(html));
    }

    #[test]
    fn test_preview_strips_markup() {
        assert_eq!(
            html_preview("<p>Hello&nbsp;<b>there</b> &copy;</p>", 100),
            "Hello there"
        );
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(html_preview("<p>abcdef</p>", 3), "abc...");
        assert_eq!(html_preview("<p>abc</p>", 3), "abc");
    }
}
