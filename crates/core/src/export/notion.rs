use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::rules::{apply_rules, decode_entities, Rule};

/// Text of the single block produced for a note with no visible text.
pub const EMPTY_NOTE_PLACEHOLDER: &str = "Empty note";

/// Longest text Notion accepts in a single rich-text object.
pub const MAX_TEXT_LENGTH: usize = 2000;

static NOTION_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(r"(?i)<h[1-6][^>]*>(.*?)</h[1-6]>", "${1}\n\n"),
        Rule::new(r"(?i)<p[^>]*>(.*?)</p>", "${1}\n\n"),
        Rule::new(r"(?i)<div[^>]*>(.*?)</div>", "${1}\n"),
        Rule::new(r"(?i)<br[^>]*>", "\n"),
        Rule::new(r"(?i)<li[^>]*>(.*?)</li>", "• ${1}\n"),
        Rule::new(r"<[^>]*>", ""),
    ]
});

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// A Notion paragraph block, serialized in the shape the pages API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotionBlock {
    pub object: String,
    #[serde(rename = "type")]
    pub block_type: String,
    pub paragraph: Paragraph,
}

/// Body of a paragraph block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub rich_text: Vec<RichText>,
}

/// A plain-text rich-text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(rename = "type")]
    pub text_type: String,
    pub text: TextContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

impl NotionBlock {
    /// Builds a paragraph block, splitting text longer than [`MAX_TEXT_LENGTH`]
    /// characters across several rich-text runs.
    pub fn paragraph(text: impl Into<String>) -> Self {
        let text = text.into();
        let chars: Vec<char> = text.chars().collect();
        let rich_text = if chars.is_empty() {
            vec![RichText::plain(String::new())]
        } else {
            chars
                .chunks(MAX_TEXT_LENGTH)
                .map(|chunk| RichText::plain(chunk.iter().collect()))
                .collect()
        };

        Self {
            object: "block".to_string(),
            block_type: "paragraph".to_string(),
            paragraph: Paragraph { rich_text },
        }
    }

    /// The block's text with all rich-text runs joined.
    pub fn plain_text(&self) -> String {
        self.paragraph
            .rich_text
            .iter()
            .map(|run| run.text.content.as_str())
            .collect()
    }
}

impl RichText {
    fn plain(content: String) -> Self {
        Self {
            text_type: "text".to_string(),
            text: TextContent { content },
        }
    }
}

/// Converts note HTML into Notion paragraph blocks.
///
/// Markup is flattened to plain text, then split on blank lines; every
/// non-empty chunk becomes one paragraph. Input with no visible text yields
/// exactly one [`EMPTY_NOTE_PLACEHOLDER`] block.
pub fn html_to_notion_blocks(html: &str) -> Vec<NotionBlock> {
    let text = apply_rules(html, &NOTION_RULES);
    let text = decode_entities(&text);
    let text = text.trim();

    let blocks: Vec<NotionBlock> = PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(NotionBlock::paragraph)
        .collect();

    if blocks.is_empty() {
        vec![NotionBlock::paragraph(EMPTY_NOTE_PLACEHOLDER)]
    } else {
        blocks
    }
}
