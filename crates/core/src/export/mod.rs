//! Pure conversions from stored note HTML to export formats.
//!
//! Both converters are ordered chains of regex rewrites. The order is part of
//! the output format: headings run before inline styles, inline styles before
//! structural tags, structural tags before tag stripping, tag stripping before
//! entity decoding, and entity decoding before whitespace cleanup.

mod document;
mod markdown;
mod notion;
mod rules;

pub use document::{export_file_name, export_markdown_document, note_file_name, note_to_markdown};
pub use markdown::{html_preview, html_to_markdown};
pub use notion::{html_to_notion_blocks, NotionBlock, EMPTY_NOTE_PLACEHOLDER, MAX_TEXT_LENGTH};
