use chrono::{DateTime, Utc};

use crate::note::Note;

use super::markdown::html_to_markdown;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Renders a collection of notes as one Markdown document.
///
/// `exported_at` is passed in rather than read from the clock so the output
/// is reproducible.
pub fn export_markdown_document(notes: &[Note], exported_at: DateTime<Utc>) -> String {
    let mut markdown = String::from("# Noteboard Export\n\n");
    markdown.push_str(&format!(
        "Exported on: {}\n\n",
        exported_at.format(DISPLAY_FORMAT)
    ));
    markdown.push_str(&format!("Total notes: {}\n\n", notes.len()));
    markdown.push_str("---\n\n");

    for note in notes {
        markdown.push_str(&format!("## {}\n\n", note.title));
        push_dates(&mut markdown, note);
        markdown.push_str(&format!("{}\n\n", html_to_markdown(&note.content)));
        markdown.push_str("---\n\n");
    }

    markdown
}

/// Renders a single note as a standalone Markdown document.
pub fn note_to_markdown(note: &Note) -> String {
    let mut markdown = format!("# {}\n\n", note.title);
    push_dates(&mut markdown, note);
    markdown.push_str(&html_to_markdown(&note.content));
    markdown.push('\n');
    markdown
}

/// File name for a full export taken at `exported_at`.
pub fn export_file_name(exported_at: DateTime<Utc>) -> String {
    format!("noteboard-export-{}.md", exported_at.format("%Y-%m-%d"))
}

/// File name for a single-note download, derived from the title.
///
/// Falls back to `note-{id}.md` when the title has no ASCII letters or digits.
pub fn note_file_name(note: &Note) -> String {
    let slug = note
        .title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        format!("note-{}.md", note.id)
    } else {
        format!("{slug}.md")
    }
}

fn push_dates(markdown: &mut String, note: &Note) {
    markdown.push_str(&format!(
        "*Created: {}*\n",
        note.created_at.format(DISPLAY_FORMAT)
    ));
    markdown.push_str(&format!(
        "*Last updated: {}*\n\n",
        note.updated_at.format(DISPLAY_FORMAT)
    ));
}
