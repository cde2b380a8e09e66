//! Comment note creation
//!
//! Turns the current selection into a markdown link pointing at a new
//! timestamped note that quotes the selected text.

use std::path::Path;

use chrono::{DateTime, Local};

use super::config::CommentSettings;
use super::document::Document;
use super::file_system::{self, NoteCreateError};

/// Everything produced by one invocation of the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLink {
    /// The text that was selected when the command ran
    pub selected_text: String,
    /// Vault-relative path of the comment note
    pub target_path: String,
    /// Replacement text inserted into the document
    pub link_markdown: String,
    /// Content written to the comment note
    pub note_body: String,
}

impl CommentLink {
    /// Compose the link for a selection, storage folder, and invocation time.
    /// Note paths carry a minute-resolution timestamp, so two invocations
    /// within the same minute target the same file.
    pub fn compose(selection: &str, location: &str, at: DateTime<Local>) -> Self {
        let target_path = format!("{}/{}.md", location, at.format("%Y%m%d%H%M"));
        let link_markdown = format!("[{}](<{}>)", selection, target_path);
        let note_body = format!(">{}\n", selection);

        Self {
            selected_text: selection.to_string(),
            target_path,
            link_markdown,
            note_body,
        }
    }
}

/// Run the comment note command against `doc`.
///
/// Replaces the document's selection with the link, then creates the note
/// under `vault_root`. There is no rollback: if the note cannot be created
/// the document keeps the link and the error is returned to the caller.
pub fn create_comment_note(
    doc: &mut Document,
    vault_root: &Path,
    settings: &CommentSettings,
    at: DateTime<Local>,
) -> Result<CommentLink, NoteCreateError> {
    let selection = doc.selection_text().to_string();
    let link = CommentLink::compose(&selection, &settings.comment_location, at);

    doc.replace_selection(&link.link_markdown);
    file_system::create_note(&vault_root.join(&link.target_path), &link.note_body)?;

    Ok(link)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use chrono::TimeZone;

    fn at_2024_03_05_10_15() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 10, 15, 0).unwrap()
    }

    fn doc_with_selection(content: &str, chars: std::ops::Range<usize>) -> Document {
        let mut doc = Document::new(PathBuf::from("note.md"));
        doc.content = content.to_string();
        doc.set_selection_chars(chars);
        doc
    }

    #[test]
    fn test_compose_worked_example() {
        let link = CommentLink::compose("TODO: revisit", "comments", at_2024_03_05_10_15());

        assert_eq!(link.selected_text, "TODO: revisit");
        assert_eq!(link.target_path, "comments/202403051015.md");
        assert_eq!(
            link.link_markdown,
            "[TODO: revisit](<comments/202403051015.md>)"
        );
        assert_eq!(link.note_body, ">TODO: revisit\n");
    }

    #[test]
    fn test_compose_empty_selection_degenerate_link() {
        let link = CommentLink::compose("", "comments", at_2024_03_05_10_15());

        assert_eq!(link.link_markdown, "[](<comments/202403051015.md>)");
        assert_eq!(link.note_body, ">\n");
    }

    #[test]
    fn test_create_comment_note_side_effects() {
        let vault = tempfile::tempdir().unwrap();
        std::fs::create_dir(vault.path().join("comments")).unwrap();

        let mut doc = doc_with_selection("see TODO: revisit here", 4..17);
        assert_eq!(doc.selection_text(), "TODO: revisit");

        let link = create_comment_note(
            &mut doc,
            vault.path(),
            &CommentSettings::default(),
            at_2024_03_05_10_15(),
        )
        .unwrap();

        assert_eq!(
            doc.content,
            "see [TODO: revisit](<comments/202403051015.md>) here"
        );
        let created = vault.path().join(&link.target_path);
        assert_eq!(std::fs::read_to_string(created).unwrap(), ">TODO: revisit\n");
    }

    #[test]
    fn test_same_minute_collision_still_edits_document() {
        let vault = tempfile::tempdir().unwrap();
        std::fs::create_dir(vault.path().join("comments")).unwrap();
        let at = at_2024_03_05_10_15();
        let settings = CommentSettings::default();

        let mut first = doc_with_selection("first", 0..5);
        create_comment_note(&mut first, vault.path(), &settings, at).unwrap();

        let mut second = doc_with_selection("second", 0..6);
        let err = create_comment_note(&mut second, vault.path(), &settings, at).unwrap_err();
        assert!(matches!(err, NoteCreateError::AlreadyExists(_)));

        // The document was already edited and points at the first note
        assert_eq!(second.content, "[second](<comments/202403051015.md>)");
        assert_eq!(
            std::fs::read_to_string(vault.path().join("comments/202403051015.md")).unwrap(),
            ">first\n"
        );
    }

    #[test]
    fn test_missing_folder_surfaces_error() {
        let vault = tempfile::tempdir().unwrap();

        let mut doc = doc_with_selection("orphaned", 0..8);
        let err = create_comment_note(
            &mut doc,
            vault.path(),
            &CommentSettings::default(),
            at_2024_03_05_10_15(),
        )
        .unwrap_err();

        assert!(matches!(err, NoteCreateError::MissingFolder(_)));
        assert!(doc.content.starts_with("[orphaned](<comments/"));
    }

    #[test]
    fn test_configured_folder_is_used() {
        let at = at_2024_03_05_10_15();
        let settings = CommentSettings {
            comment_location: "annotations".to_string(),
            ..Default::default()
        };

        let link = CommentLink::compose("text", &settings.comment_location, at);
        assert_eq!(link.target_path, "annotations/202403051015.md");
    }
}
