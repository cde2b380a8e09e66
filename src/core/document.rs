//! Document management for markdown files

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A markdown document open in the editor
#[derive(Debug, Clone)]
pub struct Document {
    /// File path
    pub path: PathBuf,
    /// Document content
    pub content: String,
    /// Whether the document has unsaved changes
    pub modified: bool,
    /// Current selection as a byte range into `content`. An empty range is a
    /// bare cursor; `None` means the editor has not reported one yet.
    pub selection: Option<Range<usize>>,
}

impl Document {
    /// Create a new empty document
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            content: String::new(),
            modified: false,
            selection: None,
        }
    }

    /// Open a document from a file
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
            modified: false,
            selection: None,
        })
    }

    /// Save the document to disk
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, &self.content)
            .with_context(|| format!("Failed to save file: {}", self.path.display()))?;
        tracing::info!("Saved document: {}", self.path.display());
        Ok(())
    }

    /// Get the document title (filename without extension)
    pub fn title(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Record the selection reported by the editor, given as character
    /// indices into `content`.
    pub fn set_selection_chars(&mut self, chars: Range<usize>) {
        let start = self.byte_of_char(chars.start);
        let end = self.byte_of_char(chars.end);
        self.selection = Some(start.min(end)..start.max(end));
    }

    fn byte_of_char(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.content.len())
    }

    /// The currently selected text, empty when nothing is selected.
    pub fn selection_text(&self) -> &str {
        match &self.selection {
            Some(range) => &self.content[range.clone()],
            None => "",
        }
    }

    /// Replace the current selection with `text` and mark the document
    /// modified. With no selection recorded the text is appended at the end.
    /// The selection collapses to a cursor after the inserted text.
    pub fn replace_selection(&mut self, text: &str) {
        let range = self
            .selection
            .clone()
            .unwrap_or(self.content.len()..self.content.len());
        self.content.replace_range(range.clone(), text);
        let cursor = range.start + text.len();
        self.selection = Some(cursor..cursor);
        self.modified = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(content: &str) -> Document {
        let mut doc = Document::new(PathBuf::from("test.md"));
        doc.content = content.to_string();
        doc
    }

    #[test]
    fn test_replace_selection() {
        let mut doc = doc_with("one two three");
        doc.set_selection_chars(4..7);
        assert_eq!(doc.selection_text(), "two");

        doc.replace_selection("[two](<comments/202403051015.md>)");
        assert_eq!(doc.content, "one [two](<comments/202403051015.md>) three");
        assert!(doc.modified);
        // Cursor sits after the inserted link
        assert_eq!(doc.selection, Some(37..37));
    }

    #[test]
    fn test_replace_selection_multibyte() {
        let mut doc = doc_with("über naïve");
        doc.set_selection_chars(5..10);
        assert_eq!(doc.selection_text(), "naïve");

        doc.replace_selection("plain");
        assert_eq!(doc.content, "über plain");
    }

    #[test]
    fn test_replace_without_selection_appends() {
        let mut doc = doc_with("tail");
        doc.replace_selection("!");
        assert_eq!(doc.content, "tail!");
    }

    #[test]
    fn test_empty_selection_is_insertion() {
        let mut doc = doc_with("ab");
        doc.set_selection_chars(1..1);
        assert_eq!(doc.selection_text(), "");

        doc.replace_selection("-");
        assert_eq!(doc.content, "a-b");
    }

    #[test]
    fn test_title_from_file_stem() {
        let doc = Document::new(PathBuf::from("notes/daily.md"));
        assert_eq!(doc.title(), "daily");
    }
}
