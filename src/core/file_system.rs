//! File system operations and vault tree management

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use thiserror::Error;

/// Represents a file or directory in the vault tree
#[derive(Debug, Clone)]
pub struct FileNode {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub children: Vec<FileNode>,
    pub expanded: bool,
}

impl FileNode {
    /// Create a new file node
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Self {
            name,
            path,
            is_dir,
            children: Vec::new(),
            expanded: false,
        }
    }

    /// Check if this is a markdown file
    pub fn is_markdown(&self) -> bool {
        !self.is_dir
            && self
                .path
                .extension()
                .map(|ext| ext == "md" || ext == "markdown")
                .unwrap_or(false)
    }

    /// Sort children: directories first, then files, alphabetically
    pub fn sort_children(&mut self) {
        self.children.sort_by(|a, b| {
            match (a.is_dir, b.is_dir) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            }
        });
        for child in &mut self.children {
            child.sort_children();
        }
    }
}

/// File tree representing a vault structure
#[derive(Debug, Clone, Default)]
pub struct FileTree {
    pub root: Option<FileNode>,
    pub root_path: Option<PathBuf>,
}

impl FileTree {
    /// Create a file tree from a directory path
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut root = FileNode::new(path.to_path_buf(), true);
        root.expanded = true;

        Self::build_tree(&mut root, path, 0, 10)?;
        root.sort_children();

        Ok(Self {
            root: Some(root),
            root_path: Some(path.to_path_buf()),
        })
    }

    /// Recursively build the file tree
    fn build_tree(node: &mut FileNode, path: &Path, depth: usize, max_depth: usize) -> Result<()> {
        if depth >= max_depth {
            return Ok(());
        }

        let entries = std::fs::read_dir(path)?;

        for entry in entries.flatten() {
            let entry_path = entry.path();
            let file_name = entry_path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();

            // Skip hidden files and directories
            if file_name.starts_with('.') {
                continue;
            }

            let is_dir = entry_path.is_dir();
            let mut child = FileNode::new(entry_path.clone(), is_dir);

            if is_dir {
                Self::build_tree(&mut child, &entry_path, depth + 1, max_depth)?;
            }

            node.children.push(child);
        }

        Ok(())
    }

    /// Refresh the file tree
    pub fn refresh(&mut self) -> Result<()> {
        if let Some(ref root_path) = self.root_path.clone() {
            *self = Self::from_path(root_path)?;
        }
        Ok(())
    }

    /// Toggle expansion state of a directory
    pub fn toggle_expanded(&mut self, path: &Path) {
        if let Some(ref mut root) = self.root {
            Self::toggle_in_node(root, path);
        }
    }

    fn toggle_in_node(node: &mut FileNode, path: &Path) {
        if node.path == path {
            node.expanded = !node.expanded;
            return;
        }

        for child in &mut node.children {
            Self::toggle_in_node(child, path);
        }
    }
}

/// Why a note could not be created
#[derive(Debug, Error)]
pub enum NoteCreateError {
    #[error("note already exists: {0}")]
    AlreadyExists(PathBuf),
    #[error("comment folder does not exist: {0}")]
    MissingFolder(PathBuf),
    #[error("failed to create note")]
    Io(#[from] std::io::Error),
}

/// Create a new note file with the given content.
///
/// Fails if a file already exists at `path` or if the parent folder is
/// missing; directories are never created on the caller's behalf.
pub fn create_note(path: &Path, content: &str) -> Result<(), NoteCreateError> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(content.as_bytes())?;
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(NoteCreateError::AlreadyExists(path.to_path_buf()))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(NoteCreateError::MissingFolder(
            path.parent().map(Path::to_path_buf).unwrap_or_default(),
        )),
        Err(e) => Err(NoteCreateError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_note_writes_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("202403051015.md");

        create_note(&path, ">TODO: revisit\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ">TODO: revisit\n");
    }

    #[test]
    fn test_create_note_rejects_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("202403051015.md");

        create_note(&path, ">first\n").unwrap();
        let err = create_note(&path, ">second\n").unwrap_err();
        assert!(matches!(err, NoteCreateError::AlreadyExists(_)));
        // The original file is untouched
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ">first\n");
    }

    #[test]
    fn test_create_note_rejects_missing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-folder").join("202403051015.md");

        let err = create_note(&path, ">orphan\n").unwrap_err();
        assert!(matches!(err, NoteCreateError::MissingFolder(_)));
    }

    #[test]
    fn test_sort_children_directories_first() {
        let mut node = FileNode::new(PathBuf::from("vault"), true);
        node.children.push(FileNode::new(PathBuf::from("vault/zebra.md"), false));
        node.children.push(FileNode::new(PathBuf::from("vault/comments"), true));
        node.children.push(FileNode::new(PathBuf::from("vault/Alpha.md"), false));

        node.sort_children();
        let names: Vec<_> = node.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["comments", "Alpha.md", "zebra.md"]);
    }
}
