//! UI components for Marginalia

pub mod editor;
pub mod file_tree;
pub mod preview;
pub mod settings;
