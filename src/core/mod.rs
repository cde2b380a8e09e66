//! Core functionality for document management, vault operations, and configuration

pub mod comment;
pub mod config;
pub mod document;
pub mod file_system;
