//! Main application state and UI coordination

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::Local;
use eframe::egui;

use crate::core::comment;
use crate::core::{config::AppConfig, document::Document, file_system::FileTree};
use crate::ui::{
    editor::EditorPanel, file_tree::FileTreePanel, preview::PreviewPanel, settings::SettingsPanel,
};

/// View mode for the editor area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Editor,
    Preview,
    Split,
}

/// Main application state
pub struct MarginaliaApp {
    /// Path to the current vault (workspace)
    pub vault_path: Option<PathBuf>,
    /// Open documents indexed by path
    pub documents: HashMap<PathBuf, Document>,
    /// Currently active document path
    pub active_document: Option<PathBuf>,
    /// File tree state
    pub file_tree: FileTree,
    /// Application configuration
    pub config: AppConfig,
    /// Current view mode
    pub view_mode: ViewMode,
    /// Whether sidebar is visible
    pub sidebar_visible: bool,
    /// Whether the settings window is visible
    pub settings_visible: bool,
    /// Commonmark cache for preview
    pub commonmark_cache: egui_commonmark::CommonMarkCache,
}

impl MarginaliaApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        // Load config or use defaults
        let config = AppConfig::load().unwrap_or_default();

        // Load last vault if configured
        let vault_path = config.last_vault.clone();
        let file_tree = if let Some(ref path) = vault_path {
            FileTree::from_path(path).unwrap_or_default()
        } else {
            FileTree::default()
        };

        Self {
            vault_path,
            documents: HashMap::new(),
            active_document: None,
            file_tree,
            config,
            view_mode: ViewMode::Split,
            sidebar_visible: true,
            settings_visible: false,
            commonmark_cache: egui_commonmark::CommonMarkCache::default(),
        }
    }

    /// Open a vault (workspace directory)
    pub fn open_vault(&mut self, path: PathBuf) {
        self.vault_path = Some(path.clone());
        self.file_tree = FileTree::from_path(&path).unwrap_or_default();
        self.config.last_vault = Some(path.clone());
        self.config.add_recent_vault(path);
        let _ = self.config.save();
    }

    /// Open a document
    pub fn open_document(&mut self, path: PathBuf) {
        if !self.documents.contains_key(&path) {
            match Document::open(&path) {
                Ok(doc) => {
                    self.documents.insert(path.clone(), doc);
                }
                Err(e) => {
                    tracing::error!("Failed to open document: {}", e);
                    return;
                }
            }
        }
        self.active_document = Some(path);
    }

    /// Save the active document
    pub fn save_active_document(&mut self) {
        if let Some(ref path) = self.active_document {
            if let Some(doc) = self.documents.get_mut(path) {
                match doc.save() {
                    Ok(()) => doc.modified = false,
                    Err(e) => tracing::error!("Failed to save document: {}", e),
                }
            }
        }
    }

    /// Get the active document
    pub fn active_document(&self) -> Option<&Document> {
        self.active_document
            .as_ref()
            .and_then(|path| self.documents.get(path))
    }

    /// Run the "Create comment note" command against the active document.
    ///
    /// Replaces the current selection with a link to a timestamped note in the
    /// configured comment folder, then creates that note. The document edit
    /// stands even when the note cannot be created.
    pub fn create_comment_note(&mut self) {
        let Some(vault_root) = self.vault_path.clone() else {
            tracing::warn!("Cannot create comment note: no vault open");
            return;
        };
        let Some(path) = self.active_document.clone() else {
            tracing::warn!("Cannot create comment note: no active document");
            return;
        };
        let Some(doc) = self.documents.get_mut(&path) else {
            return;
        };

        match comment::create_comment_note(doc, &vault_root, &self.config.comment, Local::now()) {
            Ok(link) => {
                tracing::info!("Created comment note: {}", link.target_path);
                let _ = self.file_tree.refresh();
            }
            Err(e) => tracing::error!("Failed to create comment note: {}", e),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Vault...").clicked() {
                        if let Some(path) = rfd::FileDialog::new().pick_folder() {
                            self.open_vault(path);
                        }
                        ui.close();
                    }
                    if ui.button("Save").clicked() {
                        self.save_active_document();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Settings...").clicked() {
                        self.settings_visible = true;
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Note", |ui| {
                    if ui.button("Create Comment Note").clicked() {
                        self.create_comment_note();
                        ui.close();
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Toggle Sidebar").clicked() {
                        self.sidebar_visible = !self.sidebar_visible;
                        ui.close();
                    }
                    ui.separator();
                    if ui.selectable_label(self.view_mode == ViewMode::Editor, "Editor Only").clicked() {
                        self.view_mode = ViewMode::Editor;
                        ui.close();
                    }
                    if ui.selectable_label(self.view_mode == ViewMode::Preview, "Preview Only").clicked() {
                        self.view_mode = ViewMode::Preview;
                        ui.close();
                    }
                    if ui.selectable_label(self.view_mode == ViewMode::Split, "Split View").clicked() {
                        self.view_mode = ViewMode::Split;
                        ui.close();
                    }
                });
            });
        });
    }
}

impl eframe::App for MarginaliaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        let (save, toggle_sidebar, comment_note) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::S),
                i.modifiers.ctrl && i.key_pressed(egui::Key::B),
                i.modifiers.ctrl && i.key_pressed(egui::Key::M),
            )
        });
        if save {
            self.save_active_document();
        }
        if toggle_sidebar {
            self.sidebar_visible = !self.sidebar_visible;
        }
        if comment_note {
            self.create_comment_note();
        }

        // Render menu bar
        self.render_menu_bar(ctx);

        // Render sidebar with file tree
        if self.sidebar_visible {
            egui::SidePanel::left("sidebar")
                .resizable(true)
                .default_width(250.0)
                .min_width(150.0)
                .show(ctx, |ui| {
                    FileTreePanel::show(ui, self);
                });
        }

        // Render main content area
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.view_mode {
                ViewMode::Editor => {
                    EditorPanel::show(ui, self);
                }
                ViewMode::Preview => {
                    PreviewPanel::show(ui, self);
                }
                ViewMode::Split => {
                    // Split view: editor on left, preview on right
                    let available_width = ui.available_width();
                    ui.horizontal(|ui| {
                        ui.set_min_width(available_width);

                        // Editor panel
                        ui.vertical(|ui| {
                            ui.set_width(available_width / 2.0 - 4.0);
                            EditorPanel::show(ui, self);
                        });

                        ui.separator();

                        // Preview panel
                        ui.vertical(|ui| {
                            ui.set_width(available_width / 2.0 - 4.0);
                            PreviewPanel::show(ui, self);
                        });
                    });
                }
            }
        });

        // Settings window
        SettingsPanel::show(ctx, self);
    }
}
