//! File tree panel for vault navigation

use eframe::egui;

use crate::app::MarginaliaApp;
use crate::core::file_system::FileNode;

/// File tree panel
pub struct FileTreePanel;

impl FileTreePanel {
    /// Show the file tree panel
    pub fn show(ui: &mut egui::Ui, app: &mut MarginaliaApp) {
        ui.vertical(|ui| {
            // Header
            ui.horizontal(|ui| {
                ui.heading("Vault");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("\u{21BB}").on_hover_text("Refresh").clicked() {
                        let _ = app.file_tree.refresh();
                    }
                });
            });

            ui.separator();

            // File tree
            egui::ScrollArea::vertical()
                .id_salt("file_tree_scroll")
                .show(ui, |ui| {
                    if let Some(ref root) = app.file_tree.root.clone() {
                        Self::show_node(ui, root, app);
                    } else {
                        ui.label("No vault open");
                        ui.add_space(10.0);
                        if ui.button("Open Vault...").clicked() {
                            if let Some(path) = rfd::FileDialog::new().pick_folder() {
                                app.open_vault(path);
                            }
                        }
                    }
                });
        });
    }

    /// Recursively show a file tree node
    fn show_node(ui: &mut egui::Ui, node: &FileNode, app: &mut MarginaliaApp) {
        if node.is_dir {
            Self::show_directory(ui, node, app);
        } else {
            Self::show_file(ui, node, app);
        }
    }

    /// Show a directory node
    fn show_directory(ui: &mut egui::Ui, node: &FileNode, app: &mut MarginaliaApp) {
        let id = ui.make_persistent_id(&node.path);

        egui::collapsing_header::CollapsingState::load_with_default_open(
            ui.ctx(),
            id,
            node.expanded,
        )
        .show_header(ui, |ui| {
            let icon = if node.expanded { "\u{1F4C2}" } else { "\u{1F4C1}" };
            if ui
                .selectable_label(false, format!("{} {}", icon, node.name))
                .clicked()
            {
                app.file_tree.toggle_expanded(&node.path);
            }
        })
        .body(|ui| {
            for child in &node.children {
                Self::show_node(ui, child, app);
            }
        });
    }

    /// Show a file node
    fn show_file(ui: &mut egui::Ui, node: &FileNode, app: &mut MarginaliaApp) {
        let icon = if node.is_markdown() {
            "\u{1F4DD}"
        } else {
            "\u{1F4C4}"
        };

        let is_active = app.active_document.as_ref() == Some(&node.path);

        // Star modified documents in the sidebar too
        let modified = app
            .documents
            .get(&node.path)
            .map(|doc| doc.modified)
            .unwrap_or(false);
        let display_name = if modified {
            format!("{} {}*", icon, node.name)
        } else {
            format!("{} {}", icon, node.name)
        };

        ui.horizontal(|ui| {
            ui.add_space(16.0); // Indent for files
            if ui.selectable_label(is_active, display_name).clicked() {
                app.open_document(node.path.clone());
            }
        });
    }
}
