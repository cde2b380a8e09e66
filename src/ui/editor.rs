//! Markdown editor panel

use eframe::egui;

use crate::app::MarginaliaApp;

/// Markdown editor panel
pub struct EditorPanel;

impl EditorPanel {
    /// Show the editor panel
    pub fn show(ui: &mut egui::Ui, app: &mut MarginaliaApp) {
        ui.vertical(|ui| {
            // Document tabs (if multiple documents open)
            if app.documents.len() > 1 {
                Self::show_tabs(ui, app);
                ui.separator();
            }

            let font_size = app.config.editor.font_size;

            // Editor area
            egui::ScrollArea::vertical()
                .id_salt("editor_scroll")
                .show(ui, |ui| {
                    if let Some(path) = app.active_document.clone() {
                        if let Some(doc) = app.documents.get_mut(&path) {
                            let output = egui::TextEdit::multiline(&mut doc.content)
                                .font(egui::FontId::monospace(font_size))
                                .code_editor()
                                .desired_width(f32::INFINITY)
                                .desired_rows(30)
                                .show(ui);

                            if output.response.changed() {
                                doc.modified = true;
                            }

                            // Mirror the widget's selection into the document
                            // so commands can read it outside the editor pass
                            if let Some(range) = output.state.cursor.char_range() {
                                let (a, b) = (range.primary.index, range.secondary.index);
                                doc.set_selection_chars(a.min(b)..a.max(b));
                            }
                        }
                    } else {
                        Self::show_welcome(ui);
                    }
                });
        });
    }

    /// Show document tabs
    fn show_tabs(ui: &mut egui::Ui, app: &mut MarginaliaApp) {
        ui.horizontal(|ui| {
            let mut paths_to_show: Vec<_> = app.documents.keys().cloned().collect();
            paths_to_show.sort();

            for path in paths_to_show {
                let Some(doc) = app.documents.get(&path) else {
                    continue;
                };
                let title = if doc.modified {
                    format!("{}*", doc.title())
                } else {
                    doc.title()
                };

                let is_active = app.active_document.as_ref() == Some(&path);
                if ui.selectable_label(is_active, title).clicked() {
                    app.active_document = Some(path.clone());
                }
            }
        });
    }

    /// Show welcome screen when no document is open
    fn show_welcome(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);

            ui.heading("Welcome to Marginalia");
            ui.add_space(20.0);

            ui.label("Open a vault and pick a markdown file to get started.");
            ui.add_space(10.0);

            ui.label("Keyboard shortcuts:");
            ui.label("  Ctrl+S - Save");
            ui.label("  Ctrl+B - Toggle sidebar");
            ui.label("  Ctrl+M - Create comment note from selection");
        });
    }
}
