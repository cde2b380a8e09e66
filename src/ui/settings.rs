//! Settings window

use eframe::egui;

use crate::app::MarginaliaApp;

/// Settings window
pub struct SettingsPanel;

impl SettingsPanel {
    /// Show the settings window when visible
    pub fn show(ctx: &egui::Context, app: &mut MarginaliaApp) {
        let mut open = app.settings_visible;

        egui::Window::new("Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Comment notes");
                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.label("Comment note location:");
                    let response = egui::TextEdit::singleline(
                        &mut app.config.comment.comment_location,
                    )
                    .hint_text("comments")
                    .show(ui)
                    .response;

                    // Persist on every keystroke, matching the in-memory value
                    if response.changed() {
                        if let Err(e) = app.config.save() {
                            tracing::error!("Failed to save settings: {}", e);
                        }
                    }
                });

                ui.label("Folder inside the vault where comment notes are created.");
            });

        app.settings_visible = open;
    }
}
