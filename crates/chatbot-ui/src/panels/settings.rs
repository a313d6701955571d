//! Setup API panel: provider choice, API key and custom endpoint.

use egui::{self, RichText, Vec2};
use chatbot_types::config::Provider;
use crate::state::{SaveFeedback, SettingsDraft};
use crate::theme::*;

/// What the caller should do after rendering the settings panel
#[derive(Debug, PartialEq, Eq)]
pub enum SettingsAction {
    None,
    /// The user clicked Save; the draft should be handed to the controller
    SaveClicked,
    /// The user dismissed the panel
    Closed,
}

pub fn settings_panel(
    ui: &mut egui::Ui,
    draft: &mut SettingsDraft,
    save_feedback: Option<&SaveFeedback>,
) -> SettingsAction {
    let mut action = SettingsAction::None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("Setup API").color(TEXT_PRIMARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").clicked() {
                        action = SettingsAction::Closed;
                    }
                });
            });
            ui.separator();

            ui.label(RichText::new("Provider").color(TEXT_SECONDARY).small());
            egui::ComboBox::from_id_salt("api_provider")
                .selected_text(draft.provider.label())
                .show_ui(ui, |ui| {
                    for p in Provider::all() {
                        ui.selectable_value(&mut draft.provider, *p, p.label());
                    }
                });

            ui.add_space(4.0);

            ui.label(RichText::new("API Key").color(TEXT_SECONDARY).small());
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut draft.api_key)
                        .password(!draft.show_key)
                        .hint_text("Enter your API key"),
                );
                let toggle = if draft.show_key { "Hide" } else { "Show" };
                if ui.small_button(toggle).clicked() {
                    draft.show_key = !draft.show_key;
                }
            });

            if let Some(url) = draft.provider.key_url() {
                ui.hyperlink_to(RichText::new("Get an API Key").small(), url);
            }

            if draft.provider == Provider::Custom {
                ui.add_space(4.0);
                ui.label(RichText::new("Endpoint URL").color(TEXT_SECONDARY).small());
                ui.add(
                    egui::TextEdit::singleline(&mut draft.endpoint)
                        .hint_text("https://your-api.example.com/chat"),
                );
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(RichText::new("Save").color(TEXT_PRIMARY).strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(120.0, 28.0)),
                );
                if btn.clicked() {
                    action = SettingsAction::SaveClicked;
                }

                if let Some(fb) = save_feedback {
                    let color = if fb.success { SUCCESS } else { ERROR };
                    ui.label(RichText::new(&fb.message).color(color).small());
                }
            });

            ui.add_space(4.0);
            ui.label(
                RichText::new("Your API key is stored locally in your browser only.")
                    .color(TEXT_SECONDARY)
                    .small()
                    .italics(),
            );
        });

    action
}
