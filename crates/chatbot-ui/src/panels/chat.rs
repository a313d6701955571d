//! Chat panel: message bubbles, typing indicator and input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use chatbot_types::message::Role;
use crate::state::{ChatEntry, UiState};
use crate::theme::*;

/// What the caller should do after rendering the chat panel
#[derive(Debug, PartialEq, Eq)]
pub enum ChatAction {
    None,
    Send(String),
    OpenSettings,
    /// Drop the conversation, keeping the configuration
    Clear,
}

pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> ChatAction {
    let mut action = ChatAction::None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("AI Assistant").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if state.is_busy() { WARNING } else { SUCCESS };
                        ui.label(RichText::new(&state.status_text).color(status_color).small());
                    });
                });

                ui.separator();

                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in &state.entries {
                            render_entry(ui, entry);
                            ui.add_space(4.0);
                        }

                        if state.is_busy() {
                            egui::Frame::default()
                                .fill(BG_SECONDARY)
                                .corner_radius(BUBBLE_ROUNDING)
                                .inner_margin(8.0)
                                .show(ui, |ui| {
                                    ui.label(RichText::new("●●●").color(ACCENT));
                                });
                        }
                    });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let busy = state.is_busy();
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Ask me anything...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));
                    let response = ui.add_enabled(!busy, input);

                    let send_enabled = !state.input_text.trim().is_empty() && !busy;
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(
                            RichText::new(if busy { "⏳" } else { "Send" }).color(TEXT_PRIMARY),
                        )
                        .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(60.0, 0.0)),
                    );

                    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if enter || send_btn.clicked() {
                        if let Some(text) = state.take_input() {
                            action = ChatAction::Send(text);
                        }
                        response.request_focus();
                    }
                });

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Powered by AI •").color(TEXT_SECONDARY).small());
                    if ui.link(RichText::new("⚙ Setup API").small()).clicked() {
                        action = ChatAction::OpenSettings;
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let clear = ui.add_enabled(
                            !state.is_busy() && state.entries.len() > 1,
                            egui::Button::new(RichText::new("Clear chat").small()).frame(false),
                        );
                        if clear.clicked() {
                            action = ChatAction::Clear;
                        }
                    });
                });
            });
        });

    action
}

fn render_entry(ui: &mut egui::Ui, entry: &ChatEntry) {
    let message = &entry.message;
    let (label, label_color, bg, layout) = match (message.role, message.is_error) {
        (_, true) => ("Error", ERROR, ERROR_BUBBLE, Layout::left_to_right(Align::TOP)),
        (Role::User, _) => ("You", TEXT_PRIMARY, USER_BUBBLE, Layout::right_to_left(Align::TOP)),
        _ => ("Assistant", ACCENT, BG_SECONDARY, Layout::left_to_right(Align::TOP)),
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(bg)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.8);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(label).color(label_color).strong().small());
                        ui.label(RichText::new(&entry.timestamp).color(TEXT_SECONDARY).small());
                    });
                    ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));
                });
            });
    });
}
