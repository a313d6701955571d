//! Main egui application: the chat widget plus the Setup API panel.

use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use chatbot_core::controller::ConversationController;
use chatbot_types::ChatError;
use chatbot_ui::panels::{chat, settings};
use chatbot_ui::state::{SettingsDraft, UiState};
use chatbot_ui::theme;

pub struct ChatbotApp {
    ui_state: UiState,
    controller: Rc<ConversationController>,
    first_frame: bool,
}

impl ChatbotApp {
    pub fn new(controller: Rc<ConversationController>) -> Self {
        let settings = controller.config().settings();
        let mut ui_state = UiState::new(&settings);
        // Open the setup panel straight away when nothing is configured yet
        ui_state.show_settings = settings.api_key.is_empty();

        Self {
            ui_state,
            controller,
            first_frame: true,
        }
    }

    /// Run one turn on the controller (async). Results arrive through the EventBus.
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let controller = self.controller.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            match controller.submit(&text).await {
                Ok(_) => {}
                Err(ChatError::Busy) => log::debug!("dropped input while a reply is pending"),
                Err(e) => log::error!("Chat turn error: {}", e),
            }
            ctx.request_repaint();
        });
    }

    /// Hand the settings draft to the controller (async)
    fn dispatch_settings(&self, draft: &SettingsDraft, ctx: &egui::Context) {
        let controller = self.controller.clone();
        let settings = draft.to_settings();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = controller.configure(settings).await {
                log::warn!("Settings not saved: {}", e);
            }
            ctx.request_repaint();
        });
    }
}

impl eframe::App for ChatbotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        let bus = self.controller.event_bus();
        if bus.has_pending() {
            self.ui_state.process_events(bus.drain());
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Portfolio Assistant")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                let config = self.controller.config();
                ui.label(
                    RichText::new(format!("Provider: {}", config.provider.label()))
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Setup API")
                        .clicked()
                    {
                        if self.ui_state.show_settings {
                            self.ui_state.show_settings = false;
                        } else {
                            self.ui_state.open_settings(&config.settings());
                        }
                    }
                });
            });
        });

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    match settings::settings_panel(
                        ui,
                        &mut self.ui_state.settings_draft,
                        self.ui_state.save_feedback.as_ref(),
                    ) {
                        settings::SettingsAction::SaveClicked => {
                            self.dispatch_settings(&self.ui_state.settings_draft, ctx);
                        }
                        settings::SettingsAction::Closed => {
                            self.ui_state.show_settings = false;
                        }
                        settings::SettingsAction::None => {}
                    }
                });
        }

        // ── Chat ─────────────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            match chat::chat_panel(ui, &mut self.ui_state) {
                chat::ChatAction::Send(text) => self.dispatch_message(text, ctx),
                chat::ChatAction::OpenSettings => {
                    self.ui_state.open_settings(&self.controller.config().settings());
                }
                chat::ChatAction::Clear => {
                    if let Err(e) = self.controller.reset() {
                        log::warn!("Chat not cleared: {}", e);
                    }
                }
                chat::ChatAction::None => {}
            }
        });
    }
}
