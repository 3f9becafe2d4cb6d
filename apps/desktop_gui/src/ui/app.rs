use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, Confirmation, Intent, KataController, View};
use crate::ui::render::{render_list_state, render_result, KataListView, ResultTone};
use crate::ui::theme::{lighten_color, tone_palette};

pub struct KataDesktopApp {
    controller: KataController,
    ui_rx: Receiver<UiEvent>,
    server_url: String,
}

impl KataDesktopApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        server_url: impl Into<String>,
    ) -> Self {
        let mut controller = KataController::new(cmd_tx);
        controller.handle(Intent::Initialize);
        Self {
            controller,
            ui_rx,
            server_url: server_url.into(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.controller.apply(event);
        }
    }

    fn show_top_bar(&self, ctx: &egui::Context, modal_open: bool, intents: &mut Vec<Intent>) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.controller.view() == View::Detail
                    && ui
                        .add_enabled(!modal_open, egui::Button::new("← Back"))
                        .clicked()
                {
                    intents.push(Intent::ReturnToList);
                }
                ui.heading("Kata Exercise");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(&self.server_url);
                });
            });
        });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(self.controller.status()).weak());
            });
        });
    }

    fn show_kata_list(&self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        ui.heading("Available Katas");
        ui.add_space(8.0);

        match render_list_state(self.controller.katas()) {
            KataListView::Loading { message } => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(message);
                });
            }
            KataListView::Empty { message } => {
                ui.weak(message);
            }
            KataListView::Failed { message } => {
                let palette = tone_palette(ResultTone::Error);
                egui::Frame::group(ui.style())
                    .fill(palette.fill)
                    .stroke(egui::Stroke::new(1.0, palette.stroke))
                    .show(ui, |ui| {
                        ui.colored_label(palette.text, message);
                        if ui.button("Retry").clicked() {
                            intents.push(Intent::RefreshList);
                        }
                    });
            }
            KataListView::Cards(cards) => {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for card in &cards {
                            let response = egui::Frame::group(ui.style())
                                .show(ui, |ui| {
                                    ui.set_width(ui.available_width());
                                    ui.label(egui::RichText::new(&card.title).strong().size(18.0));
                                    ui.weak(card.hint);
                                })
                                .response
                                .interact(egui::Sense::click())
                                .on_hover_cursor(egui::CursorIcon::PointingHand);
                            if response.clicked() {
                                intents.push(card.intent());
                            }
                            ui.add_space(6.0);
                        }
                    });
            }
        }
    }

    fn show_kata_detail(&mut self, ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
        let Some(kata) = self.controller.current_kata() else {
            return;
        };
        let title = kata.title.clone();
        let description = kata.description.clone();
        let submit = self.controller.submit_button();
        let result = self.controller.result().map(render_result);
        let scroll_to_result = self.controller.take_scroll_to_result();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(title);
                ui.label(description);
                ui.add_space(10.0);

                ui.label(egui::RichText::new("Your solution").strong());
                ui.add(
                    egui::TextEdit::multiline(self.controller.code_mut())
                        .code_editor()
                        .desired_rows(16)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(submit.enabled(), egui::Button::new(submit.label()))
                        .clicked()
                    {
                        intents.push(Intent::Submit);
                    }
                    if ui.button("Reset").clicked() {
                        intents.push(Intent::ResetCode);
                    }
                });

                if let Some(view) = result {
                    ui.add_space(10.0);
                    let palette = tone_palette(view.tone);
                    let response = egui::Frame::group(ui.style())
                        .fill(palette.fill)
                        .stroke(egui::Stroke::new(1.0, palette.stroke))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(
                                egui::RichText::new(&view.headline)
                                    .strong()
                                    .size(16.0)
                                    .color(palette.text),
                            );
                            ui.label(
                                egui::RichText::new(&view.message)
                                    .color(lighten_color(palette.text, 0.1)),
                            );
                        })
                        .response;
                    if scroll_to_result {
                        response.scroll_to_me(Some(egui::Align::Max));
                    }
                }
            });
    }

    fn show_confirmation(&self, ctx: &egui::Context, intents: &mut Vec<Intent>) {
        let Some(confirmation) = self.controller.confirmation() else {
            return;
        };
        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(confirmation.prompt());
                ui.add_space(8.0);
                ui.horizontal(|ui| match confirmation {
                    Confirmation::ResetCode => {
                        if ui.button("Reset").clicked() {
                            intents.push(Intent::ConfirmReset);
                        }
                        if ui.button("Cancel").clicked() {
                            intents.push(Intent::CancelReset);
                        }
                    }
                });
            });
    }

    fn show_alert(&self, ctx: &egui::Context, intents: &mut Vec<Intent>) {
        let Some(message) = self.controller.alert() else {
            return;
        };
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    intents.push(Intent::DismissAlert);
                }
            });
    }
}

impl eframe::App for KataDesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let modal_open =
            self.controller.alert().is_some() || self.controller.confirmation().is_some();
        let mut intents = Vec::new();

        self.show_top_bar(ctx, modal_open, &mut intents);
        self.show_status_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| match self.controller.view() {
                View::List => self.show_kata_list(ui, &mut intents),
                View::Detail => self.show_kata_detail(ui, &mut intents),
            });
        });
        self.show_confirmation(ctx, &mut intents);
        self.show_alert(ctx, &mut intents);

        for intent in intents {
            self.controller.handle(intent);
        }

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
