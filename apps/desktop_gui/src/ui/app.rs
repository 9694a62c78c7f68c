//! egui application shell: the input form, filter toggles, and results panel.

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::FilterId;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::form::FormState;
use crate::controller::orchestration::dispatch_backend_command;

pub struct DatadeskApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    form: FormState,
    status: String,
}

impl DatadeskApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            form: FormState::new(),
            status: "Backend worker not started".to_string(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.status = self.form.apply_event(event);
        }
    }

    fn try_submit(&mut self) {
        let Some(cmd) = self.form.try_submit() else {
            return;
        };
        if dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status) {
            self.status = "Classifying...".to_string();
        } else {
            let message = self.status.clone();
            self.form.abort_submission(message);
        }
    }

    fn show_input_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Data Processing Desk");
        ui.add_space(6.0);
        ui.label(egui::RichText::new("Enter JSON input:").strong());

        let editor = egui::TextEdit::multiline(&mut self.form.input_text)
            .id_salt("json_input")
            .hint_text(
                egui::RichText::new(r#"{"data": ["A", "1", "B", "2"]}"#)
                    .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
            )
            .font(egui::TextStyle::Monospace)
            .desired_rows(5)
            .desired_width(f32::INFINITY);
        let editor_response = ui.add(editor);

        ui.add_space(6.0);

        let submit_label = if self.form.loading {
            "Processing..."
        } else {
            "Submit"
        };
        let submit_clicked = ui
            .add_enabled(!self.form.loading, egui::Button::new(submit_label))
            .clicked();

        // Ctrl+Enter submits while the editor keeps focus.
        let submit_shortcut = editor_response.has_focus()
            && ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));

        if !self.form.loading && (submit_clicked || submit_shortcut) {
            self.try_submit();
        }

        if let Some(error) = self.form.error.clone() {
            ui.add_space(6.0);
            self.show_error_banner(ui, &error);
        }
    }

    fn show_error_banner(&mut self, ui: &mut egui::Ui, message: &str) {
        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(111, 53, 53))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.form.error = None;
                        }
                    });
                });
            });
    }

    fn show_filter_section(&mut self, ui: &mut egui::Ui) {
        ui.add_space(10.0);
        ui.separator();
        ui.label(egui::RichText::new("Select filters to display response data:").strong());

        ui.horizontal_wrapped(|ui| {
            let mut selection = self.form.selected_filters.clone();
            let mut changed = false;
            for filter in FilterId::ALL {
                let mut selected = selection.contains(&filter);
                if ui.toggle_value(&mut selected, filter.label()).changed() {
                    changed = true;
                    if selected {
                        selection.insert(filter);
                    } else {
                        selection.remove(&filter);
                    }
                }
            }
            if changed {
                self.form.set_filters(selection);
            }
        });

        if !self.form.filtered_view_available() {
            return;
        }

        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Filtered Response").strong());
            ui.add_space(4.0);

            for line in self.form.filtered_lines() {
                ui.horizontal_wrapped(|ui| {
                    ui.strong(format!("{}:", line.filter.label()));
                    ui.monospace(line.values);
                });
            }

            if self.form.shows_no_data_notice() {
                ui.weak("No data available for selected filters.");
            }
        });
    }
}

impl eframe::App for DatadeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_input_form(ui);
            if self.form.show_filters {
                self.show_filter_section(ui);
            }
        });

        // Worker events arrive between frames; keep polling for them.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
