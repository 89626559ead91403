use std::collections::VecDeque;

use eframe::egui;
use inker_core::{update, AppState, Effect, Msg, Phase};
use inker_logging::{inker_debug, inker_info};

use super::dialogs;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};

pub fn run_app() -> eframe::Result<()> {
    logging::initialize(LogDestination::File);
    inker_info!("starting inker");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Inker")
            .with_inner_size([600.0, 500.0]),
        ..Default::default()
    };
    eframe::run_native(
        "inker_app",
        options,
        Box::new(|_cc| Ok(Box::new(InkerApp::new()))),
    )
}

/// Conversion is deferred across frames: frames are presented only after
/// `update` returns, so the Converting status needs one painted frame
/// before the blocking call may start.
enum PendingConversion {
    Scheduled,
    ReadyToRun,
}

struct InkerApp {
    state: AppState,
    runner: EffectRunner,
    pending: Option<PendingConversion>,
    /// Transient non-blocking advisory, shown in the status bar until the
    /// next user action.
    advisory: Option<String>,
}

impl InkerApp {
    fn new() -> Self {
        Self {
            state: AppState::new(),
            runner: EffectRunner::new(),
            pending: None,
            advisory: None,
        }
    }

    fn dispatch(&mut self, msg: Msg, ctx: &egui::Context) {
        let mut queue = VecDeque::new();
        queue.push_back(msg);
        while let Some(msg) = queue.pop_front() {
            self.advisory = None;
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            for effect in effects {
                match effect {
                    Effect::RunConversion { path } => {
                        inker_debug!("conversion scheduled for {}", path.display());
                        self.pending = Some(PendingConversion::Scheduled);
                        ctx.request_repaint();
                    }
                    Effect::CopyText { text } => {
                        queue.push_back(self.runner.copy(&text));
                    }
                    Effect::ShowAdvisory { message } => {
                        inker_info!("advisory: {message}");
                        self.advisory = Some(message);
                    }
                    Effect::ShowAlert { message } => {
                        dialogs::alert(&message);
                    }
                }
            }
        }
    }

    fn draw(&mut self, ctx: &egui::Context) {
        let view = self.state.view();
        let mut msgs = Vec::new();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.advisory.as_deref().unwrap_or(&view.status));
        });

        egui::TopBottomPanel::bottom("copy_bar").show(ctx, |ui| {
            ui.vertical_centered_justified(|ui| {
                if ui.button("Copy result to clipboard").clicked() {
                    msgs.push(Msg::CopyClicked);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered_justified(|ui| {
                if ui.button("Select PNG file...").clicked() {
                    if let Some(path) = dialogs::pick_image() {
                        self.runner.select(path.clone());
                        msgs.push(Msg::FileChosen(path));
                    }
                }
            });
            let selected = view.selected_file.as_deref().unwrap_or("none");
            ui.label(format!("Selected file: {selected}"));
            ui.add_space(12.0);

            ui.vertical_centered_justified(|ui| {
                let converting = view.phase == Phase::Converting;
                let convert = ui.add_enabled(!converting, egui::Button::new("Start conversion"));
                if convert.clicked() {
                    msgs.push(Msg::ConvertClicked);
                }
            });
            ui.add_space(4.0);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    // Read-only: copy always operates on the state machine's
                    // text, never on widget-local edits.
                    let mut shown = view.result_text.as_str();
                    ui.add(
                        egui::TextEdit::multiline(&mut shown)
                            .desired_width(f32::INFINITY)
                            .desired_rows(16)
                            .hint_text("Conversion result will be displayed here."),
                    );
                });
        });

        for msg in msgs {
            self.dispatch(msg, ctx);
        }
    }
}

impl eframe::App for InkerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.pending.take() {
            Some(PendingConversion::Scheduled) => {
                // This frame paints the Converting status; the blocking
                // call starts on the next one.
                self.pending = Some(PendingConversion::ReadyToRun);
                ctx.request_repaint();
            }
            Some(PendingConversion::ReadyToRun) => {
                // Blocks the UI thread for the full load + recognize
                // duration. No cancellation, no timeout.
                let msg = self.runner.run_conversion(ctx);
                self.dispatch(msg, ctx);
            }
            None => {}
        }

        self.draw(ctx);
    }
}
