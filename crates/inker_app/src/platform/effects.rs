use std::path::PathBuf;

use eframe::egui;
use inker_core::{ConversionReport, CopyReport, Msg};
use inker_engine::{
    ClipboardBridge, ConversionController, ConversionOutcome, FileImageLoader, ProgressSink,
    SelectionState, SystemClipboard, TesseractCliRecognizer, WorkflowError,
};
use inker_logging::inker_warn;

/// Executes core effects against the engine and maps the outcomes back
/// into core messages. Everything here is synchronous on the UI thread.
pub struct EffectRunner {
    selection: SelectionState,
    controller: ConversionController<FileImageLoader, TesseractCliRecognizer>,
    clipboard: Option<ClipboardBridge<SystemClipboard>>,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self {
            selection: SelectionState::new(),
            controller: ConversionController::new(
                FileImageLoader,
                TesseractCliRecognizer::new(),
            ),
            // Created on first copy; construction can fail without a display.
            clipboard: None,
        }
    }

    /// Selection events land here as well as in the core state machine.
    pub fn select(&mut self, path: PathBuf) {
        self.selection.select(path);
    }

    pub fn run_conversion(&mut self, ctx: &egui::Context) -> Msg {
        let mut sink = RepaintSink { ctx };
        let outcome = self.controller.convert(&self.selection, &mut sink);
        Msg::ConversionFinished(conversion_report(outcome))
    }

    pub fn copy(&mut self, text: &str) -> Msg {
        let report = match self.bridge() {
            Ok(bridge) => match bridge.copy(text) {
                Ok(()) => CopyReport::Copied,
                Err(err) => CopyReport::Failed {
                    advisory: err.is_advisory(),
                    message: err.to_string(),
                },
            },
            Err(err) => {
                inker_warn!("clipboard unavailable: {err}");
                CopyReport::Failed {
                    advisory: false,
                    message: err.to_string(),
                }
            }
        };
        Msg::CopyFinished(report)
    }

    fn bridge(&mut self) -> Result<&mut ClipboardBridge<SystemClipboard>, WorkflowError> {
        if self.clipboard.is_none() {
            let system = SystemClipboard::new()
                .map_err(|err| WorkflowError::Clipboard(err.to_string()))?;
            self.clipboard = Some(ClipboardBridge::new(system));
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| WorkflowError::Clipboard("unavailable".to_string()))
    }
}

/// The Converting status frame is already on screen when this fires; the
/// repaint request just queues a fresh frame for when the blocking call
/// returns.
struct RepaintSink<'a> {
    ctx: &'a egui::Context,
}

impl ProgressSink for RepaintSink<'_> {
    fn converting_started(&mut self) {
        self.ctx.request_repaint();
    }
}

fn conversion_report(outcome: Result<ConversionOutcome, WorkflowError>) -> ConversionReport {
    match outcome {
        Ok(outcome) => ConversionReport::Success {
            text: outcome.result.text,
            write_failure: outcome.persisted.err().map(|err| err.to_string()),
        },
        Err(err) => ConversionReport::Failed {
            advisory: err.is_advisory(),
            message: err.to_string(),
        },
    }
}
