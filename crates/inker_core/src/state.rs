use std::path::{Path, PathBuf};

/// Presentation-visible lifecycle of the conversion workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing selected yet.
    #[default]
    Idle,
    /// An image file has been chosen; no conversion ran for it.
    FileSelected,
    /// The blocking conversion is about to run / running.
    Converting,
    /// Recognition finished; text is displayed.
    Converted,
    /// Conversion failed; the failure description is displayed.
    Failed,
    /// The displayed text was handed to the OS clipboard.
    ClipboardCopied,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    selected: Option<PathBuf>,
    phase: Phase,
    text: Option<String>,
    error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_path(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Recognized text currently on display, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replaces the selection. Invariant: any prior result or failure is
    /// cleared before a new conversion can run.
    pub(crate) fn select_file(&mut self, path: PathBuf) {
        self.selected = Some(path);
        self.phase = Phase::FileSelected;
        self.text = None;
        self.error = None;
    }

    pub(crate) fn begin_conversion(&mut self) {
        self.phase = Phase::Converting;
        self.text = None;
        self.error = None;
    }

    pub(crate) fn complete_conversion(&mut self, text: String) {
        self.phase = Phase::Converted;
        self.text = Some(text);
        self.error = None;
    }

    pub(crate) fn fail_conversion(&mut self, message: String) {
        self.phase = Phase::Failed;
        self.text = None;
        self.error = Some(message);
    }

    /// Informational only; the displayed text stays available for further
    /// copies and new selections.
    pub(crate) fn mark_copied(&mut self) {
        if matches!(self.phase, Phase::Converted | Phase::ClipboardCopied) {
            self.phase = Phase::ClipboardCopied;
        }
    }

    pub(crate) fn selected_file_name(&self) -> Option<String> {
        self.selected
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
