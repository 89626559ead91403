use crate::{AppState, Phase};

/// Snapshot the shell renders from; derived, never mutated directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    /// File name (not the full path) of the current selection.
    pub selected_file: Option<String>,
    /// Content of the result area. Empty unless a conversion succeeded.
    pub result_text: String,
    /// One-line status for the bottom bar.
    pub status: String,
}

impl AppState {
    pub fn view(&self) -> AppViewModel {
        let status = match self.phase() {
            Phase::Idle => "Select a PNG file to begin.".to_string(),
            Phase::FileSelected => match self.selected_file_name() {
                Some(name) => format!("Selected: {name}"),
                None => "Selected.".to_string(),
            },
            Phase::Converting => "Converting...".to_string(),
            Phase::Converted => "Conversion finished.".to_string(),
            Phase::Failed => self
                .error()
                .unwrap_or("Conversion failed.")
                .to_string(),
            Phase::ClipboardCopied => "Result copied to clipboard.".to_string(),
        };

        AppViewModel {
            phase: self.phase(),
            selected_file: self.selected_file_name(),
            result_text: self.text().unwrap_or_default().to_string(),
            status,
        }
    }
}
