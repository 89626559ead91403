use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the blocking load -> recognize -> persist pipeline for `path`.
    /// The shell must paint the Converting status once before starting.
    RunConversion { path: PathBuf },
    /// Hand the given text to the OS clipboard.
    CopyText { text: String },
    /// Non-blocking status hint for a user precondition slip.
    ShowAdvisory { message: String },
    /// Blocking error dialog.
    ShowAlert { message: String },
}
