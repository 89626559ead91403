use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked an image through the file-selection dialog.
    FileChosen(PathBuf),
    /// User clicked Convert.
    ConvertClicked,
    /// The engine finished a conversion attempt.
    ConversionFinished(ConversionReport),
    /// User clicked Copy.
    CopyClicked,
    /// The clipboard hand-off finished.
    CopyFinished(CopyReport),
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Outcome of a conversion, carried as plain data so the core stays
/// independent of the engine's error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionReport {
    Success {
        text: String,
        /// Set when the output file could not be written. The recognized
        /// text is still displayed.
        write_failure: Option<String>,
    },
    Failed {
        message: String,
        /// Advisory failures are user precondition slips, shown inline
        /// rather than through a blocking alert.
        advisory: bool,
    },
}

/// Outcome of a clipboard hand-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyReport {
    Copied,
    Failed { message: String, advisory: bool },
}
