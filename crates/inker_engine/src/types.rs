use std::path::PathBuf;

use thiserror::Error;

/// Successful recognition of one source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub source_path: PathBuf,
    pub text: String,
}

/// A finished conversion: the recognized text plus what happened to the
/// output file. A failed write never revokes the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub result: ConversionResult,
    /// Path the text was persisted to, or the write failure.
    pub persisted: Result<PathBuf, WorkflowError>,
}

/// Everything that can go wrong in the select -> convert -> copy workflow.
///
/// Messages are plain strings so outcomes stay comparable in tests; the
/// underlying collaborator errors are folded in at the workflow boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Convert was requested before any image was chosen.
    #[error("no image file selected")]
    NoFileSelected,
    /// The image file could not be decoded into pixels.
    #[error("failed to load image: {0}")]
    Load(String),
    /// The recognition engine reported an error.
    #[error("text recognition failed: {0}")]
    Recognition(String),
    /// The recognized text could not be persisted.
    #[error("failed to write output file: {0}")]
    Write(String),
    /// Copy was requested while no text is displayed.
    #[error("no text to copy")]
    EmptyContent,
    /// The OS clipboard could not be written.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

impl WorkflowError {
    /// Advisory errors are user precondition slips: surfaced inline,
    /// never through a blocking alert.
    pub fn is_advisory(&self) -> bool {
        matches!(self, Self::NoFileSelected | Self::EmptyContent)
    }
}
