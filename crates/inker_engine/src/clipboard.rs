use thiserror::Error;

use crate::WorkflowError;
use inker_logging::inker_info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard backend unavailable: {0}")]
    Backend(String),
}

/// Seam over the OS clipboard so tests can observe copies.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Production clipboard backed by `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner =
            arboard::Clipboard::new().map_err(|err| ClipboardError::Backend(err.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_string())
            .map_err(|err| ClipboardError::Backend(err.to_string()))
    }
}

/// Copies displayed text to the clipboard. Empty text is rejected up front
/// and leaves the clipboard untouched; repeated copies of the same text are
/// idempotent.
pub struct ClipboardBridge<C> {
    sink: C,
}

impl<C: Clipboard> ClipboardBridge<C> {
    pub fn new(sink: C) -> Self {
        Self { sink }
    }

    /// Hands the sink back, e.g. for inspection in tests.
    pub fn into_inner(self) -> C {
        self.sink
    }

    pub fn copy(&mut self, text: &str) -> Result<(), WorkflowError> {
        if text.is_empty() {
            return Err(WorkflowError::EmptyContent);
        }
        self.sink
            .set_text(text)
            .map_err(|err| WorkflowError::Clipboard(err.to_string()))?;
        inker_info!("copied {} bytes to clipboard", text.len());
        Ok(())
    }
}
