//! Inker engine: the image-to-text conversion workflow.
mod clipboard;
mod controller;
mod loader;
mod output;
mod recognize;
mod selection;
mod types;

pub use clipboard::{Clipboard, ClipboardBridge, ClipboardError, SystemClipboard};
pub use controller::{ConversionController, ProgressSink};
pub use loader::{FileImageLoader, ImageLoader, LoadError};
pub use output::{derive_output_path, OutputWriter, PersistError};
pub use recognize::{
    RecognitionError, TesseractCliRecognizer, TextRecognizer, RECOGNITION_LANGUAGES,
};
pub use selection::SelectionState;
pub use types::{ConversionOutcome, ConversionResult, WorkflowError};
