use std::path::PathBuf;
use std::process::Command;

use image::{DynamicImage, ImageFormat};
use thiserror::Error;

use inker_logging::inker_debug;

/// Language models handed to the recognition engine, joined with `+`.
/// The pair is fixed; per-conversion language selection is out of scope.
pub const RECOGNITION_LANGUAGES: [&str; 2] = ["jpn", "eng"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognitionError {
    #[error("recognition engine unavailable: {0}")]
    Unavailable(String),
    #[error("recognition engine failed: {0}")]
    Engine(String),
}

/// Maps decoded pixel data plus a language set to recognized text.
/// An empty recognized string is a valid success.
pub trait TextRecognizer {
    fn recognize(
        &self,
        image: &DynamicImage,
        languages: &[&str],
    ) -> Result<String, RecognitionError>;
}

/// Production recognizer that shells out to the `tesseract` CLI.
///
/// The decoded image is staged as a temporary PNG and the engine writes the
/// recognized text to stdout.
#[derive(Debug, Clone)]
pub struct TesseractCliRecognizer {
    binary: PathBuf,
}

impl Default for TesseractCliRecognizer {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("tesseract"),
        }
    }
}

impl TesseractCliRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the engine binary, e.g. for a non-PATH install.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl TextRecognizer for TesseractCliRecognizer {
    fn recognize(
        &self,
        image: &DynamicImage,
        languages: &[&str],
    ) -> Result<String, RecognitionError> {
        let staged = tempfile::Builder::new()
            .prefix("inker_ocr_")
            .suffix(".png")
            .tempfile()
            .map_err(|err| RecognitionError::Engine(format!("could not stage image: {err}")))?;
        image
            .save_with_format(staged.path(), ImageFormat::Png)
            .map_err(|err| RecognitionError::Engine(format!("could not stage image: {err}")))?;

        let lang = languages.join("+");
        inker_debug!("running {:?} with languages {}", self.binary, lang);

        let output = Command::new(&self.binary)
            .arg(staged.path())
            .arg("stdout")
            .arg("-l")
            .arg(&lang)
            .args(["--oem", "3", "--psm", "3"])
            .output()
            .map_err(|err| RecognitionError::Unavailable(err.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RecognitionError::Engine(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
