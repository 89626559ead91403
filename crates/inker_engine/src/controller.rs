use crate::output::{derive_output_path, OutputWriter};
use crate::{
    ConversionOutcome, ConversionResult, ImageLoader, SelectionState, TextRecognizer,
    WorkflowError, RECOGNITION_LANGUAGES,
};
use inker_logging::{inker_info, inker_warn};

/// Lets the presentation layer paint a "converting" status before the
/// blocking work starts.
pub trait ProgressSink {
    /// Called exactly once per conversion, after the selection check and
    /// before the loader runs. No further yielding happens afterwards.
    fn converting_started(&mut self);
}

/// Orchestrates selection -> load -> recognize -> persist.
///
/// Runs synchronously on the calling thread; the loader and recognizer
/// block it for their full duration.
pub struct ConversionController<L, R> {
    loader: L,
    recognizer: R,
    writer: OutputWriter,
}

impl<L: ImageLoader, R: TextRecognizer> ConversionController<L, R> {
    pub fn new(loader: L, recognizer: R) -> Self {
        Self {
            loader,
            recognizer,
            writer: OutputWriter::new(),
        }
    }

    /// Converts the currently selected image to text.
    ///
    /// Persisting the output file is a side effect of success: its failure
    /// is carried in `ConversionOutcome::persisted` and never revokes the
    /// recognized text. An empty recognized string is a success.
    pub fn convert(
        &self,
        state: &SelectionState,
        sink: &mut dyn ProgressSink,
    ) -> Result<ConversionOutcome, WorkflowError> {
        let source = state.selected().ok_or(WorkflowError::NoFileSelected)?;
        sink.converting_started();

        inker_info!("converting {}", source.display());
        let image = self
            .loader
            .load(source)
            .map_err(|err| WorkflowError::Load(err.to_string()))?;
        let text = self
            .recognizer
            .recognize(&image, &RECOGNITION_LANGUAGES)
            .map_err(|err| WorkflowError::Recognition(err.to_string()))?;

        let result = ConversionResult {
            source_path: source.to_path_buf(),
            text,
        };

        let output_path = derive_output_path(source);
        let persisted = match self.writer.persist(&output_path, &result.text) {
            Ok(()) => {
                inker_info!("output saved to {}", output_path.display());
                Ok(output_path)
            }
            Err(err) => {
                inker_warn!("could not save {}: {}", output_path.display(), err);
                Err(WorkflowError::Write(err.to_string()))
            }
        };

        Ok(ConversionOutcome { result, persisted })
    }
}
