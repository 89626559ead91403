use std::path::{Path, PathBuf};

/// The one mutable "currently selected file" of the workflow.
///
/// Selecting never validates the path; validity is discovered when the
/// conversion tries to decode it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: Option<PathBuf>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally replaces the stored path.
    pub fn select(&mut self, path: impl Into<PathBuf>) {
        self.selected = Some(path.into());
    }

    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }
}
