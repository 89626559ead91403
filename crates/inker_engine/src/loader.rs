use std::path::Path;

use image::DynamicImage;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("cannot decode {path}: {message}")]
    Decode { path: String, message: String },
}

/// Decodes a file path into raw pixel data.
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<DynamicImage, LoadError>;
}

/// Production loader backed by the `image` crate. There is no existence or
/// readability pre-check; the decoder's own message is what the user sees.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileImageLoader;

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &Path) -> Result<DynamicImage, LoadError> {
        image::open(path).map_err(|err| LoadError::Decode {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}
