// hdresize/src/processors/loader.rs
use crate::core::{ResizeError, Result};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::path::Path;

/// A decoded source image and the container format it was read from.
pub struct LoadedImage {
    pub image: DynamicImage,
    pub format: Option<ImageFormat>,
}

#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<LoadedImage> {
        log::debug!("Loading image from: {}", path.display());

        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let format = reader.format();
        let image = reader.decode().map_err(|source| ResizeError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let (width, height) = image.dimensions();
        log::debug!(
            "Loaded image: {}x{} pixels, color: {:?}, format: {:?}",
            width,
            height,
            image.color(),
            format
        );

        Ok(LoadedImage { image, format })
    }

    /// Checks whether `path` can be opened as an image without decoding pixel data.
    pub fn probe(&self, path: &Path) -> bool {
        let reader = match ImageReader::open(path).and_then(|r| r.with_guessed_format()) {
            Ok(reader) => reader,
            Err(e) => {
                log::debug!("Cannot open {}: {}", path.display(), e);
                return false;
            }
        };

        if reader.format().is_none() {
            return false;
        }

        match reader.into_dimensions() {
            Ok((width, height)) => width > 0 && height > 0,
            Err(e) => {
                log::debug!("Not a decodable image {}: {}", path.display(), e);
                false
            }
        }
    }
}
