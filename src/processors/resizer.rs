// hdresize/src/processors/resizer.rs
use crate::core::ResizeAlgorithm;
use image::{imageops::FilterType, DynamicImage, GenericImageView};

pub struct Resizer {
    algorithm: ResizeAlgorithm,
}

impl Resizer {
    pub fn new(algorithm: ResizeAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Scales `image` to exactly `width` x `height`, ignoring its aspect ratio.
    pub fn resize_exact(&self, image: DynamicImage, width: u32, height: u32) -> DynamicImage {
        let (orig_width, orig_height) = image.dimensions();

        if orig_width == width && orig_height == height {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image;
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{} ({:?})",
            orig_width,
            orig_height,
            width,
            height,
            self.algorithm
        );

        image.resize_exact(width, height, self.filter_type())
    }

    pub fn filter_type(&self) -> FilterType {
        match self.algorithm {
            ResizeAlgorithm::Nearest => FilterType::Nearest,
            ResizeAlgorithm::Bilinear => FilterType::Triangle,
            ResizeAlgorithm::Bicubic => FilterType::CatmullRom,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}
