// hdresize/src/processors/encoder.rs
use crate::core::{ResizeError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageFormat};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct Encoder {
    quality: u8,
}

impl Encoder {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Picks the encoder from `path`'s extension, falling back to `source_format`
    /// when the extension names no known format.
    pub fn output_format(path: &Path, source_format: Option<ImageFormat>) -> Result<ImageFormat> {
        ImageFormat::from_path(path)
            .ok()
            .or(source_format)
            .ok_or_else(|| {
                ResizeError::UnsupportedFormat(format!(
                    "No encoder for output path: {}",
                    path.display()
                ))
            })
    }

    /// Writes `image` to `path`, replacing any existing file, and returns the bytes written.
    pub fn save(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<u64> {
        log::debug!(
            "Saving image to {} with format {:?}, quality: {}",
            path.display(),
            format,
            self.quality
        );

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let encoded = match format {
            ImageFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut writer, self.quality);
                jpeg_compatible(image).write_with_encoder(encoder)
            }
            ImageFormat::Bmp => eight_bit(image).write_to(&mut writer, format),
            _ => image.write_to(&mut writer, format),
        };
        encoded.map_err(|source| ResizeError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush()?;

        let size = std::fs::metadata(path)?.len();
        log::debug!(
            "Saved image: {} ({})",
            path.display(),
            crate::utils::format_file_size(size)
        );
        Ok(size)
    }
}

/// JPEG only carries 8-bit grey or RGB, so anything else is flattened first.
fn jpeg_compatible(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image.color() {
        ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(image),
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}

fn eight_bit(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image.color() {
        ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => {
            Cow::Borrowed(image)
        }
        _ => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
    }
}
