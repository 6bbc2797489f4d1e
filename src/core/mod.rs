// hdresize/src/core/mod.rs
pub mod processor;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;
pub const DEFAULT_QUALITY: u8 = 75;
pub const DEFAULT_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "tiff"];

const MAX_DIMENSION: u32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeAlgorithm {
    Nearest,
    Bilinear,
    #[default]
    Bicubic,
    Lanczos3,
}

/// How directory entries are recognized as images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSelection {
    /// Regular files whose lowercased name ends in a recognized extension.
    #[default]
    Extension,
    /// Regular files whose content is a decodable image, whatever the name.
    Probe,
}

/// What `run` does when a single file fails to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    #[default]
    FailFast,
    ContinueOnError,
}

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub source_dir: PathBuf,
    pub target_width: u32,
    pub target_height: u32,
    pub recognized_extensions: BTreeSet<String>,
    pub algorithm: ResizeAlgorithm,
    pub quality: u8,
    pub selection: ImageSelection,
    pub on_error: ErrorPolicy,
}

impl BatchConfig {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            target_width: DEFAULT_WIDTH,
            target_height: DEFAULT_HEIGHT,
            recognized_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            algorithm: ResizeAlgorithm::default(),
            quality: DEFAULT_QUALITY,
            selection: ImageSelection::default(),
            on_error: ErrorPolicy::default(),
        }
    }

    /// Configuration rooted at the process current directory.
    pub fn for_current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.target_width = width;
        self.target_height = height;
        self
    }

    pub fn with_algorithm(mut self, algorithm: ResizeAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_selection(mut self, selection: ImageSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_error_policy(mut self, on_error: ErrorPolicy) -> Self {
        self.on_error = on_error;
        self
    }

    /// Replaces the recognized extensions. Leading dots and case are ignored.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.recognized_extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    pub fn output_dir(&self) -> PathBuf {
        self.source_dir
            .join(crate::utils::output_dir_name(self.target_width, self.target_height))
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 || self.target_height == 0 {
            return Err(ResizeError::InvalidParameter(
                "Target width and height must both be non-zero".to_string(),
            ));
        }

        if self.target_width > MAX_DIMENSION || self.target_height > MAX_DIMENSION {
            return Err(ResizeError::InvalidParameter(
                "Dimensions too large (max 100,000 pixels)".to_string(),
            ));
        }

        if self.quality == 0 || self.quality > 100 {
            return Err(ResizeError::InvalidParameter(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        if self.selection == ImageSelection::Extension && self.recognized_extensions.is_empty() {
            return Err(ResizeError::InvalidParameter(
                "At least one image extension must be recognized".to_string(),
            ));
        }

        validate_source_dir(&self.source_dir)
    }
}

fn validate_source_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ResizeError::InvalidParameter(format!(
            "Source directory does not exist: {}",
            path.display()
        )));
    }

    if !path.is_dir() {
        return Err(ResizeError::InvalidParameter(format!(
            "Source path is not a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// A file that was written to the output directory.
#[derive(Debug, Clone)]
pub struct Converted {
    pub file_name: String,
    pub source_dimensions: (u32, u32),
    pub output_path: PathBuf,
    pub bytes_written: u64,
}

#[derive(Error, Debug)]
#[error("Failed to convert {file_name}: {source}")]
pub struct ConversionError {
    pub file_name: String,
    #[source]
    pub source: ResizeError,
}

#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub converted: Vec<Converted>,
    pub failed: Vec<ConversionError>,
    pub skipped: usize,
}

impl ConversionSummary {
    pub fn succeeded(&self) -> usize {
        self.converted.len()
    }

    pub fn attempted(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Run aborted: {0}")]
    Aborted(Box<ConversionError>),
}

pub type Result<T> = std::result::Result<T, ResizeError>;
