// hdresize/src/cli.rs
use crate::core::{
    BatchConfig, ErrorPolicy, ImageSelection, ResizeAlgorithm, Result, DEFAULT_HEIGHT,
    DEFAULT_QUALITY, DEFAULT_WIDTH,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Resize every image in a directory to one fixed resolution.
///
/// With no arguments, converts the images in the current directory to
/// 1920x1080 and writes them to `output_1920x1080/`.
#[derive(Parser, Debug)]
#[command(name = "hdresize", version, about)]
pub struct Cli {
    /// Directory to read images from [default: current directory]
    pub dir: Option<PathBuf>,

    /// Target width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Target height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Resampling filter
    #[arg(short, long, value_enum, default_value_t = Algorithm::Bicubic)]
    pub algorithm: Algorithm,

    /// JPEG quality (1-100)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY)]
    pub quality: u8,

    /// Recognized extension, repeatable (replaces the defaults)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Detect images by content instead of by extension
    #[arg(long)]
    pub probe: bool,

    /// Keep converting after a file fails
    #[arg(short, long)]
    pub keep_going: bool,

    /// Show a progress bar
    #[arg(long)]
    pub progress: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

impl From<Algorithm> for ResizeAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Nearest => ResizeAlgorithm::Nearest,
            Algorithm::Bilinear => ResizeAlgorithm::Bilinear,
            Algorithm::Bicubic => ResizeAlgorithm::Bicubic,
            Algorithm::Lanczos3 => ResizeAlgorithm::Lanczos3,
        }
    }
}

impl Cli {
    /// Builds the run configuration. The current directory is only looked up
    /// when no directory was given.
    pub fn into_config(self) -> Result<BatchConfig> {
        let base = match self.dir {
            Some(dir) => BatchConfig::new(dir),
            None => BatchConfig::for_current_dir()?,
        };

        let mut config = base
            .with_resolution(self.width, self.height)
            .with_algorithm(self.algorithm.into())
            .with_quality(self.quality)
            .with_selection(if self.probe {
                ImageSelection::Probe
            } else {
                ImageSelection::Extension
            })
            .with_error_policy(if self.keep_going {
                ErrorPolicy::ContinueOnError
            } else {
                ErrorPolicy::FailFast
            });

        if !self.extensions.is_empty() {
            config = config.with_extensions(self.extensions);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_match_defaults() {
        let cli = Cli::try_parse_from(["hdresize"]).unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.source_dir, std::env::current_dir().unwrap());
        assert_eq!((config.target_width, config.target_height), (1920, 1080));
        assert_eq!(config.algorithm, ResizeAlgorithm::Bicubic);
        assert_eq!(config.selection, ImageSelection::Extension);
        assert_eq!(config.on_error, ErrorPolicy::FailFast);
        assert_eq!(config.recognized_extensions.len(), 5);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "hdresize", "pics", "--width", "640", "--height", "480", "-a", "lanczos3", "--ext",
            "webp", "--ext", ".GIF", "--probe", "--keep-going",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.source_dir, PathBuf::from("pics"));
        assert_eq!(config.output_dir(), PathBuf::from("pics/output_640x480"));
        assert_eq!(config.algorithm, ResizeAlgorithm::Lanczos3);
        assert_eq!(config.selection, ImageSelection::Probe);
        assert_eq!(config.on_error, ErrorPolicy::ContinueOnError);
        let exts: Vec<&str> = config.recognized_extensions.iter().map(String::as_str).collect();
        assert_eq!(exts, vec!["gif", "webp"]);
    }
}
