// hdresize/src/core/processor.rs
use super::{BatchConfig, ConversionError, ConversionSummary, Converted, ErrorPolicy, ResizeError, Result};
use crate::processors::{DirectoryScanner, Encoder, Loader, Resizer};
use image::GenericImageView;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct BatchResizer {
    config: BatchConfig,
    output_dir: PathBuf,
    scanner: DirectoryScanner,
    loader: Loader,
    resizer: Resizer,
    encoder: Encoder,
    show_progress: bool,
}

impl BatchResizer {
    pub fn new(config: BatchConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            output_dir: config.output_dir(),
            scanner: DirectoryScanner::new(config.selection, config.recognized_extensions.clone()),
            loader: Loader::new(),
            resizer: Resizer::new(config.algorithm),
            encoder: Encoder::new(config.quality),
            config,
            show_progress: false,
        })
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Converts every image in the source directory, writing console lines to stdout.
    pub fn run(&self) -> Result<ConversionSummary> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<ConversionSummary> {
        crate::utils::ensure_output_directory(&self.output_dir)?;

        let entries = self.scanner.list_entries(&self.config.source_dir)?;
        let (images, skipped) = self.scanner.select(entries);

        log::debug!(
            "Converting {} images from {} to {}x{}",
            images.len(),
            self.config.source_dir.display(),
            self.config.target_width,
            self.config.target_height
        );

        let pb = self.create_progress_bar(images.len());
        let mut summary = ConversionSummary {
            skipped,
            ..Default::default()
        };

        for path in &images {
            match self.convert_one(path) {
                Ok(converted) => {
                    pb.suspend(|| writeln!(out, "Converted: {}", converted.file_name))?;
                    summary.converted.push(converted);
                }
                Err(err) => match self.config.on_error {
                    ErrorPolicy::FailFast => {
                        pb.abandon();
                        return Err(ResizeError::Aborted(Box::new(err)));
                    }
                    ErrorPolicy::ContinueOnError => {
                        log::warn!("{}", err);
                        summary.failed.push(err);
                    }
                },
            }
            pb.inc(1);
        }

        pb.finish_and_clear();

        if summary.is_success() {
            writeln!(
                out,
                "✔ All images converted to {}x{}.",
                self.config.target_width, self.config.target_height
            )?;
        } else {
            writeln!(
                out,
                "✘ {} of {} images failed to convert to {}x{}.",
                summary.failed.len(),
                summary.attempted(),
                self.config.target_width,
                self.config.target_height
            )?;
        }

        Ok(summary)
    }

    /// Decodes `input`, stretches it to the target resolution and writes it
    /// under the output directory with the same file name.
    pub fn convert_one(&self, input: &Path) -> std::result::Result<Converted, ConversionError> {
        let file_name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());

        self.try_convert(input, &file_name)
            .map_err(|source| ConversionError { file_name, source })
    }

    fn try_convert(&self, input: &Path, file_name: &str) -> Result<Converted> {
        let output_path = match input.file_name() {
            Some(name) => self.output_dir.join(name),
            None => {
                return Err(ResizeError::InvalidParameter(format!(
                    "Invalid file name: {}",
                    input.display()
                )))
            }
        };

        let loaded = self.loader.load(input)?;
        let source_dimensions = loaded.image.dimensions();
        let format = Encoder::output_format(&output_path, loaded.format)?;

        let resized = self.resizer.resize_exact(
            loaded.image,
            self.config.target_width,
            self.config.target_height,
        );
        let bytes_written = self.encoder.save(&resized, &output_path, format)?;

        Ok(Converted {
            file_name: file_name.to_string(),
            source_dimensions,
            output_path,
            bytes_written,
        })
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        match ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("#>-")),
            Err(e) => log::debug!("Falling back to default progress style: {}", e),
        }
        pb
    }
}
