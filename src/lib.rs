mod cli;
mod core;
mod processors;
mod utils;

pub use cli::{Algorithm, Cli};
pub use self::core::processor::BatchResizer;
pub use self::core::{
    BatchConfig, ConversionError, ConversionSummary, Converted, ErrorPolicy, ImageSelection,
    ResizeAlgorithm, ResizeError, Result, DEFAULT_EXTENSIONS, DEFAULT_HEIGHT, DEFAULT_QUALITY,
    DEFAULT_WIDTH,
};
pub use processors::{DirectoryScanner, Encoder, LoadedImage, Loader, Resizer};
pub use utils::{ensure_output_directory, format_file_size, is_image, output_dir_name};
