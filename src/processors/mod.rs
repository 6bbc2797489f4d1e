// hdresize/src/processors/mod.rs
mod batch;
mod encoder;
mod loader;
mod resizer;

pub use batch::DirectoryScanner;
pub use encoder::Encoder;
pub use loader::{LoadedImage, Loader};
pub use resizer::Resizer;

