// hdresize/src/utils/mod.rs
use crate::core::{ResizeError, Result};
use std::collections::BTreeSet;
use std::path::Path;

/// Name of the output subdirectory for a target resolution, e.g. `output_1920x1080`.
pub fn output_dir_name(width: u32, height: u32) -> String {
    format!("output_{}x{}", width, height)
}

/// Creates `path` and any missing parents. An existing directory is reused.
pub fn ensure_output_directory(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(ResizeError::InvalidParameter(format!(
            "Output path exists but is not a directory: {}",
            path.display()
        )));
    }

    // create_dir_all already succeeds when another process wins the race
    std::fs::create_dir_all(path)?;
    log::debug!("Output directory ready: {}", path.display());
    Ok(())
}

/// True iff the lowercased file name ends with `.<ext>` for one of `extensions`.
pub fn is_image(file_name: &str, extensions: &BTreeSet<String>) -> bool {
    let lower = file_name.to_lowercase();
    extensions.iter().any(|ext| {
        lower
            .strip_suffix(ext.as_str())
            .map(|rest| rest.ends_with('.'))
            .unwrap_or(false)
    })
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.2} {}", size, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_EXTENSIONS;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    fn defaults() -> BTreeSet<String> {
        DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn is_image_ignores_case() {
        let exts = defaults();

        assert!(is_image("photo.JPG", &exts));
        assert!(is_image("scan.Tiff", &exts));
        assert!(is_image("a.b.jpeg", &exts));
        assert!(!is_image("notes.txt", &exts));
        assert!(!is_image("photo.tif", &exts));
        assert!(!is_image("png", &exts));
        assert!(!is_image("archivepng", &exts));
    }

    #[test]
    fn output_dir_name_uses_resolution() {
        assert_eq!(output_dir_name(1920, 1080), "output_1920x1080");
        assert_eq!(output_dir_name(640, 480), "output_640x480");
    }

    #[test]
    fn ensure_output_directory_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("nested").join("output_1920x1080");

        ensure_output_directory(&out).unwrap();
        ensure_output_directory(&out).unwrap();

        assert!(out.is_dir());
    }

    #[test]
    fn ensure_output_directory_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.child("output_1920x1080");
        file.write_str("not a directory").unwrap();

        assert!(ensure_output_directory(file.path()).is_err());
    }

    #[test]
    fn format_file_size_picks_unit() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
    }
}
