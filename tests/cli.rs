use assert_fs::prelude::*;
use assert_fs::TempDir;
use image::{ImageFormat, RgbImage};
use std::process::Command;

fn hdresize() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hdresize"))
}

#[test]
fn no_arguments_converts_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    RgbImage::new(16, 9)
        .save_with_format(temp_dir.path().join("frame.png"), ImageFormat::Png)
        .unwrap();
    temp_dir.child("notes.txt").write_str("ignored").unwrap();

    let output = hdresize()
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Converted: frame.png\n✔ All images converted to 1920x1080.\n"
    );
    let converted = temp_dir.path().join("output_1920x1080").join("frame.png");
    assert_eq!(image::image_dimensions(&converted).unwrap(), (1920, 1080));
    assert!(!temp_dir.path().join("output_1920x1080").join("notes.txt").exists());
}

#[test]
fn invalid_image_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("badimage.png").write_str("garbage").unwrap();

    let output = hdresize()
        .arg(temp_dir.path())
        .args(["--width", "32", "--height", "18"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("All images converted"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("badimage.png"));
}

#[test]
fn keep_going_reports_failures_and_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("badimage.png").write_str("garbage").unwrap();
    RgbImage::new(8, 8)
        .save_with_format(temp_dir.path().join("ok.png"), ImageFormat::Png)
        .unwrap();

    let output = hdresize()
        .arg(temp_dir.path())
        .args(["--width", "32", "--height", "18", "--keep-going"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Converted: ok.png"));
    assert!(stdout.contains("✘ 1 of 2 images failed to convert to 32x18."));
    assert!(temp_dir.path().join("output_32x18").join("ok.png").exists());
}

#[test]
fn rejects_zero_dimensions() {
    let temp_dir = TempDir::new().unwrap();

    let output = hdresize()
        .arg(temp_dir.path())
        .args(["--width", "0"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!temp_dir.path().join("output_0x1080").exists());
}

#[cfg(target_os = "linux")]
#[test]
fn explicit_directory_works_without_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("src").create_dir_all().unwrap();
    temp_dir.child("gone").create_dir_all().unwrap();
    RgbImage::new(8, 8)
        .save_with_format(temp_dir.path().join("src").join("ok.png"), ImageFormat::Png)
        .unwrap();

    let gone = temp_dir.path().join("gone");
    let script = format!(
        "cd '{gone}' && rmdir '{gone}' && exec '{bin}' '{src}' --width 32 --height 18",
        gone = gone.display(),
        bin = env!("CARGO_BIN_EXE_hdresize"),
        src = temp_dir.path().join("src").display(),
    );
    let output = Command::new("sh").arg("-c").arg(script).output().unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(temp_dir.path().join("src/output_32x18/ok.png").exists());
}
