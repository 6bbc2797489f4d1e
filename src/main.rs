use anyhow::{bail, Context};
use clap::Parser;
use hdresize::{BatchResizer, Cli};
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let show_progress = cli.progress;
    let config = cli.into_config().context("Failed to resolve the source directory")?;

    let resizer = BatchResizer::new(config)
        .context("Invalid configuration")?
        .with_progress(show_progress);
    let summary = resizer.run()?;

    log::debug!(
        "Converted {} images into {} ({} entries skipped)",
        summary.succeeded(),
        resizer.output_dir().display(),
        summary.skipped
    );

    if !summary.is_success() {
        for failure in &summary.failed {
            eprintln!("{}", failure);
        }
        bail!("{} images failed to convert", summary.failed.len());
    }

    Ok(())
}
