use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::thread;

use clap::{Parser, ValueEnum};

use facemask_core::assets::asset_store::{AssetError, AssetStore};
use facemask_core::encoding::domain::output_format::OutputFormat;
use facemask_core::pipeline::mask_faces_use_case::MaskFacesUseCase;

mod server;

/// HTTP function that covers every detected face in an uploaded image with a mask.
#[derive(Parser, Debug)]
#[command(name = "facemask")]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Directory with `mask.png` and the detector model, replacing the built-in assets.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Response image encoding.
    #[arg(long, value_enum, default_value_t = Format::Jpeg)]
    output_format: Format,

    /// Worker threads (defaults to available parallelism).
    #[arg(long)]
    workers: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum Format {
    Jpeg,
    Png,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Jpeg => OutputFormat::Jpeg,
            Format::Png => OutputFormat::Png,
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let assets = load_assets(cli.assets.as_deref())?;
    log::info!(
        "Mask {}x{}, detector model {} bytes",
        assets.mask().width(),
        assets.mask().height(),
        assets.model_len()
    );
    let use_case = Arc::new(MaskFacesUseCase::from_assets(
        &assets,
        cli.output_format.into(),
    ));
    log::info!("Responding with {}", OutputFormat::from(cli.output_format).content_type());

    let workers = cli.workers.unwrap_or_else(default_workers);
    server::serve(&cli.listen, use_case, workers)
}

fn load_assets(dir: Option<&Path>) -> Result<AssetStore, AssetError> {
    match dir {
        Some(dir) => {
            log::info!("Loading assets from {}", dir.display());
            AssetStore::load(dir)
        }
        None => AssetStore::bundled(),
    }
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.workers == Some(0) {
        return Err("Workers must be at least 1".into());
    }
    if cli.listen.trim().is_empty() {
        return Err("Listen address must not be empty".into());
    }
    Ok(())
}

fn default_workers() -> usize {
    thread::available_parallelism().map_or(1, |n| n.get())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("facemask").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.listen, "0.0.0.0:8080");
        assert!(cli.assets.is_none());
        assert_eq!(cli.output_format, Format::Jpeg);
        assert!(cli.workers.is_none());
        assert!(validate(&cli).is_ok());
    }

    #[rstest]
    #[case("jpeg", OutputFormat::Jpeg)]
    #[case("png", OutputFormat::Png)]
    fn test_output_format(#[case] arg: &str, #[case] expected: OutputFormat) {
        let cli = parse(&["--output-format", arg]);
        assert_eq!(OutputFormat::from(cli.output_format), expected);
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        assert!(Cli::try_parse_from(["facemask", "--output-format", "gif"]).is_err());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let cli = parse(&["--workers", "0"]);
        assert!(validate(&cli).is_err());
    }

    #[test]
    fn test_assets_override_parsed() {
        let cli = parse(&["--assets", "/srv/assets"]);
        assert_eq!(cli.assets, Some(PathBuf::from("/srv/assets")));
    }

    #[test]
    fn test_builtin_assets_used_without_override() {
        let assets = load_assets(None).unwrap();
        assert!(assets.model_len() > 0);
    }

    #[test]
    fn test_missing_assets_dir_is_fatal() {
        let result = load_assets(Some(Path::new("/nonexistent/facemask-assets")));
        assert!(matches!(result, Err(AssetError::Read { .. })));
    }

    #[test]
    fn test_default_workers_positive() {
        assert!(default_workers() >= 1);
    }
}
