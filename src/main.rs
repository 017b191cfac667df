use anyhow::{Context, Result};
use centre_colour::{CentreColourExtractor, ImageLocator, ImageProcessor, DEFAULT_INITIAL_CROP_SIZE};
use clap::Parser;
use log::{debug, LevelFilter};
use std::{path::PathBuf, process::ExitCode};

/// Extract colour as hexcode and send unprefixed to stdout.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Image file name, expected in the working directory. The extension is optional; only .jpeg
    /// and .png files with RGB or RGBA pixels are supported
    image: String,

    /// Side in pixels of the first centre square sampled
    #[arg(short, long, default_value_t = DEFAULT_INITIAL_CROP_SIZE)]
    crop_size: u32,

    /// Look for the image in this directory instead of the working directory
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Log each sampling step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = env_logger::Builder::new();
    logger.filter_level(LevelFilter::Warn).parse_default_env();
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match run(&args) {
        Ok(colour) => {
            println!("{colour}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Something went wrong: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let locator = match &args.dir {
        Some(dir) => ImageLocator::new().in_dir(dir),
        None => ImageLocator::new(),
    };

    let extractor = CentreColourExtractor::new().initial_crop_size(args.crop_size);
    let processor = ImageProcessor::with_locator(&args.image, &locator, extractor)
        .with_context(|| format!("resolving image {:?}", args.image))?;

    debug!(
        "sampling {} from a {}px centre square",
        processor.image_path().display(),
        processor.extractor().crop_size()
    );

    processor
        .get_colour()
        .with_context(|| format!("extracting colour from {}", processor.image_path().display()))
}
