use std::path::PathBuf;
use std::process;

use clap::Parser;

use background_blur_core::compositing::infrastructure::privacy_compositor::PrivacyCompositor;
use background_blur_core::detection::infrastructure::scripted_detector::ScriptedDetector;
use background_blur_core::pipeline::blur_background_use_case::BlurBackgroundUseCase;
use background_blur_core::pipeline::infrastructure::threaded_frame_source::ThreadedFrameSource;
use background_blur_core::shared::constants::{BLUR_KERNEL_SIZE, CONFIDENCE_THRESHOLD};
use background_blur_core::video::domain::frame_source::FrameSource;
use background_blur_core::video::infrastructure::image_file_sink::ImageFileSink;
use background_blur_core::video::infrastructure::image_file_source::ImageFileSource;

/// Privacy background blurring: keeps detected faces sharp, blurs the rest.
#[derive(Parser)]
#[command(name = "background-blur")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file.
    output: PathBuf,

    /// JSON file with detection records in normalized coordinates
    /// (array of {confidence, left, top, right, bottom}).
    #[arg(long)]
    detections: PathBuf,

    /// Detection confidence threshold (0.0-1.0).
    #[arg(long, default_value_t = CONFIDENCE_THRESHOLD)]
    confidence: f32,

    /// Gaussian blur kernel size (must be odd).
    #[arg(long, default_value_t = BLUR_KERNEL_SIZE)]
    blur_strength: usize,

    /// Read frames on a dedicated acquisition thread.
    #[arg(long)]
    threaded_capture: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let detector = Box::new(ScriptedDetector::from_path(&cli.detections)?);
    let compositor = Box::new(PrivacyCompositor::new(cli.blur_strength));
    let source: Box<dyn FrameSource> = if cli.threaded_capture {
        Box::new(ThreadedFrameSource::new(Box::new(ImageFileSource::new())))
    } else {
        Box::new(ImageFileSource::new())
    };
    let sink = Box::new(ImageFileSink::new());

    let mut use_case =
        BlurBackgroundUseCase::new(source, sink, detector, compositor, cli.confidence);
    let frames = use_case.execute(&cli.input, &cli.output)?;
    log::info!("Wrote {frames} frame(s) to {}", cli.output.display());

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.blur_strength % 2 == 0 {
        return Err("--blur-strength must be odd".into());
    }
    if !(0.0..=1.0).contains(&cli.confidence) {
        return Err("--confidence must be between 0.0 and 1.0".into());
    }
    Ok(())
}
