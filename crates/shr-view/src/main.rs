//! Apple IIGS Super Hi-Res screen viewer.
//!
//! Decodes a 32K SHR screen file and shows it in a window, or in headless
//! mode converts it to PNG or packed pixels. Set `SHR_VIEW_LOG` (e.g.
//! `SHR_VIEW_LOG=debug`) to change log verbosity.

mod capture;
mod config;
mod error;
mod inspect;
#[cfg(feature = "window")]
mod window;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use apple_vgc::format_shr;
use apple_vgc::{DecodeOptions, DecodedRaster, PixelFormat, decode_with};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use config::ViewerConfig;
use error::ViewerError;

// ---------------------------------------------------------------------------
// CLI argument parsing
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(version, about = "View or convert Apple IIGS Super Hi-Res screens")]
struct Cli {
    /// SHR screen file (exactly 32768 bytes)
    input: PathBuf,

    /// Decode without opening a window
    #[arg(long)]
    headless: bool,

    /// Save the decoded screen as an RGBA PNG
    #[arg(long, value_name = "PNG")]
    screenshot: Option<PathBuf>,

    /// Save the decoded screen as headerless packed pixels
    #[arg(long, value_name = "FILE")]
    raw: Option<PathBuf>,

    /// Pixel layout for --raw
    #[arg(long, value_enum, default_value_t = RawFormat::Rgba)]
    format: RawFormat,

    /// Print the palette bank and scanline control summary
    #[arg(long)]
    palettes: bool,

    /// Window scale factor
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
    scale: u32,

    /// Honour the SCB colour-fill bit
    #[arg(long)]
    fill_mode: bool,

    /// Decode on the calling thread only
    #[arg(long)]
    single_threaded: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RawFormat {
    Rgb,
    Rgba,
    Bgra,
}

impl From<RawFormat> for PixelFormat {
    fn from(value: RawFormat) -> Self {
        match value {
            RawFormat::Rgb => Self::Rgb8,
            RawFormat::Rgba => Self::Rgba8,
            RawFormat::Bgra => Self::Bgra8,
        }
    }
}

impl From<Cli> for ViewerConfig {
    fn from(cli: Cli) -> Self {
        let format = PixelFormat::from(cli.format);
        Self {
            input: cli.input,
            headless: cli.headless,
            screenshot: cli.screenshot,
            raw: cli.raw.map(|path| (path, format)),
            show_palettes: cli.palettes,
            scale: cli.scale,
            decode: DecodeOptions {
                fill_mode: cli.fill_mode,
                parallel: !cli.single_threaded,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Run modes
// ---------------------------------------------------------------------------

fn load(config: &ViewerConfig) -> Result<DecodedRaster, ViewerError> {
    let path = &config.input;
    let data = fs::read(path).map_err(|source| ViewerError::Read {
        path: path.clone(),
        source,
    })?;

    let image = format_shr::extract(&data).map_err(|source| ViewerError::Format {
        path: path.clone(),
        source,
    })?;

    if config.show_palettes {
        inspect::print_palettes(&image, &mut io::stdout().lock()).map_err(|source| {
            ViewerError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            }
        })?;
    }

    let raster = decode_with(&image, config.decode);
    tracing::info!("Decoded {}", path.display());
    Ok(raster)
}

fn export(raster: &DecodedRaster, config: &ViewerConfig) -> Result<(), ViewerError> {
    if let Some(path) = &config.screenshot {
        capture::save_png(raster, path)?;
        tracing::info!("Screenshot saved to {}", path.display());
    }
    if let Some((path, format)) = &config.raw {
        capture::save_raw(raster, path, *format)?;
        tracing::info!("Raw {format:?} pixels saved to {}", path.display());
    }
    Ok(())
}

#[cfg(feature = "window")]
fn show(raster: &DecodedRaster, config: &ViewerConfig) -> Result<(), ViewerError> {
    window::run(raster, config.title(), config.scale)
}

#[cfg(not(feature = "window"))]
fn show(_raster: &DecodedRaster, _config: &ViewerConfig) -> Result<(), ViewerError> {
    tracing::warn!("built without the `window` feature; nothing to display");
    Ok(())
}

fn run(config: &ViewerConfig) -> Result<(), ViewerError> {
    let raster = load(config)?;
    export(&raster, config)?;
    if config.headless {
        return Ok(());
    }
    show(&raster, config)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn init_logging() {
    let filter = EnvFilter::try_from_env("SHR_VIEW_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let config = ViewerConfig::from(Cli::parse());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
