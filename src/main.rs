use clap::{Parser, Subcommand};
use picture_resizer::config::{self, ResizerConfig};
use picture_resizer::imaging::read_dimensions;
use picture_resizer::output::{self, ResizeReport};
use picture_resizer::{OutputFormat, PictureResizer, ResampleFilter, RustBackend};
use std::path::{Path, PathBuf};

/// Shared flags for the two resize commands.
#[derive(clap::Args, Clone)]
struct ResizeArgs {
    /// Encoded source image (PNG, JPEG, BMP, GIF, TIFF, WebP)
    input: PathBuf,

    /// Where to write the re-encoded image
    output: PathBuf,

    /// Output format; defaults to the output file extension, then config
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Resampling filter; overrides `resample.filter` from config
    #[arg(long)]
    filter: Option<ResampleFilter>,
}

#[derive(Parser)]
#[command(name = "picture-resizer")]
#[command(about = "Resize an image to a width or height, keeping its aspect ratio")]
#[command(long_about = "\
Resize an image to a width or height, keeping its aspect ratio

The other edge is derived from the source aspect ratio and truncated
toward zero: a 300x200 image resized to width 200 becomes 200x133.

Examples:

  picture-resizer width photo.jpg small.png --width 320
  picture-resizer height scan.tiff scan.webp --height 1080 --filter catmull_rom
  picture-resizer identify photo.jpg

Run 'picture-resizer gen-config' to print a documented config file.")]
#[command(version)]
struct Cli {
    /// Config file (TOML). Missing file means stock defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print a JSON report instead of a human-readable line
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resize to a width; height follows the aspect ratio
    Width {
        #[command(flatten)]
        args: ResizeArgs,

        /// Target width in pixels
        #[arg(long, allow_negative_numbers = true)]
        width: i64,
    },
    /// Resize to a height; width follows the aspect ratio
    Height {
        #[command(flatten)]
        args: ResizeArgs,

        /// Target height in pixels
        #[arg(long, allow_negative_numbers = true)]
        height: i64,
    },
    /// Print the dimensions of an image
    Identify { input: PathBuf },
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ResizerConfig::default(),
    };

    match cli.command {
        Command::Width { args, width } => {
            let mut resizer = prepare(&args, &config)?;
            let bytes = resizer.set_required_width(width)?.resize_by_width()?;
            finish(&args, &resizer, &bytes, cli.json)?;
        }
        Command::Height { args, height } => {
            let mut resizer = prepare(&args, &config)?;
            let bytes = resizer.set_required_height(height)?.resize_by_height()?;
            finish(&args, &resizer, &bytes, cli.json)?;
        }
        Command::Identify { input } => {
            let bytes = std::fs::read(&input)?;
            let dims = read_dimensions(&bytes)?;
            let name = input.display().to_string();
            if cli.json {
                println!("{}", output::format_identify_json(&name, dims)?);
            } else {
                println!("{}", output::format_identify(&name, dims));
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

/// Read the source and build a resizer with the effective backend and format.
fn prepare(
    args: &ResizeArgs,
    config: &ResizerConfig,
) -> Result<PictureResizer<RustBackend>, Box<dyn std::error::Error>> {
    let mut backend = RustBackend::from_config(config);
    if let Some(filter) = args.filter {
        backend = backend.with_filter(filter);
    }
    let format = resolve_format(args.format, &args.output, config);
    log::debug!(
        "{} → {} as {} ({:?})",
        args.input.display(),
        args.output.display(),
        format,
        backend.filter()
    );

    let source = std::fs::read(&args.input)?;
    Ok(PictureResizer::with_backend(source, format, backend)?)
}

/// Flag first, then the output extension, then config.
fn resolve_format(
    flag: Option<OutputFormat>,
    output: &Path,
    config: &ResizerConfig,
) -> OutputFormat {
    flag.or_else(|| {
        output
            .extension()
            .and_then(|e| e.to_str())
            .and_then(OutputFormat::from_extension)
    })
    .unwrap_or(config.output.format)
}

fn finish(
    args: &ResizeArgs,
    resizer: &PictureResizer<RustBackend>,
    bytes: &[u8],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(&args.output, bytes)?;

    let report = ResizeReport::new(
        args.input.display().to_string(),
        read_dimensions(resizer.source())?,
        read_dimensions(bytes)?,
        resizer.output_format(),
        bytes.len(),
    );
    if json {
        println!("{}", output::format_report_json(&report)?);
    } else {
        println!("{}", output::format_report(&report));
    }
    Ok(())
}
