//! Dental warranty card generator CLI
//!
//! Thin headless wrapper around dentacard-core: fill the card fields
//! from flags or a JSON file, render one side, and write the JPEG.
//!
//! ## Usage
//!
//! ```bash
//! # Export the front side with a few fields filled in
//! dentacard export --patient "R. Verma" --doctor "Dr. A. Sharma" \
//!     --work-type Crown --upper-right "11, 12"
//!
//! # Export the back side at screen resolution
//! dentacard export --side back --pixel-ratio 1 --output back.jpeg
//!
//! # Load a record from JSON and override one field
//! dentacard export --input card.json --warranty-period "5 years"
//!
//! # Print the @page rule used for native printing
//! dentacard page-css
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{Args, Parser, Subcommand};
use dentacard_core::{
    export_file_name, page_style, render, update, CardField, CardRecord, CardSide, PageSizeMm,
    RasterOptions, Rasterizer, CARD_HEIGHT_MM, CARD_WIDTH_MM,
};

/// Dental warranty card generator
#[derive(Parser)]
#[command(name = "dentacard")]
#[command(version = "0.1.0")]
#[command(about = "Dental warranty card generator - headless card exporter")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one card side and write it as a JPEG
    Export(ExportArgs),

    /// Print the exact @page rule for the card footprint
    PageCss,
}

#[derive(Args)]
struct ExportArgs {
    /// Load the record from a JSON file before applying field flags
    #[arg(long)]
    input: Option<PathBuf>,

    #[command(flatten)]
    fields: FieldArgs,

    /// Card side to export
    #[arg(long, default_value = "front")]
    side: String,

    /// Output path (default: warranty-<side>-<timestamp>.jpeg)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output sharpness multiplier over the 324x204 CSS pixel size
    #[arg(long, default_value_t = 3.0)]
    pixel_ratio: f32,

    /// JPEG quality in [0, 1]
    #[arg(long, default_value_t = 0.95)]
    quality: f32,

    /// Opaque background colour (#RRGGBB)
    #[arg(long, default_value = "#FFFFFF")]
    background: String,
}

/// One flag per card field; unset flags leave the base record alone.
#[derive(Args)]
struct FieldArgs {
    /// Issue date (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<String>,
    /// Serial number
    #[arg(long)]
    serial_number: Option<String>,
    /// Doctor's name
    #[arg(long)]
    doctor: Option<String>,
    /// Patient's name
    #[arg(long)]
    patient: Option<String>,
    /// Type of work (Crown, Bridge, ...)
    #[arg(long)]
    work_type: Option<String>,
    /// Warranty period
    #[arg(long)]
    warranty_period: Option<String>,
    /// Upper-right quadrant tooth numbers
    #[arg(long)]
    upper_right: Option<String>,
    /// Upper-left quadrant tooth numbers
    #[arg(long)]
    upper_left: Option<String>,
    /// Lower-right quadrant tooth numbers
    #[arg(long)]
    lower_right: Option<String>,
    /// Lower-left quadrant tooth numbers
    #[arg(long)]
    lower_left: Option<String>,
}

impl FieldArgs {
    fn apply(&self, mut record: CardRecord) -> CardRecord {
        let overrides = [
            (CardField::Date, &self.date),
            (CardField::SerialNumber, &self.serial_number),
            (CardField::Doctor, &self.doctor),
            (CardField::Patient, &self.patient),
            (CardField::WorkType, &self.work_type),
            (CardField::WarrantyPeriod, &self.warranty_period),
            (CardField::UpperRight, &self.upper_right),
            (CardField::UpperLeft, &self.upper_left),
            (CardField::LowerRight, &self.lower_right),
            (CardField::LowerLeft, &self.lower_left),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                record = update(&record, field, value);
            }
        }
        record
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Commands::Export(args) => run_export(args),
        Commands::PageCss => {
            print!("{}", page_style(PageSizeMm::card()));
            Ok(())
        }
    }
}

fn run_export(args: ExportArgs) -> Result<()> {
    let base = match &args.input {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("invalid card record in {}", path.display()))?
        }
        None => CardRecord::new(Local::now().date_naive()),
    };
    let record = args.fields.apply(base);

    let side: CardSide = args.side.parse()?;
    let surface = render(&record, side);
    tracing::info!(side = side.as_str(), "rendered card surface");

    let options = RasterOptions {
        background: args.background,
        pixel_ratio: args.pixel_ratio,
        quality: args.quality,
    };
    let rasterizer = Rasterizer::new();
    let image = rasterizer
        .rasterize(&surface, CARD_WIDTH_MM, CARD_HEIGHT_MM, &options)
        .context("failed to rasterize card")?;

    let path = args.output.unwrap_or_else(|| {
        PathBuf::from(export_file_name(side, Utc::now().timestamp_millis()))
    });
    fs::write(&path, &image.jpeg)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!(
        "Wrote {} ({}x{} px, {} bytes)",
        path.display(),
        image.width,
        image.height,
        image.jpeg.len()
    );
    Ok(())
}
