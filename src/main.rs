//! CLI Entry Point for galvo-scan
//!
//! Provides command-line access to:
//! - Buffer sizes for a configured frame geometry
//! - Generating a frame's galvo waveforms and clocks and exporting them
//!
//! # Usage
//!
//! ```bash
//! galvo-scan sizes --config config/scan.toml
//! galvo-scan generate --config config/scan.toml --out waveforms
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use galvo_scan::config::{ScanConfig, DEFAULT_CONFIG_PATH};
use galvo_scan::waveform::{
    clock_waveform_size, frame_waveform_size, scan_range, scanner_waveform_size,
};
use galvo_scan::{export, logging, FrameWaveforms};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "galvo-scan")]
#[command(about = "Galvo scan waveform and clock generator", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the buffer sizes for the configured geometry
    Sizes,

    /// Generate one frame and export it
    Generate {
        /// Output directory (overrides the configured one)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ScanConfig::load_from(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    config.validate()?;
    logging::init_from_config(&config)?;

    match cli.command {
        Commands::Sizes => print_sizes(&config),
        Commands::Generate { out } => generate(&config, out),
    }
}

fn print_sizes(config: &ScanConfig) -> Result<()> {
    let params = &config.scan;
    let range = scan_range(params);

    println!("line length:         {}", params.line_len());
    println!("lines per frame:     {}", params.frame_lines());
    println!("clock buffer:        {}", clock_waveform_size(params)?);
    println!("scanner per channel: {}", scanner_waveform_size(params)?);
    println!("frame buffer (X|Y):  {}", frame_waveform_size(params)?);
    println!(
        "x range: {:.6} .. {:.6} V, y range: {:.6} .. {:.6} V",
        range.x_start, range.x_end, range.y_start, range.y_end
    );
    Ok(())
}

fn generate(config: &ScanConfig, out: Option<PathBuf>) -> Result<()> {
    let dir = out.unwrap_or_else(|| config.output.dir.clone());
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let params = &config.scan;
    let frame = FrameWaveforms::generate(params)?;
    info!(
        width = params.width,
        height = params.height,
        samples = frame.xy_frame.len(),
        "generated frame"
    );

    export::write_params_json(dir.join("params.json"), params)?;
    export::write_frame_csv(dir.join("frame.csv"), params, &frame.xy_frame)?;
    if config.output.write_clocks {
        export::write_clocks_csv(
            dir.join("clocks.csv"),
            params,
            &frame.line_clock,
            &frame.flim_line_clock,
            &frame.flim_frame_clock,
        )?;
    }

    println!("Wrote waveforms to {}", dir.display());
    Ok(())
}
