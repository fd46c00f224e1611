//! Writes generated waveforms to disk for inspection or replay.
//!
//! CSV output requires the `storage_csv` feature (enabled by default). Geometry
//! is saved as JSON next to the waveforms so a run can be reproduced.

use crate::error::{ScanError, ScanResult};
use crate::waveform::{clock_waveform_size, frame_waveform_size, WaveformParams};
use std::fs::File;
use std::path::Path;
use tracing::info;

fn check_len(expected: usize, actual: usize) -> ScanResult<()> {
    if actual < expected {
        return Err(ScanError::BufferSize { expected, actual });
    }
    Ok(())
}

/// Writes one row per sample: `line,sample,x_volts,y_volts`.
pub fn write_frame_csv<P: AsRef<Path>>(
    path: P,
    params: &WaveformParams,
    xy_waveform_frame: &[f64],
) -> ScanResult<()> {
    let frame_len = frame_waveform_size(params)?;
    check_len(frame_len, xy_waveform_frame.len())?;

    #[cfg(not(feature = "storage_csv"))]
    return Err(ScanError::FeatureNotEnabled("storage_csv".to_string()));

    #[cfg(feature = "storage_csv")]
    {
        let line_len = params.line_len();
        let channel_len = frame_len / 2;
        let (x_block, y_block) = xy_waveform_frame[..2 * channel_len].split_at(channel_len);

        let mut writer = csv::Writer::from_writer(File::create(path.as_ref())?);
        writer.write_record(["line", "sample", "x_volts", "y_volts"])?;
        for (n, (x, y)) in x_block.iter().zip(y_block).enumerate() {
            writer.write_record(&[
                (n / line_len).to_string(),
                (n % line_len).to_string(),
                x.to_string(),
                y.to_string(),
            ])?;
        }
        writer.flush()?;

        info!(path = %path.as_ref().display(), rows = channel_len, "wrote frame waveform");
        Ok(())
    }
}

/// Writes the three clocks side by side:
/// `line,sample,line_clock,flim_line_clock,flim_frame_clock`.
pub fn write_clocks_csv<P: AsRef<Path>>(
    path: P,
    params: &WaveformParams,
    line_clock: &[u8],
    flim_line_clock: &[u8],
    flim_frame_clock: &[u8],
) -> ScanResult<()> {
    let expected = clock_waveform_size(params)?;
    check_len(expected, line_clock.len())?;
    check_len(expected, flim_line_clock.len())?;
    check_len(expected, flim_frame_clock.len())?;

    #[cfg(not(feature = "storage_csv"))]
    return Err(ScanError::FeatureNotEnabled("storage_csv".to_string()));

    #[cfg(feature = "storage_csv")]
    {
        let line_len = params.line_len();
        let mut writer = csv::Writer::from_writer(File::create(path.as_ref())?);
        writer.write_record([
            "line",
            "sample",
            "line_clock",
            "flim_line_clock",
            "flim_frame_clock",
        ])?;
        for n in 0..expected {
            writer.write_record(&[
                (n / line_len).to_string(),
                (n % line_len).to_string(),
                line_clock[n].to_string(),
                flim_line_clock[n].to_string(),
                flim_frame_clock[n].to_string(),
            ])?;
        }
        writer.flush()?;

        info!(path = %path.as_ref().display(), rows = expected, "wrote clock waveforms");
        Ok(())
    }
}

/// Saves the geometry as pretty-printed JSON.
pub fn write_params_json<P: AsRef<Path>>(path: P, params: &WaveformParams) -> ScanResult<()> {
    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, params)?;
    Ok(())
}
