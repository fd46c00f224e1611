//! Digital timing clocks for the DAQ's digital output lines.
//!
//! Each clock is a `height × line_len` grid of 0/1 samples flattened row-major,
//! one row per scan line. The undershoot doubles as the line delay.
//!
//! Only `width`, `height`, `undershoot` and the retrace lengths are read, so the
//! clocks check [`WaveformParams::validate_dimensions`] rather than the full
//! geometry.

use super::params::WaveformParams;
use super::size::clock_waveform_size;
use crate::error::{ScanError, ScanResult};
use tracing::debug;

/// Line clock: high while the active pixels of each line are scanned.
pub fn generate_line_clock(params: &WaveformParams, line_clock: &mut [u8]) -> ScanResult<()> {
    let (delay, width) = active_window(params);
    fill_clock(params, line_clock, "line", |_, i| {
        i >= delay && i < delay + width
    })
}

/// FLIM line clock: high from the end of each line's active window through its
/// retrace, i.e. the line clock with reversed polarity after the line delay.
pub fn generate_flim_line_clock(
    params: &WaveformParams,
    line_clock_flim: &mut [u8],
) -> ScanResult<()> {
    let (delay, width) = active_window(params);
    fill_clock(params, line_clock_flim, "flim_line", |_, i| i >= delay + width)
}

/// FLIM frame clock: high on the last line of the frame only, strictly after
/// its active window.
pub fn generate_flim_frame_clock(
    params: &WaveformParams,
    frame_clock_flim: &mut [u8],
) -> ScanResult<()> {
    let (delay, width) = active_window(params);
    let last_line = params.height.saturating_sub(1) as usize;
    fill_clock(params, frame_clock_flim, "flim_frame", |j, i| {
        j == last_line && i > delay + width
    })
}

fn active_window(params: &WaveformParams) -> (usize, usize) {
    (params.undershoot as usize, params.width as usize)
}

fn fill_clock<F>(params: &WaveformParams, out: &mut [u8], kind: &str, high: F) -> ScanResult<()>
where
    F: Fn(usize, usize) -> bool,
{
    params.validate_dimensions()?;

    let expected = clock_waveform_size(params)?;
    if out.len() < expected {
        return Err(ScanError::BufferSize {
            expected,
            actual: out.len(),
        });
    }

    let line_len = params.line_len();
    debug!(
        kind,
        line_len,
        lines = params.height,
        line_delay = params.undershoot,
        "filling clock waveform"
    );

    for (j, line) in out[..expected].chunks_exact_mut(line_len).enumerate() {
        for (i, sample) in line.iter_mut().enumerate() {
            *sample = u8::from(high(j, i));
        }
    }

    Ok(())
}
