//! Whole-frame X|Y analog waveform for simultaneous two-channel output.
//!
//! The buffer holds the X channel block followed by the Y channel block, each
//! `frame_lines × line_len` samples. At zoom 1 the full field spans -0.5 V to
//! 0.5 V. The trailing Y retrace lines move the slow galvo back to its start
//! while the fast galvo stays parked.

use super::galvo::{generate_galvo_waveform, AxisLayout};
use super::params::WaveformParams;
use super::size::frame_waveform_size;
use super::try_alloc;
use crate::error::{Axis, ScanError, ScanResult};
use tracing::debug;

/// Divisor applied to the galvo calibration offsets, assuming 10 V equals 30
/// optical degrees.
///
/// TODO: confirm with the calibration owners; the conversion may run the other
/// way (volts vs. degrees) and the scale should come from the scanner model.
pub const GALVO_OFFSET_DIVISOR: f64 = 3.0;

/// Voltage range covered by the ROI on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanRange {
    /// X voltage at the first active pixel.
    pub x_start: f64,
    /// X voltage at the last active pixel.
    pub x_end: f64,
    /// Y voltage at the first line.
    pub y_start: f64,
    /// Y voltage at the last line.
    pub y_end: f64,
}

/// Converts ROI geometry into per-axis voltage ranges about the field center.
#[must_use]
pub fn scan_range(params: &WaveformParams) -> ScanRange {
    let resolution = f64::from(params.resolution);
    let field = params.zoom * resolution;

    let x_start = (-0.5 * resolution + f64::from(params.x_offset)) / field;
    let y_start = (-0.5 * resolution + f64::from(params.y_offset)) / field;

    ScanRange {
        x_start,
        x_end: x_start + f64::from(params.width) / field,
        y_start,
        y_end: y_start + f64::from(params.height) / field,
    }
}

/// Fills `xy_waveform_frame` with the X block followed by the Y block.
///
/// Size the buffer with [`frame_waveform_size`]. Both axis waveforms are built
/// in scratch buffers first, so on error the caller's buffer is untouched.
///
/// # Errors
///
/// - [`ScanError::InvalidGeometry`] for invalid parameters
/// - [`ScanError::DegenerateLength`] if width or height is below 2
/// - [`ScanError::BufferSize`] if the buffer is too short
/// - [`ScanError::Allocation`] if a scratch buffer cannot be reserved
pub fn generate_galvo_waveform_frame(
    params: &WaveformParams,
    xy_waveform_frame: &mut [f64],
) -> ScanResult<()> {
    params.validate()?;

    let expected = frame_waveform_size(params)?;
    if xy_waveform_frame.len() < expected {
        return Err(ScanError::BufferSize {
            expected,
            actual: xy_waveform_frame.len(),
        });
    }

    let range = scan_range(params);
    let lines_per_frame = params.height as usize;
    let x_layout = AxisLayout {
        effective_scan_len: params.width as usize,
        retrace_len: params.retrace.x as usize,
        undershoot_len: params.undershoot as usize,
    };
    let y_layout = AxisLayout {
        effective_scan_len: lines_per_frame,
        retrace_len: params.retrace.y as usize,
        undershoot_len: 0,
    };
    let x_length = x_layout.total_len();
    let y_length = y_layout.total_len();

    let mut x_waveform = try_alloc(x_length, 0.0)?;
    let mut y_waveform = try_alloc(y_length, 0.0)?;
    generate_galvo_waveform(Axis::X, x_layout, range.x_start, range.x_end, &mut x_waveform)?;
    generate_galvo_waveform(Axis::Y, y_layout, range.y_start, range.y_end, &mut y_waveform)?;

    // Named as in the calibration sheet; these are likely volts, not degrees.
    let offset_x_in_degree = params.galvo_offset_x / GALVO_OFFSET_DIVISOR;
    let offset_y_in_degree = params.galvo_offset_y / GALVO_OFFSET_DIVISOR;

    debug!(
        width = params.width,
        height = params.height,
        zoom = params.zoom,
        x_start = range.x_start,
        x_end = range.x_end,
        y_start = range.y_start,
        y_end = range.y_end,
        "generating galvo frame waveform"
    );

    let (x_block, rest) = xy_waveform_frame[..expected].split_at_mut(expected / 2);
    let parked_x = x_waveform[0] + offset_x_in_degree;

    for (j, (x_line, y_line)) in x_block
        .chunks_exact_mut(x_length)
        .zip(rest.chunks_exact_mut(x_length))
        .enumerate()
    {
        if j < lines_per_frame {
            for (out, x) in x_line.iter_mut().zip(&x_waveform) {
                *out = x + offset_x_in_degree;
            }
        } else {
            x_line.fill(parked_x);
        }
        y_line.fill(y_waveform[j] + offset_y_in_degree);
    }

    Ok(())
}
