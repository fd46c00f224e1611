//! Buffer sizes callers must allocate before filling waveforms.
//!
//! Sizes are computed with checked arithmetic; geometry whose buffers cannot be
//! addressed is reported as [`ScanError::InvalidGeometry`].

use super::params::WaveformParams;
use crate::error::{ScanError, ScanResult};

fn overflow(field: &'static str) -> ScanError {
    ScanError::invalid(field, "buffer size overflows usize")
}

fn checked_line_len(params: &WaveformParams) -> ScanResult<usize> {
    (params.undershoot as usize)
        .checked_add(params.width as usize)
        .and_then(|n| n.checked_add(params.retrace.x as usize))
        .ok_or_else(|| overflow("width"))
}

fn checked_frame_lines(params: &WaveformParams) -> ScanResult<usize> {
    (params.height as usize)
        .checked_add(params.retrace.y as usize)
        .ok_or_else(|| overflow("height"))
}

/// Elements in one clock buffer: one line per active scan line.
pub fn clock_waveform_size(params: &WaveformParams) -> ScanResult<usize> {
    checked_line_len(params)?
        .checked_mul(params.height as usize)
        .ok_or_else(|| overflow("height"))
}

/// Elements per analog channel for one frame, including the Y retrace lines.
pub fn scanner_waveform_size(params: &WaveformParams) -> ScanResult<usize> {
    checked_line_len(params)?
        .checked_mul(checked_frame_lines(params)?)
        .ok_or_else(|| overflow("height"))
}

/// Elements in the combined X|Y analog buffer.
pub fn frame_waveform_size(params: &WaveformParams) -> ScanResult<usize> {
    scanner_waveform_size(params)?
        .checked_mul(2)
        .ok_or_else(|| overflow("height"))
}
