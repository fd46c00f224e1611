//! Single-axis galvo drive: undershoot, linear trace, spline retrace.

use super::spline::spline_interpolate;
use crate::error::{Axis, ScanError, ScanResult};
use tracing::trace;

/// Lengths of the three regions of one axis waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLayout {
    /// Samples in the imaged (linear) region. Must be at least 2.
    pub effective_scan_len: usize,
    /// Samples in the retrace; may be 0.
    pub retrace_len: usize,
    /// Samples of the ramp extended before the imaged region.
    pub undershoot_len: usize,
}

impl AxisLayout {
    /// Undershoot plus trace.
    #[must_use]
    pub fn linear_len(&self) -> usize {
        self.undershoot_len.saturating_add(self.effective_scan_len)
    }

    /// Total samples written. Saturates, so an unaddressable layout never
    /// fits a real buffer.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.linear_len().saturating_add(self.retrace_len)
    }
}

/// Per-sample voltage increment of a trace from `scan_start` to `scan_end`.
#[must_use]
pub fn scan_step(effective_scan_len: usize, scan_start: f64, scan_end: f64) -> f64 {
    (scan_end - scan_start) / (effective_scan_len as f64 - 1.0)
}

/// Generates one axis waveform into `waveform[..layout.total_len()]`.
///
/// The trace spans `scan_start` to `scan_end` over the effective region and is
/// extended backwards by the undershoot. The retrace returns to the undershoot
/// start with the trace slope at both ends, so repeating the waveform has no
/// velocity jump.
///
/// # Errors
///
/// - [`ScanError::DegenerateLength`] if `effective_scan_len < 2`
/// - [`ScanError::BufferSize`] if `waveform` is shorter than the layout
pub fn generate_galvo_waveform(
    axis: Axis,
    layout: AxisLayout,
    scan_start: f64,
    scan_end: f64,
    waveform: &mut [f64],
) -> ScanResult<()> {
    let AxisLayout {
        effective_scan_len,
        retrace_len,
        undershoot_len,
    } = layout;

    if effective_scan_len < 2 {
        return Err(ScanError::DegenerateLength {
            axis,
            len: effective_scan_len,
        });
    }
    if waveform.len() < layout.total_len() {
        return Err(ScanError::BufferSize {
            expected: layout.total_len(),
            actual: waveform.len(),
        });
    }

    let scan_amplitude = scan_end - scan_start;
    let step = scan_step(effective_scan_len, scan_start, scan_end);
    let undershoot_start = scan_start - undershoot_len as f64 * step;
    trace!(%axis, ?layout, scan_start, scan_end, step, "generating axis waveform");

    let (linear, rest) = waveform.split_at_mut(layout.linear_len());
    let denom = (effective_scan_len - 1) as f64;
    for (i, sample) in linear.iter_mut().enumerate() {
        *sample = undershoot_start + scan_amplitude * (i as f64 / denom);
    }

    if retrace_len > 0 {
        spline_interpolate(
            scan_end,
            undershoot_start,
            step,
            step,
            &mut rest[..retrace_len],
        );
    }

    Ok(())
}
