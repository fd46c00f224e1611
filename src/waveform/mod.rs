//! Galvo scan and clock waveform generation.
//!
//! All generators are pure: they read a [`WaveformParams`] and write into a
//! caller-provided buffer sized with the functions in [`size`]. Nothing is kept
//! between calls, so the same params may be shared across threads as long as
//! each call gets its own output buffer.
//!
//! - [`spline`]: cubic blend with matched boundary slopes
//! - [`galvo`]: one axis (undershoot, linear trace, spline retrace)
//! - [`clock`]: line, FLIM line, and FLIM frame digital clocks
//! - [`frame`]: full-frame X|Y analog buffer
//! - [`size`]: buffer sizes

pub mod clock;
pub mod frame;
pub mod galvo;
pub mod params;
pub mod size;
pub mod spline;

pub use clock::{generate_flim_frame_clock, generate_flim_line_clock, generate_line_clock};
pub use frame::{generate_galvo_waveform_frame, scan_range, ScanRange, GALVO_OFFSET_DIVISOR};
pub use galvo::{generate_galvo_waveform, AxisLayout};
pub use params::{RetraceLengths, WaveformParams, X_RETRACE_LEN, Y_RETRACE_LEN};
pub use size::{clock_waveform_size, frame_waveform_size, scanner_waveform_size};
pub use spline::{spline_interpolate, CubicSpline};

use crate::error::ScanResult;

/// Allocates a buffer of `len` copies of `value`, reporting allocation failure
/// as [`ScanError::Allocation`](crate::error::ScanError::Allocation).
pub(crate) fn try_alloc<T: Clone>(len: usize, value: T) -> ScanResult<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)?;
    buf.resize(len, value);
    Ok(buf)
}

/// Owned buffers for one frame: the X|Y analog waveform and the three clocks.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameWaveforms {
    /// X block followed by Y block.
    pub xy_frame: Vec<f64>,
    /// Line clock.
    pub line_clock: Vec<u8>,
    /// FLIM line clock.
    pub flim_line_clock: Vec<u8>,
    /// FLIM frame clock.
    pub flim_frame_clock: Vec<u8>,
}

impl FrameWaveforms {
    /// Allocates exactly sized buffers and fills all four waveforms.
    pub fn generate(params: &WaveformParams) -> ScanResult<Self> {
        params.validate()?;

        let clock_len = clock_waveform_size(params)?;
        let mut xy_frame = try_alloc(frame_waveform_size(params)?, 0.0)?;
        let mut line_clock = try_alloc(clock_len, 0u8)?;
        let mut flim_line_clock = try_alloc(clock_len, 0u8)?;
        let mut flim_frame_clock = try_alloc(clock_len, 0u8)?;

        generate_galvo_waveform_frame(params, &mut xy_frame)?;
        generate_line_clock(params, &mut line_clock)?;
        generate_flim_line_clock(params, &mut flim_line_clock)?;
        generate_flim_frame_clock(params, &mut flim_frame_clock)?;

        Ok(Self {
            xy_frame,
            line_clock,
            flim_line_clock,
            flim_frame_clock,
        })
    }

    /// X channel block.
    #[must_use]
    pub fn x_channel(&self) -> &[f64] {
        &self.xy_frame[..self.xy_frame.len() / 2]
    }

    /// Y channel block.
    #[must_use]
    pub fn y_channel(&self) -> &[f64] {
        &self.xy_frame[self.xy_frame.len() / 2..]
    }
}
