//! Frame geometry shared by every waveform generator.

use super::size::frame_waveform_size;
use crate::error::{ScanError, ScanResult};
use serde::{Deserialize, Serialize};

/// Samples reserved after each line for the fast galvo to fly back.
///
/// Downstream acquisition hardware expects this exact value.
pub const X_RETRACE_LEN: u32 = 128;

/// Lines reserved after each frame for the slow galvo to fly back.
pub const Y_RETRACE_LEN: u32 = 12;

/// Retrace lengths, in samples (X) and lines (Y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetraceLengths {
    /// Fast-axis retrace samples appended to every line.
    pub x: u32,
    /// Slow-axis retrace lines appended to every frame.
    pub y: u32,
}

impl Default for RetraceLengths {
    fn default() -> Self {
        Self {
            x: X_RETRACE_LEN,
            y: Y_RETRACE_LEN,
        }
    }
}

/// Geometry of one scanned frame.
///
/// # Examples
///
/// ```toml
/// [scan]
/// width = 512
/// height = 512
/// resolution = 512
/// zoom = 1.0
/// undershoot = 50
/// x_offset = 0
/// y_offset = 0
/// galvo_offset_x = 0.0
/// galvo_offset_y = 0.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveformParams {
    /// Pixels per line (ROI width).
    pub width: u32,
    /// Scan lines per frame (ROI height).
    pub height: u32,
    /// Pixel count of the full field of view at zoom 1.
    pub resolution: u32,
    /// Magnification; must be positive and finite.
    pub zoom: f64,
    /// Settling samples before each line. Also the line delay for the clocks.
    #[serde(default)]
    pub undershoot: u32,
    /// ROI offset within the full field, in pixels.
    #[serde(default)]
    pub x_offset: u32,
    /// ROI offset within the full field, in pixels.
    #[serde(default)]
    pub y_offset: u32,
    /// Calibration offset added to the X channel.
    #[serde(default)]
    pub galvo_offset_x: f64,
    /// Calibration offset added to the Y channel.
    #[serde(default)]
    pub galvo_offset_y: f64,
    /// Retrace lengths. Defaults to [`X_RETRACE_LEN`] / [`Y_RETRACE_LEN`].
    #[serde(default)]
    pub retrace: RetraceLengths,
}

impl WaveformParams {
    /// Samples per line: undershoot, active pixels, and X retrace.
    ///
    /// Saturates for geometry that [`validate`](Self::validate) rejects.
    #[must_use]
    pub fn line_len(&self) -> usize {
        (self.undershoot as usize)
            .saturating_add(self.width as usize)
            .saturating_add(self.retrace.x as usize)
    }

    /// Lines per frame including the Y retrace.
    #[must_use]
    pub fn frame_lines(&self) -> usize {
        (self.height as usize).saturating_add(self.retrace.y as usize)
    }

    /// Validates the geometry.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidGeometry`] if:
    /// - `width`, `height` or `resolution` is zero
    /// - `zoom` is not positive and finite
    /// - a galvo offset is not finite
    /// - the frame buffer size overflows `usize`
    pub fn validate(&self) -> ScanResult<()> {
        self.validate_dimensions()?;
        if self.resolution == 0 {
            return Err(ScanError::invalid("resolution", "must be greater than 0"));
        }
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(ScanError::invalid(
                "zoom",
                format!("must be positive and finite, got {}", self.zoom),
            ));
        }
        if !self.galvo_offset_x.is_finite() {
            return Err(ScanError::invalid(
                "galvo_offset_x",
                format!("must be finite, got {}", self.galvo_offset_x),
            ));
        }
        if !self.galvo_offset_y.is_finite() {
            return Err(ScanError::invalid(
                "galvo_offset_y",
                format!("must be finite, got {}", self.galvo_offset_y),
            ));
        }
        Ok(())
    }

    /// Validates only the fields that shape the sample grid: `width` and
    /// `height` must be non-zero and the frame buffer size must fit in `usize`.
    ///
    /// This is all the digital clocks need; they never read zoom, resolution,
    /// or offsets.
    pub fn validate_dimensions(&self) -> ScanResult<()> {
        if self.width == 0 {
            return Err(ScanError::invalid("width", "must be greater than 0"));
        }
        if self.height == 0 {
            return Err(ScanError::invalid("height", "must be greater than 0"));
        }
        frame_waveform_size(self)?;
        Ok(())
    }
}

impl Default for WaveformParams {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            resolution: 512,
            zoom: 1.0,
            undershoot: 50,
            x_offset: 0,
            y_offset: 0,
            galvo_offset_x: 0.0,
            galvo_offset_y: 0.0,
            retrace: RetraceLengths::default(),
        }
    }
}
