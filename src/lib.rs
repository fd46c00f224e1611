//! # Galvo Scan Core Library
//!
//! This crate computes the drive waveforms for a two-axis galvanometer scanner in a
//! laser-scanning microscope, together with the digital clocks that synchronize
//! acquisition electronics. Every generator is a pure function of the frame
//! geometry that writes into a caller-allocated buffer, so the same code serves the
//! `galvo-scan` command-line tool and any DAQ driver that streams the buffers out.
//!
//! ## Crate Structure
//!
//! - **`waveform`**: The scan geometry (`WaveformParams`), the cubic spline blender,
//!   single-axis galvo waveforms, the frame-level X|Y assembler, the line/FLIM clocks,
//!   and the size calculators used to allocate buffers.
//! - **`config`**: Loads a `ScanConfig` from TOML and environment variables using
//!   `figment`.
//! - **`error`**: Defines the `ScanError` enum for centralized error handling.
//! - **`export`**: Writes generated waveforms to CSV and the geometry to JSON.
//! - **`logging`**: Sets up `tracing-subscriber` output for applications.

pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod waveform;

pub use error::{ScanError, ScanResult};
pub use waveform::{FrameWaveforms, WaveformParams};
