//! Loading scan configuration from TOML files and the environment.

use galvo_scan::config::ScanConfig;
use galvo_scan::error::ScanError;
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const MINIMAL: &str = r#"
[application]
log_level = "debug"

[scan]
width = 256
height = 128
resolution = 512
zoom = 2.0
undershoot = 30
galvo_offset_y = -0.6
"#;

#[test]
#[serial]
fn test_load_minimal_config_fills_defaults() {
    let file = write_config(MINIMAL);
    let config = ScanConfig::load_from(file.path()).unwrap();

    assert_eq!(config.application.name, "galvo-scan");
    assert_eq!(config.scan.width, 256);
    assert_eq!(config.scan.zoom, 2.0);
    assert_eq!(config.scan.galvo_offset_y, -0.6);
    assert_eq!(config.scan.retrace.x, 128);
    assert_eq!(config.scan.retrace.y, 12);
    assert!(config.output.write_clocks);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let file = write_config(MINIMAL);
    std::env::set_var("GALVO_SCAN_SCAN__ZOOM", "4.5");
    let result = ScanConfig::load_from(file.path());
    std::env::remove_var("GALVO_SCAN_SCAN__ZOOM");

    assert_eq!(result.unwrap().scan.zoom, 4.5);
}

#[test]
#[serial]
fn test_missing_scan_section_is_config_error() {
    let file = write_config("[application]\nlog_level = \"info\"\n");
    let err = ScanConfig::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ScanError::Config(_)));
}

#[test]
#[serial]
fn test_zero_height_fails_validation() {
    let file = write_config(&MINIMAL.replace("height = 128", "height = 0"));
    let config = ScanConfig::load_from(file.path()).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("height must be greater than 0"));
}
