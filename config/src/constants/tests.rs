//! Tests for the chart configuration builder.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::ChartConfig;
/// let cfg = ChartConfig::default();
/// assert!(cfg.base_radius > 0.0);
/// ```
#[test]
fn default_config_is_valid() {
    let cfg = ChartConfig::default();
    let rebuilt = ChartConfig::new(
        cfg.base_radius,
        cfg.row_spacing,
        cfg.z_increment,
        cfg.height_scale,
    );
    assert_eq!(rebuilt, Ok(cfg));
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::ChartConfig;
/// assert!(ChartConfig::new(0.0, 1.0, 0.1, 1.0).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        ChartConfig::new(0.0, 1.0, 0.1, 1.0).unwrap_err(),
        ConfigError::NonPositive {
            field: "base_radius",
            value: 0.0
        }
    );
    assert!(ChartConfig::new(1.0, -1.0, 0.1, 1.0).is_err());
    assert!(ChartConfig::new(1.0, 1.0, f64::NAN, 1.0).is_err());
    assert!(ChartConfig::new(1.0, 1.0, 0.1, f64::INFINITY).is_err());
}

#[test]
fn error_message_names_field() {
    let err = ChartConfig::new(1.0, 1.0, 0.0, 1.0).unwrap_err();
    assert!(err.to_string().contains("z_increment"));
}
