use std::env;
use std::fmt;

use crate::workflows::certification::ScreeningConfig;

/// Top-level configuration for embedding applications.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub screening: ScreeningConfig,
    pub telemetry: TelemetryConfig,
}

impl EngineConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_level = env::var("RISK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut screening = ScreeningConfig::default();

        if let Ok(value) = env::var("RISK_LARGE_FARM_THRESHOLD") {
            screening.large_farm_threshold =
                value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidNumber {
                        variable: "RISK_LARGE_FARM_THRESHOLD",
                        found: value,
                    })?;
        }

        if let Ok(value) = env::var("RISK_OCR_CONFIDENCE_FLOOR") {
            let floor = value
                .trim()
                .parse::<f32>()
                .map_err(|_| ConfigError::InvalidNumber {
                    variable: "RISK_OCR_CONFIDENCE_FLOOR",
                    found: value.clone(),
                })?;
            if !(0.0..=1.0).contains(&floor) {
                return Err(ConfigError::OutOfRange {
                    variable: "RISK_OCR_CONFIDENCE_FLOOR",
                    found: value,
                });
            }
            screening.ocr_confidence_floor = floor;
        }

        if let Ok(value) = env::var("RISK_HIGH_RISK_CROP") {
            let crop = value.trim().to_string();
            if crop.is_empty() {
                return Err(ConfigError::EmptyValue {
                    variable: "RISK_HIGH_RISK_CROP",
                });
            }
            screening.high_risk_crop = crop;
        }

        Ok(Self {
            screening,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber {
        variable: &'static str,
        found: String,
    },
    OutOfRange {
        variable: &'static str,
        found: String,
    },
    EmptyValue {
        variable: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { variable, found } => {
                write!(f, "{variable} must be numeric, found '{found}'")
            }
            ConfigError::OutOfRange { variable, found } => {
                write!(f, "{variable} must fall within 0.0..=1.0, found '{found}'")
            }
            ConfigError::EmptyValue { variable } => {
                write!(f, "{variable} must not be empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("RISK_LOG_LEVEL");
        env::remove_var("RISK_LARGE_FARM_THRESHOLD");
        env::remove_var("RISK_OCR_CONFIDENCE_FLOOR");
        env::remove_var("RISK_HIGH_RISK_CROP");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = EngineConfig::load().expect("config loads with defaults");
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.screening.large_farm_threshold, 50.0);
        assert_eq!(config.screening.ocr_confidence_floor, 0.7);
        assert_eq!(config.screening.high_risk_crop, "cannabis");
    }

    #[test]
    fn load_accepts_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RISK_LARGE_FARM_THRESHOLD", "75.5");
        env::set_var("RISK_HIGH_RISK_CROP", "kratom");
        let config = EngineConfig::load().expect("config loads");
        assert_eq!(config.screening.large_farm_threshold, 75.5);
        assert_eq!(config.screening.high_risk_crop, "kratom");
        reset_env();
    }

    #[test]
    fn load_rejects_blank_high_risk_crop() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RISK_HIGH_RISK_CROP", "   ");
        match EngineConfig::load() {
            Err(ConfigError::EmptyValue { variable }) => {
                assert_eq!(variable, "RISK_HIGH_RISK_CROP");
            }
            other => panic!("expected empty-value error, got {other:?}"),
        }
        reset_env();
    }

    #[test]
    fn load_rejects_confidence_floor_outside_unit_interval() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RISK_OCR_CONFIDENCE_FLOOR", "1.5");
        match EngineConfig::load() {
            Err(ConfigError::OutOfRange { variable, .. }) => {
                assert_eq!(variable, "RISK_OCR_CONFIDENCE_FLOOR");
            }
            other => panic!("expected out-of-range error, got {other:?}"),
        }
        reset_env();
    }
}
