//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! compensation configuration from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::CompensationConfig;

/// Loads and provides access to the compensation configuration.
///
/// The `ConfigLoader` reads the YAML configuration file from a directory
/// and validates it before handing it out.
///
/// # Directory Structure
///
/// ```text
/// config/paywatch/
/// └── compensation.yaml   # Salary, premiums, schedule, deductions
/// ```
///
/// # Example
///
/// ```no_run
/// use paywatch::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/paywatch").unwrap();
/// let config = loader.config();
/// println!("Monthly salary: {}", config.salary.monthly);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CompensationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/paywatch")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The configuration file is missing
    /// - The file contains invalid YAML
    /// - A value is out of range (see [`ConfigLoader::validate`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let config_path = path.join("compensation.yaml");
        let config = Self::load_yaml::<CompensationConfig>(&config_path)?;

        Self::validate(&config)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Validates the loaded configuration.
    ///
    /// Checks that every figure the engine divides by or clamps against is
    /// in a usable range, so the calculations stay total functions.
    fn validate(config: &CompensationConfig) -> EngineResult<()> {
        fn require_positive(field: &str, value: Decimal) -> EngineResult<()> {
            if value <= Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must be positive, got {value}"),
                });
            }
            Ok(())
        }

        require_positive("salary.monthly", config.salary.monthly)?;
        require_positive(
            "salary.working_days_per_month",
            config.salary.working_days_per_month,
        )?;
        require_positive(
            "salary.standard_hours_per_day",
            config.salary.standard_hours_per_day,
        )?;
        require_positive(
            "schedule.scheduled_paid_hours",
            config.schedule.scheduled_paid_hours,
        )?;

        if config.salary.de_minimis_allowance < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "salary.de_minimis_allowance".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        if config.schedule.shift_start_hour > 23 {
            return Err(EngineError::InvalidConfig {
                field: "schedule.shift_start_hour".to_string(),
                message: format!("must be 0-23, got {}", config.schedule.shift_start_hour),
            });
        }

        if config.schedule.shift_end_hour > 23 {
            return Err(EngineError::InvalidConfig {
                field: "schedule.shift_end_hour".to_string(),
                message: format!("must be 0-23, got {}", config.schedule.shift_end_hour),
            });
        }

        if config.schedule.unpaid_break_hours < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "schedule.unpaid_break_hours".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        if config.schedule.grace_period_minutes < 0 {
            return Err(EngineError::InvalidConfig {
                field: "schedule.grace_period_minutes".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        if config.deductions.health_contribution_floor
            > config.deductions.health_contribution_cap
        {
            return Err(EngineError::InvalidConfig {
                field: "deductions.health_contribution_floor".to_string(),
                message: "floor exceeds cap".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the validated compensation configuration.
    pub fn config(&self) -> &CompensationConfig {
        &self.config
    }

    /// Consumes the loader and returns the owned configuration.
    pub fn into_config(self) -> CompensationConfig {
        self.config
    }
}
