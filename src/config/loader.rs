// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Configuration Loader
 * YAML settings with environment overrides and validation
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use std::path::Path;

use super::core::ScanSettings;
use crate::errors::ScannerError;

/// Load settings from the YAML file at `path`, or the defaults when no
/// file is given. Environment overrides are applied before validation.
/// Any failure here is fatal: the run must not start half-configured.
pub fn load_settings(path: Option<&Path>) -> Result<ScanSettings, ScannerError> {
    let mut settings = match path {
        Some(p) => {
            let content = std::fs::read_to_string(p).map_err(|e| {
                ScannerError::Config(format!("failed to read {}: {}", p.display(), e))
            })?;
            serde_yaml::from_str(&content).map_err(|e| {
                ScannerError::Config(format!("failed to parse {}: {}", p.display(), e))
            })?
        }
        None => ScanSettings::default(),
    };

    apply_env_overrides(&mut settings)?;
    settings.validate()?;

    Ok(settings)
}

fn apply_env_overrides(settings: &mut ScanSettings) -> Result<(), ScannerError> {
    if let Ok(rate) = std::env::var("KAIKU_RATE_LIMIT") {
        settings.rate_limit = rate
            .parse()
            .map_err(|_| ScannerError::Config(format!("invalid KAIKU_RATE_LIMIT: {rate}")))?;
    }

    if let Ok(concurrency) = std::env::var("KAIKU_CONCURRENCY") {
        settings.concurrency = concurrency.parse().map_err(|_| {
            ScannerError::Config(format!("invalid KAIKU_CONCURRENCY: {concurrency}"))
        })?;
    }

    Ok(())
}
