// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use std::path::Path;

use crate::errors::ScannerError;

/// Read target URLs from a list file, one per line. Lines are trimmed and
/// blank lines skipped. No deduplication: the list is scanned as given.
pub fn read_targets(path: &Path) -> Result<Vec<String>, ScannerError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ScannerError::Config(format!(
            "failed to read target list {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
