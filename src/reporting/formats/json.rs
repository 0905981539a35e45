// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::reporting::types::Finding;
use anyhow::Result;

pub struct JsonReportGenerator;

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }

    pub async fn generate(&self, findings: &[Finding]) -> Result<Vec<u8>> {
        let json = serde_json::to_string_pretty(findings)?;
        Ok(json.into_bytes())
    }
}

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
