// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::reporting::types::Finding;
use anyhow::Result;
use std::fmt::Write;

pub struct TextReportGenerator;

impl TextReportGenerator {
    pub fn new() -> Self {
        Self
    }

    pub async fn generate(&self, findings: &[Finding]) -> Result<Vec<u8>> {
        let mut out = String::new();
        for finding in findings {
            writeln!(out, "[{}] {} - {}", finding.status, finding.variable, finding.url)?;
        }
        Ok(out.into_bytes())
    }
}

impl Default for TextReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
