// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::reporting::types::Finding;
use anyhow::Result;
use csv::Writer;

pub struct CsvReportGenerator;

impl CsvReportGenerator {
    pub fn new() -> Self {
        Self
    }

    pub async fn generate(&self, findings: &[Finding]) -> Result<Vec<u8>> {
        let mut wtr = Writer::from_writer(vec![]);

        wtr.write_record(["URL", "Variable", "Status", "Message"])?;

        for finding in findings {
            let status = finding.status.to_string();
            wtr.write_record([
                finding.url.as_str(),
                finding.variable.as_str(),
                status.as_str(),
                finding.message.as_str(),
            ])?;
        }

        let data = wtr.into_inner()?;
        Ok(data)
    }
}

impl Default for CsvReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
