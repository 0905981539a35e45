// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Report Rendering
 * Projects the findings collection into text, JSON, CSV or HTML
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

pub mod formats;
pub mod types;

pub use self::types::{Finding, FindingStatus, ReportFormat};

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

use self::formats::csv::CsvReportGenerator;
use self::formats::html::HtmlReportGenerator;
use self::formats::json::JsonReportGenerator;
use self::formats::text::TextReportGenerator;

/// Render the findings in the requested format and write them to the
/// output file, or to stdout when no file is given.
pub async fn write_report(
    findings: &[Finding],
    format: ReportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let data = match format {
        ReportFormat::Text => TextReportGenerator::new().generate(findings).await?,
        ReportFormat::Json => JsonReportGenerator::new().generate(findings).await?,
        ReportFormat::Csv => CsvReportGenerator::new().generate(findings).await?,
        ReportFormat::Html => HtmlReportGenerator::new().generate(findings).await?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, &data)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!(
                "[Report] Wrote {} finding(s) to {}",
                findings.len(),
                path.display()
            );
        }
        None => {
            std::io::stdout()
                .write_all(&data)
                .context("Failed to write report to stdout")?;
        }
    }

    Ok(())
}
