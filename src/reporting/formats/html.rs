// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::reporting::types::Finding;
use anyhow::Result;

pub struct HtmlReportGenerator;

impl HtmlReportGenerator {
    pub fn new() -> Self {
        Self
    }

    pub async fn generate(&self, findings: &[Finding]) -> Result<Vec<u8>> {
        let html = self.generate_html(findings);
        Ok(html.into_bytes())
    }

    fn generate_html(&self, findings: &[Finding]) -> String {
        let rows: String = findings
            .iter()
            .map(|f| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    self.escape_html(&f.url),
                    self.escape_html(&f.variable),
                    f.status,
                    self.escape_html(&f.message),
                )
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Kaiku Scan Results</title>
    <style>
        body {{ font-family: sans-serif; margin: 2em; }}
        table {{ border-collapse: collapse; width: 100%; }}
        th, td {{ border: 1px solid #ccc; padding: 6px 10px; text-align: left; }}
        th {{ background: #1e40af; color: #fff; }}
        tr:nth-child(even) {{ background: #f3f4f6; }}
    </style>
</head>
<body>
    <h1>Kaiku Scan Results</h1>
    <p>{} finding(s)</p>
    <table>
        <tr><th>URL</th><th>Variable</th><th>Status</th><th>Message</th></tr>
{}    </table>
</body>
</html>
"#,
            findings.len(),
            rows
        )
    }

    fn escape_html(&self, text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#x27;")
    }
}

impl Default for HtmlReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
