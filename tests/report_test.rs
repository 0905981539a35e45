// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Report Format Tests
 * Round-trips and projections of the findings collection
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use kaiku_scanner::reporting::formats::csv::CsvReportGenerator;
use kaiku_scanner::reporting::formats::html::HtmlReportGenerator;
use kaiku_scanner::reporting::formats::json::JsonReportGenerator;
use kaiku_scanner::reporting::formats::text::TextReportGenerator;
use kaiku_scanner::reporting::{Finding, FindingStatus};

fn sample_findings() -> Vec<Finding> {
    vec![
        Finding {
            url: "http://example.com/page?q=1&token=kx9canary".to_string(),
            variable: "token".to_string(),
            status: FindingStatus::Reflected,
            message: "Canary 'kx9canary' reflected in variable 'token'".to_string(),
        },
        Finding {
            url: "http://example.com/other?name=kx9canary".to_string(),
            variable: "name".to_string(),
            status: FindingStatus::Reflected,
            message: "Canary 'kx9canary' reflected in variable 'name'".to_string(),
        },
    ]
}

#[tokio::test]
async fn json_report_round_trips() {
    let findings = sample_findings();
    let data = JsonReportGenerator::new().generate(&findings).await.unwrap();

    let parsed: Vec<Finding> = serde_json::from_slice(&data).unwrap();
    assert_eq!(parsed, findings);
}

#[tokio::test]
async fn json_uses_original_field_names() {
    let findings = sample_findings();
    let data = JsonReportGenerator::new().generate(&findings).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&data).unwrap();

    let first = &value[0];
    assert!(first.get("url").is_some());
    assert!(first.get("variable").is_some());
    assert_eq!(first["status"], "reflected");
    assert!(first.get("message").is_some());
}

#[tokio::test]
async fn csv_report_has_header_and_rows() {
    let findings = sample_findings();
    let data = CsvReportGenerator::new().generate(&findings).await.unwrap();
    let text = String::from_utf8(data).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "URL,Variable,Status,Message");
    assert!(lines[1].contains("token"));
    assert!(lines[2].contains("name"));
}

#[tokio::test]
async fn text_report_is_one_line_per_finding() {
    let findings = sample_findings();
    let data = TextReportGenerator::new().generate(&findings).await.unwrap();
    let text = String::from_utf8(data).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "[reflected] token - http://example.com/page?q=1&token=kx9canary"
    );
}

#[tokio::test]
async fn html_report_escapes_markup() {
    let findings = vec![Finding {
        url: "http://example.com/?a=1&b=<script>".to_string(),
        variable: "b".to_string(),
        status: FindingStatus::Reflected,
        message: "Canary '<script>alert(1)</script>' reflected in variable 'b'".to_string(),
    }];

    let data = HtmlReportGenerator::new().generate(&findings).await.unwrap();
    let html = String::from_utf8(data).unwrap();

    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&amp;b="));
}

#[tokio::test]
async fn empty_findings_render_in_every_format() {
    let findings: Vec<Finding> = Vec::new();

    let json = JsonReportGenerator::new().generate(&findings).await.unwrap();
    assert_eq!(String::from_utf8(json).unwrap().trim(), "[]");

    let csv = CsvReportGenerator::new().generate(&findings).await.unwrap();
    assert_eq!(
        String::from_utf8(csv).unwrap().trim(),
        "URL,Variable,Status,Message"
    );

    let text = TextReportGenerator::new().generate(&findings).await.unwrap();
    assert!(text.is_empty());

    let html = HtmlReportGenerator::new().generate(&findings).await.unwrap();
    assert!(String::from_utf8(html).unwrap().contains("0 finding(s)"));
}
