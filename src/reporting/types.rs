// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use serde::{Deserialize, Serialize};

/// A confirmed canary reflection, the unit of scan output.
///
/// `url` is the injected URL that produced the reflection. Immutable once
/// created; owned by the result sink after the pipeline emits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub url: String,
    pub variable: String,
    pub status: FindingStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingStatus {
    Reflected,
}

impl std::fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingStatus::Reflected => write!(f, "reflected"),
        }
    }
}

/// Rendering formats. Pure projections of the findings collection; no
/// scanning logic lives behind any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
    Html,
}
