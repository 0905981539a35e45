// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Inline-JavaScript reflection scanner.
//!
//! Probes a page for reflected XSS inside inline `<script>` blocks using a
//! two-stage protocol: a baseline fetch discovers variable-assignment
//! sites, then each candidate variable is re-requested with an
//! attacker-controlled canary as a same-named query parameter. Only
//! candidates that demonstrably echo the canary back into the same
//! assignment, unescaped and inside matching quotes, become findings.
//!
//! Detection is purely textual. The regex approach misses non-literal and
//! multi-statement assignments by design; it needs no JavaScript engine
//! and cannot false-positive on sites that merely look like assignment
//! sinks, because every finding is confirmed by the second fetch.

use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

use crate::errors::ScannerError;
use crate::http_client::ScanClient;
use crate::reporting::types::{Finding, FindingStatus};

/// Built-in detection pattern: a `var`/`let`/`const` declaration assigned
/// a quoted string literal, empty or not, with matching quotes. Capture
/// group 1 binds the variable name.
const DEFAULT_PATTERN: &str =
    r#"(?i)(?:var|let|const)\s+([a-zA-Z0-9_$]+)\s*=\s*('[^']*'|"[^"]*")"#;

pub struct InlineJsScanner {
    canary: String,
    patterns: Vec<Regex>,
}

impl InlineJsScanner {
    /// Build a scanner from the configured extra patterns plus the
    /// built-in default. Invalid patterns are warned about and skipped
    /// for the run; valid ones still apply.
    pub fn new(canary: &str, configured_patterns: &[String]) -> Self {
        let mut patterns = Vec::with_capacity(configured_patterns.len() + 1);
        for raw in configured_patterns {
            match Regex::new(raw) {
                Ok(re) => patterns.push(re),
                Err(e) => {
                    let err = ScannerError::Pattern {
                        pattern: raw.clone(),
                        source: e,
                    };
                    warn!("[InlineJS] {}", err);
                }
            }
        }
        // The default pattern is a compile-time constant.
        patterns.push(Regex::new(DEFAULT_PATTERN).unwrap());

        Self {
            canary: canary.to_string(),
            patterns,
        }
    }

    /// Scan one target URL: fetch, extract inline scripts, match
    /// candidate variables, inject the canary and verify reflection.
    ///
    /// A failed baseline fetch aborts the target with an error. A failed
    /// injected re-fetch only skips that candidate, except for
    /// rate-token cancellation, which abandons the target's remaining
    /// work.
    pub async fn scan(
        &self,
        target: &str,
        client: &ScanClient,
    ) -> Result<Vec<Finding>, ScannerError> {
        let response = client.get(target).await?;

        let scripts = extract_scripts(&response.body);
        if scripts.is_empty() {
            debug!("[InlineJS] No inline scripts at {}", target);
            return Ok(Vec::new());
        }

        let candidates = self.collect_candidates(&scripts);
        debug!(
            "[InlineJS] {} candidate(s) in {} script block(s) at {}",
            candidates.len(),
            scripts.len(),
            target
        );

        let mut findings = Vec::new();
        for var_name in candidates {
            let injected_url = match inject_canary(target, &var_name, &self.canary) {
                Ok(url) => url,
                Err(e) => {
                    debug!("[InlineJS] Skipping candidate '{}': {}", var_name, e);
                    continue;
                }
            };

            let injected = match client.get(&injected_url).await {
                Ok(response) => response,
                Err(e @ ScannerError::RateLimited) => return Err(e),
                Err(e) => {
                    // Treated as "not reflected"; the target's other
                    // candidates still get their round trip.
                    debug!("[InlineJS] Re-fetch failed for {}: {}", injected_url, e);
                    continue;
                }
            };

            if self.is_reflected(&injected.body, &var_name) {
                info!(
                    "[InlineJS] Canary reflected in variable '{}' at {}",
                    var_name, injected_url
                );
                findings.push(Finding {
                    url: injected_url,
                    variable: var_name.clone(),
                    status: FindingStatus::Reflected,
                    message: format!(
                        "Canary '{}' reflected in variable '{}'",
                        self.canary, var_name
                    ),
                });
            }
        }

        Ok(findings)
    }

    /// Apply every pattern to every script block and collect the
    /// variable names bound by capture group 1. Matches without a
    /// non-empty group-1 capture are silently ignored.
    fn collect_candidates(&self, scripts: &[String]) -> Vec<String> {
        let mut candidates = Vec::new();
        for script in scripts {
            for pattern in &self.patterns {
                for caps in pattern.captures_iter(script) {
                    if let Some(name) = caps.get(1) {
                        if !name.as_str().is_empty() {
                            candidates.push(name.as_str().to_string());
                        }
                    }
                }
            }
        }
        candidates
    }

    /// True if the body declares `var_name` with the canary as a quoted
    /// string literal. Case-insensitive; the opening and closing quote
    /// must be the same character, so `'canary"` never matches.
    fn is_reflected(&self, body: &str, var_name: &str) -> bool {
        let var = regex::escape(var_name);
        let canary = regex::escape(&self.canary);
        // Escaped literals keep the pattern valid.
        let pattern = Regex::new(&format!(
            r#"(?i)(?:var|let|const)\s+{var}\s*=\s*('{canary}'|"{canary}")"#
        ))
        .unwrap();

        pattern.is_match(body)
    }
}

/// Extract the text of every inline `<script>` element with non-blank
/// content. Script elements that only reference an external `src` have
/// empty text and are dropped here.
fn extract_scripts(body: &str) -> Vec<String> {
    let document = Html::parse_document(body);
    let selector = Selector::parse("script").unwrap();

    document
        .select(&selector)
        .filter_map(|element| {
            let text: String = element.text().collect();
            if text.trim().is_empty() {
                None
            } else {
                Some(text)
            }
        })
        .collect()
}

/// Rebuild `target` with the lowercased variable name set to the canary
/// as a query parameter, overwriting any existing values for that key.
/// The query is re-encoded sorted by key so injected URLs are
/// deterministic.
fn inject_canary(target: &str, var_name: &str, canary: &str) -> Result<String, ScannerError> {
    let mut url =
        Url::parse(target).map_err(|e| ScannerError::Parse(format!("{target}: {e}")))?;
    let key = var_name.to_lowercase();

    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k.as_ref() != key.as_str())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    pairs.push((key, canary.to_string()));
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    url.query_pairs_mut()
        .clear()
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(canary: &str) -> InlineJsScanner {
        InlineJsScanner::new(canary, &[])
    }

    #[test]
    fn extracts_non_blank_inline_scripts() {
        let body = r#"<html><head>
            <script src="/app.js"></script>
            <script>var token = '';</script>
            <script>   </script>
        </head><body><script>let q = "x";</script></body></html>"#;

        let scripts = extract_scripts(body);
        assert_eq!(scripts.len(), 2);
        assert!(scripts[0].contains("var token"));
        assert!(scripts[1].contains("let q"));
    }

    #[test]
    fn default_pattern_matches_empty_and_non_empty_literals() {
        let s = scanner("c4n4ry");
        let scripts = vec![
            "var a = '';".to_string(),
            r#"let b = "value";"#.to_string(),
            "const c = 42;".to_string(),
            "var d = `tpl`;".to_string(),
        ];

        let candidates = s.collect_candidates(&scripts);
        assert_eq!(candidates, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn invalid_configured_pattern_is_skipped_but_valid_ones_apply() {
        let s = InlineJsScanner::new(
            "c4n4ry",
            &[
                "(unclosed".to_string(),
                r"window\.(\w+)\s*=".to_string(),
            ],
        );
        let scripts = vec!["window.page = location.hash; var a = '';".to_string()];

        let candidates = s.collect_candidates(&scripts);
        assert_eq!(candidates, vec!["page".to_string(), "a".to_string()]);
    }

    #[test]
    fn pattern_without_capture_group_is_ignored() {
        let s = InlineJsScanner::new("c4n4ry", &[r"(?:var|let)\s+\w+".to_string()]);
        let scripts = vec!["var nocapture = 1;".to_string()];

        // The groupless pattern matches but binds nothing; the default
        // pattern does not match a numeric literal.
        assert!(s.collect_candidates(&scripts).is_empty());
    }

    #[test]
    fn inject_overwrites_lowercases_and_sorts() {
        let url = inject_canary(
            "http://example.com/page?zeta=1&token=old",
            "Token",
            "c4n4ry",
        )
        .unwrap();

        assert_eq!(url, "http://example.com/page?token=c4n4ry&zeta=1");
    }

    #[test]
    fn inject_is_deterministic() {
        let a = inject_canary("http://example.com/?b=2&a=1", "x", "c").unwrap();
        let b = inject_canary("http://example.com/?b=2&a=1", "x", "c").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, "http://example.com/?a=1&b=2&x=c");
    }

    #[test]
    fn inject_rejects_unparseable_url() {
        assert!(inject_canary("not a url", "x", "c").is_err());
    }

    #[test]
    fn reflection_requires_matching_quotes() {
        let s = scanner("c4n4ry");

        assert!(s.is_reflected("var x = 'c4n4ry';", "x"));
        assert!(s.is_reflected(r#"var x = "c4n4ry";"#, "x"));
        assert!(s.is_reflected("LET x = 'c4n4ry';", "x"));
        assert!(!s.is_reflected(r#"var x = 'c4n4ry";"#, "x"));
        assert!(!s.is_reflected("var x = 'something-else';", "x"));
        assert!(!s.is_reflected("var y = 'c4n4ry';", "x"));
    }

    #[test]
    fn reflection_escapes_regex_metacharacters() {
        let s = scanner("c4.n+ry");
        assert!(s.is_reflected("var x = 'c4.n+ry';", "x"));
        assert!(!s.is_reflected("var x = 'c4Xn+ry';", "x"));
    }
}
