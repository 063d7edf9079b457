use crate::browser::BrowserSession;
use crate::error::Result;
use crate::result::{AuditResult, Issue, RelToken};
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Default per-page navigation timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Audits pages for anchors that open a new browsing context without the
/// `noopener`/`noreferrer` relation tokens.
///
/// Each `audit` call owns an independent browser session: launched at
/// entry, released before the result is returned, on failure paths too.
pub struct Auditor {
    timeout: Duration,
}

impl Auditor {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Audit a single page.
    ///
    /// Navigation failures (DNS, refused connection, timeout, invalid URL)
    /// are recoverable and surface in the returned result's `error` field.
    /// A browser launch failure is fatal and propagates as `Err`.
    pub async fn audit(&self, url: &str) -> Result<AuditResult> {
        if let Err(e) = Url::parse(url) {
            return Ok(AuditResult::with_error(
                url.to_string(),
                format!("Invalid URL: {}", e),
            ));
        }

        info!("Auditing {}", url);
        let session = BrowserSession::launch().await?;
        let outcome = session.dom_content(url, self.timeout).await;
        session.shutdown().await;

        match outcome {
            Ok(html) => {
                let (checked, issues) = scan_document(&html);
                debug!(
                    "{}: {} anchors checked, {} at risk",
                    url,
                    checked,
                    issues.len()
                );
                let mut result = AuditResult::new(url.to_string());
                result.checked = checked;
                result.issues = issues;
                Ok(result)
            }
            Err(e) => {
                warn!("Navigation failed for {}: {}", url, e);
                Ok(AuditResult::with_error(url.to_string(), e.to_string()))
            }
        }
    }
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan a serialized DOM for `target="_blank"` anchors missing the
/// tabnabbing mitigations.
///
/// Returns the number of anchors matched and the issues in document order.
/// An absent `rel` attribute is treated as the empty string; token presence
/// is a case-insensitive substring test, checked independently per token.
pub fn scan_document(html: &str) -> (usize, Vec<Issue>) {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"a[target="_blank"]"#).unwrap();

    let mut checked = 0;
    let mut issues = Vec::new();

    for element in document.select(&selector) {
        checked += 1;

        let rel = element.value().attr("rel").unwrap_or("").to_lowercase();
        let missing: Vec<RelToken> = [RelToken::Noopener, RelToken::Noreferrer]
            .into_iter()
            .filter(|token| !rel.contains(token.as_str()))
            .collect();

        if !missing.is_empty() {
            issues.push(Issue {
                href: element.value().attr("href").map(str::to_string),
                missing,
                markup: element.html(),
            });
        }
    }

    (checked, issues)
}
