// Report rendering for audit results

use crate::color::ColorMode;
use blankcheck_scanner::result::AuditResult;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Format one audit result as a human-readable block.
///
/// A failed audit renders the target line and the error line, nothing else.
/// A successful one renders the target line, the checked-count summary, and
/// either the clean verdict or one entry per issue in document order.
pub fn format_result(result: &AuditResult, color: ColorMode) -> String {
    let mut out = String::new();
    out.push_str(&format!("Target: {}\n", color.target(&result.url)));

    if let Some(ref error) = result.error {
        out.push_str(&format!(
            "{}\n",
            color.error(&format!("✗ Audit failed: {}", error))
        ));
        return out;
    }

    out.push_str(&format!(
        "Checked {} links with target=\"_blank\".\n",
        color.count(&result.checked.to_string())
    ));

    if result.issues.is_empty() {
        out.push_str(&format!(
            "{}\n",
            color.clean("✓ No tabnabbing risks found. All links are safe!")
        ));
        return out;
    }

    out.push_str(&format!(
        "{}\n",
        color.risk(&format!(
            "Tabnabbing risks found ({}):",
            result.issues.len()
        ))
    ));

    for (idx, issue) in result.issues.iter().enumerate() {
        let missing = issue
            .missing
            .iter()
            .map(|token| token.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let href = issue.href.as_deref().unwrap_or("(no href)");

        out.push_str(&format!("[{}] {} - Missing: {}\n", idx + 1, href, missing));
        out.push_str(&format!("    Element: {}\n", issue.markup));
    }

    out
}

/// Render the plain-text file report: one block per result in input order,
/// blocks separated by a blank line, no color codes.
pub fn render_report(results: &[AuditResult]) -> String {
    results
        .iter()
        .map(|result| format_result(result, ColorMode::Plain))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json_report(results: &[AuditResult]) -> Result<String, serde_json::Error> {
    let report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "blankcheck",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json",
                "disclaimer": "For authorized security testing only"
            },
            "summary": {
                "targets": results.len(),
                "total_checked": results.iter().map(|r| r.checked).sum::<usize>(),
                "total_issues": results.iter().map(|r| r.issues.len()).sum::<usize>(),
                "failed": results.iter().filter(|r| r.error.is_some()).count(),
            },
            "results": results,
        }
    });

    serde_json::to_string_pretty(&report)
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
