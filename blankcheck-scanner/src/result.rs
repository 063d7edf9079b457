use serde::{Deserialize, Serialize};

/// Link-relation tokens that mitigate reverse tabnabbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelToken {
    Noopener,
    Noreferrer,
}

impl RelToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelToken::Noopener => "noopener",
            RelToken::Noreferrer => "noreferrer",
        }
    }
}

impl std::fmt::Display for RelToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One anchor flagged as a tabnabbing risk.
///
/// `href` is absent when the anchor carries no href attribute; `missing`
/// is never empty and keeps the fixed token order noopener, noreferrer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub href: Option<String>,
    pub missing: Vec<RelToken>,
    pub markup: String,
}

/// Outcome of auditing one page.
///
/// `error` and the `checked`/`issues` pair are mutually exclusive: a failed
/// navigation leaves `checked` at zero and `issues` empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResult {
    pub url: String,
    pub checked: usize,
    pub issues: Vec<Issue>,
    pub error: Option<String>,
}

impl AuditResult {
    pub fn new(url: String) -> Self {
        Self {
            url,
            checked: 0,
            issues: Vec::new(),
            error: None,
        }
    }

    pub fn with_error(url: String, error: String) -> Self {
        Self {
            url,
            checked: 0,
            issues: Vec::new(),
            error: Some(error),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.error.is_none() && self.issues.is_empty()
    }
}
