pub mod auditor;
pub mod browser;
pub mod error;
pub mod result;

pub use auditor::{Auditor, scan_document};
pub use error::ScanError;
pub use result::{AuditResult, Issue, RelToken};
