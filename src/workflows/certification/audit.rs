use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::ApplicationId;

/// Outbound hook for audit trails (e.g., the compliance event bus or a
/// database appender). Injected at engine construction; a failing sink never
/// fails an assessment.
pub trait AuditSink: Send + Sync {
    fn record(&self, event: AuditEvent) -> Result<(), AuditError>;
}

/// Flat audit payload so sinks and tests can assert integration boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub name: String,
    pub application_id: ApplicationId,
    pub details: BTreeMap<String, String>,
}

/// Audit dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("audit transport unavailable: {0}")]
    Transport(String),
}
