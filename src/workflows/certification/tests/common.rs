use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::workflows::certification::audit::{AuditError, AuditEvent, AuditSink};
use crate::workflows::certification::domain::{
    Application, ApplicationId, DocumentKind, DocumentRef, ExtractedData, FarmProfile,
    FarmerHistory, FarmerProfile, NationalIdExtraction,
};
use crate::workflows::certification::{RiskEngine, ScreeningConfig};

pub(super) fn screening_config() -> ScreeningConfig {
    ScreeningConfig::default()
}

pub(super) fn engine() -> RiskEngine {
    RiskEngine::new(screening_config())
}

pub(super) fn all_documents() -> BTreeMap<DocumentKind, DocumentRef> {
    DocumentKind::REQUIRED
        .into_iter()
        .map(|kind| {
            (
                kind,
                DocumentRef {
                    storage_key: format!("s3://gacp-docs/app-777/{kind:?}.pdf"),
                },
            )
        })
        .collect()
}

/// A fully filled, clean-history application growing turmeric in Chiang Mai.
pub(super) fn complete_application(suffix: &str) -> Application {
    Application {
        id: ApplicationId(format!("app-{suffix}")),
        farmer: FarmerProfile {
            name: Some("Somchai Jaidee".to_string()),
            national_id: Some("1-2345-67890-12-3".to_string()),
            phone: Some("+66 81 234 5678".to_string()),
            address: Some("99/1 Moo 4, Mae Rim, Chiang Mai 50180".to_string()),
            history: FarmerHistory::default(),
        },
        farm: FarmProfile {
            location: Some("Plot 12, Mae Rim district, Chiang Mai".to_string()),
            size: Some(12.5),
            province: Some("Chiang Mai".to_string()),
            remote: false,
        },
        crop_type: Some("turmeric".to_string()),
        documents: all_documents(),
        duplicate_national_id: false,
    }
}

pub(super) fn extraction(name: &str, confidence: f32) -> ExtractedData {
    ExtractedData {
        quality_issues: Vec::new(),
        national_id: Some(NationalIdExtraction {
            name: Some(name.to_string()),
            confidence,
        }),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAuditSink {
    events: Arc<Mutex<Vec<AuditEvent>>>,
}

impl MemoryAuditSink {
    pub(super) fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().expect("audit mutex poisoned").clone()
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, event: AuditEvent) -> Result<(), AuditError> {
        self.events
            .lock()
            .expect("audit mutex poisoned")
            .push(event);
        Ok(())
    }
}

pub(super) struct UnavailableAuditSink;

impl AuditSink for UnavailableAuditSink {
    fn record(&self, _event: AuditEvent) -> Result<(), AuditError> {
        Err(AuditError::Transport("event bus offline".to_string()))
    }
}
