mod config;
pub(crate) mod policy;
pub(crate) mod rules;

pub use config::ScreeningConfig;
pub use policy::{Recommendation, RiskLevel};

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::audit::{AuditEvent, AuditSink};
use super::domain::{Application, ApplicationId, ExtractedData, RiskFlag};

/// Stateless orchestrator running the five component assessors and
/// aggregating their results.
///
/// Construction takes the screening thresholds plus an optional audit sink;
/// both are explicit dependencies, never globals. `calculate_risk` is the
/// single async surface so future store-backed history or duplicate-identity
/// lookups can await here without changing the contract.
pub struct RiskEngine {
    config: ScreeningConfig,
    audit: Option<Arc<dyn AuditSink>>,
}

impl RiskEngine {
    pub fn new(config: ScreeningConfig) -> Self {
        Self {
            config,
            audit: None,
        }
    }

    pub fn with_audit_sink(config: ScreeningConfig, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            config,
            audit: Some(audit),
        }
    }

    /// Score one application. Either all five components run and a complete
    /// assessment is returned, or the call fails; there is no partial
    /// result and nothing is retried.
    pub async fn calculate_risk(
        &self,
        application: &Application,
        extracted: Option<&ExtractedData>,
    ) -> Result<RiskAssessment, AssessmentError> {
        if let Err(failure) = validate(application, extracted) {
            error!(
                application_id = %application.id.0,
                error = %failure,
                "risk assessment aborted on malformed input"
            );
            return Err(failure);
        }

        let started = Instant::now();
        info!(application_id = %application.id.0, "risk assessment started");
        self.emit(&application.id, "assessment_started", BTreeMap::new());

        let components = ComponentScores {
            document: rules::assess_documents(application, extracted),
            farmer: rules::assess_farmer(&application.farmer, &self.config),
            farm: rules::assess_farm(application, &self.config),
            historical: rules::assess_history(&application.farmer.history, &self.config),
            fraud: rules::assess_fraud(application, extracted, &self.config),
        };

        let risk_score = policy::weighted_score(&components);
        let risk_level = RiskLevel::from_score(risk_score);
        let flags = components.merged_flags();
        let recommendation = policy::recommend(risk_level, &flags);

        info!(
            application_id = %application.id.0,
            score = risk_score,
            level = risk_level.label(),
            flag_count = flags.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "risk assessment completed"
        );

        let mut details = BTreeMap::new();
        details.insert("score".to_string(), risk_score.to_string());
        details.insert("level".to_string(), risk_level.label().to_string());
        details.insert("flags".to_string(), flags.len().to_string());
        self.emit(&application.id, "assessment_completed", details);

        Ok(RiskAssessment {
            application_id: application.id.clone(),
            risk_score,
            risk_level,
            flags,
            recommendation,
            components,
            calculated_at: Utc::now(),
        })
    }

    // Audit delivery is best effort; a rejected event is logged and dropped.
    fn emit(&self, application_id: &ApplicationId, name: &str, details: BTreeMap<String, String>) {
        let Some(sink) = &self.audit else {
            return;
        };

        let event = AuditEvent {
            name: name.to_string(),
            application_id: application_id.clone(),
            details,
        };
        if let Err(failure) = sink.record(event) {
            warn!(
                application_id = %application_id.0,
                error = %failure,
                "audit sink rejected event"
            );
        }
    }
}

fn validate(
    application: &Application,
    extracted: Option<&ExtractedData>,
) -> Result<(), AssessmentError> {
    if application.id.0.trim().is_empty() {
        return Err(AssessmentError::MissingApplicationId);
    }

    if let Some(national_id) = extracted.and_then(|data| data.national_id.as_ref()) {
        if !(0.0..=1.0).contains(&national_id.confidence) {
            return Err(AssessmentError::InvalidConfidence(national_id.confidence));
        }
    }

    Ok(())
}

/// Malformed-input failures, raised before any component runs.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("application carries no identifier for log correlation")]
    MissingApplicationId,
    #[error("extracted identity confidence {0} falls outside 0.0..=1.0")]
    InvalidConfidence(f32),
}

/// One component's contribution: a clamped 0-100 score plus its flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentResult {
    pub score: u8,
    pub flags: Vec<RiskFlag>,
}

/// Per-component breakdown kept on the assessment for reviewer audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub document: ComponentResult,
    pub farmer: ComponentResult,
    pub farm: ComponentResult,
    pub historical: ComponentResult,
    pub fraud: ComponentResult,
}

impl ComponentScores {
    /// Flags concatenated in assessor evaluation order: document, farmer,
    /// farm, historical, fraud. No deduplication, no re-sorting.
    pub fn merged_flags(&self) -> Vec<RiskFlag> {
        let mut flags = Vec::new();
        flags.extend(self.document.flags.iter().cloned());
        flags.extend(self.farmer.flags.iter().cloned());
        flags.extend(self.farm.flags.iter().cloned());
        flags.extend(self.historical.flags.iter().cloned());
        flags.extend(self.fraud.flags.iter().cloned());
        flags
    }
}

/// The engine's sole output: immutable, serializable, never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub application_id: ApplicationId,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub flags: Vec<RiskFlag>,
    pub recommendation: Recommendation,
    pub components: ComponentScores,
    pub calculated_at: DateTime<Utc>,
}
