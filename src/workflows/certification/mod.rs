//! Certification application screening: risk scoring, flagging, and routing
//! ahead of human review.

pub mod assessment;
pub mod audit;
pub mod completeness;
pub mod domain;
pub mod matching;

#[cfg(test)]
mod tests;

pub use assessment::{
    AssessmentError, ComponentResult, ComponentScores, Recommendation, RiskAssessment, RiskEngine,
    RiskLevel, ScreeningConfig,
};
pub use audit::{AuditError, AuditEvent, AuditSink};
pub use completeness::data_completeness;
pub use domain::{
    Application, ApplicationId, DocumentKind, DocumentRef, ExtractedData, FarmProfile,
    FarmerHistory, FarmerProfile, FlagKind, NationalIdExtraction, RiskFlag, Severity,
};
pub use matching::{addresses_plausibly_match, names_match};
