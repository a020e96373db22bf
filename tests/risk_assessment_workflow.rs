//! End-to-end scenarios for the certification risk-assessment workflow,
//! driven entirely through the crate's public API.

mod common {
    use std::collections::BTreeMap;

    use gacp_risk::workflows::certification::{
        Application, ApplicationId, DocumentKind, DocumentRef, ExtractedData, FarmProfile,
        FarmerHistory, FarmerProfile, RiskEngine, ScreeningConfig,
    };

    pub fn engine() -> RiskEngine {
        RiskEngine::new(ScreeningConfig::default())
    }

    pub fn documents() -> BTreeMap<DocumentKind, DocumentRef> {
        DocumentKind::REQUIRED
            .into_iter()
            .map(|kind| {
                (
                    kind,
                    DocumentRef {
                        storage_key: format!("s3://gacp-docs/app-160/{kind:?}.pdf"),
                    },
                )
            })
            .collect()
    }

    pub fn application(suffix: &str) -> Application {
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
            documents: documents(),
            duplicate_national_id: false,
        }
    }

    pub fn quality_issues(count: usize) -> ExtractedData {
        ExtractedData {
            quality_issues: (0..count).map(|n| format!("quality issue {n}")).collect(),
            national_id: None,
        }
    }
}

use common::*;
use gacp_risk::config::EngineConfig;
use gacp_risk::telemetry;
use gacp_risk::workflows::certification::{
    DocumentKind, Recommendation, RiskAssessment, RiskLevel, Severity,
};

#[tokio::test]
async fn config_and_telemetry_bootstrap_the_engine() {
    let config = EngineConfig::load().expect("defaults load");
    // Only the first test binary wins the global subscriber; losing is fine.
    let _ = telemetry::init(&config.telemetry);

    let engine = gacp_risk::workflows::certification::RiskEngine::new(config.screening);
    let assessment = engine
        .calculate_risk(&application("bootstrap"), None)
        .await
        .expect("assessment succeeds");
    assert_eq!(assessment.risk_level, RiskLevel::Low);
}

#[tokio::test]
async fn returning_certified_farmer_scores_a_perfect_hundred() {
    let mut application = application("returning");
    application.farmer.history.certified_before = true;

    let assessment = engine()
        .calculate_risk(&application, None)
        .await
        .expect("assessment succeeds");

    // The +20 bonus cannot push the farmer component past 100.
    assert_eq!(assessment.components.farmer.score, 100);
    assert_eq!(assessment.risk_score, 100);
    assert!(assessment.flags.is_empty());
    assert_eq!(assessment.recommendation, Recommendation::FastTrack);
}

#[tokio::test]
async fn three_missing_documents_route_to_manual_review() {
    let mut application = application("no-paperwork");
    application.documents.clear();

    let assessment = engine()
        .calculate_risk(&application, None)
        .await
        .expect("assessment succeeds");

    assert_eq!(assessment.components.document.score, 10);
    let high_count = assessment
        .flags
        .iter()
        .filter(|flag| flag.severity == Severity::High)
        .count();
    assert_eq!(high_count, 3);
    assert_eq!(assessment.recommendation, Recommendation::ManualReview);
}

#[tokio::test]
async fn accumulated_medium_findings_land_in_the_middle_band() {
    let mut application = application("middling");
    application.farmer.history.violations = vec![
        "pesticide residue".to_string(),
        "record falsification".to_string(),
        "unapproved fertilizer".to_string(),
    ];
    application.farmer.history.quick_reapplication = true;
    application.farm.size = Some(60.0);
    application.farm.remote = true;
    application.crop_type = Some("cannabis".to_string());
    let extracted = quality_issues(4);

    let assessment = engine()
        .calculate_risk(&application, Some(&extracted))
        .await
        .expect("assessment succeeds");

    // document 40, farmer 40, farm 70, historical 80, fraud 95.
    assert_eq!(assessment.risk_score, 62);
    assert_eq!(assessment.risk_level, RiskLevel::Medium);
    assert_eq!(assessment.recommendation, Recommendation::StandardReview);
}

#[tokio::test]
async fn duplicate_identity_rejects_end_to_end() {
    let mut application = application("cloned-id");
    application.duplicate_national_id = true;
    application.documents.remove(&DocumentKind::FarmPhotos);

    let assessment = engine()
        .calculate_risk(&application, None)
        .await
        .expect("assessment succeeds");

    assert_eq!(
        assessment
            .flags
            .iter()
            .filter(|flag| flag.severity == Severity::Critical)
            .count(),
        1
    );
    assert!(assessment.recommendation.label().starts_with("REJECT"));
}

#[tokio::test]
async fn assessments_serialize_to_plain_json() {
    let assessment = engine()
        .calculate_risk(&application("serializable"), None)
        .await
        .expect("assessment succeeds");

    let value = serde_json::to_value(&assessment).expect("serializes");
    assert_eq!(value["application_id"], "app-serializable");
    assert!(value["risk_score"].is_u64());

    let restored: RiskAssessment = serde_json::from_value(value).expect("round trips");
    assert_eq!(restored, assessment);
}
