use super::super::completeness::data_completeness;
use super::super::domain::{
    Application, DocumentKind, ExtractedData, FarmerHistory, FarmerProfile, FlagKind, RiskFlag,
    Severity,
};
use super::super::matching::{addresses_plausibly_match, names_match};
use super::config::ScreeningConfig;
use super::ComponentResult;

fn clamp(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

fn filled(value: Option<&str>) -> bool {
    value.map(|v| !v.trim().is_empty()).unwrap_or(false)
}

/// Document completeness and OCR findings. Every OCR-dependent penalty
/// requires the extraction to be present; absence is not failure.
pub(crate) fn assess_documents(
    application: &Application,
    extracted: Option<&ExtractedData>,
) -> ComponentResult {
    let mut score: i32 = 100;
    let mut flags = Vec::new();

    for kind in DocumentKind::REQUIRED {
        if !application.documents.contains_key(&kind) {
            score -= 30;
            flags.push(RiskFlag::new(
                FlagKind::MissingDocument,
                Severity::High,
                format!("required document missing: {}", kind.label()),
            ));
        }
    }

    if let Some(extracted) = extracted {
        for issue in &extracted.quality_issues {
            score -= 15;
            flags.push(RiskFlag::new(
                FlagKind::DocumentQualityIssue,
                Severity::Medium,
                format!("document quality issue: {issue}"),
            ));
        }

        // A missing OCR name cannot testify against the applicant; only a
        // recognized name that fails the match is penalized.
        if let Some(national_id) = &extracted.national_id {
            if let Some(ocr_name) = national_id.name.as_deref() {
                if !ocr_name.trim().is_empty()
                    && !names_match(Some(ocr_name), application.farmer.name.as_deref())
                {
                    score -= 40;
                    flags.push(RiskFlag::new(
                        FlagKind::NameMismatch,
                        Severity::High,
                        "identity document name does not match the declared applicant name",
                    ));
                }
            }
        }
    }

    ComponentResult {
        score: clamp(score),
        flags,
    }
}

/// Applicant track record and profile completeness. Penalties apply first,
/// then the prior-certification bonus, then the clamp to 0..=100.
pub(crate) fn assess_farmer(farmer: &FarmerProfile, config: &ScreeningConfig) -> ComponentResult {
    let mut score: i32 = 100;
    let mut flags = Vec::new();

    if farmer.history.previous_rejection {
        score -= 40;
        flags.push(RiskFlag::new(
            FlagKind::PreviousRejection,
            Severity::High,
            "a previous certification application was rejected",
        ));
    }

    let violation_count = farmer.history.violations.len() as u32;
    if violation_count > 0 {
        let counted = violation_count.min(config.counted_violations_cap);
        score -= 20 * counted as i32;
        flags.push(RiskFlag::new(
            FlagKind::ComplianceViolations,
            Severity::High,
            format!("{violation_count} compliance violation(s) on record"),
        ));
    }

    let mut missing = Vec::new();
    if !filled(farmer.name.as_deref()) {
        missing.push("name");
    }
    if !filled(farmer.national_id.as_deref()) {
        missing.push("national id");
    }
    if !filled(farmer.phone.as_deref()) {
        missing.push("phone");
    }
    if !filled(farmer.address.as_deref()) {
        missing.push("address");
    }
    if !missing.is_empty() {
        score -= 10 * missing.len() as i32;
        flags.push(RiskFlag::new(
            FlagKind::IncompleteFarmerProfile,
            Severity::Medium,
            format!("missing farmer fields: {}", missing.join(", ")),
        ));
    }

    if farmer.history.certified_before {
        score += 20;
    }

    ComponentResult {
        score: clamp(score),
        flags,
    }
}

/// Farm characteristics: scale, crop category, remoteness, completeness.
pub(crate) fn assess_farm(application: &Application, config: &ScreeningConfig) -> ComponentResult {
    let farm = &application.farm;
    let mut score: i32 = 100;
    let mut flags = Vec::new();

    if let Some(size) = farm.size {
        if size > config.large_farm_threshold {
            score -= 15;
            flags.push(RiskFlag::new(
                FlagKind::LargeFarm,
                Severity::Medium,
                format!(
                    "farm size {size} exceeds the {} oversight threshold",
                    config.large_farm_threshold
                ),
            ));
        }
    }

    if let Some(crop) = application.crop_type.as_deref() {
        if crop.trim().eq_ignore_ascii_case(&config.high_risk_crop) {
            score -= 10;
            flags.push(RiskFlag::new(
                FlagKind::HighRiskCrop,
                Severity::Medium,
                format!("crop '{}' is under heightened oversight", crop.trim()),
            ));
        }
    }

    if farm.remote {
        score -= 5;
        flags.push(RiskFlag::new(
            FlagKind::RemoteLocation,
            Severity::Low,
            "farm is in a remote area, complicating inspection",
        ));
    }

    let mut missing = Vec::new();
    if !filled(farm.location.as_deref()) {
        missing.push("location");
    }
    if farm.size.is_none() {
        missing.push("size");
    }
    if !filled(farm.province.as_deref()) {
        missing.push("province");
    }
    if !missing.is_empty() {
        score -= 10 * missing.len() as i32;
        flags.push(RiskFlag::new(
            FlagKind::IncompleteFarmProfile,
            Severity::Medium,
            format!("missing farm fields: {}", missing.join(", ")),
        ));
    }

    ComponentResult {
        score: clamp(score),
        flags,
    }
}

/// Application cadence and inspection record. Counters come verbatim from
/// the caller-supplied history; this is the seam where a real store lookup
/// would slot in.
pub(crate) fn assess_history(history: &FarmerHistory, config: &ScreeningConfig) -> ComponentResult {
    let mut score: i32 = 100;
    let mut flags = Vec::new();

    if history.applications_last_year > config.frequent_application_threshold {
        score -= 15;
        flags.push(RiskFlag::new(
            FlagKind::FrequentApplications,
            Severity::Medium,
            format!(
                "{} applications filed in the past year",
                history.applications_last_year
            ),
        ));
    }

    if history.quick_reapplication {
        score -= 20;
        flags.push(RiskFlag::new(
            FlagKind::QuickReapplication,
            Severity::Medium,
            "reapplied shortly after a rejection",
        ));
    }

    if history.failed_inspections > config.failed_inspection_threshold {
        score -= 25;
        flags.push(RiskFlag::new(
            FlagKind::FailedInspections,
            Severity::High,
            format!("{} failed inspections on record", history.failed_inspections),
        ));
    }

    ComponentResult {
        score: clamp(score),
        flags,
    }
}

/// Identity and consistency signals.
pub(crate) fn assess_fraud(
    application: &Application,
    extracted: Option<&ExtractedData>,
    config: &ScreeningConfig,
) -> ComponentResult {
    let mut score: i32 = 100;
    let mut flags = Vec::new();

    if application.duplicate_national_id {
        score -= 60;
        flags.push(RiskFlag::new(
            FlagKind::DuplicateIdentity,
            Severity::Critical,
            "national id already appears on another application",
        ));
    }

    if let Some(national_id) = extracted.and_then(|data| data.national_id.as_ref()) {
        if national_id.confidence < config.ocr_confidence_floor {
            score -= 20;
            flags.push(RiskFlag::new(
                FlagKind::LowOcrConfidence,
                Severity::Medium,
                format!(
                    "identity extraction confidence {:.2} below the {:.2} floor",
                    national_id.confidence, config.ocr_confidence_floor
                ),
            ));
        }
    }

    if !addresses_plausibly_match(
        application.farmer.address.as_deref(),
        application.farm.location.as_deref(),
    ) {
        score -= 15;
        flags.push(RiskFlag::new(
            FlagKind::AddressInconsistency,
            Severity::Medium,
            "farmer address and farm location share no known province",
        ));
    }

    if data_completeness(application) == 100 && !application.farmer.history.certified_before {
        score -= 5;
        flags.push(RiskFlag::new(
            FlagKind::SuspiciousCompleteness,
            Severity::Low,
            "perfectly complete first-time application",
        ));
    }

    ComponentResult {
        score: clamp(score),
        flags,
    }
}
