use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted certification applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Read-only snapshot of a certification application at assessment time.
///
/// `documents` may be partially populated; an absent key means the document
/// is missing, not that the snapshot is malformed. `duplicate_national_id`
/// carries the already-resolved duplicate-identity lookup result; the engine
/// never queries the identity index itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub farmer: FarmerProfile,
    pub farm: FarmProfile,
    pub crop_type: Option<String>,
    pub documents: BTreeMap<DocumentKind, DocumentRef>,
    pub duplicate_national_id: bool,
}

/// Applicant sub-record. Every field except the history may be absent on a
/// partially filled submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerProfile {
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub history: FarmerHistory,
}

/// Historical counters supplied verbatim by the history store. The engine
/// reads them as-is and performs no lookups of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FarmerHistory {
    pub previous_rejection: bool,
    pub violations: Vec<String>,
    pub certified_before: bool,
    pub applications_last_year: u32,
    pub quick_reapplication: bool,
    pub failed_inspections: u32,
}

/// Farm sub-record. Size is stored in the unit the registry uses; no
/// conversion is performed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmProfile {
    pub location: Option<String>,
    pub size: Option<f64>,
    pub province: Option<String>,
    pub remote: bool,
}

/// The fixed set of documents every application must attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentKind {
    IdentityCard,
    LandOwnership,
    FarmPhotos,
}

impl DocumentKind {
    pub const REQUIRED: [DocumentKind; 3] = [
        DocumentKind::IdentityCard,
        DocumentKind::LandOwnership,
        DocumentKind::FarmPhotos,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            DocumentKind::IdentityCard => "identity card",
            DocumentKind::LandOwnership => "land ownership document",
            DocumentKind::FarmPhotos => "farm photographs",
        }
    }
}

/// Pointer to a stored document so assessments can reference uploads without
/// touching the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub storage_key: String,
}

/// OCR output for the uploaded documents. May be entirely absent, in which
/// case every OCR-dependent check degrades to no penalty and no flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    pub quality_issues: Vec<String>,
    pub national_id: Option<NationalIdExtraction>,
}

/// Fields recognized on the identity document, with the OCR engine's
/// confidence in the 0.0..=1.0 range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalIdExtraction {
    pub name: Option<String>,
    pub confidence: f32,
}

/// Severity attached to a risk flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Closed taxonomy of everything the assessors can flag. Keeping this a
/// closed enum lets recommendation changes match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagKind {
    MissingDocument,
    DocumentQualityIssue,
    NameMismatch,
    PreviousRejection,
    ComplianceViolations,
    IncompleteFarmerProfile,
    LargeFarm,
    HighRiskCrop,
    RemoteLocation,
    IncompleteFarmProfile,
    FrequentApplications,
    QuickReapplication,
    FailedInspections,
    DuplicateIdentity,
    LowOcrConfidence,
    AddressInconsistency,
    SuspiciousCompleteness,
}

/// Structured warning attached to a component result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub kind: FlagKind,
    pub severity: Severity,
    pub message: String,
}

impl RiskFlag {
    pub fn new(kind: FlagKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
        }
    }
}
