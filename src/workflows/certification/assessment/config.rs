use serde::{Deserialize, Serialize};

/// Thresholds backing the component assessors. Component weights are fixed
/// (see `policy::WEIGHTS`) and deliberately not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Farm size above which the large-farm penalty applies, in the unit the
    /// registry stores.
    pub large_farm_threshold: f64,
    /// Crop category subject to the heightened-oversight penalty.
    pub high_risk_crop: String,
    /// Minimum acceptable OCR confidence for the extracted identity fields.
    pub ocr_confidence_floor: f32,
    /// Violations counted toward the compliance penalty are capped here.
    pub counted_violations_cap: u32,
    /// Applications filed in the past year above this count are flagged.
    pub frequent_application_threshold: u32,
    /// Failed inspections above this count are flagged.
    pub failed_inspection_threshold: u32,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            large_farm_threshold: 50.0,
            high_risk_crop: "cannabis".to_string(),
            ocr_confidence_floor: 0.7,
            counted_violations_cap: 3,
            frequent_application_threshold: 5,
            failed_inspection_threshold: 2,
        }
    }
}
