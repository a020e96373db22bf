//! Data-completeness checklist used as a fraud signal.

use super::domain::{Application, DocumentKind};

type FieldProbe = fn(&Application) -> bool;

fn present(value: Option<&str>) -> bool {
    value.map(|v| !v.trim().is_empty()).unwrap_or(false)
}

/// The fixed checklist of fields an application needs to count as complete.
/// Typed probes, one per field, so completeness never relies on
/// stringly-typed path traversal.
pub const REQUIRED_FIELDS: [(&str, FieldProbe); 11] = [
    ("farmer.name", |app| present(app.farmer.name.as_deref())),
    ("farmer.national_id", |app| {
        present(app.farmer.national_id.as_deref())
    }),
    ("farmer.phone", |app| present(app.farmer.phone.as_deref())),
    ("farmer.address", |app| {
        present(app.farmer.address.as_deref())
    }),
    ("farm.location", |app| {
        present(app.farm.location.as_deref())
    }),
    ("farm.size", |app| app.farm.size.is_some()),
    ("farm.province", |app| {
        present(app.farm.province.as_deref())
    }),
    ("documents.identity_card", |app| {
        app.documents.contains_key(&DocumentKind::IdentityCard)
    }),
    ("documents.land_ownership", |app| {
        app.documents.contains_key(&DocumentKind::LandOwnership)
    }),
    ("documents.farm_photos", |app| {
        app.documents.contains_key(&DocumentKind::FarmPhotos)
    }),
    ("crop_type", |app| present(app.crop_type.as_deref())),
];

/// Percentage of the checklist present on the application, rounded to the
/// nearest integer.
pub fn data_completeness(application: &Application) -> u8 {
    let filled = REQUIRED_FIELDS
        .iter()
        .filter(|(_, probe)| probe(application))
        .count();

    ((filled as f64 / REQUIRED_FIELDS.len() as f64) * 100.0).round() as u8
}
