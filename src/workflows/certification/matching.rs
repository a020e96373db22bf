//! Field consistency checkers shared by the document and fraud assessors.

/// Provinces the certification program operates in. The address check is a
/// closed substring test against this list, not a geocoding lookup.
pub const PROVINCES: [&str; 20] = [
    "bangkok",
    "chiang mai",
    "chiang rai",
    "lampang",
    "lamphun",
    "mae hong son",
    "nan",
    "phayao",
    "phrae",
    "uttaradit",
    "tak",
    "sukhothai",
    "phitsanulok",
    "phetchabun",
    "nakhon sawan",
    "khon kaen",
    "udon thani",
    "nakhon ratchasima",
    "ubon ratchathani",
    "kanchanaburi",
];

fn normalize(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Exact token-normalized equality. Absent or blank names never match.
pub fn names_match(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) if !a.trim().is_empty() && !b.trim().is_empty() => {
            normalize(a) == normalize(b)
        }
        _ => false,
    }
}

/// Coarse plausibility check between the farmer's address and the farm
/// location: true when either string is absent (cannot disprove), otherwise
/// true iff some province name appears in both.
pub fn addresses_plausibly_match(farmer_address: Option<&str>, farm_location: Option<&str>) -> bool {
    let (address, location) = match (farmer_address, farm_location) {
        (Some(a), Some(l)) if !a.trim().is_empty() && !l.trim().is_empty() => {
            (a.to_lowercase(), l.to_lowercase())
        }
        _ => return true,
    };

    PROVINCES
        .iter()
        .any(|province| address.contains(province) && location.contains(province))
}
