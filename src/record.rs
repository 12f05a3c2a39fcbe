//! The job record produced by both acquisition backends.

use serde::{Deserialize, Serialize};

/// Placeholder stored for any field missing from a listing fragment.
pub const NOT_AVAILABLE: &str = "N/A";

/// One job listing from a results page.
///
/// Every field is always present; missing data is the `"N/A"` placeholder,
/// never an absent key. Field order doubles as the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub summary: String,
    pub url: String,
}

impl Default for JobRecord {
    /// A record with every field set to the placeholder.
    fn default() -> Self {
        Self {
            title: NOT_AVAILABLE.to_string(),
            company: NOT_AVAILABLE.to_string(),
            location: NOT_AVAILABLE.to_string(),
            salary: NOT_AVAILABLE.to_string(),
            summary: NOT_AVAILABLE.to_string(),
            url: NOT_AVAILABLE.to_string(),
        }
    }
}
