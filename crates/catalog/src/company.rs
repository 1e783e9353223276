use serde::{Deserialize, Serialize};

use wareflow_core::Gcp;

/// Contact information for a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// A supplying company, keyed by its GCP.
///
/// Supplier identity for grouping reorder lines; immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub gcp: Gcp,
    pub name: String,
    pub contact: ContactInfo,
}

impl Company {
    pub fn new(gcp: impl Into<Gcp>, name: impl Into<String>) -> Self {
        Self {
            gcp: gcp.into(),
            name: name.into(),
            contact: ContactInfo::default(),
        }
    }
}
