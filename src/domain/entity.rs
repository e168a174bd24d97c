use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read-only projection of a registry row returned by a name search.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EntityRecord {
    /// Registry-assigned identifier.
    pub entity_number: String,
    pub entity_name: String,
    pub status: Option<String>,
    pub formation_date: Option<NaiveDate>,
    pub entity_type: Option<String>,
}
