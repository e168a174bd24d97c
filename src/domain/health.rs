use chrono::NaiveDateTime;
use serde::Serialize;

/// Snapshot reported by the store when probed for liveness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStatus {
    pub current_time: NaiveDateTime,
    pub total_entities: u64,
}
