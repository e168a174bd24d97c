use serde::Serialize;

use crate::domain::health::StoreStatus;

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseHealth {
    pub connected: bool,
    #[serde(flatten)]
    pub status: Option<StoreStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of `/api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthState,
    pub database: DatabaseHealth,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        matches!(self.status, HealthState::Healthy)
    }
}
