use crate::dto::health::{DatabaseHealth, HealthResponse, HealthState};
use crate::repository::StoreHealthReader;

/// Probes the store and reports whether it answers queries.
///
/// Never fails: an unreachable store is reported as an unhealthy payload.
/// The error text is included only when `expose_details` is set.
pub fn check_store<R>(repo: &R, expose_details: bool) -> HealthResponse
where
    R: StoreHealthReader + ?Sized,
{
    match repo.store_status() {
        Ok(status) => HealthResponse {
            status: HealthState::Healthy,
            database: DatabaseHealth {
                connected: true,
                status: Some(status),
                error: None,
            },
        },
        Err(err) => {
            log::error!("Health check error: {err}");
            HealthResponse {
                status: HealthState::Unhealthy,
                database: DatabaseHealth {
                    connected: false,
                    status: None,
                    error: expose_details.then(|| err.to_string()),
                },
            }
        }
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::health::StoreStatus;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use chrono::NaiveDate;

    #[test]
    fn reachable_store_is_healthy() {
        let mut repo = MockRepository::new();
        repo.expect_store_status().times(1).returning(|| {
            Ok(StoreStatus {
                current_time: NaiveDate::from_ymd_opt(2025, 1, 15)
                    .and_then(|d| d.and_hms_opt(12, 0, 0))
                    .expect("valid timestamp"),
                total_entities: 1_234_567,
            })
        });

        let response = check_store(&repo, false);

        assert!(response.is_healthy());
        let json = serde_json::to_value(&response).expect("serializable");
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["database"]["connected"], true);
        assert_eq!(json["database"]["totalEntities"], 1_234_567);
        assert_eq!(json["database"]["currentTime"], "2025-01-15T12:00:00");
    }

    #[test]
    fn unreachable_store_hides_error_by_default() {
        let mut repo = MockRepository::new();
        repo.expect_store_status()
            .times(2)
            .returning(|| Err(RepositoryError::ConnectionError("refused".to_string())));

        let hidden = check_store(&repo, false);
        assert!(!hidden.is_healthy());
        assert!(hidden.database.error.is_none());

        let shown = check_store(&repo, true);
        assert!(
            shown
                .database
                .error
                .is_some_and(|e| e.contains("refused"))
        );
    }
}
