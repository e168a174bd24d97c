use crate::db::{DatabaseTarget, DbConnection, DbPool, describe_database_url, get_connection};
use crate::domain::entity::EntityRecord;
use crate::domain::health::StoreStatus;
use crate::domain::search::SearchFilter;
use crate::pagination::PageWindow;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod entity;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Diesel-backed repository owning the shared connection pool.
///
/// Cloning is cheap; every read acquires its own pooled connection and
/// returns it when the read completes, whether or not it succeeded.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
    target: DatabaseTarget,
}

impl DieselRepository {
    /// Wraps `pool`; `database_url` is only kept in redacted form for
    /// connection error messages.
    pub fn new(pool: DbPool, database_url: &str) -> Self {
        Self {
            pool,
            target: describe_database_url(database_url),
        }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        get_connection(&self.pool).map_err(|e| {
            RepositoryError::ConnectionError(format!("{e} ({})", self.target))
        })
    }
}

/// Name lookups against the business entity registry.
pub trait EntityReader {
    /// Records whose name matches `filter`, ordered by name, restricted to
    /// `window`.
    fn find_entities_by_name(
        &self,
        filter: &SearchFilter,
        window: PageWindow,
    ) -> RepositoryResult<Vec<EntityRecord>>;
    /// Number of records whose name matches `filter`.
    fn count_entities_by_name(&self, filter: &SearchFilter) -> RepositoryResult<u64>;
}

pub trait StoreHealthReader {
    fn store_status(&self) -> RepositoryResult<StoreStatus>;
}
