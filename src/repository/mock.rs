//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::entity::EntityRecord;
use crate::domain::health::StoreStatus;
use crate::domain::search::SearchFilter;
use crate::pagination::PageWindow;
use crate::repository::errors::RepositoryResult;
use crate::repository::{EntityReader, StoreHealthReader};

mock! {
    pub Repository {}

    impl EntityReader for Repository {
        fn find_entities_by_name(
            &self,
            filter: &SearchFilter,
            window: PageWindow,
        ) -> RepositoryResult<Vec<EntityRecord>>;
        fn count_entities_by_name(&self, filter: &SearchFilter) -> RepositoryResult<u64>;
    }

    impl StoreHealthReader for Repository {
        fn store_status(&self) -> RepositoryResult<StoreStatus>;
    }
}
