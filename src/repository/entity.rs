use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::db::fold_case;
use crate::domain::entity::EntityRecord;
use crate::domain::health::StoreStatus;
use crate::domain::search::SearchFilter;
use crate::models::entity::BusinessEntity;
use crate::pagination::PageWindow;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, EntityReader, StoreHealthReader};
use crate::schema::business_entities;

/// Converts a store count into `u64`, rejecting the impossible negative case.
fn to_count(count: i64) -> RepositoryResult<u64> {
    u64::try_from(count)
        .map_err(|_| RepositoryError::Unexpected(format!("Negative row count: {count}")))
}

/// Clamps a window bound to the store's signed 64-bit range.
fn to_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl EntityReader for DieselRepository {
    fn find_entities_by_name(
        &self,
        filter: &SearchFilter,
        window: PageWindow,
    ) -> RepositoryResult<Vec<EntityRecord>> {
        let mut conn = self.conn()?;

        let items = business_entities::table
            .filter(fold_case(business_entities::entity_name).like(fold_case(filter.pattern())))
            .order(business_entities::entity_name.asc())
            .limit(to_bound(window.limit))
            .offset(to_bound(window.offset))
            .select(BusinessEntity::as_select())
            .load::<BusinessEntity>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn count_entities_by_name(&self, filter: &SearchFilter) -> RepositoryResult<u64> {
        let mut conn = self.conn()?;

        let total: i64 = business_entities::table
            .filter(fold_case(business_entities::entity_name).like(fold_case(filter.pattern())))
            .count()
            .get_result(&mut conn)?;

        to_count(total)
    }
}

impl StoreHealthReader for DieselRepository {
    fn store_status(&self) -> RepositoryResult<StoreStatus> {
        let mut conn = self.conn()?;

        let current_time: NaiveDateTime =
            diesel::select(diesel::dsl::now).get_result(&mut conn)?;
        let total: i64 = business_entities::table.count().get_result(&mut conn)?;

        Ok(StoreStatus {
            current_time,
            total_entities: to_count(total)?,
        })
    }
}
