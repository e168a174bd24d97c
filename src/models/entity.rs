use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::entity::EntityRecord;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::business_entities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel projection of a `business_entities` row.
pub struct BusinessEntity {
    pub entity_number: String,
    pub entity_name: String,
    pub status: Option<String>,
    pub formation_date: Option<NaiveDate>,
    pub entity_type: Option<String>,
}

impl From<BusinessEntity> for EntityRecord {
    fn from(entity: BusinessEntity) -> Self {
        Self {
            entity_number: entity.entity_number,
            entity_name: entity.entity_name,
            status: entity.status,
            formation_date: entity.formation_date,
            entity_type: entity.entity_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_domain_record() {
        let row = BusinessEntity {
            entity_number: "C0001".to_string(),
            entity_name: "Acme Corp".to_string(),
            status: Some("Active".to_string()),
            formation_date: NaiveDate::from_ymd_opt(1999, 4, 1),
            entity_type: None,
        };

        let record = EntityRecord::from(row);

        assert_eq!(record.entity_number, "C0001");
        assert_eq!(record.entity_name, "Acme Corp");
        assert_eq!(record.status.as_deref(), Some("Active"));
        assert_eq!(record.formation_date, NaiveDate::from_ymd_opt(1999, 4, 1));
        assert_eq!(record.entity_type, None);
    }
}
