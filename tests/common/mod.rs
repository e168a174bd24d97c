#![allow(dead_code)]

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use entity_search::db::{DbPool, PoolConfig, establish_connection_pool};
use entity_search::repository::DieselRepository;
use entity_search::schema::business_entities;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Temporary SQLite registry, removed when dropped.
pub struct TestDb {
    _dir: TempDir,
    url: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let url = dir
            .path()
            .join(name)
            .to_str()
            .expect("utf-8 path")
            .to_string();
        let config = PoolConfig {
            max_size: 4,
            ..PoolConfig::default()
        };
        let pool = establish_connection_pool(&url, &config).expect("open pool");
        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");
        Self {
            _dir: dir,
            url,
            pool,
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone(), &self.url)
    }

    /// Single-connection pool on the same file that gives up almost at once
    /// when its connection is taken.
    pub fn starved_pool(&self) -> DbPool {
        let config = PoolConfig {
            max_size: 1,
            connection_timeout_secs: 1,
            ..PoolConfig::default()
        };
        establish_connection_pool(&self.url, &config).expect("open pool")
    }

    /// Inserts `(entity_number, entity_name)` rows with an active status.
    pub fn seed(&self, rows: &[(String, String)]) {
        let mut conn = self.pool.get().expect("get connection");
        let values: Vec<_> = rows
            .iter()
            .map(|(number, name)| {
                (
                    business_entities::entity_number.eq(number),
                    business_entities::entity_name.eq(name),
                    business_entities::status.eq(Some("Active")),
                    business_entities::entity_type.eq(Some("Stock Corporation")),
                )
            })
            .collect();
        diesel::insert_into(business_entities::table)
            .values(values)
            .execute(&mut conn)
            .expect("seed entities");
    }

    /// 30 entities containing "acme" in varying case plus unrelated noise.
    pub fn seed_acme_registry(&self) {
        let mut rows: Vec<(String, String)> = (0..30)
            .map(|i| {
                let name = match i % 3 {
                    0 => format!("ACME Industries {i:02}"),
                    1 => format!("Acme Holdings {i:02}"),
                    _ => format!("The acme Group {i:02}"),
                };
                (format!("A{i:07}"), name)
            })
            .collect();
        rows.extend((0..12).map(|i| (format!("B{i:07}"), format!("Bravo Logistics {i:02}"))));
        self.seed(&rows);
    }
}
