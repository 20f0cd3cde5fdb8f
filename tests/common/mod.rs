use bookstore_api::db::{DbPool, establish_connection_pool};
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A throwaway SQLite database with the schema applied; the backing
/// directory is removed on drop.
pub struct TestDb {
    pool: DbPool,
    _tmp: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let path = tmp.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create connection pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { pool, _tmp: tmp }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// Categories have no write endpoint, so tests seed them directly.
#[allow(dead_code)]
pub fn seed_category(pool: &DbPool, name: &str) -> i32 {
    use bookstore_api::schema::categories;

    let mut conn = pool.get().expect("get connection");
    diesel::insert_into(categories::table)
        .values(categories::name.eq(name))
        .get_result::<bookstore_api::models::category::Category>(&mut conn)
        .expect("insert category")
        .id
}
