//! SQLite connection pool shared by every request.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const DEFAULT_POOL_SIZE: u32 = 8;

/// Per-connection setup. SQLite only enforces `books.category_id` when
/// `foreign_keys` is switched on for the connection issuing the statement.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout_ms
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build a pool with [`DEFAULT_POOL_SIZE`] connections.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    establish_connection_pool_with_size(database_url, DEFAULT_POOL_SIZE)
}

pub fn establish_connection_pool_with_size(
    database_url: &str,
    max_size: u32,
) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout_ms: 5000,
        }))
        .build(manager)
}

#[cfg(feature = "server")]
pub mod migrations {
    use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

    use super::DbPool;

    pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

    /// Apply every pending migration and return how many ran.
    pub fn run_pending(pool: &DbPool) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        let mut conn = pool.get()?;
        let applied = conn.run_pending_migrations(MIGRATIONS)?;
        Ok(applied.len())
    }
}
