//! Database connection utilities.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use scribe_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};

/// Pool of SQLite connections shared by the async store.
pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Pragmas applied to every connection the pool hands out.
const CONNECTION_PRAGMAS: &str = "PRAGMA busy_timeout = 5000; PRAGMA journal_mode = WAL;";

#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(CONNECTION_PRAGMAS)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Open a single connection to the SQLite file at `database_url`.
///
/// The file is created if it does not exist. Migrations are not run.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or the pragmas fail.
pub fn establish_connection(database_url: &str) -> DatabaseResult<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)?;
    conn.batch_execute(CONNECTION_PRAGMAS)?;
    Ok(conn)
}

/// Apply any migrations the database has not seen yet.
///
/// # Errors
///
/// Returns a `Migration` error if a migration fails to apply.
pub fn run_migrations(conn: &mut SqliteConnection) -> DatabaseResult<()> {
    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
        tracing::error!("Failed to run migrations: {}", e);
        DatabaseError::new(DatabaseErrorKind::Migration(e.to_string()))
    })?;

    if applied.is_empty() {
        tracing::debug!("Schema is up to date");
    } else {
        tracing::info!(count = applied.len(), "Applied pending migrations");
    }
    Ok(())
}

/// Build a connection pool for `database_url` and bring the schema up to date.
///
/// # Errors
///
/// Returns an error if the pool cannot open a connection or a migration fails.
#[tracing::instrument]
pub fn create_pool(database_url: &str, max_size: u32) -> DatabaseResult<SqlitePool> {
    // Switch to WAL and migrate on one connection before the pool opens several.
    let mut conn = establish_connection(database_url)?;
    run_migrations(&mut conn)?;
    drop(conn);

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size.max(1))
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)?;

    tracing::info!("Database pool ready");
    Ok(pool)
}
