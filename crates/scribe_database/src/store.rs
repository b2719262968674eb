//! GenerationStore implementation over a pooled SQLite database.

use crate::{GenerationRepository, SqliteGenerationRepository, SqlitePool, create_pool};
use async_trait::async_trait;
use scribe_core::{GenerationRecord, NewGeneration};
use scribe_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};
use scribe_interface::GenerationStore;

/// Database-backed generation store.
///
/// Each operation checks a connection out of the pool on a blocking worker;
/// the connection goes back to the pool when the guard drops.
#[derive(Clone)]
pub struct DatabaseGenerationStore {
    pool: SqlitePool,
}

impl DatabaseGenerationStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database file, migrate it, and wrap it in a store.
    pub fn connect(database_url: &str, max_connections: u32) -> DatabaseResult<Self> {
        create_pool(database_url, max_connections).map(Self::new)
    }

    /// The underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn with_repository<T, F>(&self, op: F) -> DatabaseResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteGenerationRepository<'_>) -> DatabaseResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| {
                tracing::error!("Failed to check out a database connection: {}", e);
                DatabaseError::new(DatabaseErrorKind::Connection(e.to_string()))
            })?;
            let mut repo = SqliteGenerationRepository::new(&mut conn);
            op(&mut repo)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?
    }
}

#[async_trait]
impl GenerationStore for DatabaseGenerationStore {
    #[tracing::instrument(skip(self, new_gen), fields(topic = %new_gen.topic))]
    async fn save(&self, new_gen: NewGeneration) -> DatabaseResult<GenerationRecord> {
        self.with_repository(move |repo| repo.save(new_gen)).await
    }

    async fn list(&self, limit: i64, offset: i64) -> DatabaseResult<Vec<GenerationRecord>> {
        self.with_repository(move |repo| repo.list(limit, offset))
            .await
    }

    async fn get(&self, id: &str) -> DatabaseResult<Option<GenerationRecord>> {
        let id = id.to_string();
        self.with_repository(move |repo| repo.get(&id)).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: &str) -> DatabaseResult<bool> {
        let id = id.to_string();
        self.with_repository(move |repo| repo.delete(&id)).await
    }

    async fn count(&self) -> DatabaseResult<i64> {
        self.with_repository(|repo| repo.count()).await
    }

    #[tracing::instrument(skip(self))]
    async fn search(&self, query: &str, limit: i64) -> DatabaseResult<Vec<GenerationRecord>> {
        let query = query.to_string();
        self.with_repository(move |repo| repo.search(&query, limit))
            .await
    }
}
