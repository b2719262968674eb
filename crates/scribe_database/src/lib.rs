//! SQLite persistence for Scribe.
//!
//! This crate provides the schema, row models, embedded migrations and
//! repository implementations for the generation history.
//!
//! # Example
//!
//! ```rust,no_run
//! use scribe_database::DatabaseGenerationStore;
//! use scribe_interface::GenerationStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = DatabaseGenerationStore::connect("blog_writer.db", 8)?;
//! let recent = store.list(10, 0).await?;
//! println!("{} of {} generations", recent.len(), store.count().await?);
//! # Ok(())
//! # }
//! ```

mod connection;
mod generation_repository;
mod models;
mod store;

pub mod schema;

pub use connection::{
    MIGRATIONS, SqlitePool, create_pool, establish_connection, run_migrations,
};
pub use generation_repository::{GenerationRepository, SqliteGenerationRepository, like_pattern};
pub use models::{GenerationRow, NewGenerationRow};
pub use store::DatabaseGenerationStore;

pub use scribe_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};
