//! Repository for stored blog generations.

use crate::schema::blog_generations;
use crate::{GenerationRow, NewGenerationRow};
use chrono::{NaiveDateTime, SubsecRound, TimeDelta, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use scribe_core::{GenerationRecord, NewGeneration};
use scribe_error::{DatabaseError, DatabaseResult};
use scribe_interface::clamp_limit;

/// Repository trait for generation history operations.
///
/// Every listing is ordered by `created_at` descending.
pub trait GenerationRepository {
    /// Insert a generation and return the stored record.
    ///
    /// Assigns a fresh UUID and a timestamp later than every existing row,
    /// and derives word and character counts from the content.
    ///
    /// # Errors
    /// Returns DatabaseError if the insert or the read-back fails
    fn save(&mut self, new_gen: NewGeneration) -> DatabaseResult<GenerationRecord>;

    /// Page through records, newest first.
    ///
    /// `limit` is clamped to `1..=100`; a negative `offset` is treated as zero.
    fn list(&mut self, limit: i64, offset: i64) -> DatabaseResult<Vec<GenerationRecord>>;

    /// Fetch a record by id.
    fn get(&mut self, id: &str) -> DatabaseResult<Option<GenerationRecord>>;

    /// Remove a record, returning whether a row was deleted.
    fn delete(&mut self, id: &str) -> DatabaseResult<bool>;

    /// Total number of rows.
    fn count(&mut self) -> DatabaseResult<i64>;

    /// Records whose topic or content contains `query` literally.
    ///
    /// Matching is case-insensitive for ASCII letters only.
    fn search(&mut self, query: &str, limit: i64) -> DatabaseResult<Vec<GenerationRecord>>;
}

/// SQLite implementation of GenerationRepository.
///
/// Borrows a connection for its lifetime; the async store builds one per
/// pooled checkout.
pub struct SqliteGenerationRepository<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> SqliteGenerationRepository<'a> {
    /// Create a new repository with a mutable connection reference.
    ///
    /// # Example
    /// ```no_run
    /// use scribe_database::{GenerationRepository, SqliteGenerationRepository, establish_connection};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut conn = establish_connection("blog_writer.db")?;
    /// let mut repo = SqliteGenerationRepository::new(&mut conn);
    /// println!("{} generations", repo.count()?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }
}

/// Escape LIKE wildcards so `query` matches as a literal substring.
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn into_records(rows: Vec<GenerationRow>) -> DatabaseResult<Vec<GenerationRecord>> {
    rows.into_iter().map(GenerationRecord::try_from).collect()
}

/// Timestamp for a new row: now, or one microsecond past the newest row.
fn next_timestamp(newest: Option<NaiveDateTime>) -> NaiveDateTime {
    let now = Utc::now().naive_utc().trunc_subsecs(6);
    match newest {
        Some(newest) if newest >= now => newest + TimeDelta::microseconds(1),
        _ => now,
    }
}

impl<'a> GenerationRepository for SqliteGenerationRepository<'a> {
    fn save(&mut self, new_gen: NewGeneration) -> DatabaseResult<GenerationRecord> {
        use crate::schema::blog_generations::dsl;

        let id = uuid::Uuid::new_v4().to_string();
        let row = self
            .conn
            .immediate_transaction::<_, DatabaseError, _>(|conn| {
                let newest: Option<NaiveDateTime> = dsl::blog_generations
                    .select(dsl::created_at)
                    .order(dsl::created_at.desc())
                    .first(conn)
                    .optional()?;

                let new_row = NewGenerationRow::new(id.as_str(), new_gen, next_timestamp(newest))?;
                diesel::insert_into(blog_generations::table)
                    .values(&new_row)
                    .execute(conn)?;

                let stored: GenerationRow = dsl::blog_generations
                    .find(id.as_str())
                    .select(GenerationRow::as_select())
                    .first(conn)?;
                Ok(stored)
            })?;

        tracing::debug!(id = %row.id, word_count = row.word_count, "Saved generation");
        GenerationRecord::try_from(row)
    }

    fn list(&mut self, limit: i64, offset: i64) -> DatabaseResult<Vec<GenerationRecord>> {
        use crate::schema::blog_generations::dsl;

        let rows = dsl::blog_generations
            .select(GenerationRow::as_select())
            .order(dsl::created_at.desc())
            .limit(clamp_limit(limit))
            .offset(offset.max(0))
            .load(self.conn)?;
        into_records(rows)
    }

    fn get(&mut self, id: &str) -> DatabaseResult<Option<GenerationRecord>> {
        use crate::schema::blog_generations::dsl;

        dsl::blog_generations
            .find(id)
            .select(GenerationRow::as_select())
            .first::<GenerationRow>(self.conn)
            .optional()?
            .map(GenerationRecord::try_from)
            .transpose()
    }

    fn delete(&mut self, id: &str) -> DatabaseResult<bool> {
        use crate::schema::blog_generations::dsl;

        let removed = diesel::delete(dsl::blog_generations.find(id)).execute(self.conn)?;
        Ok(removed > 0)
    }

    fn count(&mut self) -> DatabaseResult<i64> {
        use crate::schema::blog_generations::dsl;

        Ok(dsl::blog_generations.count().get_result(self.conn)?)
    }

    fn search(&mut self, query: &str, limit: i64) -> DatabaseResult<Vec<GenerationRecord>> {
        use crate::schema::blog_generations::dsl;

        let pattern = like_pattern(query);
        let rows = dsl::blog_generations
            .select(GenerationRow::as_select())
            .filter(
                dsl::topic
                    .like(pattern.as_str())
                    .escape('\\')
                    .or(dsl::content.like(pattern.as_str()).escape('\\')),
            )
            .order(dsl::created_at.desc())
            .limit(clamp_limit(limit))
            .load(self.conn)?;
        into_records(rows)
    }
}
