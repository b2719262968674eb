//! Row types for the `blog_generations` table.

use crate::schema::blog_generations;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use scribe_core::{
    BlogType, GenerationRecord, NewGeneration, WritingStyle, character_count, word_count,
};
use scribe_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};
use std::str::FromStr;

/// Stored generation as read from the database.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = blog_generations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GenerationRow {
    pub id: String,
    pub topic: String,
    pub content: String,
    pub blog_type: String,
    pub writing_style: String,
    pub temperature: f32,
    pub max_tokens: i32,
    pub created_at: NaiveDateTime,
    pub word_count: i32,
    pub character_count: i32,
    pub generation_time: Option<f64>,
    pub model_used: Option<String>,
}

/// Generation ready for insertion, with derived counts filled in.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = blog_generations)]
pub struct NewGenerationRow {
    pub id: String,
    pub topic: String,
    pub content: String,
    pub blog_type: String,
    pub writing_style: String,
    pub temperature: f32,
    pub max_tokens: i32,
    pub created_at: NaiveDateTime,
    pub word_count: i32,
    pub character_count: i32,
    pub generation_time: Option<f64>,
    pub model_used: Option<String>,
}

impl NewGenerationRow {
    /// Build an insertable row, computing word and character counts from the content.
    pub fn new(
        id: impl Into<String>,
        new_gen: NewGeneration,
        created_at: NaiveDateTime,
    ) -> DatabaseResult<Self> {
        let word_count = to_column(word_count(&new_gen.content), "word_count")?;
        let character_count = to_column(character_count(&new_gen.content), "character_count")?;
        let max_tokens = to_column(new_gen.max_tokens, "max_tokens")?;

        Ok(Self {
            id: id.into(),
            topic: new_gen.topic,
            content: new_gen.content,
            blog_type: new_gen.blog_type.to_string(),
            writing_style: new_gen.writing_style.to_string(),
            temperature: new_gen.temperature,
            max_tokens,
            created_at,
            word_count,
            character_count,
            generation_time: new_gen.generation_time,
            model_used: new_gen.model_used,
        })
    }
}

fn to_column<T>(value: T, column: &str) -> DatabaseResult<i32>
where
    T: TryInto<i32> + Copy + std::fmt::Display,
{
    value.try_into().map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Serialization(format!(
            "{} {} does not fit in an INTEGER column",
            column, value
        )))
    })
}

fn from_column(value: i32, column: &str) -> DatabaseResult<u32> {
    u32::try_from(value).map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Serialization(format!(
            "Negative {} stored: {}",
            column, value
        )))
    })
}

impl TryFrom<GenerationRow> for GenerationRecord {
    type Error = DatabaseError;

    fn try_from(row: GenerationRow) -> Result<Self, Self::Error> {
        let blog_type = BlogType::from_str(&row.blog_type).map_err(|_| {
            DatabaseError::new(DatabaseErrorKind::Serialization(format!(
                "Unknown blog_type '{}' in row {}",
                row.blog_type, row.id
            )))
        })?;
        let writing_style = WritingStyle::from_str(&row.writing_style).map_err(|_| {
            DatabaseError::new(DatabaseErrorKind::Serialization(format!(
                "Unknown writing_style '{}' in row {}",
                row.writing_style, row.id
            )))
        })?;

        Ok(GenerationRecord {
            max_tokens: from_column(row.max_tokens, "max_tokens")?,
            word_count: from_column(row.word_count, "word_count")?,
            character_count: from_column(row.character_count, "character_count")?,
            id: row.id,
            content: row.content,
            topic: row.topic,
            blog_type,
            writing_style,
            temperature: row.temperature,
            created_at: row.created_at.and_utc(),
            generation_time: row.generation_time,
            model_used: row.model_used,
        })
    }
}
