//! Content-type and writing-style enumerations.

use serde::{Deserialize, Serialize};

/// Kind of blog content to produce.
///
/// # Examples
///
/// ```
/// use scribe_core::BlogType;
/// use std::str::FromStr;
///
/// assert_eq!(BlogType::from_str("full_article").unwrap(), BlogType::FullArticle);
/// assert_eq!(BlogType::Listicle.to_string(), "listicle");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BlogType {
    /// Two or three paragraph introduction
    #[default]
    Intro,
    /// Complete article with introduction, body and conclusion
    FullArticle,
    /// Numbered or bulleted list post
    Listicle,
    /// Step-by-step how-to guide
    Tutorial,
}

impl BlogType {
    /// Instruction sentence placed after the persona line of the prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            BlogType::Intro => {
                "Write a compelling blog introduction (2-3 paragraphs) that hooks the reader and introduces the topic."
            }
            BlogType::FullArticle => {
                "Write a complete blog article with introduction, main points, and conclusion."
            }
            BlogType::Listicle => {
                "Write a listicle-style blog post with numbered or bulleted points."
            }
            BlogType::Tutorial => "Write a step-by-step tutorial or how-to guide.",
        }
    }
}

/// Tone the generated text should take.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WritingStyle {
    /// Formal and authoritative
    #[default]
    Professional,
    /// Conversational and friendly
    Casual,
    /// Accurate, jargon-friendly, detailed
    Technical,
    /// Storytelling and metaphor
    Creative,
}

impl WritingStyle {
    /// Instruction sentence describing the tone.
    pub fn instruction(&self) -> &'static str {
        match self {
            WritingStyle::Professional => {
                "Write in a professional, authoritative tone with clear structure and formal language."
            }
            WritingStyle::Casual => {
                "Write in a conversational, friendly tone that's easy to read and engaging."
            }
            WritingStyle::Technical => {
                "Write with technical accuracy, using appropriate jargon and detailed explanations."
            }
            WritingStyle::Creative => {
                "Write with creativity, using storytelling elements and engaging metaphors."
            }
        }
    }
}
