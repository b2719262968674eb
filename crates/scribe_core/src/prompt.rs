//! Prompt construction for blog generation.

use crate::{BlogType, WritingStyle};

/// System message sent ahead of every generation prompt.
pub const SYSTEM_PERSONA: &str =
    "You are a professional blog writer who creates engaging, well-structured content.";

/// The user-facing prompt for one generation.
///
/// # Examples
///
/// ```
/// use scribe_core::{BlogPrompt, BlogType, WritingStyle};
///
/// let prompt = BlogPrompt::new("Coffee", BlogType::Intro, WritingStyle::Casual);
/// let text = prompt.render();
/// assert!(text.contains("Topic: Coffee"));
/// assert!(text.contains("Write in casual style"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct BlogPrompt {
    topic: String,
    blog_type: BlogType,
    writing_style: WritingStyle,
}

impl BlogPrompt {
    /// Create a prompt for a topic.
    pub fn new(topic: impl Into<String>, blog_type: BlogType, writing_style: WritingStyle) -> Self {
        Self {
            topic: topic.into(),
            blog_type,
            writing_style,
        }
    }

    /// Render the full instruction text.
    pub fn render(&self) -> String {
        format!(
            "You are an expert blog writer. {type_instruction}\n\
             \n\
             Topic: {topic}\n\
             \n\
             Writing Style: {style_instruction}\n\
             \n\
             Requirements:\n\
             - Make it engaging and well-structured\n\
             - Use appropriate headings if needed\n\
             - Keep the content focused and valuable\n\
             - Write in {style} style\n\
             \n\
             Please write the blog content now:",
            type_instruction = self.blog_type.instruction(),
            topic = self.topic,
            style_instruction = self.writing_style.instruction(),
            style = self.writing_style,
        )
    }
}

impl std::fmt::Display for BlogPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
