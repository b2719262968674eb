//! Shared helpers for database tests.

use scribe_core::{BlogType, NewGeneration, WritingStyle};
use std::path::PathBuf;

/// A database file in the temp directory, removed on drop.
pub struct TempDatabase {
    path: PathBuf,
}

#[allow(dead_code)]
impl TempDatabase {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("scribe-test-{}.db", uuid::Uuid::new_v4()));
        Self { path }
    }

    pub fn url(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl Drop for TempDatabase {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

#[allow(dead_code)]
pub fn generation(topic: &str, content: &str) -> NewGeneration {
    NewGeneration::builder()
        .topic(topic)
        .content(content)
        .blog_type(BlogType::Intro)
        .writing_style(WritingStyle::Casual)
        .temperature(0.7f32)
        .max_tokens(512u32)
        .build()
        .expect("complete generation")
}
