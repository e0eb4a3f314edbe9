//! Post model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A blog post. Created once per source file during content loading and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// URL-safe identifier derived from the source filename
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date
    pub date: NaiveDateTime,

    /// Short description, empty when not supplied
    pub description: String,

    /// Author name, the configured default when not supplied
    pub author: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Rendered HTML content
    pub content: String,

    /// Raw markdown body
    pub raw: String,
}

impl Post {
    /// Site-relative URL path of the post page
    pub fn path(&self) -> String {
        format!("/posts/{}/", self.slug)
    }
}
