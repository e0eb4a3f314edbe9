//! Content loader - loads posts from the content directory

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::{FrontMatter, MarkdownRenderer, Post};
use crate::config::SiteConfig;

/// Loads posts from the content directory
pub struct ContentLoader {
    renderer: MarkdownRenderer,
    default_author: String,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new(config: &SiteConfig) -> Self {
        let renderer = MarkdownRenderer::new(&config.markdown);
        Self {
            renderer,
            default_author: config.blog.default_author.clone(),
        }
    }

    /// Load all posts from the content directory, sorted by date descending.
    ///
    /// A missing directory is not an error: the build proceeds with zero
    /// posts. Any unreadable or invalid post file aborts the load.
    pub fn load_posts(&self, content_dir: &Path) -> Result<Vec<Post>> {
        if !content_dir.exists() {
            tracing::warn!("Content directory not found: {:?}", content_dir);
            return Ok(Vec::new());
        }

        // Direct children only, sorted by filename so equal dates keep a
        // deterministic order across runs and platforms.
        let mut paths: Vec<PathBuf> = fs::read_dir(content_dir)
            .with_context(|| format!("failed to read content directory {:?}", content_dir))?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && is_markdown_file(p))
            .collect();
        paths.sort();

        let mut posts = Vec::with_capacity(paths.len());
        let mut seen_slugs: HashSet<String> = HashSet::new();

        for path in &paths {
            let post = self
                .load_post(path)
                .with_context(|| format!("failed to load post {:?}", path))?;

            if !seen_slugs.insert(post.slug.clone()) {
                bail!("duplicate post slug {:?} from file {:?}", post.slug, path);
            }
            posts.push(post);
        }

        // Newest first; the sort is stable, so ties keep filename order
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(slug::slugify)
            .unwrap_or_default();
        if slug.is_empty() {
            bail!("cannot derive a slug from filename");
        }

        let date = match &fm.date {
            Some(raw) => fm
                .parse_date()
                .with_context(|| format!("unrecognized date format {:?}", raw))?,
            None => bail!("front-matter is missing required field `date`"),
        };

        let Some(title) = fm.title else {
            bail!("front-matter is missing required field `title`");
        };

        let content_html = self.renderer.render(body);

        Ok(Post {
            slug,
            title,
            date,
            description: fm.description.unwrap_or_default(),
            author: fm.author.unwrap_or_else(|| self.default_author.clone()),
            tags: fm.tags,
            content: content_html,
            raw: body.to_string(),
        })
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
