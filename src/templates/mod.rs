//! Page rendering with the Tera template engine
//!
//! The default theme templates are embedded in the binary; a file with the
//! same name in the configured templates directory overrides the embedded
//! copy.

use anyhow::{Context as _, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::Post;

/// Template renderer with the embedded default theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer. Embedded templates are always registered;
    /// `.html` files under `templates_dir` (if it exists) override them.
    pub fn new(templates_dir: &Path) -> Result<Self> {
        let mut tera = Tera::default();

        // The whole output is HTML we generate ourselves; post bodies are
        // already rendered HTML and must not be escaped again.
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("default/layout.html")),
            ("index.html", include_str!("default/index.html")),
            ("post.html", include_str!("default/post.html")),
            ("about.html", include_str!("default/about.html")),
            (
                "partials/head.html",
                include_str!("default/partials/head.html"),
            ),
            (
                "partials/nav.html",
                include_str!("default/partials/nav.html"),
            ),
            (
                "partials/footer.html",
                include_str!("default/partials/footer.html"),
            ),
        ])?;

        if templates_dir.is_dir() {
            for entry in walkdir::WalkDir::new(templates_dir)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                let is_html = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e == "html")
                    .unwrap_or(false);
                if !path.is_file() || !is_html {
                    continue;
                }
                let name = path
                    .strip_prefix(templates_dir)
                    .unwrap_or(path)
                    .to_string_lossy()
                    .replace('\\', "/");
                tera.add_template_file(path, Some(name.as_str()))
                    .with_context(|| format!("failed to load template {:?}", path))?;
            }
        }

        tera.register_filter("strip_html", strip_html_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);
        tera.register_filter("reading_time", reading_time_filter);

        Ok(Self { tera })
    }

    /// Render a template with the given context. An unresolvable template
    /// reference is a build error carrying the template name.
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        self.tera
            .render(template_name, context)
            .with_context(|| format!("failed to render template {:?}", template_name))
    }
}

/// Tera filter: strip HTML tags
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    Ok(tera::Value::String(result))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!("{}…", truncated.trim_end())))
    }
}

/// Tera filter: estimated reading time in minutes (200 wpm)
fn reading_time_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("reading_time", "value", String, value);
    let words = s.split_whitespace().count();
    let minutes = (words / 200).max(1);
    Ok(tera::Value::Number(minutes.into()))
}

/// Post as seen by templates: dates preformatted, derived display fields
/// attached.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub slug: String,
    pub title: String,
    /// Display date, formatted per `blog.date_format`
    pub date: String,
    /// Machine-readable date for `<time datetime>` and feeds
    pub date_iso: String,
    pub description: String,
    pub author: String,
    pub tags: Vec<String>,
    pub content: String,
    pub path: String,
}

impl PostView {
    /// Build the template view of a post
    pub fn from_post(post: &Post, config: &SiteConfig) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            date: format_date(&post.date, &config.blog.date_format),
            date_iso: post.date.format("%Y-%m-%dT%H:%M:%S").to_string(),
            description: post.description.clone(),
            author: post.author.clone(),
            tags: post.tags.clone(),
            content: post.content.clone(),
            path: post.path(),
        }
    }
}

/// Format a date per the configured style ("short", "long", or "numeric")
fn format_date(date: &chrono::NaiveDateTime, style: &str) -> String {
    match style {
        "short" => date.format("%b %-d, %Y").to_string(),
        "numeric" => date.format("%Y-%m-%d").to_string(),
        _ => date.format("%B %-d, %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn renderer() -> TemplateRenderer {
        // Point at a directory that does not exist so only embedded
        // templates are in play.
        TemplateRenderer::new(Path::new("/nonexistent-templates")).unwrap()
    }

    fn sample_post() -> Post {
        Post {
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            description: "A greeting".to_string(),
            author: "Anonymous".to_string(),
            tags: vec!["intro".to_string()],
            content: "<p>Hi there.</p>".to_string(),
            raw: "Hi there.".to_string(),
        }
    }

    #[test]
    fn test_render_index_with_posts() {
        let config = SiteConfig::default();
        let posts = vec![PostView::from_post(&sample_post(), &config)];

        let mut context = Context::new();
        context.insert("config", &config);
        context.insert("posts", &posts);
        context.insert("page_title", &config.site.title);

        let html = renderer().render("index.html", &context).unwrap();
        assert!(html.contains("Hello"));
        assert!(html.contains("/posts/hello/"));
    }

    #[test]
    fn test_render_index_empty_listing() {
        let config = SiteConfig::default();
        let posts: Vec<PostView> = Vec::new();

        let mut context = Context::new();
        context.insert("config", &config);
        context.insert("posts", &posts);
        context.insert("page_title", &config.site.title);

        let html = renderer().render("index.html", &context).unwrap();
        assert!(html.contains("No posts yet"));
    }

    #[test]
    fn test_render_post_page() {
        let config = SiteConfig::default();
        let post = PostView::from_post(&sample_post(), &config);

        let mut context = Context::new();
        context.insert("config", &config);
        context.insert("post", &post);
        context.insert("page_title", &post.title);

        let html = renderer().render("post.html", &context).unwrap();
        assert!(html.contains("<p>Hi there.</p>"));
        assert!(html.contains("January 1, 2024"));
    }

    #[test]
    fn test_missing_template_is_error() {
        let context = Context::new();
        assert!(renderer().render("missing.html", &context).is_err());
    }

    #[test]
    fn test_unresolvable_reference_is_error() {
        // index.html needs config and posts; an empty context must fail
        let context = Context::new();
        assert!(renderer().render("index.html", &context).is_err());
    }

    #[test]
    fn test_strip_html_filter() {
        let value = tera::Value::String("<p>Hello <b>world</b></p>".to_string());
        let out = strip_html_filter(&value, &HashMap::new()).unwrap();
        assert_eq!(out, tera::Value::String("Hello world".to_string()));
    }

    #[test]
    fn test_truncate_chars_filter() {
        let value = tera::Value::String("abcdefghij".to_string());
        let mut args = HashMap::new();
        args.insert("length".to_string(), tera::Value::Number(4.into()));
        let out = truncate_chars_filter(&value, &args).unwrap();
        assert_eq!(out, tera::Value::String("abcd…".to_string()));
    }

    #[test]
    fn test_format_date_styles() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_date(&date, "numeric"), "2024-03-05");
        assert_eq!(format_date(&date, "short"), "Mar 5, 2024");
        assert_eq!(format_date(&date, "long"), "March 5, 2024");
    }
}
