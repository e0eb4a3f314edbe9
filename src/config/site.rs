//! Site configuration (config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration. Loaded once at startup and passed by reference
/// into every component; never mutated during a build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteMeta,
    pub social: SocialLinks,
    pub blog: BlogConfig,
    pub navigation: Vec<NavEntry>,
    pub paths: PathsConfig,
    pub build: BuildConfig,
    pub seo: SeoConfig,
    pub features: FeatureFlags,
    pub analytics: AnalyticsConfig,
    pub comments: CommentsConfig,
    pub rss: RssConfig,
    pub theme: ThemeTokens,
    pub markdown: MarkdownConfig,
    pub dev: DevConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteMeta::default(),
            social: SocialLinks::default(),
            blog: BlogConfig::default(),
            navigation: vec![
                NavEntry {
                    name: "Home".to_string(),
                    path: "/".to_string(),
                    active: true,
                },
                NavEntry {
                    name: "About".to_string(),
                    path: "/about/".to_string(),
                    active: true,
                },
            ],
            paths: PathsConfig::default(),
            build: BuildConfig::default(),
            seo: SeoConfig::default(),
            features: FeatureFlags::default(),
            analytics: AnalyticsConfig::default(),
            comments: CommentsConfig::default(),
            rss: RssConfig::default(),
            theme: ThemeTokens::default(),
            markdown: MarkdownConfig::default(),
            dev: DevConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Site metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    pub author: String,
    pub email: String,
    /// Production URL, no trailing slash
    pub url: String,
    pub lang: String,
    pub favicon: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: "A personal blog".to_string(),
            author: "Your Name".to_string(),
            email: String::new(),
            url: "https://example.com".to_string(),
            lang: "en".to_string(),
            favicon: "/favicon.ico".to_string(),
        }
    }
}

/// Social media links. An empty string hides the link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub twitter: String,
    pub github: String,
    pub linkedin: String,
    pub facebook: String,
    pub instagram: String,
}

/// Blog presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub posts_per_page: usize,
    pub excerpt_length: usize,
    /// "short", "long", or "numeric"
    pub date_format: String,
    pub show_reading_time: bool,
    pub show_author: bool,
    pub show_tags: bool,
    /// Fallback when a post has no author field
    pub default_author: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            posts_per_page: 10,
            excerpt_length: 150,
            date_format: "long".to_string(),
            show_reading_time: true,
            show_author: true,
            show_tags: true,
            default_author: "Anonymous".to_string(),
        }
    }
}

/// Navigation menu entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavEntry {
    pub name: String,
    pub path: String,
    pub active: bool,
}

impl Default for NavEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            path: "/".to_string(),
            active: true,
        }
    }
}

/// Directory paths, relative to the base directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub content: String,
    pub templates: String,
    pub styles: String,
    pub scripts: String,
    pub public: String,
    pub build: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: "content/posts".to_string(),
            templates: "templates".to_string(),
            styles: "styles".to_string(),
            scripts: "scripts".to_string(),
            public: "public".to_string(),
            build: "build".to_string(),
        }
    }
}

/// Build flags
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Remove the output directory before building
    pub clean: bool,
    /// Emit a progress line per build step
    pub verbose: bool,
    pub sitemap: bool,
    pub rss: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            clean: true,
            verbose: true,
            sitemap: true,
            rss: true,
        }
    }
}

/// SEO defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    pub og_image: String,
    pub twitter_card: String,
    pub keywords: Vec<String>,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            og_image: "/images/og-image.jpg".to_string(),
            twitter_card: "summary_large_image".to_string(),
            keywords: Vec::new(),
        }
    }
}

/// Feature toggles. `comments` and `analytics` are configuration surface
/// only; the build does not wire them to any integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub comments: bool,
    pub analytics: bool,
    pub search: bool,
    pub dark_mode: bool,
    pub related_posts: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            comments: false,
            analytics: false,
            search: false,
            dark_mode: false,
            related_posts: true,
        }
    }
}

/// Analytics provider ids
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub google_analytics: String,
    pub plausible: String,
}

/// Comment provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    /// "disqus", "utterances", or "giscus"
    pub provider: String,
    pub disqus_shortname: String,
    pub utterances_repo: String,
    pub giscus_repo: String,
    pub giscus_repo_id: String,
    pub giscus_category: String,
    pub giscus_category_id: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            provider: "disqus".to_string(),
            disqus_shortname: String::new(),
            utterances_repo: String::new(),
            giscus_repo: String::new(),
            giscus_repo_id: String::new(),
            giscus_category: String::new(),
            giscus_category_id: String::new(),
        }
    }
}

/// Atom feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RssConfig {
    pub title: String,
    pub description: String,
    pub feed_path: String,
    pub item_count: usize,
}

impl Default for RssConfig {
    fn default() -> Self {
        Self {
            title: "My Blog Feed".to_string(),
            description: "Latest posts".to_string(),
            feed_path: "/feed.xml".to_string(),
            item_count: 20,
        }
    }
}

/// Theme customization tokens, exposed to templates as-is
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeTokens {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub font_family: String,
    pub code_font: String,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            primary_color: "#2563eb".to_string(),
            secondary_color: "#1e40af".to_string(),
            accent_color: "#f59e0b".to_string(),
            font_family: "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif"
                .to_string(),
            code_font: "\"Courier New\", monospace".to_string(),
        }
    }
}

/// Markdown engine options (pulldown-cmark extension set)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub tables: bool,
    pub footnotes: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    /// Smart quotes and other typographic replacements
    pub smart_punctuation: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            tasklists: true,
            smart_punctuation: true,
        }
    }
}

/// Development server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DevConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3000,
            open_browser: false,
        }
    }
}
