//! Build orchestrator - turns the content directory into a deployable
//! static site
//!
//! Steps run strictly in sequence: clean, load content, render home page,
//! render post pages, render about page, copy assets, then the optional
//! feed and sitemap. The first failing step aborts the whole build.

pub mod assets;
pub mod feed;
pub mod sitemap;

use anyhow::{Context as _, Result};
use std::fs;

use tera::Context;

use crate::content::{ContentLoader, Post};
use crate::templates::{PostView, TemplateRenderer};
use crate::Site;

/// Static site generator
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new(&site.templates_dir)?;
        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Run the full build. Returns the number of posts generated.
    pub fn build(&self) -> Result<usize> {
        self.clean_output()?;

        let loader = ContentLoader::new(&self.site.config);
        let posts = loader.load_posts(&self.site.content_dir)?;
        self.progress(format_args!("Loaded {} posts", posts.len()));

        let views: Vec<PostView> = posts
            .iter()
            .map(|p| PostView::from_post(p, &self.site.config))
            .collect();

        self.render_home(&views)?;
        self.render_posts(&views)?;
        self.render_about(&views)?;

        assets::copy_assets(&self.site)?;

        if self.site.config.build.rss {
            feed::write_feed(&self.site, &posts)?;
            self.progress(format_args!("Generated: feed"));
        }
        if self.site.config.build.sitemap {
            sitemap::write_sitemap(&self.site, &posts)?;
            self.progress(format_args!("Generated: sitemap.xml"));
        }

        Ok(posts.len())
    }

    /// Remove the previous output when cleaning is enabled and make sure
    /// the output directory exists. Safe on a missing or already-clean
    /// directory.
    fn clean_output(&self) -> Result<()> {
        if self.site.config.build.clean && self.site.output_dir.exists() {
            fs::remove_dir_all(&self.site.output_dir)
                .with_context(|| format!("failed to remove {:?}", self.site.output_dir))?;
        }
        fs::create_dir_all(&self.site.output_dir)
            .with_context(|| format!("failed to create {:?}", self.site.output_dir))?;
        self.progress(format_args!("Cleaned output directory"));
        Ok(())
    }

    /// Render the home page listing all posts
    fn render_home(&self, posts: &[PostView]) -> Result<()> {
        let mut context = self.base_context(posts);
        context.insert("page_title", &self.site.config.site.title);

        let html = self.renderer.render("index.html", &context)?;
        fs::write(self.site.output_dir.join("index.html"), html)?;
        self.progress(format_args!("Generated: index.html"));
        Ok(())
    }

    /// Render one page per post under posts/<slug>/index.html
    fn render_posts(&self, posts: &[PostView]) -> Result<()> {
        for post in posts {
            let mut context = self.base_context(posts);
            context.insert("post", post);
            context.insert("page_title", &post.title);

            let html = self.renderer.render("post.html", &context)?;

            let post_dir = self.site.output_dir.join("posts").join(&post.slug);
            fs::create_dir_all(&post_dir)
                .with_context(|| format!("failed to create dir {:?}", post_dir))?;
            fs::write(post_dir.join("index.html"), html)?;
            self.progress(format_args!("Generated: posts/{}/index.html", post.slug));
        }
        Ok(())
    }

    /// Render the about page
    fn render_about(&self, posts: &[PostView]) -> Result<()> {
        let mut context = self.base_context(posts);
        context.insert("page_title", &"About");

        let html = self.renderer.render("about.html", &context)?;

        let about_dir = self.site.output_dir.join("about");
        fs::create_dir_all(&about_dir)?;
        fs::write(about_dir.join("index.html"), html)?;
        self.progress(format_args!("Generated: about/index.html"));
        Ok(())
    }

    /// Context shared by every page: the configuration and the sorted post
    /// list.
    fn base_context(&self, posts: &[PostView]) -> Context {
        let mut context = Context::new();
        context.insert("config", &self.site.config);
        context.insert("posts", posts);
        context
    }

    fn progress(&self, message: std::fmt::Arguments<'_>) {
        if self.site.config.build.verbose {
            tracing::info!("{}", message);
        }
    }
}

/// Escape a string for inclusion in XML output
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Site URL without a trailing slash
pub(crate) fn site_url(site: &Site) -> String {
    site.config.site.url.trim_end_matches('/').to_string()
}

/// Date of the newest post, used by the feed writer
pub(crate) fn latest_date(posts: &[Post]) -> Option<chrono::NaiveDateTime> {
    posts.iter().map(|p| p.date).max()
}
