//! blogr: a minimal static site generator for personal blogs
//!
//! Reads Markdown posts with front-matter, renders them through Tera
//! templates into static HTML, copies static assets, and optionally serves
//! the result with a small HTTP file server.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main blogr application: loaded configuration plus resolved directories.
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content (Markdown posts) directory
    pub content_dir: std::path::PathBuf,
    /// Templates directory (overrides embedded templates when present)
    pub templates_dir: std::path::PathBuf,
    /// Stylesheets directory
    pub styles_dir: std::path::PathBuf,
    /// Scripts directory
    pub scripts_dir: std::path::PathBuf,
    /// Public (verbatim) assets directory
    pub public_dir: std::path::PathBuf,
    /// Output directory
    pub output_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a base directory, loading `config.yml`
    /// when present and falling back to defaults otherwise.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Site from an already-constructed configuration.
    pub fn with_config(base_dir: std::path::PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.paths.content);
        let templates_dir = base_dir.join(&config.paths.templates);
        let styles_dir = base_dir.join(&config.paths.styles);
        let scripts_dir = base_dir.join(&config.paths.scripts);
        let public_dir = base_dir.join(&config.paths.public);
        let output_dir = base_dir.join(&config.paths.build);

        Self {
            config,
            base_dir,
            content_dir,
            templates_dir,
            styles_dir,
            scripts_dir,
            public_dir,
            output_dir,
        }
    }

    /// Build the static site
    pub fn build(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Clean the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
