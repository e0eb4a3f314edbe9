//! Initialize a new blog site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("content/posts"))?;
    fs::create_dir_all(target_dir.join("styles"))?;
    fs::create_dir_all(target_dir.join("scripts"))?;
    fs::create_dir_all(target_dir.join("public"))?;

    let config_content = r#"# Blog configuration
# Every section is optional; missing values fall back to defaults.

site:
  title: My Blog
  description: A personal blog
  author: Your Name
  email: ''
  url: https://example.com
  lang: en
  favicon: /favicon.ico

social:
  twitter: ''
  github: ''
  linkedin: ''
  facebook: ''
  instagram: ''

blog:
  posts_per_page: 10
  excerpt_length: 150
  date_format: long     # short, long, or numeric
  show_reading_time: true
  show_author: true
  show_tags: true
  default_author: Anonymous

navigation:
  - name: Home
    path: /
  - name: About
    path: /about/

paths:
  content: content/posts
  templates: templates
  styles: styles
  scripts: scripts
  public: public
  build: build

build:
  clean: true
  verbose: true
  sitemap: true
  rss: true

seo:
  og_image: /images/og-image.jpg
  twitter_card: summary_large_image
  keywords: []

features:
  comments: false
  analytics: false
  search: false
  dark_mode: false
  related_posts: true

rss:
  title: My Blog Feed
  description: Latest posts
  feed_path: /feed.xml
  item_count: 20

dev:
  host: localhost
  port: 3000
  open_browser: false
"#;

    fs::write(target_dir.join("config.yml"), config_content)?;

    let stylesheet = r#"body {
  font-family: var(--font-family);
  max-width: 42rem;
  margin: 0 auto;
  padding: 1rem;
}

a {
  color: var(--primary-color);
}

code, pre {
  font-family: var(--code-font);
}

.meta {
  color: #6b7280;
}

.tags {
  list-style: none;
  padding: 0;
}

.tags li {
  display: inline-block;
  margin-right: 0.5rem;
  color: var(--accent-color);
}
"#;

    fs::write(target_dir.join("styles/main.css"), stylesheet)?;

    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: Hello World
date: {}
description: Your very first post.
tags:
  - meta
---

Welcome to your new blog. Edit or delete this file, then run `blogr build`
to regenerate the site, or `blogr serve` to preview it locally.
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(
        target_dir.join("content/posts/hello-world.md"),
        sample_post,
    )?;

    Ok(())
}
