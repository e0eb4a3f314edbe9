//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Site;

/// Create a new post file in the content directory with front-matter
/// pre-filled from the title and the current time.
pub fn run(site: &Site, title: &str) -> Result<()> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("cannot derive a filename from title {:?}", title);
    }

    fs::create_dir_all(&site.content_dir)?;
    let file_path = site.content_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let now = chrono::Local::now();
    let content = format!(
        r#"---
title: {}
date: {}
description: ''
tags: []
---

"#,
        title,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_new_post_created_with_slugified_name() {
        let tmp = tempfile::tempdir().unwrap();
        let site = Site::with_config(tmp.path().to_path_buf(), SiteConfig::default());

        run(&site, "A Brand New Post").unwrap();
        assert!(site.content_dir.join("a-brand-new-post.md").exists());
    }

    #[test]
    fn test_new_post_refuses_to_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let site = Site::with_config(tmp.path().to_path_buf(), SiteConfig::default());

        run(&site, "Duplicate").unwrap();
        assert!(run(&site, "Duplicate").is_err());
    }
}
