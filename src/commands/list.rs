//! List posts

use anyhow::Result;

use crate::content::ContentLoader;
use crate::Site;

/// Print a table of loaded posts, newest first
pub fn run(site: &Site) -> Result<()> {
    let loader = ContentLoader::new(&site.config);
    let posts = loader.load_posts(&site.content_dir)?;

    if posts.is_empty() {
        println!("No posts found in {:?}", site.content_dir);
        return Ok(());
    }

    println!("{:<12} {:<30} {}", "Date", "Slug", "Title");
    for post in &posts {
        let tags = if post.tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", post.tags.join(", "))
        };
        println!(
            "{:<12} {:<30} {}{}",
            post.date.format("%Y-%m-%d"),
            post.slug,
            post.title,
            tags
        );
    }
    println!("\n{} posts", posts.len());

    Ok(())
}
