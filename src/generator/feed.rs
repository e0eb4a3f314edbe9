//! Atom feed generation

use anyhow::Result;
use std::fs;

use super::{escape_xml, latest_date, site_url};
use crate::content::Post;
use crate::Site;

/// Write the Atom feed to the configured feed path inside the output
/// directory. The feed's `updated` stamp is the newest post date so that
/// rebuilding unchanged input produces identical bytes.
pub fn write_feed(site: &Site, posts: &[Post]) -> Result<()> {
    let config = &site.config;
    let url = site_url(site);

    let updated = latest_date(posts)
        .unwrap_or(chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.naive_utc())
        .and_utc()
        .to_rfc3339();

    let mut feed = String::new();
    feed.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    feed.push_str("<feed xmlns=\"http://www.w3.org/2005/Atom\">\n");
    feed.push_str(&format!(
        "  <title>{}</title>\n",
        escape_xml(&config.rss.title)
    ));
    feed.push_str(&format!(
        "  <subtitle>{}</subtitle>\n",
        escape_xml(&config.rss.description)
    ));
    feed.push_str(&format!(
        "  <link href=\"{}{}\" rel=\"self\"/>\n",
        url, config.rss.feed_path
    ));
    feed.push_str(&format!("  <link href=\"{}/\"/>\n", url));
    feed.push_str(&format!("  <updated>{}</updated>\n", updated));
    feed.push_str(&format!("  <id>{}/</id>\n", url));
    feed.push_str(&format!(
        "  <author><name>{}</name></author>\n",
        escape_xml(&config.site.author)
    ));

    for post in posts.iter().take(config.rss.item_count) {
        let link = format!("{}{}", url, post.path());
        feed.push_str("  <entry>\n");
        feed.push_str(&format!("    <title>{}</title>\n", escape_xml(&post.title)));
        feed.push_str(&format!("    <link href=\"{}\"/>\n", link));
        feed.push_str(&format!("    <id>{}</id>\n", link));
        feed.push_str(&format!(
            "    <updated>{}</updated>\n",
            post.date.and_utc().to_rfc3339()
        ));
        if !post.description.is_empty() {
            feed.push_str(&format!(
                "    <summary>{}</summary>\n",
                escape_xml(&post.description)
            ));
        }
        feed.push_str(&format!(
            "    <author><name>{}</name></author>\n",
            escape_xml(&post.author)
        ));
        feed.push_str("  </entry>\n");
    }

    feed.push_str("</feed>\n");

    let relative = config.rss.feed_path.trim_start_matches('/');
    let output_path = site.output_dir.join(relative);
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, feed)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use chrono::NaiveDate;
    use std::path::Path;

    fn post(slug: &str, title: &str, day: u32) -> Post {
        Post {
            slug: slug.to_string(),
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            description: String::new(),
            author: "Anonymous".to_string(),
            tags: Vec::new(),
            content: String::new(),
            raw: String::new(),
        }
    }

    fn site_in(base: &Path) -> Site {
        let site = Site::with_config(base.to_path_buf(), SiteConfig::default());
        std::fs::create_dir_all(&site.output_dir).unwrap();
        site
    }

    #[test]
    fn test_feed_lists_posts_and_escapes() {
        let tmp = tempfile::tempdir().unwrap();
        let site = site_in(tmp.path());
        let posts = vec![post("a-b", "Tips & Tricks", 2), post("plain", "Plain", 1)];

        write_feed(&site, &posts).unwrap();

        let feed = std::fs::read_to_string(site.output_dir.join("feed.xml")).unwrap();
        assert!(feed.contains("Tips &amp; Tricks"));
        assert!(feed.contains("/posts/a-b/"));
        assert!(feed.contains("<updated>2024-01-02T00:00:00+00:00</updated>"));
    }

    #[test]
    fn test_feed_respects_item_count() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.rss.item_count = 1;
        let site = Site::with_config(tmp.path().to_path_buf(), config);
        std::fs::create_dir_all(&site.output_dir).unwrap();

        let posts = vec![post("one", "One", 2), post("two", "Two", 1)];
        write_feed(&site, &posts).unwrap();

        let feed = std::fs::read_to_string(site.output_dir.join("feed.xml")).unwrap();
        assert!(feed.contains("<title>One</title>"));
        assert!(!feed.contains("<title>Two</title>"));
    }

    #[test]
    fn test_empty_feed_is_valid_and_stable() {
        let tmp = tempfile::tempdir().unwrap();
        let site = site_in(tmp.path());

        write_feed(&site, &[]).unwrap();
        let first = std::fs::read_to_string(site.output_dir.join("feed.xml")).unwrap();
        write_feed(&site, &[]).unwrap();
        let second = std::fs::read_to_string(site.output_dir.join("feed.xml")).unwrap();

        assert_eq!(first, second);
        assert!(first.contains("<feed"));
    }
}
