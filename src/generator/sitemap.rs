//! Sitemap generation

use anyhow::Result;
use std::fs;

use super::{escape_xml, site_url};
use crate::content::Post;
use crate::Site;

/// Write `sitemap.xml` to the output root, listing the home page, the
/// about page, and every post with its date as `lastmod`.
pub fn write_sitemap(site: &Site, posts: &[Post]) -> Result<()> {
    let url = site_url(site);

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}/</loc>\n", escape_xml(&url)));
    xml.push_str("  </url>\n");

    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}/about/</loc>\n", escape_xml(&url)));
    xml.push_str("  </url>\n");

    for post in posts {
        xml.push_str("  <url>\n");
        xml.push_str(&format!(
            "    <loc>{}{}</loc>\n",
            escape_xml(&url),
            escape_xml(&post.path())
        ));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            post.date.format("%Y-%m-%d")
        ));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");

    fs::write(site.output_dir.join("sitemap.xml"), xml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use chrono::NaiveDate;

    #[test]
    fn test_sitemap_lists_all_pages() {
        let tmp = tempfile::tempdir().unwrap();
        let site = Site::with_config(tmp.path().to_path_buf(), SiteConfig::default());
        std::fs::create_dir_all(&site.output_dir).unwrap();

        let posts = vec![Post {
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            description: String::new(),
            author: "Anonymous".to_string(),
            tags: Vec::new(),
            content: String::new(),
            raw: String::new(),
        }];

        write_sitemap(&site, &posts).unwrap();

        let xml = std::fs::read_to_string(site.output_dir.join("sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/about/</loc>"));
        assert!(xml.contains("<loc>https://example.com/posts/hello/</loc>"));
        assert!(xml.contains("<lastmod>2024-01-01</lastmod>"));
    }
}
