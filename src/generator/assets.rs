//! Static asset copying

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::Site;

/// Copy the three asset roots into the output directory: stylesheets to
/// `styles/`, scripts to `scripts/`, and the public directory verbatim at
/// the output root. A missing source root is skipped silently.
pub fn copy_assets(site: &Site) -> Result<()> {
    let verbose = site.config.build.verbose;

    copy_flat(&site.styles_dir, &site.output_dir.join("styles"))?;
    if verbose {
        tracing::info!("Copied stylesheets");
    }

    copy_flat(&site.scripts_dir, &site.output_dir.join("scripts"))?;
    if verbose {
        tracing::info!("Copied scripts");
    }

    if site.public_dir.exists() {
        copy_tree(&site.public_dir, &site.output_dir)?;
        if verbose {
            tracing::info!("Copied public assets");
        }
    }

    Ok(())
}

/// Copy the files directly inside `src` into `dst`. The destination
/// directory is created even when the source is missing.
fn copy_flat(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).with_context(|| format!("failed to create {:?}", dst))?;

    if !src.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            fs::copy(&path, dst.join(entry.file_name()))
                .with_context(|| format!("failed to copy {:?}", path))?;
        }
    }

    Ok(())
}

/// Recursively copy `src` into `dst`, preserving relative structure
fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        let relative = path.strip_prefix(src).unwrap_or(path);
        if relative.as_os_str().is_empty() {
            continue;
        }
        let target = dst.join(relative);
        if path.is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &target).with_context(|| format!("failed to copy {:?}", path))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;

    fn site_in(base: &Path) -> Site {
        Site::with_config(base.to_path_buf(), SiteConfig::default())
    }

    #[test]
    fn test_missing_sources_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let site = site_in(tmp.path());
        fs::create_dir_all(&site.output_dir).unwrap();

        copy_assets(&site).unwrap();

        // Destination directories exist even without sources
        assert!(site.output_dir.join("styles").is_dir());
        assert!(site.output_dir.join("scripts").is_dir());
    }

    #[test]
    fn test_styles_and_scripts_copied_flat() {
        let tmp = tempfile::tempdir().unwrap();
        let site = site_in(tmp.path());
        fs::create_dir_all(&site.styles_dir).unwrap();
        fs::create_dir_all(&site.scripts_dir).unwrap();
        fs::create_dir_all(&site.output_dir).unwrap();
        fs::write(site.styles_dir.join("main.css"), "body {}").unwrap();
        fs::write(site.scripts_dir.join("app.js"), "void 0;").unwrap();

        copy_assets(&site).unwrap();

        assert!(site.output_dir.join("styles/main.css").exists());
        assert!(site.output_dir.join("scripts/app.js").exists());
    }

    #[test]
    fn test_public_assets_copied_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let site = site_in(tmp.path());
        fs::create_dir_all(site.public_dir.join("images")).unwrap();
        fs::create_dir_all(&site.output_dir).unwrap();

        let bytes: Vec<u8> = (0u8..=255).collect();
        fs::write(site.public_dir.join("images/pixel.png"), &bytes).unwrap();
        fs::write(site.public_dir.join("robots.txt"), "User-agent: *\n").unwrap();

        copy_assets(&site).unwrap();

        assert_eq!(
            fs::read(site.output_dir.join("images/pixel.png")).unwrap(),
            bytes
        );
        assert_eq!(
            fs::read_to_string(site.output_dir.join("robots.txt")).unwrap(),
            "User-agent: *\n"
        );
    }
}
