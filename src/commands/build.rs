//! Build the static site

use anyhow::Result;

use crate::generator::Generator;
use crate::Site;

/// Run a one-shot build
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    println!("Building {}...", site.config.site.title);

    let generator = Generator::new(site)?;
    let post_count = generator.build()?;

    let duration = start.elapsed();
    println!(
        "Build complete: {} posts in {:.2}s. Files are in {:?}",
        post_count,
        duration.as_secs_f64(),
        site.output_dir
    );

    Ok(())
}
