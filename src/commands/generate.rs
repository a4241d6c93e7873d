//! Generate post pages and the home page listing

use anyhow::{Context, Result};
use std::fs;

use crate::content::loader::ContentLoader;
use crate::content::{sort_newest_first, Post};
use crate::error::Error;
use crate::index::IndexUpdater;
use crate::Blog;

/// Printed when the posts directory has no markdown files
const EXAMPLE_POST: &str = r#"
---
title: My First Post
date: 2026-01-30
---

Your content here in **markdown**!
"#;

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct Summary {
    /// Generated posts, newest first
    pub posts: Vec<Post>,
    /// Whether the home page was rewritten
    pub index_updated: bool,
}

/// Generate the blog
///
/// Every post is rendered again on each run. The first unreadable file or
/// bad date stops the whole run.
pub fn run(blog: &Blog) -> Result<Summary> {
    let start = std::time::Instant::now();

    // Ensure directories exist
    fs::create_dir_all(&blog.posts_dir)
        .with_context(|| format!("creating {:?}", blog.posts_dir))?;
    fs::create_dir_all(&blog.output_dir)
        .with_context(|| format!("creating {:?}", blog.output_dir))?;

    let loader = ContentLoader::new(blog);
    let sources = loader.discover()?;
    tracing::info!("Found {} markdown files in {:?}", sources.len(), blog.posts_dir);

    let mut posts = Vec::with_capacity(sources.len());
    for source in &sources {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("Processing {}...", name);

        let post = loader
            .load_post(source)
            .with_context(|| format!("while processing {:?}", source))?;

        let output_file = blog.output_dir.join(post.file_name());
        fs::write(&output_file, &post.html).map_err(|e| Error::io(&output_file, e))?;
        println!("  → Generated {}", blog.display_path(&output_file).display());

        posts.push(post);
    }

    sort_newest_first(&mut posts);

    let index_updated = if posts.is_empty() {
        let posts_dir = blog.display_path(&blog.posts_dir).display();
        println!("\nNo markdown files found in {} directory", posts_dir);
        println!("Create a markdown file in {} with this format:", posts_dir);
        println!("{}", EXAMPLE_POST);
        false
    } else {
        let home_page = blog.display_path(&blog.home_page).display();
        println!("\nUpdating {}...", home_page);
        IndexUpdater::new(blog).update(&posts)?;
        println!("✓ Added {} blog post(s) to {}", posts.len(), home_page);
        true
    };

    println!("\n✓ Blog generation complete!");
    tracing::info!("Generated in {:.2}s", start.elapsed().as_secs_f64());

    Ok(Summary {
        posts,
        index_updated,
    })
}
