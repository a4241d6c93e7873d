//! postgen: turn a folder of markdown posts into static blog pages
//!
//! Each run renders every post in the posts directory to
//! `<output_dir>/<slug>.html` and rewrites the blog listing of an existing
//! home page. Nothing is cached between runs.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod index;
pub mod templates;

pub use error::Error;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The main blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown sources
    pub posts_dir: PathBuf,
    /// Generated post pages
    pub output_dir: PathBuf,
    /// Home page holding the blog listing
    pub home_page: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::BlogConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);
        let output_dir = base_dir.join(&config.output_dir);
        let home_page = base_dir.join(&config.home_page);

        Self {
            config,
            base_dir,
            posts_dir,
            output_dir,
            home_page,
        }
    }

    /// Generate every post page and the home page listing
    pub fn generate(&self) -> Result<commands::generate::Summary> {
        commands::generate::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str) -> Result<PathBuf> {
        commands::new::create_post(self, title)
    }

    /// Path shown to the user, relative to the base directory when possible
    pub fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.base_dir).unwrap_or(path)
    }
}
