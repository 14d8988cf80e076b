// Command line and environment configuration.
// Parses flags with clap and validates them into a runtime Config.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::cache;
use crate::error::{FolioError, Result};
use crate::github::GITHUB_API_BASE;
use crate::page::Anchor;
use crate::pipeline::RenderOptions;

/// Terminal portfolio for a public GitHub profile.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Args {
    /// GitHub username to showcase.
    #[arg(short, long, env = "FOLIO_USER")]
    pub user: String,

    /// GitHub REST API root.
    #[arg(long, env = "FOLIO_API_BASE", default_value = GITHUB_API_BASE)]
    pub api_base: String,

    /// Directory for cached responses and the log file.
    #[arg(long, env = "FOLIO_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Seconds a cached response stays fresh.
    #[arg(long, env = "FOLIO_CACHE_TTL_SECS", default_value_t = 600)]
    pub cache_ttl_secs: u64,

    /// Seconds between background refreshes (0 disables them).
    #[arg(long, env = "FOLIO_REFRESH_SECS", default_value_t = 600)]
    pub refresh_secs: u64,

    /// Number of projects in the grid.
    #[arg(long, env = "FOLIO_PROJECTS", default_value_t = 6)]
    pub projects: usize,

    /// Cap on timeline entries.
    #[arg(long, env = "FOLIO_TIMELINE_LIMIT")]
    pub timeline_limit: Option<usize>,

    /// Comma-separated page anchors, e.g. "gh=name,gh=bio,projects-grid,gh-error".
    #[arg(long, env = "FOLIO_LAYOUT")]
    pub layout: Option<String>,

    /// Keep responses in memory only.
    #[arg(long)]
    pub no_cache: bool,

    /// Print the page once and exit instead of starting the TUI.
    #[arg(long)]
    pub once: bool,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub user: String,
    pub api_base: String,
    /// `None` when caching to memory only.
    pub cache_dir: Option<PathBuf>,
    pub cache_ttl: Duration,
    /// `None` disables periodic refresh.
    pub refresh_every: Option<Duration>,
    pub render: RenderOptions,
    pub anchors: Vec<Anchor>,
    pub once: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let user = args.user.trim().to_string();
        if user.is_empty() || user.contains('/') {
            return Err(FolioError::Config(format!(
                "invalid GitHub username: {:?}",
                args.user
            )));
        }
        if args.projects == 0 {
            return Err(FolioError::Config(
                "--projects must be at least 1".to_string(),
            ));
        }

        let anchors = match args.layout.as_deref() {
            Some(layout) => Anchor::parse_list(layout)?,
            None => Anchor::all(),
        };
        if anchors.is_empty() {
            return Err(FolioError::Config("layout declares no anchors".to_string()));
        }

        let cache_dir = if args.no_cache {
            None
        } else {
            let dir = args.cache_dir.or_else(cache::cache_dir).ok_or_else(|| {
                FolioError::Config("no cache directory available, pass --cache-dir".to_string())
            })?;
            Some(dir)
        };

        Ok(Self {
            user,
            api_base: args.api_base,
            cache_dir,
            cache_ttl: Duration::from_secs(args.cache_ttl_secs),
            refresh_every: (args.refresh_secs > 0).then(|| Duration::from_secs(args.refresh_secs)),
            render: RenderOptions {
                projects: args.projects,
                timeline_limit: args.timeline_limit,
            },
            anchors,
            once: args.once,
        })
    }
}
