// Entry point for folio.
// Parses configuration, sets up logging and the cache, then runs the TUI or prints once.

mod app;
mod cache;
mod config;
mod error;
mod github;
mod page;
mod pipeline;
mod portfolio;
mod state;
mod ui;

use std::fs::{self, File};
use std::io;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::app::{App, Source};
use crate::cache::{Cache, FileStorage, MemoryStorage, Storage, SystemClock};
use crate::config::{Args, Config};
use crate::error::Result;
use crate::github::{GitHubClient, GitHubSource};
use crate::page::Page;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info"))
}

/// Log to stderr when printing once; the TUI owns the terminal, so log to a file instead.
fn init_tracing(config: &Config) -> Result<()> {
    if config.once {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stderr)
            .init();
        return Ok(());
    }

    match config.cache_dir.clone().or_else(cache::cache_dir) {
        Some(dir) => {
            fs::create_dir_all(&dir)?;
            let file = File::create(cache::log_path(&dir))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(io::sink)
                .init();
        }
    }
    Ok(())
}

fn build_source(config: &Config) -> Result<Source> {
    let storage: Box<dyn Storage> = match &config.cache_dir {
        Some(dir) => Box::new(FileStorage::new(dir)),
        None => Box::new(MemoryStorage::new()),
    };
    let cache = Cache::new(storage, SystemClock).with_ttl(config.cache_ttl);
    let client = GitHubClient::with_base_url(&config.api_base)?;
    Ok(GitHubSource::new(client, cache, config.user.clone()))
}

fn run_tui(config: Config, source: Source) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let page = Page::from_anchors(&config.anchors);
    let mut app = App::new(source, page, config.render, config.refresh_every);
    let result = tokio::task::block_in_place(|| app.run(&mut terminal));

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Exit status for `--once`: a page that only shows the load failure is an error.
fn once_exit_status(page: &Page) -> u8 {
    if page.error_renders() > 0 { 1 } else { 0 }
}

async fn run(config: Config) -> Result<ExitCode> {
    init_tracing(&config)?;
    info!(user = %config.user, cache = ?config.cache_dir, "starting folio");

    let source = build_source(&config)?;
    info!(ttl = ?source.cache().ttl(), "cache ready");

    if config.once {
        let mut page = Page::from_anchors(&config.anchors);
        pipeline::run(&source, &mut page, config.render).await;
        print!("{}", page);
        return Ok(ExitCode::from(once_exit_status(&page)));
    }

    run_tui(config, source)?;
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("folio: {}", e);
            return ExitCode::from(2);
        }
    };

    match run(config).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "folio exited with an error");
            eprintln!("folio: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Anchor, render_error};

    #[test]
    fn test_once_exit_status_reflects_load_failure() {
        let mut page = Page::from_anchors(&[Anchor::Error]);
        assert_eq!(once_exit_status(&page), 0);

        render_error(&mut page);
        assert_eq!(once_exit_status(&page), 1);
    }
}
