// App state and main event loop.
// Manages tabs, background refreshes, and keyboard input handling.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::cache::{Clock, Storage, SystemClock};
use crate::error::Result;
use crate::github::{GitHubSource, RateLimit};
use crate::page::{LinkKey, Page, ProjectCard};
use crate::pipeline::{self, Refresher, RenderOptions, Snapshot};
use crate::state::{ContactDraft, Selection, StatusState};
use crate::ui;

/// Data source used by the running app.
pub type Source = GitHubSource<Box<dyn Storage>, SystemClock>;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    About,
    Projects,
    Contact,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::About, Tab::Projects, Tab::Contact];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::About => "About",
            Tab::Projects => "Projects",
            Tab::Contact => "Contact",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::About => Tab::Projects,
            Tab::Projects => Tab::Contact,
            Tab::Contact => Tab::About,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::About => Tab::Contact,
            Tab::Projects => Tab::About,
            Tab::Contact => Tab::Projects,
        }
    }
}

/// Result of one background load, sent back to the UI loop.
struct RefreshDone {
    outcome: Result<Snapshot>,
    at: DateTime<Utc>,
    rate_limit: RateLimit,
}

/// Main application state.
pub struct App {
    /// Currently active tab.
    pub active_tab: Tab,
    /// Rendered portfolio. Only the UI loop writes to it.
    pub page: Page,
    /// Selected project card.
    pub projects: Selection,
    /// Contact form draft.
    pub contact: ContactDraft,
    pub status: StatusState,
    /// One-line feedback for the last action.
    pub flash: Option<String>,
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    source: Arc<Source>,
    options: RenderOptions,
    refresher: Refresher,
    refresh_every: Option<Duration>,
    last_refresh: Option<Instant>,
    tx: mpsc::UnboundedSender<RefreshDone>,
    rx: mpsc::UnboundedReceiver<RefreshDone>,
}

impl App {
    pub fn new(
        source: Source,
        page: Page,
        options: RenderOptions,
        refresh_every: Option<Duration>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            active_tab: Tab::default(),
            page,
            projects: Selection::new(),
            contact: ContactDraft::new(),
            status: StatusState::new(),
            flash: None,
            show_help: false,
            should_quit: false,
            source: Arc::new(source),
            options,
            refresher: Refresher::new(),
            refresh_every,
            last_refresh: None,
            tx,
            rx,
        }
    }

    pub fn username(&self) -> &str {
        self.source.username()
    }

    /// Main event loop. Must run inside a tokio runtime.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        self.request_refresh();
        while !self.should_quit {
            self.drain_refreshes();
            self.tick_timer();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Start a background load unless one is already in flight.
    pub fn request_refresh(&mut self) {
        self.last_refresh = Some(Instant::now());
        let Some(guard) = self.refresher.try_begin() else {
            return;
        };
        self.status.begin();

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = pipeline::load(source.as_ref()).await;
            let done = RefreshDone {
                outcome,
                at: source.cache().clock().now(),
                rate_limit: source.rate_limit(),
            };
            if tx.send(done).is_err() {
                warn!("app closed before refresh finished");
            }
            drop(guard);
        });
    }

    /// Apply finished loads to the page on the UI thread.
    fn drain_refreshes(&mut self) {
        while let Ok(done) = self.rx.try_recv() {
            let ok = done.outcome.is_ok();
            pipeline::apply(&mut self.page, &done.outcome, self.options);
            self.status.finish(ok, done.at, done.rate_limit);
            self.projects
                .clamp(self.page.projects().map_or(0, |cards| cards.len()));
            if ok {
                info!("page rendered");
            }
        }
    }

    fn tick_timer(&mut self) {
        let Some(every) = self.refresh_every else {
            return;
        };
        if self.last_refresh.is_none_or(|at| at.elapsed() >= every) {
            self.request_refresh();
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.contact.editing {
            self.handle_contact_input(key);
            return;
        }
        if self.show_help {
            self.show_help = false;
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('r') => self.request_refresh(),
            KeyCode::Tab => self.switch_tab(self.active_tab.next()),
            KeyCode::BackTab => self.switch_tab(self.active_tab.prev()),
            KeyCode::Char('1') => self.switch_tab(Tab::About),
            KeyCode::Char('2') => self.switch_tab(Tab::Projects),
            KeyCode::Char('3') => self.switch_tab(Tab::Contact),
            _ => match self.active_tab {
                Tab::About => self.handle_about_key(key),
                Tab::Projects => self.handle_projects_key(key),
                Tab::Contact => self.handle_contact_key(key),
            },
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.flash = None;
        // Opening the projects panel re-runs the load, mostly served from cache
        if tab == Tab::Projects {
            self.request_refresh();
        }
    }

    fn handle_about_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('g') {
            self.open_link(LinkKey::Github);
        }
    }

    fn handle_projects_key(&mut self, key: KeyEvent) {
        let len = self.page.projects().map_or(0, |cards| cards.len());
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.projects.select_next(len),
            KeyCode::Up | KeyCode::Char('k') => self.projects.select_prev(len),
            KeyCode::Enter => {
                if let Some(url) = self.selected_project().map(|card| card.source_url.clone()) {
                    self.open_url(&url);
                }
            }
            KeyCode::Char('h') => {
                match self.selected_project().and_then(|card| card.homepage.clone()) {
                    Some(url) => self.open_url(&url),
                    None => self.flash = Some("No live demo for this project".to_string()),
                }
            }
            _ => {}
        }
    }

    fn selected_project(&self) -> Option<&ProjectCard> {
        let index = self.projects.selected()?;
        self.page.projects()?.get(index)
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('e') => {
                if self.page.contact_form().is_some_and(|form| form.is_enabled()) {
                    self.contact.editing = true;
                } else {
                    self.flash = Some("Contact form unavailable".to_string());
                }
            }
            KeyCode::Char('g') => self.open_link(LinkKey::Github),
            KeyCode::Char('t') => self.open_link(LinkKey::Twitter),
            KeyCode::Char('w') => self.open_link(LinkKey::Blog),
            _ => {}
        }
    }

    fn handle_contact_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.contact.editing = false,
            KeyCode::Tab | KeyCode::BackTab => self.contact.toggle_focus(),
            KeyCode::Backspace => self.contact.backspace(),
            KeyCode::Enter => self.submit_contact(),
            KeyCode::Char(c) => self.contact.push(c),
            _ => {}
        }
    }

    fn submit_contact(&mut self) {
        let link = self
            .page
            .contact_form()
            .and_then(|form| form.mailto(&self.contact.subject, &self.contact.message));
        match link {
            Some(link) => {
                self.open_url(&link);
                self.contact.clear();
                self.contact.editing = false;
            }
            None => self.flash = Some("Contact form unavailable".to_string()),
        }
    }

    fn open_link(&mut self, key: LinkKey) {
        match self.page.link(key).and_then(|slot| slot.href.clone()) {
            Some(url) => self.open_url(&url),
            None => self.flash = Some(format!("No {} link", key.label())),
        }
    }

    fn open_url(&mut self, url: &str) {
        match open::that(url) {
            Ok(()) => self.flash = Some(format!("Opened {}", url)),
            Err(e) => {
                warn!(%url, error = %e, "failed to open link");
                self.flash = Some(format!("Could not open {}", url));
            }
        }
    }
}
