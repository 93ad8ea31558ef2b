//! Terminal host and entry point.
//!
//! Mounts the catalog in the terminal, feeds it line commands from stdin, and
//! runs the actions it asks for. Everything happens on one current-thread
//! runtime: a refresh suspends the loop until the ledger has answered.
//!
//! # Event Loop
//!
//! ```text
//! stdin line ──→ Event ──→ handle_event ──→ (render?, actions)
//!                  ▲                             │
//!                  │      CatalogLoaded ◄── Refresh (repository)
//!                  └──── SentinelIntersection ◄── render (sentinel ratio)
//! ```
//!
//! After every render the host checks how much of the scroll sentinel made it
//! on screen and reports it back. The handler answers with another render only
//! if the reveal grew, so the loop stops once the screen is full or the
//! filtered list is exhausted.
//!
//! # Commands
//!
//! In the catalog:
//! - `j` / `k`: Move down / up
//! - `o`: Open the selected event
//! - `t <n>`: Open the n-th trending event
//! - `c <category>`: Toggle a category filter
//! - `/`: Open the search input (or return to it)
//! - `/<text>`: Search for `<text>`
//! - `x`: Close and clear the search
//! - `m`: Reveal more results
//! - `r`: Refresh from the ledger
//! - `q`: Quit
//!
//! While typing in the search input every character of the line is typed
//! into the query, `<` deletes one character, and an empty line moves focus
//! back to the results. In the details view any line returns to the catalog.

#![allow(clippy::multiple_crate_versions)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use showfinder::domain::EventRecord;
use showfinder::gateway::{EventRepository, RefreshOutcome, SnapshotLedger};
use showfinder::infrastructure::{default_config_file, expand_tilde};
use showfinder::{handle_event, Action, AppState, Config, Event, InputMode, SearchFocus, ShowfinderError};

/// Browse ticketed events from a ledger snapshot.
#[derive(Debug, Parser)]
#[command(name = "showfinder", version, about)]
struct Cli {
    /// Ledger snapshot file (overrides `snapshot` in the config file)
    #[arg(short, long)]
    snapshot: Option<String>,

    /// Configuration file [default: ~/.config/showfinder/config.toml]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in theme name
    #[arg(long)]
    theme: Option<String>,

    /// Custom TOML theme file
    #[arg(long)]
    theme_file: Option<String>,

    /// Tracing filter, e.g. `debug` or `showfinder=trace`
    #[arg(long)]
    trace_level: Option<String>,

    /// Category selected on start
    #[arg(long)]
    category: Option<String>,

    /// Terminal height
    #[arg(long, env = "LINES", default_value_t = 24)]
    rows: usize,

    /// Terminal width
    #[arg(long, env = "COLUMNS", default_value_t = 80)]
    cols: usize,
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    fn load_config(&self) -> showfinder::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_toml_file(path)?,
            None => {
                let path = default_config_file();
                if path.exists() {
                    Config::from_toml_file(path)?
                } else {
                    Config::default()
                }
            }
        };

        if let Some(snapshot) = &self.snapshot {
            config.snapshot = Some(snapshot.clone());
        }
        if let Some(theme) = &self.theme {
            config.theme_name = Some(theme.clone());
        }
        if let Some(theme_file) = &self.theme_file {
            config.theme_file = Some(theme_file.clone());
        }
        if let Some(level) = &self.trace_level {
            config.trace_level = Some(level.clone());
        }
        if let Some(category) = &self.category {
            config.initial_category = Some(category.clone());
        }
        Ok(config)
    }
}

/// Host state wrapped around the library's `AppState`.
struct Host {
    app: AppState,
    repository: EventRepository<SnapshotLedger>,
    rows: usize,
    cols: usize,
    /// Event shown full screen, if any.
    details: Option<EventRecord>,
    running: bool,
}

impl Host {
    /// Runs `event` and everything it triggers until the queue drains.
    async fn dispatch(&mut self, event: Event) {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            let (should_render, actions) = match handle_event(&mut self.app, &event) {
                Ok(result) => result,
                Err(e) => {
                    tracing::debug!(error = %e, "error handling event");
                    continue;
                }
            };
            tracing::debug!(
                action_count = actions.len(),
                should_render = should_render,
                "event handled"
            );

            if should_render && self.details.is_none() {
                self.render_catalog(&mut queue);
            }
            for action in actions {
                self.execute_action(action, &mut queue).await;
            }
        }
    }

    fn render_catalog(&self, queue: &mut VecDeque<Event>) {
        let drawn = showfinder::ui::render(&self.app, self.rows, self.cols);
        if self.app.sentinel.is_intersecting(drawn.sentinel_ratio) {
            queue.push_back(Event::SentinelIntersection {
                ratio: drawn.sentinel_ratio,
            });
        }
    }

    #[tracing::instrument(level = "debug", skip(self, queue))]
    async fn execute_action(&mut self, action: Action, queue: &mut VecDeque<Event>) {
        match action {
            Action::Refresh => match self.repository.refresh().await {
                Ok(RefreshOutcome::Loaded(events)) => queue.push_back(Event::CatalogLoaded {
                    events,
                    fetched_at: self.repository.last_refreshed().unwrap_or_else(Utc::now),
                }),
                Ok(RefreshOutcome::AlreadyLoading) => {}
                Err(e) => queue.push_back(Event::RefreshFailed { error: e.to_string() }),
            },
            Action::OpenDetails(record) => {
                tracing::debug!(event_id = record.id.as_str(), "opening details");
                showfinder::ui::render_details(&self.app, &record, self.rows, self.cols);
                self.details = Some(record);
            }
            Action::CloseFocus => {
                tracing::debug!("closing catalog");
                self.running = false;
            }
        }
    }

    /// Handles one line of input.
    async fn on_line(&mut self, line: &str) {
        if self.details.take().is_some() {
            let mut queue = VecDeque::new();
            self.render_catalog(&mut queue);
            for event in queue {
                self.dispatch(event).await;
            }
            return;
        }

        for event in map_line(line, self.app.input_mode) {
            self.dispatch(event).await;
            if !self.running {
                break;
            }
        }
    }
}

/// Translates one input line into catalog events.
fn map_line(line: &str, mode: InputMode) -> Vec<Event> {
    if mode == InputMode::Search(SearchFocus::Typing) {
        if line.is_empty() {
            return vec![Event::FocusResults];
        }
        return line
            .chars()
            .map(|c| if c == '<' { Event::Backspace } else { Event::Char(c) })
            .collect();
    }

    let line = line.trim();
    let event = match line {
        "" => return vec![],
        "q" => Event::CloseFocus,
        "r" => Event::Refresh,
        "j" => Event::KeyDown,
        "k" => Event::KeyUp,
        "o" => Event::SelectEvent,
        "m" => Event::ScrollThresholdReached,
        "x" => Event::ExitSearch,
        "/" if mode.is_search() => Event::FocusSearchBar,
        "/" => Event::SearchMode,
        _ => {
            if let Some(text) = line.strip_prefix('/') {
                Event::SetSearchText(text.to_string())
            } else if let Some(category) = line.strip_prefix("c ") {
                Event::ToggleCategory(category.trim().to_string())
            } else if let Some(rank) = line.strip_prefix("t ").and_then(|n| n.trim().parse::<usize>().ok()) {
                match rank.checked_sub(1) {
                    Some(index) => Event::SelectTrending(index),
                    None => return vec![],
                }
            } else {
                tracing::debug!(line = %line, "unknown command");
                return vec![];
            }
        }
    };
    vec![event]
}

async fn run(cli: Cli) -> showfinder::Result<()> {
    let config = cli.load_config()?;
    showfinder::observability::init_tracing(&config);

    let span = tracing::debug_span!("catalog_mount");
    let guard = span.enter();

    let snapshot = config
        .snapshot
        .as_deref()
        .map(expand_tilde)
        .ok_or_else(|| ShowfinderError::Config("no ledger snapshot given (use --snapshot)".to_string()))?;
    tracing::debug!(snapshot = %snapshot, "opening ledger snapshot");

    let mut host = Host {
        app: showfinder::initialize(&config),
        repository: EventRepository::new(SnapshotLedger::open(&snapshot)?),
        rows: cli.rows,
        cols: cli.cols,
        details: None,
        running: true,
    };
    drop(guard);

    host.dispatch(Event::Mount).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while host.running {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        host.on_line(&line).await;
    }

    print!("{}", showfinder::Theme::reset());
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "showfinder exited with an error");
            eprintln!("showfinder: {e}");
            ExitCode::FAILURE
        }
    }
}
