use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hckr_tui::app::{App, InputMode};
use hckr_tui::config::Config;
use hckr_tui::logging;
use hckr_tui::stories::{FilterMode, SortMode};
use hckr_tui::ui;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "hckr-tui")]
#[command(about = "Terminal UI for the daily Hacker News digest", long_about = None)]
struct Cli {
    /// Days to fetch at startup, counting today
    #[arg(short, long)]
    days: Option<u32>,

    /// Initial filter: top_10, top_20, top_half or all
    #[arg(short, long)]
    filter: Option<FilterMode>,

    /// Initial sort: points, comments or time
    #[arg(short, long)]
    sort: Option<SortMode>,

    /// Start on an earlier date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging is best effort; without a cache dir the app still runs
    let log_path = logging::init_logging().ok();

    let mut config = Config::load()?;
    if let Some(days) = cli.days {
        config.initial_days = days.max(1);
    }
    if let Some(filter) = cli.filter {
        config.default_filter = filter;
    }
    if let Some(sort) = cli.sort {
        config.default_sort = sort;
    }
    info!(log = ?log_path, days = config.initial_days, "Starting");

    let mut app = App::new(config)?;
    if let Some(date) = cli.date {
        app.current_date = date.min(app.today());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!(error = %e, "Exited with error");
        eprintln!("Error: {}", e);
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    app.begin_loading("Updating stories cache...");
    terminal.draw(|frame| ui::draw(frame, app))?;
    app.initial_load().await;

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('?') => app.show_help(),
                KeyCode::Char('r') => {
                    app.begin_loading("Refreshing...");
                    terminal.draw(|frame| ui::draw(frame, app))?;
                    app.refresh().await;
                }
                KeyCode::Char('j') => {
                    app.begin_loading("Loading earlier day...");
                    terminal.draw(|frame| ui::draw(frame, app))?;
                    app.prev_day().await;
                }
                KeyCode::Char('k') => {
                    if app.can_go_later() {
                        app.begin_loading("Loading later day...");
                        terminal.draw(|frame| ui::draw(frame, app))?;
                        app.next_day().await;
                    }
                }
                KeyCode::Char(c @ '1'..='4') => {
                    let index = (c as usize) - ('1' as usize);
                    app.set_filter(FilterMode::ALL[index]);
                }
                KeyCode::Char('p') => app.set_sort(SortMode::Points),
                KeyCode::Char('c') => app.set_sort(SortMode::Comments),
                KeyCode::Char('d') => app.set_sort(SortMode::Time),
                KeyCode::Char(' ') => app.open_story(),
                KeyCode::Char('l') | KeyCode::Enter => app.open_comments(),
                KeyCode::Up => app.move_up(),
                KeyCode::Down => app.move_down(),
                _ => {}
            },
            InputMode::Help => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.close_help(),
                _ => {}
            },
        }
    }
}
