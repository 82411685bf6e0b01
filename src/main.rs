use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vidnews_cli::api::NaverClient;
use vidnews_cli::app::{App, InputMode};
use vidnews_cli::config::{Config, Credentials};
use vidnews_cli::pipeline::parse_keywords;
use vidnews_cli::ui;

#[derive(Parser)]
#[command(name = "vidnews-cli")]
#[command(about = "Search Naver News for video articles and pick the ones to keep", long_about = None)]
struct Cli {
    /// Comma-separated keywords, replacing the configured list
    #[arg(short, long)]
    keywords: Option<String>,

    /// Results requested per keyword (1-100)
    #[arg(short = 'n', long)]
    page_size: Option<u32>,

    /// Keep every article, not only video links
    #[arg(long)]
    no_video_filter: bool,

    /// Search once, print all results to stdout and exit
    #[arg(short, long)]
    print: bool,

    /// Log file (defaults to the cache directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn default_log_path() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?
        .join("vidnews-cli");
    fs::create_dir_all(&dir)?;
    Ok(dir.join("vidnews.log"))
}

/// Logs go to a file: the terminal belongs to the UI.
fn init_logging(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => default_log_path()?,
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.clone())?;

    let mut config = Config::load()?;
    if let Some(keywords) = &cli.keywords {
        config.keywords = parse_keywords(keywords);
    }
    if let Some(page_size) = cli.page_size {
        config.set_page_size(page_size);
    }
    if cli.no_video_filter {
        config.video_filter = false;
    }

    let credentials = Credentials::from_env()?;
    let client = NaverClient::new(
        credentials,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    info!(
        keywords = config.keywords.len(),
        page_size = config.page_size,
        video_filter = config.video_filter,
        "vidnews-cli starting"
    );

    let mut app = App::new(config, Box::new(client));

    if cli.print {
        let report = app.run_search().await;
        for (keyword, failure) in &report.failures {
            eprintln!("warning: search for {} failed: {}", keyword, failure);
        }
        print!("{}", app.export_content());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

async fn search<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    app.begin_search();
    terminal.draw(|frame| ui::draw(frame, app))?;
    app.run_search().await;
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
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
                KeyCode::Char('/') => app.start_keyword_edit(),
                KeyCode::Char('r') => search(terminal, app).await?,
                KeyCode::Char(' ') => app.toggle_current(),
                KeyCode::Char('a') => app.select_all(),
                KeyCode::Char('n') => app.select_none(),
                KeyCode::Char('e') => app.open_export(),
                KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                _ => {}
            },
            InputMode::Keywords => match key.code {
                KeyCode::Enter => {
                    app.confirm_keywords();
                    search(terminal, app).await?;
                }
                KeyCode::Esc => app.cancel_input(),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Char(c) => app.input_buffer.push(c),
                _ => {}
            },
            InputMode::Help => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.close_help(),
                _ => {}
            },
            InputMode::Export => match key.code {
                KeyCode::Esc | KeyCode::Char('e') => app.close_export(),
                KeyCode::Char('f') => app.toggle_export_format(),
                KeyCode::Char('w') => app.confirm_export(),
                KeyCode::Up | KeyCode::Char('k') => app.export_scroll_up(),
                KeyCode::Down | KeyCode::Char('j') => app.export_scroll_down(),
                _ => {}
            },
        }
    }
}
