mod app;
mod config;
mod github;
mod markdown;
mod sidebar;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use sidebar::LayoutContext;
use std::io;
use std::time::Duration;

/// Terminal dashboard for GitHub pull requests
#[derive(Parser)]
#[command(name = "prl", version, about)]
struct Cli {
    /// Repository path (defaults to current directory)
    path: Option<String>,

    /// Preselect a PR by number
    #[arg(long)]
    pr: Option<u64>,

    /// Start with the preview sidebar closed
    #[arg(long)]
    no_preview: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    github::ensure_gh_installed()?;

    let repo_root = match cli.path {
        Some(path) => std::fs::canonicalize(&path)
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or(path),
        None => ".".to_string(),
    };
    let config = config::load_config(&repo_root);

    let mut app = App::new(repo_root, config)?;
    if cli.no_preview {
        app.sidebar.close();
    }
    if let Some(number) = cli.pr {
        if let Some(idx) = app.prs.iter().position(|pr| pr.number == number) {
            app.selected = idx;
        } else {
            app.notify(format!("PR #{number} is not in the open list"));
        }
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut last_layout: Option<LayoutContext> = None;

    loop {
        // Recompute the sidebar layout when the terminal geometry changes.
        // The context is passed by value; the sidebar keeps its own copy.
        let size = terminal.size()?;
        let ctx = LayoutContext {
            // top and bottom bars take one row each
            main_content_height: size.height.saturating_sub(2),
            preview_width: app.config.preview.width,
        };
        if last_layout != Some(ctx) {
            app.sidebar.update_layout(Some(ctx));
            last_layout = Some(ctx);
        }

        if app.sidebar.is_open() {
            app.sync_sidebar();
        }

        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
                // Geometry is re-read at the top of the loop
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    app.clear_notification();

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // ── List navigation ──
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => app.next_pr(),
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => app.prev_pr(),

        // ── Sidebar scrolling ──
        (KeyCode::Char('d'), _) | (KeyCode::PageDown, _) => app.sidebar.half_page_down(),
        (KeyCode::Char('u'), _) | (KeyCode::PageUp, _) => app.sidebar.half_page_up(),

        // ── Sidebar visibility ──
        (KeyCode::Char('p'), _) | (KeyCode::Enter, _) => app.sidebar.toggle(),

        (KeyCode::Char('r'), _) => app.refresh(),

        _ => {}
    }
}
