mod list;
mod status_bar;
pub mod styles;
pub mod text;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::sidebar::CONTENT_PADDING;

/// Render the entire UI
pub fn draw(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top bar
            Constraint::Min(1),    // main content
            Constraint::Length(1), // bottom bar
        ])
        .split(f.area());

    status_bar::render_top_bar(f, outer[0], app);

    // Main content — list alone, or list + sidebar when open
    if app.sidebar.is_open() {
        let main_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(app.config.preview.width),
            ])
            .split(outer[1]);

        list::render(f, main_area[0], app);

        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(styles::BORDER))
            .style(Style::default().bg(styles::SURFACE))
            .padding(Padding::horizontal(CONTENT_PADDING));
        f.render_widget(
            Paragraph::new(app.sidebar.render()).block(block),
            main_area[1],
        );
    } else {
        list::render(f, outer[1], app);
    }

    status_bar::render_bottom_bar(f, outer[2], app);
}
