use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::styles;
use crate::app::App;

/// Top bar: app name, repo root, PR count.
pub fn render_top_bar(f: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            " prl ",
            Style::default()
                .fg(styles::BG)
                .bg(styles::PURPLE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", app.repo_root), styles::muted_style()),
        Span::styled(
            format!("  {} open", app.prs.len()),
            styles::dim_style(),
        ),
    ]);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(styles::SURFACE)),
        area,
    );
}

/// Bottom bar: transient status message when present, key hints otherwise.
pub fn render_bottom_bar(f: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status_message {
        Some(msg) => Line::from(Span::styled(
            format!(" {msg}"),
            Style::default().fg(styles::YELLOW),
        )),
        None => {
            let hints = [
                ("j/k", "select"),
                ("d/u", "scroll"),
                ("p", "preview"),
                ("r", "refresh"),
                ("q", "quit"),
            ];
            let mut spans = Vec::new();
            for (key, label) in hints {
                spans.push(Span::styled(format!(" {key}"), styles::key_hint_style()));
                spans.push(Span::styled(format!(" {label} "), styles::dim_style()));
            }
            Line::from(spans)
        }
    };
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(styles::SURFACE)),
        area,
    );
}
