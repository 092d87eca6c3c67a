use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::styles;
use super::text::truncate;
use crate::app::App;

/// Render the PR list pane.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    let inner_width = area.width.saturating_sub(2) as usize;

    if app.prs.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " No open pull requests",
            styles::muted_style(),
        )));
    }

    // Keep the selected row in view
    let visible_rows = area.height.saturating_sub(2) as usize;
    let rows_per_pr = 2;
    let first = if visible_rows > 0 {
        let fit = (visible_rows / rows_per_pr).max(1);
        app.selected.saturating_sub(fit.saturating_sub(1))
    } else {
        0
    };

    for (i, pr) in app.prs.iter().enumerate().skip(first) {
        let is_selected = i == app.selected;
        let row_style = if is_selected {
            styles::selected_style().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(styles::TEXT)
        };
        let prefix = if is_selected { "▸" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!("{prefix} #{} ", pr.number), row_style),
            Span::styled(
                truncate(&pr.title, inner_width.saturating_sub(8)),
                row_style,
            ),
        ]));

        let mut meta: Vec<String> = Vec::new();
        if app.config.display.show_author && !pr.author.is_empty() {
            meta.push(format!("@{}", pr.author));
        }
        if app.config.display.show_branch && !pr.head_ref.is_empty() {
            meta.push(pr.head_ref.clone());
        }
        if !meta.is_empty() {
            lines.push(Line::from(Span::styled(
                truncate(&format!("    {}", meta.join(" · ")), inner_width),
                styles::dim_style(),
            )));
        }
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(styles::BORDER))
        .style(Style::default().bg(styles::BG))
        .title(Span::styled(
            " Pull Requests ",
            Style::default()
                .fg(styles::PURPLE)
                .add_modifier(Modifier::BOLD),
        ));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
