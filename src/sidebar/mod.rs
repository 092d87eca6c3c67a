//! Sidebar view-model: the detail pane for the selected pull request.
//!
//! Owns the composed content buffer and its viewport. Driven by exactly
//! two mutators: `set_selection` (recomposes content) and `update_layout`
//! (resizes the viewport, never recomposes).

pub mod compose;
pub mod status;
pub mod viewport;

use ratatui::text::{Line, Span, Text};

use crate::github::PrSnapshot;
use crate::ui::styles;
use self::viewport::Viewport;

/// Columns of padding inside the sidebar border, each side.
pub const CONTENT_PADDING: u16 = 2;
/// Width of the sidebar's left border.
pub const BORDER_WIDTH: u16 = 1;
/// Rows taken by the pager footer.
pub const PAGER_HEIGHT: u16 = 2;

const PLACEHOLDER: &str = "Select a Pull Request...";

/// Terminal dimensions the outer dashboard derives for the sidebar.
/// Passed by value on every update; the sidebar keeps only the last
/// applied snapshot, never a handle into caller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub main_content_height: u16,
    pub preview_width: u16,
}

#[derive(Debug, Default)]
pub struct Sidebar {
    open: bool,
    selected: Option<PrSnapshot>,
    viewport: Viewport,
    layout: Option<LayoutContext>,
}

impl Sidebar {
    /// Starts closed with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn selected_number(&self) -> Option<u64> {
        self.selected.as_ref().map(|pr| pr.number)
    }

    /// Replace the selection. Content is recomposed only when the selection
    /// identity (PR number) actually changes; re-selecting the same PR
    /// keeps the buffer and its scroll position.
    pub fn set_selection(&mut self, pr: Option<PrSnapshot>) {
        match pr {
            None => {
                self.selected = None;
                self.viewport.clear();
            }
            Some(pr) => {
                if self.selected_number() == Some(pr.number) {
                    return;
                }
                let content = compose::compose(&pr, self.content_width());
                self.selected = Some(pr);
                self.viewport.set_content(content);
            }
        }
    }

    /// Apply a new layout context. Absent context is a no-op: the last
    /// known layout stays in effect. A present context resizes the
    /// viewport; the content buffer is left as composed.
    pub fn update_layout(&mut self, ctx: Option<LayoutContext>) {
        let Some(ctx) = ctx else { return };
        self.layout = Some(ctx);
        let height = ctx.main_content_height.saturating_sub(PAGER_HEIGHT);
        self.viewport.resize(self.content_width(), height);
    }

    /// Usable content width inside the configured preview pane, or 0 when
    /// no layout has been applied yet.
    pub fn content_width(&self) -> u16 {
        match self.layout {
            Some(ctx) => ctx
                .preview_width
                .saturating_sub(2 * CONTENT_PADDING + BORDER_WIDTH),
            None => 0,
        }
    }

    pub fn half_page_down(&mut self) {
        self.viewport.half_page_down();
    }

    pub fn half_page_up(&mut self) {
        self.viewport.half_page_up();
    }

    pub fn scroll_percent(&self) -> f64 {
        self.viewport.scroll_percent()
    }

    /// The sidebar's renderable frame: empty when closed, a centered
    /// placeholder when nothing is selected, otherwise the visible
    /// viewport window plus the pager footer.
    pub fn render(&self) -> Text<'static> {
        if !self.open {
            return Text::default();
        }
        if self.selected.is_none() {
            return self.placeholder_frame();
        }

        let mut lines: Vec<Line<'static>> = self.viewport.visible().to_vec();
        // Pad to full height so the pager always sits at the bottom
        while lines.len() < self.viewport.height() as usize {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{}%", (self.scroll_percent() * 100.0) as u16),
            styles::dim_style(),
        )));
        Text::from(lines)
    }

    fn placeholder_frame(&self) -> Text<'static> {
        let height = self.viewport.height() as usize + PAGER_HEIGHT as usize;
        let mut lines: Vec<Line<'static>> = Vec::with_capacity(height.max(1));
        for _ in 0..height / 2 {
            lines.push(Line::from(""));
        }
        lines.push(
            Line::from(Span::styled(PLACEHOLDER, styles::muted_style())).centered(),
        );
        Text::from(lines)
    }
}
