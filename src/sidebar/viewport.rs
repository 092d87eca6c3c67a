//! Scrollable viewport over a composed line buffer.

use ratatui::text::Line;

/// Owns the scroll offset and dimensions for the sidebar content.
/// The offset is kept within `[0, max(0, content_len - height)]` by every
/// mutator; callers never see an out-of-range value.
#[derive(Debug, Default)]
pub struct Viewport {
    content: Vec<Line<'static>>,
    width: u16,
    height: u16,
    offset: usize,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content buffer and jump back to the top.
    pub fn set_content(&mut self, content: Vec<Line<'static>>) {
        self.content = content;
        self.offset = 0;
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.offset = 0;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Update dimensions without touching content. The offset is clamped
    /// in case a taller viewport made the old offset overshoot.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn half_page_down(&mut self) {
        let step = (self.height / 2) as usize;
        self.offset = self.offset.saturating_add(step).min(self.max_offset());
    }

    pub fn half_page_up(&mut self) {
        let step = (self.height / 2) as usize;
        self.offset = self.offset.saturating_sub(step);
    }

    /// Scroll position as a fraction in [0, 1]. Content that fits entirely
    /// within the viewport reports 0.
    pub fn scroll_percent(&self) -> f64 {
        if self.content.len() <= self.height as usize {
            return 0.0;
        }
        let max = self.max_offset().max(1);
        (self.offset as f64 / max as f64).clamp(0.0, 1.0)
    }

    /// The currently visible window of the content buffer.
    pub fn visible(&self) -> &[Line<'static>] {
        let end = (self.offset + self.height as usize).min(self.content.len());
        let start = self.offset.min(end);
        &self.content[start..end]
    }

    fn max_offset(&self) -> usize {
        self.content.len().saturating_sub(self.height as usize)
    }
}
