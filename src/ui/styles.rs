use ratatui::style::{Color, Modifier, Style};

// ── Background colors ──
pub const BG: Color = Color::Rgb(12, 12, 12);
pub const SURFACE: Color = Color::Rgb(20, 20, 20);
pub const BORDER: Color = Color::Rgb(42, 42, 42);

// ── Text colors ──
pub const TEXT: Color = Color::Rgb(200, 200, 200);
pub const DIM: Color = Color::Rgb(102, 102, 102);
pub const MUTED: Color = Color::Rgb(136, 136, 136);
pub const BRIGHT: Color = Color::Rgb(232, 232, 232);

// ── Accent colors ──
pub const BLUE: Color = Color::Rgb(96, 165, 250);
pub const CYAN: Color = Color::Rgb(34, 211, 238);
pub const GREEN: Color = Color::Rgb(74, 222, 128);
pub const YELLOW: Color = Color::Rgb(250, 204, 21);
pub const RED: Color = Color::Rgb(248, 113, 113);
pub const PURPLE: Color = Color::Rgb(167, 139, 250);

// ── PR state pill backgrounds ──
pub const OPEN_BG: Color = Color::Rgb(20, 84, 45);
pub const CLOSED_BG: Color = Color::Rgb(110, 28, 36);
pub const MERGED_BG: Color = Color::Rgb(74, 48, 120);

// ── Composed styles ──

pub fn title_style() -> Style {
    Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn dim_style() -> Style {
    Style::default().fg(DIM)
}

pub fn selected_style() -> Style {
    Style::default().fg(BLUE).bg(Color::Rgb(26, 42, 58))
}

pub fn key_hint_style() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
}

/// Pill on a warning (red) background.
pub fn pill_warning() -> Style {
    Style::default().fg(BRIGHT).bg(RED)
}

/// Pill on a success (green) background.
pub fn pill_success() -> Style {
    Style::default().fg(BG).bg(GREEN)
}

/// Pill on a faint background, for in-flight checks.
pub fn pill_faint() -> Style {
    Style::default().fg(BRIGHT).bg(Color::Rgb(60, 60, 60))
}

pub fn check_success() -> Style {
    Style::default().fg(GREEN)
}

pub fn check_failure() -> Style {
    Style::default().fg(RED)
}

pub fn check_pending() -> Style {
    Style::default().fg(YELLOW)
}
