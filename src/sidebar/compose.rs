//! Builds the sidebar content buffer from a PR snapshot.
//!
//! Sections come in a fixed order with exactly one blank line between each
//! pair: title, branch line, pill row, description, checks, activity.
//! Composition is pure: the same (snapshot, width) always yields the same
//! lines.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::github::PrSnapshot;
use crate::markdown;
use crate::sidebar::status::{rollup, CheckRun, Mergeability, PrState, RollupState};
use crate::ui::styles;
use crate::ui::text::word_wrap;

/// Columns reserved next to the title for border and padding decoration.
const TITLE_RESERVE: u16 = 6;

/// Glyph shown on the checks pill while runs are still in flight.
const WAITING_GLYPH: &str = "○";

pub fn compose(pr: &PrSnapshot, width: u16) -> Vec<Line<'static>> {
    let sections: [Vec<Line<'static>>; 6] = [
        title_block(pr, width),
        vec![branch_line(pr)],
        vec![pill_row(pr)],
        description_block(pr, width),
        checks_block(&pr.checks),
        activity_block(pr, width),
    ];

    let mut out = Vec::new();
    for (i, section) in sections.into_iter().enumerate() {
        if i > 0 {
            out.push(Line::from(""));
        }
        out.extend(section);
    }
    out
}

fn title_block(pr: &PrSnapshot, width: u16) -> Vec<Line<'static>> {
    let wrap_width = width.saturating_sub(TITLE_RESERVE) as usize;
    word_wrap(&pr.title, wrap_width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, styles::title_style())))
        .collect()
}

fn branch_line(pr: &PrSnapshot) -> Line<'static> {
    Line::from(Span::styled(
        format!("{} → {}", pr.base_ref, pr.head_ref),
        styles::muted_style(),
    ))
}

// ── Pills ──

fn pill_row(pr: &PrSnapshot) -> Line<'static> {
    let mut spans = vec![state_pill(pr.state)];
    if let Some(pill) = mergeable_pill(pr.mergeable) {
        spans.push(Span::raw(" "));
        spans.push(pill);
    }
    spans.push(Span::raw(" "));
    spans.push(checks_pill(rollup(&pr.checks)));
    Line::from(spans)
}

fn state_pill(state: PrState) -> Span<'static> {
    let bg = match state {
        PrState::Open => styles::OPEN_BG,
        PrState::Closed => styles::CLOSED_BG,
        PrState::Merged => styles::MERGED_BG,
    };
    Span::styled(
        format!(" {} ", state.label()),
        Style::default().fg(styles::BRIGHT).bg(bg),
    )
}

fn mergeable_pill(mergeable: Mergeability) -> Option<Span<'static>> {
    match mergeable {
        Mergeability::Conflicting => {
            Some(Span::styled(" Merge Conflicts ", styles::pill_warning()))
        }
        Mergeability::Mergeable => Some(Span::styled(" Mergeable ", styles::pill_success())),
        Mergeability::Unknown => None,
    }
}

fn checks_pill(state: RollupState) -> Span<'static> {
    match state {
        RollupState::Failure => Span::styled(" Checks ", styles::pill_warning()),
        RollupState::Pending => Span::styled(
            format!(" {WAITING_GLYPH} Checks "),
            styles::pill_faint(),
        ),
        RollupState::Success => Span::styled(" Checks ", styles::pill_success()),
    }
}

// ── Description ──

fn description_block(pr: &PrSnapshot, width: u16) -> Vec<Line<'static>> {
    let body = strip_html_comments(&pr.body);
    let body = body.trim();
    if body.is_empty() {
        return vec![Line::from(Span::styled(
            "No description provided.",
            Style::default()
                .fg(styles::DIM)
                .add_modifier(Modifier::ITALIC),
        ))];
    }
    // Fail-soft: a renderer error degrades to an empty block so the rest
    // of the sidebar still shows.
    markdown::render(body, width).unwrap_or_default()
}

/// Remove every `<!-- ... -->` range, smallest match first, including
/// ranges spanning line breaks. An unterminated opener drops the rest of
/// the text.
fn strip_html_comments(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start + 4..].find("-->") {
            Some(end) => rest = &rest[start + 4 + end + 3..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

// ── Checks ──

fn checks_block(checks: &[CheckRun]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Checks",
        Style::default()
            .fg(styles::CYAN)
            .add_modifier(Modifier::BOLD),
    ))];
    if checks.is_empty() {
        lines.push(Line::from(Span::styled(
            "No checks reported.",
            styles::muted_style(),
        )));
        return lines;
    }
    for check in checks {
        let (glyph, style) = match check.conclusion {
            Some(c) if c.is_failure() => ("✗", styles::check_failure()),
            Some(_) => ("✓", styles::check_success()),
            None if check.status.is_waiting() => (WAITING_GLYPH, styles::check_pending()),
            None => ("–", styles::dim_style()),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{glyph} "), style),
            Span::styled(check.name.clone(), Style::default().fg(styles::TEXT)),
        ]));
    }
    lines
}

// ── Activity ──

fn activity_block(pr: &PrSnapshot, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Activity",
        Style::default()
            .fg(styles::CYAN)
            .add_modifier(Modifier::BOLD),
    ))];
    if pr.activity.is_empty() {
        lines.push(Line::from(Span::styled(
            "No activity yet.",
            styles::muted_style(),
        )));
        return lines;
    }
    let wrap_width = (width as usize).saturating_sub(2);
    for (i, entry) in pr.activity.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(
                entry.author.clone(),
                Style::default()
                    .fg(styles::CYAN)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", entry.created_at), styles::dim_style()),
        ]));
        for wrapped in word_wrap(&entry.body, wrap_width) {
            lines.push(Line::from(Span::styled(
                format!("  {wrapped}"),
                Style::default().fg(styles::TEXT),
            )));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::ActivityEntry;
    use crate::sidebar::status::{CheckConclusion, CheckStatus};

    fn snapshot() -> PrSnapshot {
        PrSnapshot {
            number: 42,
            title: "Improve parser".to_string(),
            body: String::new(),
            author: "carol".to_string(),
            base_ref: "main".to_string(),
            head_ref: "parser-improvements".to_string(),
            state: PrState::Open,
            mergeable: Mergeability::Mergeable,
            checks: vec![CheckRun {
                name: "build".to_string(),
                status: CheckStatus::Completed,
                conclusion: Some(CheckConclusion::Success),
            }],
            activity: Vec::new(),
        }
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn all_text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(line_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn strip_single_comment() {
        assert_eq!(strip_html_comments("A <!-- hidden -->B"), "A B");
    }

    #[test]
    fn strip_multiline_comment() {
        assert_eq!(strip_html_comments("keep<!--\nline one\nline two\n-->this"), "keepthis");
    }

    #[test]
    fn strip_is_non_greedy() {
        assert_eq!(
            strip_html_comments("<!-- a -->visible<!-- b -->"),
            "visible"
        );
    }

    #[test]
    fn strip_unterminated_drops_remainder() {
        assert_eq!(strip_html_comments("before<!-- never closed"), "before");
    }

    #[test]
    fn strip_without_comments_is_identity() {
        assert_eq!(strip_html_comments("plain text"), "plain text");
    }

    #[test]
    fn description_excludes_comment_content() {
        let mut pr = snapshot();
        pr.body = "A <!-- hidden -->B".to_string();
        let text = all_text(&compose(&pr, 40));
        assert!(!text.contains("hidden"));
        assert!(text.contains("A B"));
    }

    #[test]
    fn empty_body_renders_placeholder() {
        let pr = snapshot();
        let text = all_text(&compose(&pr, 40));
        assert!(text.contains("No description provided."));
    }

    #[test]
    fn comment_only_body_renders_placeholder() {
        let mut pr = snapshot();
        pr.body = "  <!-- template boilerplate -->  ".to_string();
        let text = all_text(&compose(&pr, 40));
        assert!(text.contains("No description provided."));
    }

    #[test]
    fn conflicting_renders_warning_pill() {
        let mut pr = snapshot();
        pr.mergeable = Mergeability::Conflicting;
        let lines = compose(&pr, 40);
        let pill = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .find(|s| s.content.as_ref().contains("Merge Conflicts"))
            .expect("conflicts pill");
        assert_eq!(pill.style.bg, Some(styles::RED));
    }

    #[test]
    fn mergeable_renders_success_pill() {
        let pr = snapshot();
        let lines = compose(&pr, 40);
        let pill = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .find(|s| s.content.as_ref().contains("Mergeable"))
            .expect("mergeable pill");
        assert_eq!(pill.style.bg, Some(styles::GREEN));
    }

    #[test]
    fn unknown_mergeability_renders_no_pill() {
        let mut pr = snapshot();
        pr.mergeable = Mergeability::Unknown;
        let text = all_text(&compose(&pr, 40));
        assert!(!text.contains("Mergeable"));
        assert!(!text.contains("Merge Conflicts"));
    }

    #[test]
    fn pending_checks_pill_has_waiting_glyph() {
        let mut pr = snapshot();
        pr.checks = vec![CheckRun {
            name: "slow".to_string(),
            status: CheckStatus::InProgress,
            conclusion: None,
        }];
        let lines = compose(&pr, 40);
        let pill = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .find(|s| s.content.as_ref().contains("Checks") && s.style.bg.is_some())
            .expect("checks pill");
        assert!(pill.content.as_ref().contains(WAITING_GLYPH));
    }

    #[test]
    fn open_mergeable_success_scenario() {
        let pr = snapshot();
        assert_eq!(rollup(&pr.checks), RollupState::Success);
        let lines = compose(&pr, 40);
        let text = all_text(&lines);
        assert!(text.contains(" Open "));
        assert!(text.contains(" Mergeable "));
        assert!(text.contains(" Checks "));
        assert!(text.contains("No description provided."));
    }

    #[test]
    fn title_wraps_to_reserved_width() {
        let mut pr = snapshot();
        pr.title = "a very long pull request title that needs wrapping".to_string();
        let lines = compose(&pr, 20);
        // title lines come first, wrapped to 20 - 6 = 14 columns
        assert!(line_text(&lines[0]).chars().count() <= 14);
        assert!(line_text(&lines[1]).chars().count() <= 14);
    }

    #[test]
    fn branch_line_uses_arrow() {
        let text = all_text(&compose(&snapshot(), 40));
        assert!(text.contains("main → parser-improvements"));
    }

    #[test]
    fn one_blank_line_between_title_and_branches() {
        let lines = compose(&snapshot(), 40);
        // single-line title, then exactly one separator, then branches
        assert_eq!(line_text(&lines[0]), "Improve parser");
        assert_eq!(line_text(&lines[1]), "");
        assert!(line_text(&lines[2]).contains("→"));
    }

    #[test]
    fn activity_entries_are_rendered() {
        let mut pr = snapshot();
        pr.activity = vec![ActivityEntry {
            author: "dave".to_string(),
            created_at: "2025-03-01".to_string(),
            body: "Looks good to me".to_string(),
        }];
        let text = all_text(&compose(&pr, 40));
        assert!(text.contains("dave"));
        assert!(text.contains("Looks good to me"));
    }

    #[test]
    fn compose_is_deterministic() {
        let mut pr = snapshot();
        pr.body = "# Heading\n\nSome *body* text".to_string();
        assert_eq!(compose(&pr, 40), compose(&pr, 40));
    }
}
