//! Markdown rendering for the sidebar description.
//!
//! Converts a PR body to styled ratatui lines, word-wrapped to the target
//! width. Only the constructs that show up in real PR descriptions are
//! styled: headings, emphasis, inline and fenced code, lists.

use anyhow::{bail, Result};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::styles;

/// Render `markdown` into styled lines wrapped to `width` columns.
/// Fails when there is no room to render at all.
pub fn render(markdown: &str, width: u16) -> Result<Vec<Line<'static>>> {
    if width == 0 {
        bail!("render width is zero");
    }

    let mut out: Vec<Line<'static>> = Vec::new();
    let mut pending: Vec<Span<'static>> = Vec::new();
    let mut bold = 0u8;
    let mut italic = 0u8;
    let mut heading = false;
    let mut in_code_block = false;
    let mut list_depth = 0usize;

    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH);
    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                flush(&mut out, &mut pending, width);
                heading = true;
            }
            Event::End(TagEnd::Heading(_)) => {
                flush(&mut out, &mut pending, width);
                out.push(Line::from(""));
                heading = false;
            }
            Event::End(TagEnd::Paragraph) => {
                flush(&mut out, &mut pending, width);
                out.push(Line::from(""));
            }
            Event::Start(Tag::CodeBlock(_)) => {
                flush(&mut out, &mut pending, width);
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                out.push(Line::from(""));
            }
            Event::Start(Tag::List(_)) => list_depth += 1,
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 {
                    out.push(Line::from(""));
                }
            }
            Event::Start(Tag::Item) => {
                flush(&mut out, &mut pending, width);
                let indent = "  ".repeat(list_depth.saturating_sub(1));
                pending.push(Span::styled(
                    format!("{indent}• "),
                    Style::default().fg(styles::DIM),
                ));
            }
            Event::End(TagEnd::Item) => flush(&mut out, &mut pending, width),
            Event::Start(Tag::Emphasis) => italic += 1,
            Event::End(TagEnd::Emphasis) => italic = italic.saturating_sub(1),
            Event::Start(Tag::Strong) => bold += 1,
            Event::End(TagEnd::Strong) => bold = bold.saturating_sub(1),
            Event::Code(code) => {
                pending.push(Span::styled(
                    code.into_string(),
                    Style::default().fg(styles::CYAN),
                ));
            }
            Event::Text(text) => {
                if in_code_block {
                    for code_line in text.lines() {
                        out.push(Line::from(Span::styled(
                            format!("  {code_line}"),
                            Style::default().fg(styles::CYAN),
                        )));
                    }
                } else {
                    pending.push(Span::styled(
                        text.into_string(),
                        inline_style(heading, bold > 0, italic > 0),
                    ));
                }
            }
            Event::SoftBreak => pending.push(Span::raw(" ")),
            Event::HardBreak => flush(&mut out, &mut pending, width),
            Event::Rule => {
                flush(&mut out, &mut pending, width);
                out.push(Line::from(Span::styled(
                    "─".repeat(width as usize),
                    Style::default().fg(styles::BORDER),
                )));
                out.push(Line::from(""));
            }
            _ => {}
        }
    }
    flush(&mut out, &mut pending, width);

    // Drop the trailing blank a final block leaves behind
    while out.last().is_some_and(|l| l.spans.is_empty() || line_text(l).is_empty()) {
        out.pop();
    }
    Ok(out)
}

fn inline_style(heading: bool, bold: bool, italic: bool) -> Style {
    let mut style = if heading {
        Style::default()
            .fg(styles::BRIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(styles::TEXT)
    };
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    style
}

/// Greedily pack the pending spans into lines no wider than `width`,
/// breaking on word boundaries and keeping each word's style.
fn flush(out: &mut Vec<Line<'static>>, pending: &mut Vec<Span<'static>>, width: u16) {
    if pending.is_empty() {
        return;
    }
    let width = width as usize;
    let mut line: Vec<Span<'static>> = Vec::new();
    let mut col = 0usize;
    for span in pending.drain(..) {
        for word in span.content.split_whitespace() {
            let word_len = word.chars().count();
            let sep = usize::from(col > 0);
            if col > 0 && col + sep + word_len > width {
                out.push(Line::from(std::mem::take(&mut line)));
                col = 0;
            }
            if col > 0 {
                line.push(Span::raw(" "));
                col += 1;
            }
            line.push(Span::styled(word.to_string(), span.style));
            col += word_len;
        }
    }
    if !line.is_empty() {
        out.push(Line::from(line));
    }
}

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
