//! Ratatui rendering of the session scrollback and prompt.
//!
//! The scrollback is drawn as one wrapped paragraph pinned to the bottom of
//! the surface. The prompt line only renders once playback has drained, which
//! is what gates input visually during boot and animated output.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use noct_term::markup::{self, Segment, Tag};
use noct_term::screen::Entry;
use noct_term::Session;
use noct_term::Style as LineStyle;

pub fn draw(frame: &mut Frame<'_>, session: &Session) {
    let area = frame.area();
    let mut lines: Vec<Line<'static>> = session
        .screen
        .entries()
        .iter()
        .map(entry_line)
        .collect();
    if !session.screen.is_animating() {
        lines.push(prompt_line(session));
    }
    let total: usize = lines.iter().map(|l| wrapped_rows(l, area.width)).sum();
    let offset = total.saturating_sub(area.height as usize) as u16;
    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

/// Rows a line occupies after wrapping, for bottom-pinned scrolling.
fn wrapped_rows(line: &Line<'_>, cols: u16) -> usize {
    if cols == 0 {
        return 1;
    }
    line.width().div_ceil(cols as usize).max(1)
}

fn entry_line(entry: &Entry) -> Line<'static> {
    let base = base_style(entry.line.style);
    let mut line = match entry.plain_prefix() {
        // Mid-reveal: plain-text prefix, no markup styling yet.
        Some(prefix) => Line::from(Span::styled(prefix, base)),
        None => Line::from(
            markup::parse(&entry.line.text)
                .into_iter()
                .map(|seg| {
                    let style = segment_style(base, &seg);
                    Span::styled(seg.text, style)
                })
                .collect::<Vec<_>>(),
        ),
    };
    if entry.line.style.is_centered() {
        line = line.alignment(Alignment::Center);
    }
    line
}

fn prompt_line(session: &Session) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            session.prompt_user().to_string(),
            Style::default().fg(Color::Green),
        ),
        Span::styled("@", Style::default().fg(Color::DarkGray)),
        Span::styled(
            session.prompt_host().to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(":", Style::default().fg(Color::DarkGray)),
        Span::styled("~", Style::default().fg(Color::Yellow)),
        Span::styled("$ ", Style::default().fg(Color::DarkGray)),
        Span::raw(session.buffer().to_string()),
        Span::styled("█", Style::default().fg(Color::Green)),
    ])
}

fn segment_style(base: Style, seg: &Segment) -> Style {
    let mut style = base;
    if let Some(tag) = seg.color {
        style = style.fg(tag_color(tag));
    }
    if seg.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if seg.underline {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

fn tag_color(tag: Tag) -> Color {
    match tag {
        Tag::Green => Color::Green,
        Tag::Cyan => Color::Cyan,
        Tag::Amber => Color::Yellow,
        Tag::Red => Color::Red,
        Tag::White => Color::White,
        Tag::Dim => Color::DarkGray,
        // Attribute tags carry no color of their own.
        Tag::Bold | Tag::Underline => Color::Reset,
    }
}

fn base_style(style: LineStyle) -> Style {
    let plain = Style::default();
    match style {
        LineStyle::Default => plain,
        LineStyle::White => plain.fg(Color::White),
        LineStyle::Dim | LineStyle::Separator | LineStyle::Tagline => {
            plain.fg(Color::DarkGray)
        },
        LineStyle::Green => plain.fg(Color::Green),
        LineStyle::Cyan => plain.fg(Color::Cyan),
        LineStyle::Amber => plain.fg(Color::Yellow),
        LineStyle::Red | LineStyle::Error => plain.fg(Color::Red),
        LineStyle::Link => plain.fg(Color::Cyan),
        LineStyle::Heading => plain.fg(Color::Green).add_modifier(Modifier::BOLD),
        LineStyle::SubHeading => plain.fg(Color::Yellow).add_modifier(Modifier::BOLD),
        LineStyle::Banner | LineStyle::BannerCompact | LineStyle::Intro => {
            plain.fg(Color::Green).add_modifier(Modifier::BOLD)
        },
        LineStyle::Title => plain.fg(Color::Cyan).add_modifier(Modifier::BOLD),
        LineStyle::HintCentered => plain.fg(Color::White),
    }
}
