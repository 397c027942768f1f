use super::centered_rect;
use crate::stories::FilterMode;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

fn help_section(title: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("─── {} ", title),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            "───────────────────────────",
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn help_binding(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:12}", key), Style::default().fg(Color::Cyan)),
        Span::raw(desc.to_string()),
    ])
}

fn tier_legend(label: &str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ■ ", Style::default().fg(color)),
        Span::raw(label.to_string()),
    ])
}

/// Keys `1`..`4` select filters in `FilterMode::ALL` order.
const FILTER_KEYS: [&str; 4] = ["1", "2", "3", "4"];

fn help_content() -> Vec<Line<'static>> {
    let mut lines = vec![
        help_section("General"),
        help_binding("q", "Quit"),
        help_binding("r", "Refresh current day"),
        help_binding("?", "Show this help"),
        help_binding("↓ / ↑", "Move selection"),
        Line::from(""),
        help_section("Days"),
        help_binding("j", "Earlier day"),
        help_binding("k", "Later day"),
        Line::from(""),
        help_section("Open"),
        help_binding("Space", "Open story in browser"),
        help_binding("l / Enter", "Open comments in browser"),
        Line::from(""),
        help_section("Filter"),
    ];
    lines.extend(
        FilterMode::ALL
            .iter()
            .zip(FILTER_KEYS)
            .map(|(mode, key)| help_binding(key, mode.label())),
    );
    lines.extend([
        Line::from(""),
        help_section("Sort"),
        help_binding("p", "Points"),
        help_binding("c", "Comments"),
        help_binding("d", "Date (newest first)"),
        Line::from(""),
        help_section("Colours"),
        tier_legend("Top 10 by points", Color::LightGreen),
        tier_legend("Top 20 by points", Color::LightYellow),
        tier_legend("Top half by points", Color::LightBlue),
        tier_legend("Front page", Color::White),
        tier_legend("Everything else", Color::DarkGray),
        Line::from(""),
        Line::from(Span::styled(
            "  [?/Enter/Esc] Close",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    lines
}

pub fn draw_help(frame: &mut Frame) {
    let area = centered_rect(50, 80, frame.area());
    frame.render_widget(Clear, area);

    let outer_block = Block::default()
        .title(" Help - Keyboard Shortcuts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    frame.render_widget(
        Paragraph::new(help_content()).alignment(Alignment::Left),
        inner_area,
    );
}
