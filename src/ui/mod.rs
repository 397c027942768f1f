pub mod formatters;
mod modals;
mod stories;

pub use stories::tier_color;

use crate::app::{App, InputMode};
use crate::stories::StoryFetcher;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn draw<F: StoryFetcher>(frame: &mut Frame, app: &App<F>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    stories::draw_stories(frame, chunks[1], app);
    draw_footer(frame, chunks[2], app);

    if app.input_mode == InputMode::Help {
        modals::draw_help(frame);
    }
}

fn draw_header<F: StoryFetcher>(frame: &mut Frame, area: Rect, app: &App<F>) {
    let status_style = if app.loading.is_some() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let later = if app.can_go_later() { "" } else { " (latest)" };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", app.title()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(later, status_style),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_footer<F: StoryFetcher>(frame: &mut Frame, area: Rect, app: &App<F>) {
    let content = match app.input_mode {
        InputMode::Normal => {
            let help = " [j/k] Earlier/Later [Space] Story [l] Comments [1-4] Filter [p/c/d] Sort [r] Refresh [?] Help [q] Quit ";
            if let Some(msg) = &app.status_message {
                Line::from(vec![
                    Span::styled(msg, Style::default().fg(Color::Yellow)),
                    Span::raw(" | "),
                    Span::styled(help, Style::default().fg(Color::DarkGray)),
                ])
            } else {
                Line::from(Span::styled(help, Style::default().fg(Color::DarkGray)))
            }
        }
        InputMode::Help => Line::from(Span::styled(
            " [?/Enter/Esc] Close help ",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
