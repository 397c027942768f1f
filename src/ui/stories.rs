use super::formatters::*;
use crate::app::App;
use crate::stories::{DisplayRow, StoryFetcher, Tier};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

struct ColumnDef {
    name: &'static str,
    width: u16,
    priority: u8,
}

const STORY_COLUMNS: &[ColumnDef] = &[
    ColumnDef {
        name: "Story Title",
        width: 40,
        priority: 1,
    },
    ColumnDef {
        name: "Score / Comments",
        width: 26,
        priority: 1,
    },
    ColumnDef {
        name: "Age",
        width: 9,
        priority: 2,
    },
];

pub fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Top => Color::LightGreen,
        Tier::High => Color::LightYellow,
        Tier::Mid => Color::LightBlue,
        Tier::Featured => Color::White,
        Tier::Low => Color::DarkGray,
    }
}

fn visible_columns(columns: &[ColumnDef], available_width: u16) -> Vec<usize> {
    let max_priority = columns.iter().map(|c| c.priority).max().unwrap_or(1);
    let mut visible: Vec<usize> = Vec::new();
    for priority_cutoff in 1..=max_priority {
        let candidate: Vec<usize> = columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.priority <= priority_cutoff)
            .map(|(i, _)| i)
            .collect();
        let total_width: u16 = candidate.iter().map(|&i| columns[i].width).sum();
        if total_width <= available_width {
            visible = candidate;
        } else {
            break;
        }
    }
    if visible.is_empty() {
        visible = columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.priority == 1)
            .map(|(i, _)| i)
            .collect();
    }
    visible
}

/// The title column takes whatever width the other columns leave.
fn column_constraints(columns: &[ColumnDef], vis: &[usize]) -> Vec<Constraint> {
    vis.iter()
        .map(|&i| {
            if i == 0 {
                Constraint::Min(columns[i].width)
            } else {
                Constraint::Length(columns[i].width)
            }
        })
        .collect()
}

fn header_row(vis: &[usize]) -> Row<'static> {
    let cells: Vec<Cell> = vis
        .iter()
        .map(|&i| {
            Cell::from(STORY_COLUMNS[i].name)
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        })
        .collect();
    Row::new(cells).height(1)
}

fn story_row(i: usize, row: &DisplayRow<'_>, vis: &[usize], selected: usize) -> Row<'static> {
    let is_selected = i == selected;
    let mut style = Style::default().fg(tier_color(row.tier));
    if is_selected {
        style = style.add_modifier(Modifier::BOLD);
    }
    let story = row.story;

    let cells: Vec<Cell> = vis
        .iter()
        .map(|&col| match col {
            0 => Cell::from(story.title.clone()).style(style),
            1 => Cell::from(format_score(story.points, story.comments)).style(style),
            2 => Cell::from(format_relative_time(story.timestamp)).style(style),
            _ => Cell::from(""),
        })
        .collect();

    let row_style = if is_selected {
        Style::default().bg(Color::Rgb(40, 60, 100))
    } else {
        Style::default()
    };
    Row::new(cells).style(row_style)
}

fn message_row(message: &str, style: Style) -> Row<'static> {
    Row::new(vec![Cell::from(message.to_string()).style(style)])
}

pub fn draw_stories<F: StoryFetcher>(frame: &mut Frame, area: Rect, app: &App<F>) {
    let available_width = area.width.saturating_sub(2);
    let vis = visible_columns(STORY_COLUMNS, available_width);
    let rows_data = app.display_rows();

    let rows: Vec<Row> = if let Some(status) = &app.loading {
        vec![message_row(
            &format!("Loading... {}", status),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )]
    } else if rows_data.is_empty() {
        vec![message_row("No stories found", Style::default().fg(Color::DarkGray))]
    } else {
        rows_data
            .iter()
            .enumerate()
            .map(|(i, row)| story_row(i, row, &vis, app.selected_index))
            .collect()
    };

    let title = format!(
        " {} ({} of {} stories) ",
        app.filter_mode.label(),
        rows_data.len(),
        app.stories.len()
    );

    let table = Table::new(rows, column_constraints(STORY_COLUMNS, &vis))
        .header(header_row(&vis))
        .block(Block::default().borders(Borders::ALL).title(title));

    let mut state = TableState::default();
    if app.loading.is_none() && !rows_data.is_empty() {
        state.select(Some(app.selected_index));
    }
    frame.render_stateful_widget(table, area, &mut state);
}
