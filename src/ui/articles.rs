use super::formatters::*;
use crate::app::{App, Phase};
use crate::pipeline::Article;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

fn article_row(i: usize, article: &Article, checked: bool, cursor: usize, width: usize) -> Row<'static> {
    let is_cursor = i == cursor;
    let text_style = match (is_cursor, checked) {
        (true, _) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        (false, true) => Style::default(),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let box_style = if checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cells = vec![
        Cell::from(checkbox(checked)).style(box_style),
        Cell::from(truncate_str(&headline(&article.title, &article.press), width)).style(text_style),
    ];

    let row_style = if is_cursor {
        Style::default().bg(Color::Rgb(40, 60, 100))
    } else {
        Style::default()
    };
    Row::new(cells).style(row_style)
}

pub fn draw_articles(frame: &mut Frame, area: Rect, app: &App) {
    if app.phase == Phase::Idle || app.store.is_empty() {
        draw_placeholder(frame, area, app);
        return;
    }

    let title_width = area.width.saturating_sub(2 + 5 + 1) as usize;
    let rows: Vec<Row> = app
        .store
        .articles()
        .iter()
        .enumerate()
        .map(|(i, a)| {
            article_row(
                i,
                a,
                app.store.is_selected(a.key()),
                app.selected_index,
                title_width,
            )
        })
        .collect();

    let header = Row::new(vec!["", "Headline (press)"])
        .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD));

    let title = format!(
        " Video news ({}) ",
        selection_summary(app.store.selected_count(), app.store.len())
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));

    let mut state = TableState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_placeholder(frame: &mut Frame, area: Rect, app: &App) {
    let text = match (app.phase, app.loading) {
        (_, true) => "Searching...",
        (Phase::Idle, false) => "Press [/] to edit keywords or [r] to search",
        (Phase::Results, false) => "No video articles found",
    };
    let block = Block::default().borders(Borders::ALL).title(" Video news ");
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
