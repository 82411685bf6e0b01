mod articles;
pub mod formatters;
mod modals;

use crate::app::{App, InputMode, Phase};
use crate::pipeline::keywords_line;
use formatters::selection_summary;
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

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_keywords(frame, chunks[1], app);
    articles::draw_articles(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);

    if app.input_mode == InputMode::Help {
        modals::draw_help(frame);
    }
    if app.input_mode == InputMode::Export {
        modals::draw_export(frame, app);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let status = if app.loading {
        "[Searching...]".to_string()
    } else {
        match (&app.phase, &app.last_search) {
            (Phase::Results, Some(at)) => format!(
                "[{} at {}]",
                selection_summary(app.store.selected_count(), app.store.len()),
                at
            ),
            _ => "[Idle]".to_string(),
        }
    };

    let filter_span = if app.config.video_filter {
        Span::styled(" video only ", Style::default().fg(Color::Magenta))
    } else {
        Span::styled(" all links ", Style::default().fg(Color::DarkGray))
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" Naver Video News ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        filter_span,
        Span::styled(" ", Style::default()),
        Span::styled(status, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_keywords(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.input_mode == InputMode::Keywords {
        Line::from(vec![
            Span::styled(&app.input_buffer, Style::default().fg(Color::Cyan)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(Span::raw(keywords_line(&app.keywords)))
    };
    let border = if app.input_mode == InputMode::Keywords {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Keywords "),
    );
    frame.render_widget(input, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Normal => {
            let help = " [/] Keywords [r] Search [Space] Toggle [a] All [n] None [e] Selected [↑↓] Nav [?] Help [q] Quit ";
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
        InputMode::Keywords => Line::from(Span::styled(
            " Comma separated | [Enter] Search | [Esc] Cancel ",
            Style::default().fg(Color::DarkGray),
        )),
        InputMode::Help => Line::from(Span::styled(
            " [?/Enter/Esc] Close help ",
            Style::default().fg(Color::DarkGray),
        )),
        InputMode::Export => Line::from(Span::styled(
            " [f] Text/JSON | [w] Write file | [↑↓] Scroll | [Esc] Close ",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
