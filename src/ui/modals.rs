use super::centered_rect;
use crate::app::{App, ExportFormat};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn help_section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn help_binding(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("    {:<10}", key), Style::default().fg(Color::Yellow)),
        Span::raw(desc.to_string()),
    ])
}

fn help_content() -> Vec<Line<'static>> {
    vec![
        help_section("General"),
        help_binding("q", "Quit"),
        help_binding("?", "Show this help"),
        help_binding("/", "Edit keywords (comma separated) and search"),
        help_binding("r", "Search again with current keywords"),
        Line::from(""),
        help_section("Results"),
        help_binding("↑ / k", "Move selection up"),
        help_binding("↓ / j", "Move selection down"),
        help_binding("Space", "Toggle checkbox"),
        help_binding("a", "Select all"),
        help_binding("n", "Select none"),
        help_binding("e", "Show selected results"),
        Line::from(""),
        help_section("Selected results"),
        help_binding("f", "Toggle Text / JSON"),
        help_binding("w", "Write to file"),
        help_binding("Esc", "Close"),
    ]
}

pub fn draw_help(frame: &mut Frame) {
    let area = centered_rect(50, 70, frame.area());
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

pub fn draw_export(frame: &mut Frame, app: &App) {
    let area = centered_rect(80, 80, frame.area());
    frame.render_widget(Clear, area);

    let format_str = match app.export_format {
        ExportFormat::Text => "Text",
        ExportFormat::Json => "JSON",
    };
    let outer_block = Block::default()
        .title(format!(
            " Selected results: {} [{}] ",
            app.store.selected_count(),
            format_str
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .style(Style::default().bg(Color::Black));

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    let content = if app.store.selected_count() == 0 {
        "Nothing selected".to_string()
    } else {
        app.export_content()
    };
    let body = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((app.export_scroll, 0));
    frame.render_widget(body, inner_area);
}
