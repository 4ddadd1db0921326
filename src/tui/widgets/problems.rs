use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{format_revisit, truncate};
use crate::schedule;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let title = if let Some(tag) = &app.filter_tag {
        format!(" Problems (tag: {}) ", tag)
    } else {
        " Problems ".to_string()
    };

    let items: Vec<ListItem> = app
        .problems
        .items
        .iter()
        .filter_map(|name| app.record(name).map(|r| (name, r)))
        .map(|(name, record)| {
            let revisit = format_revisit(record.revisit_date);
            let (revisit_color, revisit_text) =
                if schedule::is_due(record.revisit_date, app.today) {
                    (Color::Red, format!("{} !", revisit))
                } else {
                    (Color::White, revisit)
                };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<42}", truncate(name, 40)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:<24}", truncate(&record.tag, 22)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{:<7}", record.count),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(revisit_text, Style::default().fg(revisit_color)),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(Color::Cyan));

    let header_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);
    let header = Line::from(vec![
        Span::styled(format!("  {:<42}", "Name"), header_style),
        Span::styled(format!("{:<24}", "Tag"), header_style),
        Span::styled(format!("{:<7}", "Count"), header_style),
        Span::styled("Revisit", header_style),
    ]);

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(app.problems.selected);

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    f.render_widget(Paragraph::new(header), chunks[0]);
    f.render_stateful_widget(list, chunks[1], &mut state);
}
