use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::{progress_bar, truncate};
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Stats + queue row
            Constraint::Min(0),     // Per-tag breakdown
        ])
        .split(area);

    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[0]);

    draw_stats(f, app, top_chunks[0]);
    draw_queue(f, app, top_chunks[1]);
    draw_tags(f, app, chunks[1]);
}

fn stat_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn draw_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;

    let text = vec![
        Line::from(vec![
            Span::styled("Problems: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", stats.total_problems),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        stat_line(
            "Attempted",
            format!("{} ({:.0}%)", stats.attempted, stats.completion_rate()),
            Color::Green,
        ),
        stat_line("New", format!("{}", stats.unattempted), Color::White),
        stat_line(
            "Due",
            format!("{}", stats.due_now),
            if stats.due_now > 0 {
                Color::Yellow
            } else {
                Color::White
            },
        ),
        stat_line("Scheduled", format!("{}", stats.scheduled), Color::Cyan),
        stat_line(
            "Completions",
            format!("{}", stats.total_completions),
            Color::Magenta,
        ),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Stats ({}) ", app.today.format("%b %d")))
        .title_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_queue(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .queue
        .iter()
        .enumerate()
        .filter_map(|(i, name)| app.record(name).map(|r| (i, name, r)))
        .map(|(i, name, record)| {
            let style = if record.is_attempted() {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{:<34}", truncate(name, 32)), style),
                Span::styled(progress_bar(record.count), Style::default().fg(Color::Green)),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Up Next ")
        .title_style(Style::default().fg(Color::Yellow));

    if items.is_empty() {
        let paragraph = Paragraph::new("All caught up.").block(block);
        f.render_widget(paragraph, area);
    } else {
        f.render_widget(List::new(items).block(block), area);
    }
}

fn draw_tags(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .stats
        .tags
        .iter()
        .map(|summary| {
            let color = if summary.attempted == summary.problems {
                Color::Green
            } else if summary.attempted > 0 {
                Color::Yellow
            } else {
                Color::DarkGray
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<28}", truncate(&summary.tag, 26)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{}/{}", summary.attempted, summary.problems),
                    Style::default().fg(color),
                ),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Topics ")
        .title_style(Style::default().fg(Color::Magenta));

    f.render_widget(List::new(items).block(block), area);
}
