use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::progress_bar;
use crate::models::ProblemRecord;
use crate::schedule;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some((name, record)) = app
        .selected_problem
        .as_deref()
        .and_then(|name| app.record(name).map(|r| (name, r)))
    else {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Problem Detail ");
        let paragraph = Paragraph::new("No problem selected").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Header info
            Constraint::Min(0),    // Schedule
        ])
        .split(area);

    draw_header(f, name, record, chunks[0]);
    draw_schedule(f, app, record, chunks[1]);
}

fn draw_header(f: &mut Frame, name: &str, record: &ProblemRecord, area: Rect) {
    let text = vec![
        Line::from(vec![
            Span::styled("URL: ", Style::default().fg(Color::Gray)),
            Span::styled(record.url.as_str(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tag: ", Style::default().fg(Color::Gray)),
            Span::styled(record.tag.as_str(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", name))
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn draw_schedule(f: &mut Frame, app: &App, record: &ProblemRecord, area: Rect) {
    let status = record.status_label(app.today);
    let status_color = match status {
        "Due" => Color::Red,
        "Scheduled" => Color::Green,
        _ => Color::White,
    };

    let revisit = match record.revisit_date {
        Some(d) => d.format("%b %d, %Y").to_string(),
        None => "Not set".to_string(),
    };

    // What completing it today would schedule
    let next_if_done = schedule::next_revisit_date(record.count, app.today);

    let mut text = vec![
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::Gray)),
            Span::styled(status, Style::default().fg(status_color)),
        ]),
        Line::from(vec![
            Span::styled("Completed: ", Style::default().fg(Color::Gray)),
            Span::styled(progress_bar(record.count), Style::default().fg(Color::Green)),
            Span::styled(
                format!(" {} times", record.count),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled("Revisit: ", Style::default().fg(Color::Gray)),
            Span::styled(revisit, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Last updated: ", Style::default().fg(Color::Gray)),
            Span::styled(
                record.updated_datetime.format("%b %d, %Y %H:%M").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Complete now -> next revisit ", Style::default().fg(Color::Gray)),
            Span::styled(
                next_if_done.format("%b %d, %Y").to_string(),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!(" (+{}d)", schedule::interval_for(record.count)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    if let Some(status) = &app.status {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            status.as_str(),
            Style::default().fg(Color::Green),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Schedule ")
        .title_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(text).block(block), area);
}
