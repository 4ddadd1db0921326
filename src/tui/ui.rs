use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::widgets::{dashboard, problem_detail, problems};
use super::{App, View};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);
    draw_content(f, app, chunks[1]);
    draw_status(f, app, chunks[2]);
    draw_help_bar(f, app, chunks[3]);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let tab_titles = vec!["Dashboard", "Problems"];
    let selected = match app.view {
        View::Dashboard => 0,
        View::Problems | View::ProblemDetail => 1,
    };

    let tabs = Tabs::new(tab_titles)
        .block(Block::default().borders(Borders::ALL).title(" Grind "))
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    match app.view {
        View::Dashboard => dashboard::draw(f, app, area),
        View::Problems => problems::draw(f, app, area),
        View::ProblemDetail => problem_detail::draw(f, app, area),
    }
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let text = app.status.as_deref().unwrap_or("");
    let color = if text.starts_with("Error") {
        Color::Red
    } else {
        Color::Green
    };
    f.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(color))),
        area,
    );
}

fn draw_help_bar(f: &mut Frame, app: &App, area: Rect) {
    let key = Style::default().fg(Color::Cyan);

    let help_text = if app.filter_mode {
        vec![
            Span::styled("/", Style::default().fg(Color::Yellow)),
            Span::raw(&app.filter_input),
            Span::styled("█", Style::default().fg(Color::Yellow)),
            Span::raw(" | "),
            Span::styled("<CR>", key),
            Span::raw(" Apply  "),
            Span::styled("<Esc>", key),
            Span::raw(" Cancel"),
        ]
    } else {
        let mut spans = vec![Span::styled("h/l", key), Span::raw(" Views  ")];

        match app.view {
            View::Dashboard => {
                spans.extend(vec![
                    Span::styled("c", key),
                    Span::raw(" Complete next  "),
                    Span::styled("^r", key),
                    Span::raw(" Refresh  "),
                ]);
            }
            View::Problems => {
                spans.extend(vec![
                    Span::styled("j/k", key),
                    Span::raw(" Nav  "),
                    Span::styled("g/G", key),
                    Span::raw(" Top/Bot  "),
                    Span::styled("l/<CR>", key),
                    Span::raw(" Open  "),
                    Span::styled("c", key),
                    Span::raw(" Complete  "),
                    Span::styled("/", key),
                    Span::raw(" Tag  "),
                ]);
                if app.filter_tag.is_some() {
                    spans.extend(vec![Span::styled("<Esc>", key), Span::raw(" Clear  ")]);
                }
            }
            View::ProblemDetail => {
                spans.extend(vec![
                    Span::styled("h/<Esc>", key),
                    Span::raw(" Back  "),
                    Span::styled("c/<CR>", key),
                    Span::raw(" Complete  "),
                ]);
            }
        }

        spans.extend(vec![Span::styled("q", key), Span::raw(" Quit")]);

        spans
    };

    let help = Paragraph::new(Line::from(help_text)).style(Style::default().bg(Color::DarkGray));

    f.render_widget(help, area);
}
