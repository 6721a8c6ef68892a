//! Dashboard stats cards component

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the four summary counters as a row of cards.
pub fn render_stats_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stats = state.stats();
    let cards = [
        ("Users", stats.map(|s| s.users), Color::Cyan),
        ("Courses", stats.map(|s| s.courses), Color::Green),
        ("Exams", stats.map(|s| s.exams), Color::Yellow),
        ("Enrollments", stats.map(|s| s.enrollments), Color::Magenta),
    ];

    for ((label, value, color), chunk) in cards.into_iter().zip(chunks.iter()) {
        // "--" until the first stats fetch completes
        let value_text = value.map_or_else(|| "--".to_string(), |v| v.to_string());
        let card = Paragraph::new(Line::from(vec![
            Span::styled(
                value_text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(label, Style::default().fg(Color::Gray)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(card, *chunk);
    }
}
