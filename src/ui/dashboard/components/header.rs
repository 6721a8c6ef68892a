//! Dashboard header component
//!
//! Renders the title and the backend connection line

use super::super::state::DashboardState;
use super::super::utils::spinner_frame;
use crate::events::ConnectionStatus;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header with title and connection status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("CLASSDECK ADMIN v{}", version))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (status_text, status_color) = match state.connection() {
        // Animated while the startup probe is still in flight
        ConnectionStatus::Checking => (
            format!(
                "{} Checking backend connection...",
                spinner_frame(state.tick())
            ),
            Color::Yellow,
        ),
        ConnectionStatus::Connected => ("● Connected to backend".to_string(), Color::Green),
        ConnectionStatus::Unhealthy => ("● Backend unhealthy".to_string(), Color::Red),
        ConnectionStatus::Unreachable => ("● Connection error".to_string(), Color::Red),
    };

    let status_line = Line::from(vec![
        Span::styled(status_text, Style::default().fg(status_color)),
        Span::raw("  |  "),
        Span::styled(
            state.environment().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("up {}s", state.uptime_secs()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let status = Paragraph::new(status_line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(status, header_chunks[1]);
}
