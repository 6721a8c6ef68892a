//! Delete confirmation modal component

use super::super::utils::centered_rect;
use crate::events::Tab;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

pub fn render_confirm(f: &mut Frame, tab: Tab, label: &str) {
    let area = centered_rect(46, 7, f.area());
    f.render_widget(Clear, area);

    let entity = match tab {
        Tab::Users => "user",
        Tab::Courses => "course",
    };
    let lines = vec![
        Line::from(Span::styled(
            format!("Delete {} '{}'?", entity, label),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[y] confirm  [n] cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Confirm ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red))
            .padding(Padding::uniform(1)),
    );
    f.render_widget(widget, area);
}
