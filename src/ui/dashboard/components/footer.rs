//! Dashboard footer component

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new("[1/2] Tabs | [↑↓] Select | [N]ew | [D]elete | [R]efresh | [Q] Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, area);
}
