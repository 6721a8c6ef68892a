//! Dashboard tab bar component

use super::super::state::DashboardState;
use crate::events::Tab;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

pub fn render_tab_bar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let selected = match state.active_tab() {
        Tab::Users => 0,
        Tab::Courses => 1,
    };
    let tabs = Tabs::new(vec!["[1] Users", "[2] Courses"])
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}
