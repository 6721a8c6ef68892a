//! Dashboard toast component

use super::super::state::{DashboardState, ToastKind};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

/// Render the transient notification line, if one is active.
pub fn render_toast(f: &mut Frame, area: Rect, state: &DashboardState) {
    let Some(toast) = state.toast() else {
        return;
    };
    let color = match toast.kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
        ToastKind::Info => Color::Cyan,
    };
    let widget = Paragraph::new(toast.message.clone())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    f.render_widget(widget, area);
}
