//! Dashboard layout and top-level rendering.

use crate::ui::dashboard::components::{
    activity::render_activity_panel, confirm::render_confirm, footer::render_footer,
    form::{render_course_form, render_user_form}, header::render_header,
    stats::render_stats_cards, table::render_table, tabs::render_tab_bar, toast::render_toast,
};
use crate::ui::dashboard::state::{DashboardState, Modal};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

/// Draw the whole dashboard for one frame.
pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),      // header
            Constraint::Length(3),      // stats cards
            Constraint::Length(1),      // tab bar
            Constraint::Fill(1),        // active table
            Constraint::Percentage(25), // activity log
            Constraint::Length(1),      // toast
            Constraint::Length(2),      // footer
        ])
        .split(f.area());

    render_header(f, chunks[0], state);
    render_stats_cards(f, chunks[1], state);
    render_tab_bar(f, chunks[2], state);
    render_table(f, chunks[3], state);
    render_activity_panel(f, chunks[4], state);
    render_toast(f, chunks[5], state);
    render_footer(f, chunks[6]);

    // Modals draw on top of everything else
    match state.modal() {
        Modal::None => {}
        Modal::UserForm(form) => render_user_form(f, form),
        Modal::CourseForm(form) => render_course_form(f, form),
        Modal::ConfirmDelete { tab, label, .. } => render_confirm(f, *tab, label),
    }
}
