//! Dashboard table component
//!
//! Renders the active list from its view-model

use super::super::state::DashboardState;
use super::super::view::{COURSES_HEADER, TableBody, USERS_HEADER, active_body};
use crate::events::Tab;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

fn column_widths(tab: Tab) -> Vec<Constraint> {
    match tab {
        Tab::Users => vec![
            Constraint::Length(5),
            Constraint::Length(14),
            Constraint::Length(24),
            Constraint::Length(18),
            Constraint::Length(11),
            Constraint::Length(9),
            Constraint::Length(17),
            Constraint::Length(8),
        ],
        Tab::Courses => vec![
            Constraint::Length(5),
            Constraint::Length(22),
            Constraint::Fill(1),
            Constraint::Length(18),
            Constraint::Length(17),
            Constraint::Length(8),
        ],
    }
}

pub fn render_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let tab = state.active_tab();
    let block = Block::default()
        .title(format!(" {} ", tab))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    match active_body(state) {
        TableBody::Rows(rows) => {
            let header_cells: Vec<Cell> = match tab {
                Tab::Users => USERS_HEADER.iter(),
                Tab::Courses => COURSES_HEADER.iter(),
            }
            .map(|h| {
                Cell::from(*h).style(
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();

            let body_rows = rows
                .into_iter()
                .map(|cells| Row::new(cells.into_iter().map(Cell::from)));

            let selected = match tab {
                Tab::Users => state.users().selected(),
                Tab::Courses => state.courses().selected(),
            };
            let mut table_state = TableState::default();
            table_state.select(Some(selected));

            let table = Table::new(body_rows, column_widths(tab))
                .header(Row::new(header_cells).bottom_margin(1))
                .row_highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .block(block);
            f.render_stateful_widget(table, area, &mut table_state);
        }
        TableBody::Placeholder { message, .. } => {
            let placeholder = Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(placeholder, area);
        }
    }
}
