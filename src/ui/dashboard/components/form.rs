//! Modal form components
//!
//! Render the create-user and create-course forms over the dashboard

use super::super::forms::{CourseField, CourseForm, UserField, UserForm};
use super::super::utils::centered_rect;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

const HINT: &str = "Enter: submit  Esc: cancel  Tab: next field";

fn field_line<'a>(label: &'a str, value: String, focused: bool) -> Line<'a> {
    let marker = if focused { "> " } else { "  " };
    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{:<12}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, value_style),
    ])
}

fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1))
}

pub fn render_user_form(f: &mut Frame, form: &UserForm) {
    let area = centered_rect(50, 11, f.area());
    f.render_widget(Clear, area);

    let focus = form.focus();
    let lines = vec![
        field_line("Username", form.username.clone(), focus == UserField::Username),
        field_line("Email", form.email.clone(), focus == UserField::Email),
        field_line(
            "First name",
            form.first_name.clone(),
            focus == UserField::FirstName,
        ),
        field_line(
            "Last name",
            form.last_name.clone(),
            focus == UserField::LastName,
        ),
        field_line(
            "Role",
            format!("< {} >", form.role()),
            focus == UserField::Role,
        ),
        Line::from(""),
        Line::from(Span::styled(HINT, Style::default().fg(Color::DarkGray))),
    ];

    let widget = Paragraph::new(lines).block(modal_block("New User"));
    f.render_widget(widget, area);
}

pub fn render_course_form(f: &mut Frame, form: &CourseForm) {
    let area = centered_rect(54, 9, f.area());
    f.render_widget(Clear, area);

    let instructor_text = match form.selected_instructor() {
        Some(instructor) => {
            let name = instructor.display_name();
            if name.is_empty() {
                format!("< {} >", instructor.username)
            } else {
                format!("< {} >", name)
            }
        }
        None if form.instructors().is_empty() => "Loading instructors...".to_string(),
        None => "< Select Instructor >".to_string(),
    };

    let focus = form.focus();
    let lines = vec![
        field_line("Title", form.title.clone(), focus == CourseField::Title),
        field_line(
            "Description",
            form.description.clone(),
            focus == CourseField::Description,
        ),
        field_line(
            "Instructor",
            instructor_text,
            focus == CourseField::Instructor,
        ),
        Line::from(""),
        Line::from(Span::styled(HINT, Style::default().fg(Color::DarkGray))),
    ];

    let widget = Paragraph::new(lines).block(modal_block("New Course"));
    f.render_widget(widget, area);
}
