//! Table view-models.
//!
//! Rendering never reaches into the raw API types. Each table is first shaped
//! into a [`TableBody`] of plain strings, which the table component draws.

use crate::api::types::{Course, User};
use crate::consts::dashboard::{COURSES_TABLE_COLUMNS, USERS_TABLE_COLUMNS};
use crate::events::Tab;
use crate::ui::dashboard::state::DashboardState;
use crate::ui::dashboard::utils::format_date;

pub const USERS_HEADER: [&str; 8] = [
    "ID", "Username", "Email", "Name", "Role", "Status", "Created", "Actions",
];

pub const COURSES_HEADER: [&str; 6] = [
    "ID", "Title", "Description", "Instructor", "Created", "Actions",
];

/// What the table component should draw: either data rows or a single
/// message spanning the full width of the table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<Vec<String>>),
    Placeholder { message: String, colspan: u16 },
}

pub fn user_cells(user: &User) -> Vec<String> {
    vec![
        user.id.to_string(),
        user.username.clone(),
        user.email.clone(),
        user.display_name(),
        user.role.to_string(),
        if user.is_active { "Active" } else { "Inactive" }.to_string(),
        format_date(user.created_at.as_deref()),
        "delete".to_string(),
    ]
}

pub fn course_cells(course: &Course) -> Vec<String> {
    vec![
        course.id.to_string(),
        course.title.clone(),
        course
            .description
            .clone()
            .unwrap_or_else(|| "No description".to_string()),
        course
            .instructor_name
            .clone()
            .unwrap_or_else(|| "Unassigned".to_string()),
        format_date(course.created_at.as_deref()),
        "delete".to_string(),
    ]
}

pub fn users_body(users: &[User]) -> TableBody {
    if users.is_empty() {
        TableBody::Placeholder {
            message: "No users found".to_string(),
            colspan: USERS_TABLE_COLUMNS,
        }
    } else {
        TableBody::Rows(users.iter().map(user_cells).collect())
    }
}

pub fn courses_body(courses: &[Course]) -> TableBody {
    if courses.is_empty() {
        TableBody::Placeholder {
            message: "No courses found".to_string(),
            colspan: COURSES_TABLE_COLUMNS,
        }
    } else {
        TableBody::Rows(courses.iter().map(course_cells).collect())
    }
}

/// Body for the active tab. Until its first fetch completes, a list shows a
/// loading placeholder instead of an empty table.
pub fn active_body(state: &DashboardState) -> TableBody {
    match state.active_tab() {
        Tab::Users => {
            let table = state.users();
            if !table.is_loaded() {
                TableBody::Placeholder {
                    message: "Loading users...".to_string(),
                    colspan: USERS_TABLE_COLUMNS,
                }
            } else {
                users_body(table.rows())
            }
        }
        Tab::Courses => {
            let table = state.courses();
            if !table.is_loaded() {
                TableBody::Placeholder {
                    message: "Loading courses...".to_string(),
                    colspan: COURSES_TABLE_COLUMNS,
                }
            } else {
                courses_body(table.rows())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Role;

    fn user() -> User {
        User {
            id: 4,
            username: "jdoe".to_string(),
            email: "jdoe@example.edu".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            role: Role::Instructor,
            is_active: false,
            created_at: Some("2024-03-01T10:30:00".to_string()),
        }
    }

    #[test]
    fn user_cells_cover_every_column() {
        let cells = user_cells(&user());
        assert_eq!(cells.len(), USERS_HEADER.len());
        assert_eq!(cells[3], "Jo Doe");
        assert_eq!(cells[4], "instructor");
        assert_eq!(cells[5], "Inactive");
        assert_eq!(cells[6], "2024-03-01 10:30");
    }

    #[test]
    fn course_cells_fall_back_for_missing_fields() {
        let course = Course {
            id: 1,
            title: "Databases".to_string(),
            description: None,
            instructor_name: None,
            created_at: None,
        };
        let cells = course_cells(&course);
        assert_eq!(cells.len(), COURSES_HEADER.len());
        assert_eq!(cells[2], "No description");
        assert_eq!(cells[3], "Unassigned");
        assert_eq!(cells[4], "N/A");
    }

    #[test]
    fn empty_lists_get_full_width_placeholders() {
        match users_body(&[]) {
            TableBody::Placeholder { message, colspan } => {
                assert_eq!(message, "No users found");
                assert_eq!(colspan, 8);
            }
            other => panic!("unexpected body: {:?}", other),
        }
        match courses_body(&[]) {
            TableBody::Placeholder { message, colspan } => {
                assert_eq!(message, "No courses found");
                assert_eq!(colspan, 6);
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn nonempty_list_produces_rows() {
        match users_body(&[user()]) {
            TableBody::Rows(rows) => assert_eq!(rows.len(), 1),
            other => panic!("unexpected body: {:?}", other),
        }
    }
}
