//! Modal form state.
//!
//! Forms hold their own field values and focus; submission validates locally
//! and produces a creation payload, or a message for the user when a required
//! field is missing.

use crate::api::types::{NewCourse, NewUser, Role, User};
use crossterm::event::{KeyCode, KeyEvent};

/// Role choices offered by the user form, in cycling order.
pub const ROLE_CHOICES: [Role; 3] = [Role::Student, Role::Instructor, Role::Admin];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Username,
    Email,
    FirstName,
    LastName,
    Role,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    role_idx: usize,
    focus: Option<UserField>,
}

impl UserForm {
    pub fn new() -> Self {
        Self {
            focus: Some(UserField::Username),
            ..Self::default()
        }
    }

    pub fn focus(&self) -> UserField {
        self.focus.unwrap_or(UserField::Username)
    }

    pub fn role(&self) -> Role {
        ROLE_CHOICES[self.role_idx]
    }

    fn focus_next(&mut self) {
        self.focus = Some(match self.focus() {
            UserField::Username => UserField::Email,
            UserField::Email => UserField::FirstName,
            UserField::FirstName => UserField::LastName,
            UserField::LastName => UserField::Role,
            UserField::Role => UserField::Username,
        });
    }

    fn focus_previous(&mut self) {
        self.focus = Some(match self.focus() {
            UserField::Username => UserField::Role,
            UserField::Email => UserField::Username,
            UserField::FirstName => UserField::Email,
            UserField::LastName => UserField::FirstName,
            UserField::Role => UserField::LastName,
        });
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus() {
            UserField::Username => Some(&mut self.username),
            UserField::Email => Some(&mut self.email),
            UserField::FirstName => Some(&mut self.first_name),
            UserField::LastName => Some(&mut self.last_name),
            UserField::Role => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Left if self.focus() == UserField::Role => {
                self.role_idx = (self.role_idx + ROLE_CHOICES.len() - 1) % ROLE_CHOICES.len();
            }
            KeyCode::Right if self.focus() == UserField::Role => {
                self.role_idx = (self.role_idx + 1) % ROLE_CHOICES.len();
            }
            KeyCode::Char(' ') if self.focus() == UserField::Role => {
                self.role_idx = (self.role_idx + 1) % ROLE_CHOICES.len();
            }
            KeyCode::Backspace => {
                if let Some(text) = self.focused_text() {
                    text.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(text) = self.focused_text() {
                    text.push(c);
                }
            }
            _ => {}
        }
    }

    pub fn submit(&self) -> Result<NewUser, String> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err("Username is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".to_string());
        }
        Ok(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            role: self.role(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Title,
    Description,
    Instructor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseForm {
    pub title: String,
    pub description: String,
    instructors: Vec<User>,
    instructor_idx: Option<usize>,
    focus: CourseField,
}

impl Default for CourseForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            instructors: Vec::new(),
            instructor_idx: None,
            focus: CourseField::Title,
        }
    }
}

impl CourseForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> CourseField {
        self.focus
    }

    pub fn instructors(&self) -> &[User] {
        &self.instructors
    }

    /// Install the loaded instructor choices, keeping any selection in range.
    pub fn set_instructors(&mut self, instructors: Vec<User>) {
        self.instructors = instructors;
        if let Some(idx) = self.instructor_idx {
            if self.instructors.is_empty() {
                self.instructor_idx = None;
            } else if idx >= self.instructors.len() {
                self.instructor_idx = Some(self.instructors.len() - 1);
            }
        }
    }

    pub fn selected_instructor(&self) -> Option<&User> {
        self.instructor_idx.and_then(|idx| self.instructors.get(idx))
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            CourseField::Title => CourseField::Description,
            CourseField::Description => CourseField::Instructor,
            CourseField::Instructor => CourseField::Title,
        };
    }

    fn focus_previous(&mut self) {
        self.focus = match self.focus {
            CourseField::Title => CourseField::Instructor,
            CourseField::Description => CourseField::Title,
            CourseField::Instructor => CourseField::Description,
        };
    }

    fn select_next_instructor(&mut self) {
        if self.instructors.is_empty() {
            return;
        }
        self.instructor_idx = Some(match self.instructor_idx {
            None => 0,
            Some(idx) => (idx + 1).min(self.instructors.len() - 1),
        });
    }

    fn select_previous_instructor(&mut self) {
        self.instructor_idx = match self.instructor_idx {
            None | Some(0) => None,
            Some(idx) => Some(idx - 1),
        };
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            CourseField::Title => Some(&mut self.title),
            CourseField::Description => Some(&mut self.description),
            CourseField::Instructor => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Right if self.focus == CourseField::Instructor => {
                self.select_next_instructor();
            }
            KeyCode::Left if self.focus == CourseField::Instructor => {
                self.select_previous_instructor();
            }
            KeyCode::Char(' ') if self.focus == CourseField::Instructor => {
                self.select_next_instructor();
            }
            KeyCode::Backspace => {
                if let Some(text) = self.focused_text() {
                    text.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(text) = self.focused_text() {
                    text.push(c);
                }
            }
            _ => {}
        }
    }

    /// Validate and build the creation payload. A course is never submitted
    /// without a concrete instructor id.
    pub fn submit(&self) -> Result<NewCourse, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }
        let instructor = self
            .selected_instructor()
            .ok_or_else(|| "Instructor is required".to_string())?;
        Ok(NewCourse {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            instructor_id: instructor.id,
        })
    }
}
