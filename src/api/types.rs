//! Wire types for the course-management backend.

use serde::{Deserialize, Serialize};

/// Summary counts shown in the stats cards. Replaced wholesale on every
/// successful stats fetch, never merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Stats {
    pub users: u64,
    pub courses: u64,
    pub exams: u64,
    pub enrollments: u64,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Instructor,
    Student,
    /// Roles this client does not know about yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: Role,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Whether this user may be assigned as a course instructor.
    pub fn can_instruct(&self) -> bool {
        matches!(self.role, Role::Instructor | Role::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Resolved name of the assigned instructor, if any.
    #[serde(default)]
    pub instructor_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Creation payload for `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Creation payload for `POST /api/courses`. `instructor_id` is always a
/// concrete id; the form rejects submission without a selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub instructor_id: i64,
}

/// Outcome of the health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    /// The backend answered with a status other than "healthy".
    Unhealthy(String),
}

// Response envelopes. The backend wraps every payload in a `success` flag and
// reports application failures through an `error` string.

#[derive(Debug, Deserialize)]
pub(crate) struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatsResponse {
    pub success: bool,
    #[serde(default)]
    pub stats: Option<Stats>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserListResponse {
    pub success: bool,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CourseListResponse {
    pub success: bool,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}
