use crate::api::error::ApiError;
use crate::api::types::{Course, HealthStatus, NewCourse, NewUser, Stats, User};

pub(crate) mod client;
pub mod error;
pub mod types;
pub use client::ApiClient;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    /// Probe the backend health endpoint.
    async fn health(&self) -> Result<HealthStatus, ApiError>;

    /// Fetch the summary statistics.
    async fn stats(&self) -> Result<Stats, ApiError>;

    /// Fetch the full users list.
    async fn users(&self) -> Result<Vec<User>, ApiError>;

    /// Create a new user.
    async fn create_user(&self, user: NewUser) -> Result<(), ApiError>;

    /// Delete a user by id.
    async fn delete_user(&self, id: i64) -> Result<(), ApiError>;

    /// Fetch the full courses list.
    async fn courses(&self) -> Result<Vec<Course>, ApiError>;

    /// Create a new course.
    async fn create_course(&self, course: NewCourse) -> Result<(), ApiError>;

    /// Delete a course by id.
    async fn delete_course(&self, id: i64) -> Result<(), ApiError>;
}
