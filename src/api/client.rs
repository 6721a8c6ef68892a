//! Course-management API client
//!
//! A JSON client for the dashboard backend, covering the health probe, the
//! summary statistics, and the users/courses CRUD surface.

use crate::api::DashboardApi;
use crate::api::error::ApiError;
use crate::api::types::{
    Course, CourseListResponse, HealthResponse, HealthStatus, MutationResponse, NewCourse, NewUser,
    Stats, StatsResponse, User, UserListResponse,
};
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("classdeck/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Decode the JSON envelope. The backend signals application failures in
    /// the body, so the body is decoded even for non-2xx responses; a non-2xx
    /// body that is not an envelope becomes an HTTP error.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let bytes = response.bytes().await?;
        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => Ok(value),
            Err(err) if status.is_success() => Err(ApiError::Decode(err)),
            Err(_) => Err(ApiError::Http {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&bytes).into_owned(),
            }),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .delete(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;
        Self::decode(response).await
    }

    fn unwrap_mutation(response: MutationResponse) -> Result<(), ApiError> {
        if response.success {
            Ok(())
        } else {
            Err(ApiError::from_envelope(response.error))
        }
    }
}

#[async_trait::async_trait]
impl DashboardApi for ApiClient {
    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response: HealthResponse = self.get_json("health").await?;
        if response.status == "healthy" {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Unhealthy(response.status))
        }
    }

    async fn stats(&self) -> Result<Stats, ApiError> {
        let response: StatsResponse = self.get_json("api/stats").await?;
        if !response.success {
            return Err(ApiError::from_envelope(response.error));
        }
        response
            .stats
            .ok_or_else(|| ApiError::Backend("Stats missing from response".to_string()))
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        let response: UserListResponse = self.get_json("api/users").await?;
        if response.success {
            Ok(response.users)
        } else {
            Err(ApiError::from_envelope(response.error))
        }
    }

    async fn create_user(&self, user: NewUser) -> Result<(), ApiError> {
        let response: MutationResponse = self.post_json("api/users", &user).await?;
        Self::unwrap_mutation(response)
    }

    async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let response: MutationResponse =
            self.delete_json(&format!("api/users/{}", id)).await?;
        Self::unwrap_mutation(response)
    }

    async fn courses(&self) -> Result<Vec<Course>, ApiError> {
        let response: CourseListResponse = self.get_json("api/courses").await?;
        if response.success {
            Ok(response.courses)
        } else {
            Err(ApiError::from_envelope(response.error))
        }
    }

    async fn create_course(&self, course: NewCourse) -> Result<(), ApiError> {
        let response: MutationResponse = self.post_json("api/courses", &course).await?;
        Self::unwrap_mutation(response)
    }

    async fn delete_course(&self, id: i64) -> Result<(), ApiError> {
        let response: MutationResponse =
            self.delete_json(&format!("api/courses/{}", id)).await?;
        Self::unwrap_mutation(response)
    }
}

#[cfg(test)]
/// These are ignored by default since they require a live backend to run.
mod live_backend_tests {
    use super::*;

    #[tokio::test]
    #[ignore] // This test requires a live backend instance.
    async fn test_health() {
        let client = ApiClient::new(Environment::Local);
        match client.health().await {
            Ok(status) => println!("Health: {:?}", status),
            Err(e) => panic!("Health probe failed: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live backend instance.
    async fn test_list_users() {
        let client = ApiClient::new(Environment::Local);
        match client.users().await {
            Ok(users) => println!("Got {} users", users.len()),
            Err(e) => panic!("Failed to list users: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live backend instance.
    async fn test_stats() {
        let client = ApiClient::new(Environment::Local);
        match client.stats().await {
            Ok(stats) => println!("Stats: {:?}", stats),
            Err(e) => panic!("Failed to fetch stats: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_without_duplicate_slashes() {
        let client = ApiClient::new(Environment::Custom {
            api_base_url: "http://localhost:5000/".to_string(),
        });
        assert_eq!(
            client.build_url("/api/users"),
            "http://localhost:5000/api/users"
        );
        assert_eq!(client.build_url("health"), "http://localhost:5000/health");
    }

    #[test]
    fn exposes_its_environment() {
        let client = ApiClient::new(Environment::Local);
        assert_eq!(client.environment(), &Environment::Local);
        assert_eq!(client.environment().api_base_url(), "http://localhost:5000");
    }

    #[test]
    fn unwrap_mutation_maps_failure_to_backend_error() {
        let failure = MutationResponse {
            success: false,
            error: Some("Title required".to_string()),
        };
        let err = ApiClient::unwrap_mutation(failure).unwrap_err();
        assert_eq!(err.to_string(), "Title required");

        let ok = MutationResponse {
            success: true,
            error: None,
        };
        assert!(ApiClient::unwrap_mutation(ok).is_ok());
    }

    #[test]
    fn decodes_stats_envelope() {
        let json = r#"{"success":true,"stats":{"users":4,"courses":2,"exams":1,"enrollments":9}}"#;
        let response: StatsResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.stats.unwrap().enrollments, 9);
    }

    #[test]
    fn decodes_user_list_envelope_failure() {
        let json = r#"{"success":false,"error":"ORA-12541: no listener"}"#;
        let response: UserListResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert!(response.users.is_empty());
        assert_eq!(response.error.as_deref(), Some("ORA-12541: no listener"));
    }

    #[tokio::test]
    async fn unsupported_scheme_is_a_transport_error() {
        let client = ApiClient::new(Environment::Custom {
            api_base_url: "foo://nowhere".to_string(),
        });
        let err = client.users().await.unwrap_err();
        assert!(err.is_transport());
    }
}
