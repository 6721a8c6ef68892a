//! Read-side workers.
//!
//! Each fetcher performs one backend read and reports the outcome as an
//! event. List fetches carry the fetch generation they were issued under so
//! the state can discard responses that a later fetch has superseded.

use crate::api::DashboardApi;
use crate::api::types::HealthStatus;
use crate::events::{ConnectionStatus, Event, EventType, Payload, Tab, Worker};
use crate::logging::{LogLevel, classify_api_error};
use crate::workers::core::EventSender;
use std::sync::Arc;

/// One-shot health probe issued at startup.
pub async fn probe_health(api: Arc<dyn DashboardApi>, events: EventSender) {
    match api.health().await {
        Ok(HealthStatus::Healthy) => {
            events
                .send(Event::with_payload(
                    Worker::HealthProbe,
                    "Connected to backend".to_string(),
                    EventType::Success,
                    LogLevel::Info,
                    Payload::Health(ConnectionStatus::Connected),
                ))
                .await;
        }
        Ok(HealthStatus::Unhealthy(status)) => {
            events
                .send(Event::with_payload(
                    Worker::HealthProbe,
                    format!("Backend unhealthy: {}", status),
                    EventType::Error,
                    LogLevel::Warn,
                    Payload::Health(ConnectionStatus::Unhealthy),
                ))
                .await;
        }
        Err(e) => {
            events
                .send(Event::with_payload(
                    Worker::HealthProbe,
                    format!("Connection error: {}", e),
                    EventType::Error,
                    classify_api_error(&e),
                    Payload::Health(ConnectionStatus::Unreachable),
                ))
                .await;
        }
    }
}

/// Refresh the summary statistics.
pub async fn fetch_stats(api: Arc<dyn DashboardApi>, events: EventSender) {
    match api.stats().await {
        Ok(stats) => {
            events
                .send(Event::with_payload(
                    Worker::StatsFetcher,
                    "Stats refreshed".to_string(),
                    EventType::Refresh,
                    LogLevel::Debug,
                    Payload::Stats(stats),
                ))
                .await;
        }
        Err(e) => {
            events
                .send(Event::new(
                    Worker::StatsFetcher,
                    format!("Error loading stats: {}", e),
                    EventType::Error,
                    classify_api_error(&e),
                ))
                .await;
        }
    }
}

/// Refresh one list view. `seq` is the fetch generation allocated when the
/// fetch was requested; it travels with the payload unchanged.
pub async fn fetch_list(api: Arc<dyn DashboardApi>, tab: Tab, seq: u64, events: EventSender) {
    let worker = Worker::ListFetcher(tab);
    match tab {
        Tab::Users => match api.users().await {
            Ok(users) => {
                events
                    .send(Event::with_payload(
                        worker,
                        format!("{} refreshed", tab),
                        EventType::Refresh,
                        LogLevel::Debug,
                        Payload::Users { seq, users },
                    ))
                    .await;
            }
            Err(e) => {
                events
                    .send(Event::new(
                        worker,
                        "Error loading users".to_string(),
                        EventType::Error,
                        classify_api_error(&e),
                    ))
                    .await;
            }
        },
        Tab::Courses => match api.courses().await {
            Ok(courses) => {
                events
                    .send(Event::with_payload(
                        worker,
                        format!("{} refreshed", tab),
                        EventType::Refresh,
                        LogLevel::Debug,
                        Payload::Courses { seq, courses },
                    ))
                    .await;
            }
            Err(e) => {
                events
                    .send(Event::new(
                        worker,
                        "Error loading courses".to_string(),
                        EventType::Error,
                        classify_api_error(&e),
                    ))
                    .await;
            }
        },
    }
}

/// Load the instructor choices for the course form. The users list is
/// filtered down to roles that may own a course.
pub async fn load_instructors(api: Arc<dyn DashboardApi>, events: EventSender) {
    match api.users().await {
        Ok(users) => {
            let instructors: Vec<_> = users.into_iter().filter(|u| u.can_instruct()).collect();
            events
                .send(Event::with_payload(
                    Worker::FormLoader,
                    "Instructors loaded".to_string(),
                    EventType::Refresh,
                    LogLevel::Debug,
                    Payload::Instructors(instructors),
                ))
                .await;
        }
        Err(e) => {
            events
                .send(Event::new(
                    Worker::FormLoader,
                    "Error loading instructors".to_string(),
                    EventType::Error,
                    classify_api_error(&e),
                ))
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDashboardApi;
    use crate::api::error::ApiError;
    use crate::api::types::{Role, User};
    use tokio::sync::mpsc;

    fn channel() -> (EventSender, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(16);
        (EventSender::new(tx), rx)
    }

    fn user(id: i64, role: Role) -> User {
        User {
            id,
            username: format!("user{}", id),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role,
            is_active: true,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn probe_reports_unreachable_on_backend_failure() {
        let mut api = MockDashboardApi::new();
        api.expect_health()
            .returning(|| Err(ApiError::Backend("boom".to_string())));
        let (events, mut rx) = channel();

        probe_health(Arc::new(api), events).await;

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(
            event.payload,
            Some(Payload::Health(ConnectionStatus::Unreachable))
        );
    }

    #[tokio::test]
    async fn probe_distinguishes_unhealthy_from_unreachable() {
        let mut api = MockDashboardApi::new();
        api.expect_health()
            .returning(|| Ok(HealthStatus::Unhealthy("degraded".to_string())));
        let (events, mut rx) = channel();

        probe_health(Arc::new(api), events).await;

        let event = rx.recv().await.unwrap();
        assert_eq!(event.msg, "Backend unhealthy: degraded");
        assert_eq!(
            event.payload,
            Some(Payload::Health(ConnectionStatus::Unhealthy))
        );
    }

    #[tokio::test]
    async fn list_fetch_carries_its_generation() {
        let mut api = MockDashboardApi::new();
        api.expect_users()
            .returning(|| Ok(vec![user(1, Role::Student)]));
        let (events, mut rx) = channel();

        fetch_list(Arc::new(api), Tab::Users, 42, events).await;

        let event = rx.recv().await.unwrap();
        match event.payload {
            Some(Payload::Users { seq, users }) => {
                assert_eq!(seq, 42);
                assert_eq!(users.len(), 1);
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[tokio::test]
    async fn instructor_load_filters_out_students() {
        let mut api = MockDashboardApi::new();
        api.expect_users().returning(|| {
            Ok(vec![
                user(1, Role::Student),
                user(2, Role::Instructor),
                user(3, Role::Admin),
            ])
        });
        let (events, mut rx) = channel();

        load_instructors(Arc::new(api), events).await;

        let event = rx.recv().await.unwrap();
        match event.payload {
            Some(Payload::Instructors(instructors)) => {
                let ids: Vec<_> = instructors.iter().map(|u| u.id).collect();
                assert_eq!(ids, vec![2, 3]);
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[tokio::test]
    async fn stats_failure_has_no_payload() {
        let mut api = MockDashboardApi::new();
        api.expect_stats()
            .returning(|| Err(ApiError::Backend("db down".to_string())));
        let (events, mut rx) = channel();

        fetch_stats(Arc::new(api), events).await;

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.msg, "Error loading stats: db down");
        assert!(event.payload.is_none());
    }
}
