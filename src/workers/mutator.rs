//! Write-side workers.
//!
//! Mutations never patch local state. A successful create or delete reports a
//! `Created`/`Deleted` payload and the UI loop re-fetches the affected list
//! and the stats, so the tables always reflect what the backend stored.

use crate::api::DashboardApi;
use crate::api::error::ApiError;
use crate::api::types::{NewCourse, NewUser};
use crate::events::{Event, EventType, Payload, Tab, Worker};
use crate::logging::{LogLevel, classify_api_error};
use crate::workers::core::EventSender;
use std::sync::Arc;

#[derive(Copy, Clone)]
enum Op {
    Create,
    Delete,
}

async fn report(events: EventSender, result: Result<(), ApiError>, tab: Tab, op: Op) {
    let entity = match tab {
        Tab::Users => "User",
        Tab::Courses => "Course",
    };
    match result {
        Ok(()) => {
            let (msg, payload) = match op {
                Op::Create => (
                    format!("{} created successfully!", entity),
                    Payload::Created(tab),
                ),
                Op::Delete => (
                    format!("{} deleted successfully!", entity),
                    Payload::Deleted(tab),
                ),
            };
            events
                .send(Event::with_payload(
                    Worker::Mutator,
                    msg,
                    EventType::Success,
                    LogLevel::Info,
                    payload,
                ))
                .await;
        }
        Err(e) => {
            // Backend validation text is shown verbatim; transport and HTTP
            // failures collapse to a generic message.
            let msg = match &e {
                ApiError::Backend(reason) => format!("Error: {}", reason),
                _ => match op {
                    Op::Create => format!("Error creating {}", entity.to_lowercase()),
                    Op::Delete => format!("Error deleting {}", entity.to_lowercase()),
                },
            };
            events
                .send(Event::new(
                    Worker::Mutator,
                    msg,
                    EventType::Error,
                    classify_api_error(&e),
                ))
                .await;
        }
    }
}

pub async fn create_user(api: Arc<dyn DashboardApi>, user: NewUser, events: EventSender) {
    let result = api.create_user(user).await;
    report(events, result, Tab::Users, Op::Create).await;
}

pub async fn delete_user(api: Arc<dyn DashboardApi>, id: i64, events: EventSender) {
    let result = api.delete_user(id).await;
    report(events, result, Tab::Users, Op::Delete).await;
}

pub async fn create_course(api: Arc<dyn DashboardApi>, course: NewCourse, events: EventSender) {
    let result = api.create_course(course).await;
    report(events, result, Tab::Courses, Op::Create).await;
}

pub async fn delete_course(api: Arc<dyn DashboardApi>, id: i64, events: EventSender) {
    let result = api.delete_course(id).await;
    report(events, result, Tab::Courses, Op::Delete).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDashboardApi;
    use crate::api::types::Role;
    use tokio::sync::mpsc;

    fn channel() -> (EventSender, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(16);
        (EventSender::new(tx), rx)
    }

    fn new_user() -> NewUser {
        NewUser {
            username: "jdoe".to_string(),
            email: "jdoe@example.edu".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            role: Role::Student,
        }
    }

    #[tokio::test]
    async fn successful_create_reports_created_payload() {
        let mut api = MockDashboardApi::new();
        api.expect_create_user().returning(|_| Ok(()));
        let (events, mut rx) = channel();

        create_user(Arc::new(api), new_user(), events).await;

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type, EventType::Success);
        assert_eq!(event.msg, "User created successfully!");
        assert_eq!(event.payload, Some(Payload::Created(Tab::Users)));
    }

    #[tokio::test]
    async fn backend_validation_text_surfaces_verbatim() {
        let mut api = MockDashboardApi::new();
        api.expect_create_course()
            .returning(|_| Err(ApiError::Backend("Title required".to_string())));
        let (events, mut rx) = channel();

        let course = NewCourse {
            title: String::new(),
            description: String::new(),
            instructor_id: 2,
        };
        create_course(Arc::new(api), course, events).await;

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.msg, "Error: Title required");
        assert!(event.payload.is_none());
    }

    #[tokio::test]
    async fn non_backend_delete_failure_uses_generic_message() {
        let mut api = MockDashboardApi::new();
        api.expect_delete_course().returning(|_| {
            Err(ApiError::Http {
                status: 502,
                message: "bad gateway".to_string(),
            })
        });
        let (events, mut rx) = channel();

        delete_course(Arc::new(api), 9, events).await;

        let event = rx.recv().await.unwrap();
        assert_eq!(event.msg, "Error deleting course");
        assert!(event.payload.is_none());
    }

    #[tokio::test]
    async fn successful_delete_reports_deleted_payload() {
        let mut api = MockDashboardApi::new();
        api.expect_delete_user().returning(|_| Ok(()));
        let (events, mut rx) = channel();

        delete_user(Arc::new(api), 5, events).await;

        let event = rx.recv().await.unwrap();
        assert_eq!(event.msg, "User deleted successfully!");
        assert_eq!(event.payload, Some(Payload::Deleted(Tab::Users)));
    }
}
