//! The per-frame update pass.
//!
//! Applies queued worker events to the dashboard state and expires the toast.
//! This is the only place worker results become visible data.

use crate::consts::dashboard::toast_duration;
use crate::events::{Event, EventType, Payload, Tab, Worker};
use crate::ui::dashboard::state::{DashboardState, FetchRequest, Modal, ToastKind};

impl DashboardState {
    /// Apply everything queued since the last frame.
    pub fn update(&mut self) {
        self.bump_tick();
        while let Some(event) = self.next_pending_event() {
            self.add_to_activity_log(event.clone());
            self.process_event(event);
        }
        self.expire_toast();
    }

    fn process_event(&mut self, event: Event) {
        let Some(payload) = event.payload else {
            // Failures from the list fetchers and mutators are the ones the
            // user acted on or is looking at, so those surface as a toast.
            if event.event_type == EventType::Error
                && matches!(event.worker, Worker::ListFetcher(_) | Worker::Mutator)
            {
                self.show_toast(event.msg, ToastKind::Error);
            }
            return;
        };
        match payload {
            Payload::Health(status) => self.set_connection(status),
            Payload::Stats(stats) => self.set_stats(stats),
            Payload::Users { seq, users } => {
                self.users_mut().apply(seq, users);
            }
            Payload::Courses { seq, courses } => {
                self.courses_mut().apply(seq, courses);
            }
            Payload::Instructors(instructors) => {
                // Only meaningful while the course form is open.
                if let Modal::CourseForm(form) = self.modal_mut() {
                    form.set_instructors(instructors);
                }
            }
            Payload::Created(tab) => {
                self.show_toast(event.msg, ToastKind::Success);
                self.close_modal();
                self.refetch_after_mutation(tab);
            }
            Payload::Deleted(tab) => {
                self.show_toast(event.msg, ToastKind::Success);
                self.refetch_after_mutation(tab);
            }
        }
    }

    /// A mutation succeeded on the backend. The local tables are never
    /// patched; the affected list and the stats are fetched again instead.
    fn refetch_after_mutation(&mut self, tab: Tab) {
        self.request_fetch(FetchRequest::List(tab));
        self.request_fetch(FetchRequest::Stats);
    }

    fn expire_toast(&mut self) {
        if let Some(toast) = self.toast() {
            if toast.shown_at.elapsed() >= toast_duration() {
                self.clear_toast();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Role, Stats, User};
    use crate::environment::Environment;
    use crate::events::ConnectionStatus;
    use crate::logging::LogLevel;
    use std::time::Duration;

    fn state() -> DashboardState {
        DashboardState::new(Environment::Local)
    }

    fn user(id: i64, username: &str) -> User {
        User {
            id,
            username: username.to_string(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role: Role::Instructor,
            is_active: true,
            created_at: None,
        }
    }

    fn users_event(seq: u64, users: Vec<User>) -> Event {
        Event::with_payload(
            Worker::ListFetcher(Tab::Users),
            "Users refreshed".to_string(),
            EventType::Refresh,
            LogLevel::Debug,
            Payload::Users { seq, users },
        )
    }

    #[test]
    fn stale_list_event_does_not_overwrite_newer_data() {
        let mut state = state();
        let first = state.begin_list_fetch(Tab::Users);
        let second = state.begin_list_fetch(Tab::Users);

        state.add_event(users_event(second, vec![user(2, "new")]));
        state.update();
        assert_eq!(state.users().rows()[0].username, "new");

        state.add_event(users_event(first, vec![user(1, "old")]));
        state.update();
        assert_eq!(state.users().rows()[0].username, "new");
    }

    #[test]
    fn health_and_stats_payloads_land_in_state() {
        let mut state = state();
        state.add_event(Event::with_payload(
            Worker::HealthProbe,
            "Connected to backend".to_string(),
            EventType::Success,
            LogLevel::Info,
            Payload::Health(ConnectionStatus::Connected),
        ));
        state.add_event(Event::with_payload(
            Worker::StatsFetcher,
            "Stats refreshed".to_string(),
            EventType::Refresh,
            LogLevel::Debug,
            Payload::Stats(Stats {
                users: 3,
                courses: 1,
                exams: 0,
                enrollments: 7,
            }),
        ));
        state.update();
        assert_eq!(state.connection(), ConnectionStatus::Connected);
        assert_eq!(state.stats().unwrap().enrollments, 7);
        assert_eq!(state.activity_logs().len(), 2);
    }

    #[test]
    fn successful_create_closes_the_form_and_refetches() {
        let mut state = state();
        state.open_user_form();
        state.take_pending_fetches();

        state.add_event(Event::with_payload(
            Worker::Mutator,
            "User created successfully!".to_string(),
            EventType::Success,
            LogLevel::Info,
            Payload::Created(Tab::Users),
        ));
        state.update();

        assert!(matches!(state.modal(), Modal::None));
        assert_eq!(state.toast().unwrap().kind, ToastKind::Success);
        let fetches = state.take_pending_fetches();
        assert!(fetches.contains(&FetchRequest::List(Tab::Users)));
        assert!(fetches.contains(&FetchRequest::Stats));
    }

    #[test]
    fn backend_rejection_keeps_the_form_open() {
        let mut state = state();
        state.open_course_form();

        state.add_event(Event::new(
            Worker::Mutator,
            "Error: Title required".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
        state.update();

        assert!(matches!(state.modal(), Modal::CourseForm(_)));
        let toast = state.toast().unwrap();
        assert_eq!(toast.message, "Error: Title required");
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn instructors_payload_feeds_the_open_course_form() {
        let mut state = state();
        state.open_course_form();
        state.add_event(Event::with_payload(
            Worker::FormLoader,
            "Instructors loaded".to_string(),
            EventType::Refresh,
            LogLevel::Debug,
            Payload::Instructors(vec![user(2, "prof")]),
        ));
        state.update();

        match state.modal() {
            Modal::CourseForm(form) => assert_eq!(form.instructors().len(), 1),
            other => panic!("unexpected modal: {:?}", std::mem::discriminant(other)),
        }
    }

    #[test]
    fn a_new_toast_replaces_the_old_one_and_expires() {
        let mut state = state();
        state.show_toast("first".to_string(), ToastKind::Info);
        state.show_toast("second".to_string(), ToastKind::Success);
        assert_eq!(state.toast().unwrap().message, "second");

        state.backdate_toast(Duration::from_millis(3100));
        state.update();
        assert!(state.toast().is_none());
    }

    #[test]
    fn update_advances_the_animation_tick() {
        let mut state = state();
        assert_eq!(state.tick(), 0);
        state.update();
        state.update();
        assert_eq!(state.tick(), 2);
    }

    #[test]
    fn stats_fetch_failures_do_not_toast() {
        let mut state = state();
        state.add_event(Event::new(
            Worker::StatsFetcher,
            "Error loading stats: timeout".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
        state.update();
        assert!(state.toast().is_none());
        assert_eq!(state.activity_logs().len(), 1);
    }
}
