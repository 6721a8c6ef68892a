//! Worker dispatch.
//!
//! The dispatcher owns the shared API handle and spawns one task per backend
//! operation. Workers report back over the event channel returned by
//! [`start`]; the UI loop drains it each frame.

use crate::api::DashboardApi;
use crate::api::types::{NewCourse, NewUser};
use crate::consts::dashboard::EVENT_QUEUE_SIZE;
use crate::events::{Event, Tab};
use crate::workers::core::EventSender;
use crate::workers::{fetcher, mutator};
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn DashboardApi>,
    events: EventSender,
}

/// Create the event channel and the dispatcher bound to it.
pub fn start(api: Arc<dyn DashboardApi>) -> (Dispatcher, mpsc::Receiver<Event>) {
    let (tx, rx) = mpsc::channel(EVENT_QUEUE_SIZE);
    let dispatcher = Dispatcher {
        api,
        events: EventSender::new(tx),
    };
    (dispatcher, rx)
}

impl Dispatcher {
    pub fn probe_health(&self) {
        tokio::spawn(fetcher::probe_health(self.api.clone(), self.events.clone()));
    }

    pub fn fetch_stats(&self) {
        tokio::spawn(fetcher::fetch_stats(self.api.clone(), self.events.clone()));
    }

    pub fn fetch_list(&self, tab: Tab, seq: u64) {
        tokio::spawn(fetcher::fetch_list(
            self.api.clone(),
            tab,
            seq,
            self.events.clone(),
        ));
    }

    pub fn load_instructors(&self) {
        tokio::spawn(fetcher::load_instructors(
            self.api.clone(),
            self.events.clone(),
        ));
    }

    pub fn create_user(&self, user: NewUser) {
        tokio::spawn(mutator::create_user(
            self.api.clone(),
            user,
            self.events.clone(),
        ));
    }

    pub fn delete_user(&self, id: i64) {
        tokio::spawn(mutator::delete_user(
            self.api.clone(),
            id,
            self.events.clone(),
        ));
    }

    pub fn create_course(&self, course: NewCourse) {
        tokio::spawn(mutator::create_course(
            self.api.clone(),
            course,
            self.events.clone(),
        ));
    }

    pub fn delete_course(&self, id: i64) {
        tokio::spawn(mutator::delete_course(
            self.api.clone(),
            id,
            self.events.clone(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDashboardApi;
    use crate::events::{EventType, Payload};

    #[tokio::test]
    async fn dispatched_fetch_lands_on_the_channel() {
        let mut api = MockDashboardApi::new();
        api.expect_users().returning(|| Ok(vec![]));
        let (dispatcher, mut rx) = start(Arc::new(api));

        dispatcher.fetch_list(Tab::Users, 1);

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type, EventType::Refresh);
        assert!(matches!(event.payload, Some(Payload::Users { seq: 1, .. })));
    }
}
