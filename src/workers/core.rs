//! Shared plumbing for background workers.

use crate::events::Event;
use tokio::sync::mpsc;

/// Cloneable handle workers use to report events back to the UI loop.
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send an event to the UI loop. A closed channel means the UI is
    /// shutting down, so the event is silently dropped.
    pub async fn send(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }
}
