//! # Notification Emitter
//!
//! Short-lived operator-facing messages in reaction to ledger/catalog
//! mutations. The emitter holds **at most one** active message: a newer
//! publish replaces the current one and restarts the expiry clock, so this
//! is a display debounce, not a log; no history is retained.
//!
//! Expiry is an explicit scheduled cancellation: each publish overwrites the
//! single pending deadline, which is exactly "cancel the old timer, schedule
//! mine". A message therefore always lives for the full window from its
//! *own* publish, never from a predecessor's.
//!
//! The emitter runs as its own actor; mutators publish into its mailbox, so
//! display order matches emission order.

use std::fmt::Display;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;
use tracing::{debug, info};

/// How long a published message stays visible unless superseded.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Something worth telling the operator about, produced by ledger/catalog
/// mutations. Rendering to text lives here so the emitting components never
/// deal in display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    /// An order reached `Completed`. Carries the short order reference.
    Completion { order_ref: String },
    /// A free-text note went out to the rider.
    SignalSent { message: String },
    /// An item was marked out of stock and is now blocked for new orders.
    StockBlocked,
}

impl Display for NotificationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationEvent::Completion { order_ref } => {
                write!(f, "Order #{order_ref} Completed!")
            }
            NotificationEvent::SignalSent { message } => {
                write!(f, "Signal sent to Rider: \"{message}\"")
            }
            NotificationEvent::StockBlocked => write!(f, "Item blocked for new orders."),
        }
    }
}

#[derive(Debug)]
enum NotifierMessage {
    Publish {
        event: NotificationEvent,
    },
    Active {
        respond_to: oneshot::Sender<Option<String>>,
    },
}

/// Cloneable handle for publishing events and reading the active message.
#[derive(Clone)]
pub struct NotifierHandle {
    sender: mpsc::Sender<NotifierMessage>,
}

impl NotifierHandle {
    /// Publish an event, superseding whatever is currently displayed.
    /// Fire-and-forget: a closed emitter (shutdown) is not an error for the
    /// publisher.
    pub async fn publish(&self, event: NotificationEvent) {
        let _ = self.sender.send(NotifierMessage::Publish { event }).await;
    }

    /// The currently displayed message, if any.
    pub async fn active(&self) -> Option<String> {
        let (respond_to, response) = oneshot::channel();
        if self
            .sender
            .send(NotifierMessage::Active { respond_to })
            .await
            .is_err()
        {
            return None;
        }
        response.await.unwrap_or(None)
    }
}

/// The emitter actor. Owns the active message and its expiry deadline.
pub struct Notifier {
    receiver: mpsc::Receiver<NotifierMessage>,
    ttl: Duration,
    active: Option<String>,
}

impl Notifier {
    /// Creates the emitter and its handle.
    pub fn new(buffer_size: usize, ttl: Duration) -> (Self, NotifierHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let notifier = Self {
            receiver,
            ttl,
            active: None,
        };
        (notifier, NotifierHandle { sender })
    }

    /// Runs the emitter loop until all handles are dropped.
    pub async fn run(mut self) {
        info!("Notifier started");
        let mut deadline: Option<Instant> = None;

        loop {
            let expiry = async move {
                match deadline {
                    Some(at) => tokio::time::sleep_until(at).await,
                    None => std::future::pending::<()>().await,
                }
            };

            tokio::select! {
                // A due expiry must win over a query arriving at the same
                // instant, so the reader never sees a message past its TTL.
                biased;
                _ = expiry => {
                    debug!("Notification expired");
                    self.active = None;
                    deadline = None;
                }
                msg = self.receiver.recv() => match msg {
                    Some(NotifierMessage::Publish { event }) => {
                        let message = event.to_string();
                        debug!(%message, "Publish");
                        self.active = Some(message);
                        deadline = Some(Instant::now() + self.ttl);
                    }
                    Some(NotifierMessage::Active { respond_to }) => {
                        let _ = respond_to.send(self.active.clone());
                    }
                    None => break,
                },
            }
        }

        info!("Notifier shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_notifier() -> NotifierHandle {
        let (notifier, handle) = Notifier::new(8, NOTIFICATION_TTL);
        tokio::spawn(notifier.run());
        handle
    }

    #[tokio::test(start_paused = true)]
    async fn message_expires_after_the_ttl() {
        let handle = spawn_notifier();

        handle
            .publish(NotificationEvent::Completion {
                order_ref: "1042".to_string(),
            })
            .await;
        assert_eq!(
            handle.active().await.as_deref(),
            Some("Order #1042 Completed!")
        );

        tokio::time::advance(Duration::from_millis(3100)).await;
        assert_eq!(handle.active().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn newer_publish_supersedes_and_restarts_the_clock() {
        let handle = spawn_notifier();

        handle
            .publish(NotificationEvent::SignalSent {
                message: "5 min delay".to_string(),
            })
            .await;
        tokio::time::advance(Duration::from_secs(2)).await;

        handle.publish(NotificationEvent::StockBlocked).await;

        // Past the first message's window: the superseded expiry must not
        // clear the newer message.
        tokio::time::advance(Duration::from_millis(1500)).await;
        assert_eq!(
            handle.active().await.as_deref(),
            Some("Item blocked for new orders.")
        );

        // The second message expires on its own clock.
        tokio::time::advance(Duration::from_millis(1600)).await;
        assert_eq!(handle.active().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn display_order_matches_emission_order() {
        let handle = spawn_notifier();

        handle
            .publish(NotificationEvent::Completion {
                order_ref: "7".to_string(),
            })
            .await;
        handle.publish(NotificationEvent::StockBlocked).await;

        // Same synchronous batch: last emission wins.
        assert_eq!(
            handle.active().await.as_deref(),
            Some("Item blocked for new orders.")
        );
    }

    #[test]
    fn event_rendering() {
        assert_eq!(
            NotificationEvent::SignalSent {
                message: "running late".to_string()
            }
            .to_string(),
            "Signal sent to Rider: \"running late\""
        );
    }
}
