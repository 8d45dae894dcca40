use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::SnapshotId;

/// Observable transitions of the layout guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum GuardEvent {
    ModeEnabled,
    ModeDisabled,
    LayoutCaptured(SnapshotId),
    /// A start hook fired while a snapshot was still pending.
    CaptureSkipped,
    LayoutRestored(Option<SnapshotId>),
    /// The build did not finish cleanly; output stays on screen.
    RestoreKept { outcome: String },
    /// The output window was not visible, the pending snapshot was dropped.
    LayoutDiscarded,
}

pub struct EventBus {
    sender: broadcast::Sender<GuardEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GuardEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: GuardEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(GuardEvent::ModeEnabled);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, GuardEvent::ModeEnabled));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(GuardEvent::LayoutDiscarded);

        assert!(matches!(rx1.recv().await.unwrap(), GuardEvent::LayoutDiscarded));
        assert!(matches!(rx2.recv().await.unwrap(), GuardEvent::LayoutDiscarded));
    }

    #[tokio::test]
    async fn capture_then_restore_carry_the_same_id() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let id = SnapshotId::new();

        bus.publish(GuardEvent::LayoutCaptured(id.clone()));
        bus.publish(GuardEvent::LayoutRestored(Some(id.clone())));

        let e1 = rx.recv().await.unwrap();
        assert!(matches!(e1, GuardEvent::LayoutCaptured(ref got) if *got == id));

        let e2 = rx.recv().await.unwrap();
        assert!(matches!(e2, GuardEvent::LayoutRestored(Some(ref got)) if *got == id));
    }

    #[tokio::test]
    async fn cloned_bus_shares_subscribers() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let clone = bus.clone();

        clone.publish(GuardEvent::RestoreKept {
            outcome: "failed".into(),
        });

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, GuardEvent::RestoreKept { ref outcome } if outcome == "failed"));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(GuardEvent::ModeDisabled), 0);
    }

    #[test]
    fn events_use_adjacent_tagging() {
        let json = serde_json::to_value(GuardEvent::RestoreKept {
            outcome: "warned".into(),
        })
        .unwrap();
        assert_eq!(json["type"], "RestoreKept");
        assert_eq!(json["data"]["outcome"], "warned");
    }

    #[test]
    fn unrecognized_event_type_is_rejected() {
        let json = r#"{"type":"SomeOtherEvent","data":null}"#;
        assert!(serde_json::from_str::<GuardEvent>(json).is_err());
    }
}
