use bury_common::GuardEvent;

/// One-line description of a guard event for the terminal.
pub fn describe_event(event: &GuardEvent) -> String {
    match event {
        GuardEvent::ModeEnabled => "mode enabled".into(),
        GuardEvent::ModeDisabled => "mode disabled".into(),
        GuardEvent::LayoutCaptured(id) => format!("captured layout {id}"),
        GuardEvent::CaptureSkipped => "snapshot pending, layout not captured".into(),
        GuardEvent::LayoutRestored(Some(id)) => format!("restored layout {id}"),
        GuardEvent::LayoutRestored(None) => "clean build, no layout to restore".into(),
        GuardEvent::RestoreKept { outcome } => format!("kept output visible ({outcome})"),
        GuardEvent::LayoutDiscarded => "output hidden, saved layout discarded".into(),
    }
}
