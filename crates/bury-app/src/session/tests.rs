use bury_common::{BuildKind, WarningScan};

use super::*;

fn session() -> Session {
    Session::new(BuryConfig::default(), None)
}

#[test]
fn starts_enabled_by_default() {
    let mut session = session();
    assert!(session.guard().is_enabled());
    assert_eq!(session.drain_events(), vec![GuardEvent::ModeEnabled]);
}

#[test]
fn disabled_config_starts_without_hooks() {
    let mut config = BuryConfig::default();
    config.guard.enabled = false;
    let mut session = Session::new(config, None);
    assert!(!session.guard().is_enabled());
    assert!(session.drain_events().is_empty());
}

#[test]
fn clean_build_restores_and_notifies() {
    let mut session = session();
    session.drain_events();

    let before = session.frame().configuration();
    let flow = session.step(Action::Compile(BuildKind::Success)).unwrap();
    assert_eq!(flow, Flow::Continue);
    assert_eq!(session.frame().configuration(), before);

    let events = session.drain_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], GuardEvent::LayoutCaptured(_)));
    assert!(matches!(events[1], GuardEvent::LayoutRestored(Some(_))));
    assert_eq!(session.new_messages(), vec!["Compilation successful."]);
    assert!(session.new_messages().is_empty());
}

#[test]
fn failure_then_hide_then_success() {
    let mut session = session();
    session.step(Action::Compile(BuildKind::Failure)).unwrap();
    assert_eq!(session.frame().window_count(), 2);
    assert!(session.guard().state().is_pending());

    session.step(Action::HideOutput).unwrap();
    assert_eq!(session.frame().window_count(), 1);

    session.step(Action::Compile(BuildKind::Success)).unwrap();
    assert_eq!(session.frame().window_count(), 1);
}

#[test]
fn toggle_twice_restores_mode() {
    let mut session = session();
    session.step(Action::ToggleMode).unwrap();
    assert!(!session.guard().is_enabled());
    session.step(Action::ToggleMode).unwrap();
    assert!(session.guard().is_enabled());
}

#[test]
fn quit_stops_the_loop() {
    assert_eq!(session().step(Action::Quit).unwrap(), Flow::Quit);
}

#[test]
fn apply_config_switches_mode_and_settings() {
    let mut session = session();
    let mut config = BuryConfig::default();
    config.guard.enabled = false;
    config.guard.warning_scan = WarningScan::WholeBuffer;
    session.apply_config(config);

    assert!(!session.guard().is_enabled());
    assert_eq!(
        session.guard().settings().warning_scan,
        WarningScan::WholeBuffer
    );
    session.step(Action::Compile(BuildKind::Success)).unwrap();
    assert_eq!(session.frame().window_count(), 2);
}

#[test]
fn reloading_identical_config_keeps_pending_snapshot() {
    let mut session = session();
    session.step(Action::Compile(BuildKind::Warnings)).unwrap();
    assert!(session.guard().state().is_pending());

    session.apply_config(BuryConfig::default());
    assert!(session.guard().state().is_pending());
    assert!(session.guard().state().saved_layout().is_some());
}

#[test]
fn reload_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[guard]\nenabled = false\n").unwrap();

    let mut session = Session::new(BuryConfig::default(), Some(path));
    session.step(Action::ReloadConfig).unwrap();
    assert!(!session.guard().is_enabled());
    assert!(!session.config().guard.enabled);
}

#[test]
fn reload_reports_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[frame]\nmax_registers = 0\n").unwrap();

    let mut session = Session::new(BuryConfig::default(), Some(path));
    let err = session.step(Action::ReloadConfig).unwrap_err();
    assert!(matches!(err, BuryError::Config(_)));
    assert!(session.guard().is_enabled());
}

#[test]
fn events_describe_themselves() {
    assert_eq!(describe_event(&GuardEvent::ModeEnabled), "mode enabled");
    assert_eq!(
        describe_event(&GuardEvent::RestoreKept {
            outcome: "warned".into()
        }),
        "kept output visible (warned)"
    );
}
