use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::BuryError;
use crate::types::BuildKind;

/// Every user-triggerable command the `bury` front end understands.
///
/// CLI steps and session input both resolve to an `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Run a build that ends the given way.
    Compile(BuildKind),
    /// Close every window showing the compilation output.
    HideOutput,
    /// Split the focused window to open a scratch buffer.
    SplitWindow,
    EnableMode,
    DisableMode,
    ToggleMode,
    ShowLayout,
    ReloadConfig,
    Quit,
}

impl Action {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Compile(BuildKind::Success) => "Compile (success)",
            Action::Compile(BuildKind::Failure) => "Compile (failure)",
            Action::Compile(BuildKind::Warnings) => "Compile (warnings)",
            Action::HideOutput => "Hide Compilation Output",
            Action::SplitWindow => "Split Window",
            Action::EnableMode => "Enable Bury Mode",
            Action::DisableMode => "Disable Bury Mode",
            Action::ToggleMode => "Toggle Bury Mode",
            Action::ShowLayout => "Show Layout",
            Action::ReloadConfig => "Reload Config",
            Action::Quit => "Quit",
        }
    }

    /// The short step names accepted on the command line.
    pub fn step_names() -> &'static [&'static str] {
        &[
            "ok", "fail", "warn", "hide", "split", "enable", "disable", "toggle", "show",
            "reload", "quit",
        ]
    }
}

impl FromStr for Action {
    type Err = BuryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ok" | "success" => Ok(Action::Compile(BuildKind::Success)),
            "fail" | "failure" => Ok(Action::Compile(BuildKind::Failure)),
            "warn" | "warnings" => Ok(Action::Compile(BuildKind::Warnings)),
            "hide" => Ok(Action::HideOutput),
            "split" => Ok(Action::SplitWindow),
            "enable" | "on" => Ok(Action::EnableMode),
            "disable" | "off" => Ok(Action::DisableMode),
            "toggle" => Ok(Action::ToggleMode),
            "show" => Ok(Action::ShowLayout),
            "reload" => Ok(Action::ReloadConfig),
            "quit" | "exit" => Ok(Action::Quit),
            other => Err(BuryError::Command(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_step_name_parses() {
        for name in Action::step_names() {
            let action: Result<Action, _> = name.parse();
            assert!(action.is_ok(), "step {name} did not parse");
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(
            " OK ".parse::<Action>().unwrap(),
            Action::Compile(BuildKind::Success)
        );
        assert_eq!("Toggle".parse::<Action>().unwrap(), Action::ToggleMode);
    }

    #[test]
    fn unknown_step_is_a_command_error() {
        let err = "frobnicate".parse::<Action>().unwrap_err();
        assert!(matches!(err, BuryError::Command(ref s) if s == "frobnicate"));
    }

    #[test]
    fn labels_are_not_empty() {
        for name in Action::step_names() {
            let action: Action = name.parse().unwrap();
            assert!(!action.label().is_empty());
        }
    }

    #[test]
    fn action_serde_roundtrip() {
        let action = Action::Compile(BuildKind::Warnings);
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }
}
