//! Deciding whether a finished build was clean.

use bury_common::{BufferKind, WarningScan};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::settings::GuardSettings;

/// The output buffer of a finished build, as the host hands it over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputView {
    pub kind: BufferKind,
    pub text: String,
    /// Byte offset of point in `text`.
    pub point: usize,
}

impl OutputView {
    pub fn new(kind: BufferKind, text: impl Into<String>, point: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            point,
        }
    }

    /// Byte offset of the first `needle` at or after point.
    ///
    /// A point inside a multi-byte character starts at the next character;
    /// a point past the end finds nothing.
    pub fn search_forward(&self, needle: &str) -> Option<usize> {
        let start = (self.point..=self.text.len()).find(|&i| self.text.is_char_boundary(i))?;
        self.text[start..].find(needle).map(|i| start + i)
    }

    /// Byte offset of the first `needle` anywhere in the buffer.
    pub fn search_all(&self, needle: &str) -> Option<usize> {
        self.text.find(needle)
    }
}

/// What the host reports when a build ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedCompilation {
    /// Free-text status, e.g. `"finished\n"` or `"exited abnormally with code 2\n"`.
    pub status: String,
    pub output: OutputView,
}

impl FinishedCompilation {
    pub fn new(status: impl Into<String>, output: OutputView) -> Self {
        Self {
            status: status.into(),
            output,
        }
    }
}

/// How the guard judged the last finish event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildOutcome {
    /// Finished without warnings. The only outcome that restores.
    Clean,
    /// Status text lacks the success marker.
    Failed,
    /// Finished, but the warning marker was found.
    Warned,
    /// The finished buffer is not a compilation buffer.
    NotCompilation,
    /// Output was not visible; the pending snapshot was dropped.
    Discarded,
}

impl BuildOutcome {
    pub fn is_clean(self) -> bool {
        self == BuildOutcome::Clean
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildOutcome::Clean => "clean",
            BuildOutcome::Failed => "failed",
            BuildOutcome::Warned => "warned",
            BuildOutcome::NotCompilation => "not_compilation",
            BuildOutcome::Discarded => "discarded",
        }
    }
}

impl fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GuardSettings {
    /// Classify a finished build. Anything short of an unambiguous success
    /// is treated as a failure.
    pub fn classify(&self, finished: &FinishedCompilation) -> BuildOutcome {
        if finished.output.kind != BufferKind::Compilation {
            return BuildOutcome::NotCompilation;
        }
        if !finished.status.contains(&self.success_marker) {
            return BuildOutcome::Failed;
        }
        let warned = match self.warning_scan {
            WarningScan::FromPoint => finished.output.search_forward(&self.warning_marker),
            WarningScan::WholeBuffer => finished.output.search_all(&self.warning_marker),
        };
        if warned.is_some() {
            BuildOutcome::Warned
        } else {
            BuildOutcome::Clean
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compilation(text: &str, point: usize) -> OutputView {
        OutputView::new(BufferKind::Compilation, text, point)
    }

    #[test]
    fn finished_without_warning_is_clean() {
        let settings = GuardSettings::default();
        let done = FinishedCompilation::new("finished\n", compilation("cc -o a a.c\n", 0));
        assert_eq!(settings.classify(&done), BuildOutcome::Clean);
    }

    #[test]
    fn missing_success_marker_is_failed() {
        let settings = GuardSettings::default();
        let done = FinishedCompilation::new(
            "exited abnormally with code 2\n",
            compilation("a.c:1: error: expected ';'\n", 0),
        );
        assert_eq!(settings.classify(&done), BuildOutcome::Failed);
    }

    #[test]
    fn empty_status_is_failed() {
        let settings = GuardSettings::default();
        let done = FinishedCompilation::new("", compilation("", 0));
        assert_eq!(settings.classify(&done), BuildOutcome::Failed);
    }

    #[test]
    fn markers_are_case_sensitive() {
        let settings = GuardSettings::default();
        let done = FinishedCompilation::new("Finished\n", compilation("", 0));
        assert_eq!(settings.classify(&done), BuildOutcome::Failed);

        let done = FinishedCompilation::new("finished\n", compilation("Warning: x\n", 0));
        assert_eq!(settings.classify(&done), BuildOutcome::Clean);
    }

    #[test]
    fn warning_after_point_is_warned() {
        let settings = GuardSettings::default();
        let done = FinishedCompilation::new(
            "finished\n",
            compilation("a.c:3: warning: unused variable 'x'\n", 0),
        );
        assert_eq!(settings.classify(&done), BuildOutcome::Warned);
    }

    #[test]
    fn warning_before_point_is_missed_when_scanning_from_point() {
        let text = "a.c:3: warning: unused variable 'x'\nCompilation finished\n";
        let point = text.find("Compilation").unwrap();
        let done = FinishedCompilation::new("finished\n", compilation(text, point));

        let settings = GuardSettings::default();
        assert_eq!(settings.classify(&done), BuildOutcome::Clean);

        let settings = GuardSettings {
            warning_scan: WarningScan::WholeBuffer,
            ..GuardSettings::default()
        };
        assert_eq!(settings.classify(&done), BuildOutcome::Warned);
    }

    #[test]
    fn non_compilation_buffer_never_restores() {
        let settings = GuardSettings::default();
        let done = FinishedCompilation::new(
            "finished\n",
            OutputView::new(BufferKind::Grep, "src/lib.rs:1:fn main", 0),
        );
        assert_eq!(settings.classify(&done), BuildOutcome::NotCompilation);
    }

    #[test]
    fn custom_markers() {
        let settings = GuardSettings {
            success_marker: "BUILD SUCCESSFUL".into(),
            warning_marker: "[WARN]".into(),
            ..GuardSettings::default()
        };
        let ok = FinishedCompilation::new("BUILD SUCCESSFUL in 2s", compilation("", 0));
        assert_eq!(settings.classify(&ok), BuildOutcome::Clean);

        let warned = FinishedCompilation::new(
            "BUILD SUCCESSFUL in 2s",
            compilation("[WARN] deprecated API\n", 0),
        );
        assert_eq!(settings.classify(&warned), BuildOutcome::Warned);
    }

    #[test]
    fn search_forward_handles_odd_points() {
        let view = compilation("é warning", 1);
        // Point inside 'é' moves to the next character boundary.
        assert_eq!(view.search_forward("warning"), Some(3));

        let past_end = compilation("warning", 100);
        assert_eq!(past_end.search_forward("warning"), None);

        let at_end = compilation("warning", 7);
        assert_eq!(at_end.search_forward("warning"), None);
    }

    #[test]
    fn outcome_strings() {
        assert_eq!(BuildOutcome::Clean.to_string(), "clean");
        assert_eq!(BuildOutcome::NotCompilation.as_str(), "not_compilation");
        assert!(BuildOutcome::Clean.is_clean());
        assert!(!BuildOutcome::Warned.is_clean());
    }

    #[test]
    fn outcome_serializes_like_as_str() {
        let json = serde_json::to_string(&BuildOutcome::NotCompilation).unwrap();
        assert_eq!(json, "\"not_compilation\"");
        let back: BuildOutcome = serde_json::from_str("\"warned\"").unwrap();
        assert_eq!(back, BuildOutcome::Warned);
    }
}
