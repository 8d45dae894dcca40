//! Simulated build runner: fills the output buffer and fires the hooks.

use bury_common::{BufferKind, BuildKind};
use bury_guard::{FinishedCompilation, HookRegistry, OutputView};
use chrono::Local;
use tracing::{debug, warn};

use crate::buffer::{COMPILATION_BUFFER, GREP_BUFFER};
use crate::frame::Frame;

const DEFAULT_COMMAND: &str = "make -k";

/// A build to simulate: what it prints and how it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildJob {
    pub command: String,
    pub output: String,
    pub exit_code: i32,
    /// Overrides the status derived from `exit_code`.
    pub status: Option<String>,
    /// Leave point after the output instead of at the top.
    pub follow_output: bool,
    pub kind: BufferKind,
}

impl BuildJob {
    pub fn succeed() -> Self {
        Self {
            command: DEFAULT_COMMAND.into(),
            output: "cc -o main main.c\n".into(),
            exit_code: 0,
            status: None,
            follow_output: false,
            kind: BufferKind::Compilation,
        }
    }

    pub fn fail() -> Self {
        Self {
            output: "cc -o main main.c\nmain.c:3:1: error: expected ';' before '}' token\n".into(),
            exit_code: 2,
            ..Self::succeed()
        }
    }

    pub fn warn() -> Self {
        Self {
            output: "cc -o main main.c\nmain.c:7:9: warning: unused variable 'x'\n".into(),
            ..Self::succeed()
        }
    }

    /// A search whose results land in `*grep*`.
    pub fn grep(pattern: &str) -> Self {
        Self {
            command: format!("grep -nH -e {pattern} *.c"),
            output: format!("main.c:3:int {pattern};\n"),
            kind: BufferKind::Grep,
            ..Self::succeed()
        }
    }

    pub fn from_kind(kind: BuildKind) -> Self {
        match kind {
            BuildKind::Success => Self::succeed(),
            BuildKind::Failure => Self::fail(),
            BuildKind::Warnings => Self::warn(),
        }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn following_output(mut self) -> Self {
        self.follow_output = true;
        self
    }

    /// Status text handed to finish hooks.
    pub fn status(&self) -> String {
        match &self.status {
            Some(status) => status.clone(),
            None if self.exit_code == 0 => "finished\n".into(),
            None => format!("exited abnormally with code {}\n", self.exit_code),
        }
    }

    fn buffer_name(&self) -> &'static str {
        match self.kind {
            BufferKind::Grep => GREP_BUFFER,
            _ => COMPILATION_BUFFER,
        }
    }

    fn mode_name(&self) -> &'static str {
        match self.kind {
            BufferKind::Grep => "Grep",
            _ => "Compilation",
        }
    }
}

/// Owns the frame and the compilation hooks, and runs builds against them.
#[derive(Debug)]
pub struct BuildRunner {
    frame: Frame,
    hooks: HookRegistry,
}

impl BuildRunner {
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            hooks: HookRegistry::new(),
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut HookRegistry {
        &mut self.hooks
    }

    /// Run `job` to completion: [`start`](Self::start) then
    /// [`finish`](Self::finish).
    pub fn compile(&mut self, job: &BuildJob) -> FinishedCompilation {
        self.start(job);
        self.finish(job)
    }

    /// Fire the before-compile hooks, then reset and show the output
    /// buffer. Hooks see the layout as it was before the output appears.
    pub fn start(&mut self, job: &BuildJob) {
        self.hooks.run_before_compile(&mut self.frame);

        let name = job.buffer_name();
        let buffer = self.frame.ensure_buffer(name, job.kind);
        buffer.erase();
        buffer.append(&format!(
            "-*- mode: {}; -*-\n{} started at {}\n\n{}\n",
            job.mode_name().to_lowercase(),
            job.mode_name(),
            timestamp(),
            job.command,
        ));

        if let Err(err) = self.frame.display_buffer(name) {
            warn!(error = %err, "could not display build output");
        }
        self.frame.set_output_buffer(name);
    }

    /// Write the job output and status line, then fire the on-finish hooks.
    /// The output buffer is not shown again if it was hidden meanwhile.
    pub fn finish(&mut self, job: &BuildJob) -> FinishedCompilation {
        let name = job.buffer_name();
        let status = job.status();

        let buffer = self.frame.ensure_buffer(name, job.kind);
        buffer.append(&job.output);
        let end_of_output = buffer.len();
        buffer.append(&format!(
            "\n{} {} at {}\n",
            job.mode_name(),
            status.trim_end(),
            timestamp(),
        ));
        buffer.goto(if job.follow_output { end_of_output } else { 0 });

        let output = OutputView::new(job.kind, buffer.text(), buffer.point());
        debug!(buffer = name, status = status.trim_end(), "build finished");

        let finished = FinishedCompilation::new(status, output);
        self.hooks.run_on_finish(&mut self.frame, &finished);
        finished
    }
}

fn timestamp() -> String {
    Local::now().format("%a %b %e %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bury_guard::EditorHost;

    #[test]
    fn status_follows_exit_code() {
        assert_eq!(BuildJob::succeed().status(), "finished\n");
        assert_eq!(BuildJob::warn().status(), "finished\n");
        assert_eq!(
            BuildJob::fail().status(),
            "exited abnormally with code 2\n"
        );
        assert_eq!(
            BuildJob::succeed().with_status("interrupt\n").status(),
            "interrupt\n"
        );
    }

    #[test]
    fn compile_shows_output_buffer() {
        let mut runner = BuildRunner::new(Frame::new());
        let finished = runner.compile(&BuildJob::succeed());

        assert!(runner.frame().is_output_visible());
        assert_eq!(runner.frame().window_count(), 2);
        assert_eq!(finished.output.kind, BufferKind::Compilation);
        assert_eq!(finished.output.point, 0);
        assert!(finished.output.text.contains("make -k"));
        assert!(finished.output.text.contains("Compilation finished at"));
    }

    #[test]
    fn failed_build_reports_exit_code_in_buffer() {
        let mut runner = BuildRunner::new(Frame::new());
        let finished = runner.compile(&BuildJob::fail());
        assert!(finished
            .output
            .text
            .contains("Compilation exited abnormally with code 2 at"));
    }

    #[test]
    fn recompile_replaces_buffer_contents() {
        let mut runner = BuildRunner::new(Frame::new());
        runner.compile(&BuildJob::warn());
        let finished = runner.compile(&BuildJob::succeed());
        assert!(!finished.output.text.contains("warning"));
        assert_eq!(runner.frame().window_count(), 2);
    }

    #[test]
    fn following_output_leaves_point_after_output() {
        let mut runner = BuildRunner::new(Frame::new());
        let finished = runner.compile(&BuildJob::warn().following_output());
        let rest = &finished.output.text[finished.output.point..];
        assert!(rest.starts_with("\nCompilation finished"));
        assert!(finished.output.search_forward("warning").is_none());
        assert!(finished.output.search_all("warning").is_some());
    }

    #[test]
    fn finish_does_not_reshow_hidden_output() {
        let mut runner = BuildRunner::new(Frame::new());
        let job = BuildJob::succeed();
        runner.start(&job);
        assert!(runner.frame().is_output_visible());

        runner.frame_mut().bury_buffer(COMPILATION_BUFFER);
        runner.finish(&job);
        assert!(!runner.frame().is_output_visible());
    }

    #[test]
    fn grep_jobs_use_grep_buffer() {
        let mut runner = BuildRunner::new(Frame::new());
        let finished = runner.compile(&BuildJob::grep("count"));
        assert_eq!(finished.output.kind, BufferKind::Grep);
        assert_eq!(runner.frame().output_buffer(), GREP_BUFFER);
        assert!(runner.frame().is_buffer_visible(GREP_BUFFER));
        assert!(finished.output.text.contains("Grep finished at"));
    }
}
