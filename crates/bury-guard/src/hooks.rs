//! Compilation lifecycle hooks.
//!
//! The host's build runner owns a [`HookRegistry`] and calls
//! [`HookRegistry::run_before_compile`] before it spawns a build and
//! [`HookRegistry::run_on_finish`] once the build has exited.

use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

use crate::classify::FinishedCompilation;
use crate::host::EditorHost;

pub type StartHook = Rc<dyn Fn(&mut dyn EditorHost)>;
pub type FinishHook = Rc<dyn Fn(&mut dyn EditorHost, &FinishedCompilation)>;

/// Identity of a registered hook. Registering the same id twice is a no-op.
///
/// Two ids with the same name but different owners are distinct, so
/// several owners can attach the same kind of hook to one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId {
    name: &'static str,
    owner: Option<Uuid>,
}

impl HookId {
    /// An id with no owner.
    pub const fn named(name: &'static str) -> Self {
        Self { name, owner: None }
    }

    pub fn owned_by(name: &'static str, owner: Uuid) -> Self {
        Self {
            name,
            owner: Some(owner),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for HookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.owner {
            Some(owner) => write!(f, "{}@{owner}", self.name),
            None => f.write_str(self.name),
        }
    }
}

#[derive(Default)]
pub struct HookRegistry {
    before_compile: Vec<(HookId, StartHook)>,
    on_finish: Vec<(HookId, FinishHook)>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if a hook with this id is already registered.
    pub fn add_before_compile(&mut self, id: HookId, hook: StartHook) -> bool {
        if self.has_before_compile(id) {
            return false;
        }
        self.before_compile.push((id, hook));
        true
    }

    /// Returns `false` if a hook with this id is already registered.
    pub fn add_on_finish(&mut self, id: HookId, hook: FinishHook) -> bool {
        if self.has_on_finish(id) {
            return false;
        }
        self.on_finish.push((id, hook));
        true
    }

    pub fn remove_before_compile(&mut self, id: HookId) -> bool {
        let before = self.before_compile.len();
        self.before_compile.retain(|(hook_id, _)| *hook_id != id);
        self.before_compile.len() != before
    }

    pub fn remove_on_finish(&mut self, id: HookId) -> bool {
        let before = self.on_finish.len();
        self.on_finish.retain(|(hook_id, _)| *hook_id != id);
        self.on_finish.len() != before
    }

    pub fn has_before_compile(&self, id: HookId) -> bool {
        self.before_compile.iter().any(|(hook_id, _)| *hook_id == id)
    }

    pub fn has_on_finish(&self, id: HookId) -> bool {
        self.on_finish.iter().any(|(hook_id, _)| *hook_id == id)
    }

    pub fn before_compile_count(&self) -> usize {
        self.before_compile.len()
    }

    pub fn on_finish_count(&self) -> usize {
        self.on_finish.len()
    }

    /// Call every before-compile hook in registration order.
    pub fn run_before_compile(&self, host: &mut dyn EditorHost) {
        for (id, hook) in &self.before_compile {
            tracing::trace!(hook = %id, "running before-compile hook");
            hook(&mut *host);
        }
    }

    /// Call every on-finish hook in registration order.
    pub fn run_on_finish(&self, host: &mut dyn EditorHost, finished: &FinishedCompilation) {
        for (id, hook) in &self.on_finish {
            tracing::trace!(hook = %id, "running on-finish hook");
            hook(&mut *host, finished);
        }
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("before_compile", &ids(&self.before_compile))
            .field("on_finish", &ids(&self.on_finish))
            .finish()
    }
}

fn ids<T>(hooks: &[(HookId, T)]) -> Vec<String> {
    hooks.iter().map(|(id, _)| id.to_string()).collect()
}
