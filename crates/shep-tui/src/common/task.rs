//! Async task lifecycle state.
//!
//! A task's active state doubles as the submission guard: the reducer marks
//! a task active the moment it emits the corresponding effect and clears it
//! only when the completion event comes back, so the guard spans the whole
//! network round trip.

use crate::events::UiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// An add-session request to the shepherd service.
    Register,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
}

#[derive(Debug)]
pub struct TaskCompleted {
    pub id: TaskId,
    pub result: Box<UiEvent>,
}

/// Lifecycle state of one task kind (mutated only by the reducer).
#[derive(Debug, Default)]
pub struct TaskState {
    active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
    }

    /// Clears the active task if `id` matches; returns whether it did.
    /// A stale completion (e.g. from a superseded task) leaves state alone.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default)]
pub struct Tasks {
    pub register: TaskState,
}

impl Tasks {
    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Register => &mut self.register,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.register.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_spans_started_to_finished() {
        let mut state = TaskState::default();
        assert!(!state.is_running());

        let id = TaskId(7);
        state.on_started(&TaskStarted { id });
        assert!(state.is_running());

        assert!(!state.finish_if_active(TaskId(8)));
        assert!(state.is_running());

        assert!(state.finish_if_active(id));
        assert!(!state.is_running());
    }

    #[test]
    fn test_task_seq_is_monotonic() {
        let mut seq = TaskSeq::default();
        let first = seq.next_id();
        let second = seq.next_id();
        assert_ne!(first, second);
    }
}
