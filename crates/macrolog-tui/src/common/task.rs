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
    Init,
    ProfileSave,
    AccountDelete,
    LogSubmit,
    LogDelete,
    Search,
    FoodLoad,
    AiOverview,
    MenuScan,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
///
/// Only the most recently started task of a kind is active. A completion
/// whose id is not the active one is stale and gets dropped.
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Makes `id` the active task, superseding any earlier one.
    pub fn start(&mut self, id: TaskId) {
        self.active = Some(id);
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }

    /// Forgets the running task so its result is ignored when it lands.
    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub init: TaskState,
    pub profile_save: TaskState,
    pub account_delete: TaskState,
    pub log_submit: TaskState,
    pub log_delete: TaskState,
    pub search: TaskState,
    pub food_load: TaskState,
    pub ai_overview: TaskState,
    pub menu_scan: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::Init => &self.init,
            TaskKind::ProfileSave => &self.profile_save,
            TaskKind::AccountDelete => &self.account_delete,
            TaskKind::LogSubmit => &self.log_submit,
            TaskKind::LogDelete => &self.log_delete,
            TaskKind::Search => &self.search,
            TaskKind::FoodLoad => &self.food_load,
            TaskKind::AiOverview => &self.ai_overview,
            TaskKind::MenuScan => &self.menu_scan,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Init => &mut self.init,
            TaskKind::ProfileSave => &mut self.profile_save,
            TaskKind::AccountDelete => &mut self.account_delete,
            TaskKind::LogSubmit => &mut self.log_submit,
            TaskKind::LogDelete => &mut self.log_delete,
            TaskKind::Search => &mut self.search,
            TaskKind::FoodLoad => &mut self.food_load,
            TaskKind::AiOverview => &mut self.ai_overview,
            TaskKind::MenuScan => &mut self.menu_scan,
        }
    }

    /// Allocates an id for `kind` and marks it active right away, so a
    /// result can be invalidated before its `TaskStarted` event is seen.
    pub fn begin(&mut self, kind: TaskKind, seq: &mut TaskSeq) -> TaskId {
        let id = seq.next_id();
        self.state_mut(kind).start(id);
        id
    }

    pub fn is_any_running(&self) -> bool {
        self.init.is_running()
            || self.profile_save.is_running()
            || self.account_delete.is_running()
            || self.log_submit.is_running()
            || self.log_delete.is_running()
            || self.search.is_running()
            || self.food_load.is_running()
            || self.ai_overview.is_running()
            || self.menu_scan.is_running()
    }

    /// Any task that writes to the server. Only one write runs at a time.
    pub fn is_mutating(&self) -> bool {
        self.profile_save.is_running()
            || self.account_delete.is_running()
            || self.log_submit.is_running()
            || self.log_delete.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superseded_task_is_not_active() {
        let mut seq = TaskSeq::default();
        let mut state = TaskState::default();
        let first = seq.next_id();
        let second = seq.next_id();

        state.start(first);
        state.start(second);

        assert!(!state.finish_if_active(first));
        assert!(state.is_running());
        assert!(state.finish_if_active(second));
        assert!(!state.is_running());
    }

    #[test]
    fn test_cleared_task_result_is_dropped() {
        let mut seq = TaskSeq::default();
        let mut tasks = Tasks::default();
        let id = tasks.begin(TaskKind::Search, &mut seq);
        assert!(tasks.search.is_running());
        tasks.state_mut(TaskKind::Search).clear();

        assert!(!tasks.state_mut(TaskKind::Search).finish_if_active(id));
        assert!(!tasks.is_any_running());
    }
}
