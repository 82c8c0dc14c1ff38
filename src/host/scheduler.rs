//! Cancellable per-frame tasks.
//!
//! The host's rendering loop calls [`FrameScheduler::begin_frame`] once per
//! frame. A game that wants frames holds a [`FrameTask`] handle; cancelling
//! the handle stops delivery immediately, including for a frame that was
//! already due. Task ids are never reused, so a stale handle can't cancel
//! somebody else's task.

use rustc_hash::FxHashMap;

/// Opaque task identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// Handle to a repeating frame task.
///
/// Deliberately not `Clone`: the owner of the handle is the one who cancels.
#[derive(Debug, PartialEq, Eq)]
pub struct FrameTask {
    id: TaskId,
}

impl FrameTask {
    /// The task's id.
    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }
}

/// Registry of live frame tasks.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    /// Live tasks and the number of frames each has been handed.
    active: FxHashMap<TaskId, u64>,
}

impl FrameScheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task that runs on every frame until cancelled.
    pub fn request_frames(&mut self) -> FrameTask {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.active.insert(id, 0);
        log::trace!("{id} scheduled");
        FrameTask { id }
    }

    /// Cancel a task. Returns `false` if it was not live.
    pub fn cancel(&mut self, task: &FrameTask) -> bool {
        let removed = self.active.remove(&task.id).is_some();
        if removed {
            log::trace!("{} cancelled", task.id);
        }
        removed
    }

    /// Cancel the task held in `slot`, if any, and clear the slot.
    ///
    /// Safe to call any number of times.
    pub fn release(&mut self, slot: &mut Option<FrameTask>) {
        if let Some(task) = slot.take() {
            self.cancel(&task);
        }
    }

    /// Whether the task is still live.
    #[must_use]
    pub fn is_active(&self, task: &FrameTask) -> bool {
        self.active.contains_key(&task.id)
    }

    /// Number of live tasks.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Frames handed to a task so far. Zero for cancelled tasks.
    #[must_use]
    pub fn frames_delivered(&self, task: &FrameTask) -> u64 {
        self.active.get(&task.id).copied().unwrap_or(0)
    }

    /// Start a frame. Returns `true` if at least one task wants it.
    pub fn begin_frame(&mut self) -> bool {
        for count in self.active.values_mut() {
            *count += 1;
        }
        !self.active.is_empty()
    }
}
