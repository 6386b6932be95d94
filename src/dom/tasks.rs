use std::collections::VecDeque;

use crate::foundation::ids::NodeHandle;
use crate::style::pseudo::PseudoState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Deferred cascade resolution for one node.
pub(crate) struct UiTask {
    /// Weak reference; a stale handle turns the task into a no-op.
    pub(crate) node: NodeHandle,
    /// Status computed when the signal arrived.
    pub(crate) status: PseudoState,
}

/// Single-threaded FIFO of pending UI tasks.
#[derive(Debug, Default)]
pub(crate) struct UiTaskQueue {
    queue: VecDeque<UiTask>,
}

impl UiTaskQueue {
    pub(crate) fn post(&mut self, task: UiTask) {
        self.queue.push_back(task);
    }

    pub(crate) fn next(&mut self) -> Option<UiTask> {
        self.queue.pop_front()
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/tasks.rs"]
mod tests;
