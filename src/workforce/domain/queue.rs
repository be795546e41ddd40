//! Priority-ordered work queue for a single mechanic.

use crate::task::domain::{Priority, TaskId};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Work queue surfacing the task with the largest priority value first.
///
/// Tasks of equal priority surface in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
    heap: BinaryHeap<QueueEntry>,
    next_sequence: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    priority: Priority,
    sequence: u64,
    task_id: TaskId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TaskQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a task with the given priority.
    pub fn push(&mut self, task_id: TaskId, priority: Priority) {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        self.heap.push(QueueEntry {
            priority,
            sequence,
            task_id,
        });
    }

    /// Returns the most urgent task without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<TaskId> {
        self.heap.peek().map(|entry| entry.task_id)
    }

    /// Removes one occurrence of `task_id`.
    ///
    /// Returns `true` when the task was queued.
    pub fn remove(&mut self, task_id: TaskId) -> bool {
        let mut entries = std::mem::take(&mut self.heap).into_vec();
        let position = entries.iter().position(|entry| entry.task_id == task_id);
        if let Some(index) = position {
            entries.swap_remove(index);
        }
        self.heap = BinaryHeap::from(entries);
        position.is_some()
    }

    /// Returns whether `task_id` is queued.
    #[must_use]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.heap.iter().any(|entry| entry.task_id == task_id)
    }

    /// Returns the number of queued tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the queued tasks, most urgent first.
    #[must_use]
    pub fn in_order(&self) -> Vec<TaskId> {
        let mut entries = self.heap.clone().into_sorted_vec();
        entries.reverse();
        entries.into_iter().map(|entry| entry.task_id).collect()
    }
}
