// src/scheduler.rs

//! Single-threaded task queue and the redraw coalescing built on top of it.
//!
//! Work is never run inside the call that submits it. It is posted to the
//! `TaskQueue` and runs, in submission order, when the owner drains the
//! queue on its next tick. Work posted while the queue is being drained runs
//! in the same drain, after everything posted before it.
//!
//! `RedrawScheduler` keeps at most one recompute in the queue. A new request
//! cancels the pending one and reposts at the back with a fresh generation,
//! so a burst of requests collapses into a single recompute that observes
//! the state at the time it runs.

use crate::map::MapSnapshot;
use log::trace;
use std::collections::VecDeque;
use std::fmt;

/// Work items understood by the map view.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Populate the layers from a new snapshot (`None` clears the map).
    ApplyMap(Option<Box<MapSnapshot>>),
    /// Re-rasterize the layers. The generation identifies the request.
    Recompute { generation: u64 },
}

#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: VecDeque<Task>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, task: Task) {
        trace!("TaskQueue: posting {}", task);
        self.tasks.push_back(task);
    }

    pub fn pop(&mut self) -> Option<Task> {
        self.tasks.pop_front()
    }

    /// Removes every queued task matching `pred` and returns how many were
    /// removed.
    pub fn cancel_where(&mut self, pred: impl Fn(&Task) -> bool) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !pred(task));
        before - self.tasks.len()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Task::ApplyMap(Some(map)) => write!(f, "ApplyMap({} cells)", map.cells.len()),
            Task::ApplyMap(None) => write!(f, "ApplyMap(none)"),
            Task::Recompute { generation } => write!(f, "Recompute#{}", generation),
        }
    }
}

#[derive(Debug, Default)]
pub struct RedrawScheduler {
    generation: u64,
    superseded: u64,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending recompute and posts a new one. Returns the
    /// generation of the posted request.
    pub fn request_recompute(&mut self, queue: &mut TaskQueue) -> u64 {
        let cancelled = queue.cancel_where(|task| matches!(task, Task::Recompute { .. }));
        self.superseded += cancelled as u64;
        self.generation += 1;
        if cancelled > 0 {
            trace!(
                "RedrawScheduler: generation {} supersedes {} pending request(s)",
                self.generation,
                cancelled
            );
        }
        queue.post(Task::Recompute {
            generation: self.generation,
        });
        self.generation
    }

    /// Generation of the most recent request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Requests that were cancelled before they ran.
    pub fn superseded_count(&self) -> u64 {
        self.superseded
    }
}
