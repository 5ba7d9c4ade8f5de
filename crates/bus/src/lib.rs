//! Deferred work queue.
//!
//! Components never call back into their owner while the owner is still
//! driving them (mount, change, blur). Work that must reach the owner later is
//! posted here and runs when the host drains the queue after the current
//! update has settled. Tasks run in the order they were posted.

use std::fmt;
use std::sync::mpsc::{Receiver, Sender, channel};

/// A unit of deferred work.
pub struct Task {
    pub label: &'static str,
    run: Box<dyn FnOnce()>,
}

impl Task {
    pub fn new(label: &'static str, run: impl FnOnce() + 'static) -> Self {
        Self {
            label,
            run: Box::new(run),
        }
    }

    pub fn run(self) {
        (self.run)()
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").field("label", &self.label).finish()
    }
}

/// Cloneable handle for posting tasks; components keep one of these.
#[derive(Clone, Debug)]
pub struct TaskSender {
    tx: Sender<Task>,
}

impl TaskSender {
    /// Post `run` to the queue. Returns `false` if the queue is gone.
    pub fn defer(&self, label: &'static str, run: impl FnOnce() + 'static) -> bool {
        let sent = self.tx.send(Task::new(label, run)).is_ok();
        if !sent {
            log::debug!(target: "numerics.input", "task queue closed, dropping {label}");
        }
        sent
    }
}

pub struct Bus {
    task_tx: Sender<Task>,
    task_rx: Receiver<Task>,
}

impl Bus {
    pub fn new() -> Self {
        let (task_tx, task_rx) = channel();
        Self { task_tx, task_rx }
    }

    pub fn sender(&self) -> TaskSender {
        TaskSender {
            tx: self.task_tx.clone(),
        }
    }

    pub fn defer(&self, label: &'static str, run: impl FnOnce() + 'static) {
        // The receiver lives in `self`, so the send cannot fail.
        let _ = self.task_tx.send(Task::new(label, run));
    }

    /// Run queued tasks until the queue is empty, including tasks posted by
    /// the tasks being run. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0usize;
        while let Ok(task) = self.task_rx.try_recv() {
            log::trace!(target: "numerics.input", "running deferred {}", task.label);
            task.run();
            ran += 1;
        }
        ran
    }

    /// Drop every queued task without running it.
    pub fn clear(&self) -> usize {
        self.task_rx.try_iter().count()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus").finish_non_exhaustive()
    }
}
