use gowork_core::{Args, Task, TaskResult, Value};
use serde::{Deserialize, Serialize};

/// Named wrapper that runs caller-supplied tasks.
///
/// `name` and `data` are bookkeeping for the caller. Running a task never
/// reads or changes them, so the outcome of [`Worker::process`] depends only
/// on the task and its arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Worker<D = Value> {
    /// Descriptive label
    pub name: String,

    /// Opaque payload owned by the worker
    pub data: D,
}

impl<D> Worker<D> {
    pub fn new(name: impl Into<String>, data: D) -> Self {
        Worker {
            name: name.into(),
            data,
        }
    }

    /// Run `task` once with `args`, in order, and hand back exactly what it returned
    pub fn process<T>(&self, task: &T, args: Args) -> TaskResult
    where
        T: Task + ?Sized,
    {
        task.call(args)
    }
}
