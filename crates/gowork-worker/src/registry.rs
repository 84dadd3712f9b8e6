use crate::tasks;
use gowork_core::Task;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Shared, thread-safe task
pub type SharedTask = Arc<dyn Task + Send + Sync>;

/// Tasks looked up by name
pub struct TaskRegistry {
    tasks: RwLock<HashMap<String, SharedTask>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        TaskRegistry {
            tasks: RwLock::new(HashMap::new()),
        }
    }

    /// Registry preloaded with `echo`, `sum` and `noop`
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register("echo", tasks::echo);
        registry.register("sum", tasks::sum);
        registry.register("noop", tasks::noop);
        registry
    }

    /// Register a task under `name`, replacing any previous one
    pub fn register<T>(&self, name: impl Into<String>, task: T)
    where
        T: Task + Send + Sync + 'static,
    {
        let name = name.into();
        debug!("Registering task {}", name);
        self.tasks.write().insert(name, Arc::new(task));
    }

    pub fn get(&self, name: &str) -> Option<SharedTask> {
        self.tasks.read().get(name).cloned()
    }

    pub fn has_task(&self, name: &str) -> bool {
        self.tasks.read().contains_key(name)
    }

    /// Registered names, sorted
    pub fn task_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tasks.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}
