pub mod worker;
pub mod tasks;
pub mod registry;
pub mod config;

pub use worker::Worker;
pub use registry::{SharedTask, TaskRegistry};
pub use config::WorkerConfig;
