mod error;
mod task;
mod value;

pub use error::{TaskError, Result};
pub use task::{Task, TaskResult};
pub use value::{value_kind, Args, Value};

#[doc(hidden)]
pub use value::__json;
