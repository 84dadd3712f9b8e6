use crate::{Args, TaskError, Value};

/// Outcome of a task: a result value or the task's own error
pub type TaskResult = std::result::Result<Value, TaskError>;

/// A unit of work invoked with a variable-length argument list.
///
/// Any `Fn(Args) -> TaskResult` is a task, so plain functions and closures
/// can be handed straight to a worker.
pub trait Task {
    fn call(&self, args: Args) -> TaskResult;
}

impl<F> Task for F
where
    F: Fn(Args) -> TaskResult,
{
    fn call(&self, args: Args) -> TaskResult {
        self(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    fn first(args: Args) -> TaskResult {
        args.into_iter()
            .next()
            .ok_or_else(|| TaskError::invalid_args("Invalid args"))
    }

    #[test]
    fn test_fn_is_task() {
        assert_eq!(first.call(args![5, 6]), Ok(Value::from(5)));
        assert_eq!(first.call(args![]), Err(TaskError::invalid_args("Invalid args")));
    }

    #[test]
    fn test_closure_is_task() {
        let len = |args: Args| -> TaskResult { Ok(Value::from(args.len())) };
        assert_eq!(len.call(args!["a", "b", "c"]), Ok(Value::from(3)));

        let boxed: Box<dyn Task> = Box::new(len);
        assert_eq!(boxed.call(args![]), Ok(Value::from(0)));
    }
}
