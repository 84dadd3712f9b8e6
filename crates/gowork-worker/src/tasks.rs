//! Ready-made tasks.

use gowork_core::{value_kind, Args, TaskError, TaskResult, Value};

/// Returns its arguments unchanged as an array. Needs at least one argument.
pub fn echo(args: Args) -> TaskResult {
    if args.is_empty() {
        return Err(TaskError::invalid_args("Invalid args"));
    }

    Ok(Value::Array(args))
}

/// Adds integer arguments. Needs at least one argument.
pub fn sum(args: Args) -> TaskResult {
    if args.is_empty() {
        return Err(TaskError::invalid_args(
            "Invalid args, at least one value required",
        ));
    }

    let mut total: i64 = 0;
    for (index, value) in args.iter().enumerate() {
        let n = value.as_i64().ok_or(TaskError::TypeMismatch {
            index,
            expected: "integer",
            found: value_kind(value),
        })?;
        total = total.checked_add(n).ok_or(TaskError::Overflow)?;
    }

    Ok(Value::from(total))
}

/// Does nothing and returns null.
pub fn noop(_args: Args) -> TaskResult {
    Ok(Value::Null)
}
