pub use serde_json::Value;

/// Ordered, heterogeneously-typed argument list handed to a task
pub type Args = Vec<Value>;

/// Name of the dynamic type held by a value
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() => "integer",
        // Above i64::MAX
        Value::Number(n) if n.is_u64() => "unsigned integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Build an [`Args`] list from JSON-compatible expressions.
///
/// ```
/// use gowork_core::{args, Value};
///
/// let args = args![1, "h", null, [1, 2], -3];
/// assert_eq!(args.len(), 5);
/// assert_eq!(args[1], Value::from("h"));
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:tt)*) => {
        match $crate::__json!([$($arg)*]) {
            $crate::Value::Array(args) => args,
            _ => unreachable!(),
        }
    };
}

#[doc(hidden)]
pub use serde_json::json as __json;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_kinds() {
        assert_eq!(value_kind(&Value::Null), "null");
        assert_eq!(value_kind(&json!(true)), "bool");
        assert_eq!(value_kind(&json!(7)), "integer");
        assert_eq!(value_kind(&json!(-7)), "integer");
        assert_eq!(value_kind(&json!(i64::MAX)), "integer");
        assert_eq!(value_kind(&json!(u64::MAX)), "unsigned integer");
        assert_eq!(value_kind(&json!(1.5)), "float");
        assert_eq!(value_kind(&json!("h")), "string");
        assert_eq!(value_kind(&json!([1])), "array");
        assert_eq!(value_kind(&json!({"type": "echo"})), "object");
    }

    #[test]
    fn test_args_macro() {
        let empty = args![];
        assert!(empty.is_empty());

        let mixed = args![1, "two", 3.0, null, -4];
        assert_eq!(mixed, vec![json!(1), json!("two"), json!(3.0), Value::Null, json!(-4)]);
    }
}
