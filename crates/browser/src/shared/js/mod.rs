pub mod element;

use serde_json::Value;

/// Wraps a JS arrow-function source into an immediate call with the given
/// JSON-encoded arguments.
pub fn build_js_call(func: &str, args: &[Value]) -> String {
    let args_str = args
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("({})({})", func, args_str)
}

/// Call with a locator's kind and target as the two arguments.
pub fn locator_call(func: &str, locator: &hubcheck_core::Locator) -> String {
    build_js_call(
        func,
        &[Value::from(locator.kind()), Value::from(locator.target())],
    )
}
