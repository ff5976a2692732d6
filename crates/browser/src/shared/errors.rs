use hubcheck_core::CheckError;

/// Classifies a driver error by message text. The CDP client reports
/// everything as one error type, so this is the best distinction available.
pub fn to_check_error(e: impl std::fmt::Display, action: &str) -> CheckError {
    let s = e.to_string();
    if s.contains("timeout") || s.contains("Timeout") {
        CheckError::timeout(format!("{} timed out: {}", action, s))
    } else if s.contains("navigation") || s.contains("Navigation") {
        CheckError::navigation(format!("{}: {}", action, s))
    } else if s.contains("not found") || s.contains("null") {
        CheckError::element_not_found(format!("{}: {}", action, s))
    } else {
        CheckError::browser(format!("{} failed: {}", action, s))
    }
}

/// True when a navigation error means the server is not answering at all,
/// as opposed to the driver itself misbehaving.
pub fn is_unreachable(message: &str) -> bool {
    message.contains("ERR_CONNECTION")
        || message.contains("ERR_NAME_NOT_RESOLVED")
        || message.contains("ERR_ADDRESS")
        || message.contains("ERR_EMPTY_RESPONSE")
}
