//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{MAX_HANDLE_LENGTH, MIN_HANDLE_LENGTH};

/// Characters Codeforces accepts in a handle
static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("valid handle regex"));

/// Validate a Codeforces handle before it is interpolated into an
/// upstream request URL
pub fn validate_handle(handle: &str) -> Result<(), &'static str> {
    if handle.len() < MIN_HANDLE_LENGTH {
        return Err("Handle must be at least 3 characters");
    }
    if handle.len() > MAX_HANDLE_LENGTH {
        return Err("Handle must be at most 24 characters");
    }
    if !HANDLE_RE.is_match(handle) {
        return Err("Handle can only contain letters, numbers, underscores, periods, and hyphens");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_handle() {
        assert!(validate_handle("tourist").is_ok());
        assert!(validate_handle("Um_nik").is_ok());
        assert!(validate_handle("ko.ya-ng").is_ok());
        assert!(validate_handle("ab").is_err()); // Too short
        assert!(validate_handle("a".repeat(25).as_str()).is_err()); // Too long
        assert!(validate_handle("bad handle").is_err()); // Whitespace
        assert!(validate_handle("sneaky/..").is_err()); // Path character
    }
}
