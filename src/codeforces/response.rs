//! Codeforces API response envelope

use serde::Deserialize;

/// Envelope every Codeforces API call is wrapped in.
///
/// `status` is `"OK"` or `"FAILED"`; on failure `comment` carries the
/// reason and `result` is absent.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub status: String,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub result: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Whether the upstream call succeeded
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }

    /// Failure comment, or a generic fallback when the API omitted it
    pub fn failure_comment(&self) -> String {
        self.comment
            .clone()
            .unwrap_or_else(|| "Codeforces API request failed".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_ok_envelope() {
        let raw = r#"{"status": "OK", "result": [1, 2, 3]}"#;
        let envelope: ApiEnvelope<Vec<i64>> = serde_json::from_str(raw).unwrap();
        assert!(envelope.is_ok());
        assert_eq!(envelope.result, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_parses_failed_envelope() {
        let raw = r#"{"status": "FAILED", "comment": "handles: User with handle xyz not found"}"#;
        let envelope: ApiEnvelope<Vec<i64>> = serde_json::from_str(raw).unwrap();
        assert!(!envelope.is_ok());
        assert!(envelope.failure_comment().contains("not found"));
        assert!(envelope.result.is_none());
    }
}
