//! Venue error-code normalization.
//!
//! Deluthium reports semantic failures through two incompatible schemes: a
//! string `errorCode` field or a numeric `code` field. Both tables are
//! unioned into a single [`VenueFailure`] type here; `errorCode` wins when
//! both are present.

use serde_json::Value;

/// String error codes with their human descriptions.
const STRING_ERROR_CODES: &[(&str, &str)] = &[
    ("INVALID_API_KEY", "The API key provided is invalid or expired."),
    (
        "INSUFFICIENT_LIQUIDITY",
        "Not enough liquidity to fill the requested amount.",
    ),
    (
        "PAIR_NOT_SUPPORTED",
        "The requested trading pair is not supported.",
    ),
    (
        "QUOTE_EXPIRED",
        "The firm quote has expired. Request a new one.",
    ),
    ("RATE_LIMIT_EXCEEDED", "Too many requests - slow down."),
    (
        "CHAIN_NOT_SUPPORTED",
        "The specified chain ID is not supported.",
    ),
    (
        "INVALID_AMOUNT",
        "The amount provided is invalid (zero or negative).",
    ),
    ("INTERNAL_ERROR", "An unexpected server-side error occurred."),
];

/// Numeric error codes with their human descriptions.
const NUMERIC_ERROR_CODES: &[(i64, &str)] = &[
    (1001, "Invalid API key"),
    (1002, "Insufficient liquidity"),
    (1003, "Pair not supported"),
    (1004, "Quote expired"),
    (1005, "Rate limit exceeded"),
    (1006, "Chain not supported"),
    (1007, "Invalid amount"),
    (5000, "Internal server error"),
];

/// A normalized venue-reported failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueFailure {
    /// Code as reported by the venue, stringified for uniformity.
    pub code: String,
    /// Human-readable description from the code tables, or a generic note
    /// for codes not in either table.
    pub message: String,
}

/// Inspect a response body for venue error codes.
///
/// Tries the string `errorCode` field first, then the numeric `code` field.
/// A present-but-unrecognized code still yields a failure: the venue said
/// something went wrong even if we cannot name it, and treating it as
/// success would hand bad calldata to the signer.
pub fn normalize_venue_error(body: &Value) -> Option<VenueFailure> {
    if let Some(code) = body.get("errorCode").and_then(Value::as_str) {
        if code.is_empty() {
            return None;
        }
        let message = STRING_ERROR_CODES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, desc)| (*desc).to_string())
            .unwrap_or_else(|| format!("Unrecognized venue error code {code:?}"));
        return Some(VenueFailure {
            code: code.to_string(),
            message,
        });
    }

    if let Some(code) = body.get("code").and_then(Value::as_i64) {
        if code == 0 {
            // Some gateways echo code=0 for success.
            return None;
        }
        let message = NUMERIC_ERROR_CODES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, desc)| (*desc).to_string())
            .unwrap_or_else(|| format!("Unrecognized venue error code {code}"));
        return Some(VenueFailure {
            code: code.to_string(),
            message,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_code_matches() {
        let body = json!({"errorCode": "QUOTE_EXPIRED"});
        let failure = normalize_venue_error(&body).unwrap();
        assert_eq!(failure.code, "QUOTE_EXPIRED");
        assert!(failure.message.contains("expired"));
    }

    #[test]
    fn test_numeric_code_matches() {
        let body = json!({"code": 1004});
        let failure = normalize_venue_error(&body).unwrap();
        assert_eq!(failure.code, "1004");
        assert!(failure.message.to_lowercase().contains("expired"));
    }

    #[test]
    fn test_string_code_takes_priority() {
        let body = json!({"errorCode": "INVALID_API_KEY", "code": 1002});
        let failure = normalize_venue_error(&body).unwrap();
        assert_eq!(failure.code, "INVALID_API_KEY");
    }

    #[test]
    fn test_absent_codes_mean_success() {
        assert_eq!(normalize_venue_error(&json!({"txHash": "0xabc"})), None);
        assert_eq!(normalize_venue_error(&json!({})), None);
    }

    #[test]
    fn test_unknown_code_is_still_a_failure() {
        let failure = normalize_venue_error(&json!({"errorCode": "SOMETHING_NEW"})).unwrap();
        assert!(failure.message.contains("Unrecognized"));

        let failure = normalize_venue_error(&json!({"code": 9999})).unwrap();
        assert_eq!(failure.code, "9999");
    }

    #[test]
    fn test_zero_and_empty_codes_ignored() {
        assert_eq!(normalize_venue_error(&json!({"code": 0})), None);
        assert_eq!(normalize_venue_error(&json!({"errorCode": ""})), None);
    }
}
