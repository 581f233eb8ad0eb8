use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// Scheme keyword is matched case-insensitively, trailing spaces are tolerated
static BEARER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Bearer +([^ ]+) *$").expect("Invalid bearer pattern"));

/// The access token a caller presented in its `Bearer` authorization value.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerCredential(String);

impl BearerCredential {
    /// Extracts the bearer token from a raw authorization value.
    ///
    /// Returns `None` when the value is absent or does not match `Bearer <token>`,
    /// e.g. `Basic xyz`, an empty string or `Bearer` without a token.
    pub fn extract(raw_authorization: Option<&str>) -> Option<Self> {
        let raw_authorization = raw_authorization?;
        BEARER_PATTERN
            .captures(raw_authorization)
            .and_then(|captures| captures.get(1))
            .map(|token| Self(token.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerCredential(<redacted>)")
    }
}
