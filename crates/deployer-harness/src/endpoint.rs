//! Endpoint values and base-URL normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HarnessResult;
use crate::role::DeployerRole;

const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// A resolved deployer endpoint.
///
/// `address` and `port` are stored trimmed. The port is an opaque token: a
/// non-numeric value is carried through as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub role: DeployerRole,
    pub address: String,
    pub port: String,
}

impl Endpoint {
    pub fn new(role: DeployerRole, address: impl AsRef<str>, port: impl AsRef<str>) -> Self {
        Self {
            role,
            address: address.as_ref().trim().to_string(),
            port: port.as_ref().trim().to_string(),
        }
    }

    /// Fully qualified base URL handed to client constructors.
    pub fn base_url(&self) -> String {
        normalize(&self.address, &self.port)
    }

    /// Parse the base URL into a typed [`url::Url`].
    ///
    /// Resolution never validates; this is for callers that want the check.
    pub fn to_url(&self) -> HarnessResult<url::Url> {
        Ok(url::Url::parse(&self.base_url())?)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.base_url(), self.role)
    }
}

/// Join `address` and `port` into a base URL with exactly one scheme.
///
/// Both parts are trimmed. `http://` is prepended unless the address already
/// declares a scheme; the port is opaque and never counts toward one.
pub fn normalize(address: &str, port: &str) -> String {
    let address = address.trim();
    let joined = format!("{}:{}", address, port.trim());
    if has_scheme(address) {
        joined
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{joined}")
    }
}

/// True when `s` starts with `<scheme>://`, where scheme is an ASCII letter
/// followed by letters, digits, `+`, `-` or `.` (RFC 3986 section 3.1).
///
/// Case-insensitive: `HTTP://host` counts. This does not validate the rest of
/// the string.
pub fn has_scheme(s: &str) -> bool {
    let Some((scheme, _)) = s.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
