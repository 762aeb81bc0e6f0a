//! Bearer credential detection.
//!
//! Nothing here verifies a token. The gateway only records whether a caller
//! sent something shaped like a bearer credential.

use std::fmt;

use axum::http::{header::AUTHORIZATION, HeaderMap};

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPresence {
    Yes,
    No,
}

impl AuthPresence {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl fmt::Display for AuthPresence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive prefix match on the first `Authorization` header.
pub fn bearer_presence(headers: &HeaderMap) -> AuthPresence {
    let has_bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(BEARER_PREFIX));

    if has_bearer {
        AuthPresence::Yes
    } else {
        AuthPresence::No
    }
}
