use std::{borrow::Cow, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Opaque user identifier stored by the login form. Holding one means the
/// viewer is logged in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionIdentity(String);

impl SessionIdentity {
    pub fn new(value: impl Into<String>) -> Result<Self, Error> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::EmptyIdentity);
        }
        Ok(SessionIdentity(value))
    }

    /// A stored empty string counts as no identity at all.
    pub fn from_stored(value: Option<String>) -> Option<Self> {
        value.and_then(|v| Self::new(v).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Form safe to drop into a URL path segment or query value.
    pub fn url_encoded(&self) -> Cow<'_, str> {
        urlencoding::encode(&self.0)
    }
}

impl Display for SessionIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
