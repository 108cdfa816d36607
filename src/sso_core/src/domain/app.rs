use std::fmt;

use secrecy::Secret;
use serde::{Deserialize, Serialize};

/// Caller-supplied application identifier. `0` means "not set".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(i32);

impl AppId {
    pub const EMPTY: AppId = AppId(0);

    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == Self::EMPTY.0
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl From<i32> for AppId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A tenant that session tokens are scoped to. Each app signs with its own
/// secret.
#[derive(Debug, Clone, Deserialize)]
pub struct App {
    pub id: AppId,
    pub name: String,
    pub secret: Secret<String>,
}

impl App {
    pub fn new(id: AppId, name: impl Into<String>, secret: Secret<String>) -> Self {
        Self {
            id,
            name: name.into(),
            secret,
        }
    }
}
