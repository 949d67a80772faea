use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Role of the dashboard actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    President,
    Director,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized role: {0:?}")]
pub struct RoleParseError(pub String);

impl Role {
    /// Stored and displayed representation
    pub fn code(&self) -> &'static str {
        match self {
            Role::President => "President",
            Role::Director => "Director",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![Role::President, Role::Director]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "President" => Some(Role::President),
            "Director" => Some(Role::Director),
            _ => None,
        }
    }

    /// Parse a persisted value, falling back to the default role.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None => Role::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e: RoleParseError| {
                log::warn!("{}, falling back to {}", e, Role::default());
                Role::default()
            }),
        }
    }

    /// Accent used by the sidebar brand mark and active nav item
    pub fn accent_class(&self) -> &'static str {
        match self {
            Role::President => "accent--blue",
            Role::Director => "accent--emerald",
        }
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_code(s).ok_or_else(|| RoleParseError(s.to_string()))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
