//! Clinic access gate.
//!
//! The desk holds patient records, so it starts locked when a passphrase is
//! configured. Recording or importing visits needs [`AccessState::Granted`].

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use tracing::{info, warn};

use crate::error::SessionError;

/// Access settings, typically loaded from the desk's JSON config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Passphrase that unlocks the desk. `None` leaves the desk open.
    pub passphrase: Option<String>,
}

impl AccessConfig {
    pub fn with_passphrase(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: Some(passphrase.into()),
        }
    }

    /// Parse access settings from JSON. A blank passphrase is rejected
    /// rather than read as "no gate".
    pub fn from_json_str(contents: &str) -> Result<Self, SessionError> {
        let config: AccessConfig = serde_json::from_str(contents)?;
        if config.passphrase.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(SessionError::MissingField("passphrase"));
        }
        Ok(config)
    }
}

/// Load access settings from a JSON file.
pub fn load_access_config(path: &Path) -> Result<AccessConfig, SessionError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    AccessConfig::from_json_str(&contents)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessState {
    /// No passphrase entered yet.
    Pending,
    /// The last passphrase entered was wrong.
    Denied,
    Granted,
}

impl fmt::Display for AccessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccessState::Pending => "passphrase not entered",
            AccessState::Denied => "passphrase incorrect",
            AccessState::Granted => "granted",
        })
    }
}

/// Tracks whether the desk has been unlocked.
#[derive(Debug, Clone)]
pub struct AccessGate {
    config: AccessConfig,
    state: AccessState,
}

impl AccessGate {
    pub fn new(config: AccessConfig) -> Self {
        let state = match config.passphrase {
            Some(_) => AccessState::Pending,
            None => AccessState::Granted,
        };
        Self { config, state }
    }

    pub fn state(&self) -> AccessState {
        self.state
    }

    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    /// Check an entered passphrase. A wrong entry can be retried; once
    /// granted the gate stays open until the session is reset.
    pub fn unlock(&mut self, attempt: &str) -> AccessState {
        if self.state == AccessState::Granted {
            return self.state;
        }

        let expected = self.config.passphrase.as_deref().unwrap_or_default();
        if bool::from(expected.as_bytes().ct_eq(attempt.as_bytes())) {
            info!("desk unlocked");
            self.state = AccessState::Granted;
        } else {
            warn!("incorrect clinic passphrase");
            self.state = AccessState::Denied;
        }
        self.state
    }

    pub fn require_granted(&self) -> Result<(), SessionError> {
        match self.state {
            AccessState::Granted => Ok(()),
            state => Err(SessionError::Locked(state)),
        }
    }
}
