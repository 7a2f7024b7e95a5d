//! Roster and server configuration for the doctor service.

use medbook_core::Doctor;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Doctors to seed at startup. Not persisted across restarts.
    #[serde(default)]
    pub doctors: Vec<DoctorConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorConfig {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub slots: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5002
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            host: default_host(),
            port: default_port(),
            doctors: Vec::new(),
        }
    }
}

impl LedgerConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Configuration with the default clinic roster, host and port taken
    /// from `HOST`/`PORT` when set.
    pub fn from_env() -> Self {
        let mut config = Self::with_default_roster();
        if let Ok(host) = std::env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("PORT")
            && let Ok(port) = port.parse()
        {
            config.port = port;
        }
        config
    }

    /// The default clinic roster.
    pub fn with_default_roster() -> Self {
        LedgerConfig {
            doctors: vec![
                DoctorConfig {
                    id: "D001".to_string(),
                    name: "Dr. Sample Name".to_string(),
                    specialty: "Cardiology".to_string(),
                    slots: 5,
                },
                DoctorConfig {
                    id: "D002".to_string(),
                    name: "Dr. Jane Doe".to_string(),
                    specialty: "Dermatology".to_string(),
                    slots: 3,
                },
                DoctorConfig {
                    id: "D003".to_string(),
                    name: "Dr. John Smith".to_string(),
                    specialty: "Pediatrics".to_string(),
                    slots: 4,
                },
            ],
            ..Default::default()
        }
    }

    /// Materialize the configured roster, skipping entries with invalid ids.
    pub fn roster(&self) -> Vec<Doctor> {
        self.doctors
            .iter()
            .filter_map(|d| {
                match Doctor::new(d.id.as_str(), d.name.clone(), d.specialty.clone(), d.slots) {
                    Ok(doctor) => Some(doctor),
                    Err(reason) => {
                        tracing::warn!(id = %d.id, reason, "skipping invalid roster entry");
                        None
                    }
                }
            })
            .collect()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_matches_seed_data() {
        let roster = LedgerConfig::with_default_roster().roster();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[1].id.as_str(), "D002");
        assert_eq!(roster[1].name, "Dr. Jane Doe");
        assert_eq!(roster[1].slots, 3);
    }

    #[test]
    fn parses_roster_from_json() {
        let config = LedgerConfig::from_json(
            r#"{
                "port": 6000,
                "doctors": [
                    {"id": "D010", "name": "Dr. Ada", "specialty": "Neurology", "slots": 2}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.port, 6000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.roster().len(), 1);
    }

    #[test]
    fn invalid_roster_entries_are_skipped() {
        let config = LedgerConfig::from_json(
            r#"{"doctors": [
                {"id": "", "name": "Dr. Nobody", "specialty": "None", "slots": 1},
                {"id": "D010", "name": "Dr. Ada", "specialty": "Neurology", "slots": 2}
            ]}"#,
        )
        .unwrap();
        assert_eq!(config.roster().len(), 1);
    }
}
