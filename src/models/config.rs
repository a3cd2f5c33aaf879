use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::store::Capability;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub access: Access,
    #[serde(default)]
    pub units: Units,
    #[serde(default)]
    pub aliases: HashMap<String, String>,
    #[serde(default)]
    pub log: Log,
}

/// Capabilities this client has been granted over the store.
#[derive(Debug, Serialize, Deserialize)]
pub struct Access {
    #[serde(default = "all_capabilities")]
    pub granted: Vec<Capability>,
}

fn all_capabilities() -> Vec<Capability> {
    Capability::ALL.to_vec()
}

impl Default for Access {
    fn default() -> Self {
        Self {
            granted: all_capabilities(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Units {
    #[serde(default = "default_system")]
    pub system: String,
}

fn default_system() -> String {
    "metric".to_string()
}

impl Default for Units {
    fn default() -> Self {
        Self {
            system: default_system(),
        }
    }
}

impl Units {
    pub fn imperial() -> Self {
        Self {
            system: "imperial".to_string(),
        }
    }

    pub fn is_imperial(&self) -> bool {
        self.system == "imperial"
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Log {
    /// Default `tracing` filter directive, overridden by `HEALTHSTORE_LOG`.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&path)?;
            file.write_all(contents.as_bytes())?;

            // mode() only applies on creation
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Resolve an alias to a metric name, or return the input unchanged.
    pub fn resolve_alias(&self, input: &str) -> String {
        self.aliases
            .get(input)
            .cloned()
            .unwrap_or_else(|| input.to_string())
    }

    pub fn is_granted(&self, capability: Capability) -> bool {
        self.access.granted.contains(&capability)
    }

    pub fn default_aliases() -> HashMap<String, String> {
        [
            ("bp", "blood_pressure"),
            ("hr", "heart_rate"),
            ("w", "weight"),
            ("bmi", "body_mass_index"),
            ("temp", "body_temperature"),
            ("spo2", "oxygen_saturation"),
            ("glu", "glucose"),
            ("wa", "water_intake"),
            ("med", "meditation"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    pub fn data_dir() -> anyhow::Result<PathBuf> {
        if let Ok(home) = std::env::var("HEALTHSTORE_HOME") {
            return Ok(PathBuf::from(home));
        }
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("cannot resolve home directory"))?;
        Ok(home.join(".healthstore"))
    }

    pub fn path() -> anyhow::Result<PathBuf> {
        Ok(Self::data_dir()?.join("config.toml"))
    }

    pub fn db_path() -> anyhow::Result<PathBuf> {
        Ok(Self::data_dir()?.join("data.db"))
    }
}
