//! Optional user configuration from `~/.config/toolgate/config.toml`.
//!
//! Missing file means defaults. Unknown persona strings fail the TOML parse,
//! matching the CLI's fail-fast handling of `--persona`.

use crate::cli::Persona;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: ConfigGeneral,
}

#[derive(Debug, Deserialize)]
pub struct ConfigGeneral {
    /// Used by `start` and `run` when `--persona` is omitted.
    #[serde(default)]
    pub default_persona: Option<Persona>,
    #[serde(default = "default_true")]
    pub audit_log: bool,
}

impl Default for ConfigGeneral {
    fn default() -> Self {
        Self {
            default_persona: None,
            audit_log: true,
        }
    }
}

fn default_true() -> bool {
    true
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/toolgate/config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Resolve the persona for a new session: flag wins, then config default.
pub fn resolve_persona(flag: Option<Persona>, config: &ConfigFile) -> anyhow::Result<Persona> {
    flag.or(config.general.default_persona).ok_or_else(|| {
        anyhow::anyhow!("no persona given: pass --persona or set general.default_persona in config.toml")
    })
}
