//! Local session persistence and the answer audit log.
//!
//! The engine itself does no I/O; everything filesystem-shaped lives here.
//! Sessions are single files under `~/.config/toolgate/`, discarded by
//! `reset`.

use crate::domain::models::Session;
use std::path::PathBuf;

fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/toolgate"))
}

fn session_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("session.json"))
}

pub fn load_session() -> anyhow::Result<Option<Session>> {
    let p = session_path()?;
    if !p.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(p)?;
    Ok(Some(serde_json::from_str(&raw)?))
}

pub fn save_session(session: &Session) -> anyhow::Result<()> {
    let p = session_path()?;
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(p, serde_json::to_string_pretty(session)?)?;
    Ok(())
}

pub fn clear_session() -> anyhow::Result<bool> {
    let p = session_path()?;
    if !p.exists() {
        return Ok(false);
    }
    std::fs::remove_file(p)?;
    Ok(true)
}

/// Best-effort append to the audit log; never fails the command.
pub fn audit(action: &str, data: serde_json::Value) {
    let dir = match config_dir() {
        Ok(d) => d,
        Err(_) => return,
    };
    let _ = std::fs::create_dir_all(&dir);
    let event = serde_json::json!({
        "ts": unix_now(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("audit.jsonl"))
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

fn unix_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}
