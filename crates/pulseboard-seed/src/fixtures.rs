//! JSON fixture round-trip for domain-store states.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Loads a store state from a JSON fixture file.
pub fn load_state<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Writes a store state to a JSON fixture file, pretty-printed so fixtures
/// diff cleanly in review.
pub fn dump_state<T: Serialize>(path: impl AsRef<Path>, state: &T) -> Result<()> {
    let raw = serde_json::to_string_pretty(state)?;
    fs::write(path, raw)?;
    Ok(())
}
