//! Preference storage: `state.json` in the platform config dir on native
//! targets, `window.localStorage` in the browser.

use serde_json::Error as SerdeError;

use crate::domain::PersistedState;

#[cfg(not(target_arch = "wasm32"))]
pub use native::{load_persisted_state, save_persisted_state};
#[cfg(target_arch = "wasm32")]
pub use web::{load_persisted_state, save_persisted_state};

#[cfg(target_arch = "wasm32")]
const STATE_KEY: &str = "saas-scout.state";

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage unavailable")]
    StorageUnavailable,
    #[cfg(not(target_arch = "wasm32"))]
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[cfg(target_arch = "wasm32")]
    #[error("browser refused to store preferences: {0}")]
    Rejected(String),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

/// Parses stored preferences; anything unreadable is dropped with a warning.
fn decode(raw: &str, origin: &str) -> Option<PersistedState> {
    match serde_json::from_str(raw) {
        Ok(state) => Some(state),
        Err(err) => {
            tracing::warn!(origin, %err, "Ignoring unreadable preferences");
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::path::{Path, PathBuf};

    use directories::ProjectDirs;

    use super::{decode, PersistSaveError};
    use crate::domain::PersistedState;

    const APP_QUALIFIER: &str = "com";
    const APP_ORG: &str = "SaasScout";
    const APP_NAME: &str = "SaasScout";

    fn data_file() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .map(|dirs| dirs.config_dir().join("state.json"))
    }

    /// Saved preferences, or `None` when nothing usable is on disk.
    pub fn load_persisted_state() -> Option<PersistedState> {
        load_from(&data_file()?)
    }

    pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
        let path = data_file().ok_or(PersistSaveError::StorageUnavailable)?;
        save_to(&path, state)
    }

    pub(super) fn load_from(path: &Path) -> Option<PersistedState> {
        let data = fs::read_to_string(path).ok()?;
        decode(&data, &path.display().to_string())
    }

    pub(super) fn save_to(path: &Path, state: &PersistedState) -> Result<(), PersistSaveError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::Storage;

    use super::{decode, PersistSaveError, STATE_KEY};
    use crate::domain::PersistedState;

    fn local_storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn load_persisted_state() -> Option<PersistedState> {
        let raw = local_storage()?.get_item(STATE_KEY).ok().flatten()?;
        decode(&raw, "localStorage")
    }

    pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
        let storage = local_storage().ok_or(PersistSaveError::StorageUnavailable)?;
        let json = serde_json::to_string(state)?;
        storage
            .set_item(STATE_KEY, &json)
            .map_err(|err| PersistSaveError::Rejected(format!("{err:?}")))
    }
}
