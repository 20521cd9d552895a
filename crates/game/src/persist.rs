//! Key-value persistence of player state.
//!
//! Stores are opaque string-to-string maps. Keys are namespaced per local user
//! and per save version (`ec_{user}_v1_state`); bumping the version starts
//! fresh and orphans old data.

use crate::state::SavedState;
use rand::Rng;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Key holding the local user identity.
pub const USER_ID_KEY: &str = "ec_user_id";

/// Save format version embedded in state keys.
pub const SAVE_VERSION: u32 = 1;

const USER_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const USER_ID_LEN: usize = 7;

/// Errors raised by a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Wrap IO errors from file-backed stores.
    #[error("store io failed: {0}")]
    Io(#[from] io::Error),
    /// Wrap serde failures when encoding a snapshot.
    #[error("failed to encode state: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Store refused the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Opaque string key-value store.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` means the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed store: one file per key.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Directory holding the entries.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::Unavailable(format!("invalid key {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for DirStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// State key for a user.
pub fn state_key(user_id: &str) -> String {
    format!("ec_{user_id}_v{SAVE_VERSION}_state")
}

/// Fresh random user identity: `user_` plus seven base-36 characters.
pub fn generate_user_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..USER_ID_LEN)
        .map(|_| USER_ID_ALPHABET[rng.gen_range(0..USER_ID_ALPHABET.len())] as char)
        .collect();
    format!("user_{suffix}")
}

/// Read the stored user identity, creating and storing one when absent.
pub fn load_or_create_user_id<S: KeyValueStore + ?Sized>(
    store: &mut S,
) -> Result<String, StoreError> {
    if let Some(existing) = store.get(USER_ID_KEY)? {
        let existing = existing.trim();
        if !existing.is_empty() {
            return Ok(existing.to_string());
        }
    }
    let user_id = generate_user_id();
    store.set(USER_ID_KEY, &user_id)?;
    Ok(user_id)
}

/// Load a snapshot. Absent or corrupt data is `Ok(None)`; only store failures are errors.
pub fn load_state<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<SavedState>, StoreError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str::<SavedState>(&raw) {
        Ok(saved) => Ok(Some(saved)),
        Err(err) => {
            warn!(key, "ignoring corrupt saved state: {err}");
            Ok(None)
        }
    }
}

/// Write a snapshot.
pub fn save_state<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    saved: &SavedState,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(saved)?;
    store.set(key, &json)
}
