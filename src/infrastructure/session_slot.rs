//! Persisted session slot
//!
//! A single key-value entry in durable client-local storage holding the
//! serialised identity JSON. Read once at startup, written on
//! sign-in/register, deleted on sign-out. Slot failures are never fatal:
//! a broken slot behaves like an empty one.

use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use crate::domain::Identity;

/// Name of the slot, kept for parity with clients sharing the storage.
pub const SESSION_SLOT_KEY: &str = "currentUser";

pub trait SessionSlot: Send + Sync {
    /// Read the persisted identity. Absent or malformed values are `None`.
    fn load(&self) -> Option<Identity>;
    fn save(&self, identity: &Identity);
    fn clear(&self);
}

/// File-backed slot: one JSON document at a fixed path.
pub struct FileSessionSlot {
    path: PathBuf,
}

impl FileSessionSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionSlot for FileSessionSlot {
    fn load(&self) -> Option<Identity> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!("Discarding malformed session slot {}: {e}", self.path.display());
                None
            }
        }
    }

    fn save(&self, identity: &Identity) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Failed to create session dir {}: {e}", parent.display());
                return;
            }
        }
        match serde_json::to_string_pretty(identity) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    warn!("Failed to persist session to {}: {e}", self.path.display());
                }
            }
            Err(e) => warn!("Failed to serialise session: {e}"),
        }
    }

    fn clear(&self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                warn!("Failed to clear session slot {}: {e}", self.path.display());
            }
        }
    }
}

/// Volatile slot for tests and the demo shell.
#[derive(Default)]
pub struct InMemorySessionSlot {
    value: Mutex<Option<Identity>>,
}

impl InMemorySessionSlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionSlot for InMemorySessionSlot {
    fn load(&self) -> Option<Identity> {
        self.value.lock().ok()?.clone()
    }

    fn save(&self, identity: &Identity) {
        if let Ok(mut slot) = self.value.lock() {
            *slot = Some(identity.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.value.lock() {
            *slot = None;
        }
    }
}
