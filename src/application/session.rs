//! Session store — sign-in, sign-out, registration, restore
//!
//! Credentials are a hardcoded demo allowlist with one shared secret.
//! Nothing here is a real credential check; a production deployment
//! replaces this store behind the same operation contracts.

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Identity, Role};
use crate::infrastructure::SessionSlot;

/// The single shared secret accepted for every allowlisted identity.
pub const DEMO_PASSWORD: &str = "password123";

/// Fixed identity allowlist for the demo scope.
pub fn mock_directory() -> Vec<Identity> {
    let entries = [
        ("1", "admin@company.com", "Admin User", Role::Admin),
        ("2", "hr@company.com", "HR Manager", Role::Hr),
        ("3", "manager@company.com", "Department Manager", Role::Manager),
        ("4", "john.doe@company.com", "John Doe", Role::Employee),
        ("5", "sarah.johnson@company.com", "Sarah Johnson", Role::Employee),
        ("6", "mike.chen@company.com", "Mike Chen", Role::Employee),
        ("7", "emily.davis@company.com", "Emily Davis", Role::Employee),
    ];
    entries
        .into_iter()
        .map(|(id, email, name, role)| Identity {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
        })
        .collect()
}

/// Snapshot consumed by the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<Identity>,
    pub loading: bool,
}

/// Holds the active identity and its lifecycle. `loading` stays true
/// until `restore` has run once, whatever its outcome.
pub struct SessionStore {
    slot: Box<dyn SessionSlot>,
    user: Option<Identity>,
    loading: bool,
}

impl SessionStore {
    pub fn new(slot: Box<dyn SessionSlot>) -> Self {
        Self {
            slot,
            user: None,
            loading: true,
        }
    }

    /// Read the persisted slot. A well-formed value becomes the active
    /// identity; anything else is ignored. Always completes and signals
    /// ready exactly once.
    pub fn restore(&mut self) {
        if let Some(identity) = self.slot.load() {
            info!(user = %identity.email, role = %identity.role, "Session restored");
            self.user = Some(identity);
        }
        self.loading = false;
    }

    /// Authenticate against the allowlist and the shared secret. Failure
    /// leaves both the active identity and the slot untouched.
    pub fn sign_in(&mut self, email: &str, password: &str) -> DomainResult<&Identity> {
        let found = mock_directory().into_iter().find(|u| u.email == email);
        match found {
            Some(identity) if password == DEMO_PASSWORD => {
                info!(user = %identity.email, role = %identity.role, "Signed in");
                self.slot.save(&identity);
                Ok(self.user.insert(identity))
            }
            _ => Err(DomainError::InvalidCredentials),
        }
    }

    /// Clear the active identity and the slot. Idempotent.
    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user = %user.email, "Signed out");
        }
        self.slot.clear();
    }

    /// Mock registration: unconditionally creates and activates a fresh
    /// identity with the client-declared role. No uniqueness check, no
    /// password storage. A real backend must assign roles server-side.
    pub fn register(&mut self, email: &str, name: &str, role: Role, _password: &str) -> &Identity {
        warn!(%role, "Registering with a client-declared role (mock path)");
        let identity = Identity {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
        };
        info!(user = %identity.email, role = %identity.role, "Registered");
        self.slot.save(&identity);
        self.user.insert(identity)
    }

    pub fn current(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            loading: self.loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemorySessionSlot;

    fn store() -> SessionStore {
        SessionStore::new(Box::new(InMemorySessionSlot::new()))
    }

    #[test]
    fn restore_with_empty_slot_is_ready_and_anonymous() {
        let mut session = store();
        assert!(session.is_loading());
        session.restore();
        assert!(!session.is_loading());
        assert!(session.current().is_none());

        let snap = session.snapshot();
        assert_eq!(snap.user, None);
        assert!(!snap.loading);
    }

    #[test]
    fn sign_in_activates_and_persists() {
        let slot = Box::new(InMemorySessionSlot::new());
        let mut session = SessionStore::new(slot);
        session.restore();

        let identity = session.sign_in("hr@company.com", DEMO_PASSWORD).unwrap().clone();
        assert_eq!(identity.role, Role::Hr);
        assert_eq!(session.current(), Some(&identity));
    }

    #[test]
    fn restored_session_survives_store_recreation() {
        use std::sync::Arc;

        // Shared slot standing in for durable storage across "restarts".
        struct SharedSlot(Arc<InMemorySessionSlot>);
        impl SessionSlot for SharedSlot {
            fn load(&self) -> Option<Identity> {
                self.0.load()
            }
            fn save(&self, identity: &Identity) {
                self.0.save(identity)
            }
            fn clear(&self) {
                self.0.clear()
            }
        }

        let backing = Arc::new(InMemorySessionSlot::new());
        let mut first = SessionStore::new(Box::new(SharedSlot(backing.clone())));
        first.restore();
        first.sign_in("admin@company.com", DEMO_PASSWORD).unwrap();

        let mut second = SessionStore::new(Box::new(SharedSlot(backing)));
        second.restore();
        assert_eq!(second.current().map(|u| u.role), Some(Role::Admin));
    }

    #[test]
    fn wrong_secret_or_unknown_email_fails_without_state_change() {
        let mut session = store();
        session.restore();

        let err = session.sign_in("admin@company.com", "wrong").unwrap_err();
        assert_eq!(err, DomainError::InvalidCredentials);
        assert!(session.current().is_none());

        let err = session.sign_in("ghost@company.com", DEMO_PASSWORD).unwrap_err();
        assert_eq!(err, DomainError::InvalidCredentials);
        assert!(session.current().is_none());
    }

    #[test]
    fn sign_out_is_idempotent() {
        let mut session = store();
        session.restore();
        session.sign_in("admin@company.com", DEMO_PASSWORD).unwrap();

        session.sign_out();
        assert!(session.current().is_none());
        session.sign_out();
        assert!(session.current().is_none());
    }

    #[test]
    fn register_activates_with_declared_role() {
        let mut session = store();
        session.restore();

        let identity = session
            .register("new.hire@company.com", "New Hire", Role::Manager, "secret")
            .clone();
        assert_eq!(identity.role, Role::Manager);
        assert!(!identity.id.is_empty());
        assert_eq!(session.current(), Some(&identity));
    }
}
