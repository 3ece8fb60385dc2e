//! Farmer profile and session context.
//!
//! Replaces the original module-global auth flag with an explicit context
//! object: construct with [`Session::load_or_default`], tear down with
//! [`Session::logout`]. Authentication is an acknowledged mock — any
//! credentials are accepted, there is no password verification and no
//! server. The profile and the logged-in flag persist through the
//! [`StoragePort`](crate::app::ports::StoragePort) as postcard blobs.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::app::ports::StoragePort;
use crate::error::StorageError;

const NAMESPACE: &str = "profile";
const KEY_AUTH: &str = "auth";
const KEY_PROFILE: &str = "data";

/// Who is farming, where, and what.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerProfile {
    pub name: String,
    pub farm_location: String,
    pub crop: String,
    /// Unix milliseconds of the crop season start.
    pub crop_start_ms: u64,
    pub email: String,
}

impl Default for FarmerProfile {
    fn default() -> Self {
        Self {
            name: "Rajesh Kumar".into(),
            farm_location: "Nashik, Maharashtra".into(),
            crop: "Wheat".into(),
            crop_start_ms: 1_763_164_800_000, // 2025-11-15T00:00:00Z
            email: "rajesh@farm.com".into(),
        }
    }
}

/// Explicit session context: auth flag plus the active profile.
#[derive(Debug, Clone)]
pub struct Session {
    logged_in: bool,
    profile: FarmerProfile,
}

impl Session {
    /// Initialise from storage. Missing keys mean first run; a corrupted
    /// profile blob falls back to the default rather than failing startup.
    pub fn load_or_default(storage: &impl StoragePort) -> Self {
        let logged_in = storage
            .read(NAMESPACE, KEY_AUTH)
            .map(|bytes| bytes == [1])
            .unwrap_or(false);

        let profile = match storage.read(NAMESPACE, KEY_PROFILE) {
            Ok(bytes) => match postcard::from_bytes(&bytes) {
                Ok(profile) => profile,
                Err(_) => {
                    warn!("stored profile corrupted, using defaults");
                    FarmerProfile::default()
                }
            },
            Err(_) => FarmerProfile::default(),
        };

        Self { logged_in, profile }
    }

    // ── Auth (mock: all credentials accepted) ─────────────────

    /// Log in. Seeds a default profile carrying `email` on first login.
    pub fn login(
        &mut self,
        storage: &mut impl StoragePort,
        email: &str,
        _password: &str,
    ) -> Result<(), StorageError> {
        self.logged_in = true;
        storage.write(NAMESPACE, KEY_AUTH, &[1])?;

        if !storage.exists(NAMESPACE, KEY_PROFILE) {
            self.profile = FarmerProfile {
                email: email.into(),
                ..Default::default()
            };
            self.persist_profile(storage)?;
        }
        Ok(())
    }

    /// Create a profile and log in.
    pub fn signup(
        &mut self,
        storage: &mut impl StoragePort,
        profile: FarmerProfile,
        _password: &str,
    ) -> Result<(), StorageError> {
        self.profile = profile;
        self.logged_in = true;
        storage.write(NAMESPACE, KEY_AUTH, &[1])?;
        self.persist_profile(storage)
    }

    /// Tear down the session: clears the auth flag, keeps the profile.
    /// A missing auth key is fine (already logged out).
    pub fn logout(&mut self, storage: &mut impl StoragePort) -> Result<(), StorageError> {
        self.logged_in = false;
        match storage.delete(NAMESPACE, KEY_AUTH) {
            Ok(()) | Err(StorageError::NotFound) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Mutate the profile in place and persist the result.
    pub fn update_profile(
        &mut self,
        storage: &mut impl StoragePort,
        update: impl FnOnce(&mut FarmerProfile),
    ) -> Result<(), StorageError> {
        update(&mut self.profile);
        self.persist_profile(storage)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn profile(&self) -> &FarmerProfile {
        &self.profile
    }

    // ── Internal ──────────────────────────────────────────────

    fn persist_profile(&self, storage: &mut impl StoragePort) -> Result<(), StorageError> {
        let bytes = postcard::to_allocvec(&self.profile).map_err(|_| StorageError::IoError)?;
        storage.write(NAMESPACE, KEY_PROFILE, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_store::MemoryStore;

    #[test]
    fn first_run_is_logged_out_default_profile() {
        let store = MemoryStore::new();
        let session = Session::load_or_default(&store);
        assert!(!session.is_logged_in());
        assert_eq!(session.profile().crop, "Wheat");
    }

    #[test]
    fn login_seeds_profile_with_email() {
        let mut store = MemoryStore::new();
        let mut session = Session::load_or_default(&store);
        session.login(&mut store, "meera@farm.com", "hunter2").unwrap();

        assert!(session.is_logged_in());
        assert_eq!(session.profile().email, "meera@farm.com");

        // A fresh load sees the persisted session.
        let reloaded = Session::load_or_default(&store);
        assert!(reloaded.is_logged_in());
        assert_eq!(reloaded.profile().email, "meera@farm.com");
    }

    #[test]
    fn login_does_not_clobber_existing_profile() {
        let mut store = MemoryStore::new();
        let mut session = Session::load_or_default(&store);
        session
            .signup(
                &mut store,
                FarmerProfile {
                    name: "Anita Desai".into(),
                    ..Default::default()
                },
                "pw",
            )
            .unwrap();
        session.logout(&mut store).unwrap();

        let mut back = Session::load_or_default(&store);
        back.login(&mut store, "other@farm.com", "pw").unwrap();
        assert_eq!(back.profile().name, "Anita Desai");
    }

    #[test]
    fn logout_clears_auth_but_keeps_profile() {
        let mut store = MemoryStore::new();
        let mut session = Session::load_or_default(&store);
        session.login(&mut store, "a@b.c", "pw").unwrap();
        session.logout(&mut store).unwrap();
        assert!(!session.is_logged_in());

        let reloaded = Session::load_or_default(&store);
        assert!(!reloaded.is_logged_in());
        assert_eq!(reloaded.profile().email, "a@b.c");
    }

    #[test]
    fn update_profile_persists() {
        let mut store = MemoryStore::new();
        let mut session = Session::load_or_default(&store);
        session.login(&mut store, "a@b.c", "pw").unwrap();
        session
            .update_profile(&mut store, |p| p.crop = "Tomato".into())
            .unwrap();

        let reloaded = Session::load_or_default(&store);
        assert_eq!(reloaded.profile().crop, "Tomato");
    }

    #[test]
    fn corrupted_profile_falls_back_to_default() {
        let mut store = MemoryStore::new();
        store.write(NAMESPACE, KEY_PROFILE, &[0xFF; 3]).unwrap();
        let session = Session::load_or_default(&store);
        assert_eq!(session.profile().name, "Rajesh Kumar");
    }
}
