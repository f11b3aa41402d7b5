//! # Auth Session Store
//!
//! Holds the authenticated session: a bearer token mirrored into durable
//! storage and the user profile kept in memory.
//!
//! The token is the only durable piece. After a restart the store comes
//! back authenticated (token restored) but without a profile; the
//! embedding application re-fetches the account and calls
//! [`SessionStore::set_user`], exactly as the web client re-fetches `/me`
//! on startup. How the token is obtained (login/register calls) is
//! transport, which lives outside this crate.

use tracing::{debug, warn};

use velo_core::User;

use crate::error::StoreResult;
use crate::traits::StringStore;
use crate::DEFAULT_TOKEN_KEY;

/// The auth session, with the token mirrored into durable storage.
#[derive(Debug)]
pub struct SessionStore<S> {
    token: Option<String>,
    user: Option<User>,
    storage: S,
    key: String,
}

impl<S: StringStore> SessionStore<S> {
    /// Opens a session store under the default token key (`"token"`).
    pub fn open(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_TOKEN_KEY)
    }

    /// Opens a session store under a custom token key.
    ///
    /// A stored token restores the authenticated state; an unreadable
    /// backend degrades to signed-out rather than failing construction.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let token = match storage.get(&key) {
            Ok(token) => token,
            Err(err) => {
                warn!(%key, %err, "session token unreadable, starting signed out");
                None
            }
        };

        SessionStore {
            token,
            user: None,
            storage,
            key,
        }
    }

    /// The current bearer token, if authenticated.
    #[inline]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The current user profile, if one has been supplied.
    #[inline]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// A session is authenticated iff it holds a token. The profile may
    /// lag behind (absent until re-fetched after a restart).
    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Checks whether the current user holds the admin role. `false`
    /// whenever the profile is absent.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Stores a fresh token and profile, persisting the token.
    pub fn authenticate(&mut self, token: impl Into<String>, user: User) -> StoreResult<()> {
        let token = token.into();
        self.storage.set(&self.key, &token)?;
        self.token = Some(token);
        self.user = Some(user);
        debug!(key = %self.key, "session authenticated");
        Ok(())
    }

    /// Replaces the in-memory profile without touching the token. Used
    /// after re-fetching the account for a restored token.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Drops token and profile and removes the persisted token.
    pub fn logout(&mut self) -> StoreResult<()> {
        self.storage.remove(&self.key)?;
        self.token = None;
        self.user = None;
        debug!(key = %self.key, "session cleared");
        Ok(())
    }

    /// Consumes the store, handing back its storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use velo_core::Role;

    fn test_user(role: Role) -> User {
        User {
            id: "u-1".to_string(),
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_starts_signed_out() {
        let session = SessionStore::open(MemoryStore::new());
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.token(), None);
        assert_eq!(session.user(), None);
    }

    #[test]
    fn test_authenticate_persists_token() {
        let mut session = SessionStore::open(MemoryStore::new());
        session.authenticate("jwt-abc", test_user(Role::Customer)).unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("jwt-abc"));

        let storage = session.into_storage();
        assert_eq!(
            storage.get(DEFAULT_TOKEN_KEY).unwrap().as_deref(),
            Some("jwt-abc")
        );
    }

    #[test]
    fn test_reopen_restores_token_but_not_profile() {
        let mut session = SessionStore::open(MemoryStore::new());
        session.authenticate("jwt-abc", test_user(Role::Admin)).unwrap();

        let reopened = SessionStore::open(session.into_storage());
        assert!(reopened.is_authenticated());
        assert_eq!(reopened.token(), Some("jwt-abc"));
        // Profile is in-memory only; re-fetched by the caller
        assert_eq!(reopened.user(), None);
        assert!(!reopened.is_admin());
    }

    #[test]
    fn test_set_user_after_restore() {
        let mut session = SessionStore::open(MemoryStore::new());
        session.authenticate("jwt-abc", test_user(Role::Customer)).unwrap();

        let mut reopened = SessionStore::open(session.into_storage());
        reopened.set_user(test_user(Role::Admin));
        assert!(reopened.is_admin());
        // Token untouched
        assert_eq!(reopened.token(), Some("jwt-abc"));
    }

    #[test]
    fn test_logout_removes_persisted_token() {
        let mut session = SessionStore::open(MemoryStore::new());
        session.authenticate("jwt-abc", test_user(Role::Customer)).unwrap();

        session.logout().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);

        let storage = session.into_storage();
        assert_eq!(storage.get(DEFAULT_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_is_admin_requires_admin_role() {
        let mut session = SessionStore::open(MemoryStore::new());
        session.authenticate("jwt-abc", test_user(Role::Customer)).unwrap();
        assert!(!session.is_admin());

        session.set_user(test_user(Role::Admin));
        assert!(session.is_admin());
    }
}
