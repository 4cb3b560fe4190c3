//! Session context for a storefront page session.

use crate::user::{AuthUser, Role};
use shopeasy_commerce::ids::UserId;

/// Explicit session state, built once at page load and passed to whatever
/// needs it.
///
/// The stored material is a bearer token plus a JSON user record; both
/// must be present for the session to count as authenticated. The token
/// may outlive its validity on the server, which surfaces later as a
/// session-expired transport error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    user: Option<AuthUser>,
    token: Option<String>,
}

impl SessionContext {
    /// Session with no user and no token.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session for a known user and token.
    pub fn authenticated(user: AuthUser, token: impl Into<String>) -> Self {
        Self {
            user: Some(user),
            token: Some(token.into()),
        }
    }

    /// Build from raw stored material.
    ///
    /// A malformed user record leaves the user absent, which makes the
    /// whole session unauthenticated even when a token is present.
    pub fn from_storage(token: Option<&str>, user_json: Option<&str>) -> Self {
        Self {
            user: user_json.and_then(AuthUser::from_stored_json),
            token: token.map(str::to_owned),
        }
    }

    /// Check if both a user and a token are present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// The session's user, if any.
    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    /// The user's server-assigned ID, if the record carried one.
    pub fn user_id(&self) -> Option<UserId> {
        self.user.as_ref().and_then(|u| u.id)
    }

    /// The session's role; customer when no user is present.
    pub fn role(&self) -> Role {
        self.user.as_ref().map(|u| u.role).unwrap_or_default()
    }

    /// The bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Re-read the session from stored material, replacing it wholesale.
    pub fn refresh(&mut self, token: Option<&str>, user_json: Option<&str>) {
        *self = Self::from_storage(token, user_json);
    }

    /// Drop all session material (token expired or user signed out).
    pub fn invalidate(&mut self) {
        self.user = None;
        self.token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session() {
        let session = SessionContext::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.user_id(), None);
        assert_eq!(session.role(), Role::Customer);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_from_storage_both_present() {
        let session =
            SessionContext::from_storage(Some("tok-1"), Some(r#"{"id": 4, "role": "customer"}"#));
        assert!(session.is_authenticated());
        assert_eq!(session.user_id(), Some(UserId::new(4)));
        assert_eq!(session.token(), Some("tok-1"));
    }

    #[test]
    fn test_from_storage_token_without_user() {
        let session = SessionContext::from_storage(Some("tok-1"), None);
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), Some("tok-1"));
    }

    #[test]
    fn test_from_storage_malformed_user() {
        let session = SessionContext::from_storage(Some("tok-1"), Some("{{nope"));
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_invalidate_clears_everything() {
        let mut session = SessionContext::authenticated(AuthUser::customer(UserId::new(1)), "tok");
        session.invalidate();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert!(session.user().is_none());
    }

    #[test]
    fn test_refresh_replaces_state() {
        let mut session = SessionContext::anonymous();
        session.refresh(Some("tok-2"), Some(r#"{"id": 9, "role": "admin"}"#));
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Role::Admin);

        session.refresh(None, None);
        assert!(!session.is_authenticated());
    }
}
