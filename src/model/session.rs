use serde::{Deserialize, Serialize};

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Authentication state. `Authenticated` carries the user, so
/// "authenticated implies user present" holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Not signed in (also the result of a 401/403 probe)
    Unauthenticated,
    /// The startup "who am I" probe is in flight
    Loading,
    Authenticated(User),
    /// The probe failed for a non-auth reason (network, server error).
    /// Rendered the same as signed-out; the cause is kept for diagnostics.
    Failed,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u-1".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
        }
    }

    #[test]
    fn authenticated_carries_user() {
        let state = SessionState::Authenticated(sample_user());
        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("u-1"));
    }

    #[test]
    fn other_states_have_no_user() {
        for state in [
            SessionState::Unauthenticated,
            SessionState::Loading,
            SessionState::Failed,
        ] {
            assert!(!state.is_authenticated());
            assert!(state.user().is_none());
        }
    }
}
