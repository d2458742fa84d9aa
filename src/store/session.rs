use tracing::warn;

use crate::api::endpoints;
use crate::api::gateway::Gateway;
use crate::model::session::{SessionState, User};

/// Owns authentication state for the process.
///
/// The startup probe runs once; after that the state is trusted until
/// explicitly changed by a login flow or a logout.
#[derive(Debug)]
pub struct SessionManager {
    state: SessionState,
    /// Diagnostic record of the last probe failure; never shown to the user
    last_error: Option<String>,
}

impl SessionManager {
    pub fn new() -> Self {
        SessionManager {
            state: SessionState::Unauthenticated,
            last_error: None,
        }
    }

    /// The "optionally logged in" probe: ask the server who we are.
    ///
    /// A 401/403 means "not signed in" and lands in `Unauthenticated`;
    /// any other failure lands in `Failed` with the cause recorded. Neither
    /// is surfaced as a hard error — downstream UI just renders logged-out.
    pub async fn initialize(&mut self, gateway: &dyn Gateway) {
        self.state = SessionState::Loading;
        match endpoints::current_user(gateway).await {
            Ok(user) => {
                self.state = SessionState::Authenticated(user);
                self.last_error = None;
            }
            Err(e) if e.is_auth_rejection() => {
                warn!("session probe rejected: {e}");
                self.state = SessionState::Unauthenticated;
                self.last_error = Some(e.to_string());
            }
            Err(e) => {
                warn!("session probe failed: {e}");
                self.state = SessionState::Failed;
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Explicit override used right after a login/registration flow
    /// succeeds; bypasses the network probe.
    pub fn set_authenticated(&mut self, user: User, is_authenticated: bool) {
        self.state = if is_authenticated {
            SessionState::Authenticated(user)
        } else {
            SessionState::Unauthenticated
        };
    }

    /// Tear the session down to signed-out.
    pub fn log_out(&mut self) {
        self.state = SessionState::Unauthenticated;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
