//! Auth sub-client: login, session restore, logout.

use crate::auth::{LoginRequest, LoginResponse, Session, UserProfile, TOKEN_KEY, USER_KEY};
use crate::client::{Action, NuamClient};
use crate::error::{HttpError, SdkError, StoreError};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a NuamClient,
}

impl<'a> Auth<'a> {
    /// Login with username and password and return the user profile.
    ///
    /// On success the token and user are persisted and the in-memory session
    /// is established; every later request carries the token. On failure no
    /// state changes and the backend's message is propagated unchanged.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, SdkError> {
        let _guard = self.client.in_flight.begin(Action::Login)?;

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let url = self.client.http.api_url("/login");
        let resp: LoginResponse = self
            .client
            .http
            .post(&url, Some(&request), "Login failed")
            .await?;

        let (user, token) = match (resp.user, resp.session_token) {
            (Some(user), Some(token)) if !token.is_empty() => (user, token),
            _ => {
                return Err(HttpError::MalformedResponse(
                    "login response is missing user or session_token".to_string(),
                )
                .into())
            }
        };

        self.persist(&user, &token)?;
        *self.client.session.write().await = Some(Session::new(user.clone(), token));

        tracing::info!(user = %user.name, role = %user.role, "logged in");
        Ok(user)
    }

    /// Re-establish the session persisted by an earlier login.
    ///
    /// Returns `None` (and clears both persisted fields) when either field is
    /// missing or the stored user record does not parse. Never fails.
    pub async fn restore(&self) -> Option<UserProfile> {
        let store = &self.client.store;
        let token = read_or_warn(store.get(TOKEN_KEY), TOKEN_KEY);
        let raw_user = read_or_warn(store.get(USER_KEY), USER_KEY);

        let restored = match (raw_user, token) {
            (Some(raw), Some(token)) if !token.is_empty() => {
                match serde_json::from_str::<UserProfile>(&raw) {
                    Ok(user) => Some((user, token)),
                    Err(e) => {
                        tracing::warn!(error = %e, "discarding corrupt persisted user record");
                        None
                    }
                }
            }
            (None, None) => {
                tracing::debug!("no persisted session");
                *self.client.session.write().await = None;
                return None;
            }
            _ => {
                tracing::warn!("discarding partial persisted session");
                None
            }
        };

        match restored {
            Some((user, token)) => {
                *self.client.session.write().await = Some(Session::new(user.clone(), token));
                tracing::info!(user = %user.name, role = %user.role, "session restored");
                Some(user)
            }
            None => {
                self.clear_persisted();
                *self.client.session.write().await = None;
                None
            }
        }
    }

    /// Logout: best-effort server call, then unconditionally clears the
    /// in-memory session, its persisted form, and all cached data.
    ///
    /// A second call while one is outstanding is a no-op.
    pub async fn logout(&self) {
        let Ok(_guard) = self.client.in_flight.begin(Action::Logout) else {
            return;
        };

        let url = self.client.http.api_url("/logout");
        match self
            .client
            .http
            .post::<serde_json::Value, ()>(&url, None, "Logout failed")
            .await
        {
            Ok(_) => tracing::debug!("server session closed"),
            Err(e) => tracing::warn!(error = %e, "logout call failed; clearing local session anyway"),
        }

        *self.client.session.write().await = None;
        self.clear_persisted();
        self.client.clear_all_caches().await;
        tracing::info!("logged out");
    }

    /// Profile of the current session, if any.
    pub async fn current_user(&self) -> Option<UserProfile> {
        self.client
            .session
            .read()
            .await
            .as_ref()
            .map(|s| s.user().clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.client.session.read().await.is_some()
    }

    fn persist(&self, user: &UserProfile, token: &str) -> Result<(), SdkError> {
        let raw_user = serde_json::to_string(user).map_err(StoreError::from)?;
        let result = self
            .client
            .store
            .set(TOKEN_KEY, token)
            .and_then(|_| self.client.store.set(USER_KEY, &raw_user));
        if let Err(e) = result {
            // Never leave one field without the other.
            self.clear_persisted();
            return Err(e.into());
        }
        Ok(())
    }

    fn clear_persisted(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.client.store.remove(key) {
                tracing::warn!(key, error = %e, "failed to clear persisted session field");
            }
        }
    }
}

fn read_or_warn(result: Result<Option<String>, StoreError>, key: &str) -> Option<String> {
    result.unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "failed to read persisted session field");
        None
    })
}
