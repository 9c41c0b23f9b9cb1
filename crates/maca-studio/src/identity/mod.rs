pub(crate) mod error;

use crate::identity::error::{IdentityError, Result as IdentityResult};
use crate::{
    LOCAL_USER_KEY, LocalStore, ReconciliationPolicy, RemoteOutcome, SESSION_TOKEN_KEY,
};

use std::sync::Arc;

use log::{info, warn};
use maca_client::{AccountBackend, AuthResponse, BackendError, Credentials, RegistrationRequest};
use maca_core::{Clock, Session, UserProfile, guest_profile, refresh};

/// Owns the persisted profile and session, reconciling the local copy with
/// the remote backend.
pub struct IdentityStore {
    local: Arc<dyn LocalStore>,
    backend: Arc<dyn AccountBackend>,
    clock: Arc<dyn Clock>,
    policy: ReconciliationPolicy,
}

impl IdentityStore {
    pub fn new(
        local: Arc<dyn LocalStore>,
        backend: Arc<dyn AccountBackend>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            local,
            backend,
            clock,
            policy: ReconciliationPolicy,
        }
    }

    /// Persisted session, if any.
    pub fn session(&self) -> IdentityResult<Option<Session>> {
        Ok(self
            .local
            .get(SESSION_TOKEN_KEY)?
            .as_deref()
            .and_then(Session::from_stored))
    }

    /// Last locally written profile. A corrupted record reads as absent.
    pub fn local_profile(&self) -> IdentityResult<Option<UserProfile>> {
        let Some(contents) = self.local.get(LOCAL_USER_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<UserProfile>(&contents) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!("Local profile is corrupted, ignoring it: {e}");
                Ok(None)
            }
        }
    }

    /// Load the effective profile and apply the entitlement load rules.
    ///
    /// The result is always written back locally, so the daily reset and
    /// expiry downgrade are persisted.
    pub async fn load(&self, session: Option<&Session>) -> IdentityResult<UserProfile> {
        let local = self.local_profile()?;
        let remote = self.fetch_remote(session).await;

        let reconciled = self.policy.reconcile(local, remote);
        if reconciled.forget_token {
            warn!("Backend refused the stored session token, clearing it");
            self.local.remove(SESSION_TOKEN_KEY)?;
        }
        info!("Profile loaded from {:?}", reconciled.source);

        let now = self.clock.now();
        let profile = reconciled.profile.unwrap_or_else(|| guest_profile(now));
        let refreshed = refresh(&profile, now);

        self.write_local(&refreshed)?;
        Ok(refreshed)
    }

    /// Persist locally, then mirror to the backend when online.
    ///
    /// Local failure is an error. Remote failure is logged and the local
    /// value stands; a remote echo replaces it.
    pub async fn save(
        &self,
        session: Option<&Session>,
        profile: &UserProfile,
    ) -> IdentityResult<UserProfile> {
        self.write_local(profile)?;

        let remote = match session.and_then(Session::bearer_token) {
            Some(token) => match self.backend.update_profile(token, profile).await {
                Ok(echo) => RemoteOutcome::Fetched(echo),
                Err(BackendError::Unauthorized { .. }) => {
                    warn!("Profile update refused, keeping local copy");
                    RemoteOutcome::Rejected
                }
                Err(e) => {
                    warn!("Profile update failed, keeping local copy: {e}");
                    RemoteOutcome::Unreachable
                }
            },
            None => RemoteOutcome::NotAttempted,
        };

        let reconciled = self.policy.reconcile(Some(profile.clone()), remote);
        if reconciled.forget_token {
            self.local.remove(SESSION_TOKEN_KEY)?;
        }

        match reconciled.profile {
            Some(saved) if saved != *profile => {
                self.write_local(&saved)?;
                Ok(saved)
            }
            Some(saved) => Ok(saved),
            None => Ok(profile.clone()),
        }
    }

    /// Register remotely, or create a local-only identity when the backend
    /// is unreachable.
    pub async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> IdentityResult<(Session, UserProfile)> {
        match self.backend.register(request).await {
            Ok(response) => self.adopt(response),
            Err(e) if e.is_network() => {
                warn!("Backend offline, creating local identity for {}", request.email);
                let mut profile = guest_profile(self.clock.now());
                profile.email = request.email.clone();
                profile.company_name = request.company_name.clone();
                profile.company_type = request.company_type.clone();
                profile.description = request.description.clone();

                self.persist(&Session::Offline, &profile)?;
                Ok((Session::Offline, profile))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Log in remotely, or reuse the stored local identity for the same
    /// email when the backend is unreachable.
    pub async fn login(&self, email: &str, password: &str) -> IdentityResult<(Session, UserProfile)> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.backend.login(&credentials).await {
            Ok(response) => self.adopt(response),
            Err(e) if e.is_network() => {
                let stored = self
                    .local_profile()?
                    .filter(|profile| profile.email.trim() == email.trim());

                let Some(profile) = stored else {
                    return Err(IdentityError::network_unavailable());
                };

                info!("Backend offline, signing {} in locally", profile.email);
                let profile = refresh(&profile, self.clock.now());
                self.persist(&Session::Offline, &profile)?;
                Ok((Session::Offline, profile))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Forget the session and the local identity.
    pub fn logout(&self) -> IdentityResult<()> {
        self.local.remove(SESSION_TOKEN_KEY)?;
        self.local.remove(LOCAL_USER_KEY)?;
        info!("Logged out");
        Ok(())
    }

    async fn fetch_remote(&self, session: Option<&Session>) -> RemoteOutcome {
        let Some(token) = session.and_then(Session::bearer_token) else {
            return RemoteOutcome::NotAttempted;
        };

        match self.backend.me(token).await {
            Ok(profile) => RemoteOutcome::Fetched(profile),
            Err(BackendError::Unauthorized { .. } | BackendError::Validation { .. }) => {
                RemoteOutcome::Rejected
            }
            Err(e) => {
                warn!("Backend unreachable, using local profile: {e}");
                RemoteOutcome::Unreachable
            }
        }
    }

    fn adopt(&self, response: AuthResponse) -> IdentityResult<(Session, UserProfile)> {
        let session = match response.token {
            Some(token) if !token.trim().is_empty() => Session::online(token),
            _ => Session::Offline,
        };
        let profile = refresh(&response.user, self.clock.now());

        self.persist(&session, &profile)?;
        info!("Signed in as {} ({:?})", profile.id, session);
        Ok((session, profile))
    }

    fn persist(&self, session: &Session, profile: &UserProfile) -> IdentityResult<()> {
        self.local.set(SESSION_TOKEN_KEY, session.as_stored())?;
        self.write_local(profile)
    }

    fn write_local(&self, profile: &UserProfile) -> IdentityResult<()> {
        let json = serde_json::to_string_pretty(profile)?;
        self.local.set(LOCAL_USER_KEY, &json)?;
        Ok(())
    }
}
