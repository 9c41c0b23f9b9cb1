use maca_core::UserProfile;

/// What the remote backend said when asked for the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOutcome {
    Fetched(UserProfile),
    Unreachable,
    /// The backend answered but refused the session token.
    Rejected,
    /// No online session, so the backend was not asked.
    NotAttempted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    Remote,
    Local,
    /// Neither side had a profile.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub profile: Option<UserProfile>,
    pub source: ProfileSource,
    /// The stored session token is stale and must be dropped.
    pub forget_token: bool,
}

/// Picks the authoritative copy of the profile: remote when reachable,
/// otherwise the last local write.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconciliationPolicy;

impl ReconciliationPolicy {
    pub fn reconcile(&self, local: Option<UserProfile>, remote: RemoteOutcome) -> Reconciled {
        let forget_token = matches!(remote, RemoteOutcome::Rejected);

        match remote {
            RemoteOutcome::Fetched(profile) => Reconciled {
                profile: Some(profile),
                source: ProfileSource::Remote,
                forget_token,
            },
            RemoteOutcome::Unreachable | RemoteOutcome::Rejected | RemoteOutcome::NotAttempted => {
                let source = if local.is_some() {
                    ProfileSource::Local
                } else {
                    ProfileSource::None
                };
                Reconciled {
                    profile: local,
                    source,
                    forget_token,
                }
            }
        }
    }
}
