/// Stored in place of a token when the backend was unreachable at sign-in.
pub const OFFLINE_TOKEN: &str = "offline-token";

/// Who is talking to the backend, passed explicitly to every operation.
#[derive(Clone, PartialEq, Eq)]
pub enum Session {
    Online { token: String },
    Offline,
}

impl Session {
    pub fn online(token: impl Into<String>) -> Self {
        Self::Online {
            token: token.into(),
        }
    }

    /// Parse the persisted form. Blank values mean no session.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim() {
            "" => None,
            OFFLINE_TOKEN => Some(Self::Offline),
            token => Some(Self::online(token)),
        }
    }

    pub fn as_stored(&self) -> &str {
        match self {
            Self::Online { token } => token,
            Self::Offline => OFFLINE_TOKEN,
        }
    }

    pub fn bearer_token(&self) -> Option<&str> {
        match self {
            Self::Online { token } => Some(token),
            Self::Offline => None,
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online { .. })
    }
}

// Tokens stay out of logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online { .. } => f.write_str("Online { token: <redacted> }"),
            Self::Offline => f.write_str("Offline"),
        }
    }
}
