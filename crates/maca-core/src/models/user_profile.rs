use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account record carrying the entitlement state.
///
/// Treated as a value: the entitlement functions return a new profile
/// instead of mutating one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub is_subscribed: bool,
    #[serde(default)]
    pub daily_credits: u32,
    #[serde(default = "Utc::now")]
    pub last_credit_reset: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_expiry: Option<DateTime<Utc>>,
}
