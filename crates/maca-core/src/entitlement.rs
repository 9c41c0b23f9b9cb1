//! Credit and subscription rules.
//!
//! Every function takes the profile by reference and `now` explicitly, and
//! returns a new profile. Nothing here touches storage.

use crate::UserProfile;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Credits restored once per calendar day for non-subscribers.
pub const DAILY_CREDIT_GRANT: u32 = 10;

/// Sentinel credit count written on subscribed profiles.
pub const UNLIMITED_CREDITS: u32 = 9999;

pub const SUBSCRIPTION_TERM_DAYS: i64 = 30;

/// Fresh local-only profile with the daily grant.
pub fn guest_profile(now: DateTime<Utc>) -> UserProfile {
    UserProfile {
        id: format!("user-{}", Uuid::new_v4().simple()),
        email: String::new(),
        company_name: String::new(),
        company_type: String::new(),
        company_logo: None,
        description: String::new(),
        is_subscribed: false,
        daily_credits: DAILY_CREDIT_GRANT,
        last_credit_reset: now,
        subscription_expiry: None,
    }
}

/// Whether the paid term still covers `now`. A subscribed profile with no
/// expiry is treated as lapsed.
pub fn subscription_active(profile: &UserProfile, now: DateTime<Utc>) -> bool {
    profile.is_subscribed && profile.subscription_expiry.is_some_and(|expiry| expiry > now)
}

/// Apply the load rules: lapsed subscriptions are downgraded first, then the
/// daily grant is restored when the UTC date of the last reset is not today.
pub fn refresh(profile: &UserProfile, now: DateTime<Utc>) -> UserProfile {
    let mut next = profile.clone();

    if next.is_subscribed && !subscription_active(&next, now) {
        next.is_subscribed = false;
        next.daily_credits = DAILY_CREDIT_GRANT;
    }

    if next.last_credit_reset.date_naive() != now.date_naive() {
        next.daily_credits = DAILY_CREDIT_GRANT;
        next.last_credit_reset = now;
    }

    next
}

pub fn grant_subscription(profile: &UserProfile, term_days: i64, now: DateTime<Utc>) -> UserProfile {
    UserProfile {
        is_subscribed: true,
        daily_credits: UNLIMITED_CREDITS,
        subscription_expiry: Some(now + Duration::days(term_days)),
        ..profile.clone()
    }
}

/// Spend one credit. Subscribers are never debited; the count saturates at 0.
pub fn debit_credit(profile: &UserProfile) -> UserProfile {
    if profile.is_subscribed {
        return profile.clone();
    }

    UserProfile {
        daily_credits: profile.daily_credits.saturating_sub(1),
        ..profile.clone()
    }
}

/// Whole days left on the paid term, rounded up. Zero without a term.
pub fn days_remaining(profile: &UserProfile, now: DateTime<Utc>) -> i64 {
    let Some(expiry) = profile.subscription_expiry else {
        return 0;
    };
    if !profile.is_subscribed || expiry <= now {
        return 0;
    }

    let seconds = (expiry - now).num_seconds();
    let day = Duration::days(1).num_seconds();
    (seconds + day - 1) / day
}
