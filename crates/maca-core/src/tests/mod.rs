
use crate::UserProfile;

use chrono::{DateTime, TimeZone, Utc};

pub(crate) fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

pub(crate) fn profile_with(credits: u32, reset: DateTime<Utc>) -> UserProfile {
    let mut profile = crate::guest_profile(reset);
    profile.daily_credits = credits;
    profile
}
