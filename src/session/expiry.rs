//! Remaining lifetime of a derived session.
//!
//! The remaining time is rendered the way a day-normalized duration prints
//! (`[N day[s], ]H:MM`), seconds dropped. A session that ran out ten
//! minutes ago reads `-1 day, 23:50`, so "expired" is simply "starts
//! with `-`".

use chrono::{DateTime, TimeDelta, Utc};
use tracing::warn;

use crate::environment::EnvMap;

/// Derived key holding the session's ISO-8601 expiration.
pub const EXPIRES_KEY: &str = "AWS_SESSION_EXPIRES";

/// Rendered when there is no (usable) expiration.
pub const NO_SESSION: &str = "-";

const SECS_PER_DAY: i64 = 86_400;

/// Parsed expiration instant of `derived`, if any.
pub fn expiration(derived: &EnvMap) -> Option<DateTime<Utc>> {
    let raw = derived.get(EXPIRES_KEY).filter(|v| !v.is_empty())?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            warn!(expiration = %raw, error = %e, "unparseable session expiration");
            None
        }
    }
}

/// Time left on the session as `H:MM`, or `-` when there is none.
pub fn remaining(derived: &EnvMap) -> String {
    remaining_at(derived, Utc::now())
}

pub fn remaining_at(derived: &EnvMap, now: DateTime<Utc>) -> String {
    match expiration(derived) {
        Some(expires) => format_remaining(expires - now),
        None => NO_SESSION.to_string(),
    }
}

/// True when there is no session or it has run out.
pub fn is_expired(derived: &EnvMap) -> bool {
    is_expired_at(derived, Utc::now())
}

pub fn is_expired_at(derived: &EnvMap, now: DateTime<Utc>) -> bool {
    let left = remaining_at(derived, now);
    left == NO_SESSION || left.starts_with('-')
}

fn format_remaining(delta: TimeDelta) -> String {
    // Floor to whole seconds so -0.5s counts as a second in the past.
    let mut secs = delta.num_seconds();
    if delta.subsec_nanos() < 0 {
        secs -= 1;
    }

    let days = secs.div_euclid(SECS_PER_DAY);
    let rest = secs.rem_euclid(SECS_PER_DAY);
    let hours = rest / 3600;
    let minutes = (rest % 3600) / 60;

    if days == 0 {
        format!("{}:{:02}", hours, minutes)
    } else {
        let plural = if days.abs() == 1 { "" } else { "s" };
        format!("{} day{}, {}:{:02}", days, plural, hours, minutes)
    }
}
