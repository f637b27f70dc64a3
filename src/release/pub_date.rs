use crate::core::error::SyncResult;
use chrono::{DateTime, DurationRound, TimeDelta, Utc};

/// Timestamp format the updater expects, always with a literal `Z`
pub const PUB_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Floor a UTC time to the previous :00 or :30 and format it
///
/// Seconds and sub-seconds are dropped, so 10:47:12 becomes 10:30:00.
pub fn round_pub_date(now: DateTime<Utc>) -> SyncResult<String> {
  let floored = now.duration_trunc(TimeDelta::minutes(30))?;
  Ok(floored.format(PUB_DATE_FORMAT).to_string())
}

/// `pub_date` for a release published now
pub fn current_pub_date() -> SyncResult<String> {
  round_pub_date(Utc::now())
}
