use chrono::{DateTime, Utc};

/// Relative-time label for a past timestamp: minutes under an hour, hours
/// under a day, days otherwise with no upper bound. No "just now" tier.
pub fn time_ago(past: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - past;
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 60 {
        format!("{} minutes ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else {
        format!("{} days ago", days)
    }
}
