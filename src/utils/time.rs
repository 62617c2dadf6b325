//! Time and timestamp utilities

use chrono::{SecondsFormat, Utc};

/// Current wall-clock time as an RFC 3339 / ISO-8601 string, e.g.
/// `2025-05-15T14:00:00.123Z`.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
