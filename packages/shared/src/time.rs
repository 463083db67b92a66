//! JST time helpers.

use std::fmt;

use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, Utc};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// JST offset in seconds (UTC+9)
const JST_OFFSET_SECS: i32 = 9 * 3600;

fn jst_offset() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).unwrap_or(Utc.fix())
}

/// Get the current time in JST.
pub fn now_jst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst_offset())
}

/// Format a JST time as RFC 3339 with millisecond precision.
pub fn to_jst_rfc3339(time: DateTime<FixedOffset>) -> String {
    time.with_timezone(&jst_offset())
        .to_rfc3339_opts(SecondsFormat::Millis, false)
}

/// Log timestamp formatter that prints the current time in JST.
#[derive(Debug, Clone, Copy, Default)]
pub struct JstTimer;

impl FormatTime for JstTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", to_jst_rfc3339(now_jst()))
    }
}
