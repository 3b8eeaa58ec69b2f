use chrono::FixedOffset;

use crate::model::Timestamp;

/// Shown in place of a time for steps that have not happened yet.
pub const PLACEHOLDER: &str = "--/--/---- --:--";

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Formats a timestamp for display in the given offset.
pub fn display(timestamp: Option<Timestamp>, offset: FixedOffset) -> String {
    match timestamp {
        Some(timestamp) => timestamp
            .with_timezone(&offset)
            .format(DISPLAY_FORMAT)
            .to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Builds a display offset from minutes east of UTC, `None` when it is out of range.
pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
}
