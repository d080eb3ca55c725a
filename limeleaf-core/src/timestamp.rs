use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    OffsetDateTime,
};

const DATE_FORMAT: &[FormatItem] = format_description!("[year]-[month]-[day]");

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Relative age of a timestamp, e.g. `3 hours ago`.
///
/// Unparsable timestamps are returned unchanged.
#[must_use]
pub fn time_since(created: &str, now: OffsetDateTime) -> String {
    let Ok(created_at) = OffsetDateTime::parse(created, &Rfc3339) else {
        return created.to_string();
    };
    let seconds = (now - created_at).whole_seconds();
    match seconds {
        s if s < MINUTE => "just now".to_string(),
        s if s < HOUR => plural(s / MINUTE, "minute"),
        s if s < DAY => plural(s / HOUR, "hour"),
        s if s < MONTH => plural(s / DAY, "day"),
        s if s < YEAR => plural(s / MONTH, "month"),
        s => plural(s / YEAR, "year"),
    }
}

/// Calendar date of a timestamp, e.g. `2024-03-01`.
#[must_use]
pub fn date(created: &str) -> String {
    OffsetDateTime::parse(created, &Rfc3339)
        .ok()
        .and_then(|dt| dt.format(DATE_FORMAT).ok())
        .unwrap_or_else(|| created.to_string())
}

#[cfg(test)]
mod tests {
    use time::{macros::datetime, Duration};

    use super::*;

    const CREATED: &str = "2024-03-01T10:00:00.000Z";

    fn since(offset: Duration) -> String {
        time_since(CREATED, datetime!(2024-03-01 10:00 UTC) + offset)
    }

    #[test]
    fn relative_ages() {
        assert_eq!(since(Duration::seconds(30)), "just now");
        assert_eq!(since(Duration::minutes(1)), "1 minute ago");
        assert_eq!(since(Duration::minutes(59)), "59 minutes ago");
        assert_eq!(since(Duration::hours(5)), "5 hours ago");
        assert_eq!(since(Duration::days(2)), "2 days ago");
        assert_eq!(since(Duration::days(65)), "2 months ago");
        assert_eq!(since(Duration::days(800)), "2 years ago");
    }

    #[test]
    fn future_timestamps_are_just_now() {
        assert_eq!(since(Duration::minutes(-5)), "just now");
    }

    #[test]
    fn invalid_timestamps_are_kept() {
        assert_eq!(time_since("yesterday", OffsetDateTime::UNIX_EPOCH), "yesterday");
        assert_eq!(date("yesterday"), "yesterday");
    }

    #[test]
    fn calendar_date() {
        assert_eq!(date(CREATED), "2024-03-01");
    }
}
