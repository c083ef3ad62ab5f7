use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time left until the target, split into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownBreakdown {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl CountdownBreakdown {
    pub const ZERO: CountdownBreakdown = CountdownBreakdown {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Breaks `target - now` into days, hours, minutes and seconds.
///
/// Always recomputed from the absolute instants, so a late tick corrects
/// itself. Once `now` reaches the target the result stays at zero.
pub fn compute(target: DateTime<Utc>, now: DateTime<Utc>) -> CountdownBreakdown {
    let distance = (target - now).num_milliseconds();
    if distance <= 0 {
        return CountdownBreakdown::ZERO;
    }
    CountdownBreakdown {
        days: (distance / MS_PER_DAY) as u64,
        hours: ((distance % MS_PER_DAY) / MS_PER_HOUR) as u8,
        minutes: ((distance % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
        seconds: ((distance % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
    }
}

/// Two-digit display, matching the timer blocks. Days may run longer.
pub fn pad2(value: u64) -> String {
    format!("{:02}", value)
}

/// Resolves a `YYYY-MM-DDTHH:MM:SS` wall-clock time in the given zone.
///
/// Gaps and folds around DST changes take the earliest valid instant; a time
/// that cannot be mapped at all is read as UTC.
pub fn resolve_target_in<Tz: TimeZone>(zone: &Tz, local: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(local, "%Y-%m-%dT%H:%M:%S").ok()?;
    let resolved = zone
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive));
    Some(resolved)
}

/// Same as [`resolve_target_in`] against the browser's local zone.
pub fn resolve_local_target(local: &str) -> Option<DateTime<Utc>> {
    resolve_target_in(&Local, local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(s: &str) -> DateTime<Utc> {
        resolve_target_in(&Utc, s).unwrap()
    }

    fn total_millis(b: &CountdownBreakdown) -> i64 {
        b.days as i64 * MS_PER_DAY
            + b.hours as i64 * MS_PER_HOUR
            + b.minutes as i64 * MS_PER_MINUTE
            + b.seconds as i64 * MS_PER_SECOND
    }

    #[test]
    fn one_hour_before_the_ceremony() {
        let target = at("2024-12-14T18:00:00");
        let now = at("2024-12-14T17:00:00");
        assert_eq!(
            compute(target, now),
            CountdownBreakdown { days: 0, hours: 1, minutes: 0, seconds: 0 }
        );
    }

    #[test]
    fn past_target_is_zero() {
        let target = at("2024-12-14T18:00:00");
        let now = at("2024-12-15T00:00:00");
        assert!(compute(target, now).is_zero());
    }

    #[test]
    fn exactly_at_target_is_zero() {
        let target = at("2024-12-14T18:00:00");
        assert!(compute(target, target).is_zero());
    }

    #[test]
    fn mixed_units() {
        let target = at("2024-12-14T18:00:00");
        let now = target - Duration::days(3) - Duration::hours(4) - Duration::minutes(5) - Duration::seconds(6);
        assert_eq!(
            compute(target, now),
            CountdownBreakdown { days: 3, hours: 4, minutes: 5, seconds: 6 }
        );
    }

    #[test]
    fn sub_second_remainder_is_truncated() {
        let target = at("2024-12-14T18:00:00");
        let now = target - Duration::milliseconds(1_999);
        assert_eq!(compute(target, now).seconds, 1);
        let now = target - Duration::milliseconds(999);
        assert_eq!(compute(target, now), CountdownBreakdown::ZERO);
    }

    #[test]
    fn breakdown_reconstructs_the_distance_and_stays_in_range() {
        let target = at("2024-12-14T18:00:00");
        let mut offset: i64 = 1;
        while offset < 400 * MS_PER_DAY {
            let now = target - Duration::milliseconds(offset);
            let b = compute(target, now);
            assert!(b.hours <= 23 && b.minutes <= 59 && b.seconds <= 59);
            assert_eq!(total_millis(&b), offset - offset % MS_PER_SECOND);
            assert_eq!(compute(target, now), b);
            offset = offset * 3 + 7;
        }
    }

    #[test]
    fn padding() {
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(123), "123");
    }

    #[test]
    fn malformed_target_is_rejected() {
        assert!(resolve_target_in(&Utc, "December 14th").is_none());
    }
}
