//! Calendar helpers

use std::time::{SystemTime, UNIX_EPOCH};

/// Current year in UTC
pub fn current_year() -> i64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    year_from_unix_days(secs.div_euclid(86_400))
}

/// Gregorian year of a day counted from 1970-01-01
pub fn year_from_unix_days(days: i64) -> i64 {
    // Civil-from-days over 400-year eras starting at 0000-03-01
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400;
    if month <= 2 { year + 1 } else { year }
}
