//! Human-readable rendering of counts, speeds, and ages.
//!
//! Output is fixed to English. Rounding is half-up at one decimal digit.

/// Speeds strictly above this many views per hour render in thousands.
pub const SPEED_THOUSANDS_THRESHOLD: f64 = 1000.0;

/// Render a counter with `K`/`M` suffixes.
///
/// `999` → `"999"`, `1500` → `"1.5K"`, `2_450_120` → `"2.5M"`.
#[must_use]
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        let tenths = round_half_up(n, 100_000);
        format!("{}.{}M", tenths / 10, tenths % 10)
    } else if n >= 1_000 {
        let tenths = round_half_up(n, 100);
        format!("{}.{}K", tenths / 10, tenths % 10)
    } else {
        n.to_string()
    }
}

/// Integer `n / divisor`, rounding a remainder of half or more upwards.
fn round_half_up(n: u64, divisor: u64) -> u64 {
    n / divisor + u64::from(n % divisor >= divisor / 2)
}

/// Render a growth rate in views per hour.
///
/// Above 1000 views/hr the rate is shown in thousands with one decimal,
/// otherwise as a whole number.
#[must_use]
pub fn format_speed(rate: f64) -> String {
    if rate > SPEED_THOUSANDS_THRESHOLD {
        let thousands = (rate / 100.0).round() / 10.0;
        format!("{thousands:.1}K views/hr")
    } else {
        format!("{} views/hr", rate.round())
    }
}

/// Render how long ago a video was published.
///
/// Hours are only used while `days_since_published` is zero, so anything from
/// 1 to 23 hours reads in hours and 24 hours onward reads in days.
///
/// Negative days are not clamped: an item dated two days in the future
/// renders as `"-2 days ago"`.
#[must_use]
pub fn format_age(days_since_published: i64, hours_since_published: i64) -> String {
    if days_since_published == 0 {
        plural(hours_since_published, "hour")
    } else {
        plural(days_since_published, "day")
    }
}

fn plural(value: i64, unit: &str) -> String {
    if value == 1 {
        format!("{value} {unit} ago")
    } else {
        format!("{value} {unit}s ago")
    }
}
