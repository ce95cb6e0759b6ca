use chrono::{Local, NaiveDate, NaiveTime};

/// The user's current calendar date.
///
/// Local rather than UTC, so an evening entry lands on the day the user sees.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Time of day the way entries display it, e.g. `8:30 AM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

pub fn current_time() -> String {
    format_time(Local::now().time())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_hour_format() {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(format_time(t(8, 30)), "8:30 AM");
        assert_eq!(format_time(t(13, 15)), "1:15 PM");
        assert_eq!(format_time(t(0, 5)), "12:05 AM");
        assert_eq!(format_time(t(12, 0)), "12:00 PM");
    }

    #[test]
    fn current_time_has_meridiem() {
        let now = current_time();
        assert!(now.ends_with("AM") || now.ends_with("PM"));
    }
}
