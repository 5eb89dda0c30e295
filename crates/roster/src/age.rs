use chrono::{Datelike, NaiveDate};

/// Whole elapsed years between `birth` and `today`.
///
/// Decrements by one when today's (month, day) precedes the birth
/// (month, day). Pure and deterministic given its two inputs; callers
/// inject `today` rather than reading a clock.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}
