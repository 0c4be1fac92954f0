use crate::domain::models::concert::Concert;
use chrono::NaiveDate;

/// Concerts whose event_date falls on the given calendar day (UTC),
/// regardless of time of day.
pub fn concerts_on_day(concerts: &[Concert], day: NaiveDate) -> Vec<Concert> {
    concerts
        .iter()
        .filter(|c| c.event_date.date_naive() == day)
        .cloned()
        .collect()
}

/// Distinct, sorted set of days that have at least one concert. Used to
/// mark the calendar widget.
pub fn concert_dates(concerts: &[Concert]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = concerts.iter().map(|c| c.event_date.date_naive()).collect();
    dates.sort();
    dates.dedup();
    dates
}
