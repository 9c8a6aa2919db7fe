//! Child age computation.
//!
//! Ages are always derived from the stored birth date (`YYYY-MM-DD`) and the
//! evaluation date; they are never stored. The computation is calendar based:
//! a month counts once the same day of month has been reached, so month
//! lengths vary and no days/30 approximation is involved.

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BirthDateError {
    #[error("birth date must be in YYYY-MM-DD format")]
    Format,
    #[error("birth date component '{0}' is not a number")]
    NotANumber(String),
    #[error("{0} is not a valid calendar date")]
    NotACalendarDate(String),
    #[error("birth date {0} is in the future")]
    InFuture(NaiveDate),
}

/// Parse a `YYYY-MM-DD` birth date.
///
/// Exactly three dash-separated numeric components are required and they must
/// name a real calendar day.
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate, BirthDateError> {
    let parts: Vec<&str> = raw.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(BirthDateError::Format);
    }

    let year: i32 = parse_component(parts[0])?;
    let month: u32 = parse_component(parts[1])?;
    let day: u32 = parse_component(parts[2])?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| BirthDateError::NotACalendarDate(raw.trim().to_string()))
}

fn parse_component<T: std::str::FromStr>(part: &str) -> Result<T, BirthDateError> {
    part.parse()
        .map_err(|_| BirthDateError::NotANumber(part.to_string()))
}

/// Parse a birth date and reject dates after `today`
pub fn validate_birth_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, BirthDateError> {
    let birth_date = parse_birth_date(raw)?;
    if birth_date > today {
        return Err(BirthDateError::InFuture(birth_date));
    }
    Ok(birth_date)
}

/// Completed months between `birth_date` and `today`.
///
/// Starts from the year/month difference, drops one month when the day of
/// month has not been reached yet, then folds a negative month count into
/// the years. Returns `None` when `birth_date` is after `today`.
pub fn months_between(birth_date: NaiveDate, today: NaiveDate) -> Option<u32> {
    let mut years = today.year() - birth_date.year();
    let mut months = today.month0() as i32 - birth_date.month0() as i32;

    if today.day() < birth_date.day() {
        months -= 1;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    u32::try_from(years * 12 + months).ok()
}

/// Age in completed months, or `None` ("unknown") when the birth date is
/// absent, malformed, or later than `today`.
pub fn age_in_months(birth_date: Option<&str>, today: NaiveDate) -> Option<u32> {
    let birth_date = parse_birth_date(birth_date?).ok()?;
    months_between(birth_date, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_born_today_is_zero_months() {
        assert_eq!(age_in_months(Some("2024-06-15"), date(2024, 6, 15)), Some(0));
    }

    #[test]
    fn test_month_counts_once_day_is_reached() {
        assert_eq!(age_in_months(Some("2024-01-15"), date(2024, 6, 14)), Some(4));
        assert_eq!(age_in_months(Some("2024-01-15"), date(2024, 6, 15)), Some(5));
    }

    #[test]
    fn test_crossing_year_boundary() {
        assert_eq!(age_in_months(Some("2023-11-20"), date(2024, 1, 19)), Some(1));
        assert_eq!(age_in_months(Some("2023-11-20"), date(2024, 1, 20)), Some(2));
        assert_eq!(age_in_months(Some("2019-03-01"), date(2024, 3, 1)), Some(60));
        assert_eq!(age_in_months(Some("2019-03-02"), date(2024, 3, 1)), Some(59));
    }

    #[test]
    fn test_uses_calendar_months_not_thirty_day_blocks() {
        // 28 days, but a full calendar month
        assert_eq!(age_in_months(Some("2023-02-01"), date(2023, 3, 1)), Some(1));
        // 30 days, but the 31st has not come round yet
        assert_eq!(age_in_months(Some("2024-01-31"), date(2024, 3, 1)), Some(1));
        assert_eq!(age_in_months(Some("2024-01-31"), date(2024, 2, 29)), Some(0));
    }

    #[test]
    fn test_unknown_when_missing_or_malformed() {
        let today = date(2024, 6, 15);
        assert_eq!(age_in_months(None, today), None);
        assert_eq!(age_in_months(Some(""), today), None);
        assert_eq!(age_in_months(Some("2024/01/15"), today), None);
        assert_eq!(age_in_months(Some("2024-01"), today), None);
        assert_eq!(age_in_months(Some("2024-01-15-01"), today), None);
        assert_eq!(age_in_months(Some("2024-xx-15"), today), None);
        assert_eq!(age_in_months(Some("2023-02-30"), today), None);
    }

    #[test]
    fn test_future_birth_date_is_unknown() {
        assert_eq!(age_in_months(Some("2024-06-16"), date(2024, 6, 15)), None);
        assert_eq!(months_between(date(2025, 1, 1), date(2024, 6, 15)), None);
    }

    #[test]
    fn test_parse_birth_date_errors() {
        assert_eq!(parse_birth_date("20240115"), Err(BirthDateError::Format));
        assert_eq!(
            parse_birth_date("2024-ab-15"),
            Err(BirthDateError::NotANumber("ab".to_string()))
        );
        assert_eq!(
            parse_birth_date("2023-04-31"),
            Err(BirthDateError::NotACalendarDate("2023-04-31".to_string()))
        );
        assert_eq!(parse_birth_date("2000-02-29"), Ok(date(2000, 2, 29)));
    }

    #[test]
    fn test_validate_birth_date_rejects_future() {
        let today = date(2024, 6, 15);
        assert!(validate_birth_date("2024-06-15", today).is_ok());
        assert_eq!(
            validate_birth_date("2024-07-01", today),
            Err(BirthDateError::InFuture(date(2024, 7, 1)))
        );
    }
}
