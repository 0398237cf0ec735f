use super::Violation;
use formguard_types::ids;
use once_cell::sync::Lazy;
use regex::Regex;
use time::{Date, Month};

/// Two-digit years are never taken literally.
const MIN_YEAR: i32 = 100;

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("date regex"));

/// Split a `dd/mm/yyyy` value into `(day, month, year)` without range checks.
fn components(value: &str) -> Option<(u8, u8, i32)> {
    let caps = DATE_RE.captures(value)?;
    let day = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    Some((day, month, year))
}

/// Parse a `dd/mm/yyyy` value into a real calendar date.
///
/// The constructed date must round-trip to the same day, month and year,
/// so `31/02/2020` and `00/01/2000` yield `None`. Years below 0100 yield `None`.
pub fn parse(value: &str) -> Option<Date> {
    let (day, month, year) = components(value)?;
    if year < MIN_YEAR {
        return None;
    }
    let date = Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()?;
    let round_trips =
        date.day() == day && u8::from(date.month()) == month && date.year() == year;
    round_trips.then_some(date)
}

pub fn run(value: &str) -> Result<(), Violation> {
    if components(value).is_none() {
        return Err(Violation::new(
            ids::CODE_MALFORMED_DATE,
            "Birth date must use the dd/mm/yyyy format",
            "Write the date as dd/mm/yyyy or leave it empty.",
        ));
    }
    if parse(value).is_none() {
        return Err(Violation::new(
            ids::CODE_NONEXISTENT_DATE,
            "Birth date is not a real calendar date",
            "Pick a day that exists in that month and year.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_real_dates() {
        assert_eq!(parse("14/07/1990"), Some(date!(1990 - 07 - 14)));
        assert_eq!(parse("29/02/2024"), Some(date!(2024 - 02 - 29)));
        assert_eq!(parse("31/12/1999"), Some(date!(1999 - 12 - 31)));
    }

    #[test]
    fn rejects_days_and_months_out_of_range() {
        assert_eq!(parse("31/02/2020"), None);
        assert_eq!(parse("29/02/2023"), None);
        assert_eq!(parse("31/04/2021"), None);
        assert_eq!(parse("00/01/2000"), None);
        assert_eq!(parse("15/13/2000"), None);
        assert_eq!(parse("15/00/2000"), None);
    }

    #[test]
    fn rejects_years_below_one_hundred() {
        assert_eq!(parse("01/01/0050"), None);
        assert_eq!(parse("31/12/0099"), None);
        assert_eq!(run("01/01/0000").unwrap_err().code, ids::CODE_NONEXISTENT_DATE);
        assert_eq!(
            parse("01/01/0100"),
            Date::from_calendar_date(100, Month::January, 1).ok()
        );
    }

    #[test]
    fn shape_errors_are_distinguished_from_calendar_errors() {
        assert_eq!(run("1990-07-14").unwrap_err().code, ids::CODE_MALFORMED_DATE);
        assert_eq!(run("1/7/1990").unwrap_err().code, ids::CODE_MALFORMED_DATE);
        assert_eq!(run("٠١/٠٧/١٩٩٠").unwrap_err().code, ids::CODE_MALFORMED_DATE);
        assert_eq!(run("31/02/2020").unwrap_err().code, ids::CODE_NONEXISTENT_DATE);
        assert!(run("01/07/1990").is_ok());
    }
}
