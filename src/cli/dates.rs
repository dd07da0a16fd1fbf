use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use workcadence::error::InputError;

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a command-line date. Plain dates are taken at midnight.
pub fn parse_date(input: &str) -> Result<NaiveDateTime, InputError> {
    let input_trimmed = input.trim();

    let date_err = match NaiveDate::parse_from_str(input_trimmed, "%Y-%m-%d") {
        Ok(date) => return Ok(date.and_time(NaiveTime::default())),
        Err(e) => e,
    };

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input_trimmed, format) {
            return Ok(datetime);
        }
    }

    Err(InputError::InvalidDate {
        input: input.to_string(),
        source: date_err,
    })
}
