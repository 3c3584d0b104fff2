//! Conversion between `hh:mm:ss` / `mm:ss` strings and whole seconds

use thiserror::Error;

/// Whole seconds of countdown time
pub type Seconds = u64;

const SECS_IN_HOUR: Seconds = 3600;
const SECS_IN_MIN: Seconds = 60;

/// Error returned when a time string does not match `hh:mm:ss` or `mm:ss`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid time format {input:?}: {reason}")]
    Malformed { input: String, reason: &'static str },
}

impl ParseError {
    fn malformed(input: &str, reason: &'static str) -> Self {
        ParseError::Malformed {
            input: input.to_string(),
            reason,
        }
    }
}

/// Parse `hh:mm:ss` or `mm:ss` into seconds.
///
/// Minutes and seconds are one or two digits below 60. Hours have no upper
/// bound beyond what fits in [`Seconds`].
pub fn parse(text: &str) -> Result<Seconds, ParseError> {
    if text.is_empty() {
        return Err(ParseError::malformed(text, "empty"));
    }

    let fields: Vec<&str> = text.split(':').collect();
    let (hours, minutes, seconds) = match fields.as_slice() {
        [m, s] => ("0", *m, *s),
        [h, m, s] => (*h, *m, *s),
        [_] => return Err(ParseError::malformed(text, "expected mm:ss or hh:mm:ss")),
        _ => return Err(ParseError::malformed(text, "too many fields")),
    };

    let hours = numeric_field(text, hours, None)?;
    let minutes = numeric_field(text, minutes, Some(2))?;
    let seconds = numeric_field(text, seconds, Some(2))?;

    if minutes >= 60 {
        return Err(ParseError::malformed(text, "minutes must be below 60"));
    }
    if seconds >= 60 {
        return Err(ParseError::malformed(text, "seconds must be below 60"));
    }

    hours
        .checked_mul(SECS_IN_HOUR)
        .and_then(|h| h.checked_add(minutes * SECS_IN_MIN + seconds))
        .ok_or_else(|| ParseError::malformed(text, "hours out of range"))
}

fn numeric_field(text: &str, field: &str, max_digits: Option<usize>) -> Result<Seconds, ParseError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::malformed(text, "fields must be numeric"));
    }
    if max_digits.is_some_and(|max| field.len() > max) {
        return Err(ParseError::malformed(text, "minutes and seconds take at most two digits"));
    }
    field
        .parse()
        .map_err(|_| ParseError::malformed(text, "hours out of range"))
}

/// Render seconds as `hh:mm:ss` when there are hours, `mm:ss` otherwise
pub fn format(seconds: Seconds) -> String {
    let (hours, minutes, seconds) = (
        seconds / SECS_IN_HOUR,
        (seconds % SECS_IN_HOUR) / SECS_IN_MIN,
        seconds % SECS_IN_MIN,
    );

    if hours == 0 {
        format!("{:02}:{:02}", minutes, seconds)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_seconds() {
        assert_eq!(parse("25:00"), Ok(1500));
        assert_eq!(parse("5:00"), Ok(300));
        assert_eq!(parse("0:7"), Ok(7));
        assert_eq!(parse("00:00"), Ok(0));
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse("1:00:00"), Ok(3600));
        assert_eq!(parse("01:02:03"), Ok(3723));
        assert_eq!(parse("120:00:00"), Ok(432_000));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["61:00", "1:2:3:4", "abc", "", "10", "10:", ":10", "1:60", "1:2:60", "+5:00", " 5:00", "5:000"] {
            assert!(
                matches!(parse(input), Err(ParseError::Malformed { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_hour_overflow() {
        let huge = format!("{}:00:00", u64::MAX);
        assert!(parse(&huge).is_err());
    }

    #[test]
    fn test_error_names_input() {
        let err = parse("abc").unwrap_err();
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn test_format() {
        assert_eq!(format(0), "00:00");
        assert_eq!(format(300), "05:00");
        assert_eq!(format(1500), "25:00");
        assert_eq!(format(3599), "59:59");
        assert_eq!(format(3600), "01:00:00");
        assert_eq!(format(359_999), "99:59:59");
    }

    #[test]
    fn test_seconds_survive_format_then_parse() {
        for s in (0..=359_999).step_by(7) {
            assert_eq!(parse(&format(s)), Ok(s));
        }
        assert_eq!(parse(&format(359_999)), Ok(359_999));
    }

    #[test]
    fn test_text_not_preserved() {
        assert_eq!(format(parse("5:00").unwrap()), "05:00");
    }
}
