use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use comdex_core::{IndexError, TimeInput};

/// Resolved begin/end bounds. `None` defers to each contract's listing or
/// delisting date in the fetch stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedWindow {
    pub begin: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Normalize the begin/end arguments.
///
/// An explicit end time is clamped twice over the vendor's 30-minute
/// open-interest maturity margin:
/// - an end in the future becomes `now - 30min`;
/// - an end within 30 minutes of `now` becomes `end - 30min`.
///
/// `now` is passed in so the clamps are testable against a pinned clock.
///
/// # Errors
/// Returns `InvalidArg` naming the argument whose text form failed to parse.
pub(crate) fn resolve_window(
    begin: Option<&TimeInput>,
    end: Option<&TimeInput>,
    now: DateTime<Utc>,
) -> Result<ResolvedWindow, IndexError> {
    let begin = begin.map(|t| parse_time(t, "begin_time")).transpose()?;
    let end = match end {
        None => None,
        Some(t) => {
            let parsed = parse_time(t, "end_time")?;
            Some(clamp_end(parsed, now))
        }
    };
    Ok(ResolvedWindow { begin, end })
}

fn clamp_end(end: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    let margin = Duration::minutes(30);
    if end > now {
        let adjusted = now - margin;
        #[cfg(feature = "tracing")]
        tracing::warn!(
            requested = %end,
            adjusted = %adjusted,
            "end time is in the future; adjusted"
        );
        adjusted
    } else if now - end < margin {
        let adjusted = end - margin;
        #[cfg(feature = "tracing")]
        tracing::warn!(
            requested = %end,
            adjusted = %adjusted,
            "end time within the open-interest maturity margin; adjusted"
        );
        adjusted
    } else {
        end
    }
}

/// Parse one time argument. Text accepts `YYYY-MM-DD` and
/// `YYYY-MM-DD HH:MM:SS`; structured timestamps pass through.
fn parse_time(input: &TimeInput, which: &str) -> Result<DateTime<Utc>, IndexError> {
    match input {
        TimeInput::Timestamp(ts) => Ok(*ts),
        TimeInput::Text(s) => {
            let parsed = if s.contains(':') {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            } else {
                NaiveDate::parse_from_str(s, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN))
            };
            parsed.map(|naive| naive.and_utc()).map_err(|_| {
                IndexError::invalid_arg(format!("{which} has an invalid time format: '{s}'"))
            })
        }
    }
}
