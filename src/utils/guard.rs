use crate::utils::error::{GuardError, GuardResult};
use chrono::{DateTime, Duration, Local, TimeZone};

pub fn require_non_null<T>(value: Option<T>, param: &str) -> GuardResult<T> {
    value.ok_or_else(|| GuardError::null_argument(param))
}

/// Rejects absent, empty and whitespace-only strings. Returns the input untouched.
pub fn require_non_blank<'a>(value: Option<&'a str>, param: &str) -> GuardResult<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(GuardError::invalid_argument(
            param,
            "não pode ser nulo, vazio ou apenas espaços.",
        )),
    }
}

pub fn require_positive(value: i32, param: &str) -> GuardResult<i32> {
    if value <= 0 {
        return Err(GuardError::out_of_range(param, value));
    }
    Ok(value)
}

pub fn require_not_past<Tz: TimeZone>(date: &DateTime<Tz>, param: &str) -> GuardResult<()> {
    require_not_before(date, &Local::now(), param)
}

/// Same rule as [`require_not_past`] against an explicit reference instant.
pub fn require_not_before<Tz: TimeZone, Rz: TimeZone>(
    date: &DateTime<Tz>,
    reference: &DateTime<Rz>,
    param: &str,
) -> GuardResult<()> {
    if date < reference {
        return Err(GuardError::invalid_argument(param, "não pode ser no passado."));
    }
    Ok(())
}

pub fn require_min_duration(duration: Duration, min: Duration, param: &str) -> GuardResult<()> {
    if duration < min {
        return Err(GuardError::invalid_argument(
            param,
            format!(
                "Duração deve ser de pelo menos {} minutos (recebido: {}).",
                min.num_minutes(),
                duration.num_minutes()
            ),
        ));
    }
    Ok(())
}

// Only checks for '@'. Not RFC 5322.
pub fn is_valid_email(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.trim().is_empty() && v.contains('@'))
}

/// Trims the input, collapsing absent or blank text to `None`.
pub fn try_normalize(input: Option<&str>) -> Option<String> {
    input
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}
