use std::str::FromStr;

/// Parses an optional query value, falling back to `default`.
///
/// Missing, empty and unparsable values all yield the default, matching how the thesis
/// directory treats its filter parameters.
///
/// # Arguments
/// - `value` - Raw query parameter value, if present
/// - `default` - Value used when `value` is absent or not a valid number
///
/// # Returns
/// - `T` - The parsed value or the default
pub fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    parse_opt(value).unwrap_or(default)
}

/// Parses an optional query value, discarding values that are not numbers.
pub fn parse_opt<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|value| value.trim().parse::<T>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_default_for_missing_or_invalid() {
        assert_eq!(parse_or::<i32>(None, 1), 1);
        assert_eq!(parse_or::<i32>(Some(""), 1), 1);
        assert_eq!(parse_or::<i32>(Some("abc"), 1), 1);
    }

    #[test]
    fn parses_valid_numbers() {
        assert_eq!(parse_or::<i32>(Some("3"), 1), 3);
        assert_eq!(parse_or::<i64>(Some("-2"), 1), -2);
        assert_eq!(parse_opt::<i32>(Some(" 2019 ")), Some(2019));
    }
}
