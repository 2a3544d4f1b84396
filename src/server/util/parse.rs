use crate::server::error::validation::FieldError;

/// Parses a member id from its string form
///
/// # Arguments
/// - `field` - Request field the value came from, used in the error
/// - `value` - The already trimmed, non-empty string to parse
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(FieldError)` - The string is not an integer id
pub fn parse_id_from_string(field: &str, value: &str) -> Result<i32, FieldError> {
    value
        .parse::<i32>()
        .map_err(|e| FieldError::new(field, format!("'{}' is not a valid id: {}", value, e)))
}

/// Parses an id taken from a URL path segment
///
/// A segment that is not an integer cannot name any stored record, so callers treat
/// `None` like an unknown id.
///
/// # Returns
/// - `Some(i32)` - Successfully parsed id
/// - `None` - The segment is not an integer id
pub fn parse_path_id(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_string() {
        assert_eq!(parse_id_from_string("member_id", "17"), Ok(17));
    }

    #[test]
    fn rejects_uuid_like_string() {
        let err = parse_id_from_string("member_id", "3f1c-uuid").unwrap_err();
        assert_eq!(err.field, "member_id");
    }

    #[test]
    fn non_numeric_path_id_is_unknown() {
        assert_eq!(parse_path_id("abc"), None);
        assert_eq!(parse_path_id(" 5 "), Some(5));
    }
}
