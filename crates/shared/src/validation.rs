//! Form-boundary validation utilities.
//!
//! These run through `validator` before an edit is reverse-mapped, so bad
//! input is reported per field instead of failing inside a mapper.

use validator::ValidationError;

use crate::ids::{parse_id, IdError};

/// Validates that a frontend ID string parses as a backend integer ID.
pub fn validate_numeric_id(id: &str) -> Result<(), ValidationError> {
    match parse_id(id) {
        Ok(_) => Ok(()),
        Err(IdError::Empty) => {
            let mut err = ValidationError::new("id_empty");
            err.message = Some("ID must not be empty".into());
            Err(err)
        }
        Err(IdError::NotNumeric(_)) => {
            let mut err = ValidationError::new("id_not_numeric");
            err.message = Some("ID must be a non-negative base-10 integer".into());
            Err(err)
        }
        Err(IdError::OutOfRange(_)) => {
            let mut err = ValidationError::new("id_out_of_range");
            err.message = Some("ID is out of range".into());
            Err(err)
        }
    }
}

/// Validates every entry of an ID list.
pub fn validate_numeric_ids(ids: &[String]) -> Result<(), ValidationError> {
    ids.iter().try_for_each(|id| validate_numeric_id(id))
}

/// Validates a `#RRGGBB` color as used for rooms.
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].bytes().all(|b| b.is_ascii_hexdigit());

    if valid {
        Ok(())
    } else {
        let mut err = ValidationError::new("color_format");
        err.message = Some("Color must be in #RRGGBB format".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_numeric_id() {
        assert!(validate_numeric_id("1").is_ok());
        assert!(validate_numeric_id("1234567").is_ok());
        assert!(validate_numeric_id("abc").is_err());
        assert!(validate_numeric_id("").is_err());
        assert!(validate_numeric_id("-1").is_err());
    }

    #[test]
    fn test_validate_numeric_id_error_codes() {
        assert_eq!(validate_numeric_id("").unwrap_err().code, "id_empty");
        assert_eq!(validate_numeric_id("x1").unwrap_err().code, "id_not_numeric");
        assert_eq!(
            validate_numeric_id("99999999999999999999").unwrap_err().code,
            "id_out_of_range"
        );
    }

    #[test]
    fn test_validate_numeric_id_error_message() {
        let err = validate_numeric_id("12abc").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "ID must be a non-negative base-10 integer"
        );
    }

    #[test]
    fn test_validate_numeric_ids() {
        assert!(validate_numeric_ids(&["1".to_string(), "2".to_string()]).is_ok());
        assert!(validate_numeric_ids(&["1".to_string(), "b".to_string()]).is_err());
        assert!(validate_numeric_ids(&[]).is_ok());
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("#FF8800").is_ok());
        assert!(validate_hex_color("#ff8800").is_ok());
        assert!(validate_hex_color("FF8800").is_err());
        assert!(validate_hex_color("#FF88").is_err());
        assert!(validate_hex_color("#GG8800").is_err());
    }
}
