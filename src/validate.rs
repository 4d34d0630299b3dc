use crate::errors::ValidationError;

/// Check `raw` and lower-case it.
///
/// The character check runs before the length check, so an over-long input that
/// also holds a digit reports `InvalidCharacters`. Letter order is preserved.
pub fn normalize_input(raw: &str, max_len: usize) -> Result<String, ValidationError> {
    if raw.is_empty() || !raw.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidCharacters);
    }
    // Only ASCII past this point, so bytes == chars.
    let length = raw.len();
    if length > max_len {
        return Err(ValidationError::TooLong {
            length,
            max: max_len,
        });
    }
    Ok(raw.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_keeps_order() {
        assert_eq!(normalize_input("CaT", 10), Ok("cat".to_string()));
        assert_eq!(normalize_input("ZEBRA", 10), Ok("zebra".to_string()));
    }

    #[test]
    fn empty_and_non_letters_are_invalid() {
        assert_eq!(normalize_input("", 10), Err(ValidationError::InvalidCharacters));
        assert_eq!(normalize_input("1234", 10), Err(ValidationError::InvalidCharacters));
        assert_eq!(normalize_input("ca t", 10), Err(ValidationError::InvalidCharacters));
        assert_eq!(normalize_input("café", 10), Err(ValidationError::InvalidCharacters));
        assert_eq!(normalize_input("a-b", 10), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn length_boundary() {
        assert!(normalize_input("abcdefghij", 10).is_ok());
        assert_eq!(
            normalize_input("abcdefghijk", 10),
            Err(ValidationError::TooLong { length: 11, max: 10 })
        );
    }

    #[test]
    fn character_check_runs_first() {
        assert_eq!(
            normalize_input("abcdefghij1", 10),
            Err(ValidationError::InvalidCharacters)
        );
    }
}
