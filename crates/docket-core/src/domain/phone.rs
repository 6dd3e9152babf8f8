use crate::error::CoreError;

const PHONE_DIGITS: usize = 10;

/// Strips everything but ASCII digits and formats exactly ten of them as
/// `###-###-####`.
pub fn normalize_phone(raw: &str) -> Result<String, CoreError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != PHONE_DIGITS {
        return Err(CoreError::InvalidPhone);
    }

    Ok(format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]))
}

pub fn is_formatted_phone(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == PHONE_DIGITS + 2
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            3 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}
