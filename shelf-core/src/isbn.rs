//! ISBN normalization and check-digit validation for scanned codes.

/// Strip separators and upper-case a trailing `x`.
///
/// Returns the bare digit string (`X` allowed in the last position of an
/// ISBN-10). No validation is performed.
pub fn normalize_isbn(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '-' | ' ' | '\u{2010}' | '\u{2011}'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Whether `raw` is a valid ISBN-10 or ISBN-13 after normalization.
pub fn is_valid_isbn(raw: &str) -> bool {
    let isbn = normalize_isbn(raw);
    match isbn.len() {
        10 => isbn10_check(&isbn),
        13 => isbn13_check(&isbn),
        _ => false,
    }
}

/// Convert a valid ISBN-10 to its ISBN-13 form (`978` prefix).
pub fn isbn10_to_isbn13(raw: &str) -> Option<String> {
    let isbn = normalize_isbn(raw);
    if isbn.len() != 10 || !isbn10_check(&isbn) {
        return None;
    }
    let body = format!("978{}", &isbn[..9]);
    let check = isbn13_check_digit(&body)?;
    Some(format!("{body}{check}"))
}

fn isbn10_check(isbn: &str) -> bool {
    let mut sum = 0u32;
    for (i, c) in isbn.chars().enumerate() {
        let value = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'X' if i == 9 => 10,
            _ => return false,
        };
        sum += value * (10 - i as u32);
    }
    sum.is_multiple_of(11)
}

fn isbn13_check(isbn: &str) -> bool {
    if !isbn.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match isbn13_check_digit(&isbn[..12]) {
        Some(check) => isbn.ends_with(check),
        None => false,
    }
}

/// Check digit for the first twelve digits of an ISBN-13.
fn isbn13_check_digit(body: &str) -> Option<char> {
    let mut sum = 0u32;
    for (i, c) in body.chars().enumerate() {
        let digit = c.to_digit(10)?;
        sum += if i % 2 == 0 { digit } else { digit * 3 };
    }
    char::from_digit((10 - sum % 10) % 10, 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_separators() {
        assert_eq!(normalize_isbn("0-306-40615-2"), "0306406152");
        assert_eq!(normalize_isbn("0 8044 2957 x"), "080442957X");
    }

    #[test]
    fn validates_isbn10() {
        assert!(is_valid_isbn("0-306-40615-2"));
        assert!(is_valid_isbn("080442957X"));
        assert!(!is_valid_isbn("0-306-40615-3"));
        assert!(!is_valid_isbn("X306406152"));
    }

    #[test]
    fn validates_isbn13() {
        assert!(is_valid_isbn("978-0-306-40615-7"));
        assert!(is_valid_isbn("9788375780635"));
        assert!(!is_valid_isbn("978-0-306-40615-8"));
        assert!(!is_valid_isbn("97803064061X7"));
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(!is_valid_isbn(""));
        assert!(!is_valid_isbn("12345"));
    }

    #[test]
    fn converts_isbn10_to_isbn13() {
        assert_eq!(
            isbn10_to_isbn13("0-306-40615-2").as_deref(),
            Some("9780306406157")
        );
        assert_eq!(isbn10_to_isbn13("0306406153"), None);
    }
}
