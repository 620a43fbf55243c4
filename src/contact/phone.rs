//! Phone number normalization
//!
//! Converts free-text phone input into a canonical `+<digits>` dialable form.
//! This is a heuristic for a single-country clientele, not a numbering-plan
//! validator: a bare 10-digit number is assumed to be national format and
//! gets the default country code. The stored raw string stays the value of
//! record; the normalized form is a derived convenience.

/// Country code assumed for national-format numbers when the caller does not
/// supply one.
pub const DEFAULT_COUNTRY_CODE: &str = "91";

const MIN_DIGITS: usize = 8;
const MAX_DIGITS: usize = 15;

/// Normalize raw phone text to `+<countrycode><nationalnumber>`.
///
/// Returns `None` for anything that cannot be shaped into a plausible
/// 8-to-15-digit international number. Never panics or errors: phone is an
/// optional field everywhere it appears.
pub fn normalize_to_e164(raw: &str, default_country_code: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Explicit + prefix: everything after it, digits only.
    if let Some(rest) = trimmed.strip_prefix('+') {
        let digits = digits_only(rest);
        return valid_e164(&digits).then(|| format!("+{digits}"));
    }

    let digits = digits_only(trimmed);

    // 00 international dialing prefix.
    if let Some(rest) = digits.strip_prefix("00") {
        return valid_e164(rest).then(|| format!("+{rest}"));
    }

    let len = digits.len();

    // 10 digits: national format, missing its country code.
    if len == 10 {
        let full = format!("{}{}", sanitize_country_code(default_country_code), digits);
        return valid_e164(&full).then(|| format!("+{full}"));
    }

    // 11 digits with a domestic trunk 0: drop it, then treat as national.
    if len == 11 && digits.starts_with('0') {
        let full = format!(
            "{}{}",
            sanitize_country_code(default_country_code),
            &digits[1..]
        );
        return valid_e164(&full).then(|| format!("+{full}"));
    }

    // 11-15 digits: assume the country code is present, only the + is missing.
    if (11..=MAX_DIGITS).contains(&len) {
        return valid_e164(&digits).then(|| format!("+{digits}"));
    }

    None
}

/// Keep only the digits of `s`.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// E.164 caps at 15 digits; 8 is a practical lower bound for this app.
pub(crate) fn valid_e164(digits: &str) -> bool {
    (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len())
}

/// Digits-only country code, falling back to [`DEFAULT_COUNTRY_CODE`] when
/// stripping leaves nothing (handles inputs like `" +91 "`).
fn sanitize_country_code(cc: &str) -> String {
    let digits = digits_only(cc);
    if digits.is_empty() {
        DEFAULT_COUNTRY_CODE.to_string()
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(raw: &str) -> Option<String> {
        normalize_to_e164(raw, DEFAULT_COUNTRY_CODE)
    }

    #[test]
    fn test_ten_digit_national_gets_default_country_code() {
        assert_eq!(norm("9876543210").as_deref(), Some("+919876543210"));
    }

    #[test]
    fn test_eleven_digits_with_trunk_zero() {
        assert_eq!(norm("09876543210").as_deref(), Some("+919876543210"));
    }

    #[test]
    fn test_plus_prefix_strips_formatting() {
        assert_eq!(norm("+44 20 7946 0958").as_deref(), Some("+442079460958"));
        assert_eq!(norm("+91-98765-43210").as_deref(), Some("+919876543210"));
    }

    #[test]
    fn test_double_zero_international_prefix() {
        assert_eq!(norm("0044 20 7946 0958").as_deref(), Some("+442079460958"));
    }

    #[test]
    fn test_twelve_digits_assumed_to_carry_country_code() {
        assert_eq!(norm("919876543210").as_deref(), Some("+919876543210"));
    }

    #[test]
    fn test_too_short_or_too_long() {
        assert_eq!(norm("12345"), None);
        assert_eq!(norm("+1234567"), None);
        assert_eq!(norm("1234567890123456"), None);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(norm(""), None);
        assert_eq!(norm("   "), None);
    }

    #[test]
    fn test_plus_with_garbage_only() {
        assert_eq!(norm("+"), None);
        assert_eq!(norm("+abc"), None);
    }

    #[test]
    fn test_custom_default_country_code() {
        assert_eq!(
            normalize_to_e164("2079460958", "44").as_deref(),
            Some("+442079460958")
        );
        // non-digits in the override are stripped before use
        assert_eq!(
            normalize_to_e164("9876543210", " +91 ").as_deref(),
            Some("+919876543210")
        );
        // an empty override falls back to the hard-coded default
        assert_eq!(
            normalize_to_e164("9876543210", "").as_deref(),
            Some("+919876543210")
        );
    }

    #[test]
    fn test_formatted_national_number() {
        assert_eq!(norm("(987) 654-3210").as_deref(), Some("+919876543210"));
    }
}
