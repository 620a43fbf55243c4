use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::phone::{digits_only, normalize_to_e164, valid_e164};

/// Percent-encoding set for the WhatsApp message body. Matches the characters
/// a browser's `encodeURIComponent` leaves bare.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build a `tel:` link from raw phone text.
///
/// Prefers the normalized E.164 form; when normalization fails it still
/// produces a best-effort link from the raw text with everything but digits
/// and `+` stripped. Only an empty or `+`-only residue yields `None`.
pub fn tel_link(raw: &str, default_country_code: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(e164) = normalize_to_e164(trimmed, default_country_code) {
        return Some(format!("tel:{e164}"));
    }

    let stripped: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    if stripped.is_empty() || stripped == "+" {
        return None;
    }

    Some(format!("tel:{stripped}"))
}

/// Build a `mailto:` link. The only requirement on the address is that it
/// contains an `@`; anything stricter rejects addresses that work.
pub fn mailto_link(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.contains('@') {
        return None;
    }
    Some(format!("mailto:{trimmed}"))
}

/// Build a `https://wa.me/` deep link from an E.164 number.
///
/// WhatsApp's link scheme wants digits only, so the `+` is dropped. An
/// optional prefilled message is percent-encoded into the query string.
pub fn whatsapp_link(e164: &str, text: Option<&str>) -> Option<String> {
    let digits = digits_only(e164);
    if !valid_e164(&digits) {
        return None;
    }

    let base = format!("https://wa.me/{digits}");
    match text {
        None | Some("") => Some(base),
        Some(body) => Some(format!("{base}?text={}", utf8_percent_encode(body, QUERY))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::phone::DEFAULT_COUNTRY_CODE;

    #[test]
    fn test_tel_link_uses_normalized_form() {
        assert_eq!(
            tel_link("98765 43210", DEFAULT_COUNTRY_CODE).as_deref(),
            Some("tel:+919876543210")
        );
    }

    #[test]
    fn test_tel_link_falls_back_to_stripped_raw() {
        // 7 digits: below the normalizer's floor, but still linkable
        assert_eq!(
            tel_link("123-4567", DEFAULT_COUNTRY_CODE).as_deref(),
            Some("tel:1234567")
        );
    }

    #[test]
    fn test_tel_link_refuses_empty_residue() {
        assert_eq!(tel_link("", DEFAULT_COUNTRY_CODE), None);
        assert_eq!(tel_link("call me", DEFAULT_COUNTRY_CODE), None);
        assert_eq!(tel_link("+", DEFAULT_COUNTRY_CODE), None);
    }

    #[test]
    fn test_mailto_requires_at_sign() {
        assert_eq!(mailto_link(" pia@example.com "), Some("mailto:pia@example.com".into()));
        assert_eq!(mailto_link("not-an-address"), None);
        assert_eq!(mailto_link(""), None);
    }

    #[test]
    fn test_whatsapp_link_digits_only_path() {
        assert_eq!(
            whatsapp_link("+919876543210", None).as_deref(),
            Some("https://wa.me/919876543210")
        );
    }

    #[test]
    fn test_whatsapp_link_encodes_message() {
        assert_eq!(
            whatsapp_link("+919876543210", Some("Hello")).as_deref(),
            Some("https://wa.me/919876543210?text=Hello")
        );
        assert_eq!(
            whatsapp_link("+919876543210", Some("Hi Pia! Bruno's bath is due")).as_deref(),
            Some("https://wa.me/919876543210?text=Hi%20Pia!%20Bruno's%20bath%20is%20due")
        );
    }

    #[test]
    fn test_whatsapp_link_rejects_invalid_number() {
        assert_eq!(whatsapp_link("+12", None), None);
        assert_eq!(whatsapp_link("", Some("Hello")), None);
    }

    #[test]
    fn test_whatsapp_link_empty_message_is_bare() {
        assert_eq!(
            whatsapp_link("+919876543210", Some("")).as_deref(),
            Some("https://wa.me/919876543210")
        );
    }
}
