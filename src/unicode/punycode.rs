use crate::error::IdnError;

/// Prefix marking an ASCII-compatible-encoded (punycode) label.
pub(crate) const ACE_PREFIX: &str = "xn--";

/// Convert one `xn--` label to Unicode.
///
/// Stricter than a bare punycode decode: the result must be non-empty and
/// non-ASCII, NFC-normalized, must not smuggle label separators or control
/// characters, and must re-encode byte-for-byte to the input. Any failure
/// means the caller displays the label in its encoded form.
pub(crate) fn label_to_unicode(label: &str) -> Result<String, IdnError> {
    let ace = label
        .strip_prefix(ACE_PREFIX)
        .ok_or(IdnError::InvalidPunycode)?;
    if ace.is_empty() || !ace.is_ascii() {
        return Err(IdnError::InvalidPunycode);
    }

    let unicode = idna::punycode::decode_to_string(ace).ok_or(IdnError::InvalidPunycode)?;
    if unicode.is_empty() || unicode.is_ascii() {
        // An all-ASCII decode means the input never needed encoding.
        return Err(IdnError::InvalidPunycode);
    }
    if unicode
        .chars()
        .any(|c| c == '.' || c.is_control() || c.is_whitespace())
    {
        return Err(IdnError::DisallowedCharacter);
    }
    if !unicode_normalization::is_nfc(&unicode) {
        return Err(IdnError::NotNormalized);
    }

    let reencoded = idna::punycode::encode_str(&unicode).ok_or(IdnError::RoundTripMismatch)?;
    if reencoded != ace {
        return Err(IdnError::RoundTripMismatch);
    }
    Ok(unicode)
}

/// Process a domain using the IDNA `ToASCII` algorithm.
/// Fast path for pure-ASCII hostnames; everything else goes through full
/// IDNA processing.
pub(crate) fn domain_to_ascii(domain: &str) -> Result<String, IdnError> {
    if domain.is_ascii() && !domain.contains('%') {
        let mut result = String::with_capacity(domain.len());
        for b in domain.bytes() {
            match b {
                b'A'..=b'Z' => result.push((b + 32) as char),
                b'a'..=b'z' | b'0'..=b'9' | b'.' | b'-' => result.push(b as char),
                _ => return Err(IdnError::InvalidDomain),
            }
        }
        return Ok(result);
    }

    idna::domain_to_ascii(domain).map_err(|_| IdnError::InvalidDomain)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        let unicode = label_to_unicode("xn--bcher-kva").unwrap();
        assert_eq!(unicode, "bücher");
        assert_eq!(
            idna::punycode::encode_str(&unicode).unwrap(),
            "bcher-kva"
        );
    }

    #[test]
    fn test_label_rejects_garbage() {
        assert_eq!(label_to_unicode("xn--"), Err(IdnError::InvalidPunycode));
        assert_eq!(label_to_unicode("example"), Err(IdnError::InvalidPunycode));
        // Plain ASCII hidden behind the prefix never needed encoding.
        assert_eq!(label_to_unicode("xn--foo-"), Err(IdnError::InvalidPunycode));
    }

    #[test]
    fn test_label_rejects_non_canonical_case() {
        // Round-trip comparison is byte-exact, so uppercase ACE fails closed.
        assert!(label_to_unicode("xn--BCHER-KVA").is_err());
    }

    #[test]
    fn test_domain_to_ascii() {
        assert_eq!(domain_to_ascii("Example.COM").unwrap(), "example.com");
        let result = domain_to_ascii("日本.jp").unwrap();
        assert!(result.starts_with("xn--"));
        assert!(domain_to_ascii("bad host").is_err());
    }
}
