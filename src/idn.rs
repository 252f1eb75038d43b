//! Per-label IDN to Unicode conversion with spoof protection.
//!
//! Conversion happens label by label because script-mixing rules are enforced
//! per label: a label mixing Latin and Cyrillic is suspicious even when the
//! host as a whole looks fine. Punycode is always the fail-safe display form;
//! a label that fails to decode, or decodes to something confusable, is shown
//! encoded.

use crate::offset::Adjustment;
use crate::spoof::{self, SpoofResult, TopDomainEntry};
use crate::unicode::punycode;

/// Outcome of converting a single domain label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LabelResult {
    /// The label was converted to Unicode.
    pub converted: bool,
    /// The label is IDN, whether or not it was converted.
    pub has_idn: bool,
    pub spoof_result: SpoofResult,
}

impl Default for LabelResult {
    fn default() -> Self {
        Self {
            converted: false,
            has_idn: false,
            spoof_result: SpoofResult::None,
        }
    }
}

/// Outcome of converting a full host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdnConversionResult {
    /// The display form: Unicode where safe, otherwise the input host.
    pub result: String,
    /// At least one label was IDN.
    pub has_idn_component: bool,
    /// The most severe per-label spoof result.
    pub spoof_result: SpoofResult,
    /// Top domain the converted host is confusable with, if any.
    pub matching_top_domain: Option<TopDomainEntry>,
}

/// Convert one label (text between dots) to Unicode if safe, appending to
/// `out`. Appends the input unchanged when it is not IDN or is unsafe to
/// display. With `ignore_spoof_results`, valid punycode always converts;
/// that mode exists for trusted internal lookups, never for display.
pub(crate) fn idn_to_unicode_one_label(
    label: &str,
    top_level_domain: &str,
    top_level_domain_unicode: &str,
    ignore_spoof_results: bool,
    out: &mut String,
) -> LabelResult {
    let mut result = LabelResult::default();
    if label.is_empty() {
        return result;
    }

    // Early return if this cannot be an IDN label. Valid punycode never ends
    // with a hyphen.
    if !label.starts_with(punycode::ACE_PREFIX) || label.ends_with('-') {
        out.push_str(label);
        return result;
    }

    match punycode::label_to_unicode(label) {
        Ok(unicode) => {
            result.has_idn = true;
            result.spoof_result = spoof::safe_to_display_as_unicode(
                &unicode,
                top_level_domain,
                top_level_domain_unicode,
            );
            if ignore_spoof_results || result.spoof_result == SpoofResult::Safe {
                result.converted = true;
                out.push_str(&unicode);
            } else {
                out.push_str(label);
            }
        }
        // Never show a malformed decode.
        Err(_) => out.push_str(label),
    }
    result
}

/// The TLD context for spoof checks: the last label in ASCII and, when it is
/// well-formed punycode, Unicode form.
fn top_level_domain(host: &str) -> (&str, String) {
    let Some(last_dot) = host.rfind('.') else {
        return ("", String::new());
    };
    let tld = &host[last_dot + 1..];
    let mut tld_unicode = String::new();
    idn_to_unicode_one_label(tld, "", "", true, &mut tld_unicode);
    (tld, tld_unicode)
}

fn idn_to_unicode_impl(
    host: &str,
    ignore_spoof_results: bool,
    adjustments: &mut Vec<Adjustment>,
) -> IdnConversionResult {
    adjustments.clear();
    let (tld, tld_unicode) = top_level_domain(host);

    let mut result = IdnConversionResult {
        result: String::new(),
        has_idn_component: false,
        spoof_result: SpoofResult::None,
        matching_top_domain: None,
    };

    let mut out = String::with_capacity(host.len());
    let mut label_begin = 0;
    while label_begin <= host.len() {
        let label_end = memchr::memchr(b'.', &host.as_bytes()[label_begin..])
            .map_or(host.len(), |p| label_begin + p);
        let label = &host[label_begin..label_end];
        let out_begin = out.len();

        if !label.is_empty() {
            let label_result = idn_to_unicode_one_label(
                label,
                tld,
                &tld_unicode,
                ignore_spoof_results,
                &mut out,
            );
            result.has_idn_component |= label_result.has_idn;
            if label_result.spoof_result != SpoofResult::None
                && matches!(result.spoof_result, SpoofResult::None | SpoofResult::Safe)
            {
                result.spoof_result = label_result.spoof_result;
            }
            if label_result.converted {
                adjustments.push(Adjustment::new(label_begin, label.len(), out.len() - out_begin));
            }
        }

        if label_end < host.len() {
            out.push('.');
        }
        label_begin = label_end + 1;
    }
    result.result = out;

    // Leave the whole host in punycode when the converted form is confusable
    // with a top domain that is not its own.
    if result.has_idn_component {
        if let Some(entry) = spoof::get_similar_top_domain(&result.result) {
            result.matching_top_domain = Some(entry);
            if !ignore_spoof_results {
                adjustments.clear();
                result.result = host.to_string();
            }
        }
    }

    result
}

/// Convert a host to Unicode where safe, recording one adjustment per
/// converted label.
pub fn idn_to_unicode_with_adjustments(
    host: &str,
    adjustments: &mut Vec<Adjustment>,
) -> IdnConversionResult {
    idn_to_unicode_impl(host, false, adjustments)
}

/// Convert a host to Unicode where safe.
pub fn idn_to_unicode(host: &str) -> String {
    let mut adjustments = Vec::new();
    idn_to_unicode_impl(host, false, &mut adjustments).result
}

/// Convert a host to Unicode unconditionally, reporting what the spoof
/// checks found. For trusted internal callers (e.g. TLD extraction),
/// never for display.
pub fn unsafe_idn_to_unicode_with_details(host: &str) -> IdnConversionResult {
    let mut adjustments = Vec::new();
    idn_to_unicode_impl(host, true, &mut adjustments)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_non_idn_host_unchanged() {
        let mut adjustments = Vec::new();
        let result = idn_to_unicode_with_adjustments("www.example.com", &mut adjustments);
        assert_eq!(result.result, "www.example.com");
        assert!(!result.has_idn_component);
        assert_eq!(result.spoof_result, SpoofResult::None);
        assert!(adjustments.is_empty());
    }

    #[test]
    fn test_safe_idn_label_converts_with_adjustment() {
        let mut adjustments = Vec::new();
        let result = idn_to_unicode_with_adjustments("xn--bcher-kva.de", &mut adjustments);
        assert_eq!(result.result, "bücher.de");
        assert!(result.has_idn_component);
        assert_eq!(result.spoof_result, SpoofResult::Safe);
        // "xn--bcher-kva" (13 bytes) became "bücher" (7 bytes).
        assert_eq!(adjustments, vec![Adjustment::new(0, 13, 7)]);
    }

    #[test]
    fn test_malformed_punycode_copied_verbatim() {
        let mut adjustments = Vec::new();
        let result = idn_to_unicode_with_adjustments("xn--blah blah.com", &mut adjustments);
        assert_eq!(result.result, "xn--blah blah.com");
        assert!(!result.has_idn_component);
        assert!(adjustments.is_empty());
    }

    #[test]
    fn test_trailing_hyphen_label_is_not_idn() {
        let result = idn_to_unicode("xn--foo-.com");
        assert_eq!(result, "xn--foo-.com");
    }

    #[test]
    fn test_empty_labels_preserved() {
        assert_eq!(idn_to_unicode(""), "");
        assert_eq!(idn_to_unicode("a..b"), "a..b");
        assert_eq!(idn_to_unicode("example.com."), "example.com.");
    }

    #[test]
    fn test_top_level_domain_context() {
        let (tld, tld_unicode) = top_level_domain("example.xn--p1ai");
        assert_eq!(tld, "xn--p1ai");
        assert_eq!(tld_unicode, "рф");
        let (tld, tld_unicode) = top_level_domain("localhost");
        assert_eq!(tld, "");
        assert_eq!(tld_unicode, "");
    }
}
