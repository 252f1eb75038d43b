#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// IDN conversion and spoof-protection tests. Punycode fixtures are built
/// with the same encoder the crate decodes with, so the inputs are always
/// well-formed ACE labels.
use urlfmt::{
    FormatUrlTypes, SpoofResult, UnescapeRule, format_url, get_skeletons, idn_to_unicode,
    lookup_skeleton_in_top_domains, maybe_remove_diacritics, unsafe_idn_to_unicode_with_details,
};

fn ace(label: &str) -> String {
    format!("xn--{}", idna::punycode::encode_str(label).unwrap())
}

#[test]
fn test_safe_labels_decode_to_unicode() {
    assert_eq!(idn_to_unicode(&format!("{}.de", ace("münchen"))), "münchen.de");
    assert_eq!(idn_to_unicode(&format!("{}.jp", ace("日本語"))), "日本語.jp");
}

#[test]
fn test_ace_round_trips_through_display_form() {
    for label in ["münchen", "bücher", "grüße", "日本語"] {
        let encoded = ace(label);
        let host = format!("{encoded}.example");
        let display = idn_to_unicode(&host);
        assert_eq!(display, format!("{label}.example"));
        // Re-encoding the displayed label reproduces the input exactly.
        let shown_label = display.split('.').next().unwrap();
        assert_eq!(ace(shown_label), encoded);
    }
}

#[test]
fn test_top_domain_lookalike_stays_punycode() {
    // Cyrillic "раураӏ" renders as "paypal".
    let host = format!("{}.com", ace("раураӏ"));
    assert_eq!(idn_to_unicode(&host), host);

    let details = unsafe_idn_to_unicode_with_details(&host);
    assert!(details.has_idn_component);
    assert_ne!(details.spoof_result, SpoofResult::Safe);
    assert_eq!(
        details.matching_top_domain.map(|e| e.domain),
        Some("paypal.com")
    );
}

#[test]
fn test_mixed_script_label_stays_punycode() {
    // "pаypal" mixes Latin with one Cyrillic а.
    let host = format!("{}.com", ace("pаypal"));
    assert_eq!(idn_to_unicode(&host), host);
}

#[test]
fn test_whole_script_cyrillic_depends_on_tld() {
    let label = "сахар"; // folds entirely to ASCII lookalikes
    let encoded = ace(label);
    assert_eq!(
        idn_to_unicode(&format!("{encoded}.ru")),
        format!("{label}.ru")
    );
    let dot_com = format!("{encoded}.com");
    assert_eq!(idn_to_unicode(&dot_com), dot_com);
}

#[test]
fn test_unsafe_conversion_still_reports_unicode() {
    let host = format!("{}.com", ace("сахар"));
    let details = unsafe_idn_to_unicode_with_details(&host);
    // The escape hatch converts anyway and surfaces the verdict.
    assert_eq!(details.result, "сахар.com");
    assert_eq!(details.spoof_result, SpoofResult::UnsafeUnknown);
}

#[test]
fn test_formatter_keeps_unsafe_host_encoded() {
    let spec = format!("http://{}.com/login", ace("раураӏ"));
    let formatted = format_url(&spec, FormatUrlTypes::OMIT_NOTHING, UnescapeRule::NORMAL);
    assert_eq!(formatted.text, spec);
    assert!(formatted.adjustments.is_empty());
}

#[test]
fn test_formatter_decodes_safe_host_with_adjustment() {
    let formatted = format_url(
        "http://xn--bcher-kva.de/katalog",
        FormatUrlTypes::OMIT_NOTHING,
        UnescapeRule::NORMAL,
    );
    assert_eq!(formatted.text, "http://bücher.de/katalog");
    // "xn--bcher-kva" (13 bytes) became "bücher" (7 bytes) at offset 7.
    assert_eq!(formatted.adjustments, vec![urlfmt::Adjustment::new(7, 13, 7)]);
    // A cursor after the host lands after the decoded host.
    assert_eq!(formatted.adjust_offset(20), 14);
}

#[test]
fn test_skeleton_api_detects_lookalikes() {
    let skeletons = get_skeletons("раураӏ.com");
    assert!(skeletons.contains(&"paypal.com".to_string()));
    let entry = lookup_skeleton_in_top_domains("paypal.com").unwrap();
    assert_eq!(entry.domain, "paypal.com");
    assert!(lookup_skeleton_in_top_domains("nonexistent.invalid").is_none());
}

#[test]
fn test_diacritic_removal_is_latin_only() {
    assert_eq!(maybe_remove_diacritics("café.example"), "cafe.example");
    assert_eq!(maybe_remove_diacritics("日本語.jp"), "日本語.jp");
}

#[test]
fn test_concurrent_first_use_observes_one_table() {
    // Racing first uses must all see the fully constructed checker and
    // classify identically.
    let spoof_host = format!("{}.com", ace("раураӏ"));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let spoof_host = spoof_host.clone();
            std::thread::spawn(move || {
                (
                    idn_to_unicode("xn--bcher-kva.example"),
                    idn_to_unicode(&spoof_host),
                )
            })
        })
        .collect();
    for handle in handles {
        let (safe, unsafe_kept) = handle.join().unwrap();
        assert_eq!(safe, "bücher.example");
        assert_eq!(unsafe_kept, spoof_host);
    }
}
