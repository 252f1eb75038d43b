//! Spoof classification for decoded IDN labels.
//!
//! A punycode label that decodes cleanly is not automatically safe to show:
//! the decoded text may be visually confusable with a high-traffic domain, or
//! mix scripts in a way only an attacker would. This module owns those
//! decisions. Its tables are built once per process from compiled-in data,
//! then read concurrently without locking for the process lifetime.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use psl::{List, Psl};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;
use unicode_script::{Script, UnicodeScript};

use crate::confusables::CONFUSABLES;
use crate::top_domains::TOP_DOMAINS;
use crate::unicode::punycode;

/// A high-traffic domain matched by skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopDomainEntry {
    pub domain: &'static str,
}

/// Skeleton strings computed for a host.
pub type Skeletons = Vec<String>;

/// Outcome of the spoof check for one decoded label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpoofResult {
    /// No check ran (the label was not IDN).
    None,
    /// Safe to display in Unicode form.
    Safe,
    /// Rejected by script or character rules.
    UnsafeUnknown,
    /// Visually confusable with a known high-traffic domain.
    UnsafeMatch(TopDomainEntry),
}

/// TLDs whose registries operate in Cyrillic; whole-script Cyrillic labels
/// are expected there.
static CYRILLIC_TLDS: &[&str] = &["bg", "by", "kz", "mk", "mn", "rs", "ru", "su", "ua", "uz"];
static GREEK_TLDS: &[&str] = &["cy", "gr"];

struct SpoofChecker {
    confusables: HashMap<char, &'static str>,
    /// Skeleton -> entry, keyed by both the full-domain skeleton and the
    /// registrable-label skeleton of every top domain.
    top_domains: HashMap<String, TopDomainEntry>,
}

// Construct-once, leaked for the process lifetime; immutable afterwards, so
// any number of threads may read it without further synchronization.
static SPOOF_CHECKER: Lazy<SpoofChecker> = Lazy::new(SpoofChecker::new);

fn checker() -> &'static SpoofChecker {
    &SPOOF_CHECKER
}

/// The registrable label of a domain: "paypal" for "paypal.com".
fn registrable_label(domain: &str) -> Option<&str> {
    let suffix = List.suffix(domain.as_bytes())?;
    let suffix_len = suffix.as_bytes().len();
    if suffix_len + 1 >= domain.len() {
        return None;
    }
    let without_suffix = &domain[..domain.len() - suffix_len - 1];
    without_suffix.rsplit('.').next()
}

/// True when `host` and `top_domain` share a registrable domain.
fn same_registrable_domain(host: &str, top_domain: &str) -> bool {
    let Ok(ascii) = punycode::domain_to_ascii(host) else {
        return false;
    };
    match (List.domain(ascii.as_bytes()), List.domain(top_domain.as_bytes())) {
        (Some(a), Some(b)) => a.as_bytes() == b.as_bytes(),
        _ => false,
    }
}

/// The label's scripts, ignoring Common and Inherited, deduplicated.
fn resolved_scripts(label: &str) -> Vec<Script> {
    let mut scripts = Vec::new();
    for c in label.chars() {
        let script = c.script();
        if matches!(script, Script::Common | Script::Inherited) {
            continue;
        }
        if !scripts.contains(&script) {
            scripts.push(script);
        }
    }
    scripts
}

/// Highly Restrictive profile of UTS #39: a single script, or Latin plus one
/// of the recognized CJK combinations. Latin mixed with Cyrillic or Greek
/// fails.
fn allowed_script_mix(scripts: &[Script]) -> bool {
    if scripts.len() <= 1 {
        return true;
    }
    const JAPANESE: &[Script] = &[Script::Latin, Script::Han, Script::Hiragana, Script::Katakana];
    const CHINESE: &[Script] = &[Script::Latin, Script::Han, Script::Bopomofo];
    const KOREAN: &[Script] = &[Script::Latin, Script::Han, Script::Hangul];
    [JAPANESE, CHINESE, KOREAN]
        .iter()
        .any(|allowed| scripts.iter().all(|s| allowed.contains(s)))
}

/// Characters rejected outright: invisible, direction-altering, or able to
/// fake URL structure.
fn is_always_unsafe(c: char) -> bool {
    matches!(
        c,
        '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'
            | '\u{2066}'..='\u{2069}'
            | '\u{FEFF}'
            | '\u{0337}' // combining short solidus overlay
            | '\u{0338}' // combining long solidus overlay
            | '\u{2044}' // fraction slash
            | '\u{2215}' // division slash
    )
}

impl SpoofChecker {
    fn new() -> Self {
        let confusables: HashMap<char, &'static str> = CONFUSABLES.iter().copied().collect();
        let mut this = SpoofChecker {
            confusables,
            top_domains: HashMap::new(),
        };
        let mut top_domains = HashMap::with_capacity(TOP_DOMAINS.len() * 2);
        for &domain in TOP_DOMAINS {
            let entry = TopDomainEntry { domain };
            top_domains.insert(this.skeleton(domain), entry);
            if let Some(label) = registrable_label(domain) {
                top_domains.entry(this.skeleton(label)).or_insert(entry);
            }
        }
        this.top_domains = top_domains;
        this
    }

    /// Fold a string to its confusable skeleton: NFD, then map each
    /// character through the confusable table. Combining marks survive, so a
    /// diacritic still distinguishes a label from its base form.
    fn skeleton(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for c in input.nfd() {
            match self.confusables.get(&c) {
                Some(folded) => out.push_str(folded),
                None => out.push(c),
            }
        }
        out
    }

    /// Strip combining marks from hosts written entirely in Latin script;
    /// other hosts come back unchanged.
    fn remove_diacritics(&self, host: &str) -> String {
        let all_latin = host
            .chars()
            .all(|c| matches!(c.script(), Script::Latin | Script::Common | Script::Inherited));
        if !all_latin {
            return host.to_string();
        }
        host.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
    }

    fn get_skeletons(&self, host: &str) -> Skeletons {
        let mut skeletons = vec![self.skeleton(host)];
        let stripped = self.remove_diacritics(host);
        if stripped != host {
            let skeleton = self.skeleton(&stripped);
            if !skeletons.contains(&skeleton) {
                skeletons.push(skeleton);
            }
        }
        skeletons
    }

    /// Exact lookup, then progressively drop leading labels. Matches are
    /// never widened to the right: "paypal.com.evil.com" does not match
    /// "paypal.com", while "accounts.paypal.com" does.
    fn lookup_skeleton_in_top_domains(&self, skeleton: &str) -> Option<TopDomainEntry> {
        if let Some(entry) = self.top_domains.get(skeleton) {
            return Some(*entry);
        }
        let mut rest = skeleton;
        while let Some(dot) = rest.find('.') {
            rest = &rest[dot + 1..];
            if let Some(entry) = self.top_domains.get(rest) {
                return Some(*entry);
            }
        }
        None
    }

    /// Whole-host top-domain check with the own-domain exception: a host
    /// never spoofs itself.
    fn get_similar_top_domain(&self, host: &str) -> Option<TopDomainEntry> {
        for skeleton in self.get_skeletons(host) {
            if let Some(entry) = self.lookup_skeleton_in_top_domains(&skeleton) {
                if !same_registrable_domain(host, entry.domain) {
                    return Some(entry);
                }
            }
        }
        None
    }

    /// A single-script Cyrillic or Greek label whose every character folds to
    /// a Latin lookalike can pass for an ASCII domain; only allow it where
    /// the TLD operates in that script.
    fn check_whole_script_confusable(
        &self,
        label: &str,
        scripts: &[Script],
        top_level_domain: &str,
        top_level_domain_unicode: &str,
    ) -> Option<SpoofResult> {
        let (script, operating_tlds) = match scripts {
            [Script::Cyrillic] => (Script::Cyrillic, CYRILLIC_TLDS),
            [Script::Greek] => (Script::Greek, GREEK_TLDS),
            _ => return None,
        };
        if !self.skeleton(label).is_ascii() {
            return None;
        }
        let tld_in_script = top_level_domain_unicode
            .chars()
            .any(|c| c.script() == script);
        if tld_in_script || operating_tlds.contains(&top_level_domain) {
            return None;
        }
        Some(SpoofResult::UnsafeUnknown)
    }

    /// Per-label top-domain match: the label skeleton alone and joined with
    /// the TLD skeleton, with the own-domain exception.
    fn match_top_domain(
        &self,
        label: &str,
        top_level_domain: &str,
        top_level_domain_unicode: &str,
    ) -> Option<TopDomainEntry> {
        let tld_display = if top_level_domain_unicode.is_empty() {
            top_level_domain
        } else {
            top_level_domain_unicode
        };
        for label_skeleton in self.get_skeletons(label) {
            let joined = format!("{label_skeleton}.{}", self.skeleton(tld_display));
            for candidate in [label_skeleton, joined] {
                if let Some(entry) = self.top_domains.get(candidate.as_str()) {
                    let own_ascii = format!("{label}.{top_level_domain}");
                    let own_display = format!("{label}.{tld_display}");
                    if entry.domain == own_ascii || entry.domain == own_display {
                        continue;
                    }
                    return Some(*entry);
                }
            }
        }
        None
    }

    fn safe_to_display_as_unicode(
        &self,
        label: &str,
        top_level_domain: &str,
        top_level_domain_unicode: &str,
    ) -> SpoofResult {
        // Plain-ASCII lookalikes ("paypa1") are out of scope here.
        if label.is_ascii() {
            return SpoofResult::Safe;
        }
        if label.chars().any(is_always_unsafe) {
            return SpoofResult::UnsafeUnknown;
        }
        let scripts = resolved_scripts(label);
        // Unrecognized codepoints never auto-decode.
        if scripts.contains(&Script::Unknown) {
            return SpoofResult::UnsafeUnknown;
        }
        if !allowed_script_mix(&scripts) {
            return SpoofResult::UnsafeUnknown;
        }
        if let Some(result) = self.check_whole_script_confusable(
            label,
            &scripts,
            top_level_domain,
            top_level_domain_unicode,
        ) {
            return result;
        }
        if let Some(entry) =
            self.match_top_domain(label, top_level_domain, top_level_domain_unicode)
        {
            return SpoofResult::UnsafeMatch(entry);
        }
        SpoofResult::Safe
    }
}

/// Skeletons of `host` for top-domain comparison.
pub fn get_skeletons(host: &str) -> Skeletons {
    checker().get_skeletons(host)
}

/// Look a skeleton up in the top-domain table.
pub fn lookup_skeleton_in_top_domains(skeleton: &str) -> Option<TopDomainEntry> {
    checker().lookup_skeleton_in_top_domains(skeleton)
}

/// Strip combining marks from an all-Latin host.
pub fn maybe_remove_diacritics(host: &str) -> String {
    checker().remove_diacritics(host)
}

pub(crate) fn safe_to_display_as_unicode(
    label: &str,
    top_level_domain: &str,
    top_level_domain_unicode: &str,
) -> SpoofResult {
    checker().safe_to_display_as_unicode(label, top_level_domain, top_level_domain_unicode)
}

pub(crate) fn get_similar_top_domain(host: &str) -> Option<TopDomainEntry> {
    checker().get_similar_top_domain(host)
}
