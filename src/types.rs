use bitflags::bitflags;

/// URL scheme types recognized by the formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    #[default]
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    File,
    Filesystem,
    Mailto,
    NotSpecial,
}

impl SchemeType {
    /// Check if this is a standard scheme (authority-based layout)
    pub fn is_standard(self) -> bool {
        !matches!(self, Self::Mailto | Self::NotSpecial)
    }
}

bitflags! {
    /// Elision options applied when formatting a URL for display.
    ///
    /// Each flag is independent; combine them with `|`. [`Self::OMIT_DEFAULTS`]
    /// is the preset most display surfaces want.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FormatUrlTypes: u32 {
        /// Drop the username and password.
        const OMIT_USERNAME_PASSWORD = 1 << 0;
        /// Drop "http://" (subject to the "ftp." host guard).
        const OMIT_HTTP = 1 << 1;
        /// Drop the path when it is nothing but a trailing "/".
        const OMIT_TRAILING_SLASH_ON_BARE_HOSTNAME = 1 << 2;
        /// Drop "https://" (subject to the "ftp." host guard).
        const OMIT_HTTPS = 1 << 3;
        /// Drop a leading "www." label when display-safe.
        const OMIT_TRIVIAL_SUBDOMAINS = 1 << 4;
        /// Drop everything after the host (standard, non-file schemes only).
        const TRIM_AFTER_HOST = 1 << 5;
        /// Drop "file://".
        const OMIT_FILE_SCHEME = 1 << 6;
        /// Drop "mailto:".
        const OMIT_MAILTO_SCHEME = 1 << 7;

        /// The common display preset.
        const OMIT_DEFAULTS = Self::OMIT_USERNAME_PASSWORD.bits()
            | Self::OMIT_HTTP.bits()
            | Self::OMIT_TRAILING_SLASH_ON_BARE_HOSTNAME.bits();
    }
}

impl FormatUrlTypes {
    /// Format with no elision at all.
    pub const OMIT_NOTHING: Self = Self::empty();
}

bitflags! {
    /// Which classes of percent-escaped bytes to decode for display.
    ///
    /// Escapes whose decoded form could change how the string re-parses, or
    /// that decode to control or direction-altering characters, are kept
    /// escaped no matter which rules are set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct UnescapeRule: u32 {
        /// Decode ordinary printable characters and valid UTF-8 sequences.
        const NORMAL = 1 << 0;
        /// Also decode "%20".
        const SPACES = 1 << 1;
        /// Also decode "%2F" and "%5C".
        const PATH_SEPARATORS = 1 << 2;
        /// Also decode URL-structural punctuation other than path separators.
        const URL_SPECIAL_CHARS_EXCEPT_PATH_SEPARATORS = 1 << 3;
        /// Rewrite "+" to a space (query components).
        const REPLACE_PLUS_WITH_SPACE = 1 << 4;
    }
}

impl UnescapeRule {
    /// Pure copy: no escape sequence is decoded.
    pub const NONE: Self = Self::empty();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_standardness() {
        assert!(SchemeType::Http.is_standard());
        assert!(SchemeType::File.is_standard());
        assert!(SchemeType::Filesystem.is_standard());
        assert!(!SchemeType::Mailto.is_standard());
        assert!(!SchemeType::NotSpecial.is_standard());
    }

    #[test]
    fn test_omit_defaults_composition() {
        let defaults = FormatUrlTypes::OMIT_DEFAULTS;
        assert!(defaults.contains(FormatUrlTypes::OMIT_USERNAME_PASSWORD));
        assert!(defaults.contains(FormatUrlTypes::OMIT_HTTP));
        assert!(defaults.contains(FormatUrlTypes::OMIT_TRAILING_SLASH_ON_BARE_HOSTNAME));
        assert!(!defaults.contains(FormatUrlTypes::OMIT_HTTPS));
        assert!(!defaults.contains(FormatUrlTypes::OMIT_TRIVIAL_SUBDOMAINS));
    }

    #[test]
    fn test_unescape_rule_none_is_empty() {
        assert_eq!(UnescapeRule::NONE, UnescapeRule::empty());
        assert!(!UnescapeRule::NONE.contains(UnescapeRule::NORMAL));
    }
}
