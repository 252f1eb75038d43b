//! URL display formatting with IDN spoof protection.
//!
//! Formats URLs the way an address bar shows them: percent-escapes are
//! decoded where that cannot change meaning, punycode hosts are converted to
//! native script only when the converted form cannot be mistaken for another
//! site, and every elision (credentials, scheme, "www.", trailing slash) is
//! recorded as an offset adjustment so caller cursor positions survive the
//! rewrite.
//!
//! ```
//! use urlfmt::{format_url, FormatUrlTypes, UnescapeRule};
//!
//! let formatted = format_url(
//!     "http://www.example.com/",
//!     FormatUrlTypes::OMIT_DEFAULTS | FormatUrlTypes::OMIT_TRIVIAL_SUBDOMAINS,
//!     UnescapeRule::NORMAL,
//! );
//! assert_eq!(formatted.text, "example.com");
//! ```

// Internal modules (not public API)
mod confusables;
mod error;
mod format;
mod idn;
mod offset;
mod parse;
mod scheme;
mod spoof;
mod top_domains;
mod types;
mod unicode;

// Public API
pub use format::{
    FormattedUrl, append_formatted_host, can_strip_trailing_slash, format_url, strip_www,
    strip_www_from_host_component,
};
pub use idn::{
    IdnConversionResult, idn_to_unicode, idn_to_unicode_with_adjustments,
    unsafe_idn_to_unicode_with_details,
};
pub use offset::{Adjustment, adjust_offset, adjust_offsets, merge_sequential_adjustments};
pub use parse::{Component, Parsed};
pub use spoof::{
    Skeletons, SpoofResult, TopDomainEntry, get_skeletons, lookup_skeleton_in_top_domains,
    maybe_remove_diacritics,
};
pub use types::{FormatUrlTypes, UnescapeRule};
