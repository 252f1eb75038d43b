/// Errors from converting a punycode label or domain to another form
///
/// These never escape the crate: a label that fails conversion is displayed
/// in its encoded form instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdnError {
    /// The ACE suffix is not decodable punycode
    InvalidPunycode,
    /// The decoded label is not NFC-normalized
    NotNormalized,
    /// Re-encoding the decoded label does not reproduce the input
    RoundTripMismatch,
    /// The decoded label contains a character unfit for a hostname
    DisallowedCharacter,
    /// The domain failed IDNA ToASCII processing
    InvalidDomain,
}

impl core::fmt::Display for IdnError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPunycode => "Invalid punycode",
            Self::NotNormalized => "Decoded label is not NFC",
            Self::RoundTripMismatch => "Decoded label does not round-trip",
            Self::DisallowedCharacter => "Disallowed character in decoded label",
            Self::InvalidDomain => "IDNA processing error",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for IdnError {}
