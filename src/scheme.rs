use crate::types::SchemeType;

/// Get the scheme type from a scheme string.
/// Filters by length first to minimize comparisons; raw input may carry an
/// uppercase scheme, so the final comparison ignores ASCII case.
pub(crate) fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();

    match bytes.len() {
        2 if bytes.eq_ignore_ascii_case(b"ws") => SchemeType::Ws,
        3 if bytes.eq_ignore_ascii_case(b"wss") => SchemeType::Wss,
        3 if bytes.eq_ignore_ascii_case(b"ftp") => SchemeType::Ftp,
        4 if bytes.eq_ignore_ascii_case(b"http") => SchemeType::Http,
        4 if bytes.eq_ignore_ascii_case(b"file") => SchemeType::File,
        5 if bytes.eq_ignore_ascii_case(b"https") => SchemeType::Https,
        6 if bytes.eq_ignore_ascii_case(b"mailto") => SchemeType::Mailto,
        10 if bytes.eq_ignore_ascii_case(b"filesystem") => SchemeType::Filesystem,
        _ => SchemeType::NotSpecial,
    }
}
