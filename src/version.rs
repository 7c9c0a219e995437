//! The version of this library, for hosts that log or check what they were built against.

/// Full version string, `major.minor.patch`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const MAJOR: u32 = parse(env!("CARGO_PKG_VERSION_MAJOR"));
const MINOR: u32 = parse(env!("CARGO_PKG_VERSION_MINOR"));
const PATCH: u32 = parse(env!("CARGO_PKG_VERSION_PATCH"));

// Cargo guarantees the components are plain decimal numbers.
const fn parse(digits: &str) -> u32 {
    let bytes = digits.as_bytes();
    let mut value = 0;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}

pub const fn major() -> u32 {
    MAJOR
}

pub const fn minor() -> u32 {
    MINOR
}

pub const fn patch() -> u32 {
    PATCH
}

pub const fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_match_the_version_string() {
        assert_eq!(version(), format!("{}.{}.{}", major(), minor(), patch()));
    }

    #[test]
    fn parses_multi_digit_components() {
        assert_eq!(parse("0"), 0);
        assert_eq!(parse("42"), 42);
        assert_eq!(parse("1015"), 1015);
    }
}
