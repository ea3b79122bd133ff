//! Syntactic validation of address and mask strings.
//!
//! These checks only look at the shape of the input. Whether a mask is a
//! contiguous prefix, or a `/NN` is within 0-32, is decided by
//! [`super::compute_subnet`].

use regex::Regex;
use std::sync::OnceLock;

/// One decimal octet, 0-255, 1-3 digits.
const OCTET: &str = r"(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

static DOTTED_REGEX: OnceLock<Regex> = OnceLock::new();
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_regex() -> &'static Regex {
    DOTTED_REGEX.get_or_init(|| {
        let pattern = format!(r"^{OCTET}\.{OCTET}\.{OCTET}\.{OCTET}$");
        Regex::new(&pattern).expect("Invalid Regex")
    })
}

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| Regex::new(r"^/[0-9]{1,2}$").expect("Invalid Regex"))
}

/// Check that `ip` is four dot separated decimal octets in 0-255.
///
/// No whitespace, sign or extra characters are allowed.
pub fn validate_address(ip: &str) -> bool {
    let ok = get_dotted_regex().is_match(ip);
    log::debug!("validate_address({ip:?}) = {ok}");
    ok
}

/// Check that `mask` is either `/` followed by one or two digits, or a
/// dotted-decimal value with the same grammar as [`validate_address`].
pub fn validate_mask(mask: &str) -> bool {
    let ok = if mask.starts_with('/') {
        get_cidr_regex().is_match(mask)
    } else {
        get_dotted_regex().is_match(mask)
    };
    log::debug!("validate_mask({mask:?}) = {ok}");
    ok
}

/// Per-keystroke filter for an address field: digits and dots.
///
/// Advisory only, [`validate_address`] still decides.
pub fn is_address_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Per-keystroke filter for a mask field: digits, dots and slash.
pub fn is_mask_char(c: char) -> bool {
    is_address_char(c) || c == '/'
}

/// Keep only the characters accepted by `accept`.
pub fn filter_input(input: &str, accept: fn(char) -> bool) -> String {
    input.chars().filter(|c| accept(*c)).collect()
}
