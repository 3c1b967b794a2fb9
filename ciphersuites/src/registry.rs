use std::collections::HashSet;
use std::sync::OnceLock;

use crate::data::SuiteError;
use crate::suites::{CipherSuite, CiphersuiteDescriptor};
use crate::table::{DescriptorTable, PREFERENCE};
use crate::utils::codec::{self, Reader};

/// Placeholder reported for identifiers missing from the table.
pub const UNKNOWN_NAME: &str = "unknown";

static SUPPORTED: OnceLock<Vec<CipherSuite>> = OnceLock::new();

/// Filter `preference` down to the suites present in `table`.
///
/// Relative order is kept. Identifiers without a descriptor and repeated
/// entries are dropped silently.
pub fn filter_supported(preference: &[CipherSuite], table: &DescriptorTable)
    -> Vec<CipherSuite>
{
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(preference.len());

    for &suite in preference {
        if table.find_by_id(suite.get_u16()).is_none() {
            trace!("{:?} is not implemented, skipping", suite);
            continue
        }
        if seen.insert(suite) {
            out.push(suite);
        }
    }
    out
}

/// Suites this build implements, most preferred first.
///
/// Computed on first use and shared for the rest of the process. Concurrent
/// first callers block until one of them has published the full list.
pub fn list_supported() -> &'static [CipherSuite] {
    SUPPORTED.get_or_init(|| {
        let list = filter_supported(PREFERENCE, DescriptorTable::builtin());
        debug!("{} of {} preferred ciphersuites supported",
               list.len(), PREFERENCE.len());
        list
    })
}

pub fn supported_descriptors() -> impl Iterator<Item = &'static CiphersuiteDescriptor> {
    list_supported().iter().filter_map(|s| find_by_id(s.get_u16()))
}

pub fn is_supported(suite: CipherSuite) -> bool {
    list_supported().contains(&suite)
}

pub fn find_by_id(id: u16) -> Option<&'static CiphersuiteDescriptor> {
    DescriptorTable::builtin().find_by_id(id)
}

pub fn find_by_name(name: &str) -> Option<&'static CiphersuiteDescriptor> {
    DescriptorTable::builtin().find_by_name(name)
}

/// Canonical name for logging; never fails.
pub fn name_for_id(id: u16) -> &'static str {
    find_by_id(id).map_or(UNKNOWN_NAME, |d| d.name)
}

pub fn id_for_name(name: &str) -> Option<u16> {
    find_by_name(name).map(|d| d.id())
}

/// Parse a numeric identifier, decimal or `0x`-prefixed hex.
///
/// Only the syntax is checked here, not membership in the table.
pub fn parse_id(text: &str) -> Result<u16, SuiteError> {
    let text = text.trim();
    let invalid = || SuiteError::InvalidId(text.to_string());
    let (digits, radix) = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (text, 10),
    };

    // from_str_radix takes a leading '+'; names and ids must agree on that.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid())
    }
    u16::from_str_radix(digits, radix).map_err(|_| invalid())
}

fn resolve(entry: &str) -> Result<&'static CiphersuiteDescriptor, SuiteError> {
    if entry.starts_with(|c: char| c.is_ascii_digit()) {
        let id = parse_id(entry)?;
        find_by_id(id).ok_or(SuiteError::UnknownId(id))
    } else {
        find_by_name(entry).ok_or_else(|| SuiteError::UnknownName(entry.to_string()))
    }
}

/// Resolve a configured ciphersuite list.
///
/// Entries are names or identifiers separated by `:`, `,` or whitespace.
/// Order is kept and repeats are dropped.
pub fn parse_list(text: &str) -> Result<Vec<CipherSuite>, SuiteError> {
    let mut out: Vec<CipherSuite> = Vec::new();

    for entry in text.split(|c: char| c == ':' || c == ',' || c.is_whitespace()) {
        if entry.is_empty() {
            continue
        }
        let d = resolve(entry)?;
        if !out.contains(&d.suite) {
            out.push(d.suite);
        }
    }

    if out.is_empty() {
        return Err(SuiteError::EmptyList)
    }
    debug!("configured {} ciphersuites", out.len());
    Ok(out)
}

/// Append the ClientHello `cipher_suites` vector for `suites`.
///
/// Nothing is written when the list overflows the 16-bit length.
pub fn encode_suites(suites: &[CipherSuite], bytes: &mut Vec<u8>) -> Result<(), SuiteError> {
    codec::encode_vec_u16(bytes, suites)
        .map(|_| ())
        .ok_or(SuiteError::OversizedList(suites.len()))
}

/// Read a `cipher_suites` vector. Empty vectors are malformed.
pub fn read_suites(r: &mut Reader) -> Option<Vec<CipherSuite>> {
    codec::read_vec_u16::<CipherSuite>(r).and_then(|v| {
        if v.is_empty() { None } else { Some(v) }
    })
}

/// Encoded form of the supported list, as a client would offer it.
pub fn supported_encoding() -> Result<Vec<u8>, SuiteError> {
    let mut bytes = Vec::new();
    encode_suites(list_supported(), &mut bytes)?;
    Ok(bytes)
}
