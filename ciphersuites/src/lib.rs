//! Ciphersuite registry for a TLS 1.2 stack.
//!
//! Holds the descriptor table, the security-ordered preference list and the
//! lookups the handshake, certificate and configuration code build on.
#[macro_use]
extern crate log;

#[macro_use]
mod macros;

mod data;
mod utils;
mod suites;
mod table;
mod registry;
#[cfg(test)]
mod test;

pub use crate::data::SuiteError;
pub use crate::suites::{CipherSuite, CiphersuiteDescriptor, BulkAlgorithm,
    HashAlgorithm, KeyExchangeAlgorithm, PublicKeyAlgorithm, ProtocolVersion,
    SuiteFlags, signature_pk_algorithm, signature_algorithm, uses_elliptic_curve};
pub use crate::table::{DescriptorTable, DEFINITIONS, PREFERENCE};
pub use crate::registry::{UNKNOWN_NAME, filter_supported, list_supported,
    supported_descriptors, is_supported, find_by_id, find_by_name, name_for_id,
    id_for_name, parse_id, parse_list, encode_suites, read_suites,
    supported_encoding};
pub use crate::utils::codec::{Codec, Reader};
