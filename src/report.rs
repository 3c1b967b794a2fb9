use std::fmt::Write;

use ciphersuites::{self as cs, CiphersuiteDescriptor, SuiteError};

use crate::command::Command;

fn describe(d: &CiphersuiteDescriptor) -> String {
    format!("{:#06x}  {:<42} {:<12} {:<12} {:<7} {}.{}-{}.{}",
            d.id(), d.name,
            format!("{:?}", d.key_exchange),
            format!("{:?}", d.bulk),
            format!("{:?}", d.hash),
            d.min_version.major, d.min_version.minor,
            d.max_version.major, d.max_version.minor)
}

fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{:02x}", b);
    }
    out
}

/// Produce the output lines for `cmd`.
pub fn run(cmd: &Command) -> Result<Vec<String>, SuiteError> {
    match *cmd {
        Command::List => Ok(cs::supported_descriptors().map(describe).collect()),

        Command::Name(ref name) => cs::id_for_name(name)
            .map(|id| vec![format!("{:#06x}", id)])
            .ok_or_else(|| SuiteError::UnknownName(name.clone())),

        Command::Id(ref text) => {
            let id = cs::parse_id(text)?;
            Ok(vec![cs::name_for_id(id).to_string()])
        }

        Command::Check(ref list) => {
            let suites = cs::parse_list(list)?;
            debug!("{} ciphersuites resolved from '{}'", suites.len(), list);
            Ok(suites.iter()
                .map(|s| format!("{:#06x}  {}", s.get_u16(), cs::name_for_id(s.get_u16())))
                .collect())
        }

        Command::Wire => Ok(vec![to_hex(&cs::supported_encoding()?)]),

        Command::Help(ref usage) => Ok(vec![usage.clone()]),
    }
}
