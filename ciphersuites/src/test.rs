use std::sync::{Arc, Barrier};
use std::thread;

use super::*;

use log::{self, Record, Metadata, Level, SetLoggerError};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, _: &Metadata) -> bool { true }

    fn log(&self, record: &Record) {
        println!("{} - {}", record.level(), record.args())
    }

    fn flush(&self) {}
}

impl SimpleLogger {
    fn init() -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(SimpleLogger))?;
        log::set_max_level(Level::Trace.to_level_filter());
        Ok(())
    }
}

const ECDHE_ECDSA_AES128: &str = "TLS-ECDHE-ECDSA-WITH-AES-128-GCM-SHA256";

#[test]
fn test_supported_follows_preference() {
    let _ = SimpleLogger::init();
    let supported = list_supported();

    let expected: Vec<CipherSuite> = PREFERENCE.iter()
        .cloned()
        .filter(|s| find_by_id(s.get_u16()).is_some())
        .collect();
    assert_eq!(supported, &expected[..]);
    assert_eq!(supported.len(), 24);
    assert_eq!(supported[0], CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384);
    assert_eq!(supported[23], CipherSuite::TLS_RSA_WITH_AES_128_CCM_8);
}

#[test]
fn test_supported_is_memoized() {
    let a = list_supported();
    let b = list_supported();
    assert_eq!(a.as_ptr(), b.as_ptr());
    assert_eq!(a, b);
}

#[test]
fn test_filter_skips_unimplemented() {
    let preference = [
        CipherSuite::Unknown(0x1301),
        CipherSuite::TLS_RSA_WITH_AES_128_CCM,
        CipherSuite::Unknown(0),
        CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
        CipherSuite::TLS_RSA_WITH_AES_128_CCM,
    ];
    let list = filter_supported(&preference, DescriptorTable::builtin());
    assert_eq!(list, vec![CipherSuite::TLS_RSA_WITH_AES_128_CCM,
                          CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256]);
}

#[test]
fn test_filter_reduced_build() {
    // Only the two ECDHE-ECDSA GCM suites compiled in.
    let table = DescriptorTable::new(&DEFINITIONS[..2]);
    let list = filter_supported(PREFERENCE, &table);
    assert_eq!(list, vec![CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
                          CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256]);
    assert!(filter_supported(PREFERENCE, &DescriptorTable::new(&[])).is_empty());
}

#[test]
fn test_concurrent_callers_agree() {
    let barrier = Arc::new(Barrier::new(8));
    let handles: Vec<_> = (0..8).map(|_| {
        let barrier = barrier.clone();
        thread::spawn(move || {
            barrier.wait();
            list_supported().to_vec()
        })
    }).collect();

    let results: Vec<Vec<CipherSuite>> = handles.into_iter()
        .map(|h| h.join().unwrap())
        .collect();
    for r in &results {
        assert_eq!(r.as_slice(), list_supported());
    }
}

#[test]
fn test_lookup_round_trip() {
    let table = DescriptorTable::builtin();
    assert_eq!(table.len(), 24);
    for d in table.iter() {
        assert_eq!(find_by_name(d.name), Some(d));
        assert_eq!(find_by_id(d.id()), Some(d));
        assert_eq!(name_for_id(d.id()), d.name);
        assert_eq!(id_for_name(d.name), Some(d.id()));
    }
}

#[test]
fn test_names_and_ids_are_unique() {
    let table = DescriptorTable::builtin();
    for (i, a) in table.iter().enumerate() {
        assert_ne!(a.id(), 0);
        for b in table.iter().skip(i + 1) {
            assert_ne!(a.id(), b.id());
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn test_name_id_translation() {
    let id = id_for_name(ECDHE_ECDSA_AES128).unwrap();
    assert_eq!(id, 0xc02b);
    assert_eq!(name_for_id(id), ECDHE_ECDSA_AES128);

    assert_eq!(name_for_id(65000), "unknown");
    assert_eq!(name_for_id(0), UNKNOWN_NAME);
    assert_eq!(id_for_name(""), None);
    assert_eq!(id_for_name("tls-ecdhe-ecdsa-with-aes-128-gcm-sha256"), None);
    assert!(find_by_id(0).is_none());
    assert!(find_by_name("").is_none());
}

#[test]
fn test_signature_algorithms() {
    let ecdsa = find_by_id(0xc02b).unwrap();
    let rsa = find_by_id(0xc02f).unwrap();
    let ecdh_rsa = find_by_name("TLS-ECDH-RSA-WITH-AES-128-GCM-SHA256").unwrap();
    let dhe = find_by_id(0x009e).unwrap();

    assert_eq!(signature_pk_algorithm(ecdsa), Some(PublicKeyAlgorithm::ECDSA));
    assert_eq!(signature_pk_algorithm(rsa), Some(PublicKeyAlgorithm::RSA));
    assert_eq!(signature_pk_algorithm(ecdh_rsa), Some(PublicKeyAlgorithm::ECKey));
    assert_eq!(signature_pk_algorithm(dhe), Some(PublicKeyAlgorithm::RSA));

    assert_eq!(signature_algorithm(ecdsa), Some(PublicKeyAlgorithm::ECDSA));
    assert_eq!(signature_algorithm(rsa), Some(PublicKeyAlgorithm::RSA));
    assert_eq!(signature_algorithm(ecdh_rsa), None);
}

#[test]
fn test_psk_key_exchanges() {
    assert_eq!(KeyExchangeAlgorithm::RSA_PSK.sig_pk_alg(), Some(PublicKeyAlgorithm::RSA));
    assert_eq!(KeyExchangeAlgorithm::RSA_PSK.sig_alg(), None);
    assert_eq!(KeyExchangeAlgorithm::PSK.sig_pk_alg(), None);
    assert_eq!(KeyExchangeAlgorithm::ECDHE_PSK.sig_pk_alg(), None);
    assert!(KeyExchangeAlgorithm::ECDHE_PSK.uses_ec());
    assert!(!KeyExchangeAlgorithm::DHE_PSK.uses_ec());
}

#[test]
fn test_elliptic_curve_usage() {
    for d in DescriptorTable::builtin().iter() {
        assert_eq!(uses_elliptic_curve(d), d.name.contains("ECDH"), "{}", d.name);
    }
    assert!(!find_by_name("TLS-RSA-WITH-AES-128-GCM-SHA256").unwrap().uses_elliptic_curve());
    assert!(!find_by_name("TLS-DHE-RSA-WITH-AES-256-CCM").unwrap().uses_elliptic_curve());
}

#[test]
fn test_descriptor_parameters() {
    for d in DescriptorTable::builtin().iter() {
        assert!(d.supports_version(ProtocolVersion::TLS1_2));
        assert!(!d.supports_version(ProtocolVersion { major: 3, minor: 1 }));
        assert_eq!(d.is_short_tag(), d.name.ends_with("-8"));
        assert_eq!(d.tag_len(), if d.is_short_tag() { 8 } else { 16 });
        assert_eq!(d.aead_algorithm().is_some(), d.name.contains("GCM"));
    }

    let d = find_by_id(0xc02c).unwrap();
    assert_eq!(d.key_len(), 32);
    assert_eq!(d.fixed_iv_len(), 4);
    assert_eq!(d.digest_algorithm().output_len(), 48);
    assert_eq!(d.aead_algorithm().map(|a| a.key_len()), Some(32));
}

#[test]
fn test_parse_list() {
    let list = parse_list("TLS-RSA-WITH-AES-128-CCM:0xc02b, 49199 TLS-RSA-WITH-AES-128-CCM").unwrap();
    assert_eq!(list, vec![CipherSuite::TLS_RSA_WITH_AES_128_CCM,
                          CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
                          CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256]);

    assert_eq!(parse_list("TLS-NOPE"), Err(SuiteError::UnknownName("TLS-NOPE".to_string())));
    assert_eq!(parse_list("0x1301"), Err(SuiteError::UnknownId(0x1301)));
    assert_eq!(parse_list("0"), Err(SuiteError::UnknownId(0)));
    assert_eq!(parse_list(" : ,"), Err(SuiteError::EmptyList));
}

#[test]
fn test_parse_id() {
    assert_eq!(parse_id("0xC02B"), Ok(0xc02b));
    assert_eq!(parse_id(" 156 "), Ok(0x009c));
    assert_eq!(parse_id("0x10000"), Err(SuiteError::InvalidId("0x10000".to_string())));
    assert!(parse_id("ff").is_err());
    assert!(parse_id("0x").is_err());
}

#[test]
fn test_signed_ids_rejected() {
    assert_eq!(parse_id("+49195"), Err(SuiteError::InvalidId("+49195".to_string())));
    assert_eq!(parse_id("0x+c02b"), Err(SuiteError::InvalidId("0x+c02b".to_string())));
    assert!(parse_list("+49195").is_err());
    assert!(parse_list("0x+c02b").is_err());
}

#[test]
fn test_error_display() {
    assert_eq!(SuiteError::UnknownId(0x1301).to_string(),
               "unknown ciphersuite identifier 0x1301");
    assert_eq!(SuiteError::UnknownName("x".to_string()).to_string(),
               "unknown ciphersuite name 'x'");
}

#[test]
fn test_suite_vector() {
    let bytes = supported_encoding().unwrap();
    assert_eq!(bytes.len(), 2 + 2 * list_supported().len());
    assert_eq!(&bytes[..4], &[0x00, 0x30, 0xc0, 0x2c]);

    let mut rd = Reader::init(&bytes);
    assert_eq!(read_suites(&mut rd).unwrap(), list_supported());
    assert!(!rd.any_left());

    // A peer offering a TLS 1.3 suite and an odd trailing byte.
    let mut rd = Reader::init(&[0x00, 0x04, 0x13, 0x01, 0xc0, 0x2f]);
    assert_eq!(read_suites(&mut rd).unwrap(),
               vec![CipherSuite::Unknown(0x1301),
                    CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256]);
    assert!(read_suites(&mut Reader::init(&[0x00, 0x03, 0xc0, 0x2f, 0x00])).is_none());
    assert!(read_suites(&mut Reader::init(&[0x00, 0x00])).is_none());
}

#[test]
fn test_version_codec() {
    assert_eq!(ProtocolVersion::TLS1_2.get_encoding(), vec![3, 3]);
    assert_eq!(ProtocolVersion::read_bytes(&[3, 1]), Some(ProtocolVersion { major: 3, minor: 1 }));
    assert!(ProtocolVersion { major: 3, minor: 1 } < ProtocolVersion::TLS1_2);
}

#[test]
fn test_oversized_suite_vector() {
    let suites = vec![CipherSuite::TLS_RSA_WITH_AES_128_CCM; 40000];
    let mut bytes = vec![0x16];
    assert_eq!(encode_suites(&suites, &mut bytes), Err(SuiteError::OversizedList(40000)));
    assert_eq!(bytes, vec![0x16]);

    // The largest list that still fits the length prefix.
    let suites = vec![CipherSuite::TLS_RSA_WITH_AES_128_CCM; 32767];
    assert_eq!(encode_suites(&suites, &mut bytes), Ok(()));
    let mut rd = Reader::init(&bytes[1..]);
    assert_eq!(read_suites(&mut rd).map(|v| v.len()), Some(32767));
    assert!(!rd.any_left());
}
