use crate::utils::codec::{Codec, Reader};

enum_builder! {@U16
    EnumName: CipherSuite;
    EnumVal {
        TLS_RSA_WITH_AES_128_GCM_SHA256 => 0x009c,
        TLS_RSA_WITH_AES_256_GCM_SHA384 => 0x009d,
        TLS_DHE_RSA_WITH_AES_128_GCM_SHA256 => 0x009e,
        TLS_DHE_RSA_WITH_AES_256_GCM_SHA384 => 0x009f,
        TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256 => 0xc02b,
        TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384 => 0xc02c,
        TLS_ECDH_ECDSA_WITH_AES_128_GCM_SHA256 => 0xc02d,
        TLS_ECDH_ECDSA_WITH_AES_256_GCM_SHA384 => 0xc02e,
        TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256 => 0xc02f,
        TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384 => 0xc030,
        TLS_ECDH_RSA_WITH_AES_128_GCM_SHA256 => 0xc031,
        TLS_ECDH_RSA_WITH_AES_256_GCM_SHA384 => 0xc032,
        TLS_RSA_WITH_AES_128_CCM => 0xc09c,
        TLS_RSA_WITH_AES_256_CCM => 0xc09d,
        TLS_DHE_RSA_WITH_AES_128_CCM => 0xc09e,
        TLS_DHE_RSA_WITH_AES_256_CCM => 0xc09f,
        TLS_RSA_WITH_AES_128_CCM_8 => 0xc0a0,
        TLS_RSA_WITH_AES_256_CCM_8 => 0xc0a1,
        TLS_DHE_RSA_WITH_AES_128_CCM_8 => 0xc0a2,
        TLS_DHE_RSA_WITH_AES_256_CCM_8 => 0xc0a3,
        TLS_ECDHE_ECDSA_WITH_AES_128_CCM => 0xc0ac,
        TLS_ECDHE_ECDSA_WITH_AES_256_CCM => 0xc0ad,
        TLS_ECDHE_ECDSA_WITH_AES_128_CCM_8 => 0xc0ae,
        TLS_ECDHE_ECDSA_WITH_AES_256_CCM_8 => 0xc0af
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BulkAlgorithm {
    AES_128_GCM,
    AES_256_GCM,
    AES_128_CCM,
    AES_256_CCM,
}

impl BulkAlgorithm {
    /// Encryption key length in bytes.
    pub fn key_len(&self) -> usize {
        match *self {
            BulkAlgorithm::AES_128_GCM | BulkAlgorithm::AES_128_CCM => 16,
            BulkAlgorithm::AES_256_GCM | BulkAlgorithm::AES_256_CCM => 32,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HashAlgorithm {
    // MD5,
    // SHA1,
    // SHA224,
    SHA256,
    SHA384,
    // SHA512,
}

#[allow(non_camel_case_types)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum KeyExchangeAlgorithm {
    RSA,
    DHE_RSA,
    ECDHE_RSA,
    ECDHE_ECDSA,
    PSK,
    DHE_PSK,
    RSA_PSK,
    ECDHE_PSK,
    ECDH_RSA,
    ECDH_ECDSA,
}

impl KeyExchangeAlgorithm {
    /// Public key algorithm of the peer's certificate.
    pub fn sig_pk_alg(&self) -> Option<PublicKeyAlgorithm> {
        match *self {
            KeyExchangeAlgorithm::RSA |
            KeyExchangeAlgorithm::DHE_RSA |
            KeyExchangeAlgorithm::ECDHE_RSA |
            KeyExchangeAlgorithm::RSA_PSK => Some(PublicKeyAlgorithm::RSA),

            KeyExchangeAlgorithm::ECDHE_ECDSA => Some(PublicKeyAlgorithm::ECDSA),

            // Static ECDH: the certificate carries the agreement key.
            KeyExchangeAlgorithm::ECDH_RSA |
            KeyExchangeAlgorithm::ECDH_ECDSA => Some(PublicKeyAlgorithm::ECKey),

            KeyExchangeAlgorithm::PSK |
            KeyExchangeAlgorithm::DHE_PSK |
            KeyExchangeAlgorithm::ECDHE_PSK => None,
        }
    }

    /// Algorithm of the signature sent in ServerKeyExchange, if any.
    pub fn sig_alg(&self) -> Option<PublicKeyAlgorithm> {
        match *self {
            KeyExchangeAlgorithm::RSA |
            KeyExchangeAlgorithm::DHE_RSA |
            KeyExchangeAlgorithm::ECDHE_RSA => Some(PublicKeyAlgorithm::RSA),

            KeyExchangeAlgorithm::ECDHE_ECDSA => Some(PublicKeyAlgorithm::ECDSA),

            KeyExchangeAlgorithm::ECDH_RSA |
            KeyExchangeAlgorithm::ECDH_ECDSA |
            KeyExchangeAlgorithm::RSA_PSK |
            KeyExchangeAlgorithm::PSK |
            KeyExchangeAlgorithm::DHE_PSK |
            KeyExchangeAlgorithm::ECDHE_PSK => None,
        }
    }

    pub fn uses_ec(&self) -> bool {
        match *self {
            KeyExchangeAlgorithm::ECDHE_RSA |
            KeyExchangeAlgorithm::ECDHE_ECDSA |
            KeyExchangeAlgorithm::ECDHE_PSK |
            KeyExchangeAlgorithm::ECDH_RSA |
            KeyExchangeAlgorithm::ECDH_ECDSA => true,

            KeyExchangeAlgorithm::RSA |
            KeyExchangeAlgorithm::DHE_RSA |
            KeyExchangeAlgorithm::PSK |
            KeyExchangeAlgorithm::DHE_PSK |
            KeyExchangeAlgorithm::RSA_PSK => false,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PublicKeyAlgorithm {
    RSA,
    ECDSA,
    /// A generic EC key, used for key agreement rather than signing.
    ECKey,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct ProtocolVersion {
    pub major: u8,
    pub minor: u8,
}

impl ProtocolVersion {
    pub const TLS1_2: ProtocolVersion = ProtocolVersion { major: 3, minor: 3 };
}

impl Codec for ProtocolVersion {
    fn encode(&self, bytes: &mut Vec<u8>) {
        self.major.encode(bytes);
        self.minor.encode(bytes);
    }

    fn read(r: &mut Reader) -> Option<ProtocolVersion> {
        let major = u8::read(r)?;
        let minor = u8::read(r)?;
        Some(ProtocolVersion { major, minor })
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct SuiteFlags(u8);

impl SuiteFlags {
    pub const NONE: SuiteFlags = SuiteFlags(0);
    /// Truncated 8-byte authentication tag (CCM_8).
    pub const SHORT_TAG: SuiteFlags = SuiteFlags(0x01);

    pub fn contains(&self, other: SuiteFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Static description of one ciphersuite.
#[derive(Debug, PartialEq, Eq)]
pub struct CiphersuiteDescriptor {
    pub suite: CipherSuite,

    /// Canonical name, as used in configuration.
    pub name: &'static str,

    /// How to do bulk encryption.
    pub bulk: BulkAlgorithm,

    /// How to do hashing.
    pub hash: HashAlgorithm,

    pub key_exchange: KeyExchangeAlgorithm,

    pub min_version: ProtocolVersion,
    pub max_version: ProtocolVersion,

    pub flags: SuiteFlags,
}

impl CiphersuiteDescriptor {
    pub fn id(&self) -> u16 {
        self.suite.get_u16()
    }

    pub fn signature_pk_algorithm(&self) -> Option<PublicKeyAlgorithm> {
        self.key_exchange.sig_pk_alg()
    }

    pub fn signature_algorithm(&self) -> Option<PublicKeyAlgorithm> {
        self.key_exchange.sig_alg()
    }

    pub fn uses_elliptic_curve(&self) -> bool {
        self.key_exchange.uses_ec()
    }

    pub fn supports_version(&self, v: ProtocolVersion) -> bool {
        self.min_version <= v && v <= self.max_version
    }

    pub fn is_short_tag(&self) -> bool {
        self.flags.contains(SuiteFlags::SHORT_TAG)
    }

    pub fn tag_len(&self) -> usize {
        if self.is_short_tag() { 8 } else { 16 }
    }

    pub fn key_len(&self) -> usize {
        self.bulk.key_len()
    }

    /// How long the fixed part of the 'IV' is.
    ///
    /// This isn't usually an IV, but we continue the
    /// terminology misuse to match the standard.
    pub fn fixed_iv_len(&self) -> usize {
        4
    }

    pub fn digest_algorithm(&self) -> &'static ring::digest::Algorithm {
        match self.hash {
            HashAlgorithm::SHA256 => &ring::digest::SHA256,
            HashAlgorithm::SHA384 => &ring::digest::SHA384,
        }
    }

    /// The `ring` AEAD for the bulk cipher. `ring` has no CCM.
    pub fn aead_algorithm(&self) -> Option<&'static ring::aead::Algorithm> {
        match self.bulk {
            BulkAlgorithm::AES_128_GCM => Some(&ring::aead::AES_128_GCM),
            BulkAlgorithm::AES_256_GCM => Some(&ring::aead::AES_256_GCM),
            BulkAlgorithm::AES_128_CCM | BulkAlgorithm::AES_256_CCM => None,
        }
    }
}

/// Free-function forms for callers holding only a descriptor reference.
pub fn signature_pk_algorithm(d: &CiphersuiteDescriptor) -> Option<PublicKeyAlgorithm> {
    d.signature_pk_algorithm()
}

pub fn signature_algorithm(d: &CiphersuiteDescriptor) -> Option<PublicKeyAlgorithm> {
    d.signature_algorithm()
}

pub fn uses_elliptic_curve(d: &CiphersuiteDescriptor) -> bool {
    d.uses_elliptic_curve()
}
