use crate::suites::{CipherSuite, CiphersuiteDescriptor, BulkAlgorithm,
    HashAlgorithm, KeyExchangeAlgorithm, ProtocolVersion, SuiteFlags};

/// Ordered from most preferred to least preferred in terms of security.
///
/// 1. By key exchange: forward-secure > static
/// 2. By key length: AES-256 > AES-128
/// 3. By cipher mode: GCM > CCM > CCM_8
/// 4. By key exchange/auth again: EC > non-EC
///
/// Only TLS 1.2 AEAD suites are listed; CBC suites are not implemented.
pub static PREFERENCE: &[CipherSuite] = &[
    // AES-256 ephemeral
    CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
    CipherSuite::TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
    CipherSuite::TLS_DHE_RSA_WITH_AES_256_GCM_SHA384,
    CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_256_CCM,
    CipherSuite::TLS_DHE_RSA_WITH_AES_256_CCM,
    CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_256_CCM_8,
    CipherSuite::TLS_DHE_RSA_WITH_AES_256_CCM_8,

    // AES-128 ephemeral
    CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
    CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
    CipherSuite::TLS_DHE_RSA_WITH_AES_128_GCM_SHA256,
    CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_CCM,
    CipherSuite::TLS_DHE_RSA_WITH_AES_128_CCM,
    CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_CCM_8,
    CipherSuite::TLS_DHE_RSA_WITH_AES_128_CCM_8,

    // AES-256
    CipherSuite::TLS_RSA_WITH_AES_256_GCM_SHA384,
    CipherSuite::TLS_RSA_WITH_AES_256_CCM,
    CipherSuite::TLS_ECDH_RSA_WITH_AES_256_GCM_SHA384,
    CipherSuite::TLS_ECDH_ECDSA_WITH_AES_256_GCM_SHA384,
    CipherSuite::TLS_RSA_WITH_AES_256_CCM_8,

    // AES-128
    CipherSuite::TLS_RSA_WITH_AES_128_GCM_SHA256,
    CipherSuite::TLS_RSA_WITH_AES_128_CCM,
    CipherSuite::TLS_ECDH_RSA_WITH_AES_128_GCM_SHA256,
    CipherSuite::TLS_ECDH_ECDSA_WITH_AES_128_GCM_SHA256,
    CipherSuite::TLS_RSA_WITH_AES_128_CCM_8,
];

macro_rules! tls12_suite {
    ($suite: ident, $name: literal, $bulk: ident, $hash: ident, $kx: ident, $flags: ident) => {
        CiphersuiteDescriptor {
            suite: CipherSuite::$suite,
            name: $name,
            bulk: BulkAlgorithm::$bulk,
            hash: HashAlgorithm::$hash,
            key_exchange: KeyExchangeAlgorithm::$kx,
            min_version: ProtocolVersion::TLS1_2,
            max_version: ProtocolVersion::TLS1_2,
            flags: SuiteFlags::$flags,
        }
    }
}

pub const DEFINITIONS: &[CiphersuiteDescriptor] = &[
    tls12_suite!(TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256, "TLS-ECDHE-ECDSA-WITH-AES-128-GCM-SHA256",
                 AES_128_GCM, SHA256, ECDHE_ECDSA, NONE),
    tls12_suite!(TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384, "TLS-ECDHE-ECDSA-WITH-AES-256-GCM-SHA384",
                 AES_256_GCM, SHA384, ECDHE_ECDSA, NONE),
    tls12_suite!(TLS_ECDHE_ECDSA_WITH_AES_256_CCM, "TLS-ECDHE-ECDSA-WITH-AES-256-CCM",
                 AES_256_CCM, SHA256, ECDHE_ECDSA, NONE),
    tls12_suite!(TLS_ECDHE_ECDSA_WITH_AES_256_CCM_8, "TLS-ECDHE-ECDSA-WITH-AES-256-CCM-8",
                 AES_256_CCM, SHA256, ECDHE_ECDSA, SHORT_TAG),
    tls12_suite!(TLS_ECDHE_ECDSA_WITH_AES_128_CCM, "TLS-ECDHE-ECDSA-WITH-AES-128-CCM",
                 AES_128_CCM, SHA256, ECDHE_ECDSA, NONE),
    tls12_suite!(TLS_ECDHE_ECDSA_WITH_AES_128_CCM_8, "TLS-ECDHE-ECDSA-WITH-AES-128-CCM-8",
                 AES_128_CCM, SHA256, ECDHE_ECDSA, SHORT_TAG),

    tls12_suite!(TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256, "TLS-ECDHE-RSA-WITH-AES-128-GCM-SHA256",
                 AES_128_GCM, SHA256, ECDHE_RSA, NONE),
    tls12_suite!(TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384, "TLS-ECDHE-RSA-WITH-AES-256-GCM-SHA384",
                 AES_256_GCM, SHA384, ECDHE_RSA, NONE),

    tls12_suite!(TLS_DHE_RSA_WITH_AES_256_GCM_SHA384, "TLS-DHE-RSA-WITH-AES-256-GCM-SHA384",
                 AES_256_GCM, SHA384, DHE_RSA, NONE),
    tls12_suite!(TLS_DHE_RSA_WITH_AES_128_GCM_SHA256, "TLS-DHE-RSA-WITH-AES-128-GCM-SHA256",
                 AES_128_GCM, SHA256, DHE_RSA, NONE),
    tls12_suite!(TLS_DHE_RSA_WITH_AES_256_CCM, "TLS-DHE-RSA-WITH-AES-256-CCM",
                 AES_256_CCM, SHA256, DHE_RSA, NONE),
    tls12_suite!(TLS_DHE_RSA_WITH_AES_256_CCM_8, "TLS-DHE-RSA-WITH-AES-256-CCM-8",
                 AES_256_CCM, SHA256, DHE_RSA, SHORT_TAG),
    tls12_suite!(TLS_DHE_RSA_WITH_AES_128_CCM, "TLS-DHE-RSA-WITH-AES-128-CCM",
                 AES_128_CCM, SHA256, DHE_RSA, NONE),
    tls12_suite!(TLS_DHE_RSA_WITH_AES_128_CCM_8, "TLS-DHE-RSA-WITH-AES-128-CCM-8",
                 AES_128_CCM, SHA256, DHE_RSA, SHORT_TAG),

    tls12_suite!(TLS_RSA_WITH_AES_256_GCM_SHA384, "TLS-RSA-WITH-AES-256-GCM-SHA384",
                 AES_256_GCM, SHA384, RSA, NONE),
    tls12_suite!(TLS_RSA_WITH_AES_128_GCM_SHA256, "TLS-RSA-WITH-AES-128-GCM-SHA256",
                 AES_128_GCM, SHA256, RSA, NONE),
    tls12_suite!(TLS_RSA_WITH_AES_256_CCM, "TLS-RSA-WITH-AES-256-CCM",
                 AES_256_CCM, SHA256, RSA, NONE),
    tls12_suite!(TLS_RSA_WITH_AES_256_CCM_8, "TLS-RSA-WITH-AES-256-CCM-8",
                 AES_256_CCM, SHA256, RSA, SHORT_TAG),
    tls12_suite!(TLS_RSA_WITH_AES_128_CCM, "TLS-RSA-WITH-AES-128-CCM",
                 AES_128_CCM, SHA256, RSA, NONE),
    tls12_suite!(TLS_RSA_WITH_AES_128_CCM_8, "TLS-RSA-WITH-AES-128-CCM-8",
                 AES_128_CCM, SHA256, RSA, SHORT_TAG),

    tls12_suite!(TLS_ECDH_RSA_WITH_AES_128_GCM_SHA256, "TLS-ECDH-RSA-WITH-AES-128-GCM-SHA256",
                 AES_128_GCM, SHA256, ECDH_RSA, NONE),
    tls12_suite!(TLS_ECDH_RSA_WITH_AES_256_GCM_SHA384, "TLS-ECDH-RSA-WITH-AES-256-GCM-SHA384",
                 AES_256_GCM, SHA384, ECDH_RSA, NONE),

    tls12_suite!(TLS_ECDH_ECDSA_WITH_AES_128_GCM_SHA256, "TLS-ECDH-ECDSA-WITH-AES-128-GCM-SHA256",
                 AES_128_GCM, SHA256, ECDH_ECDSA, NONE),
    tls12_suite!(TLS_ECDH_ECDSA_WITH_AES_256_GCM_SHA384, "TLS-ECDH-ECDSA-WITH-AES-256-GCM-SHA384",
                 AES_256_GCM, SHA384, ECDH_ECDSA, NONE),
];

/// Read-only view over a slice of descriptors.
///
/// Lookups are linear scans; the table holds a few dozen entries.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorTable {
    suites: &'static [CiphersuiteDescriptor],
}

static BUILTIN: DescriptorTable = DescriptorTable::new(DEFINITIONS);

impl DescriptorTable {
    pub const fn new(suites: &'static [CiphersuiteDescriptor]) -> DescriptorTable {
        DescriptorTable { suites }
    }

    /// Every ciphersuite compiled into this build.
    pub fn builtin() -> &'static DescriptorTable {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static CiphersuiteDescriptor> {
        let suites = self.suites;
        suites.iter()
    }

    /// Identifier 0 (TLS_NULL_WITH_NULL_NULL) is never found.
    pub fn find_by_id(&self, id: u16) -> Option<&'static CiphersuiteDescriptor> {
        if id == 0 {
            return None
        }
        let suites = self.suites;
        suites.iter().find(|d| d.id() == id)
    }

    /// Exact, case-sensitive match on the canonical name.
    pub fn find_by_name(&self, name: &str) -> Option<&'static CiphersuiteDescriptor> {
        if name.is_empty() {
            return None
        }
        let suites = self.suites;
        suites.iter().find(|d| d.name == name)
    }
}
