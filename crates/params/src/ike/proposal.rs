//! Proposal keywords
//!
//! Each keyword names one transform of an IKE/ESP algorithm proposal, for
//! example `aes256` or `modp2048`. Algorithm identifiers are the IANA
//! "Transform Type" values; groups without an IANA value use the private
//! range.

#[cfg(feature = "serde")]
use serde::Serialize;

/// IKEv2 transform type a keyword belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[repr(u8)]
pub enum TransformKind {
    Encryption = 1,
    PseudoRandomFunction = 2,
    Integrity = 3,
    DiffieHellmanGroup = 4,
    ExtendedSequenceNumbers = 5,
}

/// One entry of a proposal keyword dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ProposalToken {
    /// Canonical keyword, matched byte-for-byte
    pub name: &'static str,
    /// Transform type
    pub kind: TransformKind,
    /// Algorithm identifier within `kind`
    pub id: u16,
    /// Key size in bits, 0 when fixed by the algorithm
    pub key_size: u16,
}

impl ProposalToken {
    pub const fn new(name: &'static str, kind: TransformKind, id: u16, key_size: u16) -> Self {
        Self {
            name,
            kind,
            id,
            key_size,
        }
    }
}

// Encryption algorithms
pub const ENCR_DES: u16 = 2;
pub const ENCR_3DES: u16 = 3;
pub const ENCR_CAST: u16 = 6;
pub const ENCR_BLOWFISH: u16 = 7;
pub const ENCR_NULL: u16 = 11;
pub const ENCR_AES_CBC: u16 = 12;
pub const ENCR_AES_CTR: u16 = 13;
pub const ENCR_AES_CCM_ICV8: u16 = 14;
pub const ENCR_AES_CCM_ICV12: u16 = 15;
pub const ENCR_AES_CCM_ICV16: u16 = 16;
pub const ENCR_AES_GCM_ICV8: u16 = 18;
pub const ENCR_AES_GCM_ICV12: u16 = 19;
pub const ENCR_AES_GCM_ICV16: u16 = 20;
pub const ENCR_NULL_AUTH_AES_GMAC: u16 = 21;
pub const ENCR_CAMELLIA_CBC: u16 = 23;
pub const ENCR_CHACHA20_POLY1305: u16 = 28;

// Integrity algorithms
pub const AUTH_HMAC_MD5_96: u16 = 1;
pub const AUTH_HMAC_SHA1_96: u16 = 2;
pub const AUTH_AES_XCBC_96: u16 = 5;
pub const AUTH_AES_CMAC_96: u16 = 8;
pub const AUTH_HMAC_SHA2_256_128: u16 = 12;
pub const AUTH_HMAC_SHA2_384_192: u16 = 13;
pub const AUTH_HMAC_SHA2_512_256: u16 = 14;

// Pseudo-random functions
pub const PRF_HMAC_MD5: u16 = 1;
pub const PRF_HMAC_SHA1: u16 = 2;
pub const PRF_AES128_XCBC: u16 = 4;
pub const PRF_HMAC_SHA2_256: u16 = 5;
pub const PRF_HMAC_SHA2_384: u16 = 6;
pub const PRF_HMAC_SHA2_512: u16 = 7;
pub const PRF_AES128_CMAC: u16 = 8;

// Key exchange groups
pub const MODP_768_BIT: u16 = 1;
pub const MODP_1024_BIT: u16 = 2;
pub const MODP_1536_BIT: u16 = 5;
pub const MODP_2048_BIT: u16 = 14;
pub const MODP_3072_BIT: u16 = 15;
pub const MODP_4096_BIT: u16 = 16;
pub const MODP_6144_BIT: u16 = 17;
pub const MODP_8192_BIT: u16 = 18;
pub const ECP_256_BIT: u16 = 19;
pub const ECP_384_BIT: u16 = 20;
pub const ECP_521_BIT: u16 = 21;
pub const MODP_1024_160: u16 = 22;
pub const MODP_2048_224: u16 = 23;
pub const MODP_2048_256: u16 = 24;
pub const ECP_192_BIT: u16 = 25;
pub const ECP_224_BIT: u16 = 26;
pub const ECP_224_BP: u16 = 27;
pub const ECP_256_BP: u16 = 28;
pub const ECP_384_BP: u16 = 29;
pub const ECP_512_BP: u16 = 30;
pub const CURVE_25519: u16 = 31;
pub const CURVE_448: u16 = 32;
pub const NTRU_112_BIT: u16 = 1030;
pub const NTRU_128_BIT: u16 = 1031;
pub const NTRU_192_BIT: u16 = 1032;
pub const NTRU_256_BIT: u16 = 1033;

// Extended sequence numbers
pub const NO_EXT_SEQ_NUMBERS: u16 = 0;
pub const EXT_SEQ_NUMBERS: u16 = 1;

use self::TransformKind::{
    DiffieHellmanGroup as Dh, Encryption as Encr, ExtendedSequenceNumbers as Esn,
    Integrity as Integ, PseudoRandomFunction as Prf,
};

const fn t(name: &'static str, kind: TransformKind, id: u16, key_size: u16) -> ProposalToken {
    ProposalToken::new(name, kind, id, key_size)
}

/// Standard proposal keyword dictionary
pub static DEFAULT_KEYWORDS: &[ProposalToken] = &[
    t("null", Encr, ENCR_NULL, 0),
    t("des", Encr, ENCR_DES, 0),
    t("3des", Encr, ENCR_3DES, 0),
    t("aes", Encr, ENCR_AES_CBC, 128),
    t("aes128", Encr, ENCR_AES_CBC, 128),
    t("aes192", Encr, ENCR_AES_CBC, 192),
    t("aes256", Encr, ENCR_AES_CBC, 256),
    t("aes128ctr", Encr, ENCR_AES_CTR, 128),
    t("aes192ctr", Encr, ENCR_AES_CTR, 192),
    t("aes256ctr", Encr, ENCR_AES_CTR, 256),
    t("aes128ccm8", Encr, ENCR_AES_CCM_ICV8, 128),
    t("aes128ccm64", Encr, ENCR_AES_CCM_ICV8, 128),
    t("aes128ccm12", Encr, ENCR_AES_CCM_ICV12, 128),
    t("aes128ccm96", Encr, ENCR_AES_CCM_ICV12, 128),
    t("aes128ccm16", Encr, ENCR_AES_CCM_ICV16, 128),
    t("aes128ccm128", Encr, ENCR_AES_CCM_ICV16, 128),
    t("aes256ccm8", Encr, ENCR_AES_CCM_ICV8, 256),
    t("aes256ccm12", Encr, ENCR_AES_CCM_ICV12, 256),
    t("aes256ccm16", Encr, ENCR_AES_CCM_ICV16, 256),
    t("aes128gcm8", Encr, ENCR_AES_GCM_ICV8, 128),
    t("aes128gcm64", Encr, ENCR_AES_GCM_ICV8, 128),
    t("aes128gcm12", Encr, ENCR_AES_GCM_ICV12, 128),
    t("aes128gcm96", Encr, ENCR_AES_GCM_ICV12, 128),
    t("aes128gcm16", Encr, ENCR_AES_GCM_ICV16, 128),
    t("aes128gcm128", Encr, ENCR_AES_GCM_ICV16, 128),
    t("aes192gcm16", Encr, ENCR_AES_GCM_ICV16, 192),
    t("aes256gcm8", Encr, ENCR_AES_GCM_ICV8, 256),
    t("aes256gcm12", Encr, ENCR_AES_GCM_ICV12, 256),
    t("aes256gcm16", Encr, ENCR_AES_GCM_ICV16, 256),
    t("aes256gcm128", Encr, ENCR_AES_GCM_ICV16, 256),
    t("aes128gmac", Encr, ENCR_NULL_AUTH_AES_GMAC, 128),
    t("aes192gmac", Encr, ENCR_NULL_AUTH_AES_GMAC, 192),
    t("aes256gmac", Encr, ENCR_NULL_AUTH_AES_GMAC, 256),
    t("blowfish", Encr, ENCR_BLOWFISH, 128),
    t("blowfish128", Encr, ENCR_BLOWFISH, 128),
    t("blowfish256", Encr, ENCR_BLOWFISH, 256),
    t("cast128", Encr, ENCR_CAST, 128),
    t("camellia", Encr, ENCR_CAMELLIA_CBC, 128),
    t("camellia128", Encr, ENCR_CAMELLIA_CBC, 128),
    t("camellia192", Encr, ENCR_CAMELLIA_CBC, 192),
    t("camellia256", Encr, ENCR_CAMELLIA_CBC, 256),
    t("chacha20poly1305", Encr, ENCR_CHACHA20_POLY1305, 256),
    t("md5", Integ, AUTH_HMAC_MD5_96, 0),
    t("sha", Integ, AUTH_HMAC_SHA1_96, 0),
    t("sha1", Integ, AUTH_HMAC_SHA1_96, 0),
    t("sha256", Integ, AUTH_HMAC_SHA2_256_128, 0),
    t("sha2_256", Integ, AUTH_HMAC_SHA2_256_128, 0),
    t("sha384", Integ, AUTH_HMAC_SHA2_384_192, 0),
    t("sha2_384", Integ, AUTH_HMAC_SHA2_384_192, 0),
    t("sha512", Integ, AUTH_HMAC_SHA2_512_256, 0),
    t("sha2_512", Integ, AUTH_HMAC_SHA2_512_256, 0),
    t("aesxcbc", Integ, AUTH_AES_XCBC_96, 0),
    t("aescmac", Integ, AUTH_AES_CMAC_96, 0),
    t("prfmd5", Prf, PRF_HMAC_MD5, 0),
    t("prfsha1", Prf, PRF_HMAC_SHA1, 0),
    t("prfaesxcbc", Prf, PRF_AES128_XCBC, 0),
    t("prfaescmac", Prf, PRF_AES128_CMAC, 0),
    t("prfsha256", Prf, PRF_HMAC_SHA2_256, 0),
    t("prfsha384", Prf, PRF_HMAC_SHA2_384, 0),
    t("prfsha512", Prf, PRF_HMAC_SHA2_512, 0),
    t("modp768", Dh, MODP_768_BIT, 0),
    t("modp1024", Dh, MODP_1024_BIT, 0),
    t("modp1536", Dh, MODP_1536_BIT, 0),
    t("modp2048", Dh, MODP_2048_BIT, 0),
    t("modp3072", Dh, MODP_3072_BIT, 0),
    t("modp4096", Dh, MODP_4096_BIT, 0),
    t("modp6144", Dh, MODP_6144_BIT, 0),
    t("modp8192", Dh, MODP_8192_BIT, 0),
    t("modp1024s160", Dh, MODP_1024_160, 0),
    t("modp2048s224", Dh, MODP_2048_224, 0),
    t("modp2048s256", Dh, MODP_2048_256, 0),
    t("ecp192", Dh, ECP_192_BIT, 0),
    t("ecp224", Dh, ECP_224_BIT, 0),
    t("ecp256", Dh, ECP_256_BIT, 0),
    t("ecp384", Dh, ECP_384_BIT, 0),
    t("ecp521", Dh, ECP_521_BIT, 0),
    t("ecp224bp", Dh, ECP_224_BP, 0),
    t("ecp256bp", Dh, ECP_256_BP, 0),
    t("ecp384bp", Dh, ECP_384_BP, 0),
    t("ecp512bp", Dh, ECP_512_BP, 0),
    t("curve25519", Dh, CURVE_25519, 0),
    t("x25519", Dh, CURVE_25519, 0),
    t("curve448", Dh, CURVE_448, 0),
    t("x448", Dh, CURVE_448, 0),
    t("ntru112", Dh, NTRU_112_BIT, 0),
    t("ntru128", Dh, NTRU_128_BIT, 0),
    t("ntru192", Dh, NTRU_192_BIT, 0),
    t("ntru256", Dh, NTRU_256_BIT, 0),
    t("noesn", Esn, NO_EXT_SEQ_NUMBERS, 0),
    t("esn", Esn, EXT_SEQ_NUMBERS, 0),
];
