// File: crates/kem/src/ntru/mod.rs

//! NTRUEncrypt key blobs
//!
//! Version 0 blob layout:
//!
//! ```text
//! byte  0      tag
//! byte  1      OID length, always 3
//! bytes 2..5   parameter-set OID
//! bytes 5..    packed public key (ceil(N * q_bits / 8) bytes)
//!              [packed private key, private blobs only]
//! ```
//!
//! The private key is packed either as trits (five per byte) or as the
//! indices of its non-zero coefficients. Which one a blob uses follows from
//! its tag and, for the default tag, from whichever encoding is shorter for
//! the parameter set.

mod blob;
#[cfg(feature = "alloc")]
mod export;

pub use self::blob::{parse_key_blob, NtruKeyCodec, ParsedKey, PrivateKey};
#[cfg(feature = "alloc")]
pub use self::export::{private_key_blob, public_key_blob};

use core::fmt;

use crate::error::{validate, Error, Result};
use pqwire_params::pqc::ntru::{NtruParamSet, NTRU_OID_LEN};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag byte of a public key blob
pub const NTRU_PUBKEY_TAG: u8 = 0x01;
/// Tag byte of a private key blob whose packing follows the parameter set
pub const NTRU_PRIVKEY_DEFAULT_TAG: u8 = 0x02;
/// Tag byte of a trits-packed private key blob
pub const NTRU_PRIVKEY_TRITS_TAG: u8 = 0xfe;
/// Tag byte of an indices-packed private key blob
pub const NTRU_PRIVKEY_INDICES_TAG: u8 = 0xff;

/// Tag, OID length byte and OID
pub const NTRU_KEY_HEADER_LEN: usize = 2 + NTRU_OID_LEN;

/// Packing code: coefficients mod q, q_bits each
pub const NTRU_KEY_PACKED_COEFFICIENTS: u8 = 0x01;
/// Packing code: indices of non-zero coefficients
pub const NTRU_KEY_PACKED_INDICES: u8 = 0x02;
/// Packing code: trits, five per byte
pub const NTRU_KEY_PACKED_TRITS: u8 = 0x03;

/// Which kind of key a caller expects a blob to hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Public,
    Private,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Public => f.write_str("public"),
            KeyKind::Private => f.write_str("private"),
        }
    }
}

/// Leading byte of a key blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum KeyTag {
    PublicKey = NTRU_PUBKEY_TAG,
    PrivateKeyDefault = NTRU_PRIVKEY_DEFAULT_TAG,
    PrivateKeyTrits = NTRU_PRIVKEY_TRITS_TAG,
    PrivateKeyIndices = NTRU_PRIVKEY_INDICES_TAG,
}

impl KeyTag {
    /// Wire value
    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    /// Kind of key a blob with this tag holds
    pub const fn kind(self) -> KeyKind {
        match self {
            KeyTag::PublicKey => KeyKind::Public,
            _ => KeyKind::Private,
        }
    }
}

impl TryFrom<u8> for KeyTag {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            NTRU_PUBKEY_TAG => Ok(KeyTag::PublicKey),
            NTRU_PRIVKEY_DEFAULT_TAG => Ok(KeyTag::PrivateKeyDefault),
            NTRU_PRIVKEY_TRITS_TAG => Ok(KeyTag::PrivateKeyTrits),
            NTRU_PRIVKEY_INDICES_TAG => Ok(KeyTag::PrivateKeyIndices),
            _ => Err(Error::UnknownTag { tag }),
        }
    }
}

impl fmt::Display for KeyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyTag::PublicKey => f.write_str("public key"),
            KeyTag::PrivateKeyDefault => f.write_str("private key (default packing)"),
            KeyTag::PrivateKeyTrits => f.write_str("private key (trits)"),
            KeyTag::PrivateKeyIndices => f.write_str("private key (indices)"),
        }
    }
}

/// Encoding of a packed key field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Packing {
    /// Public key coefficients mod q
    Coefficients = NTRU_KEY_PACKED_COEFFICIENTS,
    /// Indices of the non-zero private key coefficients
    Indices = NTRU_KEY_PACKED_INDICES,
    /// Private key trits
    Trits = NTRU_KEY_PACKED_TRITS,
}

impl Packing {
    /// Wire packing code
    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    /// Packing code for a known value, `None` otherwise
    pub const fn from_byte(code: u8) -> Option<Self> {
        match code {
            NTRU_KEY_PACKED_COEFFICIENTS => Some(Packing::Coefficients),
            NTRU_KEY_PACKED_INDICES => Some(Packing::Indices),
            NTRU_KEY_PACKED_TRITS => Some(Packing::Trits),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Packing::Coefficients => "coefficients",
            Packing::Indices => "indices",
            Packing::Trits => "trits",
        }
    }
}

/// Resolve the private key packing a tag selects for a parameter set
///
/// Trits are undefined for product-form keys. The default tag picks indices
/// for product-form sets and otherwise the shorter encoding, with ties
/// going to indices.
pub(crate) fn resolve_private_packing(params: &NtruParamSet, tag: KeyTag) -> Result<Packing> {
    validate::tag(tag, KeyKind::Private)?;
    validate::packing(
        !(params.is_product_form() && tag == KeyTag::PrivateKeyTrits),
        params.name(),
        Packing::Trits.name(),
    )?;

    Ok(match tag {
        KeyTag::PrivateKeyTrits => Packing::Trits,
        KeyTag::PrivateKeyIndices => Packing::Indices,
        _ if params.prefers_indices() => Packing::Indices,
        _ => Packing::Trits,
    })
}

/// Bytes a private key takes under a resolved packing
pub(crate) const fn private_packed_len(params: &NtruParamSet, packing: Packing) -> usize {
    match packing {
        Packing::Trits => params.trits_packed_len(),
        _ => params.indices_packed_len(),
    }
}
