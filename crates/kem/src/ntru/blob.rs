// File: crates/kem/src/ntru/blob.rs

//! Key blob parsing

use log::{debug, trace};
use pqwire_params::pqc::ntru::{NtruOid, NtruParamSet, ParamSetRegistry, NTRU_OID_LEN};

use super::{
    private_packed_len, resolve_private_packing, KeyKind, KeyTag, Packing, NTRU_KEY_HEADER_LEN,
};
use crate::error::{validate, Error, Result};

const BLOB_CONTEXT: &str = "NTRU key blob";

/// Packed private key located inside a blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey<'a> {
    packing: Packing,
    bytes: &'a [u8],
}

impl<'a> PrivateKey<'a> {
    /// Resolved packing, never [`Packing::Coefficients`]
    pub fn packing(&self) -> Packing {
        self.packing
    }

    /// Packed private key bytes, borrowed from the blob
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

/// A fully validated key blob
///
/// Holds views into the caller's buffer and cannot outlive it. Only
/// produced when every header, tag and length rule holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey<'a> {
    params: &'a NtruParamSet,
    public_key: &'a [u8],
    private_key: Option<PrivateKey<'a>>,
}

impl<'a> ParsedKey<'a> {
    /// Parameter set named by the blob's OID
    pub fn params(&self) -> &'a NtruParamSet {
        self.params
    }

    /// Public key packing, always [`Packing::Coefficients`]
    pub fn public_key_packing(&self) -> Packing {
        Packing::Coefficients
    }

    /// Packed public key bytes
    pub fn public_key(&self) -> &'a [u8] {
        self.public_key
    }

    /// Packed private key, present for private key blobs only
    pub fn private_key(&self) -> Option<PrivateKey<'a>> {
        self.private_key
    }

    /// Private key packing, present for private key blobs only
    pub fn private_key_packing(&self) -> Option<Packing> {
        self.private_key.map(|k| k.packing)
    }

    pub fn kind(&self) -> KeyKind {
        match self.private_key {
            Some(_) => KeyKind::Private,
            None => KeyKind::Public,
        }
    }
}

/// Parse a key blob against a parameter-set registry
///
/// Checks run in a fixed order and the first failure is returned: tag
/// value, tag against `kind`, header shape, OID lookup, packing
/// compatibility, then the exact total length.
pub fn parse_key_blob<'a, R>(registry: &'a R, kind: KeyKind, blob: &'a [u8]) -> Result<ParsedKey<'a>>
where
    R: ParamSetRegistry + ?Sized,
{
    let parsed = parse_inner(registry, kind, blob);
    match &parsed {
        Ok(key) => trace!(
            "parsed {} key blob for {} ({} bytes, private packing {:?})",
            kind,
            key.params.name(),
            blob.len(),
            key.private_key_packing()
        ),
        Err(e) => debug!("rejected {} key blob of {} bytes: {}", kind, blob.len(), e),
    }
    parsed
}

fn parse_inner<'a, R>(registry: &'a R, kind: KeyKind, blob: &'a [u8]) -> Result<ParsedKey<'a>>
where
    R: ParamSetRegistry + ?Sized,
{
    let (&tag_byte, _) = blob.split_first().ok_or(Error::InvalidHeader {
        reason: "empty blob",
    })?;
    let tag = KeyTag::try_from(tag_byte)?;
    validate::tag(tag, kind)?;

    validate::header(
        blob.len() >= NTRU_KEY_HEADER_LEN,
        "blob shorter than tag, OID length and OID",
    )?;
    validate::header(
        usize::from(blob[1]) == NTRU_OID_LEN,
        "unsupported OID length",
    )?;

    let oid: NtruOid = [blob[2], blob[3], blob[4]];
    let params = registry
        .lookup_by_oid(&oid)
        .ok_or(Error::UnknownParameterSet { oid })?;

    let public_len = params.public_key_packed_len();
    let body = &blob[NTRU_KEY_HEADER_LEN..];

    match kind {
        KeyKind::Public => {
            validate::length(BLOB_CONTEXT, blob.len(), NTRU_KEY_HEADER_LEN + public_len)?;
            Ok(ParsedKey {
                params,
                public_key: body,
                private_key: None,
            })
        }
        KeyKind::Private => {
            let packing = resolve_private_packing(params, tag)?;
            let private_len = private_packed_len(params, packing);
            validate::length(
                BLOB_CONTEXT,
                blob.len(),
                NTRU_KEY_HEADER_LEN + public_len + private_len,
            )?;

            let (public_key, private_bytes) = body.split_at(public_len);
            Ok(ParsedKey {
                params,
                public_key,
                private_key: Some(PrivateKey {
                    packing,
                    bytes: private_bytes,
                }),
            })
        }
    }
}

/// Key blob parser bound to one parameter-set registry
///
/// Cheap to share: parsing takes `&self` and keeps no state between calls.
#[derive(Debug, Clone)]
pub struct NtruKeyCodec<R> {
    registry: R,
}

impl<R: ParamSetRegistry> NtruKeyCodec<R> {
    pub const fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Parse a blob expected to hold `kind` of key
    pub fn parse<'a>(&'a self, kind: KeyKind, blob: &'a [u8]) -> Result<ParsedKey<'a>> {
        parse_key_blob(&self.registry, kind, blob)
    }

    /// Parse a public key blob
    pub fn parse_public<'a>(&'a self, blob: &'a [u8]) -> Result<ParsedKey<'a>> {
        self.parse(KeyKind::Public, blob)
    }

    /// Parse a private key blob
    pub fn parse_private<'a>(&'a self, blob: &'a [u8]) -> Result<ParsedKey<'a>> {
        self.parse(KeyKind::Private, blob)
    }
}
