// File: crates/kem/src/ntru/export.rs

//! Key blob construction

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use pqwire_params::pqc::ntru::{NtruParamSet, NTRU_OID_LEN};
use zeroize::Zeroizing;

use super::{private_packed_len, resolve_private_packing, KeyTag, NTRU_KEY_HEADER_LEN};
use crate::error::{validate, Result};

fn write_header(out: &mut Vec<u8>, tag: KeyTag, params: &NtruParamSet) {
    out.push(tag.to_byte());
    out.push(NTRU_OID_LEN as u8);
    out.extend_from_slice(params.oid());
}

/// Build a public key blob around an already packed public key
pub fn public_key_blob(params: &NtruParamSet, public_key: &[u8]) -> Result<Vec<u8>> {
    let public_len = params.public_key_packed_len();
    validate::length("NTRU packed public key", public_key.len(), public_len)?;

    let mut blob = Vec::with_capacity(NTRU_KEY_HEADER_LEN + public_len);
    write_header(&mut blob, KeyTag::PublicKey, params);
    blob.extend_from_slice(public_key);
    Ok(blob)
}

/// Build a private key blob around already packed key halves
///
/// `tag` must be one of the private key tags; the packing it resolves to
/// decides how long `private_key` has to be. The returned buffer is wiped
/// on drop.
pub fn private_key_blob(
    params: &NtruParamSet,
    tag: KeyTag,
    public_key: &[u8],
    private_key: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let packing = resolve_private_packing(params, tag)?;
    let public_len = params.public_key_packed_len();
    let private_len = private_packed_len(params, packing);
    validate::length("NTRU packed public key", public_key.len(), public_len)?;
    validate::length("NTRU packed private key", private_key.len(), private_len)?;

    let mut blob = Zeroizing::new(Vec::with_capacity(
        NTRU_KEY_HEADER_LEN + public_len + private_len,
    ));
    write_header(&mut blob, tag, params);
    blob.extend_from_slice(public_key);
    blob.extend_from_slice(private_key);
    Ok(blob)
}
