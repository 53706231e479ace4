//! Shared fixtures for the pqwire integration tests

use pqwire_kem::ntru::{KeyTag, NTRU_KEY_HEADER_LEN};
use pqwire_params::pqc::ntru::{NtruParamSet, NTRU_OID_LEN};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaChaRng;

/// Deterministic filler for packed key fields
pub fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut out = vec![0u8; len];
    rng.fill_bytes(&mut out);
    out
}

/// Raw blob with a well-formed header and `body_len` bytes of body
pub fn raw_blob(tag: u8, oid: [u8; 3], body_len: usize, seed: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(NTRU_KEY_HEADER_LEN + body_len);
    out.push(tag);
    out.push(NTRU_OID_LEN as u8);
    out.extend_from_slice(&oid);
    out.extend_from_slice(&random_bytes(seed, body_len));
    out
}

/// Exact size of a valid blob for `params` under `tag`
///
/// `None` when the tag selects trits for a product-form set.
pub fn expected_blob_len(params: &NtruParamSet, tag: KeyTag) -> Option<usize> {
    let public_len = NTRU_KEY_HEADER_LEN + params.public_key_packed_len();
    let private_len = match tag {
        KeyTag::PublicKey => 0,
        KeyTag::PrivateKeyTrits if params.is_product_form() => return None,
        KeyTag::PrivateKeyTrits => params.trits_packed_len(),
        KeyTag::PrivateKeyIndices => params.indices_packed_len(),
        KeyTag::PrivateKeyDefault if params.prefers_indices() => params.indices_packed_len(),
        KeyTag::PrivateKeyDefault => params.trits_packed_len(),
    };
    Some(public_len + private_len)
}

/// Every tag in wire order
pub const ALL_TAGS: [KeyTag; 4] = [
    KeyTag::PublicKey,
    KeyTag::PrivateKeyDefault,
    KeyTag::PrivateKeyTrits,
    KeyTag::PrivateKeyIndices,
];
