//! Key blob acceptance across the EES catalog

use pqwire_kem::ntru::{private_key_blob, public_key_blob, NTRU_KEY_HEADER_LEN};
use pqwire_kem::{parse_key_blob, Error, KeyKind, KeyTag, NtruKeyCodec, Packing};
use pqwire_params::pqc::ntru::{lookup_by_name, NtruParamSet, EES_CATALOG};
use pqwire_tests::{expected_blob_len, random_bytes, raw_blob, ALL_TAGS};
use proptest::prelude::*;

fn catalog_set() -> impl Strategy<Value = &'static NtruParamSet> {
    (0..EES_CATALOG.len()).prop_map(|i| &EES_CATALOG[i])
}

fn any_tag() -> impl Strategy<Value = KeyTag> {
    prop::sample::select(ALL_TAGS.to_vec())
}

#[test]
fn exact_length_accepted_for_every_set_and_tag() {
    let codec = NtruKeyCodec::new(EES_CATALOG);
    for params in EES_CATALOG.iter() {
        for tag in ALL_TAGS {
            let Some(len) = expected_blob_len(params, tag) else {
                continue;
            };
            let blob = raw_blob(tag.to_byte(), *params.oid(), len - NTRU_KEY_HEADER_LEN, 1);
            let key = codec.parse(tag.kind(), &blob).unwrap();
            assert_eq!(key.params().name(), params.name());
            assert_eq!(key.kind(), tag.kind());
        }
    }
}

#[test]
fn product_form_sets_reject_trits() {
    let product: Vec<_> = EES_CATALOG.iter().filter(|p| p.is_product_form()).collect();
    assert!(!product.is_empty());
    for params in product {
        let body = params.public_key_packed_len() + params.trits_packed_len();
        let blob = raw_blob(KeyTag::PrivateKeyTrits.to_byte(), *params.oid(), body, 2);
        assert_eq!(
            parse_key_blob(&EES_CATALOG, KeyKind::Private, &blob),
            Err(Error::IncompatiblePacking {
                params: params.name(),
                packing: "trits"
            })
        );
    }
}

#[test]
fn header_checks_precede_length_checks() {
    let ees401 = lookup_by_name(&EES_CATALOG, "ees401ep1").unwrap();

    // Unknown tag wins over a bad OID length
    let mut blob = raw_blob(0x42, *ees401.oid(), 3, 3);
    blob[1] = 9;
    assert_eq!(
        parse_key_blob(&EES_CATALOG, KeyKind::Public, &blob),
        Err(Error::UnknownTag { tag: 0x42 })
    );

    // Tag mismatch wins over a truncated header
    let short = [KeyTag::PrivateKeyDefault.to_byte(), 3];
    assert!(matches!(
        parse_key_blob(&EES_CATALOG, KeyKind::Public, &short),
        Err(Error::TagMismatch { .. })
    ));

    // Unknown OID wins over a wrong body length
    let blob = raw_blob(KeyTag::PublicKey.to_byte(), [0xde, 0xad, 0x00], 1, 4);
    assert!(matches!(
        parse_key_blob(&EES_CATALOG, KeyKind::Public, &blob),
        Err(Error::UnknownParameterSet { .. })
    ));
}

#[test]
fn constructed_blobs_parse_back() {
    let codec = NtruKeyCodec::new(EES_CATALOG);
    for params in EES_CATALOG.iter() {
        let public_key = random_bytes(5, params.public_key_packed_len());
        let blob = public_key_blob(params, &public_key).unwrap();
        assert_eq!(codec.parse_public(&blob).unwrap().public_key(), &public_key[..]);

        let packing = if params.prefers_indices() {
            Packing::Indices
        } else {
            Packing::Trits
        };
        let private_len = match packing {
            Packing::Trits => params.trits_packed_len(),
            _ => params.indices_packed_len(),
        };
        let private_key = random_bytes(6, private_len);
        let blob =
            private_key_blob(params, KeyTag::PrivateKeyDefault, &public_key, &private_key).unwrap();
        let key = codec.parse_private(&blob).unwrap();
        assert_eq!(key.private_key_packing(), Some(packing));
        assert_eq!(key.private_key().unwrap().as_bytes(), &private_key[..]);
    }
}

#[test]
fn codec_is_shareable_across_threads() {
    let codec = NtruKeyCodec::new(EES_CATALOG);
    let blobs: Vec<_> = EES_CATALOG
        .iter()
        .map(|p| raw_blob(KeyTag::PublicKey.to_byte(), *p.oid(), p.public_key_packed_len(), 8))
        .collect();

    std::thread::scope(|s| {
        for blob in &blobs {
            let codec = &codec;
            s.spawn(move || {
                for _ in 0..16 {
                    assert!(codec.parse_public(blob).is_ok());
                }
            });
        }
    });
}

proptest! {
    #[test]
    fn off_by_one_lengths_are_rejected(
        params in catalog_set(),
        tag in any_tag(),
        grow in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let Some(len) = expected_blob_len(params, tag) else {
            return Ok(());
        };
        let body = len - NTRU_KEY_HEADER_LEN;
        let body = if grow { body + 1 } else { body - 1 };
        let blob = raw_blob(tag.to_byte(), *params.oid(), body, seed);
        let result = parse_key_blob(&EES_CATALOG, tag.kind(), &blob);
        prop_assert_eq!(
            result,
            Err(Error::LengthMismatch {
                context: "NTRU key blob",
                expected: len,
                actual: blob.len(),
            })
        );
    }

    #[test]
    fn arbitrary_input_is_accepted_only_at_exact_length(
        data in prop::collection::vec(any::<u8>(), 0..2048),
        private in any::<bool>(),
    ) {
        let kind = if private { KeyKind::Private } else { KeyKind::Public };
        if let Ok(key) = parse_key_blob(&EES_CATALOG, kind, &data) {
            let tag = KeyTag::try_from(data[0]).unwrap();
            prop_assert_eq!(tag.kind(), kind);
            prop_assert_eq!(Some(data.len()), expected_blob_len(key.params(), tag));
        }
    }

    #[test]
    fn headers_over_catalog_oids_never_panic(
        params in catalog_set(),
        tag in any::<u8>(),
        oid_len in any::<u8>(),
        body in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut blob = vec![tag, oid_len];
        blob.extend_from_slice(params.oid());
        blob.extend_from_slice(&body);
        for kind in [KeyKind::Public, KeyKind::Private] {
            let _ = parse_key_blob(&EES_CATALOG, kind, &blob);
        }
    }
}
