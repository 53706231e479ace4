//! End-to-end use of the facade crate

use pqwire::kem::ntru::{private_key_blob, public_key_blob};
use pqwire::params::pqc::ntru::{lookup_by_name, PrivateKeyWeight};
use pqwire::prelude::*;
use pqwire_tests::random_bytes;

#[test]
fn facade_round_trip_with_catalog() {
    let codec = NtruKeyCodec::new(EES_CATALOG);
    let params = lookup_by_name(&EES_CATALOG, "ees439ep1").unwrap();

    let public_key = random_bytes(11, params.public_key_packed_len());
    let private_key = random_bytes(12, params.indices_packed_len());
    let blob = private_key_blob(params, KeyTag::PrivateKeyIndices, &public_key, &private_key)
        .unwrap();

    let key: ParsedKey<'_> = codec.parse(KeyKind::Private, &blob).unwrap();
    assert_eq!(key.params(), params);
    assert_eq!(key.private_key_packing(), Some(Packing::Indices));
    assert_eq!(key.public_key(), &public_key[..]);
}

#[test]
fn custom_registry_with_validated_params() {
    let params = NtruParamSet::try_new("lab-ees509", [0x7f, 0x00, 0x01], 509, 11, 9, 93, false)
        .unwrap();
    assert_eq!(params.weight(), PrivateKeyWeight::Single(93));

    let registry = vec![params];
    let codec = NtruKeyCodec::new(registry);
    let public_key = random_bytes(13, params.public_key_packed_len());
    let blob = public_key_blob(&params, &public_key).unwrap();
    assert!(codec.parse_public(&blob).is_ok());

    // The catalog does not know this OID
    let err = NtruKeyCodec::new(EES_CATALOG).parse_public(&blob).unwrap_err();
    let generic: Error = err.into();
    assert!(matches!(generic, Error::InvalidParameter { .. }));
}

#[test]
fn length_errors_convert_to_invalid_length() {
    let codec = NtruKeyCodec::new(EES_CATALOG);
    let params = lookup_by_name(&EES_CATALOG, "ees401ep1").unwrap();
    let mut blob = public_key_blob(params, &random_bytes(14, params.public_key_packed_len()))
        .unwrap();
    blob.pop();

    let generic: Error = codec.parse_public(&blob).unwrap_err().into();
    assert_eq!(
        generic,
        Error::InvalidLength {
            context: "NTRU key blob",
            expected: 557,
            actual: 556
        }
    );
}

#[test]
fn registry_trait_object() {
    let registry: &dyn ParamSetRegistry = &EES_CATALOG;
    assert_eq!(registry.lookup_by_oid(&[0x00, 0x02, 0x04]).map(|p| p.n()), Some(401));
    assert!(registry.lookup_by_oid(&[0xff, 0xff, 0xff]).is_none());
}

#[test]
fn keyword_table_from_prelude() {
    let table = KeywordTable::standard().unwrap();
    let token: &ProposalToken = table.lookup_str("ntru256").unwrap();
    assert_eq!(token.kind, TransformKind::DiffieHellmanGroup);
}
