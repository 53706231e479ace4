//! Keyword recognition through the facade

use pqwire::prelude::*;
use pqwire::proposal::{Error as ProposalError, DEFAULT_KEYWORDS};
use proptest::prelude::*;

#[test]
fn standard_table_covers_the_dictionary() {
    let table = KeywordTable::standard().unwrap();
    assert_eq!(table.len(), DEFAULT_KEYWORDS.len());
    for token in &table {
        assert_eq!(table.lookup_str(token.name), Some(token));
    }
}

#[test]
fn case_variants_never_match() {
    let table = KeywordTable::standard().unwrap();
    for token in DEFAULT_KEYWORDS {
        let upper = token.name.to_ascii_uppercase();
        if upper != token.name {
            assert_eq!(table.lookup_str(&upper), None, "{}", upper);
        }
    }
}

#[test]
fn prefixes_and_extensions_never_match_the_same_entry() {
    let table = KeywordTable::standard().unwrap();
    for token in DEFAULT_KEYWORDS {
        let name = token.name.as_bytes();
        assert_ne!(table.lookup(&name[..name.len() - 1]), Some(token));

        let mut longer = name.to_vec();
        longer.push(b'x');
        assert_eq!(table.lookup(&longer), None, "{}x", token.name);
    }
}

#[test]
fn construction_errors_surface_as_core_errors() {
    const DICT: &[ProposalToken] = &[
        ProposalToken::new("esn", TransformKind::ExtendedSequenceNumbers, 1, 0),
        ProposalToken::new("esn", TransformKind::ExtendedSequenceNumbers, 0, 0),
    ];
    let err = KeywordTable::new(DICT).unwrap_err();
    assert_eq!(err, ProposalError::DuplicateKeyword { name: "esn" });

    let generic: Error = err.into();
    assert_eq!(generic.context(), "proposal keyword table");
}

proptest! {
    #[test]
    fn printable_strings_resolve_only_to_dictionary_entries(input in "[a-z0-9_]{0,20}") {
        let table = KeywordTable::standard().unwrap();
        match table.lookup_str(&input) {
            Some(token) => prop_assert_eq!(token.name, input.as_str()),
            None => prop_assert!(DEFAULT_KEYWORDS.iter().all(|t| t.name != input)),
        }
    }
}
