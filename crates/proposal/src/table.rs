// File: crates/proposal/src/table.rs

//! Precomputed keyword table
//!
//! Open addressing over a power-of-two slot array, at most half full, so
//! every probe sequence hits an empty slot quickly. The hash only picks
//! where to start looking; a candidate is accepted only after a full
//! byte-for-byte comparison with the input.

use alloc::vec;
use alloc::vec::Vec;

use log::{debug, trace};
use pqwire_internal::ct_eq;
use pqwire_params::ike::proposal::{ProposalToken, DEFAULT_KEYWORDS};

use crate::error::{Error, Result};

const EMPTY_SLOT: u16 = u16::MAX;
const MIN_SLOTS: usize = 8;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over the keyword bytes
fn keyword_hash(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |h, &b| {
        (h ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// Exact-match lookup table over a keyword dictionary
#[derive(Debug, Clone)]
pub struct KeywordTable<'d> {
    entries: &'d [ProposalToken],
    slots: Vec<u16>,
    mask: usize,
    min_len: usize,
    max_len: usize,
}

impl<'d> KeywordTable<'d> {
    /// Build a table, rejecting empty and duplicate keywords
    pub fn new(entries: &'d [ProposalToken]) -> Result<Self> {
        if entries.len() >= usize::from(EMPTY_SLOT) {
            return Err(Error::TooManyKeywords {
                count: entries.len(),
            });
        }

        let slot_count = (entries.len() * 2).next_power_of_two().max(MIN_SLOTS);
        let mask = slot_count - 1;
        let mut slots = vec![EMPTY_SLOT; slot_count];
        let mut min_len = usize::MAX;
        let mut max_len = 0;

        for (index, token) in entries.iter().enumerate() {
            let name = token.name.as_bytes();
            if name.is_empty() {
                return Err(Error::EmptyKeyword { index });
            }
            min_len = min_len.min(name.len());
            max_len = max_len.max(name.len());

            let mut slot = keyword_hash(name) as usize & mask;
            loop {
                match slots[slot] {
                    EMPTY_SLOT => {
                        // index < EMPTY_SLOT, checked above
                        slots[slot] = index as u16;
                        break;
                    }
                    taken if entries[usize::from(taken)].name == token.name => {
                        return Err(Error::DuplicateKeyword { name: token.name });
                    }
                    _ => slot = (slot + 1) & mask,
                }
            }
        }

        debug!(
            "built proposal keyword table: {} keywords in {} slots",
            entries.len(),
            slot_count
        );
        Ok(Self {
            entries,
            slots,
            mask,
            min_len,
            max_len,
        })
    }

    /// Resolve a keyword, matching exactly
    ///
    /// No case folding and no truncation at embedded NUL bytes: the input
    /// must equal a dictionary name in length and in every byte.
    pub fn lookup(&self, keyword: &[u8]) -> Option<&'d ProposalToken> {
        if keyword.len() < self.min_len || keyword.len() > self.max_len {
            trace!("proposal keyword of length {} out of range", keyword.len());
            return None;
        }

        let mut slot = keyword_hash(keyword) as usize & self.mask;
        loop {
            let index = self.slots[slot];
            if index == EMPTY_SLOT {
                trace!("unknown proposal keyword");
                return None;
            }
            let candidate = &self.entries[usize::from(index)];
            if ct_eq(candidate.name.as_bytes(), keyword) {
                return Some(candidate);
            }
            slot = (slot + 1) & self.mask;
        }
    }

    /// Resolve a keyword given as a string
    pub fn lookup_str(&self, keyword: &str) -> Option<&'d ProposalToken> {
        self.lookup(keyword.as_bytes())
    }

    /// Number of keywords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dictionary entries in dictionary order
    pub fn iter(&self) -> core::slice::Iter<'d, ProposalToken> {
        self.entries.iter()
    }
}

impl KeywordTable<'static> {
    /// Table over the standard keyword dictionary
    pub fn standard() -> Result<Self> {
        Self::new(DEFAULT_KEYWORDS)
    }
}

impl<'d> IntoIterator for &KeywordTable<'d> {
    type Item = &'d ProposalToken;
    type IntoIter = core::slice::Iter<'d, ProposalToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
