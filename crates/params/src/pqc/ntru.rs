//! Parameter sets for NTRUEncrypt key blobs
//!
//! A parameter set is selected on the wire by a 3-byte OID. The descriptors
//! here carry only what is needed to size and validate the packed key
//! fields of a blob; the lattice arithmetic itself lives elsewhere.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use pqwire_api::error::{validation as validate, Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Length of an NTRU parameter-set OID in bytes
pub const NTRU_OID_LEN: usize = 3;

/// Number of trits packed into one byte of a trits-encoded private key
pub const NTRU_TRITS_PER_BYTE: usize = 5;

/// A 3-byte parameter-set object identifier
pub type NtruOid = [u8; NTRU_OID_LEN];

/// Weight of the private key polynomial F
///
/// Single-form keys have one count of non-zero coefficients per sign.
/// Product-form keys (F = f1*f2 + f3) carry one count per factor; on the
/// wire and in legacy tables they are packed into the low, middle and high
/// byte lanes of one integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrivateKeyWeight {
    /// dF for a single sparse polynomial
    Single(u16),
    /// dF1, dF2, dF3 for a product-form polynomial
    Product { df1: u8, df2: u8, df3: u8 },
}

impl PrivateKeyWeight {
    /// Decode a packed `dF_r` value
    ///
    /// For product-form sets the three counts occupy bits 0-7, 8-15 and
    /// 16-23. For single-form sets the value is the count itself and must
    /// fit in 16 bits; larger values yield `None`.
    pub const fn from_packed(df_r: u32, product_form: bool) -> Option<Self> {
        if product_form {
            if df_r >> 24 != 0 {
                return None;
            }
            Some(Self::Product {
                df1: (df_r & 0xff) as u8,
                df2: ((df_r >> 8) & 0xff) as u8,
                df3: ((df_r >> 16) & 0xff) as u8,
            })
        } else if df_r > u16::MAX as u32 {
            None
        } else {
            Some(Self::Single(df_r as u16))
        }
    }

    /// Re-pack into the legacy single-integer layout
    pub const fn to_packed(self) -> u32 {
        match self {
            Self::Single(df) => df as u32,
            Self::Product { df1, df2, df3 } => {
                (df1 as u32) | ((df2 as u32) << 8) | ((df3 as u32) << 16)
            }
        }
    }

    /// Total number of +1 (equivalently -1) coefficients across all factors
    pub const fn total(self) -> usize {
        match self {
            Self::Single(df) => df as usize,
            Self::Product { df1, df2, df3 } => df1 as usize + df2 as usize + df3 as usize,
        }
    }

    /// Whether this is a product-form weight
    pub const fn is_product_form(self) -> bool {
        matches!(self, Self::Product { .. })
    }
}

/// Descriptor of one NTRUEncrypt parameter set
///
/// Immutable once built. Sizes are derived on demand from `N`, the bit
/// widths and the private key weight; all inputs are at most 16 bits wide,
/// so none of the derived sizes can overflow a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NtruParamSet {
    name: &'static str,
    oid: NtruOid,
    n: u16,
    q_bits: u8,
    n_bits: u8,
    weight: PrivateKeyWeight,
}

impl NtruParamSet {
    /// Build a descriptor from already-validated values
    ///
    /// Intended for static tables. Use [`NtruParamSet::try_new`] for values
    /// that come from outside the program.
    pub const fn new(
        name: &'static str,
        oid: NtruOid,
        n: u16,
        q_bits: u8,
        n_bits: u8,
        weight: PrivateKeyWeight,
    ) -> Self {
        Self {
            name,
            oid,
            n,
            q_bits,
            n_bits,
            weight,
        }
    }

    /// Build a descriptor from a legacy packed `dF_r`, checking invariants
    pub fn try_new(
        name: &'static str,
        oid: NtruOid,
        n: u16,
        q_bits: u8,
        n_bits: u8,
        df_r: u32,
        product_form: bool,
    ) -> Result<Self> {
        validate::parameter(n > 0, "NtruParamSet", "N must be positive")?;
        validate::parameter(q_bits > 0, "NtruParamSet", "q_bits must be positive")?;
        validate::parameter(
            n_bits > 0 && (1usize << n_bits.min(16)) >= n as usize,
            "NtruParamSet",
            "N_bits too small to index 0..N",
        )?;
        let weight = PrivateKeyWeight::from_packed(df_r, product_form).ok_or_else(|| {
            Error::InvalidParameter {
                context: "NtruParamSet",
                #[cfg(feature = "std")]
                message: format!("dF_r {:#x} does not fit the key form", df_r),
            }
        })?;
        Ok(Self::new(name, oid, n, q_bits, n_bits, weight))
    }

    /// Human-readable identifier, e.g. `ees401ep1`
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Wire OID
    pub const fn oid(&self) -> &NtruOid {
        &self.oid
    }

    /// Ring dimension N
    pub const fn n(&self) -> u16 {
        self.n
    }

    /// Bits per public key coefficient (log2 q)
    pub const fn q_bits(&self) -> u8 {
        self.q_bits
    }

    /// Bits needed to index a coefficient position 0..N-1
    pub const fn n_bits(&self) -> u8 {
        self.n_bits
    }

    /// Private key weight, decoded
    pub const fn weight(&self) -> PrivateKeyWeight {
        self.weight
    }

    pub const fn is_product_form(&self) -> bool {
        self.weight.is_product_form()
    }

    /// Total dF (sum of the factor counts for product-form sets)
    pub const fn df(&self) -> usize {
        self.weight.total()
    }

    /// Bytes of a packed public key: ceil(N * q_bits / 8)
    pub const fn public_key_packed_len(&self) -> usize {
        (self.n as usize * self.q_bits as usize).div_ceil(8)
    }

    /// Bytes of a trits-packed private key: five trits per byte
    pub const fn trits_packed_len(&self) -> usize {
        (self.n as usize).div_ceil(NTRU_TRITS_PER_BYTE)
    }

    /// Bytes of an indices-packed private key: ceil(2 * dF * N_bits / 8)
    pub const fn indices_packed_len(&self) -> usize {
        (2 * self.df() * self.n_bits as usize).div_ceil(8)
    }

    /// Whether a defaulted private key packing resolves to indices
    ///
    /// Product-form keys always use indices. Otherwise the shorter encoding
    /// wins and a tie goes to indices.
    pub const fn prefers_indices(&self) -> bool {
        self.is_product_form() || self.indices_packed_len() <= self.trits_packed_len()
    }
}

/// Source of parameter-set descriptors keyed by OID
///
/// Implementations must be read-only after construction; lookups may run
/// concurrently from any number of threads.
pub trait ParamSetRegistry {
    /// Resolve a wire OID to its parameter set
    fn lookup_by_oid(&self, oid: &NtruOid) -> Option<&NtruParamSet>;
}

impl ParamSetRegistry for [NtruParamSet] {
    fn lookup_by_oid(&self, oid: &NtruOid) -> Option<&NtruParamSet> {
        self.iter().find(|p| p.oid == *oid)
    }
}

impl<const N: usize> ParamSetRegistry for [NtruParamSet; N] {
    fn lookup_by_oid(&self, oid: &NtruOid) -> Option<&NtruParamSet> {
        self.as_slice().lookup_by_oid(oid)
    }
}

#[cfg(feature = "alloc")]
impl ParamSetRegistry for Vec<NtruParamSet> {
    fn lookup_by_oid(&self, oid: &NtruOid) -> Option<&NtruParamSet> {
        self.as_slice().lookup_by_oid(oid)
    }
}

impl<R: ParamSetRegistry + ?Sized> ParamSetRegistry for &R {
    fn lookup_by_oid(&self, oid: &NtruOid) -> Option<&NtruParamSet> {
        (**self).lookup_by_oid(oid)
    }
}

/// Find a parameter set in a table by name, ignoring ASCII case
pub fn lookup_by_name<'a>(table: &'a [NtruParamSet], name: &str) -> Option<&'a NtruParamSet> {
    table.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

const fn product(df1: u8, df2: u8, df3: u8) -> PrivateKeyWeight {
    PrivateKeyWeight::Product { df1, df2, df3 }
}

/// ees401ep1
pub const EES401EP1: NtruParamSet =
    NtruParamSet::new("ees401ep1", [0x00, 0x02, 0x04], 401, 11, 9, PrivateKeyWeight::Single(113));
/// ees449ep1
pub const EES449EP1: NtruParamSet =
    NtruParamSet::new("ees449ep1", [0x00, 0x03, 0x03], 449, 11, 9, PrivateKeyWeight::Single(134));
/// ees677ep1
pub const EES677EP1: NtruParamSet =
    NtruParamSet::new("ees677ep1", [0x00, 0x05, 0x03], 677, 11, 10, PrivateKeyWeight::Single(157));
/// ees1087ep2
pub const EES1087EP2: NtruParamSet =
    NtruParamSet::new("ees1087ep2", [0x00, 0x06, 0x03], 1087, 11, 11, PrivateKeyWeight::Single(120));
/// ees541ep1
pub const EES541EP1: NtruParamSet =
    NtruParamSet::new("ees541ep1", [0x00, 0x02, 0x05], 541, 11, 10, PrivateKeyWeight::Single(49));
/// ees613ep1
pub const EES613EP1: NtruParamSet =
    NtruParamSet::new("ees613ep1", [0x00, 0x03, 0x04], 613, 11, 10, PrivateKeyWeight::Single(55));
/// ees887ep1
pub const EES887EP1: NtruParamSet =
    NtruParamSet::new("ees887ep1", [0x00, 0x05, 0x04], 887, 11, 10, PrivateKeyWeight::Single(81));
/// ees1171ep1
pub const EES1171EP1: NtruParamSet =
    NtruParamSet::new("ees1171ep1", [0x00, 0x06, 0x04], 1171, 11, 11, PrivateKeyWeight::Single(106));
/// ees659ep1
pub const EES659EP1: NtruParamSet =
    NtruParamSet::new("ees659ep1", [0x00, 0x02, 0x06], 659, 11, 10, PrivateKeyWeight::Single(38));
/// ees761ep1
pub const EES761EP1: NtruParamSet =
    NtruParamSet::new("ees761ep1", [0x00, 0x03, 0x05], 761, 11, 10, PrivateKeyWeight::Single(42));
/// ees1087ep1
pub const EES1087EP1: NtruParamSet =
    NtruParamSet::new("ees1087ep1", [0x00, 0x05, 0x05], 1087, 11, 11, PrivateKeyWeight::Single(63));
/// ees1499ep1
pub const EES1499EP1: NtruParamSet =
    NtruParamSet::new("ees1499ep1", [0x00, 0x06, 0x05], 1499, 11, 11, PrivateKeyWeight::Single(79));
/// ees401ep2 (product form)
pub const EES401EP2: NtruParamSet =
    NtruParamSet::new("ees401ep2", [0x00, 0x02, 0x10], 401, 11, 9, product(8, 8, 6));
/// ees439ep1 (product form)
pub const EES439EP1: NtruParamSet =
    NtruParamSet::new("ees439ep1", [0x00, 0x03, 0x10], 439, 11, 9, product(9, 8, 5));
/// ees593ep1 (product form)
pub const EES593EP1: NtruParamSet =
    NtruParamSet::new("ees593ep1", [0x00, 0x05, 0x10], 593, 11, 10, product(10, 10, 8));
/// ees743ep1 (product form)
pub const EES743EP1: NtruParamSet =
    NtruParamSet::new("ees743ep1", [0x00, 0x06, 0x10], 743, 11, 10, product(11, 11, 15));

/// The standard EES parameter sets
pub static EES_CATALOG: [NtruParamSet; 16] = [
    EES401EP1, EES449EP1, EES677EP1, EES1087EP2,
    EES541EP1, EES613EP1, EES887EP1, EES1171EP1,
    EES659EP1, EES761EP1, EES1087EP1, EES1499EP1,
    EES401EP2, EES439EP1, EES593EP1, EES743EP1,
];
