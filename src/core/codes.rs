/// CESR derivation-code tables: the closed registries that the Matter engine
/// consults on every construct/project. Selector (first character of a code)
/// determines which table a code lives in and how many characters its hard
/// part occupies.
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::{CesrError, Result};

/// Size parameters for one derivation code.
///
/// `hs` (hard size) and `ss` (soft size) are character counts of the code
/// itself. `fs` is the full qb64 length for fixed codes, `None` for variable
/// codes (computed per-instance from the soft size field). `ls` is the raw
/// byte count for fixed codes, or the lead-byte count (0/1/2) for variable
/// codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sizage {
    pub hs: usize,
    pub ss: usize,
    pub fs: Option<usize>,
    pub ls: usize,
}

impl Sizage {
    const fn fixed(hs: usize, rs: usize) -> Self {
        // fs = hs + ceil(rs * 4 / 3), the universal pad-invariant length identity.
        let fs = hs + (rs * 4 + 2) / 3;
        Self {
            hs,
            ss: 0,
            fs: Some(fs),
            ls: rs,
        }
    }

    const fn variable(hs: usize, ss: usize, lead: usize) -> Self {
        Self {
            hs,
            ss,
            fs: None,
            ls: lead,
        }
    }

    /// Raw byte count for a fixed code, `None` for variable codes.
    pub fn raw_size(&self) -> Option<usize> {
        match self.fs {
            Some(_) => Some(self.ls),
            None => None,
        }
    }
}

/// Derivation code constants for every typed primitive in the registry.
pub mod matter_codes {
    pub const ED25519_SEED: &str = "A";
    pub const ED25519N: &str = "B";
    pub const ED25519: &str = "D";
    pub const BLAKE3_256: &str = "E";
    pub const BLAKE2B_256: &str = "F";
    pub const BLAKE2S_256: &str = "G";
    pub const SHA3_256: &str = "H";
    pub const SHA2_256: &str = "I";
    pub const ECDSA_256K1_SEED: &str = "J";
    pub const ED448_SEED: &str = "K";
    pub const ED448: &str = "L";
    pub const SHORT_NUM: &str = "M";
    pub const LONG_NUM: &str = "N";

    pub const SEQNER_128: &str = "0A";
    pub const ED25519_SIG: &str = "0B";
    pub const ECDSA_256K1_SIG: &str = "0C";
    pub const BLAKE3_512: &str = "0D";
    pub const BLAKE2B_512: &str = "0E";
    pub const SHA3_512: &str = "0F";
    pub const SHA2_512: &str = "0G";
    pub const HUGE_NUM: &str = "0H";
    pub const ECDSA_256R1_SIG: &str = "0I";
    pub const VERSER: &str = "0J";

    pub const ECDSA_256K1: &str = "1AAB";
    pub const DATER: &str = "1AAF";
    pub const BIG_NUM: &str = "1AAG";

    /// Tagger: fixed compact code family, one member per base64 token length
    /// (1-10 characters).
    pub const TAG1: &str = "1AAH";
    pub const TAG2: &str = "1AAI";
    pub const TAG3: &str = "1AAJ";
    pub const TAG4: &str = "1AAK";
    pub const TAG5: &str = "1AAL";
    pub const TAG6: &str = "1AAM";
    pub const TAG7: &str = "1AAN";
    pub const TAG8: &str = "1AAO";
    pub const TAG9: &str = "1AAP";
    pub const TAG10: &str = "1AAQ";

    /// Variable-length text/bytes, lead class 0/1/2 (quadlet-aligned raw).
    pub const VAR_LEAD0: &str = "4A";
    pub const VAR_LEAD1: &str = "5A";
    pub const VAR_LEAD2: &str = "6A";
    /// Large variable-length siblings for payloads overflowing the small soft field.
    pub const VAR_BIG_LEAD0: &str = "7AAA";
    pub const VAR_BIG_LEAD1: &str = "8AAA";
    pub const VAR_BIG_LEAD2: &str = "9AAA";
}

/// `(hard-size, soft-size, full-size, raw-size|lead)` for every registered code.
pub static SIZES: Lazy<HashMap<&'static str, Sizage>> = Lazy::new(|| {
    use matter_codes::*;
    let mut m = HashMap::new();

    m.insert(ED25519_SEED, Sizage::fixed(1, 32));
    m.insert(ED25519N, Sizage::fixed(1, 32));
    m.insert(ED25519, Sizage::fixed(1, 32));
    m.insert(BLAKE3_256, Sizage::fixed(1, 32));
    m.insert(BLAKE2B_256, Sizage::fixed(1, 32));
    m.insert(BLAKE2S_256, Sizage::fixed(1, 32));
    m.insert(SHA3_256, Sizage::fixed(1, 32));
    m.insert(SHA2_256, Sizage::fixed(1, 32));
    m.insert(ECDSA_256K1_SEED, Sizage::fixed(1, 32));
    m.insert(ED448_SEED, Sizage::fixed(1, 56));
    m.insert(ED448, Sizage::fixed(1, 56));
    m.insert(SHORT_NUM, Sizage::fixed(1, 2));
    m.insert(LONG_NUM, Sizage::fixed(1, 8));

    m.insert(SEQNER_128, Sizage::fixed(2, 16));
    m.insert(ED25519_SIG, Sizage::fixed(2, 64));
    m.insert(ECDSA_256K1_SIG, Sizage::fixed(2, 64));
    m.insert(BLAKE3_512, Sizage::fixed(2, 64));
    m.insert(BLAKE2B_512, Sizage::fixed(2, 64));
    m.insert(SHA3_512, Sizage::fixed(2, 64));
    m.insert(SHA2_512, Sizage::fixed(2, 64));
    m.insert(HUGE_NUM, Sizage::fixed(2, 16));
    m.insert(ECDSA_256R1_SIG, Sizage::fixed(2, 64));
    m.insert(VERSER, Sizage::fixed(2, 7));

    m.insert(ECDSA_256K1, Sizage::fixed(4, 33));
    m.insert(DATER, Sizage::fixed(4, 24));
    m.insert(BIG_NUM, Sizage::fixed(4, 24));

    m.insert(TAG1, Sizage::fixed(4, 1));
    m.insert(TAG2, Sizage::fixed(4, 2));
    m.insert(TAG3, Sizage::fixed(4, 3));
    m.insert(TAG4, Sizage::fixed(4, 4));
    m.insert(TAG5, Sizage::fixed(4, 5));
    m.insert(TAG6, Sizage::fixed(4, 6));
    m.insert(TAG7, Sizage::fixed(4, 7));
    m.insert(TAG8, Sizage::fixed(4, 8));
    m.insert(TAG9, Sizage::fixed(4, 9));
    m.insert(TAG10, Sizage::fixed(4, 10));

    m.insert(VAR_LEAD0, Sizage::variable(2, 2, 0));
    m.insert(VAR_LEAD1, Sizage::variable(2, 2, 1));
    m.insert(VAR_LEAD2, Sizage::variable(2, 2, 2));
    m.insert(VAR_BIG_LEAD0, Sizage::variable(4, 4, 0));
    m.insert(VAR_BIG_LEAD1, Sizage::variable(4, 4, 1));
    m.insert(VAR_BIG_LEAD2, Sizage::variable(4, 4, 2));

    m
});

/// Selector character -> hard-code size. Only selectors with registered codes
/// are present; an absent selector is `UnknownSelector`.
pub static HARDS: Lazy<HashMap<char, usize>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for c in 'A'..='Z' {
        m.insert(c, 1);
    }
    for c in 'a'..='z' {
        m.insert(c, 1);
    }
    m.insert('0', 2);
    m.insert('1', 4);
    m.insert('4', 2);
    m.insert('5', 2);
    m.insert('6', 2);
    m.insert('7', 4);
    m.insert('8', 4);
    m.insert('9', 4);
    m
});

/// Hard-code size for a selector character (first character of any code).
pub fn hard_size_of(selector: char) -> Result<usize> {
    HARDS
        .get(&selector)
        .copied()
        .ok_or(CesrError::UnknownSelector(selector))
}

/// Size parameters for a full hard+soft code string.
///
/// A code's length is required to equal its selector's registered hard size
/// (this registry never stores soft digits as part of the code identity --
/// they are runtime state for variable codes). A code of the wrong length
/// for its selector is `InvalidCodeSize`, distinct from a code that is the
/// right length but simply unregistered (`UnknownCode`).
pub fn sizage(code: &str) -> Result<Sizage> {
    let first = code.chars().next().ok_or(CesrError::EmptyMaterial)?;
    let hs = hard_size_of(first)?;
    if code.len() != hs {
        return Err(CesrError::InvalidCodeSize {
            code: code.to_string(),
            expected: hs,
            actual: code.len(),
        });
    }
    SIZES
        .get(code)
        .copied()
        .ok_or_else(|| CesrError::UnknownCode(code.to_string()))
}

/// Raw byte count for a *fixed* code. Variable codes must derive raw size
/// from their decoded soft (quadlet count) field instead.
pub fn raw_size(code: &str) -> Result<usize> {
    let sz = sizage(code)?;
    sz.raw_size().ok_or_else(|| {
        CesrError::InvalidSoft(code.to_string(), "variable code has no fixed raw size".into())
    })
}

/// Extract the hard-code portion (selector-determined length) from the front
/// of a qb64 string.
pub fn extract_hard(qb64: &str) -> Result<&str> {
    let first = qb64.chars().next().ok_or(CesrError::EmptyMaterial)?;
    let hs = hard_size_of(first)?;
    if qb64.len() < hs {
        return Err(CesrError::ShortMaterial {
            expected: hs,
            actual: qb64.len(),
        });
    }
    Ok(&qb64[..hs])
}
