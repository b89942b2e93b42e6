/// Seqner: ordinal/sequence number primitive, fully qualified for
/// attachment as cryptographic material (event sequence numbers, first-seen
/// ordering numbers).
use crate::core::matter::Matter;
use crate::core::matter_codes;
use crate::error::{CesrError, Result};

/// Uses code `0A` (16 raw bytes, big-endian u128).
pub struct Seqner {
    matter: Matter,
}

impl Seqner {
    pub fn new(sn: u128) -> Result<Self> {
        let raw = sn.to_be_bytes();
        let matter = Matter::from_raw(&raw, matter_codes::SEQNER_128)?;
        Ok(Self { matter })
    }

    /// Parse from a hex string representation.
    pub fn from_snh(snh: &str) -> Result<Self> {
        let sn = u128::from_str_radix(snh, 16)
            .map_err(|e| CesrError::InvalidFormat(format!("invalid hex sequence number: {e}")))?;
        Self::new(sn)
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        let matter = Matter::from_qb64(qb64)?;
        Self::check_code(matter.code())?;
        Ok(Self { matter })
    }

    pub fn from_qb2(qb2: &[u8]) -> Result<Self> {
        let matter = Matter::from_qb2(qb2)?;
        Self::check_code(matter.code())?;
        Ok(Self { matter })
    }

    fn check_code(code: &str) -> Result<()> {
        if code == matter_codes::SEQNER_128 {
            Ok(())
        } else {
            Err(CesrError::InvalidCode(format!(
                "'{code}' is not a Seqner code, expected {}",
                matter_codes::SEQNER_128
            )))
        }
    }

    pub fn sn(&self) -> u128 {
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(self.matter.raw());
        u128::from_be_bytes(bytes)
    }

    pub fn snh(&self) -> String {
        format!("{:x}", self.sn())
    }

    pub fn qb64(&self) -> String {
        self.matter.qb64()
    }

    pub fn qb2(&self) -> Result<Vec<u8>> {
        self.matter.qb2()
    }

    pub fn raw(&self) -> &[u8] {
        self.matter.raw()
    }

    pub fn code(&self) -> &str {
        self.matter.code()
    }

    pub fn matter(&self) -> &Matter {
        &self.matter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_basic() {
        let seqner = Seqner::new(0).unwrap();
        assert_eq!(seqner.sn(), 0);
        assert_eq!(seqner.snh(), "0");
        assert_eq!(seqner.code(), matter_codes::SEQNER_128);

        let seqner = Seqner::new(42).unwrap();
        assert_eq!(seqner.sn(), 42);
        assert_eq!(seqner.snh(), "2a");
    }

    #[test]
    fn large_numbers() {
        let sn = 1_000_000_u128;
        assert_eq!(Seqner::new(sn).unwrap().snh(), "f4240");

        let sn = u64::MAX as u128;
        assert_eq!(Seqner::new(sn).unwrap().snh(), "ffffffffffffffff");
    }

    #[test]
    fn fixture_sn_one_qb64() {
        assert_eq!(
            Seqner::new(1).unwrap().qb64(),
            "0AAAAAAAAAAAAAAAAAAAAAAB"
        );
    }

    #[test]
    fn from_snh_and_invalid() {
        assert_eq!(Seqner::from_snh("2a").unwrap().sn(), 42);
        assert_eq!(Seqner::from_snh("f4240").unwrap().sn(), 1_000_000);
        assert!(Seqner::from_snh("invalid").is_err());
        assert!(Seqner::from_snh("zz").is_err());
    }

    #[test]
    fn qb64_and_qb2_roundtrip() {
        let s1 = Seqner::new(12345).unwrap();
        let s2 = Seqner::from_qb64(&s1.qb64()).unwrap();
        assert_eq!(s1.sn(), s2.sn());
        assert_eq!(s1.qb64(), s2.qb64());

        let s3 = Seqner::from_qb2(&s1.qb2().unwrap()).unwrap();
        assert_eq!(s1.sn(), s3.sn());
    }

    #[test]
    fn invalid_code_is_rejected() {
        let raw = [0u8; 32];
        let matter = Matter::from_raw(&raw, matter_codes::ED25519_SEED).unwrap();
        assert!(Seqner::from_qb64(&matter.qb64()).is_err());
    }

    #[test]
    fn raw_bytes_are_big_endian() {
        let seqner = Seqner::new(42).unwrap();
        let raw = seqner.raw();
        assert_eq!(raw.len(), 16);
        assert_eq!(raw[15], 0x2a);
        for b in &raw[..15] {
            assert_eq!(*b, 0);
        }
    }

    #[test]
    fn equality_across_constructors() {
        let sn = 99999_u128;
        let s1 = Seqner::new(sn).unwrap();
        let s2 = Seqner::from_snh(&format!("{sn:x}")).unwrap();
        let s3 = Seqner::from_qb64(&s1.qb64()).unwrap();
        let s4 = Seqner::from_qb2(&s1.qb2().unwrap()).unwrap();
        assert_eq!(s1.sn(), s2.sn());
        assert_eq!(s1.sn(), s3.sn());
        assert_eq!(s1.sn(), s4.sn());
    }
}
