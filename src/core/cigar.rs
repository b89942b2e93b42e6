/// Cigar: non-indexed signature with an optional attached verifier.
use crate::core::{Matter, Verfer};
use crate::error::{CesrError, Result};

/// Non-indexed signature, used when no multi-sig group index is needed.
pub struct Cigar {
    matter: Matter,
    verfer: Option<Verfer>,
}

impl Cigar {
    pub fn new(raw: &[u8], code: &str, verfer: Option<Verfer>) -> Result<Self> {
        let matter = Matter::from_raw(raw, code)?;
        Ok(Self { matter, verfer })
    }

    pub fn from_qb64(qb64: &str, verfer: Option<Verfer>) -> Result<Self> {
        let matter = Matter::from_qb64(qb64)?;
        Ok(Self { matter, verfer })
    }

    pub fn qb64(&self) -> String {
        self.matter.qb64()
    }

    pub fn code(&self) -> &str {
        self.matter.code()
    }

    pub fn raw(&self) -> &[u8] {
        self.matter.raw()
    }

    pub fn verfer(&self) -> Option<&Verfer> {
        self.verfer.as_ref()
    }

    pub fn set_verfer(&mut self, verfer: Option<Verfer>) {
        self.verfer = verfer;
    }

    pub fn matter(&self) -> &Matter {
        &self.matter
    }

    /// Verify this signature against `message` using the attached verfer.
    pub fn verify(&self, message: &[u8]) -> Result<bool> {
        match &self.verfer {
            Some(verfer) => verfer.verify(self.raw(), message),
            None => Err(CesrError::CryptoFailure(
                "no verfer attached to verify this signature".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{matter_codes, Signer};

    #[test]
    fn creation_and_raw() {
        let sig = vec![0u8; 64];
        let cigar = Cigar::new(&sig, matter_codes::ED25519_SIG, None).unwrap();
        assert_eq!(cigar.code(), matter_codes::ED25519_SIG);
        assert!(cigar.verfer().is_none());
        assert_eq!(cigar.raw().len(), 64);
    }

    #[test]
    fn with_verfer_verifies() {
        let seed = [1u8; 32];
        let signer = Signer::from_seed(&seed, matter_codes::ED25519_SEED, true).unwrap();
        let message = b"test message";
        let sig = signer.sign(message).unwrap();

        let cigar = Cigar::new(&sig, matter_codes::ED25519_SIG, Some(signer.verfer().clone())).unwrap();
        assert!(cigar.verify(message).unwrap());
        assert!(!cigar.verify(b"wrong message").unwrap());
    }

    #[test]
    fn qb64_roundtrip() {
        let sig = vec![1u8; 64];
        let cigar = Cigar::new(&sig, matter_codes::ED25519_SIG, None).unwrap();
        let cigar2 = Cigar::from_qb64(&cigar.qb64(), None).unwrap();
        assert_eq!(cigar.code(), cigar2.code());
        assert_eq!(cigar.raw(), cigar2.raw());
    }

    #[test]
    fn verify_without_verfer_errors() {
        let sig = vec![0u8; 64];
        let cigar = Cigar::new(&sig, matter_codes::ED25519_SIG, None).unwrap();
        assert!(cigar.verify(b"test").is_err());
    }

    #[test]
    fn set_verfer_enables_verification() {
        let seed = [1u8; 32];
        let signer = Signer::from_seed(&seed, matter_codes::ED25519_SEED, true).unwrap();
        let message = b"test message";
        let sig = signer.sign(message).unwrap();

        let mut cigar = Cigar::new(&sig, matter_codes::ED25519_SIG, None).unwrap();
        assert!(cigar.verfer().is_none());
        cigar.set_verfer(Some(signer.verfer().clone()));
        assert!(cigar.verify(message).unwrap());
    }
}
