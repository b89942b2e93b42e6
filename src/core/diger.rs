/// Diger: cryptographic digest primitive with CESR encoding.
use tracing::trace;

use crate::core::crypto::{CryptoGateway, Ed25519Gateway};
use crate::core::Matter;
use crate::error::Result;

/// Digest over a serialization, CESR-encoded via the derivation code that
/// names its algorithm.
#[derive(Debug, Clone)]
pub struct Diger {
    matter: Matter,
}

impl Diger {
    /// Construct from raw digest bytes already computed elsewhere.
    pub fn from_raw(raw: &[u8], code: &str) -> Result<Self> {
        let matter = Matter::from_raw(raw, code)?;
        Ok(Self { matter })
    }

    /// Parse from qb64.
    pub fn from_qb64(qb64: &str) -> Result<Self> {
        let matter = Matter::from_qb64(qb64)?;
        Ok(Self { matter })
    }

    /// Compute the digest of `ser` under the algorithm named by `code`.
    pub fn new(ser: &[u8], code: &str) -> Result<Self> {
        let digest = Self::compute_digest(code, ser)?;
        trace!(code, len = ser.len(), "computed digest");
        Self::from_raw(&digest, code)
    }

    fn compute_digest(code: &str, ser: &[u8]) -> Result<Vec<u8>> {
        Ed25519Gateway.digest(code, ser)
    }

    /// Recompute the digest of `ser` and compare against this instance.
    pub fn verify(&self, ser: &[u8]) -> Result<bool> {
        let computed = Self::new(ser, self.matter.code())?;
        Ok(computed.matter.raw() == self.matter.raw())
    }

    /// Compare against another digest: same code compares raw bytes
    /// directly, different codes each verify independently against `ser`.
    pub fn compare(&self, ser: &[u8], other: &Diger) -> Result<bool> {
        if self.matter.code() == other.matter.code() {
            return Ok(self.matter.raw() == other.matter.raw());
        }
        Ok(self.verify(ser)? && other.verify(ser)?)
    }

    pub fn matter(&self) -> &Matter {
        &self.matter
    }

    pub fn code(&self) -> &str {
        self.matter.code()
    }

    pub fn raw(&self) -> &[u8] {
        self.matter.raw()
    }

    pub fn qb64(&self) -> String {
        self.matter.qb64()
    }

    pub fn qb64b(&self) -> Vec<u8> {
        self.matter.qb64b()
    }

    pub fn qb2(&self) -> Result<Vec<u8>> {
        self.matter.qb2()
    }
}
