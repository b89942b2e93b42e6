/// Verfer: public-key verifier with CESR encoding.
use crate::core::crypto::{CryptoGateway, Ed25519Gateway};
use crate::core::{matter_codes, Matter};
use crate::error::{CesrError, Result};

/// Wraps a Matter containing an Ed25519 public key (transferable or not).
#[derive(Debug, Clone)]
pub struct Verfer {
    matter: Matter,
}

impl Verfer {
    pub fn from_raw(raw: &[u8], code: &str) -> Result<Self> {
        Self::check_code(code)?;
        let matter = Matter::from_raw(raw, code)?;
        Ok(Self { matter })
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
        if Self::is_valid_code(code) {
            Ok(())
        } else {
            Err(CesrError::InvalidCode(format!(
                "'{code}' is not a registered verifier code"
            )))
        }
    }

    fn is_valid_code(code: &str) -> bool {
        matches!(code, matter_codes::ED25519 | matter_codes::ED25519N)
    }

    /// Verify `sig` over `ser` with this public key.
    pub fn verify(&self, sig: &[u8], ser: &[u8]) -> Result<bool> {
        match self.matter.code() {
            matter_codes::ED25519 | matter_codes::ED25519N => {
                if sig.len() != 64 {
                    return Err(CesrError::RawMaterialSize {
                        code: "signature".into(),
                        expected: 64,
                        actual: sig.len(),
                    });
                }
                Ed25519Gateway.verify(self.matter.raw(), sig, ser)
            }
            code => Err(CesrError::InvalidCode(format!(
                "'{code}' cannot be used to verify signatures"
            ))),
        }
    }

    pub fn matter(&self) -> &Matter {
        &self.matter
    }

    pub fn code(&self) -> &str {
        self.matter.code()
    }

    /// `true` for a rotatable (transferable) key, `false` for a
    /// non-transferable (basic) one.
    pub fn transferable(&self) -> bool {
        self.matter.code() == matter_codes::ED25519
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
