/// Signer: private signing key with CESR encoding.
use tracing::trace;

use crate::core::crypto::{CryptoGateway, Ed25519Gateway};
use crate::core::{matter_codes, Matter, Verfer};
use crate::error::{CesrError, Result};

/// Wraps an Ed25519 seed (the `Matter`) together with the `Verfer` for its
/// derived public key.
#[derive(Debug)]
pub struct Signer {
    matter: Matter,
    verfer: Verfer,
}

impl Signer {
    /// Generate a new random signer.
    pub fn new_random(code: &str, transferable: bool) -> Result<Self> {
        use rand::RngCore;
        let mut seed = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut seed);
        Self::from_seed(&seed, code, transferable)
    }

    /// Build from an explicit seed.
    pub fn from_seed(seed: &[u8], code: &str, transferable: bool) -> Result<Self> {
        if code != matter_codes::ED25519_SEED {
            return Err(CesrError::InvalidCode(format!(
                "'{code}' is not a registered signer code (expected {})",
                matter_codes::ED25519_SEED
            )));
        }

        let gateway = Ed25519Gateway;
        let public = gateway.derive_public(seed)?;

        let matter = Matter::from_raw(seed, code)?;
        let verfer_code = if transferable {
            matter_codes::ED25519
        } else {
            matter_codes::ED25519N
        };
        let verfer = Verfer::from_raw(&public, verfer_code)?;

        trace!(code, transferable, "derived signer");
        Ok(Self { matter, verfer })
    }

    /// Parse a qb64-encoded seed.
    pub fn from_qb64(qb64: &str, transferable: bool) -> Result<Self> {
        let matter = Matter::from_qb64(qb64)?;
        if matter.code() != matter_codes::ED25519_SEED {
            return Err(CesrError::InvalidCode(format!(
                "expected {} seed code, got '{}'",
                matter_codes::ED25519_SEED,
                matter.code()
            )));
        }
        Self::from_seed(matter.raw(), matter.code(), transferable)
    }

    /// Sign `ser`, returning a raw 64-byte Ed25519 signature.
    pub fn sign(&self, ser: &[u8]) -> Result<Vec<u8>> {
        Ed25519Gateway.sign(self.matter.raw(), ser)
    }

    /// Sign and attach a multi-sig group index.
    pub fn sign_indexed(&self, ser: &[u8], index: usize) -> Result<IndexedSignature> {
        let signature = self.sign(ser)?;
        Ok(IndexedSignature { signature, index })
    }

    pub fn verfer(&self) -> &Verfer {
        &self.verfer
    }

    pub fn matter(&self) -> &Matter {
        &self.matter
    }

    pub fn qb64(&self) -> String {
        self.matter.qb64()
    }

    pub fn transferable(&self) -> bool {
        self.verfer.code() == matter_codes::ED25519
    }
}

/// A signature paired with the index of its signer within a multi-sig group.
#[derive(Debug, Clone)]
pub struct IndexedSignature {
    pub signature: Vec<u8>,
    pub index: usize,
}
