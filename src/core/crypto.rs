/// Cryptographic Gateway: the narrow seam between typed primitives and the
/// concrete cryptographic libraries a derivation code refers to.
///
/// Typed primitives (Signer, Verfer, Diger) call into a gateway rather than
/// reaching for a specific crate directly, so the algorithm a code names is
/// the only place that decides which implementation runs.
use blake2::digest::consts::U32;
use blake2::digest::Digest as _;
use blake2::{Blake2b, Blake2b512, Blake2s256};
use sha2::{Sha256, Sha512};
use sha3::{Sha3_256, Sha3_512};

use crate::core::codes::matter_codes;
use crate::error::{CesrError, Result};

type Blake2b256 = Blake2b<U32>;

pub trait CryptoGateway {
    /// Derive the public key bytes for a seed.
    fn derive_public(&self, seed: &[u8]) -> Result<Vec<u8>>;

    /// Sign `message` with `seed`, returning raw signature bytes.
    fn sign(&self, seed: &[u8], message: &[u8]) -> Result<Vec<u8>>;

    /// Verify `sig` over `message` under `public_key`.
    fn verify(&self, public_key: &[u8], sig: &[u8], message: &[u8]) -> Result<bool>;

    /// Compute a digest of `data` under the algorithm named by `code`.
    fn digest(&self, code: &str, data: &[u8]) -> Result<Vec<u8>>;
}

/// Ed25519 gateway backed by `ed25519-dalek`. The default (and, today, only)
/// gateway registered codes resolve to.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ed25519Gateway;

impl CryptoGateway for Ed25519Gateway {
    fn derive_public(&self, seed: &[u8]) -> Result<Vec<u8>> {
        use ed25519_dalek::SigningKey;
        let seed: &[u8; 32] = seed
            .try_into()
            .map_err(|_| CesrError::RawMaterialSize {
                code: "ed25519-seed".into(),
                expected: 32,
                actual: seed.len(),
            })?;
        let signing_key = SigningKey::from_bytes(seed);
        Ok(signing_key.verifying_key().as_bytes().to_vec())
    }

    fn sign(&self, seed: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        use ed25519_dalek::{Signer as _, SigningKey};
        let seed: &[u8; 32] = seed
            .try_into()
            .map_err(|_| CesrError::RawMaterialSize {
                code: "ed25519-seed".into(),
                expected: 32,
                actual: seed.len(),
            })?;
        let signing_key = SigningKey::from_bytes(seed);
        Ok(signing_key.sign(message).to_bytes().to_vec())
    }

    fn verify(&self, public_key: &[u8], sig: &[u8], message: &[u8]) -> Result<bool> {
        use ed25519_dalek::{Signature, Verifier as _, VerifyingKey};
        if sig.len() != 64 {
            return Err(CesrError::RawMaterialSize {
                code: "signature".into(),
                expected: 64,
                actual: sig.len(),
            });
        }
        let public_key: &[u8; 32] = public_key
            .try_into()
            .map_err(|_| CesrError::CryptoFailure("invalid public key length".into()))?;
        let verifying_key =
            VerifyingKey::from_bytes(public_key).map_err(|e| CesrError::CryptoFailure(e.to_string()))?;
        let sig_bytes: &[u8; 64] = sig
            .try_into()
            .map_err(|_| CesrError::CryptoFailure("invalid signature length".into()))?;
        let signature = Signature::from_bytes(sig_bytes);
        Ok(verifying_key.verify(message, &signature).is_ok())
    }

    fn digest(&self, code: &str, data: &[u8]) -> Result<Vec<u8>> {
        match code {
            matter_codes::BLAKE3_256 => Ok(blake3::hash(data).as_bytes().to_vec()),
            matter_codes::BLAKE3_512 => {
                let mut hasher = blake3::Hasher::new();
                hasher.update(data);
                let mut out = [0u8; 64];
                hasher.finalize_xof().fill(&mut out);
                Ok(out.to_vec())
            }
            matter_codes::SHA2_256 => Ok(Sha256::digest(data).to_vec()),
            matter_codes::SHA2_512 => Ok(Sha512::digest(data).to_vec()),
            matter_codes::SHA3_256 => Ok(Sha3_256::digest(data).to_vec()),
            matter_codes::SHA3_512 => Ok(Sha3_512::digest(data).to_vec()),
            matter_codes::BLAKE2S_256 => Ok(Blake2s256::digest(data).to_vec()),
            matter_codes::BLAKE2B_256 => Ok(Blake2b256::digest(data).to_vec()),
            matter_codes::BLAKE2B_512 => Ok(Blake2b512::digest(data).to_vec()),
            other => Err(CesrError::InvalidCode(format!(
                "'{other}' is not a registered digest code"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify_roundtrip() {
        let gw = Ed25519Gateway;
        let seed = [5u8; 32];
        let public = gw.derive_public(&seed).unwrap();
        let message = b"gateway test";
        let sig = gw.sign(&seed, message).unwrap();
        assert!(gw.verify(&public, &sig, message).unwrap());
        assert!(!gw.verify(&public, &sig, b"tampered").unwrap());
    }

    #[test]
    fn rejects_malformed_seed() {
        let gw = Ed25519Gateway;
        assert!(gw.derive_public(&[0u8; 10]).is_err());
    }

    #[test]
    fn digest_dispatches_by_code() {
        let gw = Ed25519Gateway;
        let data = b"gateway digest test";
        assert_eq!(gw.digest(matter_codes::BLAKE3_256, data).unwrap().len(), 32);
        assert_eq!(gw.digest(matter_codes::SHA2_512, data).unwrap().len(), 64);
        assert!(gw.digest("INVALID", data).is_err());
    }
}
