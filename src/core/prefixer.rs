/// Prefixer: identifier prefix derivation and verification from inception
/// event fields (icp/dip/vcp).
///
/// Supports three derivation methods:
/// - Ed25519N: non-transferable single key (prefix = key)
/// - Ed25519: transferable single key (prefix = key)
/// - Blake3_256: self-addressing (prefix = digest of the event)
use serde_json::Value;

use crate::core::crypto::{CryptoGateway, Ed25519Gateway};
use crate::core::matter::Matter;
use crate::core::matter_codes;
use crate::core::verfer::Verfer;
use crate::error::{CesrError, Result};

const DUMMY: char = '#';
const INCEPTING_ILKS: [&str; 3] = ["icp", "dip", "vcp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivationCode {
    Ed25519N,
    Ed25519,
    Blake3256,
}

impl DerivationCode {
    fn from_code(code: &str) -> Result<Self> {
        match code {
            matter_codes::ED25519N => Ok(Self::Ed25519N),
            matter_codes::ED25519 => Ok(Self::Ed25519),
            matter_codes::BLAKE3_256 => Ok(Self::Blake3256),
            _ => Err(CesrError::InvalidCode(format!(
                "'{code}' is not a registered prefix derivation code"
            ))),
        }
    }
}

pub struct Prefixer {
    matter: Matter,
    derivation: DerivationCode,
}

impl Prefixer {
    pub fn new(matter: Matter) -> Result<Self> {
        let derivation = DerivationCode::from_code(matter.code())?;
        Ok(Self { matter, derivation })
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        Self::new(Matter::from_qb64(qb64)?)
    }

    fn ilk_of(sad: &Value) -> Result<&str> {
        sad.get("t")
            .and_then(Value::as_str)
            .ok_or_else(|| CesrError::InvalidEvent("missing 't' (ilk) field".to_string()))
    }

    fn require_incepting(sad: &Value) -> Result<&str> {
        let ilk = Self::ilk_of(sad)?;
        if !INCEPTING_ILKS.contains(&ilk) {
            return Err(CesrError::InvalidEvent(format!(
                "ilk '{ilk}' cannot derive a prefix (must be icp/dip/vcp)"
            )));
        }
        Ok(ilk)
    }

    /// Derive (or extract) a prefix from an inception event's SAD, under the
    /// derivation `code` naming which of the three supported methods to use.
    pub fn from_sad(sad: &Value, code: &str) -> Result<Self> {
        Self::require_incepting(sad)?;
        let derivation = DerivationCode::from_code(code)?;

        let prefix_from_event = sad.get("i").and_then(Value::as_str).filter(|s| !s.is_empty());

        let matter = if let Some(prefix_qb64) = prefix_from_event {
            let matter = Matter::from_qb64(prefix_qb64)?;
            if matter.code() != code {
                return Err(CesrError::InvalidCode(format!(
                    "event prefix code '{}' does not match requested derivation code '{code}'",
                    matter.code()
                )));
            }
            matter
        } else {
            let (raw, code) = match derivation {
                DerivationCode::Ed25519N => Self::derive_single_key(sad, matter_codes::ED25519N)?,
                DerivationCode::Ed25519 => Self::derive_single_key(sad, matter_codes::ED25519)?,
                DerivationCode::Blake3256 => Self::derive_blake3_256(sad)?,
            };
            Matter::from_raw(&raw, code)?
        };

        Ok(Self { matter, derivation })
    }

    fn derive_single_key(sad: &Value, expected: &'static str) -> Result<(Vec<u8>, &'static str)> {
        let keys = sad
            .get("k")
            .and_then(Value::as_array)
            .ok_or_else(|| CesrError::InvalidEvent("missing 'k' field".to_string()))?;
        if keys.len() != 1 {
            return Err(CesrError::InvalidEvent(format!(
                "single-key derivation needs exactly 1 key, got {}",
                keys.len()
            )));
        }
        let key_qb64 = keys[0]
            .as_str()
            .ok_or_else(|| CesrError::InvalidEvent("key must be a string".to_string()))?;
        let verfer = Verfer::from_qb64(key_qb64)?;
        if verfer.code() != expected {
            return Err(CesrError::InvalidCode(format!(
                "expected key code '{expected}', got '{}'",
                verfer.code()
            )));
        }

        if expected == matter_codes::ED25519N {
            for field in ["n", "b", "a"] {
                if let Some(arr) = sad.get(field).and_then(Value::as_array) {
                    if !arr.is_empty() {
                        return Err(CesrError::InvalidEvent(format!(
                            "non-empty '{field}' for non-transferable identifier"
                        )));
                    }
                }
            }
        }

        Ok((verfer.raw().to_vec(), expected))
    }

    fn derive_blake3_256(sad: &Value) -> Result<(Vec<u8>, &'static str)> {
        let mut copy = sad.clone();
        let dummy = DUMMY.to_string().repeat(44);
        if let Some(obj) = copy.as_object_mut() {
            obj.insert("i".to_string(), Value::String(dummy.clone()));
            obj.insert("d".to_string(), Value::String(dummy));
        }
        let raw_bytes = serde_json::to_vec(&copy).map_err(CesrError::JsonError)?;
        let digest = Ed25519Gateway.digest(matter_codes::BLAKE3_256, &raw_bytes)?;
        Ok((digest, matter_codes::BLAKE3_256))
    }

    /// Verify this prefix against an event's SAD.
    pub fn verify(&self, sad: &Value, prefixed: bool) -> Result<bool> {
        Self::require_incepting(sad)?;
        let ok = match self.derivation {
            DerivationCode::Ed25519N => self.verify_single_key(sad, prefixed, true),
            DerivationCode::Ed25519 => self.verify_single_key(sad, prefixed, false),
            DerivationCode::Blake3256 => self.verify_blake3_256(sad, prefixed),
        };
        Ok(ok.unwrap_or(false))
    }

    fn verify_single_key(&self, sad: &Value, prefixed: bool, nontransferable: bool) -> Result<bool> {
        let pre = self.qb64();
        let keys = match sad.get("k").and_then(Value::as_array) {
            Some(k) => k,
            None => return Ok(false),
        };
        if keys.len() != 1 || keys[0].as_str() != Some(pre.as_str()) {
            return Ok(false);
        }
        if prefixed && sad.get("i").and_then(Value::as_str) != Some(pre.as_str()) {
            return Ok(false);
        }
        if nontransferable {
            if let Some(n) = sad.get("n").and_then(Value::as_array) {
                if !n.is_empty() {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    fn verify_blake3_256(&self, sad: &Value, prefixed: bool) -> Result<bool> {
        let pre = self.qb64();
        let (raw, _) = Self::derive_blake3_256(sad)?;
        if raw != self.matter.raw() {
            return Ok(false);
        }
        if prefixed && sad.get("i").and_then(Value::as_str) != Some(pre.as_str()) {
            return Ok(false);
        }
        Ok(true)
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

    pub fn derivation(&self) -> DerivationCode {
        self.derivation
    }

    pub fn matter(&self) -> &Matter {
        &self.matter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::signer::Signer;
    use serde_json::json;

    fn icp_with_key(key: &str, code: &str) -> Value {
        json!({
            "v": "KERI10JSON000000_",
            "t": "icp",
            "d": "",
            "i": "",
            "s": "0",
            "kt": "1",
            "k": [key],
            "n": [],
            "b": [],
            "a": [],
            "_code_hint": code,
        })
    }

    #[test]
    fn from_qb64() {
        let qb64 = "DAcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcH";
        let prefixer = Prefixer::from_qb64(qb64).unwrap();
        assert_eq!(prefixer.qb64(), qb64);
        assert_eq!(prefixer.code(), matter_codes::ED25519);
    }

    #[test]
    fn ed25519_derivation_and_verify() {
        let signer = Signer::from_seed(&[1u8; 32], matter_codes::ED25519_SEED, true).unwrap();
        let key = signer.verfer().qb64();
        let sad = icp_with_key(&key, matter_codes::ED25519);

        let prefixer = Prefixer::from_sad(&sad, matter_codes::ED25519).unwrap();
        assert_eq!(prefixer.qb64(), key);
        assert_eq!(prefixer.derivation(), DerivationCode::Ed25519);

        let mut prefixed_sad = sad.clone();
        prefixed_sad["i"] = Value::String(key.clone());
        assert!(prefixer.verify(&prefixed_sad, true).unwrap());
    }

    #[test]
    fn ed25519n_requires_empty_next_keys() {
        let signer = Signer::from_seed(&[2u8; 32], matter_codes::ED25519_SEED, false).unwrap();
        let key = signer.verfer().qb64();
        let sad = icp_with_key(&key, matter_codes::ED25519N);

        let prefixer = Prefixer::from_sad(&sad, matter_codes::ED25519N).unwrap();
        assert_eq!(prefixer.derivation(), DerivationCode::Ed25519N);

        let mut bad_sad = sad.clone();
        bad_sad["n"] = json!(["EsomeDigest"]);
        assert!(Prefixer::from_sad(&bad_sad, matter_codes::ED25519N).is_err());
    }

    #[test]
    fn blake3_256_self_addressing() {
        let signer = Signer::from_seed(&[3u8; 32], matter_codes::ED25519_SEED, true).unwrap();
        let key = signer.verfer().qb64();
        let sad = icp_with_key(&key, matter_codes::BLAKE3_256);

        let prefixer = Prefixer::from_sad(&sad, matter_codes::BLAKE3_256).unwrap();
        assert_eq!(prefixer.derivation(), DerivationCode::Blake3256);
        assert!(prefixer.qb64().starts_with('E'));

        let mut prefixed_sad = sad.clone();
        prefixed_sad["i"] = Value::String(prefixer.qb64());
        prefixed_sad["d"] = Value::String(prefixer.qb64());
        assert!(prefixer.verify(&prefixed_sad, true).unwrap());
    }

    #[test]
    fn invalid_ilk_rejected() {
        let sad = json!({
            "v": "KERI10JSON000000_",
            "t": "rot",
            "d": "EaU6JR2nmwyZ-i0d8JZAoTNZH3ULvYAfSVPzhzS6b5CM",
            "i": "EaU6JR2nmwyZ-i0d8JZAoTNZH3ULvYAfSVPzhzS6b5CM",
            "s": "1"
        });
        assert!(Prefixer::from_sad(&sad, matter_codes::BLAKE3_256).is_err());
    }

    #[test]
    fn event_prefix_code_must_match_requested_derivation() {
        let signer = Signer::from_seed(&[4u8; 32], matter_codes::ED25519_SEED, true).unwrap();
        let key = signer.verfer().qb64();
        let mut sad = icp_with_key(&key, matter_codes::ED25519);
        // The 'i' field already names a transferable-key prefix, but the
        // caller asks to derive it as non-transferable -- must be rejected
        // rather than silently returned with a mismatched derivation.
        sad["i"] = Value::String(key);
        assert!(Prefixer::from_sad(&sad, matter_codes::ED25519N).is_err());
    }

    #[test]
    fn multi_key_rejected_for_single_key_derivation() {
        let sad = json!({
            "v": "KERI10JSON000000_",
            "t": "icp",
            "d": "",
            "i": "",
            "s": "0",
            "kt": "2",
            "k": [
                "DSuhyBcPZEZLK-fcw5tzHn2N46wRCG_ZOoeKtWTOunRA",
                "DaU6JR2nmwyZ-i0d8JZAoTNZH3ULvYAfSVPzhzS6b5CM"
            ],
            "n": [],
            "b": [],
            "a": []
        });
        assert!(Prefixer::from_sad(&sad, matter_codes::ED25519).is_err());
    }
}
