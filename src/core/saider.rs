/// Saider: Self-Addressing Identifier support.
///
/// A Saider is a digest, computed over a serialization with its own label
/// field blanked out, that is then written back into that same field --
/// making the serialization self-addressing.
use serde_json::Value;
use tracing::trace;

use crate::core::codes::{matter_codes, sizage};
use crate::core::diger::Diger;
use crate::core::matter::Matter;
use crate::error::{CesrError, Result};

#[derive(Debug, Clone)]
pub struct Saider {
    matter: Matter,
}

impl Saider {
    pub fn from_raw(raw: &[u8], code: &str) -> Result<Self> {
        let matter = Matter::from_raw(raw, code)?;
        Ok(Self { matter })
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        let matter = Matter::from_qb64(qb64)?;
        Ok(Self { matter })
    }

    pub fn matter(&self) -> &Matter {
        &self.matter
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

    /// Compute and embed a SAID into `sad`'s `"d"` field under `code`
    /// (default Blake3-256).
    pub fn saidify(sad: &mut Value, code: Option<&str>) -> Result<Self> {
        saidify_with_label(sad, "d", code)
    }

    /// Same as [`Saider::saidify`] with a caller-chosen label field.
    pub fn saidify_with_label(sad: &mut Value, label: &str, code: Option<&str>) -> Result<Self> {
        saidify_with_label(sad, label, code)
    }

    /// Verify that `label` in `sad` equals the SAID that would be computed
    /// for it (checked by recomputing with the placeholder substitution).
    pub fn verify(sad: &Value, label: &str) -> Result<bool> {
        let mut copy = sad.clone();
        let said = match copy.get(label).and_then(Value::as_str) {
            Some(s) => s.to_string(),
            None => return Ok(false),
        };
        let code = match Matter::from_qb64(&said) {
            Ok(m) => m.code().to_string(),
            Err(_) => return Ok(false),
        };
        let saider = saidify_with_label(&mut copy, label, Some(&code))?;
        Ok(saider.qb64() == said)
    }
}

fn saidify_with_label(sad: &mut Value, label: &str, code: Option<&str>) -> Result<Saider> {
    if !sad.is_object() {
        return Err(CesrError::InvalidEvent("SAD must be a JSON object".to_string()));
    }
    let code = code.unwrap_or(matter_codes::BLAKE3_256);
    let fs = sizage(code)?
        .fs
        .ok_or_else(|| CesrError::InvalidCode(format!("'{code}' is not a fixed-size digest code")))?;

    {
        let obj = sad
            .as_object_mut()
            .ok_or_else(|| CesrError::InvalidEvent("SAD must be a JSON object".to_string()))?;
        if !obj.contains_key(label) {
            return Err(CesrError::InvalidEvent(format!(
                "missing label '{label}' in SAD"
            )));
        }
        // Blank to pad characters of the target code's full qb64 length so the
        // digest covers a serialization of the same size the real SAID will have.
        obj.insert(label.to_string(), Value::String("#".repeat(fs)));
    }

    let json_bytes = serde_json::to_vec(sad).map_err(CesrError::JsonError)?;
    let diger = Diger::new(&json_bytes, code)?;
    let saider = Saider::from_raw(diger.raw(), diger.code())?;

    let obj = sad
        .as_object_mut()
        .ok_or_else(|| CesrError::InvalidEvent("SAD must be a JSON object".to_string()))?;
    obj.insert(label.to_string(), Value::String(saider.qb64()));

    trace!(label, code, "saidified SAD");
    Ok(saider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn construction() {
        let raw = vec![1u8; 32];
        let saider = Saider::from_raw(&raw, matter_codes::BLAKE3_256).unwrap();
        assert_eq!(saider.code(), matter_codes::BLAKE3_256);
        assert!(!saider.qb64().is_empty());
    }

    #[test]
    fn saidify_sets_d_field() {
        let mut sad = json!({
            "v": "KERI10JSON000000_",
            "t": "icp",
            "d": "",
            "i": "DSomePrefix",
            "s": "0",
        });

        let saider = Saider::saidify(&mut sad, None).unwrap();
        assert_ne!(sad["d"], "");
        assert_eq!(sad["d"], saider.qb64());
        assert_eq!(saider.qb64().len(), 44);
    }

    #[test]
    fn saidify_missing_field_errors() {
        let mut sad = json!({ "v": "KERI10JSON000000_", "t": "icp" });
        assert!(Saider::saidify(&mut sad, None).is_err());
    }

    #[test]
    fn saidify_with_custom_label() {
        let mut sad = json!({ "v": "x", "custom": "", "data": "test" });
        let saider = Saider::saidify_with_label(&mut sad, "custom", None).unwrap();
        assert_ne!(sad["custom"], "");
        assert_eq!(sad["custom"], saider.qb64());
    }

    #[test]
    fn saidify_is_deterministic() {
        let mut sad1 = json!({ "v": "x", "d": "", "t": "icp" });
        let mut sad2 = sad1.clone();
        let s1 = Saider::saidify(&mut sad1, None).unwrap();
        let s2 = Saider::saidify(&mut sad2, None).unwrap();
        assert_eq!(s1.qb64(), s2.qb64());
    }

    #[test]
    fn verify_roundtrip() {
        let mut sad = json!({ "v": "x", "d": "", "t": "icp" });
        Saider::saidify(&mut sad, None).unwrap();
        assert!(Saider::verify(&sad, "d").unwrap());

        let mut tampered = sad.clone();
        tampered["t"] = Value::String("rot".into());
        assert!(!Saider::verify(&tampered, "d").unwrap());
    }
}
