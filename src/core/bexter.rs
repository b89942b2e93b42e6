/// Bexter: variable-length text primitive for values drawn from the
/// base64url alphabet (tag names, schema identifiers, and other
/// base64url-safe strings). Stores the text as literal bytes over the same
/// variable-code wire family Texter uses for arbitrary bytes, but enforces
/// the base64url charset on construction.
use crate::core::matter::{select_variable_code, Matter};
use crate::error::{CesrError, Result};

#[derive(Debug, Clone)]
pub struct Bexter {
    matter: Matter,
}

fn is_b64_safe(text: &str) -> bool {
    text.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

impl Bexter {
    /// Build from a text value drawn from the base64url alphabet.
    pub fn new(text: &str) -> Result<Self> {
        if !is_b64_safe(text) {
            return Err(CesrError::InvalidFormat(format!(
                "'{text}' is not a base64url-safe string"
            )));
        }
        let raw = text.as_bytes();
        let code = select_variable_code(raw.len());
        let matter = Matter::from_raw(raw, code)?;
        Ok(Self { matter })
    }

    pub fn from_qb64(qb64: &str) -> Result<Self> {
        let matter = Matter::from_qb64(qb64)?;
        Ok(Self { matter })
    }

    /// The original text value.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(self.matter.raw()).into_owned()
    }

    /// Alias for `text()` matching the `.bext` accessor name.
    pub fn bext(&self) -> String {
        self.text()
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

    pub fn matter(&self) -> &Matter {
        &self.matter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_short_text() {
        let b = Bexter::new("hello").unwrap();
        assert_eq!(b.text(), "hello");
        let b2 = Bexter::from_qb64(&b.qb64()).unwrap();
        assert_eq!(b2.text(), "hello");
    }

    #[test]
    fn roundtrip_empty_text() {
        let b = Bexter::new("").unwrap();
        assert_eq!(b.text(), "");
    }

    #[test]
    fn roundtrip_long_text() {
        let text = "A".repeat(100);
        let b = Bexter::new(&text).unwrap();
        assert_eq!(b.text(), text);
    }

    #[test]
    fn non_base64_text_is_rejected() {
        assert!(Bexter::new("not valid base64url!!").is_err());
    }

    #[test]
    fn fixture_bext_roundtrip() {
        let b = Bexter::new("ABC").unwrap();
        assert_eq!(b.bext(), "ABC");
        let b2 = Bexter::from_qb64(&b.qb64()).unwrap();
        assert_eq!(b2.bext(), "ABC");
    }
}
